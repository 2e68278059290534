#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Basic usage example for `moosicbox_audio_defs`
//!
//! This example demonstrates:
//! - Looking up well-known formats by name
//! - Parsing and printing the generic string form
//! - Validating formats and intersecting them with a capability list
//! - Exporting a frame's format and timing info as JSON

use moosicbox_audio_defs::{
    AacDataFormat, AudioFormat, AudioFrame, Error, FrameInfo, format_intersect, format_to_json,
    formats, frame_info_to_json,
};
use serde_json::{Map, Value};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== MoosicBox Audio Defs Basic Usage Example ===\n");

    // Step 1: Resolve well-known formats by name
    println!("Step 1: Looking up presets...");
    let preferred: AudioFormat = "pcm_16b_48000hz_stereo".parse()?;
    println!("pcm_16b_48000hz_stereo -> {}\n", preferred.generic());

    // Step 2: Parse a format that has no preset name
    println!("Step 2: Parsing the generic form...");
    let hi_res: AudioFormat = "PCM/2/24/96000/INTERLEAVED/SIGNED/LE/UNKNOWN".parse()?;
    println!("Parsed: {hi_res} (valid: {})\n", hi_res.is_valid());

    // Step 3: Lenient parsing, strict validation
    println!("Step 3: Parsing a format with unknown names...");
    let unknown: AudioFormat = "OPUS/2/16/48000/PLANAR/SIGNED/LE/UNKNOWN".parse()?;
    println!("Parsed: {unknown} (valid: {})\n", unknown.is_valid());

    // Step 4: Negotiate against a sink's capabilities
    println!("Step 4: Intersecting with capabilities...");
    let caps = [
        formats::PCM_16B_44100HZ_STEREO,
        formats::PCM_16B_48000HZ_STEREO,
        formats::AAC_LC_16B_48000HZ_STEREO_ADTS,
    ];
    for candidate in [
        preferred,
        hi_res,
        AudioFormat::aac_lc(2, 16, 48000, AacDataFormat::Adts),
        AudioFormat::aac_lc(2, 16, 48000, AacDataFormat::Raw),
    ] {
        println!(
            "{candidate}: {}",
            if format_intersect(Some(&candidate), Some(&caps[..])) {
                "supported"
            } else {
                "not supported"
            }
        );
    }
    println!();

    // Step 5: Export a frame as JSON
    println!("Step 5: Exporting a frame as JSON...");
    let frame = AudioFrame {
        format: preferred,
        info: FrameInfo {
            timestamp: 48_000,
            timescale: 48_000,
            capture_timestamp: 0,
            index: 50,
        },
    };

    let mut format = Map::new();
    format_to_json(Some(&frame.format), Some(&mut format))?;
    let mut info = Map::new();
    frame_info_to_json(Some(&frame.info), Some(&mut info))?;

    let mut node = Map::new();
    node.insert("format".into(), Value::Object(format));
    node.insert("info".into(), Value::Object(info));

    println!(
        "{}",
        serde_json::to_string_pretty(&Value::Object(node)).unwrap_or_default()
    );

    log::info!("Done");

    Ok(())
}
