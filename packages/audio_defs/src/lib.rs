//! Audio format definitions shared across audio pipeline components.
//!
//! This crate describes the encoding of an audio stream ([`AudioFormat`]) and
//! provides the operations components need to negotiate formats with each
//! other: validation, encoding-aware comparison, capability intersection,
//! string round-tripping and JSON export.
//!
//! # Main Types
//!
//! * [`AudioFormat`] - Encoding, channel layout, bit depth and sample rate of a stream
//! * [`Encoding`] / [`AacDataFormat`] - Encoding and AAC transport enumerations
//! * [`FrameInfo`] / [`AudioFrame`] - Per-frame timing metadata
//! * [`formats`] - The table of well-known presets (`pcm_16b_48000hz_stereo`, ...)
//!
//! # Example
//!
//! ```rust
//! use moosicbox_audio_defs::{AudioFormat, PcmParams, format_intersect, formats};
//!
//! let format: AudioFormat = "pcm_16b_48000hz_stereo".parse().unwrap();
//! assert_eq!(format, formats::PCM_16B_48000HZ_STEREO);
//!
//! let caps = [formats::PCM_16B_44100HZ_STEREO, formats::PCM_16B_48000HZ_STEREO];
//! assert!(format_intersect(Some(&format), Some(&caps[..])));
//!
//! let generic = AudioFormat::pcm(2, 24, 48000, PcmParams::INTERLEAVED_SIGNED_LE);
//! assert_eq!(generic.to_string(), "PCM/2/24/48000/INTERLEAVED/SIGNED/LE/UNKNOWN");
//! ```
//!
//! # Features
//!
//! * `json` - JSON export/import of formats and frame info via `serde_json`
//! * `serde` - `Serialize`/`Deserialize` derives on all model types

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error;

pub mod formats;
pub mod models;
pub mod string;

#[cfg(feature = "json")]
pub mod json;

pub use models::{
    AacDataFormat, AacParams, AudioFormat, AudioFrame, Encoding, FrameInfo, PcmParams,
    WaveFormatTag, aac_data_format_from_str, aac_data_format_repr_to_str,
    aac_data_format_to_str, encoding_from_str, encoding_repr_to_str, encoding_to_str,
};
pub use string::{format_from_str, format_to_str};

#[cfg(feature = "json")]
pub use json::{format_from_json, format_to_json, frame_info_from_json, frame_info_to_json};

/// Errors returned by the audio format operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required input was absent or could not be used.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A name did not map to any known value.
    #[error("Unrecognized value: {0:?}")]
    Unrecognized(String),
}

/// Checks whether `format` is structurally valid.
///
/// A format is valid when its encoding is known, its AAC data format is known
/// (AAC-LC only) and its channel count, bit depth and sample rate are all
/// non-zero. An absent format is never valid.
#[must_use]
pub fn is_format_valid(format: Option<&AudioFormat>) -> bool {
    format.is_some_and(AudioFormat::is_valid)
}

/// Compares two formats, ignoring the parameters of the inactive encoding.
///
/// Two absent formats are equal; an absent and a present format are not.
#[must_use]
pub fn format_cmp(f1: Option<&AudioFormat>, f2: Option<&AudioFormat>) -> bool {
    match (f1, f2) {
        (None, None) => true,
        (Some(f1), Some(f2)) => f1 == f2,
        _ => false,
    }
}

/// Checks whether `format` is valid and matches at least one of `caps`.
///
/// Returns `false` when `caps` is absent or empty.
#[must_use]
pub fn format_intersect(format: Option<&AudioFormat>, caps: Option<&[AudioFormat]>) -> bool {
    match (format, caps) {
        (Some(format), Some(caps)) => format.intersects(caps),
        _ => false,
    }
}
