//! JSON export of formats and frame info.
//!
//! The exporters add fields to a caller-owned JSON object. A format is
//! written as:
//!
//! ```json
//! {
//!     "encoding": "PCM",
//!     "channel_count": 2,
//!     "bit_depth": 16,
//!     "sample_rate": 48000,
//!     "pcm": { "interleaved": true, "signed_val": true, "little_endian": true }
//! }
//! ```
//!
//! with an `"aac_lc": { "data_format": "ADTS" }` object in place of `"pcm"`
//! for AAC-LC formats, and neither for unknown encodings. The readers accept
//! the same shape.

use serde_json::{Map, Value, json};

use crate::{
    Error,
    models::{
        AacParams, AudioFormat, Encoding, FrameInfo, PcmParams, aac_data_format_from_str,
        encoding_from_str,
    },
};

fn missing_argument(func: &str) -> Error {
    log::error!("{func}: invalid argument");
    Error::InvalidArgument(format!("{func}: missing input or output"))
}

/// Adds the frame info fields to `node`.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if `info` or `node` is absent
pub fn frame_info_to_json(
    info: Option<&FrameInfo>,
    node: Option<&mut Map<String, Value>>,
) -> Result<(), Error> {
    let (Some(info), Some(node)) = (info, node) else {
        return Err(missing_argument("frame_info_to_json"));
    };

    node.insert("timestamp".into(), info.timestamp.into());
    node.insert("timescale".into(), info.timescale.into());
    node.insert("capture_timestamp".into(), info.capture_timestamp.into());
    node.insert("index".into(), info.index.into());

    Ok(())
}

/// Adds the format fields to `node`, with a nested `pcm` or `aac_lc` object
/// depending on the encoding.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if `format` or `node` is absent
pub fn format_to_json(
    format: Option<&AudioFormat>,
    node: Option<&mut Map<String, Value>>,
) -> Result<(), Error> {
    let (Some(format), Some(node)) = (format, node) else {
        return Err(missing_argument("format_to_json"));
    };

    node.insert("encoding".into(), format.encoding.as_str().into());
    node.insert("channel_count".into(), format.channel_count.into());
    node.insert("bit_depth".into(), format.bit_depth.into());
    node.insert("sample_rate".into(), format.sample_rate.into());

    match format.encoding {
        Encoding::Pcm => {
            node.insert(
                "pcm".into(),
                json!({
                    "interleaved": format.pcm.interleaved,
                    "signed_val": format.pcm.signed_val,
                    "little_endian": format.pcm.little_endian,
                }),
            );
        }
        Encoding::AacLc => {
            node.insert(
                "aac_lc".into(),
                json!({ "data_format": format.aac.data_format.as_str() }),
            );
        }
        Encoding::Unknown => {}
    }

    Ok(())
}

/// Reads a format written by [`format_to_json`].
///
/// Encoding and data format names are resolved like
/// [`encoding_from_str`]: unknown names become `Unknown`. Only the nested
/// object of the active encoding is read.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if a required field is missing or has the
///   wrong type
pub fn format_from_json(value: &Value) -> Result<AudioFormat, Error> {
    let encoding = encoding_from_str(Some(get_str(value, &["encoding"])?));

    let pcm = match encoding {
        Encoding::Pcm => PcmParams::new(
            get_bool(value, &["pcm", "interleaved"])?,
            get_bool(value, &["pcm", "signed_val"])?,
            get_bool(value, &["pcm", "little_endian"])?,
        ),
        Encoding::AacLc | Encoding::Unknown => PcmParams::default(),
    };

    let aac = match encoding {
        Encoding::AacLc => AacParams {
            data_format: aac_data_format_from_str(Some(get_str(
                value,
                &["aac_lc", "data_format"],
            )?)),
        },
        Encoding::Pcm | Encoding::Unknown => AacParams::default(),
    };

    Ok(AudioFormat {
        encoding,
        channel_count: get_u32(value, &["channel_count"])?,
        bit_depth: get_u32(value, &["bit_depth"])?,
        sample_rate: get_u32(value, &["sample_rate"])?,
        pcm,
        aac,
    })
}

/// Reads frame info written by [`frame_info_to_json`].
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if a field is missing or has the wrong type
pub fn frame_info_from_json(value: &Value) -> Result<FrameInfo, Error> {
    Ok(FrameInfo {
        timestamp: get_u64(value, &["timestamp"])?,
        timescale: get_u32(value, &["timescale"])?,
        capture_timestamp: get_u64(value, &["capture_timestamp"])?,
        index: get_u32(value, &["index"])?,
    })
}

// Path walking in the style of `moosicbox_json_utils`, kept local so the
// errors are this crate's `Error`.
fn get<'a>(mut value: &'a Value, path: &[&str]) -> Result<&'a Value, Error> {
    for (i, key) in path.iter().enumerate() {
        value = value.get(key).ok_or_else(|| {
            Error::InvalidArgument(if i > 0 {
                format!("Path '{}' missing value: '{key}'", path[..i].join(" -> "))
            } else {
                format!("Missing value: '{key}'")
            })
        })?;
    }

    Ok(value)
}

fn convert_error(path: &[&str], ty: &str) -> Error {
    Error::InvalidArgument(format!("'{}' is not a valid {ty}", path.join(" -> ")))
}

fn get_str<'a>(value: &'a Value, path: &[&str]) -> Result<&'a str, Error> {
    get(value, path)?
        .as_str()
        .ok_or_else(|| convert_error(path, "string"))
}

fn get_bool(value: &Value, path: &[&str]) -> Result<bool, Error> {
    get(value, path)?
        .as_bool()
        .ok_or_else(|| convert_error(path, "bool"))
}

fn get_u64(value: &Value, path: &[&str]) -> Result<u64, Error> {
    get(value, path)?
        .as_u64()
        .ok_or_else(|| convert_error(path, "u64"))
}

fn get_u32(value: &Value, path: &[&str]) -> Result<u32, Error> {
    u32::try_from(get_u64(value, path)?).map_err(|_| convert_error(path, "u32"))
}
