//! Audio format and frame models.
//!
//! [`AudioFormat`] keeps the parameters of every encoding side by side
//! ([`PcmParams`] and [`AacParams`]); only the ones matching
//! [`AudioFormat::encoding`] are significant. Comparison and validation ignore
//! the others, while the generic string form still renders them.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator as _;
use strum_macros::{EnumIter, FromRepr, IntoStaticStr};

use crate::Error;

const UNKNOWN: &str = "UNKNOWN";

/// Audio encoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, FromRepr, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u32)]
pub enum Encoding {
    /// Unknown encoding, never valid in a populated format
    #[default]
    Unknown = 0,
    /// Pulse-code modulation
    Pcm = 1,
    /// ISO/IEC 14496-3 MPEG-4 Audio, AAC Low Complexity profile
    AacLc = 2,
}

impl Encoding {
    /// Canonical name of the encoding (`"PCM"`, `"AAC_LC"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    /// Parses a canonical encoding name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// * [`Error::Unrecognized`] if the name matches no encoding
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|x| s.eq_ignore_ascii_case(x.as_str()))
            .ok_or_else(|| Error::Unrecognized(s.to_string()))
    }
}

/// AAC bitstream transport framing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, FromRepr, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u32)]
pub enum AacDataFormat {
    /// Unknown data format
    #[default]
    Unknown = 0,
    /// Raw access units, packet based since there is no sync layer
    Raw = 1,
    /// ADIF bitstream
    Adif = 2,
    /// ADTS bitstream
    Adts = 3,
}

impl AacDataFormat {
    /// Canonical name of the data format (`"RAW"`, `"ADTS"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for AacDataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AacDataFormat {
    type Err = Error;

    /// Parses a canonical data format name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// * [`Error::Unrecognized`] if the name matches no data format
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|x| s.eq_ignore_ascii_case(x.as_str()))
            .ok_or_else(|| Error::Unrecognized(s.to_string()))
    }
}

/// Format tags from the WAVE and AVI codec registry.
///
/// Informational only, none of the format operations use it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, FromRepr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u16)]
pub enum WaveFormatTag {
    /// Unknown or unregistered tag
    #[default]
    Unknown = 0,
    /// Microsoft PCM (uncompressed)
    Pcm = 1,
    /// Microsoft ADPCM
    Adpcm = 2,
    /// Microsoft IEEE float
    IeeeFloat = 3,
    /// ITU G.711 a-law
    Alaw = 6,
    /// ITU G.711 u-law
    Mulaw = 7,
    /// Antex G.723 ADPCM
    G723Adpcm = 0x14,
}

impl From<WaveFormatTag> for u16 {
    fn from(value: WaveFormatTag) -> Self {
        value as Self
    }
}

impl TryFrom<u16> for WaveFormatTag {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| Error::Unrecognized(format!("{value:#06x}")))
    }
}

/// PCM parameters, significant only for [`Encoding::Pcm`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct PcmParams {
    /// `true` for interleaved channels, `false` for planar
    pub interleaved: bool,
    /// `true` for signed samples
    pub signed_val: bool,
    /// `true` for little-endian samples
    pub little_endian: bool,
}

impl PcmParams {
    /// Interleaved, signed, little-endian samples.
    pub const INTERLEAVED_SIGNED_LE: Self = Self::new(true, true, true);

    /// Builds PCM parameters from the three sample layout flags.
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn new(interleaved: bool, signed_val: bool, little_endian: bool) -> Self {
        Self {
            interleaved,
            signed_val,
            little_endian,
        }
    }
}

/// AAC parameters, significant only for [`Encoding::AacLc`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AacParams {
    /// Transport framing of the AAC bitstream
    pub data_format: AacDataFormat,
}

/// Description of an audio stream's encoding.
///
/// Equality is encoding-aware: the PCM parameters are only compared for PCM
/// formats and the AAC parameters only for AAC-LC formats.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AudioFormat {
    /// Encoding of the stream
    pub encoding: Encoding,
    /// Number of channels (1 = mono, 2 = stereo, ...)
    pub channel_count: u32,
    /// Bits per sample
    pub bit_depth: u32,
    /// Samples per second, in Hz
    pub sample_rate: u32,
    /// PCM sample layout, ignored unless the encoding is PCM
    pub pcm: PcmParams,
    /// AAC parameters, ignored unless the encoding is AAC-LC
    pub aac: AacParams,
}

impl AudioFormat {
    /// Builds a PCM format.
    #[must_use]
    pub const fn pcm(channel_count: u32, bit_depth: u32, sample_rate: u32, pcm: PcmParams) -> Self {
        Self {
            encoding: Encoding::Pcm,
            channel_count,
            bit_depth,
            sample_rate,
            pcm,
            aac: AacParams {
                data_format: AacDataFormat::Unknown,
            },
        }
    }

    /// Builds an AAC-LC format. The PCM parameters are all `false`.
    #[must_use]
    pub const fn aac_lc(
        channel_count: u32,
        bit_depth: u32,
        sample_rate: u32,
        data_format: AacDataFormat,
    ) -> Self {
        Self {
            encoding: Encoding::AacLc,
            channel_count,
            bit_depth,
            sample_rate,
            pcm: PcmParams::new(false, false, false),
            aac: AacParams { data_format },
        }
    }

    /// Checks that the encoding (and for AAC-LC the data format) is known
    /// and that channel count, bit depth and sample rate are non-zero.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self.encoding {
            Encoding::Pcm => {}
            Encoding::AacLc => {
                if self.aac.data_format == AacDataFormat::Unknown {
                    return false;
                }
            }
            Encoding::Unknown => return false,
        }

        self.channel_count > 0 && self.bit_depth > 0 && self.sample_rate > 0
    }

    /// Checks that this format is valid and equal to one of `caps`.
    #[must_use]
    pub fn intersects(&self, caps: &[Self]) -> bool {
        self.is_valid() && caps.iter().any(|cap| cap == self)
    }

    /// Name of the first well-known preset equal to this format, if any.
    #[must_use]
    pub fn preset_name(&self) -> Option<&'static str> {
        crate::formats::find_by_format(self).map(|preset| preset.name)
    }
}

impl PartialEq for AudioFormat {
    fn eq(&self, other: &Self) -> bool {
        let common = self.encoding == other.encoding
            && self.channel_count == other.channel_count
            && self.bit_depth == other.bit_depth
            && self.sample_rate == other.sample_rate;

        common
            && match self.encoding {
                Encoding::Pcm => self.pcm == other.pcm,
                Encoding::AacLc => self.aac.data_format == other.aac.data_format,
                Encoding::Unknown => true,
            }
    }
}

impl Eq for AudioFormat {}

/// Timing metadata of a single audio frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameInfo {
    /// Frame timestamp in units of `timescale`
    pub timestamp: u64,
    /// Time scale in Hz
    pub timescale: u32,
    /// Original capture timestamp in microseconds on the monotonic clock,
    /// or 0 if unknown
    pub capture_timestamp: u64,
    /// Frame sequence number
    pub index: u32,
}

/// An audio frame's format along with its timing metadata.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AudioFrame {
    pub format: AudioFormat,
    pub info: FrameInfo,
}

/// Canonical name of `encoding`, see [`Encoding::as_str`].
#[must_use]
pub fn encoding_to_str(encoding: Encoding) -> &'static str {
    encoding.as_str()
}

/// Name of the encoding with raw discriminant `value`, or `"UNKNOWN"` if
/// `value` is out of range.
#[must_use]
pub fn encoding_repr_to_str(value: u32) -> &'static str {
    Encoding::from_repr(value).map_or(UNKNOWN, Encoding::as_str)
}

/// Looks up an encoding by name, ignoring ASCII case.
///
/// Absent and unrecognized names resolve to [`Encoding::Unknown`].
#[must_use]
pub fn encoding_from_str(name: Option<&str>) -> Encoding {
    let Some(name) = name else {
        log::error!("encoding_from_str: invalid argument: missing name");
        return Encoding::Unknown;
    };

    name.parse().unwrap_or_else(|_| {
        log::warn!("encoding_from_str: unknown encoding '{name}'");
        Encoding::Unknown
    })
}

/// Canonical name of `data_format`, see [`AacDataFormat::as_str`].
#[must_use]
pub fn aac_data_format_to_str(data_format: AacDataFormat) -> &'static str {
    data_format.as_str()
}

/// Name of the AAC data format with raw discriminant `value`, or
/// `"UNKNOWN"` if `value` is out of range.
#[must_use]
pub fn aac_data_format_repr_to_str(value: u32) -> &'static str {
    AacDataFormat::from_repr(value).map_or(UNKNOWN, AacDataFormat::as_str)
}

/// Looks up an AAC data format by name, ignoring ASCII case.
///
/// Absent and unrecognized names resolve to [`AacDataFormat::Unknown`].
#[must_use]
pub fn aac_data_format_from_str(name: Option<&str>) -> AacDataFormat {
    let Some(name) = name else {
        log::error!("aac_data_format_from_str: invalid argument: missing name");
        return AacDataFormat::Unknown;
    };

    name.parse().unwrap_or_else(|_| {
        log::warn!("aac_data_format_from_str: unknown data format '{name}'");
        AacDataFormat::Unknown
    })
}
