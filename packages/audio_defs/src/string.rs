//! Conversion between [`AudioFormat`] and its string representation.
//!
//! A format equal to one of the [`PRESETS`](crate::formats::PRESETS) is
//! written as the preset name (`pcm_16b_48000hz_stereo`). Any other format
//! uses the generic form, eight `/`-separated fields:
//!
//! ```text
//! ENCODING/channels/bit_depth/sample_rate/{INTERLEAVED|PLANAR}/{SIGNED|UNSIGNED}/{LE|BE}/AAC_DATA_FORMAT
//! ```
//!
//! The PCM fields are always written, whatever the encoding.

use std::{fmt, str::FromStr};

use crate::{
    Error, formats,
    models::{
        AacParams, AudioFormat, PcmParams, aac_data_format_from_str, encoding_from_str,
    },
};

const DELIMITER: char = '/';
const INTERLEAVED: &str = "INTERLEAVED";
const PLANAR: &str = "PLANAR";
const SIGNED: &str = "SIGNED";
const UNSIGNED: &str = "UNSIGNED";
const LITTLE_ENDIAN: &str = "LE";
const BIG_ENDIAN: &str = "BE";

/// Renders `format` as a preset name, or in the generic form if it matches
/// no preset. Returns `None` for an absent format.
#[must_use]
pub fn format_to_str(format: Option<&AudioFormat>) -> Option<String> {
    format.map(ToString::to_string)
}

/// Parses a preset name (ignoring ASCII case) or the generic form.
///
/// The generic form is lenient: unknown encoding and data format names
/// resolve to their `Unknown` value, numbers that fail to parse become `0`,
/// flag tokens other than `INTERLEAVED`, `SIGNED` and `LE` mean `false`, and
/// tokens after the eighth are ignored. Empty fields are skipped.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if `input` is absent
/// * [`Error::InvalidArgument`] if `input` is not a preset name and has fewer
///   than eight fields
pub fn format_from_str(input: Option<&str>) -> Result<AudioFormat, Error> {
    let Some(value) = input else {
        return Err(Error::InvalidArgument("format_from_str: missing format string".into()));
    };

    if let Some(preset) = formats::find_by_name(value) {
        log::trace!("format_from_str: '{value}' is a known format");
        return Ok(preset.format);
    }

    let mut tokens = value.split(DELIMITER).filter(|x| !x.is_empty());
    let mut next = |field: &str| {
        tokens.next().ok_or_else(|| {
            Error::InvalidArgument(format!("format_from_str: '{value}' is missing the {field}"))
        })
    };

    let encoding = encoding_from_str(Some(next("encoding")?));
    let channel_count = parse_uint(next("channel count")?);
    let bit_depth = parse_uint(next("bit depth")?);
    let sample_rate = parse_uint(next("sample rate")?);
    let interleaved = next("interleaving")? == INTERLEAVED;
    let signed_val = next("sign")? == SIGNED;
    let little_endian = next("endianness")? == LITTLE_ENDIAN;
    let data_format = aac_data_format_from_str(Some(next("AAC data format")?));

    Ok(AudioFormat {
        encoding,
        channel_count,
        bit_depth,
        sample_rate,
        pcm: PcmParams::new(interleaved, signed_val, little_endian),
        aac: AacParams { data_format },
    })
}

/// Parses the leading decimal digits of `token` (after an optional `+`), `0`
/// if there are none or they overflow.
fn parse_uint(token: &str) -> u32 {
    let token = token.trim_start();
    let token = token.strip_prefix('+').unwrap_or(token);
    let digits = token
        .find(|c: char| !c.is_ascii_digit())
        .map_or(token, |end| &token[..end]);

    digits.parse().unwrap_or(0)
}

/// [`Display`](fmt::Display) adapter that always writes the generic form.
#[derive(Copy, Clone, Debug)]
pub struct Generic<'a>(&'a AudioFormat);

impl fmt::Display for Generic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = self.0;

        write!(
            f,
            "{encoding}/{channels}/{bit_depth}/{rate}/{interleaved}/{signed}/{endian}/{data_format}",
            encoding = format.encoding,
            channels = format.channel_count,
            bit_depth = format.bit_depth,
            rate = format.sample_rate,
            interleaved = if format.pcm.interleaved { INTERLEAVED } else { PLANAR },
            signed = if format.pcm.signed_val { SIGNED } else { UNSIGNED },
            endian = if format.pcm.little_endian { LITTLE_ENDIAN } else { BIG_ENDIAN },
            data_format = format.aac.data_format,
        )
    }
}

impl AudioFormat {
    /// Displays this format in the generic form, even if it matches a preset.
    #[must_use]
    pub const fn generic(&self) -> Generic<'_> {
        Generic(self)
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(preset) = formats::find_by_format(self) {
            return f.write_str(preset.name);
        }

        log::trace!("format_to_str: no known format for {}", self.generic());
        fmt::Display::fmt(&self.generic(), f)
    }
}

impl FromStr for AudioFormat {
    type Err = Error;

    /// See [`format_from_str`].
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`] if `s` is not a preset name and has fewer
    ///   than eight fields
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format_from_str(Some(s))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        formats::*,
        models::{AacDataFormat, Encoding},
    };

    #[test_log::test]
    fn test_format_from_str_invalid_arguments() {
        assert!(matches!(format_from_str(None), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            format_from_str(Some("ABCDE")),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            format_from_str(Some("A/B/C/D/E//")),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            format_from_str(Some("PCM/2/16/48000/INTERLEAVED/SIGNED/LE")),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(format_from_str(Some("")), Err(Error::InvalidArgument(_))));
    }

    #[test_log::test]
    fn test_format_from_str_generic() {
        let fmt = format_from_str(Some("UNKNOWN/0/0/0/PLANAR/UNSIGNED/BE/UNKNOWN")).unwrap();
        assert_eq!(fmt, AudioFormat::default());
        assert!(!fmt.is_valid());

        let fmt = format_from_str(Some("AAC_LC/1/24/44100/PLANAR/UNSIGNED/BE/RAW")).unwrap();
        assert_eq!(fmt, AudioFormat::aac_lc(1, 24, 44100, AacDataFormat::Raw));

        let fmt =
            format_from_str(Some("PCM/1/24/44100/INTERLEAVED/SIGNED/LE/UNKNOWN")).unwrap();
        assert_eq!(fmt, AudioFormat::pcm(1, 24, 44100, PcmParams::INTERLEAVED_SIGNED_LE));
    }

    #[test_log::test]
    fn test_format_from_str_known_formats() {
        assert_eq!(
            format_from_str(Some("aac_lc_16b_44100hz_mono_raw")),
            Ok(AAC_LC_16B_44100HZ_MONO_RAW)
        );
        assert_eq!(
            format_from_str(Some("aac_lc_16b_48000hz_stereo_raw")),
            Ok(AAC_LC_16B_48000HZ_STEREO_RAW)
        );
        assert_eq!(
            format_from_str(Some("pcm_16b_44100hz_mono")),
            Ok(PCM_16B_44100HZ_MONO)
        );
        assert_eq!(
            format_from_str(Some("PCM_16B_48000HZ_STEREO")),
            Ok(PCM_16B_48000HZ_STEREO)
        );
    }

    #[test_log::test]
    fn test_format_from_str_is_lenient() {
        let fmt = format_from_str(Some("mp3/x/16abc/ 48000/interleaved/signed/le/latm")).unwrap();

        assert_eq!(fmt.encoding, Encoding::Unknown);
        assert_eq!(fmt.channel_count, 0);
        assert_eq!(fmt.bit_depth, 16);
        assert_eq!(fmt.sample_rate, 48000);
        assert_eq!(fmt.pcm, PcmParams::default());
        assert_eq!(fmt.aac.data_format, AacDataFormat::Unknown);
    }

    #[test_log::test]
    fn test_format_from_str_accepts_plus_sign() {
        let fmt = format_from_str(Some("PCM/+2/+16/+48000/INTERLEAVED/SIGNED/LE/UNKNOWN")).unwrap();
        assert_eq!(fmt, PCM_16B_48000HZ_STEREO);
    }

    #[test_log::test]
    fn test_format_from_str_overflow_is_zero() {
        let fmt = format_from_str(Some("PCM/99999999999/16/8000/PLANAR/SIGNED/LE/RAW")).unwrap();
        assert_eq!(fmt.channel_count, 0);
    }

    #[test_log::test]
    fn test_format_from_str_skips_empty_fields_and_ignores_extra_ones() {
        let fmt =
            format_from_str(Some("/aac_lc//2/16/32000/PLANAR/UNSIGNED/BE/adif/extra/fields"))
                .unwrap();

        assert_eq!(fmt, AudioFormat::aac_lc(2, 16, 32000, AacDataFormat::Adif));
    }

    #[test_log::test]
    fn test_format_from_str_keeps_inactive_fields() {
        let fmt = format_from_str(Some("PCM/1/16/44100/PLANAR/UNSIGNED/BE/ADTS")).unwrap();
        assert_eq!(fmt.aac.data_format, AacDataFormat::Adts);
        assert_eq!(fmt.generic().to_string(), "PCM/1/16/44100/PLANAR/UNSIGNED/BE/ADTS");
    }

    #[test_log::test]
    fn test_format_to_str() {
        assert_eq!(format_to_str(None), None);

        let mut fmt = AudioFormat::default();
        let to_str = |fmt: &AudioFormat| format_to_str(Some(fmt)).unwrap();

        assert_eq!(to_str(&fmt), "UNKNOWN/0/0/0/PLANAR/UNSIGNED/BE/UNKNOWN");

        fmt.encoding = Encoding::AacLc;
        assert_eq!(to_str(&fmt), "AAC_LC/0/0/0/PLANAR/UNSIGNED/BE/UNKNOWN");

        fmt.channel_count = 1;
        assert_eq!(to_str(&fmt), "AAC_LC/1/0/0/PLANAR/UNSIGNED/BE/UNKNOWN");

        fmt.bit_depth = 16;
        assert_eq!(to_str(&fmt), "AAC_LC/1/16/0/PLANAR/UNSIGNED/BE/UNKNOWN");

        fmt.aac.data_format = AacDataFormat::Adts;
        assert_eq!(to_str(&fmt), "AAC_LC/1/16/0/PLANAR/UNSIGNED/BE/ADTS");

        fmt.sample_rate = 44100;
        assert_eq!(to_str(&fmt), "aac_lc_16b_44100hz_mono_adts");

        fmt.encoding = Encoding::Pcm;
        assert_eq!(to_str(&fmt), "PCM/1/16/44100/PLANAR/UNSIGNED/BE/ADTS");

        fmt.pcm.interleaved = true;
        assert_eq!(to_str(&fmt), "PCM/1/16/44100/INTERLEAVED/UNSIGNED/BE/ADTS");

        fmt.pcm.signed_val = true;
        assert_eq!(to_str(&fmt), "PCM/1/16/44100/INTERLEAVED/SIGNED/BE/ADTS");

        fmt.pcm.little_endian = true;
        assert_eq!(to_str(&fmt), "pcm_16b_44100hz_mono");

        fmt.channel_count = 2;
        assert_eq!(to_str(&fmt), "pcm_16b_44100hz_stereo");

        fmt.sample_rate = 96000;
        assert_eq!(to_str(&fmt), "pcm_16b_96000hz_stereo");
    }

    #[test_log::test]
    fn test_generic_form_round_trips() {
        let formats = [
            AudioFormat::pcm(6, 24, 48000, PcmParams::new(false, true, false)),
            AudioFormat::pcm(1, 8, 8000, PcmParams::new(true, false, true)),
            AudioFormat::aac_lc(2, 16, 48000, AacDataFormat::Adif),
            AudioFormat::aac_lc(8, 16, 44100, AacDataFormat::Raw),
        ];

        for fmt in formats {
            let text = format_to_str(Some(&fmt)).unwrap();
            let parsed: AudioFormat = text.parse().unwrap();

            assert_eq!(parsed, fmt, "{text}");
            assert_eq!(parsed.pcm, fmt.pcm, "{text}");
            assert_eq!(parsed.aac, fmt.aac, "{text}");
        }
    }

    #[test_log::test]
    fn test_generic_ignores_presets() {
        assert_eq!(
            PCM_16B_8000HZ_MONO.generic().to_string(),
            "PCM/1/16/8000/INTERLEAVED/SIGNED/LE/UNKNOWN"
        );
        assert_eq!(
            AAC_LC_16B_64000HZ_STEREO_RAW.generic().to_string(),
            "AAC_LC/2/16/64000/PLANAR/UNSIGNED/BE/RAW"
        );
    }

    #[test_log::test]
    fn test_parse_uint() {
        assert_eq!(parse_uint("44100"), 44100);
        assert_eq!(parse_uint("  12"), 12);
        assert_eq!(parse_uint("12kHz"), 12);
        assert_eq!(parse_uint("-1"), 0);
        assert_eq!(parse_uint("+5"), 5);
        assert_eq!(parse_uint(" +48000hz"), 48000);
        assert_eq!(parse_uint("++5"), 0);
        assert_eq!(parse_uint("+"), 0);
        assert_eq!(parse_uint("B"), 0);
        assert_eq!(parse_uint("4294967295"), u32::MAX);
        assert_eq!(parse_uint("4294967296"), 0);
    }
}
