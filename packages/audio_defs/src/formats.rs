//! Well-known audio formats.
//!
//! The [`PRESETS`] table is the single source of truth for format names in
//! both directions: [`find_by_name`] resolves a name to its format and
//! [`find_by_format`] resolves a format to the first preset equal to it.
//! Every preset is also exported as a constant.

use crate::models::{AacDataFormat, AudioFormat, PcmParams};

const MONO: u32 = 1;
const STEREO: u32 = 2;

/// A named, well-known [`AudioFormat`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Preset {
    /// Lowercase preset name, e.g. `pcm_16b_48000hz_stereo`
    pub name: &'static str,
    /// The format the name stands for
    pub format: AudioFormat,
}

const fn pcm(channel_count: u32, sample_rate: u32) -> AudioFormat {
    AudioFormat::pcm(channel_count, 16, sample_rate, PcmParams::INTERLEAVED_SIGNED_LE)
}

const fn aac_lc(channel_count: u32, sample_rate: u32, data_format: AacDataFormat) -> AudioFormat {
    AudioFormat::aac_lc(channel_count, 16, sample_rate, data_format)
}

macro_rules! presets {
    ($($(#[$meta:meta])* $konst:ident = $name:literal => $format:expr;)*) => {
        $(
            $(#[$meta])*
            pub const $konst: AudioFormat = $format;
        )*

        /// All well-known formats, in lookup order.
        pub static PRESETS: &[Preset] = &[
            $(Preset { name: $name, format: $konst },)*
        ];
    };
}

presets! {
    /// Pulse-code modulation (PCM), 16 bit, interleaved, signed, little-endian
    PCM_16B_8000HZ_MONO = "pcm_16b_8000hz_mono" => pcm(MONO, 8000);
    PCM_16B_8000HZ_STEREO = "pcm_16b_8000hz_stereo" => pcm(STEREO, 8000);
    PCM_16B_11025HZ_MONO = "pcm_16b_11025hz_mono" => pcm(MONO, 11025);
    PCM_16B_11025HZ_STEREO = "pcm_16b_11025hz_stereo" => pcm(STEREO, 11025);
    PCM_16B_12000HZ_MONO = "pcm_16b_12000hz_mono" => pcm(MONO, 12000);
    PCM_16B_12000HZ_STEREO = "pcm_16b_12000hz_stereo" => pcm(STEREO, 12000);
    PCM_16B_16000HZ_MONO = "pcm_16b_16000hz_mono" => pcm(MONO, 16000);
    PCM_16B_16000HZ_STEREO = "pcm_16b_16000hz_stereo" => pcm(STEREO, 16000);
    PCM_16B_22050HZ_MONO = "pcm_16b_22050hz_mono" => pcm(MONO, 22050);
    PCM_16B_22050HZ_STEREO = "pcm_16b_22050hz_stereo" => pcm(STEREO, 22050);
    PCM_16B_24000HZ_MONO = "pcm_16b_24000hz_mono" => pcm(MONO, 24000);
    PCM_16B_24000HZ_STEREO = "pcm_16b_24000hz_stereo" => pcm(STEREO, 24000);
    PCM_16B_32000HZ_MONO = "pcm_16b_32000hz_mono" => pcm(MONO, 32000);
    PCM_16B_32000HZ_STEREO = "pcm_16b_32000hz_stereo" => pcm(STEREO, 32000);
    PCM_16B_44100HZ_MONO = "pcm_16b_44100hz_mono" => pcm(MONO, 44100);
    PCM_16B_44100HZ_STEREO = "pcm_16b_44100hz_stereo" => pcm(STEREO, 44100);
    PCM_16B_48000HZ_MONO = "pcm_16b_48000hz_mono" => pcm(MONO, 48000);
    PCM_16B_48000HZ_STEREO = "pcm_16b_48000hz_stereo" => pcm(STEREO, 48000);
    PCM_16B_64000HZ_MONO = "pcm_16b_64000hz_mono" => pcm(MONO, 64000);
    PCM_16B_64000HZ_STEREO = "pcm_16b_64000hz_stereo" => pcm(STEREO, 64000);
    PCM_16B_88200HZ_MONO = "pcm_16b_88200hz_mono" => pcm(MONO, 88200);
    PCM_16B_88200HZ_STEREO = "pcm_16b_88200hz_stereo" => pcm(STEREO, 88200);
    PCM_16B_96000HZ_MONO = "pcm_16b_96000hz_mono" => pcm(MONO, 96000);
    PCM_16B_96000HZ_STEREO = "pcm_16b_96000hz_stereo" => pcm(STEREO, 96000);
    /// AAC-LC, raw access units, 16 bit
    AAC_LC_16B_8000HZ_MONO_RAW = "aac_lc_16b_8000hz_mono_raw" => aac_lc(MONO, 8000, AacDataFormat::Raw);
    AAC_LC_16B_8000HZ_STEREO_RAW = "aac_lc_16b_8000hz_stereo_raw" => aac_lc(STEREO, 8000, AacDataFormat::Raw);
    AAC_LC_16B_11025HZ_MONO_RAW = "aac_lc_16b_11025hz_mono_raw" => aac_lc(MONO, 11025, AacDataFormat::Raw);
    AAC_LC_16B_11025HZ_STEREO_RAW = "aac_lc_16b_11025hz_stereo_raw" => aac_lc(STEREO, 11025, AacDataFormat::Raw);
    AAC_LC_16B_12000HZ_MONO_RAW = "aac_lc_16b_12000hz_mono_raw" => aac_lc(MONO, 12000, AacDataFormat::Raw);
    AAC_LC_16B_12000HZ_STEREO_RAW = "aac_lc_16b_12000hz_stereo_raw" => aac_lc(STEREO, 12000, AacDataFormat::Raw);
    AAC_LC_16B_16000HZ_MONO_RAW = "aac_lc_16b_16000hz_mono_raw" => aac_lc(MONO, 16000, AacDataFormat::Raw);
    AAC_LC_16B_16000HZ_STEREO_RAW = "aac_lc_16b_16000hz_stereo_raw" => aac_lc(STEREO, 16000, AacDataFormat::Raw);
    AAC_LC_16B_22050HZ_MONO_RAW = "aac_lc_16b_22050hz_mono_raw" => aac_lc(MONO, 22050, AacDataFormat::Raw);
    AAC_LC_16B_22050HZ_STEREO_RAW = "aac_lc_16b_22050hz_stereo_raw" => aac_lc(STEREO, 22050, AacDataFormat::Raw);
    AAC_LC_16B_24000HZ_MONO_RAW = "aac_lc_16b_24000hz_mono_raw" => aac_lc(MONO, 24000, AacDataFormat::Raw);
    AAC_LC_16B_24000HZ_STEREO_RAW = "aac_lc_16b_24000hz_stereo_raw" => aac_lc(STEREO, 24000, AacDataFormat::Raw);
    AAC_LC_16B_32000HZ_MONO_RAW = "aac_lc_16b_32000hz_mono_raw" => aac_lc(MONO, 32000, AacDataFormat::Raw);
    AAC_LC_16B_32000HZ_STEREO_RAW = "aac_lc_16b_32000hz_stereo_raw" => aac_lc(STEREO, 32000, AacDataFormat::Raw);
    AAC_LC_16B_44100HZ_MONO_RAW = "aac_lc_16b_44100hz_mono_raw" => aac_lc(MONO, 44100, AacDataFormat::Raw);
    AAC_LC_16B_44100HZ_STEREO_RAW = "aac_lc_16b_44100hz_stereo_raw" => aac_lc(STEREO, 44100, AacDataFormat::Raw);
    AAC_LC_16B_48000HZ_MONO_RAW = "aac_lc_16b_48000hz_mono_raw" => aac_lc(MONO, 48000, AacDataFormat::Raw);
    AAC_LC_16B_48000HZ_STEREO_RAW = "aac_lc_16b_48000hz_stereo_raw" => aac_lc(STEREO, 48000, AacDataFormat::Raw);
    AAC_LC_16B_64000HZ_MONO_RAW = "aac_lc_16b_64000hz_mono_raw" => aac_lc(MONO, 64000, AacDataFormat::Raw);
    AAC_LC_16B_64000HZ_STEREO_RAW = "aac_lc_16b_64000hz_stereo_raw" => aac_lc(STEREO, 64000, AacDataFormat::Raw);
    AAC_LC_16B_88200HZ_MONO_RAW = "aac_lc_16b_88200hz_mono_raw" => aac_lc(MONO, 88200, AacDataFormat::Raw);
    AAC_LC_16B_88200HZ_STEREO_RAW = "aac_lc_16b_88200hz_stereo_raw" => aac_lc(STEREO, 88200, AacDataFormat::Raw);
    AAC_LC_16B_96000HZ_MONO_RAW = "aac_lc_16b_96000hz_mono_raw" => aac_lc(MONO, 96000, AacDataFormat::Raw);
    AAC_LC_16B_96000HZ_STEREO_RAW = "aac_lc_16b_96000hz_stereo_raw" => aac_lc(STEREO, 96000, AacDataFormat::Raw);
    /// AAC-LC, ADTS bitstream, 16 bit
    AAC_LC_16B_8000HZ_MONO_ADTS = "aac_lc_16b_8000hz_mono_adts" => aac_lc(MONO, 8000, AacDataFormat::Adts);
    AAC_LC_16B_8000HZ_STEREO_ADTS = "aac_lc_16b_8000hz_stereo_adts" => aac_lc(STEREO, 8000, AacDataFormat::Adts);
    AAC_LC_16B_11025HZ_MONO_ADTS = "aac_lc_16b_11025hz_mono_adts" => aac_lc(MONO, 11025, AacDataFormat::Adts);
    AAC_LC_16B_11025HZ_STEREO_ADTS = "aac_lc_16b_11025hz_stereo_adts" => aac_lc(STEREO, 11025, AacDataFormat::Adts);
    AAC_LC_16B_12000HZ_MONO_ADTS = "aac_lc_16b_12000hz_mono_adts" => aac_lc(MONO, 12000, AacDataFormat::Adts);
    AAC_LC_16B_12000HZ_STEREO_ADTS = "aac_lc_16b_12000hz_stereo_adts" => aac_lc(STEREO, 12000, AacDataFormat::Adts);
    AAC_LC_16B_16000HZ_MONO_ADTS = "aac_lc_16b_16000hz_mono_adts" => aac_lc(MONO, 16000, AacDataFormat::Adts);
    AAC_LC_16B_16000HZ_STEREO_ADTS = "aac_lc_16b_16000hz_stereo_adts" => aac_lc(STEREO, 16000, AacDataFormat::Adts);
    AAC_LC_16B_22050HZ_MONO_ADTS = "aac_lc_16b_22050hz_mono_adts" => aac_lc(MONO, 22050, AacDataFormat::Adts);
    AAC_LC_16B_22050HZ_STEREO_ADTS = "aac_lc_16b_22050hz_stereo_adts" => aac_lc(STEREO, 22050, AacDataFormat::Adts);
    AAC_LC_16B_24000HZ_MONO_ADTS = "aac_lc_16b_24000hz_mono_adts" => aac_lc(MONO, 24000, AacDataFormat::Adts);
    AAC_LC_16B_24000HZ_STEREO_ADTS = "aac_lc_16b_24000hz_stereo_adts" => aac_lc(STEREO, 24000, AacDataFormat::Adts);
    AAC_LC_16B_32000HZ_MONO_ADTS = "aac_lc_16b_32000hz_mono_adts" => aac_lc(MONO, 32000, AacDataFormat::Adts);
    AAC_LC_16B_32000HZ_STEREO_ADTS = "aac_lc_16b_32000hz_stereo_adts" => aac_lc(STEREO, 32000, AacDataFormat::Adts);
    AAC_LC_16B_44100HZ_MONO_ADTS = "aac_lc_16b_44100hz_mono_adts" => aac_lc(MONO, 44100, AacDataFormat::Adts);
    AAC_LC_16B_44100HZ_STEREO_ADTS = "aac_lc_16b_44100hz_stereo_adts" => aac_lc(STEREO, 44100, AacDataFormat::Adts);
    AAC_LC_16B_48000HZ_MONO_ADTS = "aac_lc_16b_48000hz_mono_adts" => aac_lc(MONO, 48000, AacDataFormat::Adts);
    AAC_LC_16B_48000HZ_STEREO_ADTS = "aac_lc_16b_48000hz_stereo_adts" => aac_lc(STEREO, 48000, AacDataFormat::Adts);
    AAC_LC_16B_64000HZ_MONO_ADTS = "aac_lc_16b_64000hz_mono_adts" => aac_lc(MONO, 64000, AacDataFormat::Adts);
    AAC_LC_16B_64000HZ_STEREO_ADTS = "aac_lc_16b_64000hz_stereo_adts" => aac_lc(STEREO, 64000, AacDataFormat::Adts);
    AAC_LC_16B_88200HZ_MONO_ADTS = "aac_lc_16b_88200hz_mono_adts" => aac_lc(MONO, 88200, AacDataFormat::Adts);
    AAC_LC_16B_88200HZ_STEREO_ADTS = "aac_lc_16b_88200hz_stereo_adts" => aac_lc(STEREO, 88200, AacDataFormat::Adts);
    AAC_LC_16B_96000HZ_MONO_ADTS = "aac_lc_16b_96000hz_mono_adts" => aac_lc(MONO, 96000, AacDataFormat::Adts);
    AAC_LC_16B_96000HZ_STEREO_ADTS = "aac_lc_16b_96000hz_stereo_adts" => aac_lc(STEREO, 96000, AacDataFormat::Adts);
}

/// Looks up a preset by name, ignoring ASCII case.
#[must_use]
pub fn find_by_name(name: &str) -> Option<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// Looks up the first preset equal to `format`.
#[must_use]
pub fn find_by_format(format: &AudioFormat) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.format == *format)
}
