//! Cross-encoding test suite for pcm-codec-core
//!
//! Exercises the full unpack/pack path for every encoding against
//! generated signals.

use crate::error::*;
use crate::stream::*;
use crate::types::*;

/// Common test utilities
pub mod utils {
    /// Generate a sine wave with the given peak amplitude (0.0..1.0)
    pub fn generate_test_signal(
        length: usize,
        sample_rate: u32,
        frequency: f32,
        amplitude: f32,
    ) -> Vec<f32> {
        (0..length)
            .map(|i| {
                let t = i as f32 / sample_rate as f32;
                (2.0 * std::f32::consts::PI * frequency * t).sin() * amplitude
            })
            .collect()
    }

    /// Generate a deterministic noise-like signal
    pub fn generate_white_noise(length: usize, amplitude: f32) -> Vec<f32> {
        (0..length)
            .map(|i| ((i as f32 * 0.7).sin() + (i as f32 * 1.3).cos()) * amplitude * 0.5)
            .collect()
    }

    /// Signal-to-noise ratio of `decoded` against `original`, in dB
    pub fn calculate_snr(original: &[f32], decoded: &[f32]) -> f64 {
        let signal: f64 = original.iter().map(|&s| f64::from(s).powi(2)).sum();
        let noise: f64 = original
            .iter()
            .zip(decoded)
            .map(|(&a, &b)| (f64::from(a) - f64::from(b)).powi(2))
            .sum();

        if noise == 0.0 {
            return f64::INFINITY;
        }
        10.0 * (signal / noise).log10()
    }
}

use utils::*;

fn round_trip(samples: &[f32], format: &FormatDescriptor) -> Vec<f32> {
    let bytes = pack(samples, samples.len(), format).unwrap();
    assert_eq!(bytes.len(), samples.len() * format.bytes_per_sample());
    unpack(&bytes, bytes.len(), format).unwrap()
}

#[test]
fn test_linear_pcm_snr_grows_with_depth() {
    let signal = generate_test_signal(800, 8000, 440.0, 0.8);

    let snr_8 = calculate_snr(&signal, &round_trip(&signal, &FormatDescriptor::pcm_s8()));
    let snr_16 = calculate_snr(&signal, &round_trip(&signal, &FormatDescriptor::pcm_s16_le()));
    let snr_24 = calculate_snr(&signal, &round_trip(&signal, &FormatDescriptor::pcm_s24_be()));

    assert!(snr_8 > 35.0, "8-bit SNR {}", snr_8);
    assert!(snr_16 > snr_8 + 40.0, "16-bit SNR {}", snr_16);
    assert!(snr_24 > snr_16 + 40.0, "24-bit SNR {}", snr_24);
}

#[test]
fn test_linear_pcm_error_within_one_lsb() {
    let signal = generate_white_noise(1000, 0.9);

    for bits in [8, 12, 16, 20, 24] {
        for encoding in [EncodingKind::PcmSigned, EncodingKind::PcmUnsigned] {
            let format = FormatDescriptor::new(bits, bits % 16 == 0, encoding);
            let lsb = 1.0 / full_scale(bits) as f32;

            for (&original, &decoded) in signal.iter().zip(&round_trip(&signal, &format)) {
                assert!(
                    (original - decoded).abs() <= lsb,
                    "{}: {} -> {}",
                    format,
                    original,
                    decoded
                );
            }
        }
    }
}

#[test]
fn test_g711_speech_level_snr() {
    let signal = generate_test_signal(1600, 8000, 1000.0, 0.5);

    let mulaw_snr = calculate_snr(&signal, &round_trip(&signal, &FormatDescriptor::mulaw()));
    let alaw_snr = calculate_snr(&signal, &round_trip(&signal, &FormatDescriptor::alaw()));

    assert!(mulaw_snr > 25.0, "μ-law SNR {}", mulaw_snr);
    assert!(alaw_snr > 25.0, "A-law SNR {}", alaw_snr);
}

#[test]
fn test_g711_quiet_signal_beats_8_bit_linear() {
    // Companding keeps resolution near zero where 8-bit linear PCM has none
    let signal = generate_test_signal(1600, 8000, 300.0, 0.01);

    let linear_snr = calculate_snr(&signal, &round_trip(&signal, &FormatDescriptor::pcm_s8()));
    let mulaw_snr = calculate_snr(&signal, &round_trip(&signal, &FormatDescriptor::mulaw()));

    assert!(mulaw_snr > linear_snr, "μ-law {} vs linear {}", mulaw_snr, linear_snr);
}

#[test]
fn test_byte_order_only_changes_layout() {
    let signal = generate_test_signal(64, 8000, 440.0, 0.7);

    for bits in [16, 24, 32, 40, 64] {
        let le = FormatDescriptor::new(bits, false, EncodingKind::PcmSigned);
        let be = le.with_big_endian(true);
        let width = le.bytes_per_sample();

        let le_bytes = pack(&signal, signal.len(), &le).unwrap();
        let be_bytes = pack(&signal, signal.len(), &be).unwrap();

        for (le_block, be_block) in le_bytes.chunks(width).zip(be_bytes.chunks(width)) {
            let reversed: Vec<u8> = be_block.iter().rev().copied().collect();
            assert_eq!(le_block, reversed.as_slice());
        }

        assert_eq!(
            unpack(&le_bytes, le_bytes.len(), &le).unwrap(),
            unpack(&be_bytes, be_bytes.len(), &be).unwrap()
        );
    }
}

#[test]
fn test_every_encoding_accepts_empty_input() {
    for format in [
        FormatDescriptor::pcm_s16_le(),
        FormatDescriptor::pcm_u8(),
        FormatDescriptor::pcm_f64_le(),
        FormatDescriptor::mulaw(),
        FormatDescriptor::alaw(),
    ] {
        assert!(unpack(&[], 0, &format).unwrap().is_empty());
        assert!(pack(&[], 0, &format).unwrap().is_empty());
    }
}

#[test]
fn test_conversion_is_deterministic() {
    let signal = generate_white_noise(512, 0.8);

    for format in [
        FormatDescriptor::pcm_s24_le(),
        FormatDescriptor::pcm_f32_be(),
        FormatDescriptor::mulaw(),
        FormatDescriptor::alaw(),
    ] {
        let first = pack(&signal, signal.len(), &format).unwrap();
        let second = pack(&signal, signal.len(), &format).unwrap();
        assert_eq!(first, second);

        assert_eq!(
            unpack(&first, first.len(), &format).unwrap(),
            unpack(&second, second.len(), &format).unwrap()
        );
    }
}

#[test]
fn test_errors_carry_categories() {
    let err = unpack(&[0u8; 2], 4, &FormatDescriptor::pcm_s16_le()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Memory);
    assert!(err.is_recoverable());

    let err = pack(&[0.0], 1, &FormatDescriptor::alaw().with_bits_per_sample(16)).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert!(!err.is_recoverable());
}
