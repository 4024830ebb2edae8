//! Fixed-capacity bank of sinusoidal wave descriptors.
//!
//! The bank is generated once at startup and never mutated; all animation
//! comes from the global time uniform in the shader.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of superposed waves. The shader is compiled against the same
/// constant, so changing one side means changing both.
pub const WAVE_COUNT: usize = 32;

/// One sinusoidal wave component
#[derive(Debug, Clone, Copy)]
pub struct WaveDescriptor {
    /// Peak displacement in meters
    pub amplitude: f32,
    /// Spatial frequency (radians per meter along `direction`)
    pub frequency: f32,
    /// Phase offset in radians
    pub phase: f32,
    /// Unit travel direction in the XZ plane
    pub direction: Vec2,
}

/// Immutable bank of [`WAVE_COUNT`] wave descriptors
pub struct WaveBank {
    waves: [WaveDescriptor; WAVE_COUNT],
}

impl WaveBank {
    /// Generate the bank from a seed.
    ///
    /// Amplitudes fall off harmonically (`0.5 / (i + 1)`) so one dominant
    /// swell carries progressively smaller ripples. Frequencies and travel
    /// directions are uniform draws, one frequency then one angle per wave,
    /// so a given seed reproduces the bank exactly.
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let waves = std::array::from_fn(|i| {
            let frequency: f32 = rng.gen_range(0.0..1.0);
            let angle: f32 = rng.gen_range(0.0..FRAC_PI_2);
            WaveDescriptor {
                amplitude: 0.5 / (i as f32 + 1.0),
                frequency,
                phase: i as f32 * FRAC_PI_4,
                direction: Vec2::new(angle.cos(), angle.sin()),
            }
        });

        Self { waves }
    }

    pub fn waves(&self) -> &[WaveDescriptor; WAVE_COUNT] {
        &self.waves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude_harmonic_falloff() {
        let bank = WaveBank::generate(42);
        for (i, wave) in bank.waves().iter().enumerate() {
            assert_eq!(wave.amplitude, 0.5 / (i as f32 + 1.0));
        }
        assert_eq!(bank.waves()[0].amplitude, 0.5);
        assert_eq!(bank.waves()[1].amplitude, 0.25);
        assert_eq!(bank.waves()[3].amplitude, 0.125);
    }

    #[test]
    fn test_amplitudes_monotonically_decreasing() {
        let bank = WaveBank::generate(7);
        let amps: Vec<f32> = bank.waves().iter().map(|w| w.amplitude).collect();
        assert!(amps.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn test_phase_ladder() {
        let bank = WaveBank::generate(42);
        for (i, wave) in bank.waves().iter().enumerate() {
            assert_eq!(wave.phase, i as f32 * FRAC_PI_4);
        }
    }

    #[test]
    fn test_frequencies_in_unit_range() {
        let bank = WaveBank::generate(99);
        assert!(bank
            .waves()
            .iter()
            .all(|w| (0.0..1.0).contains(&w.frequency)));
    }

    #[test]
    fn test_directions_unit_first_quadrant() {
        let bank = WaveBank::generate(1);
        for wave in bank.waves() {
            assert!((wave.direction.length() - 1.0).abs() < 1e-5);
            assert!(wave.direction.x > 0.0);
            assert!(wave.direction.y >= 0.0);
        }
    }

    #[test]
    fn test_seed_reproducibility() {
        let a = WaveBank::generate(42);
        let b = WaveBank::generate(42);
        for (wa, wb) in a.waves().iter().zip(b.waves()) {
            assert_eq!(wa.frequency, wb.frequency);
            assert_eq!(wa.direction, wb.direction);
        }

        let c = WaveBank::generate(43);
        assert!(a
            .waves()
            .iter()
            .zip(c.waves())
            .any(|(wa, wc)| wa.frequency != wc.frequency));
    }
}
