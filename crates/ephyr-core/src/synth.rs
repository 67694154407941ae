//! Synthetic Test Signals
//!
//! Deterministic generators for sinusoids (optionally amplitude-modulated)
//! and Gaussian noise, used by the test suite, fixtures, and the CLI `synth`
//! command. The noise generator takes an explicit seed so a fixture can be
//! reproduced exactly.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Sinusoid generator with an optional slow amplitude-modulation envelope
#[derive(Debug, Clone, Copy)]
pub struct SineWave {
    /// Carrier frequency in Hz
    frequency: f64,
    /// Carrier phase offset in radians
    phase: f64,
    /// Envelope (frequency Hz, phase rad); None for a constant unit envelope
    envelope: Option<(f64, f64)>,
}

impl SineWave {
    /// Create a unit-amplitude sinusoid at the given frequency
    pub fn new(frequency: f64) -> Self {
        Self {
            frequency,
            phase: 0.0,
            envelope: None,
        }
    }

    /// Set the carrier phase offset in radians
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Modulate the amplitude with a slow cosine envelope
    ///
    /// The envelope is `0.5·(0.8·cos(2π·f_env·t + φ_env) + 1)`, swinging
    /// between 0.1 and 0.9 so the carrier never fully vanishes.
    pub fn with_envelope(mut self, env_frequency: f64, env_phase: f64) -> Self {
        self.envelope = Some((env_frequency, env_phase));
        self
    }

    /// Sample the waveform at time t (seconds)
    pub fn sample(&self, t: f64) -> f64 {
        use std::f64::consts::PI;

        let carrier = (2.0 * PI * self.frequency * t + self.phase).cos();
        match self.envelope {
            Some((env_freq, env_phase)) => {
                let env = 0.5 * (0.8 * (2.0 * PI * env_freq * t + env_phase).cos() + 1.0);
                env * carrier
            }
            None => carrier,
        }
    }

    /// Generate `num_samples` samples at the given sample rate
    pub fn generate(&self, num_samples: usize, sample_rate: f64) -> Vec<f64> {
        (0..num_samples)
            .map(|i| self.sample(i as f64 / sample_rate))
            .collect()
    }
}

/// Seeded Gaussian noise generator
#[derive(Debug)]
pub struct GaussianNoise {
    level: f64,
    rng: StdRng,
}

impl GaussianNoise {
    /// Create a generator with the given standard deviation and seed
    pub fn with_seed(level: f64, seed: u64) -> Self {
        Self {
            level,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `num_samples` zero-mean noise samples
    pub fn generate(&mut self, num_samples: usize) -> Vec<f64> {
        // level 0 keeps Normal::new well-defined and the output exactly zero
        if self.level == 0.0 {
            return vec![0.0; num_samples];
        }

        let normal = Normal::new(0.0, self.level).unwrap_or_else(|_| Normal::new(0.0, 1.0).unwrap());
        (0..num_samples).map(|_| normal.sample(&mut self.rng)).collect()
    }

    /// Add noise in place to an existing signal
    pub fn add_to(&mut self, signal: &mut [f64]) {
        let noise = self.generate(signal.len());
        for (sample, noise) in signal.iter_mut().zip(noise) {
            *sample += noise;
        }
    }
}
