//! Standard EEG Frequency Bands
//!
//! Band definitions and band-power extraction over a one-sided [`Spectrum`].

use crate::spectral::Spectrum;
use serde::Serialize;

/// Standard EEG frequency bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EegBand {
    /// 0.5-4 Hz
    Delta,
    /// 4-8 Hz
    Theta,
    /// 8-13 Hz
    Alpha,
    /// 13-30 Hz
    Beta,
    /// 30-100 Hz
    Gamma,
}

impl EegBand {
    /// All bands, low to high
    pub const ALL: [EegBand; 5] = [
        EegBand::Delta,
        EegBand::Theta,
        EegBand::Alpha,
        EegBand::Beta,
        EegBand::Gamma,
    ];

    /// Band limits as (low, high) in Hz
    pub fn range_hz(&self) -> (f64, f64) {
        match self {
            EegBand::Delta => (0.5, 4.0),
            EegBand::Theta => (4.0, 8.0),
            EegBand::Alpha => (8.0, 13.0),
            EegBand::Beta => (13.0, 30.0),
            EegBand::Gamma => (30.0, 100.0),
        }
    }

    /// Band name in lowercase
    pub fn name(&self) -> &'static str {
        match self {
            EegBand::Delta => "delta",
            EegBand::Theta => "theta",
            EegBand::Alpha => "alpha",
            EegBand::Beta => "beta",
            EegBand::Gamma => "gamma",
        }
    }
}

/// Power per standard EEG band
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BandPowers {
    /// Delta band power (0.5-4 Hz)
    pub delta: f64,
    /// Theta band power (4-8 Hz)
    pub theta: f64,
    /// Alpha band power (8-13 Hz)
    pub alpha: f64,
    /// Beta band power (13-30 Hz)
    pub beta: f64,
    /// Gamma band power (30-100 Hz)
    pub gamma: f64,
}

impl BandPowers {
    /// Total power across all bands
    pub fn total(&self) -> f64 {
        self.delta + self.theta + self.alpha + self.beta + self.gamma
    }

    /// Band powers normalized to the total (all zero when total is zero)
    pub fn relative(&self) -> BandPowers {
        let total = self.total();
        if total > 0.0 {
            BandPowers {
                delta: self.delta / total,
                theta: self.theta / total,
                alpha: self.alpha / total,
                beta: self.beta / total,
                gamma: self.gamma / total,
            }
        } else {
            BandPowers::default()
        }
    }
}

/// Sum the one-sided power bins whose frequency falls in `[low, high)`
pub fn band_power_range(spectrum: &Spectrum, low_hz: f64, high_hz: f64) -> f64 {
    spectrum
        .frequencies
        .iter()
        .zip(spectrum.power.iter())
        .filter(|(&f, _)| f >= low_hz && f < high_hz)
        .map(|(_, &p)| p)
        .sum()
}

/// Sum the one-sided power bins inside a standard EEG band
pub fn band_power(spectrum: &Spectrum, band: EegBand) -> f64 {
    let (low, high) = band.range_hz();
    band_power_range(spectrum, low, high)
}

/// Extract all standard EEG band powers from a spectrum
pub fn all_band_powers(spectrum: &Spectrum) -> BandPowers {
    BandPowers {
        delta: band_power(spectrum, EegBand::Delta),
        theta: band_power(spectrum, EegBand::Theta),
        alpha: band_power(spectrum, EegBand::Alpha),
        beta: band_power(spectrum, EegBand::Beta),
        gamma: band_power(spectrum, EegBand::Gamma),
    }
}
