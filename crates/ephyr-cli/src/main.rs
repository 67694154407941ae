//! Electrophysiology Analysis Command-Line Interface
//!
//! This CLI provides tools for:
//! - Computing power spectra of recorded channels (CSV input)
//! - Computing pairwise connectivity reports (correlation, envelope
//!   correlation, PLV, coherence, and their variants)
//! - Generating synthetic two-channel fixtures for testing
//!
//! Input files are plain CSV: one column per channel, optional header row.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use ephyr_core::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "ephyr")]
#[command(author, version, about = "Spectral & connectivity analysis for electrophysiology signals", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the power spectrum of one channel
    Spectrum {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Zero-based column holding the channel
        #[arg(short, long, default_value = "0")]
        column: usize,

        /// Sample rate in Hz
        #[arg(short, long)]
        sample_rate: f64,

        /// Output format (text, csv, json)
        #[arg(long, default_value = "text")]
        output_format: String,

        /// Append an EEG band-power summary (text output only)
        #[arg(long)]
        bands: bool,
    },

    /// Compute pairwise connectivity measures between two channels
    Connectivity {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Zero-based columns holding the two channels, e.g. "0,1"
        #[arg(short, long, default_value = "0,1")]
        columns: String,

        /// Sample rate in Hz
        #[arg(short, long)]
        sample_rate: f64,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        output_format: String,
    },

    /// Generate a synthetic two-channel fixture CSV
    Synth {
        /// Output CSV file
        #[arg(short, long, default_value = "synth.csv")]
        output: PathBuf,

        /// Number of samples per channel
        #[arg(short, long, default_value = "250")]
        num_samples: usize,

        /// Sample rate in Hz
        #[arg(short, long, default_value = "250.0")]
        sample_rate: f64,

        /// Carrier frequency in Hz
        #[arg(short, long, default_value = "10.0")]
        frequency: f64,

        /// Phase offset of the second channel in radians
        #[arg(long, default_value = "0.5")]
        phase_offset: f64,

        /// Envelope modulation frequency in Hz (0 disables)
        #[arg(long, default_value = "0.0")]
        env_frequency: f64,

        /// Gaussian noise level (standard deviation)
        #[arg(long, default_value = "0.0")]
        noise: f64,

        /// Noise seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Spectrum {
            input,
            column,
            sample_rate,
            output_format,
            bands,
        } => cmd_spectrum(&input, column, sample_rate, &output_format, bands),
        Commands::Connectivity {
            input,
            columns,
            sample_rate,
            output_format,
        } => cmd_connectivity(&input, &columns, sample_rate, &output_format),
        Commands::Synth {
            output,
            num_samples,
            sample_rate,
            frequency,
            phase_offset,
            env_frequency,
            noise,
            seed,
        } => cmd_synth(
            &output,
            num_samples,
            sample_rate,
            frequency,
            phase_offset,
            env_frequency,
            noise,
            seed,
        ),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "ephyr", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn cmd_spectrum(
    input: &Path,
    column: usize,
    sample_rate: f64,
    output_format: &str,
    bands: bool,
) -> Result<()> {
    let signal = read_csv_column(input, column)?;
    info!("Loaded {} samples from {}", signal.len(), input.display());

    let spectrum = dft(&signal, sample_rate)
        .with_context(|| format!("spectrum of column {} failed", column))?;

    match output_format {
        "text" => {
            print!("{}", spectrum.to_text());
            if bands {
                print_band_summary(&spectrum);
            }
        }
        "csv" => print!("{}", spectrum.to_csv()),
        "json" => {
            let powers = all_band_powers(&spectrum);
            let value = serde_json::json!({
                "sample_rate": sample_rate,
                "num_samples": spectrum.len(),
                "freq_resolution": spectrum.freq_resolution(),
                "frequencies": spectrum.frequencies,
                "power": spectrum.power,
                "phase": spectrum.phase,
                "band_powers": powers,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        other => anyhow::bail!("Unknown output format: {}. Use text, csv, or json", other),
    }

    Ok(())
}

fn print_band_summary(spectrum: &Spectrum) {
    let powers = all_band_powers(spectrum);
    let relative = powers.relative();

    println!();
    println!("EEG Band Powers");
    println!("{}", "─".repeat(40));
    for (band, abs, rel) in [
        (EegBand::Delta, powers.delta, relative.delta),
        (EegBand::Theta, powers.theta, relative.theta),
        (EegBand::Alpha, powers.alpha, relative.alpha),
        (EegBand::Beta, powers.beta, relative.beta),
        (EegBand::Gamma, powers.gamma, relative.gamma),
    ] {
        let (low, high) = band.range_hz();
        println!(
            "{:>6} ({:>5.1}-{:>5.1} Hz)  {:>10.4}  {:>6.1}%",
            band.name(),
            low,
            high,
            abs,
            rel * 100.0
        );
    }
}

fn cmd_connectivity(
    input: &Path,
    columns: &str,
    sample_rate: f64,
    output_format: &str,
) -> Result<()> {
    let (col1, col2) = parse_column_pair(columns)?;
    let s1 = read_csv_column(input, col1)?;
    let s2 = read_csv_column(input, col2)?;
    info!(
        "Loaded columns {} and {} ({} samples) from {}",
        col1,
        col2,
        s1.len(),
        input.display()
    );

    let a1 = analytic_signal(&s1).context("analytic signal of channel 1 failed")?;
    let a2 = analytic_signal(&s2).context("analytic signal of channel 2 failed")?;
    let p1 = instantaneous_phase(&a1);
    let p2 = instantaneous_phase(&a2);

    let corr = pearson(&s1, &s2)?;
    let env_corr = envelope_correlation(&a1, &a2)?;
    let ortho = orthogonalized_envelope_correlation(&s1, &s2)?;
    let locking = plv(&p1, &p2)?;
    let locking_im = iplv(&locking);
    let locking_cim = ciplv(&locking);
    let coh = coherence(&a1, &a2)?;
    let coh_im = im_coherence(&coh);
    let coh_cim = cim_coherence(&coh);
    debug!("All measures computed at {} Hz", sample_rate);

    match output_format {
        "text" => {
            println!("Connectivity Report ({} samples)", s1.len());
            println!("{}", "═".repeat(52));
            println!(
                "{:<28} {:>10} {:>12}",
                "Measure", "Magnitude", "Phase (rad)"
            );
            println!("{}", "─".repeat(52));
            println!("{:<28} {:>10.4}", "Pearson correlation", corr.correlation);
            println!(
                "{:<28} {:>10.4}",
                "Envelope correlation", env_corr.correlation
            );
            println!(
                "{:<28} {:>10.4}",
                "Orthogonalized env. corr.", ortho.regression.correlation
            );
            for (name, c) in [
                ("PLV", locking),
                ("iPLV", locking_im),
                ("ciPLV", locking_cim),
                ("Coherence", coh),
                ("imCoh", coh_im),
                ("cimCoh", coh_cim),
            ] {
                println!("{:<28} {:>10.4} {:>12.4}", name, c.magnitude, c.phase);
            }
        }
        "json" => {
            let value = serde_json::json!({
                "num_samples": s1.len(),
                "sample_rate": sample_rate,
                "pearson": corr,
                "envelope_correlation": env_corr,
                "orthogonalized_envelope_correlation": ortho.regression,
                "plv": locking,
                "iplv": locking_im,
                "ciplv": locking_cim,
                "coherence": coh,
                "im_coherence": coh_im,
                "cim_coherence": coh_cim,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        other => anyhow::bail!("Unknown output format: {}. Use text or json", other),
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_synth(
    output: &Path,
    num_samples: usize,
    sample_rate: f64,
    frequency: f64,
    phase_offset: f64,
    env_frequency: f64,
    noise: f64,
    seed: u64,
) -> Result<()> {
    let mut wave1 = SineWave::new(frequency);
    let mut wave2 = SineWave::new(frequency).with_phase(phase_offset);
    if env_frequency > 0.0 {
        wave1 = wave1.with_envelope(env_frequency, 0.0);
        wave2 = wave2.with_envelope(env_frequency, 0.0);
    }

    let mut ch1 = wave1.generate(num_samples, sample_rate);
    let mut ch2 = wave2.generate(num_samples, sample_rate);
    if noise > 0.0 {
        GaussianNoise::with_seed(noise, seed).add_to(&mut ch1);
        GaussianNoise::with_seed(noise, seed.wrapping_add(1)).add_to(&mut ch2);
    }

    let mut file = fs::File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    writeln!(file, "ch1,ch2")?;
    for (a, b) in ch1.iter().zip(ch2.iter()) {
        writeln!(file, "{},{}", a, b)?;
    }

    info!(
        "Wrote {} samples x 2 channels to {}",
        num_samples,
        output.display()
    );
    Ok(())
}

/// Parse "a,b" into a pair of column indices
fn parse_column_pair(columns: &str) -> Result<(usize, usize)> {
    let parts: Vec<&str> = columns.split(',').collect();
    if parts.len() != 2 {
        anyhow::bail!("Expected two columns as \"a,b\", got \"{}\"", columns);
    }
    let col1 = parts[0].trim().parse().context("invalid first column")?;
    let col2 = parts[1].trim().parse().context("invalid second column")?;
    Ok((col1, col2))
}

/// Read one column of a CSV file, skipping a non-numeric header row
fn read_csv_column(path: &Path, column: usize) -> Result<Vec<f64>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut values = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let field = line.split(',').nth(column).with_context(|| {
            format!("line {} has no column {}", line_no + 1, column)
        })?;
        match field.trim().parse::<f64>() {
            Ok(v) => values.push(v),
            // A header row is fine on the first line only
            Err(_) if line_no == 0 => continue,
            Err(e) => anyhow::bail!("line {}: invalid number {:?}: {}", line_no + 1, field, e),
        }
    }

    if values.is_empty() {
        anyhow::bail!("no numeric data in column {} of {}", column, path.display());
    }
    Ok(values)
}
