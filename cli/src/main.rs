use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use superkiss64::rng::reference::{verify_integer_vector, verify_value_sequence_vector};
use superkiss64::{GeneratorConfig, SeedStrategy, SuperKiss64};

/// SuperKISS64 pseudorandom number generator
#[derive(Parser, Debug)]
#[command(name = "superkiss64")]
#[command(about = "Immense-period 64-bit pseudorandom number generator", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print pseudorandom numbers, one per line
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// How many values to print
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Output representation
        #[arg(short, long, value_enum, default_value = "u64")]
        format: OutputFormat,
    },

    /// Write raw pseudorandom bytes to stdout
    Bytes {
        #[command(flatten)]
        source: SourceArgs,

        /// How many bytes to write
        #[arg(short = 'n', long)]
        count: usize,
    },

    /// Check the published reference vectors
    Verify {
        /// Skip the one-billion-draw integer vector
        #[arg(long)]
        quick: bool,
    },
}

/// Where the generator comes from and where its state goes afterwards
#[derive(Args, Debug)]
struct SourceArgs {
    /// Integer seed (0 selects the reference initialization)
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["values", "entropy", "load", "config"])]
    seed: Option<i64>,

    /// Comma-separated seed values
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["entropy", "load", "config"])]
    values: Option<Vec<u64>>,

    /// Seed from operating-system entropy
    #[arg(long, conflicts_with_all = ["load", "config"])]
    entropy: bool,

    /// Resume from a saved state file (`.lz4` means compressed)
    #[arg(long, conflicts_with = "config")]
    load: Option<PathBuf>,

    /// JSON generator configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the generator state here when done (`.lz4` means compressed)
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Unsigned 64-bit integers
    U64,
    /// Non-negative signed integers below 2^63
    I63,
    /// Doubles in [0, 1)
    F64,
    /// Singles in [0, 1)
    F32,
    /// 64-bit words as 16 hex digits
    Hex,
}

impl SourceArgs {
    fn build(&self) -> anyhow::Result<SuperKiss64> {
        let config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => GeneratorConfig {
                seed: self.strategy(),
            },
        };
        info!(?config, "building generator");
        Ok(config.build()?)
    }

    fn strategy(&self) -> SeedStrategy {
        if let Some(seed) = self.seed {
            SeedStrategy::Integer { seed }
        } else if let Some(values) = &self.values {
            SeedStrategy::Values {
                values: values.clone(),
            }
        } else if self.entropy {
            SeedStrategy::Entropy
        } else if let Some(path) = &self.load {
            SeedStrategy::StateFile { path: path.clone() }
        } else {
            SeedStrategy::default()
        }
    }

    fn finish(&self, rng: &SuperKiss64) -> anyhow::Result<()> {
        if let Some(path) = &self.save {
            rng.save_state(path)
                .with_context(|| format!("saving state to {}", path.display()))?;
        }
        Ok(())
    }
}

fn generate(rng: &mut SuperKiss64, count: usize, format: OutputFormat) -> io::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for _ in 0..count {
        match format {
            OutputFormat::U64 => writeln!(out, "{}", rng.next_u64())?,
            OutputFormat::I63 => writeln!(out, "{}", rng.next_i63())?,
            OutputFormat::F64 => writeln!(out, "{:.17}", rng.next_f64())?,
            OutputFormat::F32 => writeln!(out, "{:.9}", rng.next_f32())?,
            OutputFormat::Hex => writeln!(out, "{:016x}", rng.next_u64())?,
        }
    }
    out.flush()
}

fn write_bytes(rng: &mut SuperKiss64, count: usize) -> io::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    let mut chunk = [0u8; 8192];
    let mut remaining = count;
    while remaining > 0 {
        let n = remaining.min(chunk.len());
        rng.fill_bytes(&mut chunk[..n]);
        out.write_all(&chunk[..n])?;
        remaining -= n;
    }
    out.flush()
}

fn verify(quick: bool) -> anyhow::Result<()> {
    verify_value_sequence_vector()?;
    println!("value-sequence vector: ok");

    if quick {
        println!("integer vector: skipped");
        return Ok(());
    }

    verify_integer_vector()?;
    println!("integer vector: ok");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Command::Generate {
            source,
            count,
            format,
        } => {
            let mut rng = source.build()?;
            generate(&mut rng, count, format)?;
            source.finish(&rng)?;
        }
        Command::Bytes { source, count } => {
            let mut rng = source.build()?;
            write_bytes(&mut rng, count)?;
            source.finish(&rng)?;
        }
        Command::Verify { quick } => verify(quick).context("reference check failed")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_of(args: &[&str]) -> SourceArgs {
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        match cli.command {
            Command::Generate { source, .. } | Command::Bytes { source, .. } => source,
            Command::Verify { .. } => panic!("expected a generator subcommand"),
        }
    }

    #[test]
    fn test_strategy_from_each_flag() {
        assert_eq!(
            source_of(&["superkiss64", "generate", "--seed", "-5"]).strategy(),
            SeedStrategy::Integer { seed: -5 }
        );
        assert_eq!(
            source_of(&["superkiss64", "generate", "--values", "1,2,3"]).strategy(),
            SeedStrategy::Values {
                values: vec![1, 2, 3]
            }
        );
        assert_eq!(
            source_of(&["superkiss64", "bytes", "-n", "4", "--entropy"]).strategy(),
            SeedStrategy::Entropy
        );
        assert_eq!(
            source_of(&["superkiss64", "generate", "--load", "state.json"]).strategy(),
            SeedStrategy::StateFile {
                path: PathBuf::from("state.json")
            }
        );
    }

    #[test]
    fn test_strategy_defaults_to_self_seed() {
        assert_eq!(
            source_of(&["superkiss64", "generate"]).strategy(),
            SeedStrategy::default()
        );
    }

    #[test]
    fn test_conflicting_sources_rejected() {
        for args in [
            &["superkiss64", "generate", "--seed", "1", "--entropy"][..],
            &["superkiss64", "generate", "--values", "1", "--load", "s.json"][..],
            &["superkiss64", "generate", "--entropy", "--config", "c.json"][..],
        ] {
            assert!(Cli::try_parse_from(args).is_err(), "{:?} should conflict", args);
        }
    }

    #[test]
    fn test_finish_saves_state_after_draws() {
        let path = std::env::temp_dir().join(format!(
            "superkiss64-cli-{}.json.lz4",
            uuid::Uuid::new_v4()
        ));
        let path_arg = path.to_string_lossy().into_owned();
        let source = source_of(&["superkiss64", "generate", "--seed", "9", "--save", &path_arg]);

        let mut rng = source.build().unwrap();
        for _ in 0..25 {
            rng.next_u64();
        }
        source.finish(&rng).unwrap();

        let mut resumed = SuperKiss64::from_state_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        for _ in 0..100 {
            assert_eq!(resumed.next_u64(), rng.next_u64());
        }
    }

    #[test]
    fn test_finish_without_save_writes_nothing() {
        let source = source_of(&["superkiss64", "generate", "--seed", "9"]);
        let rng = source.build().unwrap();
        assert!(source.finish(&rng).is_ok());
    }
}
