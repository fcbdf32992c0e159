use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use gbk2utf8::{convert_file, DecodePolicy};

#[derive(Parser, Debug)]
#[command(
    name = "gbk2utf8",
    version,
    about = "Convert a GBK-encoded text file to UTF-8"
)]
struct Cli {
    /// GBK-encoded file to read.
    input: PathBuf,
    /// UTF-8 file to write (created or truncated).
    output: PathBuf,
    /// What to do with bytes that do not decode as GBK.
    #[arg(long = "on-invalid", value_enum, default_value_t = OnInvalid::Skip)]
    on_invalid: OnInvalid,
    /// Report failures but exit with status 0 anyway.
    #[arg(long = "no-fail", default_value_t = false)]
    no_fail: bool,
    /// Suppress the success line.
    #[arg(short = 'q', long = "quiet", default_value_t = false)]
    quiet: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OnInvalid {
    Fail,
    Skip,
    Replace,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let policy = match cli.on_invalid {
        OnInvalid::Fail => DecodePolicy::Fail,
        OnInvalid::Skip => DecodePolicy::Skip,
        OnInvalid::Replace => DecodePolicy::Replace,
    };

    match convert_file(&cli.input, &cli.output, policy) {
        Ok(report) => {
            if report.invalid_bytes > 0 {
                let action = if policy == DecodePolicy::Replace {
                    "replaced"
                } else {
                    "dropped"
                };
                eprintln!(
                    "{action} {} undecodable byte(s)",
                    report.invalid_bytes
                );
            }
            if !cli.quiet {
                println!(
                    "converted {} -> {}",
                    cli.input.display(),
                    report.output.display()
                );
            }
            Ok(())
        }
        Err(err) if cli.no_fail => {
            eprintln!("conversion failed: {:#}", anyhow::Error::new(err));
            Ok(())
        }
        Err(err) => Err(err).context("conversion failed"),
    }
}
