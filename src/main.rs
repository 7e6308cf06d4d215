use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use env_logger::Env;

use imgswap::ConversionOptions;

/// Recursively convert images from one format to another, selected by file suffix.
#[derive(Parser)]
#[command(
    version,
    about,
    after_help = "Flags take two dashes, e.g. --quitOnError=false; the single-dash form (-quitOnError=false) is not accepted."
)]
struct Cli {
    /// The directory to traverse, or file to convert.
    #[arg(long, value_name = "PATH", default_value = "./")]
    target: PathBuf,

    /// The suffix to search for (case-insensitive).
    #[arg(long, value_name = "SUFFIX", default_value = "tiff")]
    from: String,

    /// The suffix to write to; selects the encoder (jpg, png, gif, bmp, tiff).
    #[arg(long, value_name = "SUFFIX", default_value = "jpg")]
    to: String,

    /// Whether to stop at the first error.
    #[arg(
        long = "quitOnError",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    quit_on_error: bool,

    /// Whether the original files are deleted after conversion.
    #[arg(
        long = "deleteOriginal",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    delete_original: bool,

    /// Log level; RUST_LOG takes precedence when set.
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "info",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

impl Cli {
    fn options(&self) -> ConversionOptions {
        ConversionOptions {
            from: self.from.clone(),
            to: self.to.clone(),
            quit_on_error: self.quit_on_error,
            delete_original: self.delete_original,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level.as_str())).init();

    match imgswap::traverse(&cli.target, &cli.options()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(1)
        }
    }
}
