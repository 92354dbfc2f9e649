use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;
use std::ffi::OsString;
use thiserror::Error;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
contig-filter version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   filter SPAdes contigs by length, coverage and GC content";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

/// Long options which are also accepted with a single leading dash, as in `-min_cov 5`.
const SINGLE_DASH_OPTIONS: [&str; 4] = ["min_cov", "max_cov", "min_gc", "max_gc"];

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    styles = STYLES
)]
pub struct Cli {
    /// multi-FASTA of SPAdes contigs. identifiers must follow the SPAdes convention:
    ///     NODE_<index>_length_<length>_cov_<coverage>
    #[arg(short = 'i', long = "input", verbatim_doc_comment)]
    pub input: String,

    /// output FASTA file name
    #[arg(short = 'o', long = "output")]
    pub output: String,

    /// minimum contig length, set to 0 to skip
    #[arg(
        short = 'l',
        long = "min_length",
        alias = "min-length",
        default_value_t = 0
    )]
    pub min_length: u64,

    /// minimum coverage, set to 0 to skip
    #[arg(
        long = "min_cov",
        alias = "min-cov",
        default_value_t = 0.0,
        value_parser = parse_threshold
    )]
    pub min_cov: f64,

    /// maximum coverage, set to 0 to skip
    #[arg(
        long = "max_cov",
        alias = "max-cov",
        default_value_t = 0.0,
        value_parser = parse_threshold
    )]
    pub max_cov: f64,

    /// minimum GC %, set to 0 to skip
    #[arg(
        long = "min_gc",
        alias = "min-gc",
        default_value_t = 0.0,
        value_parser = parse_threshold
    )]
    pub min_gc: f64,

    /// maximum GC %, set to 0 to skip
    #[arg(
        long = "max_gc",
        alias = "max-gc",
        default_value_t = 0.0,
        value_parser = parse_threshold
    )]
    pub max_gc: f64,

    /// number of bases per output sequence line, set to 0 to write each sequence on one line
    #[arg(long = "line-width", default_value_t = crate::io::DEFAULT_LINE_WIDTH)]
    pub line_width: usize,

    /// write a JSON summary of the run to this file
    #[arg(long)]
    pub summary: Option<String>,
}

impl Cli {
    /// Parses the process arguments, accepting the single-dash long options.
    pub fn parse_args() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn thresholds(&self) -> crate::filter::Thresholds {
        crate::filter::Thresholds {
            min_length: self.min_length,
            min_cov: self.min_cov,
            max_cov: self.max_cov,
            min_gc: self.min_gc,
            max_gc: self.max_gc,
        }
    }
}

/// Rewrites single-dash long options such as `-min_cov` (or `-min_cov=5`) to the `--min_cov`
/// form clap understands. All other arguments are passed through untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|s| {
                let name = s.strip_prefix('-')?;
                if name.starts_with('-') {
                    return None;
                }
                let key = name.split_once('=').map_or(name, |(k, _)| k);
                SINGLE_DASH_OPTIONS
                    .contains(&key)
                    .then(|| OsString::from(format!("-{s}")))
            });
            rewritten.unwrap_or(arg)
        })
        .collect()
}

/// Error type for parsing a threshold value.
#[derive(Error, Debug, PartialEq)]
pub enum ThresholdError {
    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error(
        "`{0}` is negative. thresholds must be 0 (to skip the filter) or a positive value, as in:
  -min_cov 0
  -min_cov 5.5"
    )]
    Negative(String),
}

fn parse_threshold(arg: &str) -> Result<f64, ThresholdError> {
    let value = arg
        .trim()
        .parse::<f64>()
        .map_err(|_| ThresholdError::NotANumber(arg.to_string()))?;

    if value.is_nan() {
        return Err(ThresholdError::NotANumber(arg.to_string()));
    }
    if value < 0.0 {
        return Err(ThresholdError::Negative(arg.to_string()));
    }

    Ok(value)
}
