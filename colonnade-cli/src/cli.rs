//! Contains structures and functionality for the binary
use std::path::PathBuf;

use colonnade::{parser::ParserOptions, Encoding};

/// Possible settings for the storage of the loaded column.
#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub(crate) enum Storage {
    /// Store every value as its own string
    #[default]
    Plain,
    /// Store each distinct value once and refer to it by code
    Dictionary,
}

impl From<Storage> for Encoding {
    fn from(val: Storage) -> Self {
        match val {
            Storage::Plain => Encoding::Plain,
            Storage::Dictionary => Encoding::Dictionary,
        }
    }
}

/// Cli Arguments related to logging
#[derive(clap::Args, Debug)]
pub(crate) struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::builder::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(long = "log", value_parser=clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]), group = "verbosity")]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Initialising Logging
    ///
    /// Sets the logging verbosity to the given log-level in the following order:
    ///  * `Info`, `Debug`, `Trace`; depending on the count of `-v`
    ///  * `Error` when `-q` is used
    ///  * The `CLN_LOG` environment variable value
    ///  * `Warn` otherwise
    pub(crate) fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();

        builder.filter_level(log::LevelFilter::Warn);

        builder.parse_env("CLN_LOG");
        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                3 => log::LevelFilter::Trace,
                _ => log::LevelFilter::Warn,
            });
        }
        builder.init();
    }
}

/// Cli arguments related to reading the input column
#[derive(Debug, clap::Args)]
pub(crate) struct InputArgs {
    /// Delimited file to read the column from
    #[arg(value_parser)]
    pub(crate) file: PathBuf,
    /// Header name or zero-based index of the field to load
    #[arg(short, long, default_value = "0")]
    pub(crate) column: String,
    /// Field delimiter (a single byte)
    #[arg(short, long, default_value_t = ',')]
    pub(crate) delimiter: char,
    /// Treat the first record as data instead of a header
    #[arg(long = "no-headers")]
    pub(crate) no_headers: bool,
    /// How the loaded values are stored
    #[arg(short, long, value_enum, default_value_t)]
    pub(crate) encoding: Storage,
    /// Raw values that are read as missing, separated by commas
    /// (default is "NaN,*,NA,null,N/A" and the empty string)
    #[arg(short, long, value_delimiter = ',', env = "CLN_MISSING")]
    pub(crate) missing: Option<Vec<String>>,
}

impl InputArgs {
    /// Options for parsing the raw field values
    pub(crate) fn parser_options(&self) -> ParserOptions {
        match &self.missing {
            Some(indicators) => ParserOptions {
                missing_indicators: indicators.clone(),
            },
            None => ParserOptions::default(),
        }
    }
}

/// Operations that can be run on the loaded column
#[derive(Debug, clap::Subcommand)]
pub(crate) enum Command {
    /// Print the number of rows and missing values
    Summary,
    /// Print each distinct value once
    Unique,
    /// Print how many rows hold the given value
    Count {
        /// Value to count
        value: String,
    },
    /// Print the rows whose value is one of the given values
    IsIn {
        /// Values to look for
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Print the rows whose value is none of the given values
    IsNotIn {
        /// Values to exclude
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Print the column shifted down by n rows (up for negative n)
    Lag {
        /// Number of rows to shift
        #[arg(allow_hyphen_values = true)]
        n: isize,
    },
    /// Print the column shifted up by n rows (down for negative n)
    Lead {
        /// Number of rows to shift
        #[arg(allow_hyphen_values = true)]
        n: isize,
    },
    /// Print the column in sorted order
    Sort {
        /// Sort from largest to smallest
        #[arg(long)]
        descending: bool,
    },
    /// Print the column without its missing values
    RemoveMissing,
    /// Print the column
    Print,
}

/// Colonnade CLI
#[derive(clap::Parser, Debug)]
#[command(name = "cln", author, version, about)]
pub struct CliApp {
    /// Arguments related to the input column
    #[command(flatten)]
    pub(crate) input: InputArgs,
    /// Arguments related to logging
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
    /// Operation to run
    #[command(subcommand)]
    pub(crate) command: Command,
}
