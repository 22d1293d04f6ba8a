use clap::{Parser, Subcommand, ValueEnum};
use kata_core::coins::CounterStrategy;
use kata_core::Topology;

/// Log level applied to every module when `--log-level` is given.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlobalLogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// How results are written to standard output.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per result.
    #[default]
    Text,
    /// CSV with a header row.
    Csv,
}

/// The drill to run.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Count the combinations of coins that sum to an amount.
    Coins {
        /// Target amount (negative amounts have zero combinations).
        #[arg(allow_negative_numbers = true)]
        amount: i64,

        /// Comma-separated coin denominations, e.g. "1,5,10".
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        coins: Vec<u32>,

        /// Counting strategy.
        #[arg(long, value_enum, default_value_t = CounterStrategy::Memoized)]
        strategy: CounterStrategy,
    },

    /// Check whether the brackets in an expression are balanced.
    Brackets {
        /// Expression to scan, e.g. "{3*[1+5(6+8)]}".
        expression: String,
    },

    /// Count 4-connected islands of land in a 0/1 grid.
    Islands {
        /// Comma-separated rows of 0/1 digits, e.g. "110,100,010".
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        rows: Vec<String>,

        /// Whether grid edges wrap around.
        #[arg(long, value_enum, default_value_t = Topology::Bounded)]
        topology: Topology,
    },

    /// Find the shortest substring containing every given character.
    Window {
        /// Text to search.
        text: String,

        /// Characters that must all appear in the window, e.g. "abc".
        #[arg(long, default_value = "")]
        chars: String,
    },

    /// Run every drill on its reference inputs and check the answers.
    Demo,
}

/// Configuration for the kata application.
#[derive(Parser, Debug)]
#[command(name = "kata", author, version, about, long_about = None)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Log level for all modules. Overrides RUST_LOG when given.
    #[arg(long = "log-level", value_enum, global = true)]
    pub global_log_level: Option<GlobalLogLevel>,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}
