mod cli;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use loglens_core::logging::{self, OutputMode, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "loglens",
    version,
    about = "Loglens: API request-log metrics and time series"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every configured source pipeline and print the report
    Report {
        /// Path to the Loglens config file
        #[arg(long, default_value = "config/loglens.toml")]
        config: String,

        /// Inclusive start of the date range (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Inclusive end of the date range (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// Restrict to these HTTP methods (repeatable; default all observed)
        #[arg(long = "method")]
        methods: Vec<String>,

        /// Restrict to these endpoint categories (repeatable; default all observed)
        #[arg(long = "category")]
        categories: Vec<String>,

        #[arg(long)]
        json: bool,

        #[arg(long)]
        pretty: bool,
    },

    /// Validate the config file and exit
    CheckConfig {
        #[arg(long, default_value = "config/loglens.toml")]
        config: String,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    match cli.command {
        Command::Report {
            config,
            start_date,
            end_date,
            methods,
            categories,
            json,
            pretty,
        } => {
            let mode = if json {
                OutputMode::Json
            } else if pretty {
                OutputMode::Pretty
            } else {
                logging::default_output_mode()
            };

            let args = cli::report::ReportArgs {
                config,
                start_date,
                end_date,
                methods,
                categories,
                mode,
            };

            if let Err(e) = cli::report::run_report(args) {
                eprintln!("report error: {e:#}");
                std::process::exit(1);
            }
        }

        Command::CheckConfig { config } => {
            if let Err(e) = cli::check::run_check(&config) {
                eprintln!("config error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}
