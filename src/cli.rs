pub mod command;

use clap::Parser;

pub use command::Cli;

/// Parse the command line, reading a `.env` file first so its values act as
/// environment defaults.
pub fn parse_cli() -> Cli {
    dotenv::dotenv().ok();
    Cli::parse()
}
