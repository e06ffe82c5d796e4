use std::path::PathBuf;

use clap::Parser;
use geosift_common::config::DEFAULT_QUEUE_CAPACITY;

#[derive(Parser)]
#[command(name = "geosift")]
#[command(about = "A concurrent utility to resolve IP addresses to countries and subdivisions.")]
#[command(after_help = "As input geosift expects one IP address per line, e.g.\n\
    10.0.0.1\n\
    10.0.0.2\n\
    10.0.0.3")]
pub struct CommandLine {
    /// Path to the GeoIP2/GeoLite2 City database file
    #[arg(long, value_name = "PATH")]
    pub db: PathBuf,

    /// Subdivision (state/province) ISO code to filter on
    #[arg(short, long, value_name = "CODE")]
    pub subdivision: String,

    /// Country ISO code to filter on; also enables the country-match count
    #[arg(short, long, value_name = "CODE")]
    pub country: Option<String>,

    /// Input file of IP addresses; standard input when omitted
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Number of classifier workers; defaults to the host's parallelism
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Capacity of the bounded record queue
    #[arg(long, value_name = "N", default_value_t = DEFAULT_QUEUE_CAPACITY)]
    pub queue_capacity: usize,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
