mod commands;
mod terminal;

use std::fs::File;
use std::io::{self, Read};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use commands::CommandLine;
use geosift_common::config::Config;
use geosift_common::filter::TargetFilter;
use geosift_common::tally::Tally;
use geosift_core::classify::Classifier;
use geosift_core::geodb::MaxmindResolver;
use geosift_core::pipeline;
use terminal::{logging, print, spinner};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let filter = TargetFilter::new(&commands.subdivision, commands.country.as_deref())
        .context("invalid filter code")?;

    let resolver = MaxmindResolver::open(&commands.db)?;
    let classifier = Classifier::new(Arc::new(resolver), filter.clone());

    let cfg = Config {
        workers: commands.workers.unwrap_or_else(num_workers_default),
        queue_capacity: commands.queue_capacity,
    };

    let start_time = Instant::now();
    let tally = match &commands.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file '{}'", path.display()))?;
            classify_input(file, &classifier, &cfg)?
        }
        None => classify_input(io::stdin(), &classifier, &cfg)?,
    };

    print::report(&tally, &filter, start_time.elapsed());
    Ok(())
}

fn classify_input<R>(input: R, classifier: &Classifier, cfg: &Config) -> anyhow::Result<Tally>
where
    R: Read + Send,
{
    let spinner = spinner::start_processing();
    let result = pipeline::run(input, classifier, cfg);
    spinner.finish_and_clear();
    result
}

fn num_workers_default() -> usize {
    Config::default().workers
}
