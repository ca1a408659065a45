use structopt::StructOpt;
use std::path::PathBuf;
use gridpost::Config;
use gridpost::fit;
use gridpost::report::Report;
use gridpost::sim::SeededSource;

/// Grid approximation of the posterior over the location of a unit-scale Cauchy under a flat prior,
/// with posterior and posterior-predictive draws.
#[derive(StructOpt, Debug)]
#[structopt(name = "gridpost")]
pub struct Opts {

    /// JSON configuration file (missing fields take the exercise defaults).
    #[structopt(short, long, parse(from_os_str))]
    config : Option<PathBuf>,

    /// Number of parameter grid points.
    #[structopt(long)]
    grid_size : Option<usize>,

    /// Number of posterior (and predictive) draws.
    #[structopt(short = "n", long)]
    samples : Option<usize>,

    /// Generator seed, for reproducible draws.
    #[structopt(short, long)]
    seed : Option<u64>,

    /// Writes the full report as JSON to this path instead of printing a summary.
    #[structopt(short, long, parse(from_os_str))]
    output : Option<PathBuf>,

    /// Writes the draws as CSV (theta,prediction) to this path.
    #[structopt(short, long, parse(from_os_str))]
    draws : Option<PathBuf>

}

impl Opts {

    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::default()
        };
        if let Some(n) = self.grid_size {
            config.grid_size = n;
        }
        if let Some(n) = self.samples {
            config.n_samples = n;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }

}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::from_args();
    let config = opts.config()?;
    let mut src = SeededSource::from_seed(config.seed);
    match src.seed() {
        Some(seed) => log::info!("Drawing with seed {}", seed),
        None => log::info!("Drawing with an entropy-seeded generator")
    }
    let (post, draws) = fit::run(&config, &mut src)?;
    let report = Report::build(&config, &post, &draws)?;
    if let Some(path) = &opts.draws {
        draws.save_to_path(path)?;
    }
    match &opts.output {
        Some(path) => report.save_to_path(path)?,
        None => print!("{}", report)
    }
    Ok(())
}
