use serde::{Serialize, Deserialize};
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use crate::approx::{Bin, Histogram, percentile};
use crate::calc::Summary;
use crate::config::Config;
use crate::fit::{GridPosterior, Draws};
use crate::EstimateError;

/// Posterior density at a grid point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub theta : f64,
    pub density : f64
}

/// Rescaled posterior over the grid, with the vertical limit used to display it
/// (10% above the highest density).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curve {
    pub points : Vec<Point>,
    pub mode : f64,
    pub ceiling : f64
}

/// Histogram and summary of a set of draws. Bins might cover only part of the
/// draws, in which case excluded counts those left out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marginal {
    pub summary : Summary,
    pub bins : Vec<Bin>,
    pub excluded : usize
}

impl Marginal {

    fn build(draws : &[f64], hist : Histogram) -> Result<Self, EstimateError> {
        let summary = Summary::calculate(draws).ok_or(EstimateError::NoSamples)?;
        Ok(Self { summary, bins : hist.iter_bins(), excluded : hist.excluded() })
    }

}

/// Data behind the three figures of the exercise: posterior density over the grid,
/// histogram of the posterior draws, and histogram of the predictive draws clipped to
/// a central percentile range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub config : Config,
    pub posterior : Curve,
    pub parameters : Marginal,
    pub predictive : Marginal
}

impl Report {

    pub fn build(config : &Config, post : &GridPosterior, draws : &Draws) -> Result<Self, EstimateError> {
        let pts = post.curve().ok_or(EstimateError::NotEstimated)?;
        let mode = post.mode().ok_or(EstimateError::NotEstimated)?;
        let max_dens = pts.iter().fold(0.0f64, |m, (_, d)| m.max(*d) );
        let points = pts.iter().map(|(theta, density)| Point { theta : *theta, density : *density } ).collect();
        let posterior = Curve { points, mode, ceiling : max_dens * 1.1 };

        let param_hist = Histogram::calculate(draws.parameters.iter(), config.parameter_bins);
        let parameters = Marginal::build(&draws.parameters[..], param_hist)?;

        let (q_low, q_high) = config.predictive_percentiles;
        let low = percentile(&draws.predictive[..], q_low / 100.).ok_or(EstimateError::NoSamples)?;
        let high = percentile(&draws.predictive[..], q_high / 100.).ok_or(EstimateError::NoSamples)?;
        let pred_hist = Histogram::calculate_within(draws.predictive.iter(), low, high, config.predictive_bins);
        log::debug!(
            "Predictive histogram over [{:.4}, {:.4}] leaves out {} draws",
            low,
            high,
            pred_hist.excluded()
        );
        let predictive = Marginal::build(&draws.predictive[..], pred_hist)?;

        Ok(Self { config : config.clone(), posterior, parameters, predictive })
    }

    pub fn save_to_path(&self, path : impl AsRef<Path>) -> Result<(), EstimateError> {
        let f = File::create(path.as_ref())?;
        serde_json::to_writer_pretty(BufWriter::new(f), self)?;
        log::info!("Wrote report to {}", path.as_ref().display());
        Ok(())
    }

}

impl fmt::Display for Report {

    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Observations: {:?}", self.config.observations)?;
        writeln!(
            f,
            "Posterior mode: {:.4} (density ceiling {:.4})",
            self.posterior.mode,
            self.posterior.ceiling
        )?;
        writeln!(f, "Posterior draws: {}", self.parameters.summary)?;
        writeln!(f, "Predictive draws: {}", self.predictive.summary)?;
        writeln!(
            f,
            "Predictive histogram (percentiles {} to {}; {} draws left out):",
            self.config.predictive_percentiles.0,
            self.config.predictive_percentiles.1,
            self.predictive.excluded
        )?;
        let max_count = self.predictive.bins.iter().map(|b| b.count ).max().unwrap_or(0).max(1);
        for bin in self.predictive.bins.iter() {
            let width = (40 * bin.count / max_count) as usize;
            writeln!(f, "[{:>8.3}, {:>8.3}] {:>5} {}", bin.low, bin.high, bin.count, "#".repeat(width))?;
        }
        Ok(())
    }

}
