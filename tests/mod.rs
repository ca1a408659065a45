use nalgebra::DVector;
use gridpost::Config;
use gridpost::EstimateError;
use gridpost::approx::{Grid, percentile};
use gridpost::config::OBSERVATIONS;
use gridpost::fit::{self, Estimator, GridPosterior, Draws};
use gridpost::prob::density;
use gridpost::report::Report;
use gridpost::sim::{RandomSource, SeededSource, validate_weights};

const EPS : f64 = 10E-12;

/// Always draws the heaviest weight; Cauchy variates are the location itself.
struct ArgmaxSource;

impl RandomSource for ArgmaxSource {

    fn choose_weighted(&mut self, weights : &[f64], n : usize) -> Result<Vec<usize>, EstimateError> {
        validate_weights(weights)?;
        let mut best = 0;
        for (i, w) in weights.iter().enumerate() {
            if *w > weights[best] {
                best = i;
            }
        }
        Ok(vec![best; n])
    }

    fn cauchy(&mut self, loc : f64, _scale : f64) -> Result<f64, EstimateError> {
        Ok(loc)
    }

}

/// Cycles over the support in order, ignoring weights.
struct CycleSource {
    next : usize
}

impl RandomSource for CycleSource {

    fn choose_weighted(&mut self, weights : &[f64], n : usize) -> Result<Vec<usize>, EstimateError> {
        let mut ixs = Vec::new();
        for _ in 0..n {
            ixs.push(self.next % weights.len());
            self.next += 1;
        }
        Ok(ixs)
    }

    fn cauchy(&mut self, loc : f64, scale : f64) -> Result<f64, EstimateError> {
        Ok(loc + scale)
    }

}

fn estimated() -> GridPosterior {
    let mut post = GridPosterior::from_config(&Config::default()).unwrap();
    post.estimate().unwrap();
    post
}

#[test]
fn posterior_at_half() {
    let post = GridPosterior::from_config(&Config::default()).unwrap();
    let direct : f64 = (1. / 100.) * OBSERVATIONS.iter()
        .map(|y| 1. / (1. + (y - 0.5f64).powf(2.)) )
        .product::<f64>();
    assert!((post.posterior(0.5) - direct).abs() < EPS * direct);
    assert_eq!(post.prior(), 0.01);
}

#[test]
fn likelihood_matches_hand_computation() {
    let post = GridPosterior::from_config(&Config::default()).unwrap();
    let at_zero = 0.2 * 0.5 * 1.0 * (1. / 3.25) * (1. / 7.25);
    assert!((post.likelihood(0.0) - at_zero).abs() < EPS);

    // Observations are not centered at any grid point: the likelihood is not symmetric around 0.5.
    assert!((post.likelihood(0.3) - post.likelihood(0.7)).abs() > 1E-6);
    for theta in [-3.0, -0.5, 0.0, 0.5, 2.0].iter() {
        let l = post.likelihood(*theta);
        assert!(l > 0.0 && l <= 1.0);
    }
}

#[test]
fn density_symmetry() {
    for a in (-20..20).map(|i| i as f64 * 0.37) {
        for b in (-20..20).map(|i| i as f64 * 0.53) {
            assert_eq!(density(a, b), density(b, a));
        }
    }
}

#[test]
fn rescaled_posterior() {
    for n in [5usize, 100, 1000].iter() {
        let config = Config { grid_size : *n, ..Config::default() };
        let mut post = GridPosterior::from_config(&config).unwrap();
        let vec : &DVector<f64> = post.estimate().unwrap();
        assert_eq!(vec.nrows(), *n);
        assert!((vec.sum() - *n as f64).abs() < 1E-9);
        assert!(vec.iter().all(|p| *p > 0.0 ));
    }
}

#[test]
fn rescaling_preserves_posterior_shape() {
    let post = estimated();
    let vec = post.estimated().unwrap();
    let grid = post.grid();
    let ratio = vec[0] / post.posterior(grid.points()[0]);
    for (i, theta) in grid.iter().enumerate().step_by(97) {
        assert!((vec[i] / post.posterior(*theta) - ratio).abs() < 1E-9 * ratio);
    }
}

#[test]
fn parameter_draws_belong_to_grid() {
    let post = estimated();
    let mut src = SeededSource::new(2011);
    let params = post.sample_parameters(1000, &mut src).unwrap();
    assert_eq!(params.len(), 1000);
    assert!(params.iter().all(|p| post.grid().contains(*p) ));
    assert!(params.iter().all(|p| *p >= 0.0 && *p <= 1.0 ));
}

#[test]
fn predictive_draw_per_parameter() {
    let post = estimated();
    let mut src = SeededSource::new(5);
    let draws = Draws::take(&post, 1000, &mut src).unwrap();
    assert_eq!(draws.parameters.len(), 1000);
    assert_eq!(draws.predictive.len(), draws.parameters.len());
    assert_eq!(draws.iter().count(), 1000);
}

#[test]
fn seeded_runs_reproduce() {
    let config = Config { seed : Some(99), ..Config::default() };
    let (_, a) = fit::run(&config, &mut SeededSource::from_seed(config.seed)).unwrap();
    let (_, b) = fit::run(&config, &mut SeededSource::from_seed(config.seed)).unwrap();
    assert_eq!(a.parameters, b.parameters);
    assert_eq!(a.predictive, b.predictive);
    let (_, c) = fit::run(&config, &mut SeededSource::new(100)).unwrap();
    assert_ne!(a.parameters, c.parameters);
}

#[test]
fn mock_source_draws_mode() {
    let post = estimated();
    let mode = post.mode().unwrap();
    let draws = Draws::take(&post, 50, &mut ArgmaxSource).unwrap();
    assert!(draws.parameters.iter().all(|p| *p == mode ));
    assert_eq!(draws.parameters, draws.predictive);

    // The posterior of the five observations decreases over [0, 1].
    assert_eq!(mode, 0.0);
}

#[test]
fn mock_source_visits_grid() {
    let config = Config { grid_size : 4, n_samples : 6, ..Config::default() };
    let (post, draws) = fit::run(&config, &mut CycleSource { next : 0 }).unwrap();
    let pts = post.grid().points();
    let expected : Vec<f64> = [0, 1, 2, 3, 0, 1].iter().map(|i| pts[*i] ).collect();
    assert_eq!(draws.parameters, expected);
    let shifted : Vec<f64> = expected.iter().map(|p| p + 1.0 ).collect();
    assert_eq!(draws.predictive, shifted);
}

#[test]
fn sampling_weights_sum_to_one() {
    let post = estimated();
    let w = post.weights().unwrap();
    let vec = post.estimated().unwrap();
    assert!((w.sum() - 1.0).abs() < EPS);
    assert!((w[10] * 1000. - vec[10]).abs() < 1E-9);
}

#[test]
fn report_histograms() {
    let config = Config { seed : Some(7), ..Config::default() };
    let mut src = SeededSource::from_seed(config.seed);
    let (post, draws) = fit::run(&config, &mut src).unwrap();
    let report = Report::build(&config, &post, &draws).unwrap();

    assert_eq!(report.posterior.points.len(), 1000);
    let max_dens = report.posterior.points.iter().map(|p| p.density ).fold(0.0, f64::max);
    assert!((report.posterior.ceiling - 1.1 * max_dens).abs() < EPS);

    assert_eq!(report.parameters.bins.len(), 10);
    assert_eq!(report.parameters.excluded, 0);
    assert_eq!(report.parameters.bins.iter().map(|b| b.count ).sum::<u64>(), 1000);

    let low = percentile(&draws.predictive[..], 0.05).unwrap();
    let high = percentile(&draws.predictive[..], 0.95).unwrap();
    let bins = &report.predictive.bins;
    assert_eq!(bins.len(), 100);
    assert_eq!(bins[0].low, low);
    assert_eq!(bins[99].high, high);
    let counted = bins.iter().map(|b| b.count ).sum::<u64>() as usize;
    assert_eq!(counted + report.predictive.excluded, 1000);

    // Roughly 10% of the draws fall outside the 5th to 95th percentile range.
    assert!(report.predictive.excluded >= 80 && report.predictive.excluded <= 120);
    assert_eq!(report.predictive.summary.n, 1000);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("posterior").is_some());
    assert!(json["predictive"]["bins"].as_array().unwrap().len() == 100);
}

#[test]
fn draws_csv() {
    let config = Config { n_samples : 25, seed : Some(1), ..Config::default() };
    let (_, draws) = fit::run(&config, &mut SeededSource::new(1)).unwrap();
    let path = std::env::temp_dir().join("gridpost_draws_test.csv");
    draws.save_to_path(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("theta,prediction"));
    assert_eq!(lines.count(), 25);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn grid_linspace() {
    let grid = Grid::linspace(0.0, 1.0, 1000).unwrap();
    assert_eq!(grid.len(), 1000);
    assert_eq!(grid.bounds(), (0.0, 1.0));
    assert_eq!(grid.points()[999], 1.0);
    assert!(Grid::linspace(0.0, 1.0, 0).is_err());
}
