use gomoku_weights::config::TrainingConfig;
use gomoku_weights::error::WeightsError;
use gomoku_weights::features::Feature;
use gomoku_weights::pipeline::{run, SgdRegressor};
use log::{error, info};

fn main() -> Result<(), WeightsError> {
    env_logger::init();

    let config = TrainingConfig::default();
    let regressor = SgdRegressor::from_config(&config);

    let weights = run(&regressor, &config).inspect_err(|e| error!("training failed: {e}"))?;

    for feature in Feature::ALL {
        info!("{feature:>6}: {:.6}", weights.weight(feature));
    }
    info!("  bias: {:.6}", weights.bias());
    info!("saved {}", config.output.display());
    Ok(())
}
