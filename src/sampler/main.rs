use data_collection::SamplerData;
use log::*;
use rand::{rngs::StdRng, SeedableRng};
use ts2_utils::delay::SamplerConfig;

mod data_collection;

fn main() {
    env_logger::init();
    let config = match SamplerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load sampler config: {e}");
            std::process::exit(1);
        }
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        "Sampling {} delays from {:?}",
        config.count,
        config.delay.buckets()
    );

    let mut data = SamplerData::new();
    for _ in 0..config.count {
        let delay = config.delay.sample_duration(&mut rng);
        data.record(delay, config.departure);
    }

    if let Err(e) = save_results(&data, &config) {
        error!("Failed to save results: {e}");
        std::process::exit(1);
    }
    info!(
        "Wrote {} samples to {}",
        data.sample_count(),
        config.output_filepath
    );
}

fn save_results(data: &SamplerData, config: &SamplerConfig) -> Result<(), std::io::Error> {
    data.save_summary(config)?;
    data.to_csv(&config.output_filepath)?;
    Ok(())
}
