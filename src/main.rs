//! GameMath probe
//!
//! Places a camera from the configuration and prints, for every configured
//! point, its screen position, depth and ground crossing.

use gamemath::config::AppConfig;
use gamemath::probe::Probe;

fn main() {
    let loaded = AppConfig::load();
    let level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => "info".to_string(),
    };

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting GameMath probe");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let probe = match Probe::new(&config) {
        Ok(probe) => probe,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    for sample in probe.run() {
        println!("{}", sample);
    }
}
