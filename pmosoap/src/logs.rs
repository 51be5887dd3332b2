//! Initialisation du logging à partir de la configuration.

use pmoconfig::Config;
use tracing::Level;
use tracing_subscriber::{Registry, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installe le subscriber global.
///
/// Le niveau vient de `host.logger.min_level`, la sortie console de
/// `host.logger.enable_console`. Retourne `false` si un subscriber était
/// déjà installé (l'appel est alors sans effet).
pub fn init_logging(config: &Config) -> bool {
    let level = config
        .get_log_min_level()
        .ok()
        .and_then(|l| string_to_level(&l))
        .map(level_to_levelfilter)
        .unwrap_or(LevelFilter::INFO);

    let enable_console = config.get_log_enable_console().unwrap_or(true);

    let subscriber = Registry::default().with(level);

    let installed = if enable_console {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true),
            )
            .try_init()
    } else {
        subscriber.try_init()
    };

    installed.is_ok()
}

fn string_to_level(s: &str) -> Option<Level> {
    match s.to_uppercase().as_str() {
        "ERROR" => Some(Level::ERROR),
        "WARN" => Some(Level::WARN),
        "INFO" => Some(Level::INFO),
        "DEBUG" => Some(Level::DEBUG),
        "TRACE" => Some(Level::TRACE),
        _ => None,
    }
}

fn level_to_levelfilter(level: Level) -> LevelFilter {
    LevelFilter::from_level(level)
}
