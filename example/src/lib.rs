mod scenarios;
mod showcase;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use vitrine_components::{carousel::CarouselArgs, circular::CircularArgs, marquee::MarqueeArgs};
use vitrine_ui::{ConfigError, VitrineConfig, config::load_json, dp, logging::init_tracing};

/// Everything the demo can be configured with, as one JSON document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub ui: VitrineConfig,
    pub carousel: CarouselArgs,
    pub marquee: MarqueeArgs,
    pub circular: CircularArgs,
}

impl DemoConfig {
    fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => load_json(path),
            None => Ok(Self {
                ui: VitrineConfig::load(None)?,
                ..Self::default()
            }),
        }
    }
}

/// Replays simulated host events through every engine and logs the state
/// they publish.
pub fn run(config_path: Option<&Path>) -> Result<(), ConfigError> {
    let config = DemoConfig::load(config_path)?;
    init_tracing(&config.ui);
    dp::set_scale_factor(config.ui.scale_factor);
    info!(scale_factor = dp::scale_factor(), "vitrine demo starting");

    scenarios::navigate(&config.carousel);
    scenarios::resize(&config.carousel);
    scenarios::drag(&config.carousel);
    showcase::marquee(&config.marquee);
    showcase::circular(&config.circular);
    showcase::slideshow();

    info!("vitrine demo finished");
    Ok(())
}
