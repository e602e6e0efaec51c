//! Loader for the controller tuning RON file.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::ControllerConfig;

const CONFIG_PATH: &str = "assets/config/controller.ron";

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a tuning file from disk.
pub fn load_config(path: &Path) -> Result<ControllerConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ConfigLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Insert the tuning resource, falling back to defaults on any load failure.
pub(crate) fn load_config_at_startup(mut commands: Commands) {
    match load_config(Path::new(CONFIG_PATH)) {
        Ok(config) => {
            info!("Loaded controller tuning from {}", CONFIG_PATH);
            commands.insert_resource(config);
        }
        Err(e) => {
            warn!("{}, using default tuning", e);
            commands.insert_resource(ControllerConfig::default());
        }
    }
}
