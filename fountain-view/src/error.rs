use fountain_core::config::ConfigError;
use thiserror::Error;

/// Reasons the overlay can fail to start.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to open the overlay window: {0}")]
    Window(#[from] eframe::Error),
}
