use thiserror::Error;

/// Errors raised while building or loading a [`ChartConfig`](crate::ChartConfig).
///
/// Rendering itself never fails; every check that could make the mapping
/// math divide by zero or loop forever happens here instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_scale ({max}) must be greater than min_scale ({min})")]
    InvalidScale { min: f32, max: f32 },

    #[error("scale_bump must be positive, got {0}")]
    InvalidScaleBump(f32),

    #[error("time_tick must be positive, got {0}")]
    InvalidTimeTick(f64),

    #[error("time_scale must be positive, got {0}")]
    InvalidTimeScale(f64),

    #[error("line_width must be positive, got {0}")]
    InvalidLineWidth(f32),

    #[error("unit_scale must be positive, got {0}")]
    InvalidUnitScale(f32),

    #[error("update_interval_ms must be greater than zero")]
    InvalidUpdateInterval,

    #[error("invalid font description {0:?}")]
    InvalidFont(String),

    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
