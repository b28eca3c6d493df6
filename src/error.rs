use thiserror::Error;

/// Invalid effect or reveal configuration. Always surfaced at mount time,
/// values are never clamped into range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid {name} range: min {min} is greater than max {max}")]
    InvalidRange { name: &'static str, min: f64, max: f64 },
    #[error("{name} range must be finite, got [{min}, {max}]")]
    NonFiniteRange { name: &'static str, min: f64, max: f64 },
    #[error("{name} range must not go below zero, got [{min}, {max}]")]
    NegativeRange { name: &'static str, min: f64, max: f64 },
    #[error("color palette is empty")]
    EmptyPalette,
    #[error("speed factor must be positive and finite, got {0}")]
    InvalidSpeed(f64),
    #[error("activation threshold must lie in [0, 1], got {0}")]
    InvalidThreshold(f64),
}

#[derive(Debug, Error)]
pub enum EffectError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The mount point is not in the document. Callers treat this as a no-op.
    #[error("mount container is not attached")]
    MissingContainer,
    #[error("dom operation failed: {0}")]
    Dom(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("animation engine is busy ticking")]
    EngineBusy,
}

impl From<wasm_bindgen::JsValue> for EffectError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        EffectError::Dom(format!("{:?}", value))
    }
}
