use thiserror::Error;

/// Main error type for the Keyed-Compositor library
#[derive(Error, Debug)]
pub enum CompositorError {
    #[error("Raster error: {0}")]
    Raster(#[from] RasterError),

    #[error("Composite error: {0}")]
    Composite(#[from] CompositeError),

    #[error("Keying error: {0}")]
    Keying(#[from] KeyingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while decoding or encoding image files
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Failed to decode image '{path}': {reason}")]
    Decode { path: String, reason: String },

    #[error("Failed to write image '{path}': {reason}")]
    Write { path: String, reason: String },
}

/// Errors raised by the compositing operations
#[derive(Error, Debug)]
pub enum CompositeError {
    #[error(
        "Dimension mismatch: background is {}x{}, overlay is {}x{}",
        .background.0, .background.1, .overlay.0, .overlay.1
    )]
    DimensionMismatch {
        background: (u32, u32),
        overlay: (u32, u32),
    },
}

/// Errors raised while resolving key modes
#[derive(Error, Debug)]
pub enum KeyingError {
    #[error("Unknown key mode '{name}' (available: {})", .available.join(", "))]
    UnknownMode { name: String, available: Vec<String> },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Missing required configuration: {key}")]
    MissingKey { key: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Errors raised by the run-level fallback policy
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Compositing failed ({reason}) and the background could not be copied: {source}")]
    FallbackFailed {
        reason: Box<CompositorError>,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using CompositorError
pub type Result<T> = std::result::Result<T, CompositorError>;

impl CompositorError {
    /// Whether the background-copy fallback is allowed to cover this failure.
    ///
    /// Decode, write, dimension and IO failures are covered. Configuration and
    /// mode lookup problems are caller mistakes and are always reported.
    pub fn is_fallback_eligible(&self) -> bool {
        matches!(self, Self::Raster(_) | Self::Composite(_) | Self::Io(_))
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Raster(RasterError::Decode { path, .. }) => {
                format!(
                    "Could not load image '{}'. Please check the file exists and is a PNG or JPEG.",
                    path
                )
            }
            Self::Raster(RasterError::Write { path, .. }) => {
                format!("Could not write '{}'. Check that the output directory is writable.", path)
            }
            Self::Keying(KeyingError::UnknownMode { name, available }) => {
                format!("Key mode '{}' not found. Available modes: {}", name, available.join(", "))
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_eligibility() {
        let decode: CompositorError = RasterError::Decode {
            path: "missing.png".to_string(),
            reason: "No such file".to_string(),
        }
        .into();
        assert!(decode.is_fallback_eligible());

        let mismatch: CompositorError = CompositeError::DimensionMismatch {
            background: (4, 4),
            overlay: (2, 2),
        }
        .into();
        assert!(mismatch.is_fallback_eligible());

        let config: CompositorError = ConfigError::MissingKey {
            key: "paths.overlay".to_string(),
        }
        .into();
        assert!(!config.is_fallback_eligible());
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = CompositeError::DimensionMismatch {
            background: (1024, 1024),
            overlay: (512, 256),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: background is 1024x1024, overlay is 512x256"
        );
    }

    #[test]
    fn test_unknown_mode_user_message() {
        let err: CompositorError = KeyingError::UnknownMode {
            name: "sepia".to_string(),
            available: vec!["passthrough".to_string(), "white".to_string()],
        }
        .into();
        assert_eq!(
            err.user_message(),
            "Key mode 'sepia' not found. Available modes: passthrough, white"
        );
    }
}
