//! Error types for banner generation.
//!
//! Categorizes failures so the binary can report them with a clear message
//! and a non-zero exit code. There are no retries: this is a one-shot batch
//! tool and every error is fatal at the point it occurs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BannerError {
    /// Invalid CLI input that clap could not catch (e.g. out-of-range scale)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logo file unreadable or undecodable. Raised before any size is
    /// rendered since the logo is shared across the whole run.
    #[error("Failed to load logo: {0}")]
    Asset(String),

    /// Font loading or glyph rendering failure
    #[error("Failed to render banner: {0}")]
    Render(String),

    /// Encoding to an output format failed
    #[error("Failed to encode to {format}: {message}")]
    Encode { format: String, message: String },

    /// ZIP archive creation failed
    #[error("Failed to create archive: {0}")]
    Archive(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BannerError {
    pub fn config(message: impl Into<String>) -> Self {
        BannerError::Config(message.into())
    }

    pub fn asset(message: impl Into<String>) -> Self {
        BannerError::Asset(message.into())
    }

    pub fn render(message: impl Into<String>) -> Self {
        BannerError::Render(message.into())
    }

    pub fn encode_failed(format: impl Into<String>, message: impl Into<String>) -> Self {
        BannerError::Encode {
            format: format.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_display() {
        let err = BannerError::config("logo scale must be within (0, 1]");
        assert_eq!(
            err.to_string(),
            "Configuration error: logo scale must be within (0, 1]"
        );
    }

    #[test]
    fn test_asset_display() {
        let err = BannerError::asset("no such file");
        assert_eq!(err.to_string(), "Failed to load logo: no such file");
    }

    #[test]
    fn test_encode_display() {
        let err = BannerError::encode_failed("jpeg", "encoder error");
        assert_eq!(err.to_string(), "Failed to encode to jpeg: encoder error");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BannerError = io.into();
        assert!(matches!(err, BannerError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BannerError>();
    }
}
