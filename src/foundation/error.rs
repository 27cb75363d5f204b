/// Convenience result type used across qrstyle.
pub type QrStyleResult<T> = Result<T, QrStyleError>;

/// Top-level error taxonomy used by rendering and compositing APIs.
///
/// Every variant aborts the current call; no partially drawn canvas is ever returned.
#[derive(thiserror::Error, Debug)]
pub enum QrStyleError {
    /// Out-of-range or unrecognized request parameter, detected before any drawing.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Logo rejected on file type or content sniffing.
    #[error("invalid logo: {0}")]
    InvalidLogo(String),

    /// Logo pixel dimensions exceed the accepted maximum.
    #[error("logo too large: {width}x{height} exceeds {max}x{max} pixels")]
    LogoTooLarge {
        /// Decoded logo width in pixels.
        width: u32,
        /// Decoded logo height in pixels.
        height: u32,
        /// Maximum accepted edge length in pixels.
        max: u32,
    },

    /// Any other failure while decoding, scaling or compositing a logo.
    #[error("error processing logo: {0}")]
    LogoProcessing(String),

    /// Failure reported by the QR symbol encoder (e.g. payload exceeds capacity).
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QrStyleError {
    /// Build a [`QrStyleError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`QrStyleError::InvalidLogo`] value.
    pub fn invalid_logo(msg: impl Into<String>) -> Self {
        Self::InvalidLogo(msg.into())
    }

    /// Build a [`QrStyleError::LogoProcessing`] value.
    pub fn logo_processing(msg: impl Into<String>) -> Self {
        Self::LogoProcessing(msg.into())
    }

    /// Build a [`QrStyleError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
