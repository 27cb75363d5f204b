use crate::compose::logo::{LogoAsset, composite_logo};
use crate::encode::symbol::{ErrorCorrection, SymbolEncoder};
use crate::foundation::core::Canvas;
use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::pipeline::payload::Payload;
use crate::render::config::RenderConfig;
use crate::render::cpu::render;
use crate::style::kind::ModuleStyle;

/// Longest accepted payload, in characters.
pub const MAX_PAYLOAD_CHARS: usize = 10_000;

/// Everything needed to produce one styled QR image, except the logo bytes.
///
/// Numeric fields are signed so that out-of-range input survives deserialization and is
/// rejected by [`RenderRequest::validate`] with a precise message.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderRequest {
    /// What to encode.
    pub payload: Payload,
    /// Pixels per module.
    #[serde(default = "default_module_size")]
    pub module_size: i64,
    /// Quiet-zone width in modules.
    #[serde(default = "default_margin")]
    pub margin: i64,
    /// Error-correction level handed to the encoder.
    #[serde(default)]
    pub error_correction: ErrorCorrection,
    /// Module shape.
    #[serde(default)]
    pub style: ModuleStyle,
}

fn default_module_size() -> i64 {
    i64::from(RenderConfig::default().module_size())
}

fn default_margin() -> i64 {
    i64::from(RenderConfig::default().margin_modules())
}

impl RenderRequest {
    /// Request for a plain text payload with default rendering parameters.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            payload: Payload::Text { text: text.into() },
            module_size: default_module_size(),
            margin: default_margin(),
            error_correction: ErrorCorrection::default(),
            style: ModuleStyle::default(),
        }
    }

    /// Parse a request from JSON; malformed JSON or unknown enum values are invalid parameters.
    pub fn from_json(json: &str) -> QrStyleResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| QrStyleError::invalid_parameter(format!("invalid request: {e}")))
    }

    /// Check the payload and rendering parameters, returning the payload string and config.
    pub fn validate(&self) -> QrStyleResult<(String, RenderConfig)> {
        let payload = self.payload.to_qr_string()?;
        validate_payload(&payload)?;
        let config = RenderConfig::new(self.module_size, self.margin, self.style)?;
        Ok((payload, config))
    }
}

/// Payloads must be non-blank and at most [`MAX_PAYLOAD_CHARS`] characters.
pub fn validate_payload(text: &str) -> QrStyleResult<()> {
    if text.trim().is_empty() {
        return Err(QrStyleError::invalid_parameter("Text cannot be empty"));
    }
    if text.chars().count() > MAX_PAYLOAD_CHARS {
        return Err(QrStyleError::invalid_parameter(
            "Text is too long (max 10,000 characters)",
        ));
    }
    Ok(())
}

/// Validate, encode, render and optionally overlay a logo.
///
/// Parameter errors are reported before the encoder runs or any canvas exists.
#[tracing::instrument(
    skip_all,
    fields(style = %request.style, ecc = %request.error_correction, logo = logo.is_some())
)]
pub fn generate(
    request: &RenderRequest,
    logo: Option<LogoAsset<'_>>,
    encoder: &dyn SymbolEncoder,
) -> QrStyleResult<Canvas> {
    let (payload, config) = request.validate()?;
    let matrix = encoder.encode(&payload, request.error_correction)?;
    let mut canvas = render(&matrix, &config)?;
    composite_logo(&mut canvas, logo)?;
    Ok(canvas)
}

/// [`generate`] followed by PNG encoding.
pub fn generate_png(
    request: &RenderRequest,
    logo: Option<LogoAsset<'_>>,
    encoder: &dyn SymbolEncoder,
) -> QrStyleResult<Vec<u8>> {
    generate(request, logo, encoder)?.to_png()
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/request.rs"]
mod tests;
