use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::matrix::model::ModuleMatrix;

/// QR error-correction level.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
pub enum ErrorCorrection {
    /// ~7% recovery.
    #[value(name = "L")]
    L,
    /// ~15% recovery.
    #[default]
    #[value(name = "M")]
    M,
    /// ~25% recovery.
    #[value(name = "Q")]
    Q,
    /// ~30% recovery.
    #[value(name = "H")]
    H,
}

impl ErrorCorrection {
    fn to_qrcode(self) -> qrcode::EcLevel {
        match self {
            ErrorCorrection::L => qrcode::EcLevel::L,
            ErrorCorrection::M => qrcode::EcLevel::M,
            ErrorCorrection::Q => qrcode::EcLevel::Q,
            ErrorCorrection::H => qrcode::EcLevel::H,
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        };
        f.write_str(s)
    }
}

impl FromStr for ErrorCorrection {
    type Err = QrStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(ErrorCorrection::L),
            "M" => Ok(ErrorCorrection::M),
            "Q" => Ok(ErrorCorrection::Q),
            "H" => Ok(ErrorCorrection::H),
            other => Err(QrStyleError::invalid_parameter(format!(
                "invalid error correction level '{other}'"
            ))),
        }
    }
}

/// Turns a payload into a QR module matrix.
///
/// Implementations own the whole QR symbol algorithm (segmentation, error correction,
/// masking); the renderer only consumes the resulting matrix.
pub trait SymbolEncoder {
    /// Encode `payload` at `level`, failing with [`QrStyleError::Encoding`] when it does not fit.
    fn encode(&self, payload: &str, level: ErrorCorrection) -> QrStyleResult<ModuleMatrix>;
}

/// [`SymbolEncoder`] backed by the `qrcode` crate, picking the smallest fitting version.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrcodeEncoder;

impl SymbolEncoder for QrcodeEncoder {
    #[tracing::instrument(skip(self, payload), fields(len = payload.len()))]
    fn encode(&self, payload: &str, level: ErrorCorrection) -> QrStyleResult<ModuleMatrix> {
        let code = qrcode::QrCode::with_error_correction_level(payload, level.to_qrcode())
            .map_err(|e| QrStyleError::encoding(e.to_string()))?;
        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();
        tracing::debug!(width, "encoded qr symbol");
        ModuleMatrix::new(width, width, modules)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/symbol.rs"]
mod tests;
