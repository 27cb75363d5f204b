use std::fmt;
use std::str::FromStr;

use crate::foundation::error::QrStyleError;

/// Shape used for dark modules outside the finder patterns.
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
#[serde(rename_all = "lowercase")]
pub enum ModuleStyle {
    /// Filled square covering the whole module.
    #[default]
    Square,
    /// Square with corners rounded by a quarter of the module size.
    Rounded,
    /// Circle inscribed in the module.
    Circle,
    /// Five-pointed star.
    Star,
    /// Square rotated 45 degrees, touching the module edge midpoints.
    Diamond,
    /// Two lobes over a downward-pointing triangle.
    Heart,
    /// Regular hexagon.
    Hexagon,
}

impl ModuleStyle {
    /// Every recognized style, in declaration order.
    pub const ALL: [ModuleStyle; 7] = [
        ModuleStyle::Square,
        ModuleStyle::Rounded,
        ModuleStyle::Circle,
        ModuleStyle::Star,
        ModuleStyle::Diamond,
        ModuleStyle::Heart,
        ModuleStyle::Hexagon,
    ];

    /// Lowercase name used in requests.
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleStyle::Square => "square",
            ModuleStyle::Rounded => "rounded",
            ModuleStyle::Circle => "circle",
            ModuleStyle::Star => "star",
            ModuleStyle::Diamond => "diamond",
            ModuleStyle::Heart => "heart",
            ModuleStyle::Hexagon => "hexagon",
        }
    }
}

impl fmt::Display for ModuleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleStyle {
    type Err = QrStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| QrStyleError::invalid_parameter(format!("invalid style '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/kind.rs"]
mod tests;
