use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerTone {
    Safe,
    Warning,
}

impl BannerTone {
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Safe => "✅",
            Self::Warning => "⚠️",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Safe => "banner-safe",
            Self::Warning => "banner-warning",
        }
    }

    /// ANSI color used by the terminal report.
    pub fn ansi_color(self) -> &'static str {
        match self {
            Self::Safe => "\x1b[32m",
            Self::Warning => "\x1b[33m",
        }
    }

    pub fn fix_heading(self) -> &'static str {
        match self {
            Self::Safe => "Standard Compliance",
            Self::Warning => "Recommended Secure Fix",
        }
    }
}
