//! Maps a remote verdict status onto a normalized risk descriptor for display.

/// Presentation color bucket for a classified status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorToken {
    /// Unrecognized or absent status; rendered neutrally.
    #[default]
    None,
    Safe,
    Warning,
    Danger,
}

/// Normalized `{percent, color}` pair derived from a verdict status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RiskDescriptor {
    pub risk_percent: u8,
    pub color: ColorToken,
}

impl RiskDescriptor {
    fn new(risk_percent: u8, color: ColorToken) -> Self {
        Self {
            risk_percent,
            color,
        }
    }

    /// Proportional split for chart rendering. `risk_share + safe_share == 100`.
    pub fn chart_split(&self) -> ChartSplit {
        ChartSplit {
            risk_share: self.risk_percent,
            safe_share: 100 - self.risk_percent,
        }
    }
}

/// Two-way proportional split consumed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSplit {
    pub risk_share: u8,
    pub safe_share: u8,
}

/// Classifies a verdict status, matched case-insensitively.
///
/// Total over every input: an unmatched or absent status is a defined
/// neutral outcome, not an error.
pub fn classify(status: Option<&str>) -> RiskDescriptor {
    let status = match status {
        Some(status) => status,
        None => return RiskDescriptor::default(),
    };
    if status.eq_ignore_ascii_case("safe") {
        RiskDescriptor::new(0, ColorToken::Safe)
    } else if status.eq_ignore_ascii_case("warning") {
        RiskDescriptor::new(50, ColorToken::Warning)
    } else if status.eq_ignore_ascii_case("malicious")
        || status.eq_ignore_ascii_case("danger")
        || status.eq_ignore_ascii_case("phishing")
    {
        RiskDescriptor::new(100, ColorToken::Danger)
    } else {
        RiskDescriptor::default()
    }
}

/// Convenience form of [`RiskDescriptor::chart_split`] applied to a raw status.
pub fn chart_split(status: Option<&str>) -> ChartSplit {
    classify(status).chart_split()
}
