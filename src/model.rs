use serde::Serialize;

/// Ordinal risk classification shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Low => "normal technical language, no relevant alert signals",
            Self::Moderate => "some critical accounting terms detected, review context",
            Self::High => "language associated with impairment or financial problems",
            Self::Critical => "multiple financial alert signals, requires audit",
        }
    }
}

/// Aggregated risk metrics for one analyzed document. Derived entirely from
/// the match tally and the extracted text length; recomputed per analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub total_matches: usize,
    pub text_length: usize,
    pub relative_density: f64,
    pub tier: RiskTier,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: usize,
}

/// Result payload of one analysis: everything the results page (or the CLI
/// JSON report) needs.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub filename: String,
    pub sha256: String,
    pub analyzed_at: String,
    /// Net phrase counts, sorted by count descending.
    pub phrases: Vec<PhraseCount>,
    pub risk: RiskAssessment,
    pub image_path: String,
}
