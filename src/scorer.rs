use crate::model::{RiskAssessment, RiskTier};

/// Map total net matches and extracted-text length to a risk assessment.
///
/// Tiers are an OR of two independent thresholds: either the absolute total
/// or the relative density alone is enough to place a document in a tier.
/// The ladder is evaluated low to critical and the first matching tier wins;
/// the two thresholds are alternative triggers, not corroborating ones, so
/// this must not be rewritten as AND logic.
pub fn assess(total: usize, text_length: usize) -> RiskAssessment {
    let length = text_length.max(1);
    let density = total as f64 / length as f64 * 100.0;

    let tier = if total <= 30 || density < 0.02 {
        RiskTier::Low
    } else if (31..=60).contains(&total) || (0.02..0.05).contains(&density) {
        RiskTier::Moderate
    } else if (61..=100).contains(&total) || (0.05..0.1).contains(&density) {
        RiskTier::High
    } else {
        RiskTier::Critical
    };

    RiskAssessment {
        total_matches: total,
        text_length: length,
        relative_density: density,
        tier,
        description: tier.description().to_string(),
    }
}
