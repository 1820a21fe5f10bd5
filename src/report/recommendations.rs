//! Rule-based mitigation recommendations derived from a stress-test result

use serde::{Deserialize, Serialize};

use crate::simulation::numeric::format_decimal;
use crate::simulation::SimulationResult;

/// Scores strictly above this call for a phased rollout
const PHASED_ROLLOUT_SCORE: u8 = 70;

/// Revenue impacts strictly below this call for a broader tax base
const TAX_BASE_REVENUE_PCT: f64 = -1.0;

const MAX_RECOMMENDATIONS: usize = 3;

/// Expected effect of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// An actionable mitigation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub impact: Impact,
    /// Result metric the recommendation improves
    pub metric: String,
}

/// Recommend up to three mitigations, most specific first
///
/// Reads the breakdown echo rather than recomputing anything.
pub fn recommend(result: &SimulationResult) -> Vec<Recommendation> {
    let mut recs = Vec::new();
    let spending = result.breakdown.spending_commitment;
    let revenue = result.breakdown.revenue_impact;

    if result.fiscal_strain_score > PHASED_ROLLOUT_SCORE {
        recs.push(Recommendation {
            title: "Implement phased spending rollout".to_string(),
            description: format!(
                "Current spending of ${}B creates critical strain. Distributing over 3 phases would reduce peak fiscal load by ~35%.",
                format_decimal(spending)
            ),
            impact: Impact::High,
            metric: "strain_score".to_string(),
        });
    }

    if revenue < TAX_BASE_REVENUE_PCT {
        recs.push(Recommendation {
            title: "Offset revenue decline with broadened tax base".to_string(),
            description: format!(
                "The {}% revenue contraction can be partially offset by expanding the tax base to adjacent sectors.",
                format_decimal(revenue)
            ),
            impact: Impact::Medium,
            metric: "revenue".to_string(),
        });
    }

    recs.push(Recommendation {
        title: "Establish fiscal circuit breakers".to_string(),
        description: "Automatic spending freezes triggered at predefined debt-to-GDP thresholds would prevent runaway deficits.".to_string(),
        impact: Impact::High,
        metric: "deficit".to_string(),
    });

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}
