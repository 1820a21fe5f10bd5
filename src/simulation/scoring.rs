//! Strain score, risk category and early-warning rules
//!
//! These are fixed linear heuristics, reproduced exactly and not calibrated.

use serde::{Deserialize, Serialize};

use super::numeric::format_decimal;
use super::result::{EarlyWarning, WarningKind};

/// Strain every policy starts from
const BASE_STRAIN: f64 = 40.0;

/// Strain points per USD billion of spending commitment
const SPENDING_STRAIN_WEIGHT: f64 = 5.0;

/// Strain points per USD billion of revenue loss
const REVENUE_STRAIN_WEIGHT: f64 = 3.0;

/// Scores below this are Low Risk
pub const LOW_RISK_THRESHOLD: u8 = 40;

/// Scores at or above this are High Risk
pub const HIGH_RISK_THRESHOLD: u8 = 70;

/// Scores at or above this raise a liquidity warning
pub const LIQUIDITY_WARNING_SCORE: u8 = 70;

/// Revenue impacts strictly below this raise a revenue warning
pub const REVENUE_WARNING_PCT: f64 = -1.0;

/// Scores strictly above this bring reserve depletion forward
const EARLY_DEPLETION_SCORE: u8 = 60;

/// Qualitative risk band of a strain score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskCategory {
    /// Partition the score range: `[0,40)` Low, `[40,70)` Moderate, `[70,100]` High
    pub fn from_score(score: u8) -> Self {
        if score < LOW_RISK_THRESHOLD {
            RiskCategory::Low
        } else if score < HIGH_RISK_THRESHOLD {
            RiskCategory::Moderate
        } else {
            RiskCategory::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low Risk",
            RiskCategory::Moderate => "Moderate Risk",
            RiskCategory::High => "High Risk",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic strain score, truncated toward zero and clamped into `0..=100`
///
/// Only revenue losses (negative `revenue_impact_abs`) add strain.
pub fn strain_score(spending_commitment: f64, revenue_impact_abs: f64) -> u8 {
    let spending_strain = spending_commitment.abs() * SPENDING_STRAIN_WEIGHT;
    let revenue_strain = revenue_impact_abs.min(0.0).abs() * REVENUE_STRAIN_WEIGHT;

    // `as` saturates and maps NaN to 0
    let raw = (BASE_STRAIN + spending_strain + revenue_strain) as i64;
    raw.clamp(0, 100) as u8
}

/// Projection year of reserve depletion: 3 under heavy strain, else 5
pub fn reserve_depletion_year(score: u8) -> u32 {
    if score > EARLY_DEPLETION_SCORE {
        3
    } else {
        5
    }
}

/// Build warnings in fixed order: Liquidity, then Revenue
pub fn early_warnings(score: u8, revenue_impact_pct: f64) -> Vec<EarlyWarning> {
    let mut warnings = Vec::new();

    if score >= LIQUIDITY_WARNING_SCORE {
        warnings.push(EarlyWarning {
            kind: WarningKind::Liquidity,
            title: "Liquidity crunch predicted".to_string(),
            description: "Based on current burn rate, cash reserves will dip below statutory minimums in Q3 2026.".to_string(),
        });
    }

    if revenue_impact_pct < REVENUE_WARNING_PCT {
        warnings.push(EarlyWarning {
            kind: WarningKind::Revenue,
            title: "Revenue Forecast Miss".to_string(),
            description: format!(
                "Tax base contraction of {}% expected due to sector-specific slowdowns.",
                format_decimal(revenue_impact_pct)
            ),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_partition() {
        for score in 0..=100u8 {
            let expected = if score < 40 {
                RiskCategory::Low
            } else if score < 70 {
                RiskCategory::Moderate
            } else {
                RiskCategory::High
            };
            assert_eq!(RiskCategory::from_score(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&RiskCategory::Moderate).unwrap();
        assert_eq!(json, "\"Moderate Risk\"");
        assert_eq!(RiskCategory::High.to_string(), "High Risk");
    }

    #[test]
    fn test_strain_score_components() {
        assert_eq!(strain_score(0.0, 0.0), 40);
        // 40 + 17 + 15
        assert_eq!(strain_score(3.4, -5.0), 72);
        // Revenue gains do not relieve strain
        assert_eq!(strain_score(2.0, 10.0), 50);
        // 40 + 19.5 truncates to 59
        assert_eq!(strain_score(3.9, 0.0), 59);
    }

    #[test]
    fn test_strain_score_clamped() {
        assert_eq!(strain_score(4.2, -273.0), 100);
        assert_eq!(strain_score(1e12, -1e12), 100);
        assert_eq!(strain_score(f64::INFINITY, 0.0), 100);
        assert_eq!(strain_score(f64::NAN, 0.0), 0);
    }

    #[test]
    fn test_reserve_depletion_year() {
        assert_eq!(reserve_depletion_year(60), 5);
        assert_eq!(reserve_depletion_year(61), 3);
        assert_eq!(reserve_depletion_year(100), 3);
    }

    #[test]
    fn test_liquidity_only() {
        let warnings = early_warnings(72, -0.5);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::Liquidity);
    }

    #[test]
    fn test_revenue_only() {
        let warnings = early_warnings(50, -2.0);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::Revenue);
        assert_eq!(
            warnings[0].description,
            "Tax base contraction of -2.0% expected due to sector-specific slowdowns."
        );
    }

    #[test]
    fn test_both_warnings_in_order() {
        let kinds: Vec<_> = early_warnings(80, -2.0).iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WarningKind::Liquidity, WarningKind::Revenue]);
    }

    #[test]
    fn test_thresholds_are_exclusive_where_stated() {
        assert!(early_warnings(69, -1.0).is_empty());
        assert_eq!(early_warnings(70, 0.0).len(), 1);
    }
}
