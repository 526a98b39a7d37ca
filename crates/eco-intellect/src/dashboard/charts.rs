//! Chart series derived from an analysis payload.
//!
//! Both derivations are pure: the same payload always yields equal series.

use serde::Serialize;

use super::analysis::{AnalysisResult, ScaleScenario};

pub const USER_CHOICE_LABEL: &str = "Your Choice";
pub const USER_CHOICE_FILL: &str = "#ef4444";
pub const ALTERNATIVE_FILL: &str = "#10b981";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionPoint {
    pub name: String,
    pub emissions: f64,
}

/// The order's own emission first, then each alternative in service order.
///
/// Never sorted by value: the user's bar stays at index 0 even when it is the
/// worst option.
pub fn emissions_comparison(analysis: &AnalysisResult) -> Vec<EmissionPoint> {
    let mut series = Vec::with_capacity(1 + analysis.better_alternatives.len());
    series.push(EmissionPoint {
        name: USER_CHOICE_LABEL.to_string(),
        emissions: analysis.carbon_emission_grams,
    });
    series.extend(
        analysis
            .better_alternatives
            .iter()
            .map(|alternative| EmissionPoint {
                name: alternative.transport_mode.clone(),
                emissions: alternative.carbon_emission_grams,
            }),
    );
    series
}

/// Bar colour by position in the comparison series.
pub const fn bar_fill(index: usize) -> &'static str {
    if index == 0 {
        USER_CHOICE_FILL
    } else {
        ALTERNATIVE_FILL
    }
}

/// Scale scenarios when the service supplied at least one; `None` omits the panel.
pub fn scale_scenarios(analysis: &AnalysisResult) -> Option<&[ScaleScenario]> {
    analysis
        .yearly_projection
        .scale_scenarios
        .as_deref()
        .filter(|scenarios| !scenarios.is_empty())
}
