use serde::{Deserialize, Serialize};

/// Analysis payload returned by the scoring service.
///
/// Consumed read-only and replaced wholesale on every successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub eco_score: f64,
    pub rating: String,
    pub carbon_emission_grams: f64,
    /// Relevance order as supplied by the service.
    pub better_alternatives: Vec<Alternative>,
    pub yearly_projection: YearlyProjection,
    pub environmental_context: String,
}

/// A suggested transport/packaging combination.
///
/// Modes are kept as the service's raw tags; the service may suggest options
/// the order form does not offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub transport_mode: String,
    pub packaging_type: String,
    pub carbon_emission_grams: f64,
    pub carbon_saved_grams: f64,
    pub eco_score: f64,
    pub estimated_time_minutes: u32,
    /// Signed difference against the order's own estimate.
    pub time_difference_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjection {
    pub total_orders_per_year: u32,
    pub total_carbon_kg: f64,
    pub trees_needed_to_offset: u32,
    pub equivalent_car_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money_spent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_scenarios: Option<Vec<ScaleScenario>>,
}

/// Projected CO2 savings if a population of users switched delivery habits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleScenario {
    pub label: String,
    pub total_co2_saved_tonnes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equivalent_trees: Option<u64>,
}
