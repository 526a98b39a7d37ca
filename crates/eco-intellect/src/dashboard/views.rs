use chrono::{DateTime, Utc};
use serde::Serialize;

use super::analysis::{AnalysisResult, Alternative, ScaleScenario};
use super::charts::{bar_fill, emissions_comparison, scale_scenarios};
use super::checkout::summary::{confirmation, intercept_prompt};
use super::checkout::{
    CheckoutSession, CheckoutState, ConfirmationMessage, EcoOffer, InterceptChoice, OrderSummary,
};
use super::order::OrderInput;
use super::score::ScoreBand;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub order: OrderInput,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub results: ResultsPanel,
    pub checkout: CheckoutView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResultsPanel {
    Empty {
        headline: &'static str,
        hint: &'static str,
    },
    Ready(Box<AnalysisView>),
}

impl ResultsPanel {
    pub fn empty() -> Self {
        Self::Empty {
            headline: "Ready to Analyze",
            hint: "Enter order details and click analyze to see environmental impact",
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisView> {
        match self {
            Self::Ready(view) => Some(view.as_ref()),
            Self::Empty { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisView {
    pub analyzed_at: DateTime<Utc>,
    pub score_card: ScoreCardView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonPanel>,
    pub yearly: YearlyProjectionView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_panel: Option<ScaleScenarioPanel>,
}

impl AnalysisView {
    pub fn build(result: &AnalysisResult, analyzed_at: DateTime<Utc>) -> Self {
        let comparison = if result.better_alternatives.is_empty() {
            None
        } else {
            Some(ComparisonPanel::build(result))
        };

        Self {
            analyzed_at,
            score_card: ScoreCardView::build(result),
            comparison,
            yearly: YearlyProjectionView::build(result),
            scale_panel: scale_scenarios(result).map(|series| ScaleScenarioPanel {
                series: series.to_vec(),
                unit: "t",
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreCardView {
    pub eco_score: f64,
    pub rating: String,
    pub band: ScoreBand,
    pub text_class: &'static str,
    pub background_class: &'static str,
    pub border_class: &'static str,
    pub carbon_emission_grams: f64,
}

impl ScoreCardView {
    fn build(result: &AnalysisResult) -> Self {
        let band = ScoreBand::from_score(result.eco_score);
        Self {
            eco_score: result.eco_score,
            rating: result.rating.clone(),
            band,
            text_class: band.text_class(),
            background_class: band.background_class(),
            border_class: band.border_class(),
            carbon_emission_grams: result.carbon_emission_grams,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonBar {
    pub name: String,
    pub emissions: f64,
    pub fill: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonPanel {
    pub bars: Vec<ComparisonBar>,
    pub alternatives: Vec<AlternativeCard>,
}

impl ComparisonPanel {
    fn build(result: &AnalysisResult) -> Self {
        let bars = emissions_comparison(result)
            .into_iter()
            .enumerate()
            .map(|(index, point)| ComparisonBar {
                name: point.name,
                emissions: point.emissions,
                fill: bar_fill(index),
            })
            .collect();

        Self {
            bars,
            alternatives: result
                .better_alternatives
                .iter()
                .map(AlternativeCard::build)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlternativeCard {
    pub title: String,
    pub savings_text: String,
    pub eco_score: f64,
    pub carbon_emission_grams: f64,
    pub estimated_time_minutes: u32,
    pub time_difference_text: String,
}

impl AlternativeCard {
    fn build(alternative: &Alternative) -> Self {
        Self {
            title: format!(
                "{} + {}",
                alternative.transport_mode, alternative.packaging_type
            ),
            savings_text: format!("Save {}g CO\u{2082}", alternative.carbon_saved_grams),
            eco_score: alternative.eco_score,
            carbon_emission_grams: alternative.carbon_emission_grams,
            estimated_time_minutes: alternative.estimated_time_minutes,
            time_difference_text: time_difference_text(alternative.time_difference_minutes),
        }
    }
}

/// Signed minutes relative to the order's estimate, "+" only for slower options.
pub fn time_difference_text(minutes: i32) -> String {
    if minutes > 0 {
        format!("+{minutes} min diff")
    } else {
        format!("{minutes} min diff")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct YearlyProjectionView {
    pub total_orders_per_year: u32,
    pub total_carbon_kg: f64,
    pub trees_needed_to_offset: u32,
    pub equivalent_car_km: f64,
    pub equivalent_car_km_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_spent: Option<f64>,
    pub environmental_context: String,
}

impl YearlyProjectionView {
    fn build(result: &AnalysisResult) -> Self {
        let projection = &result.yearly_projection;
        Self {
            total_orders_per_year: projection.total_orders_per_year,
            total_carbon_kg: projection.total_carbon_kg,
            trees_needed_to_offset: projection.trees_needed_to_offset,
            equivalent_car_km: projection.equivalent_car_km,
            equivalent_car_km_display: format!("{:.0}", projection.equivalent_car_km.round()),
            money_spent: projection.money_spent,
            environmental_context: result.environmental_context.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaleScenarioPanel {
    pub series: Vec<ScaleScenario>,
    pub unit: &'static str,
}

/// Checkout modal content for the current session state.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutView {
    pub visible: bool,
    pub state: CheckoutState,
    pub state_label: &'static str,
    pub processing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<OrderSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intercept: Option<InterceptView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice: Option<InterceptChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<ConfirmationMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterceptView {
    pub prompt: String,
    pub offer: EcoOffer,
    pub saving_text: String,
    pub discount_text: String,
    pub accept_label: String,
    pub decline_label: &'static str,
}

impl CheckoutView {
    pub fn build(session: &CheckoutSession, order: &OrderInput) -> Self {
        let state = session.state();
        let summary = OrderSummary::mock(order.transport_mode);
        let offer = EcoOffer::standard(&summary);

        let mut view = Self {
            visible: session.is_visible(),
            state,
            state_label: state.label(),
            processing: session.is_processing(),
            summary: None,
            pay_label: None,
            intercept: None,
            choice: session.choice(),
            confirmation: None,
        };

        match state {
            CheckoutState::Closed => {}
            CheckoutState::Initial | CheckoutState::Processing => {
                view.pay_label = Some(if session.is_processing() {
                    "Processing...".to_string()
                } else {
                    summary.pay_label()
                });
                view.summary = Some(summary);
            }
            CheckoutState::Intercept => {
                view.intercept = Some(InterceptView {
                    prompt: intercept_prompt(order),
                    saving_text: offer.saving_text(),
                    discount_text: offer.discount_text(),
                    accept_label: offer.accept_label(),
                    decline_label: "Continue with Original Choice",
                    offer,
                });
            }
            CheckoutState::Success => {
                view.confirmation = Some(confirmation(session.choice(), &summary, &offer));
            }
        }

        view
    }
}
