//! Dashboard core: order input, analysis view-models, and the checkout flow.

pub mod analysis;
pub mod charts;
pub mod checkout;
pub mod client;
pub mod controller;
pub mod order;
pub mod router;
pub mod score;
pub mod views;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisResult, Alternative, ScaleScenario, YearlyProjection};
pub use charts::{bar_fill, emissions_comparison, scale_scenarios, EmissionPoint};
pub use checkout::{
    CheckoutAction, CheckoutFlow, CheckoutSession, CheckoutState, InterceptChoice, Transition,
};
pub use client::{AnalysisClient, AnalysisError, HttpAnalysisClient};
pub use controller::DashboardController;
pub use order::{OrderError, OrderInput, PackagingType, TransportMode};
pub use router::dashboard_router;
pub use score::{band, ScoreBand};
pub use views::{CheckoutView, DashboardView, ResultsPanel};
