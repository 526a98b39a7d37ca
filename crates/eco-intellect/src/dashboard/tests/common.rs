use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::dashboard::analysis::{AnalysisResult, Alternative, ScaleScenario, YearlyProjection};
use crate::dashboard::checkout::CheckoutFlow;
use crate::dashboard::client::{AnalysisClient, AnalysisError};
use crate::dashboard::controller::DashboardController;
use crate::dashboard::order::{OrderInput, PackagingType, TransportMode};

pub(crate) const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

pub(crate) fn alternative(mode: &str, packaging: &str, emissions: f64) -> Alternative {
    Alternative {
        transport_mode: mode.to_string(),
        packaging_type: packaging.to_string(),
        carbon_emission_grams: emissions,
        carbon_saved_grams: (480.0 - emissions).max(0.0),
        eco_score: 91.0,
        estimated_time_minutes: 35,
        time_difference_minutes: 5,
    }
}

pub(crate) fn scale_scenario(label: &str, tonnes: f64) -> ScaleScenario {
    ScaleScenario {
        label: label.to_string(),
        total_co2_saved_tonnes: tonnes,
        users: None,
        equivalent_trees: None,
    }
}

pub(crate) fn analysis_result(emissions: f64, alternatives: Vec<Alternative>) -> AnalysisResult {
    AnalysisResult {
        eco_score: 62.0,
        rating: "Fair".to_string(),
        carbon_emission_grams: emissions,
        better_alternatives: alternatives,
        yearly_projection: YearlyProjection {
            total_orders_per_year: 156,
            total_carbon_kg: 74.88,
            trees_needed_to_offset: 4,
            equivalent_car_km: 624.0,
            money_spent: None,
            scale_scenarios: None,
        },
        environmental_context: "Like driving a petrol car from Delhi to Jaipur".to_string(),
    }
}

/// Order used by the reference walkthrough: 5 km by car in plastic.
pub(crate) fn scenario_order() -> OrderInput {
    OrderInput {
        distance_km: 5.0,
        transport_mode: TransportMode::Car,
        packaging_type: PackagingType::Plastic,
        estimated_time_minutes: 30,
        order_value: 350.0,
        frequency_per_week: 3,
    }
}

pub(crate) fn scenario_result() -> AnalysisResult {
    analysis_result(480.0, vec![alternative("bike", "biodegradable", 160.0)])
}

/// Replays canned responses in order and records every order it was sent.
#[derive(Default)]
pub(crate) struct ScriptedClient {
    responses: Mutex<VecDeque<Result<AnalysisResult, AnalysisError>>>,
    calls: Mutex<Vec<OrderInput>>,
}

impl ScriptedClient {
    pub(crate) fn new(
        responses: impl IntoIterator<Item = Result<AnalysisResult, AnalysisError>>,
    ) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<OrderInput> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl AnalysisClient for ScriptedClient {
    async fn analyze(&self, input: &OrderInput) -> Result<AnalysisResult, AnalysisError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(input.clone());
        self.responses
            .lock()
            .expect("responses mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(AnalysisError::Transport("no scripted response".to_string())))
    }
}

/// Each call waits until the test releases its response, so tests control the
/// order in which concurrent submissions resolve.
#[derive(Default)]
pub(crate) struct GatedClient {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<AnalysisResult, AnalysisError>>>>,
    calls: Mutex<Vec<OrderInput>>,
}

pub(crate) type Gate = oneshot::Sender<Result<AnalysisResult, AnalysisError>>;

impl GatedClient {
    pub(crate) fn with_gates(count: usize) -> (Self, Vec<Gate>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) =
            (0..count).map(|_| oneshot::channel()).unzip();
        let client = Self {
            gates: Mutex::new(receivers),
            calls: Mutex::new(Vec::new()),
        };
        (client, senders)
    }

    pub(crate) fn calls(&self) -> Vec<OrderInput> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl AnalysisClient for GatedClient {
    async fn analyze(&self, input: &OrderInput) -> Result<AnalysisResult, AnalysisError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(input.clone());
        let gate = self
            .gates
            .lock()
            .expect("gates mutex poisoned")
            .pop_front()
            .expect("a gate per call");
        gate.await
            .unwrap_or_else(|_| Err(AnalysisError::Transport("gate dropped".to_string())))
    }
}

pub(crate) fn controller_with<C: AnalysisClient + 'static>(
    client: C,
) -> (Arc<DashboardController<C>>, Arc<C>) {
    let client = Arc::new(client);
    let controller = Arc::new(DashboardController::new(
        client.clone(),
        CheckoutFlow::new(PROCESSING_DELAY),
    ));
    (controller, client)
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
