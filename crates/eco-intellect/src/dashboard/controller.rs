use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::analysis::AnalysisResult;
use super::checkout::CheckoutFlow;
use super::client::{AnalysisClient, AnalysisError};
use super::order::OrderInput;
use super::views::{AnalysisView, CheckoutView, DashboardView, ResultsPanel};
use crate::config::CheckoutConfig;

/// Owns the dashboard's state slots and is the only place they change.
///
/// Submissions are not serialised: several may be in flight, and whichever
/// resolves last replaces the displayed analysis.
#[derive(Debug)]
pub struct DashboardController<C> {
    client: Arc<C>,
    order: RwLock<OrderInput>,
    analysis: RwLock<Option<AnalysisSnapshot>>,
    notice: RwLock<Option<String>>,
    in_flight: AtomicUsize,
    checkout: CheckoutFlow,
}

#[derive(Debug, Clone)]
struct AnalysisSnapshot {
    result: AnalysisResult,
    analyzed_at: DateTime<Utc>,
}

/// Keeps the loading counter honest when a submission future is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

fn read<T: Clone>(slot: &RwLock<T>) -> T {
    slot.read().unwrap_or_else(PoisonError::into_inner).clone()
}

fn write<T>(slot: &RwLock<T>, value: T) {
    *slot.write().unwrap_or_else(PoisonError::into_inner) = value;
}

impl<C> DashboardController<C>
where
    C: AnalysisClient + 'static,
{
    pub fn new(client: Arc<C>, checkout: CheckoutFlow) -> Self {
        Self {
            client,
            order: RwLock::new(OrderInput::default()),
            analysis: RwLock::new(None),
            notice: RwLock::new(None),
            in_flight: AtomicUsize::new(0),
            checkout,
        }
    }

    pub fn with_config(client: Arc<C>, config: &CheckoutConfig) -> Self {
        Self::new(client, CheckoutFlow::from_config(config))
    }

    pub fn order(&self) -> OrderInput {
        read(&self.order)
    }

    /// Replace the order input. An in-flight submission keeps the input it was
    /// sent with.
    pub fn update_order(&self, order: OrderInput) {
        write(&self.order, order);
    }

    pub fn edit_order(&self, edit: impl FnOnce(&mut OrderInput)) {
        let mut guard = self.order.write().unwrap_or_else(PoisonError::into_inner);
        edit(&mut guard);
    }

    pub fn analysis(&self) -> Option<AnalysisResult> {
        read(&self.analysis).map(|snapshot| snapshot.result)
    }

    pub fn notice(&self) -> Option<String> {
        read(&self.notice)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    /// Send the current order to the scoring service.
    ///
    /// Success replaces the analysis wholesale and clears any notice. Failure
    /// leaves the previous analysis on screen and records a notice.
    pub async fn submit(&self) -> Result<AnalysisResult, AnalysisError> {
        let order = self.order();
        let _in_flight = InFlight::enter(&self.in_flight);

        info!(
            transport_mode = %order.transport_mode,
            packaging_type = %order.packaging_type,
            distance_km = order.distance_km,
            "submitting order for analysis"
        );

        match self.client.analyze(&order).await {
            Ok(result) => {
                info!(
                    eco_score = result.eco_score,
                    alternatives = result.better_alternatives.len(),
                    "analysis received"
                );
                write(
                    &self.analysis,
                    Some(AnalysisSnapshot {
                        result: result.clone(),
                        analyzed_at: Utc::now(),
                    }),
                );
                write(&self.notice, None);
                Ok(result)
            }
            Err(err) => {
                warn!(error = %err, "analysis failed");
                write(
                    &self.notice,
                    Some(format!(
                        "Failed to analyze order: {err}. The scoring service may be unavailable; try again."
                    )),
                );
                Err(err)
            }
        }
    }

    pub fn checkout_view(&self) -> CheckoutView {
        CheckoutView::build(&self.checkout.session(), &self.order())
    }

    pub fn view(&self) -> DashboardView {
        let order = self.order();
        let results = match read(&self.analysis) {
            Some(snapshot) => ResultsPanel::Ready(Box::new(AnalysisView::build(
                &snapshot.result,
                snapshot.analyzed_at,
            ))),
            None => ResultsPanel::empty(),
        };

        DashboardView {
            checkout: CheckoutView::build(&self.checkout.session(), &order),
            order,
            loading: self.is_loading(),
            notice: self.notice(),
            results,
        }
    }
}
