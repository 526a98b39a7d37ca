use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;

use super::checkout::{InterceptChoice, Transition};
use super::client::AnalysisClient;
use super::controller::DashboardController;
use super::order::OrderInput;
use super::views::CheckoutView;
use crate::error::AppError;

type Controller<C> = State<Arc<DashboardController<C>>>;

/// Router exposing the dashboard view-model and checkout actions.
pub fn dashboard_router<C>(controller: Arc<DashboardController<C>>) -> Router
where
    C: AnalysisClient + 'static,
{
    Router::new()
        .route("/api/v1/dashboard", get(dashboard_handler::<C>))
        .route("/api/v1/dashboard/order", put(update_order_handler::<C>))
        .route("/api/v1/dashboard/analyze", post(analyze_handler::<C>))
        .route("/api/v1/checkout", get(checkout_handler::<C>))
        .route("/api/v1/checkout/open", post(open_handler::<C>))
        .route("/api/v1/checkout/pay", post(pay_handler::<C>))
        .route("/api/v1/checkout/accept-eco", post(accept_eco_handler::<C>))
        .route(
            "/api/v1/checkout/keep-original",
            post(keep_original_handler::<C>),
        )
        .route("/api/v1/checkout/return", post(return_handler::<C>))
        .route("/api/v1/checkout/close", post(close_handler::<C>))
        .with_state(controller)
}

/// Checkout view plus whether the requested action changed anything.
#[derive(Debug, Serialize)]
pub struct CheckoutActionResponse {
    pub applied: bool,
    #[serde(flatten)]
    pub checkout: CheckoutView,
}

pub(crate) async fn dashboard_handler<C>(State(controller): Controller<C>) -> Response
where
    C: AnalysisClient + 'static,
{
    (StatusCode::OK, Json(controller.view())).into_response()
}

pub(crate) async fn update_order_handler<C>(
    State(controller): Controller<C>,
    Json(order): Json<OrderInput>,
) -> Response
where
    C: AnalysisClient + 'static,
{
    if let Err(err) = order.validate() {
        return AppError::from(err).into_response();
    }
    controller.update_order(order);
    (StatusCode::OK, Json(controller.view())).into_response()
}

pub(crate) async fn analyze_handler<C>(State(controller): Controller<C>) -> Response
where
    C: AnalysisClient + 'static,
{
    match controller.submit().await {
        Ok(_) => (StatusCode::OK, Json(controller.view())).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub(crate) async fn checkout_handler<C>(State(controller): Controller<C>) -> Response
where
    C: AnalysisClient + 'static,
{
    (StatusCode::OK, Json(controller.checkout_view())).into_response()
}

fn checkout_response<C>(controller: &DashboardController<C>, transition: Transition) -> Response
where
    C: AnalysisClient + 'static,
{
    let body = CheckoutActionResponse {
        applied: transition.is_applied(),
        checkout: controller.checkout_view(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn open_handler<C>(State(controller): Controller<C>) -> Response
where
    C: AnalysisClient + 'static,
{
    let transition = controller.checkout().open();
    checkout_response(&controller, transition)
}

pub(crate) async fn pay_handler<C>(State(controller): Controller<C>) -> Response
where
    C: AnalysisClient + 'static,
{
    let transition = controller.checkout().pay();
    checkout_response(&controller, transition)
}

pub(crate) async fn accept_eco_handler<C>(State(controller): Controller<C>) -> Response
where
    C: AnalysisClient + 'static,
{
    let transition = controller
        .checkout()
        .choose(InterceptChoice::AcceptEcoAlternative);
    checkout_response(&controller, transition)
}

pub(crate) async fn keep_original_handler<C>(State(controller): Controller<C>) -> Response
where
    C: AnalysisClient + 'static,
{
    let transition = controller.checkout().choose(InterceptChoice::KeepOriginal);
    checkout_response(&controller, transition)
}

pub(crate) async fn return_handler<C>(State(controller): Controller<C>) -> Response
where
    C: AnalysisClient + 'static,
{
    let transition = controller.checkout().return_to_dashboard();
    checkout_response(&controller, transition)
}

pub(crate) async fn close_handler<C>(State(controller): Controller<C>) -> Response
where
    C: AnalysisClient + 'static,
{
    let transition = controller.checkout().close();
    checkout_response(&controller, transition)
}
