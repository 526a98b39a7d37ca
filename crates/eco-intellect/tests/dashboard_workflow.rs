//! End-to-end scenarios for the dashboard router: edit the order, analyze
//! it, then walk the simulated checkout through the eco intercept.

mod common {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Method, Request},
        response::Response,
        Router,
    };
    use serde_json::Value;

    use eco_intellect::config::CheckoutConfig;
    use eco_intellect::dashboard::{
        dashboard_router, AnalysisClient, AnalysisError, AnalysisResult, Alternative,
        DashboardController, OrderInput, YearlyProjection,
    };

    /// Scores every order the same way and remembers what it was asked.
    #[derive(Default)]
    pub(super) struct FixedScorer {
        pub(super) seen: Mutex<Vec<OrderInput>>,
    }

    #[async_trait]
    impl AnalysisClient for FixedScorer {
        async fn analyze(&self, input: &OrderInput) -> Result<AnalysisResult, AnalysisError> {
            self.seen.lock().expect("seen lock").push(input.clone());
            Ok(AnalysisResult {
                eco_score: 88.0,
                rating: "Excellent".to_string(),
                carbon_emission_grams: 115.0,
                better_alternatives: vec![Alternative {
                    transport_mode: "bike".to_string(),
                    packaging_type: "reusable".to_string(),
                    carbon_emission_grams: 20.0,
                    carbon_saved_grams: 95.0,
                    eco_score: 97.0,
                    estimated_time_minutes: 28,
                    time_difference_minutes: -2,
                }],
                yearly_projection: YearlyProjection {
                    total_orders_per_year: 104,
                    total_carbon_kg: 11.96,
                    trees_needed_to_offset: 1,
                    equivalent_car_km: 99.7,
                    money_spent: None,
                    scale_scenarios: Some(Vec::new()),
                },
                environmental_context: "About a short scooter commute".to_string(),
            })
        }
    }

    pub(super) fn app() -> (Router, Arc<DashboardController<FixedScorer>>, Arc<FixedScorer>) {
        let scorer = Arc::new(FixedScorer::default());
        let config = CheckoutConfig {
            processing_delay: Duration::from_millis(1500),
        };
        let controller = Arc::new(DashboardController::with_config(scorer.clone(), &config));
        (dashboard_router(controller.clone()), controller, scorer)
    }

    pub(super) fn post(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    pub(super) fn put_json(uri: &str, payload: &Value) -> Request<Body> {
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request")
    }

    pub(super) async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }
}

use axum::http::StatusCode;
use common::{app, post, put_json, read_json_body};
use eco_intellect::dashboard::{CheckoutState, TransportMode};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test(start_paused = true)]
async fn order_analysis_and_eco_checkout_round_trip() {
    let (router, controller, scorer) = app();

    let response = router
        .clone()
        .oneshot(put_json(
            "/api/v1/dashboard/order",
            &json!({
                "distance_km": 3.2,
                "transport_mode": "electric_vehicle",
                "packaging_type": "paper",
                "estimated_time_minutes": 30,
                "order_value": 420.0,
                "frequency_per_week": 2
            }),
        ))
        .await
        .expect("order response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(post("/api/v1/dashboard/analyze"))
        .await
        .expect("analyze response");
    assert_eq!(response.status(), StatusCode::OK);
    let dashboard = read_json_body(response).await;
    let results = &dashboard["results"];
    assert_eq!(results["score_card"]["band"], "good");
    assert_eq!(results["comparison"]["alternatives"][0]["time_difference_text"], "-2 min diff");
    assert_eq!(results["yearly"]["equivalent_car_km_display"], "100");
    assert!(results.get("scale_panel").is_none());

    let seen = scorer.seen.lock().expect("seen lock").clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].transport_mode, TransportMode::ElectricVehicle);

    for path in ["/api/v1/checkout/open", "/api/v1/checkout/pay"] {
        let response = router.clone().oneshot(post(path)).await.expect("checkout");
        assert_eq!(read_json_body(response).await["applied"], true, "{path}");
    }

    let mut states = controller.checkout().subscribe();
    states
        .wait_for(|state| *state == CheckoutState::Intercept)
        .await
        .expect("flow alive");

    let response = router
        .clone()
        .oneshot(post("/api/v1/checkout/accept-eco"))
        .await
        .expect("accept response");
    let checkout = read_json_body(response).await;
    assert_eq!(checkout["state"], "success");
    assert_eq!(checkout["choice"], "accept_eco_alternative");
    assert_eq!(checkout["confirmation"]["headline"], "Order Confirmed!");

    let response = router
        .clone()
        .oneshot(post("/api/v1/checkout/return"))
        .await
        .expect("return response");
    let checkout = read_json_body(response).await;
    assert_eq!(checkout["state"], "closed");
    assert_eq!(checkout["visible"], false);
    assert!(checkout.get("choice").is_none());

    // Checkout never touches the analysis or the order.
    assert_eq!(scorer.seen.lock().expect("seen lock").len(), 1);
    assert_eq!(controller.analysis().expect("analysis kept").eco_score, 88.0);
}

#[tokio::test(start_paused = true)]
async fn closing_mid_payment_leaves_nothing_behind() {
    let (router, controller, _) = app();

    router.clone().oneshot(post("/api/v1/checkout/open")).await.expect("open");
    router.clone().oneshot(post("/api/v1/checkout/pay")).await.expect("pay");

    let response = router
        .clone()
        .oneshot(post("/api/v1/checkout/close"))
        .await
        .expect("close response");
    assert_eq!(read_json_body(response).await["applied"], true);

    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    tokio::task::yield_now().await;

    assert_eq!(controller.checkout().state(), CheckoutState::Closed);
    let response = router
        .oneshot(post("/api/v1/checkout/open"))
        .await
        .expect("reopen response");
    let checkout = read_json_body(response).await;
    assert_eq!(checkout["state"], "initial");
    assert_eq!(checkout["pay_label"], "Proceed to Pay \u{20b9}390");
}
