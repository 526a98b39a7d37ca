use crate::infra::override_scoring_url;
use clap::{Args, ValueEnum};
use eco_intellect::config::AppConfig;
use eco_intellect::dashboard::views::AnalysisView;
use eco_intellect::dashboard::{
    CheckoutFlow, CheckoutState, CheckoutView, DashboardController, DashboardView,
    HttpAnalysisClient, InterceptChoice, OrderInput, PackagingType, ResultsPanel, TransportMode,
};
use eco_intellect::error::AppError;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Delivery distance in kilometres
    #[arg(long, default_value_t = 5.0)]
    pub(crate) distance_km: f64,
    /// car, motorcycle, electric_vehicle or bike
    #[arg(long, default_value = "car")]
    pub(crate) transport_mode: TransportMode,
    /// plastic, paper, biodegradable or reusable
    #[arg(long, default_value = "plastic")]
    pub(crate) packaging_type: PackagingType,
    /// Estimated delivery time in minutes
    #[arg(long, default_value_t = 30)]
    pub(crate) estimated_time_minutes: u32,
    /// Order value in rupees
    #[arg(long, default_value_t = 350.0)]
    pub(crate) order_value: f64,
    /// Orders placed per week
    #[arg(long, default_value_t = 3)]
    pub(crate) frequency_per_week: u32,
    /// Print the dashboard view-model as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Override the scoring service base URL
    #[arg(long)]
    pub(crate) scoring_url: Option<String>,
}

impl AnalyzeArgs {
    fn order(&self) -> OrderInput {
        OrderInput {
            distance_km: self.distance_km,
            transport_mode: self.transport_mode,
            packaging_type: self.packaging_type,
            estimated_time_minutes: self.estimated_time_minutes,
            order_value: self.order_value,
            frequency_per_week: self.frequency_per_week,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct CheckoutArgs {
    /// Answer to the eco-delivery suggestion
    #[arg(long, value_enum, default_value_t = ChoiceArg::Eco)]
    pub(crate) choice: ChoiceArg,
    /// Transport mode shown on the delivery line
    #[arg(long, default_value = "car")]
    pub(crate) transport_mode: TransportMode,
    /// Simulated payment delay in milliseconds (defaults to CHECKOUT_PROCESSING_DELAY_MS)
    #[arg(long)]
    pub(crate) delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ChoiceArg {
    Eco,
    Original,
}

impl From<ChoiceArg> for InterceptChoice {
    fn from(value: ChoiceArg) -> Self {
        match value {
            ChoiceArg::Eco => InterceptChoice::AcceptEcoAlternative,
            ChoiceArg::Original => InterceptChoice::KeepOriginal,
        }
    }
}

pub(crate) async fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    override_scoring_url(&mut config, args.scoring_url.clone())?;

    let client = Arc::new(HttpAnalysisClient::from_config(&config.scoring)?);
    let controller = DashboardController::with_config(client, &config.checkout);
    let order = args.order();
    order.validate()?;
    controller.update_order(order);

    controller.submit().await?;
    let view = controller.view();

    if args.json {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Dashboard payload unavailable: {err}"),
        }
    } else {
        for line in dashboard_lines(&view) {
            println!("{line}");
        }
    }

    Ok(())
}

pub(crate) fn dashboard_lines(view: &DashboardView) -> Vec<String> {
    let order = &view.order;
    let mut lines = vec![
        "EcoIntellect order analysis".to_string(),
        format!(
            "Order: {:.1} km by {}, {} packaging, ~{} min, \u{20b9}{:.0}, {}x per week",
            order.distance_km,
            order.transport_mode.label(),
            order.packaging_type.label(),
            order.estimated_time_minutes,
            order.order_value,
            order.frequency_per_week
        ),
    ];

    let analysis = match &view.results {
        ResultsPanel::Ready(analysis) => analysis,
        ResultsPanel::Empty { headline, hint } => {
            lines.push(format!("\n{headline}: {hint}"));
            return lines;
        }
    };

    lines.extend(analysis_lines(analysis));
    lines
}

fn analysis_lines(analysis: &AnalysisView) -> Vec<String> {
    let card = &analysis.score_card;
    let mut lines = vec![
        format!(
            "\nEco score: {:.0} ({}) [{:?}]",
            card.eco_score, card.rating, card.band
        ),
        format!("Carbon emission: {}g CO\u{2082}", card.carbon_emission_grams),
    ];

    if let Some(comparison) = &analysis.comparison {
        lines.push("\nEmissions comparison".to_string());
        for bar in &comparison.bars {
            lines.push(format!("- {}: {}g", bar.name, bar.emissions));
        }

        lines.push("\nBetter alternatives".to_string());
        for card in &comparison.alternatives {
            lines.push(format!(
                "- {}: {}, score {:.0}, {} min ({})",
                card.title,
                card.savings_text,
                card.eco_score,
                card.estimated_time_minutes,
                card.time_difference_text
            ));
        }
    }

    let yearly = &analysis.yearly;
    lines.push("\nYearly impact".to_string());
    lines.push(format!(
        "- {} orders, {} kg CO\u{2082}, {} trees to offset, ~{} km by car",
        yearly.total_orders_per_year,
        yearly.total_carbon_kg,
        yearly.trees_needed_to_offset,
        yearly.equivalent_car_km_display
    ));
    if let Some(spent) = yearly.money_spent {
        lines.push(format!("- \u{20b9}{spent:.0} spent on delivery orders"));
    }
    lines.push(format!("- {}", yearly.environmental_context));

    if let Some(panel) = &analysis.scale_panel {
        lines.push("\nIf everyone switched".to_string());
        for scenario in &panel.series {
            lines.push(format!(
                "- {}: {} {} CO\u{2082} saved",
                scenario.label, scenario.total_co2_saved_tonnes, panel.unit
            ));
        }
    }

    lines
}

pub(crate) async fn run_checkout_demo(args: CheckoutArgs) -> Result<(), AppError> {
    let delay = match args.delay_ms {
        Some(millis) => Duration::from_millis(millis),
        None => AppConfig::load()?.checkout.processing_delay,
    };
    let flow = CheckoutFlow::new(delay);
    let order = OrderInput {
        transport_mode: args.transport_mode,
        ..OrderInput::default()
    };
    let mut states = flow.subscribe();

    println!("Eco checkout demo");

    flow.open();
    print_checkout(&CheckoutView::build(&flow.session(), &order));

    flow.pay();
    print_checkout(&CheckoutView::build(&flow.session(), &order));

    states
        .wait_for(|state| *state == CheckoutState::Intercept)
        .await
        .map_err(|_| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "checkout flow stopped before the payment completed",
            ))
        })?;
    print_checkout(&CheckoutView::build(&flow.session(), &order));

    flow.choose(args.choice.into());
    print_checkout(&CheckoutView::build(&flow.session(), &order));

    flow.return_to_dashboard();
    println!("\nBack on the dashboard (checkout {})", flow.state().label());

    Ok(())
}

fn print_checkout(view: &CheckoutView) {
    for line in checkout_lines(view) {
        println!("{line}");
    }
}

pub(crate) fn checkout_lines(view: &CheckoutView) -> Vec<String> {
    let mut lines = vec![format!("\n[{}]", view.state_label)];

    if let Some(summary) = &view.summary {
        lines.push(summary.restaurant.to_string());
        for item in &summary.items {
            lines.push(format!(
                "- {}x {}: \u{20b9}{}",
                item.quantity, item.name, item.price
            ));
        }
        lines.push(format!(
            "- {}: \u{20b9}{}",
            summary.delivery_label, summary.delivery_fee
        ));
        lines.push(format!("Total: \u{20b9}{}", summary.total));
    }
    if let Some(label) = &view.pay_label {
        lines.push(format!("> {label}"));
    }

    if let Some(intercept) = &view.intercept {
        lines.push(intercept.prompt.clone());
        lines.push(format!(
            "{}: {}",
            intercept.offer.headline, intercept.offer.option_label
        ));
        lines.push(format!(
            "{} {}",
            intercept.saving_text, intercept.discount_text
        ));
        lines.push(format!("> {}", intercept.accept_label));
        lines.push(format!("> {}", intercept.decline_label));
    }

    if let Some(confirmation) = &view.confirmation {
        lines.push(confirmation.headline.to_string());
        lines.push(confirmation.detail.clone());
    }

    lines
}
