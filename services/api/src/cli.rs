use crate::demo::{run_analyze, run_checkout_demo, AnalyzeArgs, CheckoutArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use eco_intellect::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "EcoIntellect",
    about = "Run the EcoIntellect sustainability dashboard or score an order from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score one order against the scoring service and print the dashboard
    Analyze(AnalyzeArgs),
    /// Walk the simulated eco checkout from review to confirmation
    Checkout(CheckoutArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the scoring service base URL
    #[arg(long)]
    pub(crate) scoring_url: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args).await,
        Command::Checkout(args) => run_checkout_demo(args).await,
    }
}
