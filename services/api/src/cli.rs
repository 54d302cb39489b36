use crate::demo::{run_demo, run_evaluate, DemoArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use partner_vetting::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Partner Vetting",
    about = "Score partnership applications and serve the intake API",
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
    /// Score a submission stored as JSON and print the report
    Evaluate(EvaluateArgs),
    /// Walk a sample candidate through intake, scoring, and notification
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo(args) => run_demo(args),
    }
}
