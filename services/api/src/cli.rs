use crate::demo::{run_demo, run_evaluate, run_partners, DemoArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use partner_earn::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Partner Earn Eligibility",
    about = "Evaluate loyalty partner earn eligibility from the command line or over HTTP",
    version
)]
struct Cli {
    /// JSON partner catalog to load instead of the built-in one (overrides APP_PARTNER_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a single transaction context
    Evaluate(EvaluateArgs),
    /// Evaluate the example scenario (EU, AERO, Member, Online, promo active)
    Demo(DemoArgs),
    /// List configured partners and their override rules
    Partners,
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
    let catalog = cli.catalog;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args, catalog).await,
        Command::Evaluate(args) => run_evaluate(args, catalog),
        Command::Demo(args) => run_demo(args, catalog),
        Command::Partners => run_partners(catalog),
    }
}
