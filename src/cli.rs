use std::io;
use std::sync::Arc;

use admission_pipeline::config::AppConfig;
use admission_pipeline::error::AppError;
use admission_pipeline::telemetry;
use admission_pipeline::workflows::admission::{
    render_roster, AdmissionPipeline, AdmissionSummary, AutoConfirm, ConfirmationGate,
    ConsoleGate, ConsoleNotifier, Roster, TracingNotifier,
};
use clap::{Args, Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "admission-pipeline",
    about = "Filter applicants through eligibility, test, interview, and merit stages",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the admission pipeline against the built-in roster (default command)
    Run(RunArgs),
    /// Print the built-in roster without running any stage
    Roster(RosterArgs),
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Answer "yes" at every stage instead of reading stdin
    #[arg(long)]
    yes: bool,
    /// Print a JSON summary of the run after the console output
    #[arg(long)]
    summary: bool,
}

#[derive(Args, Debug, Default)]
struct RosterArgs {
    /// Emit the roster as JSON
    #[arg(long)]
    json: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Run(RunArgs::default()));

    match command {
        Command::Run(args) => {
            let auto_confirm = args.yes || config.console.auto_confirm;
            info!(?config.environment, auto_confirm, "starting admission pipeline");
            if auto_confirm {
                run_pipeline(AutoConfirm::new(io::stdout()), args.summary)
            } else {
                run_pipeline(ConsoleGate::stdio(), args.summary)
            }
        }
        Command::Roster(args) => print_roster(args),
    }
}

fn run_pipeline<G: ConfirmationGate>(gate: G, summary: bool) -> Result<(), AppError> {
    let console = Arc::new(ConsoleNotifier::stdout());
    let mut pipeline = AdmissionPipeline::standard(console, gate, io::stdout());
    pipeline.add_sink(Arc::new(TracingNotifier));

    let mut roster = Roster::sample();
    let outcome = pipeline.start(roster.cohort())?;

    if summary {
        let report = AdmissionSummary::from_outcome(&outcome, &pipeline.stage_kinds());
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn print_roster(args: RosterArgs) -> Result<(), AppError> {
    let roster = Roster::sample();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&roster)?);
    } else {
        println!("{}", render_roster(&roster));
    }
    Ok(())
}
