use crate::demo::{run_guides_list, run_survey_report, GuidesListArgs, SurveyReportArgs};
use crate::server;
use advisory_site::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Advisory Site",
    about = "Serve and demonstrate the AI readiness survey and advisory guides",
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
    /// Score an answer set offline and export the report
    Survey {
        #[command(subcommand)]
        command: SurveyCommand,
    },
    /// Browse the guides library
    Guides {
        #[command(subcommand)]
        command: GuidesCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SurveyCommand {
    /// Print a readiness summary and optionally write the printable report
    Report(SurveyReportArgs),
}

#[derive(Subcommand, Debug)]
enum GuidesCommand {
    /// List guides newest first
    List(GuidesListArgs),
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
        Command::Survey {
            command: SurveyCommand::Report(args),
        } => run_survey_report(args),
        Command::Guides {
            command: GuidesCommand::List(args),
        } => run_guides_list(args),
    }
}
