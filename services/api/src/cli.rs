use crate::commands::{self, CheckInArgs, LoginArgs, QuestCommand, SignupArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::infra::{build_service, cli_data_path, Service};
use crate::server;
use clap::{Args, Parser, Subcommand};
use health_companions::config::AppConfig;
use health_companions::error::AppError;
use health_companions::telemetry;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "Health Companions",
    about = "Weekly wellness check-ins with seven companions, from the command line or over HTTP",
    version
)]
struct Cli {
    /// JSON file holding accounts and check-ins (overrides COMPANIONS_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Create an account and sign in
    Signup(SignupArgs),
    /// Sign in to an existing account
    Login(LoginArgs),
    /// Forget the current session
    Logout,
    /// Score a questionnaire and save it as this week's check-in
    CheckIn(CheckInArgs),
    /// Manage the quest board
    Quest {
        #[command(subcommand)]
        command: QuestCommand,
    },
    /// Show evolution, streak, and garden
    Progress,
    /// Run a scripted multi-week journey in memory
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
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let open = |data: Option<PathBuf>| -> Result<Arc<Service>, AppError> {
        let path = cli_data_path(data, &config.companions);
        Ok(build_service(&config.companions, Some(&path))?)
    };

    match command {
        Command::Serve(args) => server::run(config, args, cli.data).await,
        Command::Signup(args) => commands::signup(&*open(cli.data)?, args),
        Command::Login(args) => commands::login(&*open(cli.data)?, args),
        Command::Logout => commands::logout(&*open(cli.data)?),
        Command::CheckIn(args) => commands::check_in(&*open(cli.data)?, args),
        Command::Quest { command } => commands::quest(&*open(cli.data)?, command),
        Command::Progress => commands::progress(&*open(cli.data)?),
        Command::Demo(args) => run_demo(args, &config.companions),
    }
}
