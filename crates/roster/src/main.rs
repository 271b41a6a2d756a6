use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use roster_config::Config;
use roster_output::format_profiling;
use roster_service::UserService;
use roster_store::MemoryRepository;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod demo;
mod profiling;
mod shapes;

use demo::{report_outcome, run_demo, DemoOptions};
use profiling::run_profiled;

const MAIN_HELP: &str = r#"Roster is a small in-memory user directory.

Running `roster` with no arguments creates a few users, updates one of them,
lists users in an age range and draws some shapes. Validation errors
(duplicate email, malformed email, out-of-range age) are printed and end
the run.

Use `--export` to also write every user to a JSON file. Without a value the
path comes from the `[export]` section of the config file."#;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, help = "Print user listings as JSON")]
    json: bool,

    #[arg(long, value_name = "PATH", help = "Export users to a JSON file")]
    export: Option<Option<PathBuf>>,

    #[arg(long, value_name = "PATH", env = "ROSTER_CONFIG", help = "Config file to read")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print timing information for profiling")]
    profile: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = DemoOptions {
        json: cli.json,
        export: cli
            .export
            .map(|path| path.unwrap_or_else(|| config.export.path.clone())),
    };

    info!("Starting roster demo");
    let mut service = UserService::new(MemoryRepository::new());
    let mut stdout = std::io::stdout().lock();

    let result = if cli.profile {
        let (result, functions) =
            run_profiled(|| run_demo(&mut service, &options, &mut stdout));
        eprintln!("\n{}", format_profiling(&functions));
        result
    } else {
        run_demo(&mut service, &options, &mut stdout)
    };

    report_outcome(result, &mut stdout)
}
