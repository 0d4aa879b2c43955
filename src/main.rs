use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use holdings_report::{
    api::UpstoxApi,
    app::{App, html, text},
    config::Config,
    dataset::{self, DatasetFormat},
    errors::ReportError,
    report,
};
use tracing::{Level, info};

#[derive(Debug, Parser)]
#[command(name = "holdings-report", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the report in the terminal
    View(DataArgs),
    /// Write the report as a standalone HTML page
    Html {
        #[command(flatten)]
        data: DataArgs,

        /// Destination of the HTML file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print the holdings table to stdout
    Print(DataArgs),
    /// Fetch holdings from Upstox and write the dataset file
    Fetch {
        /// Dataset destination; a `.js` extension writes the script wrapper
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Default, Args)]
struct DataArgs {
    /// Dataset file (JSON or `const holdingsData = ...;` script)
    #[arg(short, long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::View(DataArgs::default()));

    let config = Config::from_env()?;
    init_tracing(&config, matches!(command, Command::View(_)))?;

    match command {
        Command::View(args) => view(config.with_data_path(args.data)),
        Command::Html { data, output } => write_html(config.with_data_path(data.data), &output),
        Command::Print(args) => print(config.with_data_path(args.data)),
        Command::Fetch { output } => fetch(config.with_data_path(output)).await,
    }
}

fn init_tracing(config: &Config, to_file: bool) -> Result<()> {
    let level = config.log_level().parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    if to_file {
        let file = File::create(config.log_file()).with_context(|| {
            format!("Failed to create log file {}", config.log_file().display())
        })?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn view(config: Config) -> Result<()> {
    let data = dataset::load(config.data_path())?;
    let rendered = report::render(data.as_ref(), config.currency());

    let mut app = App::new(rendered, config.currency().clone());
    app.run()
}

fn write_html(config: Config, output: &Path) -> Result<()> {
    let data = dataset::load(config.data_path())?.ok_or(ReportError::MissingDataset)?;
    let view = report::render(Some(&data), config.currency())?;

    html::write(output, &data, &view, config.currency())?;
    println!("Open {} in your browser to view the report", output.display());

    Ok(())
}

fn print(config: Config) -> Result<()> {
    let data = dataset::load(config.data_path())?;
    let view = report::render(data.as_ref(), config.currency())?;

    print!("{}", text::render(&view));

    Ok(())
}

async fn fetch(config: Config) -> Result<()> {
    let api = UpstoxApi::new(
        config.base_url().clone(),
        config.require_access_token()?.to_string(),
    );

    let raw = api
        .get_long_term_holdings()
        .await
        .context("Failed to fetch holdings data")?;

    let report_date = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let data = dataset::generate(&raw, report_date).ok_or(ReportError::NoHoldings)?;

    let path = config.data_path();
    dataset::save(path, &data, DatasetFormat::from_path(path))?;
    info!(holdings = data.holdings().len(), "Report dataset generated");
    println!("Holdings data saved to {}", path.display());

    Ok(())
}
