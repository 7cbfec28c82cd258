use std::io::{self, Read};
use std::sync::Arc;

use campuslines::config::{AppConfig, ConfigError};
use campuslines::parse::ParseError;
use campuslines::routing::{RouteError, RouteSource, RoutingClient};
use campuslines::session::{Command as SessionCommand, HELP, Session};
use campuslines::view::JsonLinesRenderer;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("routing error: {0}")]
    Route(#[from] RouteError),
    #[error("edge list rejected: {0}")]
    Rejected(#[from] ParseError),
    #[error("failed to read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("route request finished without an outcome")]
    NoOutcome,
}

#[derive(Parser, Debug)]
#[command(name = "campuslines", about = "Draw colored line segments and campus routes on a map view")]
struct Cli {
    /// Base URL of the routing service.
    #[arg(long, env = "CAMPUSLINES_ROUTING_URL")]
    routing_url: Option<String>,

    /// Color used for fetched routes.
    #[arg(long, env = "CAMPUSLINES_ROUTE_COLOR")]
    route_color: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session reading commands from stdin (default).
    Repl,
    /// Parse an edge list once and render it.
    Draw {
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
    /// Fetch the shortest route between two buildings and render it.
    Route { start: String, end: String },
    /// List the building directory.
    Buildings,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.routing_url {
        config.routing.base_url = url.trim_end_matches('/').to_owned();
    }
    if let Some(color) = cli.route_color {
        config.routing.route_color = color;
    }
    tracing::info!(
        routing_url = %config.routing.base_url,
        lat = config.view.default_center.lat,
        lng = config.view.default_center.lng,
        "configuration loaded"
    );

    let client = RoutingClient::new(&config.routing, config.bounds)?;
    let source: Arc<dyn RouteSource> = Arc::new(client);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => run_repl(&config, source).await,
        Command::Draw { input } => run_draw(&config, source, &input),
        Command::Route { start, end } => run_route(&config, source, start, end).await,
        Command::Buildings => run_buildings(&config, source).await,
    }
}

async fn run_repl(config: &AppConfig, source: Arc<dyn RouteSource>) -> Result<(), CliError> {
    let mut session = Session::new(config, JsonLinesRenderer::stdio(), source);
    if let Err(e) = session.load_directory().await {
        tracing::warn!(error = %e, "building directory unavailable; routing codes will not be checked");
    }
    eprintln!("{HELP}");
    session.handle(SessionCommand::Show);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session.run(stdin).await;
    Ok(())
}

fn run_draw(config: &AppConfig, source: Arc<dyn RouteSource>, input: &str) -> Result<(), CliError> {
    let text = read_input(input)?;
    let mut session = Session::new(config, JsonLinesRenderer::stdio(), source);
    session.set_edge_text(text);
    session.draw_edges()?;
    Ok(())
}

async fn run_route(
    config: &AppConfig,
    source: Arc<dyn RouteSource>,
    start: String,
    end: String,
) -> Result<(), CliError> {
    let mut session = Session::new(config, JsonLinesRenderer::stdio(), source);
    session.load_directory().await?;
    session.handle(SessionCommand::Start(start));
    session.handle(SessionCommand::End(end));
    session.request_route()?;

    let outcome = session.next_outcome().await.ok_or(CliError::NoOutcome)?;
    let failure = outcome.result.as_ref().err().cloned();
    session.apply_outcome(outcome);
    match failure {
        Some(e) => Err(CliError::Route(e)),
        None => Ok(()),
    }
}

async fn run_buildings(config: &AppConfig, source: Arc<dyn RouteSource>) -> Result<(), CliError> {
    let mut session = Session::new(config, JsonLinesRenderer::stdio(), source);
    session.load_directory().await?;
    session.handle(SessionCommand::Buildings);
    Ok(())
}

fn read_input(path: &str) -> Result<String, CliError> {
    let mut text = String::new();
    let result = if path == "-" {
        io::stdin().read_to_string(&mut text)
    } else {
        std::fs::File::open(path).and_then(|mut file| file.read_to_string(&mut text))
    };
    result.map_err(|source| CliError::Input { path: path.to_owned(), source })?;
    Ok(text)
}
