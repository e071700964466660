mod api;

use std::io::{Write, stdout};
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fraglog_game::{FileLogSource, ParserConfig, load_parser_config, parse_source};
use tokio::net::TcpListener;

use api::{AppState, router};

#[derive(Debug, Parser)]
#[command(name = "fraglog-server", version)]
#[command(about = "Parses an arena server log and serves its games over HTTP")]
struct Args {
    /// Game log to parse at startup
    #[arg(long, env = "FRAGLOG_FILE", default_value = "data/games.log")]
    log: PathBuf,

    /// Optional JSON parser config (world_id, max_prefix_width)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind
    #[arg(long, env = "PORT", default_value_t = 3333)]
    port: u16,

    /// Print the games summary as JSON and exit instead of serving
    #[arg(long)]
    dump: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = resolve_config(&args)?;
    let source = FileLogSource::new(&args.log);
    let parser = parse_source(&source, config)
        .with_context(|| format!("loading game log {}", args.log.display()))?;
    log::info!(
        "loaded {} games from {}",
        parser.registry().len(),
        args.log.display()
    );

    if args.dump {
        let mut out = stdout().lock();
        serde_json::to_writer_pretty(&mut out, &parser.summary())?;
        writeln!(out)?;
        return Ok(());
    }

    let state = AppState::new(parser.into_registry());
    serve(&args, state).await
}

fn resolve_config(args: &Args) -> Result<ParserConfig> {
    let Some(path) = args.config.as_deref() else {
        return Ok(ParserConfig::default());
    };
    load_parser_config(path).with_context(|| format!("loading parser config {}", path.display()))
}

async fn serve(args: &Args, state: AppState) -> Result<()> {
    let address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.host, args.port))?;
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("binding {address}"))?;
    log::info!("Server listening on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {error}");
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_default_to_serving() {
        let args = Args::try_parse_from(["fraglog-server"]).unwrap();
        assert!(!args.dump);
        assert!(args.config.is_none());
    }

    #[test]
    fn args_accept_overrides() {
        let args = Args::try_parse_from([
            "fraglog-server",
            "--log",
            "/var/log/quake/games.log",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--dump",
        ])
        .unwrap();
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 8080);
        assert_eq!(args.log, PathBuf::from("/var/log/quake/games.log"));
        assert!(args.dump);
    }

    #[test]
    fn default_config_when_no_path() {
        let args = Args::try_parse_from(["fraglog-server"]).unwrap();
        assert_eq!(resolve_config(&args).unwrap(), ParserConfig::default());
    }
}
