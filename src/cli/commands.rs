//! CLI command implementations

use std::io::Write;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{self, log_event, log_event_with_fields, Event};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse CLI args and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            debug,
        } => {
            let config = resolve_config(config.as_deref(), host, port, debug)?;
            serve(config)
        }
        Command::Config { config } => {
            let config = resolve_config(config.as_deref(), None, None, false)?;
            print_config(&config, &mut std::io::stdout())
        }
    }
}

/// Load the config file (if any) and apply command-line overrides.
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    debug: bool,
) -> CliResult<HttpServerConfig> {
    let mut config = HttpServerConfig::load_or_default(path)?;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.debug |= debug;

    config.validate()?;
    Ok(config)
}

/// Start the server and block until it shuts down
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    observability::init(config.debug);
    log_event(Event::BootStart);

    let port = config.port.to_string();
    let debug = config.debug.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("host", config.host.as_str()),
            ("port", port.as_str()),
            ("debug", debug.as_str()),
        ],
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Write the effective configuration as pretty JSON
pub fn print_config<W: Write>(config: &HttpServerConfig, out: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, config)?;
    writeln!(out)?;
    Ok(())
}
