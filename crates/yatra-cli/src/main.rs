//! Yatra CLI Application
//!
//! Terminal interface and MCP server for the family road-trip coordinator.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, YatraMcpServer};
use renderer::TerminalRenderer;
use yatra_core::TripBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let caller = args.caller();
    let Args {
        database_file,
        no_color,
        command,
        ..
    } = args;

    let trip = TripBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize trip")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Yatra started");

    match command {
        Some(Plan(args)) => Cli::new(trip, renderer, caller).show_plan(args).await,
        Some(Now) => Cli::new(trip, renderer, caller).show_current().await,
        Some(Advance(args)) => Cli::new(trip, renderer, caller).advance(args).await,
        Some(Reset) => Cli::new(trip, renderer, caller).reset().await,
        Some(Route { command }) => {
            Cli::new(trip, renderer, caller)
                .handle_route_command(command)
                .await
        }
        Some(Pack { command }) => {
            Cli::new(trip, renderer, caller)
                .handle_pack_command(command)
                .await
        }
        Some(Weather(args)) => Cli::new(trip, renderer, caller).weather(args).await,
        Some(Serve) => {
            info!("Starting Yatra MCP server");
            run_stdio_server(YatraMcpServer::new(trip, caller))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(trip, renderer, caller)
                .show_plan(Default::default())
                .await
        }
    }
}
