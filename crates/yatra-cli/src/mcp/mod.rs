//! MCP server implementation for Yatra
//!
//! Exposes the trip operations as Model Context Protocol tools over stdio so
//! an assistant can read the live itinerary and record progress for the
//! family.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};
use yatra_core::{Caller, Trip, WeatherClient};

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
pub use handlers::{
    AdvanceStep, LocateOnRoute, McpResult, SetRouteStart, ShowItinerary, TogglePackingItem,
    TogglePhase, WeatherQuery,
};

/// MCP server for Yatra
///
/// Every tool runs as the caller the server was started with.
#[derive(Clone)]
pub struct YatraMcpServer {
    trip: Arc<Trip>,
    weather: Arc<WeatherClient>,
    caller: Caller,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl YatraMcpServer {
    pub fn new(trip: Trip, caller: Caller) -> Self {
        Self {
            trip: Arc::new(trip),
            weather: Arc::new(WeatherClient::new()),
            caller,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.trip.clone(), self.weather.clone(), self.caller.clone())
    }

    #[tool(
        name = "show_itinerary",
        description = "Show every step of the trip grouped by day, with live times. Times of steps after a late finish are pushed back and marked with the delay, e.g. '6:20 – 6:50 AM (+5 min)'. Optional language: 'en' (default) or 'hi'."
    )]
    async fn show_itinerary(&self, params: Parameters<ShowItinerary>) -> McpResult {
        self.handlers().show_itinerary(params).await
    }

    #[tool(
        name = "current_step",
        description = "Show the step the family is on now, with its live time, place, what to carry and tips, plus the step after it."
    )]
    async fn current_step(&self) -> McpResult {
        self.handlers().current_step().await
    }

    #[tool(
        name = "advance_step",
        description = "Finish a step by slug with status 'done' or 'skipped'. A skipped step may carry a skip_reason. Finishing the active step makes the next upcoming step active; finishing late shifts the following steps."
    )]
    async fn advance_step(&self, params: Parameters<AdvanceStep>) -> McpResult {
        self.handlers().advance_step(params).await
    }

    #[tool(
        name = "show_route",
        description = "Show the drive as numbered phases with live times, which are done, the distance covered and the current segment. Indexes shown here are the ones toggle_phase expects."
    )]
    async fn show_route(&self) -> McpResult {
        self.handlers().show_route().await
    }

    #[tool(
        name = "toggle_phase",
        description = "Mark a route phase done, or undo it if it is already done. Takes the zero-based index from show_route."
    )]
    async fn toggle_phase(&self, params: Parameters<TogglePhase>) -> McpResult {
        self.handlers().toggle_phase(params).await
    }

    #[tool(
        name = "set_route_start",
        description = "Set the departure time of the drive, e.g. '7:45 AM', which shifts every phase. Omit start_time to go back to the planned departure."
    )]
    async fn set_route_start(&self, params: Parameters<SetRouteStart>) -> McpResult {
        self.handlers().set_route_start(params).await
    }

    #[tool(
        name = "locate_on_route",
        description = "Place a GPS position (lat, lon) on the route and report the kilometre reached and how far off the road it is."
    )]
    async fn locate_on_route(&self, params: Parameters<LocateOnRoute>) -> McpResult {
        self.handlers().locate_on_route(params).await
    }

    #[tool(
        name = "list_packing",
        description = "Show every packing list with item indexes and which items are already packed."
    )]
    async fn list_packing(&self) -> McpResult {
        self.handlers().list_packing().await
    }

    #[tool(
        name = "toggle_packing_item",
        description = "Check or uncheck one packing item by list_key and zero-based item_index, as shown by list_packing."
    )]
    async fn toggle_packing_item(&self, params: Parameters<TogglePackingItem>) -> McpResult {
        self.handlers().toggle_packing_item(params).await
    }

    #[tool(
        name = "get_weather",
        description = "Forecast JSON from Open-Meteo for lat/lon (defaults to Rameshwaram). compact=true returns current conditions and today only; otherwise a five-day forecast with hourly temperatures. Cached for 15 minutes."
    )]
    async fn get_weather(&self, params: Parameters<WeatherQuery>) -> McpResult {
        self.handlers().get_weather(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for YatraMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "yatra".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Yatra coordinates a family road trip: a fixed itinerary of steps over several days, a car route split into phases, and shared packing lists.

## Core Concepts
- **Steps**: itinerary items with a planned time window. Exactly one step is active; the rest are upcoming, done or skipped.
- **Live times**: when a step finishes later than planned, every later step is pushed back by the overrun. Early finishes never pull steps earlier. Skipped steps push nothing.
- **Route phases**: drives and stops of the car journey, each with a duration from the departure time.

## Workflow
1. `current_step` to see what is happening now
2. `advance_step` with status 'done' (or 'skipped' plus a reason) when it ends
3. `show_itinerary` to see the shifted times for the rest of the day
4. During the drive: `show_route`, `toggle_phase` as stops are reached, `locate_on_route` for a GPS fix
5. Before leaving: `list_packing` and `toggle_packing_item`

## Tool Categories
- **Itinerary**: show_itinerary, current_step, advance_step
- **Route**: show_route, toggle_phase, set_route_start, locate_on_route
- **Packing**: list_packing, toggle_packing_item
- **Weather**: get_weather"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: YatraMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Yatra MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
