//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::Deserialize;
use yatra_core::{
    content,
    display::{AdvanceResult, LocateResult, PackResult},
    models::Language,
    params as core, Caller, ItineraryView, PackingLists, RouteTimeline, Trip, WeatherClient,
};

use super::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// The core params derive `JsonSchema` behind the `schema` feature; this
/// transparent wrapper passes deserialization and schema generation through
/// so the tool signatures can name them directly.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type AdvanceStep = McpParams<core::AdvanceStep>;
pub type TogglePhase = McpParams<core::TogglePhase>;
pub type SetRouteStart = McpParams<core::SetRouteStart>;
pub type LocateOnRoute = McpParams<core::LocateOnRoute>;
pub type TogglePackingItem = McpParams<core::TogglePackingItem>;
pub type WeatherQuery = McpParams<core::WeatherQuery>;

/// Options for rendering the itinerary.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ShowItinerary {
    /// 'en' (default) or 'hi'
    #[serde(default)]
    pub language: Option<String>,
}

pub type McpResult = Result<CallToolResult, McpError>;

fn text(markdown: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(markdown)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    trip: Arc<Trip>,
    weather: Arc<WeatherClient>,
    caller: Caller,
}

impl McpHandlers {
    pub fn new(trip: Arc<Trip>, weather: Arc<WeatherClient>, caller: Caller) -> Self {
        Self {
            trip,
            weather,
            caller,
        }
    }

    pub async fn show_itinerary(
        &self,
        Parameters(params): Parameters<ShowItinerary>,
    ) -> McpResult {
        debug!("show_itinerary: {params:?}");

        let language = match params.language.as_deref() {
            None => Language::En,
            Some(code) => code
                .parse::<Language>()
                .map_err(|e| McpError::invalid_params(e, None))?,
        };
        let itinerary = self
            .trip
            .itinerary(&self.caller)
            .await
            .map_err(|e| to_mcp_error("Failed to load itinerary", e))?;

        text(
            ItineraryView::new(&itinerary)
                .with_language(language)
                .to_string(),
        )
    }

    pub async fn current_step(&self) -> McpResult {
        let current = self
            .trip
            .current_step(&self.caller)
            .await
            .map_err(|e| to_mcp_error("Failed to load current step", e))?;

        text(current.to_string())
    }

    pub async fn advance_step(&self, Parameters(params): Parameters<AdvanceStep>) -> McpResult {
        debug!("advance_step: {params:?}");

        let view = self
            .trip
            .advance_step(&self.caller, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to advance step", e))?;

        let result = AdvanceResult {
            view: &view,
            clock: self.trip.clock(),
        };
        text(result.to_string())
    }

    pub async fn show_route(&self) -> McpResult {
        let overview = self
            .trip
            .route_overview(&self.caller)
            .await
            .map_err(|e| to_mcp_error("Failed to load route", e))?;

        text(RouteTimeline(&overview).to_string())
    }

    pub async fn toggle_phase(&self, Parameters(params): Parameters<TogglePhase>) -> McpResult {
        debug!("toggle_phase: {params:?}");

        let overview = self
            .trip
            .toggle_route_phase(&self.caller, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to toggle route phase", e))?;

        text(RouteTimeline(&overview).to_string())
    }

    pub async fn set_route_start(
        &self,
        Parameters(params): Parameters<SetRouteStart>,
    ) -> McpResult {
        debug!("set_route_start: {params:?}");

        let overview = self
            .trip
            .set_route_start(&self.caller, params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to set departure time", e))?;

        text(RouteTimeline(&overview).to_string())
    }

    pub async fn locate_on_route(
        &self,
        Parameters(params): Parameters<LocateOnRoute>,
    ) -> McpResult {
        let params = params.as_ref();
        debug!("locate_on_route: {params:?}");

        let position = self
            .trip
            .locate_on_route(params)
            .map_err(|e| to_mcp_error("Failed to locate position", e))?;

        let result = LocateResult {
            lat: params.lat,
            lon: params.lon,
            position: position.as_ref(),
        };
        text(result.to_string())
    }

    pub async fn list_packing(&self) -> McpResult {
        let state = self
            .trip
            .get_packing(&self.caller)
            .await
            .map_err(|e| to_mcp_error("Failed to load packing lists", e))?;

        text(PackingLists::all(&state).to_string())
    }

    pub async fn toggle_packing_item(
        &self,
        Parameters(params): Parameters<TogglePackingItem>,
    ) -> McpResult {
        debug!("toggle_packing_item: {params:?}");

        let params = params.as_ref();
        let checked = self
            .trip
            .toggle_packing_item(&self.caller, params)
            .await
            .map_err(|e| to_mcp_error("Failed to toggle packing item", e))?;

        let item = content::packing_list(params.list_key.trim())
            .and_then(|list| list.items.get(params.item_index as usize))
            .copied()
            .unwrap_or_default();
        text(PackResult { item, checked }.to_string())
    }

    pub async fn get_weather(&self, Parameters(params): Parameters<WeatherQuery>) -> McpResult {
        debug!("get_weather: {params:?}");

        let forecast = self
            .weather
            .forecast(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to fetch weather", e))?;

        let json = serde_json::to_string_pretty(&forecast)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        text(json)
    }
}
