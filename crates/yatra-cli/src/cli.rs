//! Command handlers for the terminal interface.
//!
//! Each handler calls one [`Trip`] operation, wraps the result in a display
//! type from `yatra_core::display` and hands the markdown to the renderer.

use anyhow::{Context, Result};
use log::debug;
use yatra_core::{
    content,
    display::{AdvanceResult, LocateResult, PackResult, ResetResult, TripFinished},
    models::Language,
    params::{AdvanceStep, LocateOnRoute, SetRouteStart, TogglePackingItem, TogglePhase},
    Caller, ItineraryView, PackingLists, RouteTimeline, Trip, WeatherClient,
};

use crate::{
    args::{AdvanceArgs, PackCommands, PlanArgs, RouteCommands, WeatherArgs},
    renderer::TerminalRenderer,
};

/// Runs CLI commands against one trip as one caller.
pub struct Cli {
    trip: Trip,
    renderer: TerminalRenderer,
    caller: Caller,
}

impl Cli {
    pub fn new(trip: Trip, renderer: TerminalRenderer, caller: Caller) -> Self {
        Self {
            trip,
            renderer,
            caller,
        }
    }

    pub async fn show_plan(&self, args: PlanArgs) -> Result<()> {
        let itinerary = self
            .trip
            .itinerary(&self.caller)
            .await
            .context("Failed to load itinerary")?;

        let language = Language::from(args.lang);
        self.renderer.render(
            &ItineraryView::new(&itinerary)
                .with_language(language)
                .to_string(),
        )
    }

    pub async fn show_current(&self) -> Result<()> {
        let current = self
            .trip
            .current_step(&self.caller)
            .await
            .context("Failed to load current step")?;

        self.renderer.render(&current.to_string())
    }

    pub async fn advance(&self, args: AdvanceArgs) -> Result<()> {
        let slug = match args.slug {
            Some(slug) => slug,
            None => {
                let current = self
                    .trip
                    .current_step(&self.caller)
                    .await
                    .context("Failed to load current step")?;
                match current.step {
                    Some(step) => step.definition.slug.to_string(),
                    None => {
                        return self.renderer.render(&TripFinished.to_string());
                    }
                }
            }
        };

        let params = AdvanceStep {
            slug,
            status: args.status.to_string(),
            skip_reason: args.reason,
        };
        debug!("advance: {params:?}");

        let view = self
            .trip
            .advance_step(&self.caller, &params)
            .await
            .with_context(|| format!("Failed to advance step '{}'", params.slug))?;

        let result = AdvanceResult {
            view: &view,
            clock: self.trip.clock(),
        };
        self.renderer.render(&result.to_string())
    }

    pub async fn reset(&self) -> Result<()> {
        let count = self
            .trip
            .reset_steps(&self.caller)
            .await
            .context("Failed to reset trip")?;

        self.renderer.render(&ResetResult { count }.to_string())
    }

    pub async fn handle_route_command(&self, command: RouteCommands) -> Result<()> {
        let overview = match command {
            RouteCommands::Show => self
                .trip
                .route_overview(&self.caller)
                .await
                .context("Failed to load route")?,
            RouteCommands::Toggle(args) => self
                .trip
                .toggle_route_phase(&self.caller, &TogglePhase::from(args))
                .await
                .context("Failed to toggle route phase")?,
            RouteCommands::Start(args) => self
                .trip
                .set_route_start(&self.caller, &SetRouteStart::from(args))
                .await
                .context("Failed to set departure time")?,
            RouteCommands::ClearStart => self
                .trip
                .set_route_start(&self.caller, &SetRouteStart::default())
                .await
                .context("Failed to clear departure time")?,
            RouteCommands::Locate(args) => {
                return self.locate(&LocateOnRoute::from(args));
            }
        };

        self.renderer.render(&RouteTimeline(&overview).to_string())
    }

    fn locate(&self, params: &LocateOnRoute) -> Result<()> {
        let position = self
            .trip
            .locate_on_route(params)
            .context("Failed to locate position")?;

        let result = LocateResult {
            lat: params.lat,
            lon: params.lon,
            position: position.as_ref(),
        };
        self.renderer.render(&result.to_string())
    }

    pub async fn handle_pack_command(&self, command: PackCommands) -> Result<()> {
        match command {
            PackCommands::List => {
                let state = self
                    .trip
                    .get_packing(&self.caller)
                    .await
                    .context("Failed to load packing lists")?;
                self.renderer.render(&PackingLists::all(&state).to_string())
            }
            PackCommands::Toggle(args) => {
                let params = TogglePackingItem::from(args);
                let checked = self
                    .trip
                    .toggle_packing_item(&self.caller, &params)
                    .await
                    .context("Failed to toggle packing item")?;

                let item = content::packing_list(params.list_key.trim())
                    .and_then(|list| list.items.get(params.item_index as usize))
                    .copied()
                    .unwrap_or_default();
                self.renderer
                    .render(&PackResult { item, checked }.to_string())
            }
        }
    }

    /// Prints the upstream forecast JSON as is.
    pub async fn weather(&self, args: WeatherArgs) -> Result<()> {
        let client = WeatherClient::new();
        let forecast = client
            .forecast(&args.into())
            .await
            .context("Failed to fetch weather")?;

        println!("{}", serde_json::to_string_pretty(&forecast)?);
        Ok(())
    }
}
