//! Command-line interface definitions using clap
//!
//! Each command that takes input has a clap `*Args` struct converted into
//! the matching core parameter type with `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Trip
//! ```
//!
//! Clap owns parsing and help text. Validation of the values themselves
//! stays in the core params so the CLI and the MCP server reject the same
//! input the same way.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use yatra_core::{
    access::Caller,
    models::Language,
    params::{LocateOnRoute, SetRouteStart, TogglePackingItem, TogglePhase, WeatherQuery},
    weather::{DEFAULT_LAT, DEFAULT_LON},
};

/// Family road-trip itinerary coordinator
///
/// Shows the itinerary with times shifted by how the day is really going,
/// tracks the drive phase by phase and keeps the shared packing lists. Run
/// `yatra serve` to expose the same operations to MCP clients.
#[derive(Parser)]
#[command(version, about, name = "yatra")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/yatra/yatra.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Who is making changes; required for anything touching the trip
    #[arg(long, global = true, env = "YATRA_USER")]
    pub user: Option<String>,

    /// Act with the admin role (needed for `reset`)
    #[arg(long, global = true)]
    pub admin: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Identity the operations run as.
    pub fn caller(&self) -> Caller {
        match self.user.as_deref().map(str::trim) {
            None | Some("") => Caller::anonymous(),
            Some(user) if self.admin => Caller::admin(user),
            Some(user) => Caller::viewer(user),
        }
    }
}

/// Available commands for the Yatra CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show the itinerary with live times (default)
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Show the current and next step
    Now,
    /// Finish the current step
    #[command(alias = "a")]
    Advance(AdvanceArgs),
    /// Put every step back to its initial state (admin only)
    Reset,
    /// Track the drive
    #[command(alias = "r")]
    Route {
        #[command(subcommand)]
        command: RouteCommands,
    },
    /// Shared packing checklists
    Pack {
        #[command(subcommand)]
        command: PackCommands,
    },
    /// Forecast for the destination or any coordinates
    Weather(WeatherArgs),
    /// Start the MCP server
    Serve,
}

/// Show the itinerary
#[derive(ClapArgs, Default)]
pub struct PlanArgs {
    /// Language for titles and notes
    #[arg(long, value_enum, default_value_t = LanguageArg::En)]
    pub lang: LanguageArg,
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum LanguageArg {
    #[default]
    En,
    Hi,
}

impl From<LanguageArg> for Language {
    fn from(val: LanguageArg) -> Self {
        match val {
            LanguageArg::En => Language::En,
            LanguageArg::Hi => Language::Hi,
        }
    }
}

/// Finish a step
#[derive(ClapArgs)]
pub struct AdvanceArgs {
    /// How the step ended
    #[arg(value_enum)]
    pub status: OutcomeArg,
    /// Why the step was skipped
    #[arg(long)]
    pub reason: Option<String>,
    /// Step to finish instead of the current one
    #[arg(long)]
    pub slug: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutcomeArg {
    Done,
    Skipped,
}

impl std::fmt::Display for OutcomeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeArg::Done => write!(f, "done"),
            OutcomeArg::Skipped => write!(f, "skipped"),
        }
    }
}

/// Route subcommands
#[derive(Subcommand)]
pub enum RouteCommands {
    /// Show the route timeline and distance covered
    Show,
    /// Mark a phase done, or undo it
    Toggle(TogglePhaseArgs),
    /// Set the departure time, e.g. "7:45 AM"
    Start(RouteStartArgs),
    /// Go back to the planned departure time
    ClearStart,
    /// Place a GPS position on the route
    Locate(LocateArgs),
}

#[derive(ClapArgs)]
pub struct TogglePhaseArgs {
    /// Zero-based phase index as listed by `route show`
    pub index: usize,
}

impl From<TogglePhaseArgs> for TogglePhase {
    fn from(val: TogglePhaseArgs) -> Self {
        TogglePhase { index: val.index }
    }
}

#[derive(ClapArgs)]
pub struct RouteStartArgs {
    /// Clock time like "7:45 AM"
    pub time: String,
}

impl From<RouteStartArgs> for SetRouteStart {
    fn from(val: RouteStartArgs) -> Self {
        SetRouteStart {
            start_time: Some(val.time),
        }
    }
}

#[derive(ClapArgs)]
pub struct LocateArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
}

impl From<LocateArgs> for LocateOnRoute {
    fn from(val: LocateArgs) -> Self {
        LocateOnRoute {
            lat: val.lat,
            lon: val.lon,
        }
    }
}

/// Packing subcommands
#[derive(Subcommand)]
pub enum PackCommands {
    /// Show every list with its checked items
    List,
    /// Check or uncheck one item
    Toggle(TogglePackArgs),
}

#[derive(ClapArgs)]
pub struct TogglePackArgs {
    /// List key, e.g. "parents"
    pub list: String,
    /// Zero-based item index within the list
    pub index: u32,
}

impl From<TogglePackArgs> for TogglePackingItem {
    fn from(val: TogglePackArgs) -> Self {
        TogglePackingItem {
            list_key: val.list,
            item_index: val.index,
        }
    }
}

/// Forecast request
#[derive(ClapArgs)]
pub struct WeatherArgs {
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_LAT)]
    pub lat: f64,
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_LON)]
    pub lon: f64,
    /// Current conditions and today only
    #[arg(long)]
    pub compact: bool,
}

impl From<WeatherArgs> for WeatherQuery {
    fn from(val: WeatherArgs) -> Self {
        WeatherQuery {
            lat: val.lat,
            lon: val.lon,
            compact: val.compact,
        }
    }
}
