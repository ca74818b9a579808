//! Parameter structures for trip operations.
//!
//! These are shared by every interface. The CLI converts its clap `*Args`
//! structs into them with `From`, and the MCP server deserializes them
//! directly through a transparent wrapper, so they carry no framework derives
//! beyond serde and the optional JSON schema.
//!
//! Validation lives here too: each `validate` runs before any store is
//! touched, so invalid input never causes a partial write.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    content,
    error::{Result, TripError},
    models::{RouteProgress, StepOutcome},
    schedule,
};

fn default_route_id() -> String {
    content::ROUTE_ID.to_string()
}

fn default_lat() -> f64 {
    crate::weather::DEFAULT_LAT
}

fn default_lon() -> f64 {
    crate::weather::DEFAULT_LON
}

/// Parameters for finishing a step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AdvanceStep {
    /// Slug of the step to finish
    pub slug: String,
    /// Either 'done' or 'skipped'
    pub status: String,
    /// Why the step was skipped (ignored for 'done')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<String>,
}

impl AdvanceStep {
    /// Parses the outcome and normalizes the skip reason.
    ///
    /// ```rust
    /// use yatra_core::{models::StepOutcome, params::AdvanceStep};
    ///
    /// let params = AdvanceStep {
    ///     slug: "dhanushkodi".into(),
    ///     status: "skipped".into(),
    ///     skip_reason: Some("  Too windy ".into()),
    /// };
    /// let (outcome, reason) = params.validate()?;
    /// assert_eq!(outcome, StepOutcome::Skipped);
    /// assert_eq!(reason.as_deref(), Some("Too windy"));
    /// # Ok::<(), yatra_core::TripError>(())
    /// ```
    pub fn validate(&self) -> Result<(StepOutcome, Option<String>)> {
        if self.slug.trim().is_empty() {
            return Err(TripError::invalid_input("slug").with_reason("Slug cannot be empty"));
        }
        let outcome: StepOutcome = self.status.parse()?;
        let skip_reason = match outcome {
            StepOutcome::Skipped => self
                .skip_reason
                .as_deref()
                .map(str::trim)
                .filter(|reason| !reason.is_empty())
                .map(str::to_string),
            StepOutcome::Done => None,
        };
        Ok((outcome, skip_reason))
    }
}

/// Identifies a route-progress document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RouteId {
    /// Route id, defaults to the trip's only route
    #[serde(default = "default_route_id")]
    pub id: String,
}

impl Default for RouteId {
    fn default() -> Self {
        Self {
            id: default_route_id(),
        }
    }
}

impl RouteId {
    pub fn validate(&self) -> Result<&str> {
        validate_route_id(&self.id)
    }
}

/// Replaces a route-progress document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutRouteProgress {
    #[serde(default = "default_route_id")]
    pub id: String,
    pub progress: RouteProgress,
}

impl PutRouteProgress {
    pub fn validate(&self) -> Result<()> {
        validate_route_id(&self.id)?;
        if let Some(start) = self.progress.start_time {
            if !(0..schedule::MINUTES_PER_DAY).contains(&start) {
                return Err(TripError::invalid_input("start_time")
                    .with_reason(format!("{start} is not a minute of the day")));
            }
        }
        Ok(())
    }
}

fn validate_route_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(TripError::invalid_input("id").with_reason("Route id cannot be empty"));
    }
    Ok(id)
}

/// Flips one route phase between done and not done.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TogglePhase {
    /// Zero-based phase index as listed by show_route
    pub index: usize,
}

impl TogglePhase {
    pub fn validate(&self) -> Result<usize> {
        if self.index >= content::ROUTE_PHASES.len() {
            return Err(TripError::invalid_input("index").with_reason(format!(
                "Phase {} does not exist; the route has {} phases",
                self.index,
                content::ROUTE_PHASES.len()
            )));
        }
        Ok(self.index)
    }
}

/// Sets or clears the departure time of the drive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetRouteStart {
    /// Clock time like "7:45 AM"; omit or null to restore the default
    #[serde(default)]
    pub start_time: Option<String>,
}

impl SetRouteStart {
    /// Minutes since midnight, or `None` to clear.
    pub fn validate(&self) -> Result<Option<i32>> {
        match self.start_time.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => schedule::parse_time(text).map(Some).ok_or_else(|| {
                TripError::invalid_input("start_time")
                    .with_reason(format!("'{text}' is not a time like '7:45 AM'"))
            }),
        }
    }
}

/// A GPS fix to place on the route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LocateOnRoute {
    pub lat: f64,
    pub lon: f64,
}

impl LocateOnRoute {
    pub fn validate(&self) -> Result<(f64, f64)> {
        validate_coordinates(self.lat, self.lon)
    }
}

/// Sets one packing checkbox.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PackItem {
    /// Packing list key, e.g. 'parents'
    pub list_key: String,
    /// Zero-based item index within the list
    pub item_index: u32,
    pub checked: bool,
}

impl PackItem {
    pub fn validate(&self) -> Result<()> {
        if self.list_key.trim().is_empty() {
            return Err(
                TripError::invalid_input("list_key").with_reason("List key cannot be empty")
            );
        }
        Ok(())
    }
}

/// Flips one packing checkbox.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TogglePackingItem {
    /// Packing list key, e.g. 'parents'
    pub list_key: String,
    /// Zero-based item index within the list
    pub item_index: u32,
}

impl TogglePackingItem {
    /// Checks the list and item exist in the compiled-in packing lists.
    pub fn validate(&self) -> Result<()> {
        let list = content::packing_list(self.list_key.trim()).ok_or_else(|| {
            TripError::invalid_input("list_key")
                .with_reason(format!("Unknown packing list '{}'", self.list_key))
        })?;
        if self.item_index as usize >= list.items.len() {
            return Err(TripError::invalid_input("item_index").with_reason(format!(
                "List '{}' has {} items",
                list.key,
                list.items.len()
            )));
        }
        Ok(())
    }
}

/// Forecast request for the weather passthrough.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct WeatherQuery {
    /// Latitude, defaults to Rameshwaram
    #[serde(default = "default_lat")]
    pub lat: f64,
    /// Longitude, defaults to Rameshwaram
    #[serde(default = "default_lon")]
    pub lon: f64,
    /// Current conditions and today only, instead of the five-day forecast
    #[serde(default)]
    pub compact: bool,
}

impl Default for WeatherQuery {
    fn default() -> Self {
        Self {
            lat: default_lat(),
            lon: default_lon(),
            compact: false,
        }
    }
}

impl WeatherQuery {
    pub fn validate(&self) -> Result<(f64, f64)> {
        validate_coordinates(self.lat, self.lon)
    }
}

fn validate_coordinates(lat: f64, lon: f64) -> Result<(f64, f64)> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(TripError::invalid_input("lat").with_reason("Latitude must be within ±90"));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(TripError::invalid_input("lon").with_reason("Longitude must be within ±180"));
    }
    Ok((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_step_rejects_unknown_status() {
        let params = AdvanceStep {
            slug: "check-in".to_string(),
            status: "finished".to_string(),
            skip_reason: None,
        };

        match params.validate() {
            Err(TripError::InvalidInput { field, reason }) => {
                assert_eq!(field, "status");
                assert!(reason.contains("'done' or 'skipped'"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_advance_step_drops_reason_when_done() {
        let params = AdvanceStep {
            slug: "check-in".to_string(),
            status: "Done".to_string(),
            skip_reason: Some("irrelevant".to_string()),
        };

        let (outcome, reason) = params.validate().unwrap();
        assert_eq!(outcome, StepOutcome::Done);
        assert_eq!(reason, None);
    }

    #[test]
    fn test_advance_step_requires_slug() {
        let params = AdvanceStep {
            slug: " ".to_string(),
            status: "done".to_string(),
            skip_reason: None,
        };
        assert!(matches!(
            params.validate(),
            Err(TripError::InvalidInput { field, .. }) if field == "slug"
        ));
    }

    #[test]
    fn test_route_id_defaults_and_rejects_blank() {
        let parsed: RouteId = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.id, content::ROUTE_ID);

        let blank = RouteId { id: String::new() };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_put_route_progress_checks_start_time() {
        let mut params = PutRouteProgress {
            id: content::ROUTE_ID.to_string(),
            progress: RouteProgress::default(),
        };
        assert!(params.validate().is_ok());

        params.progress.start_time = Some(24 * 60);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_toggle_phase_bounds() {
        assert_eq!(TogglePhase { index: 0 }.validate().unwrap(), 0);
        let past_end = TogglePhase {
            index: content::ROUTE_PHASES.len(),
        };
        assert!(past_end.validate().is_err());
    }

    #[test]
    fn test_set_route_start_parsing() {
        let params = SetRouteStart {
            start_time: Some("7:45 am".to_string()),
        };
        assert_eq!(params.validate().unwrap(), Some(465));

        assert_eq!(SetRouteStart::default().validate().unwrap(), None);

        let bad = SetRouteStart {
            start_time: Some("quarter to eight".to_string()),
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_pack_item_requires_list_key() {
        let params = PackItem {
            list_key: String::new(),
            item_index: 0,
            checked: true,
        };
        assert!(matches!(
            params.validate(),
            Err(TripError::InvalidInput { field, .. }) if field == "list_key"
        ));
    }

    #[test]
    fn test_toggle_packing_item_checks_content() {
        let ok = TogglePackingItem {
            list_key: "car".to_string(),
            item_index: 0,
        };
        assert!(ok.validate().is_ok());

        let unknown = TogglePackingItem {
            list_key: "boat".to_string(),
            item_index: 0,
        };
        assert!(unknown.validate().is_err());

        let past_end = TogglePackingItem {
            list_key: "car".to_string(),
            item_index: 99,
        };
        assert!(past_end.validate().is_err());
    }

    #[test]
    fn test_weather_query_defaults() {
        let query: WeatherQuery = serde_json::from_str(r#"{"compact": true}"#).unwrap();
        assert!(query.compact);
        assert_eq!(query.lat, crate::weather::DEFAULT_LAT);
        assert!(WeatherQuery {
            lat: 120.0,
            ..WeatherQuery::default()
        }
        .validate()
        .is_err());
    }
}
