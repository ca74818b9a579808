//! Route-progress operations for the Trip.

use jiff::Timestamp;
use log::debug;
use tokio::task;

use super::Trip;
use crate::{
    access::Caller,
    content,
    db::Database,
    error::{Result, TripError},
    models::{RouteOverview, RouteProgress},
    params::{LocateOnRoute, PutRouteProgress, RouteId, SetRouteStart, TogglePhase},
    progress::{self, RoutePosition},
};

impl Trip {
    /// Reads a route document. Missing documents read as no progress.
    pub async fn get_route_progress(
        &self,
        caller: &Caller,
        params: &RouteId,
    ) -> Result<RouteProgress> {
        caller.require_user()?;
        let id = params.validate()?.to_string();
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || Database::new(&db_path)?.get_route_progress(&id))
            .await
            .map_err(TripError::join)?
    }

    /// Replaces a route document. Last writer wins.
    pub async fn put_route_progress(
        &self,
        caller: &Caller,
        params: &PutRouteProgress,
    ) -> Result<RouteProgress> {
        let user = caller.require_user()?.to_string();
        params.validate()?;
        let id = params.id.trim().to_string();
        let progress = params.progress.clone();
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            Database::new(&db_path)?.put_route_progress(&id, &progress, &user, Timestamp::now())?;
            Ok::<_, TripError>(progress)
        })
        .await
        .map_err(TripError::join)?
    }

    /// Progress of the trip's route with its cascade and distance.
    pub async fn route_overview(&self, caller: &Caller) -> Result<RouteOverview> {
        let progress = self.get_route_progress(caller, &RouteId::default()).await?;
        Ok(RouteOverview::from_progress(progress, &self.clock))
    }

    /// Flips one phase of the trip's route, stamping the completion time.
    pub async fn toggle_route_phase(
        &self,
        caller: &Caller,
        params: &TogglePhase,
    ) -> Result<RouteOverview> {
        let index = params.validate()?;
        self.update_route(caller, move |progress| {
            let done = progress.toggle(index, Timestamp::now());
            debug!("Route phase {index} marked {}", if done { "done" } else { "not done" });
            Ok(())
        })
        .await
    }

    /// Sets or clears the edited departure time of the trip's route.
    pub async fn set_route_start(
        &self,
        caller: &Caller,
        params: &SetRouteStart,
    ) -> Result<RouteOverview> {
        let start = params.validate()?;
        self.update_route(caller, move |progress| progress.set_start_time(start))
            .await
    }

    /// Read-modify-write of the trip's route document on one connection.
    async fn update_route<F>(&self, caller: &Caller, change: F) -> Result<RouteOverview>
    where
        F: FnOnce(&mut RouteProgress) -> Result<()> + Send + 'static,
    {
        let user = caller.require_user()?.to_string();
        let db_path = self.db_path.clone();

        let progress = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let mut progress = db.get_route_progress(content::ROUTE_ID)?;
            change(&mut progress)?;
            db.put_route_progress(content::ROUTE_ID, &progress, &user, Timestamp::now())?;
            Ok::<_, TripError>(progress)
        })
        .await
        .map_err(TripError::join)??;

        Ok(RouteOverview::from_progress(progress, &self.clock))
    }

    /// Places a GPS fix on the route. `None` when it is too far off-route.
    pub fn locate_on_route(&self, params: &LocateOnRoute) -> Result<Option<RoutePosition>> {
        let (lat, lon) = params.validate()?;
        Ok(progress::project_onto_route(lat, lon, content::WAYPOINTS))
    }
}
