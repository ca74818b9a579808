//! Background task that projects incoming GPS fixes onto the route.

use jiff::Timestamp;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};

use super::geo::{project_onto_route, RoutePosition};
use crate::{
    error::{Result, TripError},
    models::Waypoint,
};

const FIX_BUFFER: usize = 16;

/// One reading from a location source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoFix {
    pub lat: f64,
    pub lon: f64,
    /// Reported accuracy radius in metres
    pub accuracy_m: f64,
    pub timestamp: Timestamp,
}

impl GeoFix {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            accuracy_m: 0.0,
            timestamp: Timestamp::now(),
        }
    }
}

/// Watches a stream of fixes and publishes the latest on-route position.
///
/// Fixes farther than [`super::MAX_OFF_ROUTE_KM`] from the route are dropped
/// and leave the published position unchanged. The task stops on
/// [`PositionTracker::stop`], when dropped, or once every sender is gone.
#[derive(Debug)]
pub struct PositionTracker {
    fixes: mpsc::Sender<GeoFix>,
    position: watch::Receiver<Option<RoutePosition>>,
    task: JoinHandle<()>,
}

impl PositionTracker {
    /// Spawns the tracker on the current tokio runtime.
    pub fn spawn(waypoints: &[Waypoint]) -> Self {
        let waypoints = waypoints.to_vec();
        let (fixes, mut incoming) = mpsc::channel::<GeoFix>(FIX_BUFFER);
        let (publish, position) = watch::channel(None);

        let task = tokio::spawn(async move {
            info!("Position tracking started");
            while let Some(fix) = incoming.recv().await {
                match project_onto_route(fix.lat, fix.lon, &waypoints) {
                    Some(on_route) => {
                        debug!(
                            "Fix {:.4},{:.4} at km {:.1} ({:.1} km off route)",
                            fix.lat, fix.lon, on_route.route_km, on_route.off_route_km
                        );
                        publish.send_replace(Some(on_route));
                    }
                    None => debug!("Discarding off-route fix {:.4},{:.4}", fix.lat, fix.lon),
                }
            }
            info!("Position tracking finished");
        });

        Self {
            fixes,
            position,
            task,
        }
    }

    /// Feeds one fix to the tracker.
    pub async fn push(&self, fix: GeoFix) -> Result<()> {
        self.fixes
            .send(fix)
            .await
            .map_err(|_| TripError::Configuration {
                message: "Position tracker has stopped".to_string(),
            })
    }

    /// A sender for location sources that run on their own task.
    pub fn sender(&self) -> mpsc::Sender<GeoFix> {
        self.fixes.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<RoutePosition>> {
        self.position.clone()
    }

    pub fn latest(&self) -> Option<RoutePosition> {
        *self.position.borrow()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for PositionTracker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
