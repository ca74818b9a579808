//! Great-circle distances and projection of a GPS fix onto the route.

use serde::{Deserialize, Serialize};

use crate::models::Waypoint;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Fixes farther than this from every segment are treated as noise.
pub const MAX_OFF_ROUTE_KM: f64 = 25.0;

/// A fix mapped onto the route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RoutePosition {
    /// Estimated distance travelled along the route
    pub route_km: f64,
    /// Distance from the nearest point on the route
    pub off_route_km: f64,
}

/// Haversine distance between two points, in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Projects a fix onto the nearest route segment.
///
/// The position along each segment comes from the law of cosines on the
/// three great-circle distances, clamped to the segment, and the matching
/// point is interpolated linearly in lat/lon. Returns `None` when the route
/// has no usable segment or the fix is more than [`MAX_OFF_ROUTE_KM`] away.
pub fn project_onto_route(lat: f64, lon: f64, waypoints: &[Waypoint]) -> Option<RoutePosition> {
    let mut best: Option<RoutePosition> = None;

    for pair in waypoints.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let d_ab = haversine_km(a.lat, a.lon, b.lat, b.lon);
        if d_ab == 0.0 {
            continue;
        }
        let d_ap = haversine_km(a.lat, a.lon, lat, lon);
        let d_bp = haversine_km(b.lat, b.lon, lat, lon);

        let t = ((d_ap * d_ap - d_bp * d_bp + d_ab * d_ab) / (2.0 * d_ab * d_ab)).clamp(0.0, 1.0);
        let near_lat = a.lat + t * (b.lat - a.lat);
        let near_lon = a.lon + t * (b.lon - a.lon);
        let off_route_km = haversine_km(lat, lon, near_lat, near_lon);

        if best.map_or(true, |p| off_route_km < p.off_route_km) {
            best = Some(RoutePosition {
                route_km: a.km + t * (b.km - a.km),
                off_route_km,
            });
        }
    }

    best.filter(|p| p.off_route_km <= MAX_OFF_ROUTE_KM)
}

/// Label of the stretch the family is on, e.g. `"SLM → MDU"`.
pub fn route_segment_label(progress_km: f64, waypoints: &[Waypoint], all_done: bool) -> String {
    if all_done {
        return "Arrived".to_string();
    }
    let Some(first) = waypoints.first() else {
        return String::new();
    };

    match waypoints.iter().rposition(|w| progress_km >= w.km) {
        Some(i) if i + 1 < waypoints.len() => {
            format!("{} → {}", waypoints[i].short, waypoints[i + 1].short)
        }
        Some(i) => waypoints[i].name.to_string(),
        None => first.name.to_string(),
    }
}
