use crate::models::{RoutePhase, RoutePhaseDefinition, Waypoint};

/// Id of the single route-progress document.
pub const ROUTE_ID: &str = "rameshwaram-car-route";

/// 8:30 AM, used when the family has not edited the start.
pub const DEFAULT_ROUTE_START: i32 = 8 * 60 + 30;

pub const TOTAL_KM: u32 = 552;

/// Cumulative kilometre mark reached when each phase is done. The tea stop
/// sits before Rameshwaram on the road even though it is listed after the
/// final drive.
pub static PHASE_KM: &[u32] = &[0, 200, 200, 360, 360, 360, 552, 462, 552];

pub static WAYPOINTS: &[Waypoint] = &[
    Waypoint {
        name: "Bengaluru",
        short: "BLR",
        lat: 12.9716,
        lon: 77.5946,
        km: 0.0,
    },
    Waypoint {
        name: "Salem",
        short: "SLM",
        lat: 11.6643,
        lon: 78.1460,
        km: 200.0,
    },
    Waypoint {
        name: "Madurai",
        short: "MDU",
        lat: 9.9252,
        lon: 78.1198,
        km: 360.0,
    },
    Waypoint {
        name: "Ramanathapuram",
        short: "RMD",
        lat: 9.3639,
        lon: 78.8395,
        km: 462.0,
    },
    Waypoint {
        name: "Rameshwaram",
        short: "RMM",
        lat: 9.2876,
        lon: 79.3129,
        km: 552.0,
    },
];

pub static ROUTE_PHASES: &[RoutePhaseDefinition] = &[
    RoutePhaseDefinition {
        phase: RoutePhase::Stop {
            name: "Chiku drop-off",
            note: "Share vet contact · Print feeding schedule · Pack 3 days food",
            maps_url: None,
            critical: false,
        },
        duration_min: 30,
        is_range: false,
    },
    RoutePhaseDefinition {
        phase: RoutePhase::Drive {
            from: "Bengaluru",
            to: "Salem",
            distance_km: 200,
            highway: "NH 44",
        },
        duration_min: 180,
        is_range: true,
    },
    RoutePhaseDefinition {
        phase: RoutePhase::Stop {
            name: "Breakfast · A2B, Thoppur",
            note: "SUV parking · Clean restrooms",
            maps_url: Some("https://www.google.com/maps/search/?api=1&query=Adyar+Ananda+Bhavan+-+A2B&query_place_id=ChIJk74wW78arDsRNzIOQHUwMQc"),
            critical: false,
        },
        duration_min: 45,
        is_range: true,
    },
    RoutePhaseDefinition {
        phase: RoutePhase::Drive {
            from: "Salem",
            to: "Madurai",
            distance_km: 160,
            highway: "NH 44 → NH 87",
        },
        duration_min: 180,
        is_range: true,
    },
    RoutePhaseDefinition {
        phase: RoutePhase::Stop {
            name: "Lunch · Gowri Krishna Veg",
            note: "On the bypass, avoids city traffic",
            maps_url: Some("https://www.google.com/maps/search/?api=1&query=Gowri+Krishna-+Veg+Restaurant&query_place_id=ChIJ0e2cBp3PADsRGgSJVWsxwIg"),
            critical: false,
        },
        duration_min: 45,
        is_range: true,
    },
    RoutePhaseDefinition {
        phase: RoutePhase::Stop {
            name: "Major refuel · IndianOil SWAGAT",
            note: "XP95 available · Fill 100%, sparse stations ahead",
            maps_url: Some("https://www.google.com/maps/search/?api=1&query=IndianOil+-+SWAGAT&query_place_id=ChIJ-2HjLkXBADsRhWXOEE6_scs"),
            critical: true,
        },
        duration_min: 15,
        is_range: false,
    },
    RoutePhaseDefinition {
        phase: RoutePhase::Drive {
            from: "Madurai",
            to: "Rameshwaram",
            distance_km: 192,
            highway: "NH 87",
        },
        duration_min: 150,
        is_range: true,
    },
    RoutePhaseDefinition {
        phase: RoutePhase::Stop {
            name: "Tea · Chaya Kada, Ramanathapuram",
            note: "20 min before the final stretch",
            maps_url: Some("https://www.google.com/maps/search/?api=1&query=CHAYA+KADA&query_place_id=ChIJ2W0mIAebATsR1d6E6dikzso"),
            critical: false,
        },
        duration_min: 20,
        is_range: false,
    },
    RoutePhaseDefinition {
        phase: RoutePhase::Arrival {
            name: "Rameshwaram",
            note: "Via Pamban Bridge · Evening darshan from 3 PM",
            maps_url: Some("https://www.google.com/maps/search/?api=1&query=Pamban+Bridge&query_place_id=ChIJNRza64bvATsRL3U2O5svnYg"),
        },
        duration_min: 0,
        is_range: false,
    },
];
