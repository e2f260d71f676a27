//! Forest Service GIS Proxy
//!
//! Read-only pass-through to the USDA Forest Service ArcGIS REST server.
//! The map script cannot call that server directly, so the backend asks for
//! a fixed query per layer and relays the GeoJSON body untouched.
//!
//! # Module Structure
//!
//! ```text
//! gis/
//! ├── mod.rs      - GisLayer and the state envelopes
//! ├── client.rs   - GisClient (reqwest)
//! └── handlers.rs - /api/forest_boundaries, /api/forest_roads
//! ```
//!
//! Nothing is cached or retried: every request to the proxy endpoints makes
//! exactly one upstream call.

/// Upstream HTTP client
pub mod client;

/// HTTP handlers
pub mod handlers;

pub use client::GisClient;
pub use handlers::{forest_boundaries, forest_roads};

/// A map layer served by the proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GisLayer {
    /// National forest boundary polygons
    Boundaries,
    /// Forest road lines
    Roads,
}

impl GisLayer {
    /// Error message reported when fetching this layer fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Boundaries => "Failed to fetch forest boundaries",
            Self::Roads => "Failed to fetch forest roads",
        }
    }
}

/// WGS84 bounding box, `(xmin, ymin, xmax, ymax)`
pub type Envelope = (f64, f64, f64, f64);

const STATE_ENVELOPES: [(&str, Envelope); 10] = [
    ("AZ", (-114.82, 31.33, -109.05, 37.00)),
    ("CA", (-124.48, 32.53, -114.13, 42.01)),
    ("CO", (-109.06, 36.99, -102.04, 41.00)),
    ("ID", (-117.24, 41.99, -111.04, 49.00)),
    ("MT", (-116.05, 44.36, -104.04, 49.00)),
    ("NV", (-120.01, 35.00, -114.04, 42.00)),
    ("OR", (-124.57, 41.99, -116.46, 46.29)),
    ("UT", (-114.05, 36.99, -109.04, 42.00)),
    ("WA", (-124.85, 45.54, -116.92, 49.00)),
    ("WY", (-111.06, 40.99, -104.05, 45.01)),
];

/// Bounding box of a supported state, by two-letter code
pub fn state_envelope(state: &str) -> Option<Envelope> {
    STATE_ENVELOPES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(state))
        .map(|(_, envelope)| *envelope)
}
