//! GridMap crate root: re-exports and module wiring.
//!
//! A small egui/eframe desktop tool that periodically fetches named (x, y)
//! points from a remote HTTP endpoint, scales them into screen coordinates,
//! and renders them as dots over a map image with hover tooltips.
//!
//! Module layout:
//! - `feed`: Latin-1 decoding and line-oriented `x,y,name` parsing
//! - `points`: point model, scaling transform, point store, hit-testing
//! - `fetch`: background HTTP fetch cycle with channel-based result delivery
//! - `controller`: refresh state machine (manual / toggle / 30 s timer)
//! - `map_view`: the drawable canvas (map, axes, dots, tooltips)
//! - `app`: the eframe application shell

pub mod app;
pub mod controller;
pub mod feed;
pub mod fetch;
pub mod map_view;
pub mod points;

// Public re-exports for a compact external API
pub use app::GridMapApp;
pub use controller::{
    CycleId, RefreshController, RefreshState, ServerStatus, AUTO_REFRESH_INTERVAL,
};
pub use feed::{decode_latin1, parse_feed, ParseError, PointRecord};
pub use fetch::{build_points, CycleOutcome, FetchError, ENDPOINT_URL};
pub use map_view::MapView;
pub use points::{
    hit_test, scale, MapPoint, PointStore, ScreenOrigin, POINT_RADIUS, X_SCALE, Y_SCALE,
};
