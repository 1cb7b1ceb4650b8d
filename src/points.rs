//! Point data model: server-space coordinates, the screen-space scaling
//! transform, the replace-wholesale point store, and circle hit-testing.

/// Horizontal scale factor converting server units to screen pixels.
pub const X_SCALE: f64 = 0.63733;
/// Vertical scale factor converting server units to screen pixels.
pub const Y_SCALE: f64 = 0.298;
/// Drawing radius (pixels) for every fetched point.
pub const POINT_RADIUS: f32 = 15.0;

/// The screen coordinate treated as (0, 0) for scaling: the canvas center.
///
/// Always derived from live canvas dimensions at the moment of use; never
/// cached across frames or fetch cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenOrigin {
    pub x: i32,
    pub y: i32,
}

impl ScreenOrigin {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Origin for a canvas of the given size: its center.
    pub fn from_canvas_size(width: f32, height: f32) -> Self {
        Self {
            x: (width / 2.0) as i32,
            y: (height / 2.0) as i32,
        }
    }
}

/// Scale a server-space coordinate into screen space.
///
/// The Y axis is inverted: server Y grows upward, screen Y grows downward.
pub fn scale(x: i32, y: i32, origin: ScreenOrigin) -> (i32, i32) {
    let scaled_x = (x as f64 * X_SCALE).round() as i32 + origin.x;
    let scaled_y = (y as f64 * -1.0 * Y_SCALE).round() as i32 + origin.y;
    (scaled_x, scaled_y)
}

/// A named server-space coordinate plus its derived screen-space position.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    /// X as received from the server, pre-scaling.
    pub original_x: i32,
    /// Y as received from the server, pre-scaling.
    pub original_y: i32,
    /// Screen X in canvas-local pixels.
    pub scaled_x: i32,
    /// Screen Y in canvas-local pixels.
    pub scaled_y: i32,
    /// Display label; non-empty but not guaranteed unique.
    pub name: String,
    /// Drawing radius in pixels.
    pub radius: f32,
}

impl MapPoint {
    /// Build a point from server coordinates, scaling against `origin`.
    pub fn new(x: i32, y: i32, name: impl Into<String>, origin: ScreenOrigin) -> Self {
        let (scaled_x, scaled_y) = scale(x, y, origin);
        Self {
            original_x: x,
            original_y: y,
            scaled_x,
            scaled_y,
            name: name.into(),
            radius: POINT_RADIUS,
        }
    }

    /// Recompute the screen position from the original coordinates.
    pub fn rescale(&mut self, origin: ScreenOrigin) {
        let (sx, sy) = scale(self.original_x, self.original_y, origin);
        self.scaled_x = sx;
        self.scaled_y = sy;
    }

    /// Whether the drawn circle contains the canvas-local pixel `(px, py)`.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let dx = px - self.scaled_x as f32;
        let dy = py - self.scaled_y as f32;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Hover tooltip text: `"<name>: <originalX>, <originalY>"`.
    pub fn tooltip(&self) -> String {
        format!("{}: {}, {}", self.name, self.original_x, self.original_y)
    }
}

/// First point (in store order) whose drawn circle contains `(px, py)`.
///
/// Returns `None` on an empty slice, so hit-testing before the first
/// successful fetch is well-defined.
pub fn hit_test(points: &[MapPoint], px: f32, py: f32) -> Option<&MapPoint> {
    points.iter().find(|p| p.contains(px, py))
}

/// Holds the current fetched point set, in server response order.
///
/// Single-writer: only the UI thread mutates it, and only by wholesale
/// replacement after a cycle completes. Readers get a slice that is stable
/// for the duration of one render pass.
#[derive(Default)]
pub struct PointStore {
    points: Vec<MapPoint>,
    /// Origin the stored points were last scaled against.
    origin: ScreenOrigin,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale swap; the old sequence is discarded. `origin` is the origin
    /// the incoming points were scaled with.
    pub fn replace(&mut self, points: Vec<MapPoint>, origin: ScreenOrigin) {
        self.points = points;
        self.origin = origin;
    }

    /// The live sequence, in server response order.
    pub fn current(&self) -> &[MapPoint] {
        &self.points
    }

    /// Recompute every point's screen position when the canvas origin has
    /// changed (e.g. after a resize). No-op while the origin is unchanged.
    pub fn rescale(&mut self, origin: ScreenOrigin) {
        if origin == self.origin {
            return;
        }
        for p in &mut self.points {
            p.rescale(origin);
        }
        self.origin = origin;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
