//! Render surface: background map, axes, point circles and hover tooltips.

use egui::{Color32, Pos2, Rect, Sense, Stroke, TextureHandle, TextureOptions};

use crate::points::{hit_test, PointStore, ScreenOrigin};

/// Fill used when the bundled map image is missing or undecodable.
const FALLBACK_BACKGROUND: Color32 = Color32::from_rgb(24, 46, 72);
const AXIS_COLOR: Color32 = Color32::from_gray(160);
const POINT_COLOR: Color32 = Color32::from_rgb(220, 60, 50);

/// Drawable canvas: paints the map, the center axes and every stored point,
/// and answers "which point is under this pixel" for tooltips.
pub struct MapView {
    map_texture: Option<TextureHandle>,
    texture_attempted: bool,
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

impl MapView {
    pub fn new() -> Self {
        Self {
            map_texture: None,
            texture_attempted: false,
        }
    }

    /// Upload the map image on first use. A missing or broken asset just
    /// means the fallback fill is painted instead.
    fn ensure_texture(&mut self, ctx: &egui::Context) {
        if self.texture_attempted {
            return;
        }
        self.texture_attempted = true;
        match load_map_image() {
            Some(image) => {
                self.map_texture =
                    Some(ctx.load_texture("world-map", image, TextureOptions::LINEAR));
            }
            None => log::warn!("world map image unavailable, painting flat background"),
        }
    }

    /// Paint the full canvas and handle hover tooltips.
    ///
    /// The origin is derived from the live canvas rect every frame and the
    /// store is rescaled against it before drawing, so a resize can never
    /// leave points at stale positions. Returns the canvas rect so the
    /// caller can hand the same origin to the next fetch cycle.
    pub fn show(&mut self, ui: &mut egui::Ui, store: &mut PointStore) -> Rect {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        self.ensure_texture(ui.ctx());

        let origin = ScreenOrigin::from_canvas_size(rect.width(), rect.height());
        store.rescale(origin);

        let painter = ui.painter_at(rect);

        // Background map stretched to the whole canvas.
        match &self.map_texture {
            Some(texture) => {
                painter.image(
                    texture.id(),
                    rect,
                    Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
            None => {
                painter.rect_filled(rect, 0.0, FALLBACK_BACKGROUND);
            }
        }

        // Axes through the canvas center.
        let center = rect.center();
        let stroke = Stroke::new(1.0, AXIS_COLOR);
        painter.line_segment(
            [
                Pos2::new(rect.left(), center.y),
                Pos2::new(rect.right(), center.y),
            ],
            stroke,
        );
        painter.line_segment(
            [
                Pos2::new(center.x, rect.top()),
                Pos2::new(center.x, rect.bottom()),
            ],
            stroke,
        );

        // Points, in store order. Scaled coordinates are canvas-local.
        for point in store.current() {
            let pos = Pos2::new(
                rect.left() + point.scaled_x as f32,
                rect.top() + point.scaled_y as f32,
            );
            painter.circle_filled(pos, point.radius, POINT_COLOR);
        }

        if let Some(pointer) = response.hover_pos() {
            let local = pointer - rect.min;
            if let Some(point) = hit_test(store.current(), local.x, local.y) {
                response.on_hover_text(point.tooltip());
            }
        }

        rect
    }
}

/// Load the bundled world map from `assets/world-map.png`.
///
/// Returns `None` when the file is absent or fails to decode.
fn load_map_image() -> Option<egui::ColorImage> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/world-map.png");
    let bytes = std::fs::read(path).ok()?;
    let decoded = image::load_from_memory(&bytes).ok()?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}
