use gridmap::GridMapApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 750.0]);

    eframe::run_native(
        "GridMap",
        native_options,
        Box::new(|cc| Ok(Box::new(GridMapApp::new(cc)))),
    )
}
