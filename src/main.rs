use eframe::egui;
use tangocho::gui::TangochoApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tangocho")
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([720.0, 540.0]),
        ..Default::default()
    };

    eframe::run_native("tangocho", options, Box::new(|cc| Ok(Box::new(TangochoApp::new(cc)))))
}
