use eframe::{CreationContext, NativeOptions, egui};

use tictacvip::app::TicTacVipApp;

fn main() -> eframe::Result<()> {
    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "TicTacVIP",
        native_options,
        Box::new(|_cc: &CreationContext| Ok(Box::new(TicTacVipApp::default()))),
    )
}
