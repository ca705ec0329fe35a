//! UI-Komponenten: Toolbar, Farbleiste, Karte, Legende, Input-Handling.
//!
//! Jede Komponente liest nur die `RenderScene` bzw. den `AppState` und
//! liefert `AppIntent`s zurück; Mutationen laufen über den Controller.

pub mod input;
pub mod legend;
pub mod map_view;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use legend::render_legend_panel;
pub use map_view::paint_scene;
pub use status::render_status_bar;
pub use toolbar::{render_color_bar, render_toolbar};

/// Wandelt eine RGBA-Farbe (0.0–1.0) in eine egui-Farbe.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(rgba[0]),
        channel(rgba[1]),
        channel(rgba[2]),
        channel(rgba[3]),
    )
}
