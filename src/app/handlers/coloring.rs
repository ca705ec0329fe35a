//! Handler für Farbmodus, Selektion und Einfärbung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::StopColor;

/// Schaltet den Farbmodus um.
pub fn toggle_color_mode(state: &mut AppState) {
    use_cases::coloring::toggle_color_mode(state);
    log::debug!("Farbmodus: {:?}", state.interaction.color_mode);
}

/// Schaltet die Selektion eines Stopps um.
pub fn toggle_stop_selection(state: &mut AppState, stop_id: u64) {
    use_cases::coloring::toggle_stop_selection(state, stop_id);
}

/// Setzt die aktive Farbe.
pub fn set_active_color(state: &mut AppState, color: StopColor) {
    use_cases::coloring::set_active_color(state, color);
}

/// Wendet die aktive Farbe auf die Selektion an.
pub fn apply_active_color(state: &mut AppState) {
    let color = state.interaction.active_color;
    let recolored = use_cases::coloring::apply_active_color(state);
    log::info!("{} Stopps {} eingefärbt", recolored, color.name());
}
