//! Use-Case-Funktionen für Selektion und Einfärbung von Stopps.

use crate::app::AppState;
use crate::core::StopColor;
use std::sync::Arc;

/// Schaltet die Selektion eines Stopps um (hinzufügen oder entfernen).
///
/// Die ID wird nicht gegen die Stopps geprüft; das passiert beim Intent-Mapping.
pub fn toggle_stop_selection(state: &mut AppState, stop_id: u64) {
    let ids = state.selection.ids_mut();
    if !ids.shift_remove(&stop_id) {
        ids.insert(stop_id);
    }
}

/// Ersetzt die aktive Farbe. Selektion und Stopps bleiben unverändert.
pub fn set_active_color(state: &mut AppState, color: StopColor) {
    state.interaction.active_color = color;
}

/// Färbt alle selektierten Stopps in der aktiven Farbe und leert die Selektion.
///
/// Gibt die Anzahl umgefärbter Stopps zurück.
pub fn apply_active_color(state: &mut AppState) -> usize {
    let color = state.interaction.active_color;
    let selected = std::mem::take(&mut state.selection.selected_stop_ids);
    if selected.is_empty() {
        return 0;
    }

    let mut recolored = 0;
    for stop in Arc::make_mut(&mut state.stops).iter_mut() {
        if selected.contains(&stop.id) {
            stop.color = color;
            recolored += 1;
        }
    }
    recolored
}

/// Schaltet den Farbmodus um. Selektion und Farben bleiben erhalten.
pub fn toggle_color_mode(state: &mut AppState) {
    state.interaction.color_mode = state.interaction.color_mode.toggled();
}
