//! Use-Case-Funktionen für Startpunkt, Sortierung und Neu-Erzeugung.

use crate::app::{AppState, DropMode};
use crate::core::{sequence_nearest_neighbor, GeoPoint};
use std::sync::Arc;

/// Wechselt in den Drop-Modus: der nächste Karten-Klick setzt den Startpunkt.
pub fn enter_drop_mode(state: &mut AppState) {
    state.interaction.drop_mode = DropMode::AwaitingClick;
}

/// Setzt den Startpunkt und verlässt den Drop-Modus.
///
/// Gibt `false` zurück (ohne Änderung), wenn nicht auf einen Klick gewartet wird.
pub fn drop_start_point(state: &mut AppState, position: GeoPoint) -> bool {
    if state.interaction.drop_mode != DropMode::AwaitingClick {
        return false;
    }
    state.start_point = Some(position);
    state.interaction.drop_mode = DropMode::NotDropping;
    true
}

/// Sortiert die Stopps per Nearest-Neighbor ab dem Startpunkt.
///
/// Gibt `false` zurück (Stopps unverändert), wenn kein Startpunkt gesetzt ist.
pub fn sort_by_distance(state: &mut AppState) -> bool {
    let Some(start) = state.start_point else {
        return false;
    };
    let stops = Arc::unwrap_or_clone(std::mem::take(&mut state.stops));
    state.stops = Arc::new(sequence_nearest_neighbor(stops, Some(start)));
    true
}

/// Ersetzt alle Stopps durch neu erzeugte.
///
/// Verwirft Startpunkt, Selektion und einen offenen Drop-Modus.
/// Der Farbmodus bleibt unverändert.
pub fn regenerate(state: &mut AppState) {
    let stops = state
        .options
        .stop_generator()
        .generate(state.options.stop_count, &mut state.rng);
    state.stops = Arc::new(stops);
    state.start_point = None;
    state.selection.ids_mut().clear();
    state.interaction.drop_mode = DropMode::NotDropping;
}
