//! Handler für Startpunkt, Sortierung und Neu-Erzeugung der Stopps.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoPoint;

/// Wartet auf den nächsten Karten-Klick als Startpunkt.
pub fn enter_drop_mode(state: &mut AppState) {
    use_cases::route::enter_drop_mode(state);
    log::debug!("Drop-Modus aktiv: warte auf Karten-Klick");
}

/// Setzt den Startpunkt, falls der Drop-Modus aktiv ist.
pub fn drop_start_point(state: &mut AppState, position: GeoPoint) {
    if use_cases::route::drop_start_point(state, position) {
        log::info!(
            "Startpunkt gesetzt: ({:.5}, {:.5})",
            position.lat,
            position.lng
        );
    }
}

/// Sortiert die Stopps ab dem Startpunkt.
pub fn sort_by_distance(state: &mut AppState) {
    if use_cases::route::sort_by_distance(state) {
        log::info!("{} Stopps nach Distanz sortiert", state.stop_count());
    } else {
        log::info!("Kein Startpunkt gesetzt, Sortierung übersprungen");
    }
}

/// Erzeugt neue Stopps.
pub fn regenerate(state: &mut AppState) {
    use_cases::route::regenerate(state);
    log::info!("{} neue Stopps erzeugt", state.stop_count());
}
