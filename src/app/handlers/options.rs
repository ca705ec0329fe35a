//! Handler für Optionen und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::DemoOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Übernimmt neue Optionen und persistiert sie, falls ein Pfad gesetzt ist.
///
/// Ein geänderter Seed setzt die Zufallsquelle neu; die Stopps selbst
/// ändern sich erst beim nächsten Neu-Erzeugen.
pub fn apply_options(state: &mut AppState, options: DemoOptions) -> anyhow::Result<()> {
    let options = options.sanitized();
    if options.rng_seed != state.options.rng_seed {
        state.reseed(options.rng_seed);
    }
    state.options = options;
    persist(state)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, DemoOptions::default())
}

fn persist(state: &AppState) -> anyhow::Result<()> {
    match state.options_path.as_deref() {
        Some(path) => state.options.save_to_file(path),
        None => Ok(()),
    }
}
