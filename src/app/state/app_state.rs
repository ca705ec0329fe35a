use crate::app::CommandLog;
use crate::core::{GeoPoint, Stop};
use crate::shared::DemoOptions;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;

use super::{InteractionState, SelectionState, ViewState};

/// Hauptzustand der Anwendung (eine Sitzung)
pub struct AppState {
    /// Stopps in aktueller Reihenfolge
    pub stops: Arc<Vec<Stop>>,
    /// Startpunkt der Route (None = noch nicht gesetzt)
    pub start_point: Option<GeoPoint>,
    /// Selection-State
    pub selection: SelectionState,
    /// Drop-/Farbmodus und aktive Farbe
    pub interaction: InteractionState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: DemoOptions,
    /// Zielpfad für geänderte Optionen (None = nicht persistieren)
    pub options_path: Option<PathBuf>,
    /// Zufallsquelle für den Stopp-Generator
    pub rng: StdRng,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt eine Sitzung mit Standardoptionen und ersten Stopps.
    pub fn new() -> Self {
        Self::with_options(DemoOptions::default())
    }

    /// Erstellt eine Sitzung mit gegebenen Optionen und ersten Stopps.
    ///
    /// Die Optionen werden vorher bereinigt.
    pub fn with_options(options: DemoOptions) -> Self {
        let options = options.sanitized();
        let mut rng = rng_from_seed(options.rng_seed);
        let stops = options
            .stop_generator()
            .generate(options.stop_count, &mut rng);

        Self {
            stops: Arc::new(stops),
            start_point: None,
            selection: SelectionState::new(),
            interaction: InteractionState::new(options.initial_active_color),
            view: ViewState::from_options(&options),
            command_log: CommandLog::new(),
            options,
            options_path: None,
            rng,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Stopps zurück (für UI-Anzeige)
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Findet einen Stopp per ID.
    pub fn find_stop(&self, stop_id: u64) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id == stop_id)
    }

    /// Prüft, ob eine ID zu einem aktuellen Stopp gehört.
    pub fn has_stop(&self, stop_id: u64) -> bool {
        self.find_stop(stop_id).is_some()
    }

    /// Setzt die Zufallsquelle neu (fester Seed oder OS-Entropie).
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = rng_from_seed(seed);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
