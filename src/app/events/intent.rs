use crate::core::{GeoPoint, StopColor};
use crate::shared::DemoOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// "Set Start Point": nächster Karten-Klick setzt den Startpunkt
    DropModeRequested,
    /// Klick auf die Karte (außerhalb eines Stopps oder im Drop-Modus)
    MapClicked { position: GeoPoint },
    /// "Sort by Distance"
    SortRequested,
    /// "Regenerate Stops"
    RegenerateRequested,
    /// Farbmodus ein-/ausschalten
    ColorModeToggled,
    /// Klick auf einen Stopp-Marker
    StopClicked { id: u64 },
    /// Farbe in der Palette gewählt
    ActiveColorChanged { color: StopColor },
    /// "Apply": aktive Farbe auf die Selektion anwenden
    ApplyColorRequested,

    /// Kamera um Screen-Delta (Pixel) verschieben
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus: Option<GeoPoint>,
    },
    /// Kamera auf Kartenmitte der Optionen zurücksetzen
    ResetCameraRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: DemoOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
