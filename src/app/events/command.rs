use crate::core::{GeoPoint, StopColor};
use crate::shared::DemoOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Auf den Karten-Klick für den Startpunkt warten
    EnterDropMode,
    /// Startpunkt setzen (nur wirksam, solange auf den Klick gewartet wird)
    DropStartPoint { position: GeoPoint },
    /// Stopps per Nearest-Neighbor ab Startpunkt sortieren
    SortStopsByDistance,
    /// Neue Stopps erzeugen, Startpunkt und Selektion verwerfen
    RegenerateStops,
    /// Farbmodus umschalten
    ToggleColorMode,
    /// Selektion eines Stopps umschalten
    ToggleStopSelection { id: u64 },
    /// Aktive Farbe setzen
    SetActiveColor { color: StopColor },
    /// Aktive Farbe auf alle selektierten Stopps anwenden und Selektion leeren
    ApplyActiveColor,
    /// Kamera um Screen-Delta verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f64,
        focus: Option<GeoPoint>,
    },
    /// Kamera zurücksetzen
    ResetCamera,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Optionen anwenden und ggf. speichern
    ApplyOptions { options: DemoOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
