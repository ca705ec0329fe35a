//! Lieferstopp und feste Farbpalette für Stopp-Kategorien.

use super::GeoPoint;
use serde::{Deserialize, Serialize};

/// Standard-Kategorie neu erzeugter Stopps.
pub const DEFAULT_CATEGORY: &str = "residential";

/// Geschlossene Farbpalette für Stopps.
///
/// `White` markiert einen noch nicht zugeordneten Stopp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopColor {
    /// Nicht zugeordnet
    #[default]
    White,
    /// Abholung (Pickup)
    Red,
    /// Call-In
    Blue,
    /// Geschäftskunde
    Green,
    /// Sperrgut (Bulk)
    Yellow,
    /// Sonstiges
    Purple,
}

impl StopColor {
    /// Alle Palettenfarben in Anzeigereihenfolge.
    pub const ALL: [StopColor; 6] = [
        StopColor::White,
        StopColor::Red,
        StopColor::Blue,
        StopColor::Green,
        StopColor::Yellow,
        StopColor::Purple,
    ];

    /// Farbname wie in der Palette angezeigt.
    pub fn name(self) -> &'static str {
        match self {
            StopColor::White => "white",
            StopColor::Red => "red",
            StopColor::Blue => "blue",
            StopColor::Green => "green",
            StopColor::Yellow => "yellow",
            StopColor::Purple => "purple",
        }
    }

    /// Bedeutung in der Legende (None für Farben ohne feste Kategorie).
    pub fn legend_label(self) -> Option<&'static str> {
        match self {
            StopColor::Red => Some("Pickup"),
            StopColor::Blue => Some("Call-In"),
            StopColor::Yellow => Some("Bulk Stop"),
            StopColor::Green => Some("Business"),
            StopColor::White | StopColor::Purple => None,
        }
    }

    /// Füllfarbe als RGBA (0.0–1.0).
    pub fn rgba(self) -> [f32; 4] {
        match self {
            StopColor::White => [1.0, 1.0, 1.0, 1.0],
            StopColor::Red => [0.86, 0.15, 0.15, 1.0],
            StopColor::Blue => [0.15, 0.39, 0.92, 1.0],
            StopColor::Green => [0.09, 0.64, 0.29, 1.0],
            StopColor::Yellow => [0.92, 0.70, 0.03, 1.0],
            StopColor::Purple => [0.58, 0.20, 0.92, 1.0],
        }
    }

    /// Gibt `true` zurück, wenn Beschriftung auf dieser Farbe dunkel sein muss.
    pub fn needs_dark_text(self) -> bool {
        self == StopColor::White
    }
}

/// Ein Lieferstopp auf der Karte
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Eindeutige ID innerhalb der Stopp-Sammlung
    pub id: u64,
    /// Anzeigename
    pub name: String,
    /// Freie Kategorie-Bezeichnung
    pub category: String,
    /// Position in Dezimalgrad
    pub position: GeoPoint,
    /// Kategorie-Farbe
    pub color: StopColor,
    /// Position in der sortierten Route (1-basiert), erst nach dem Sortieren gesetzt
    pub label: Option<u32>,
}

impl Stop {
    /// Erstellt einen unsortierten, weißen Stopp der Standard-Kategorie.
    pub fn new(id: u64, position: GeoPoint) -> Self {
        Self {
            id,
            name: format!("Stop {id}"),
            category: DEFAULT_CATEGORY.to_string(),
            position,
            color: StopColor::default(),
            label: None,
        }
    }

    /// Text für Tooltip/Popup: Routenposition falls sortiert, sonst der Name.
    pub fn display_title(&self) -> String {
        match self.label {
            Some(label) => format!("Stop {label}"),
            None => self.name.clone(),
        }
    }
}
