//! Erzeugt zufällige Stopps, gehäuft um wenige Gebietszentren.

use super::{GeoPoint, Stop};
use rand::Rng;

/// Parameter für die Stopp-Erzeugung.
#[derive(Debug, Clone, PartialEq)]
pub struct StopGenerator {
    /// Gebietszentren, aus denen pro Stopp gleichverteilt gewählt wird
    pub area_centers: Vec<GeoPoint>,
    /// Maximaler Versatz je Achse in Grad (gleichverteilt in ±radius)
    pub jitter_radius: f64,
}

impl StopGenerator {
    /// Erstellt einen Generator.
    pub fn new(area_centers: Vec<GeoPoint>, jitter_radius: f64) -> Self {
        Self {
            area_centers,
            jitter_radius,
        }
    }

    /// Erzeugt `count` Stopps mit IDs `1..=count`.
    ///
    /// Ohne Gebietszentren entsteht eine leere Sammlung.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Stop> {
        if self.area_centers.is_empty() {
            log::warn!("Keine Gebietszentren konfiguriert, erzeuge keine Stopps");
            return Vec::new();
        }

        (1..=count as u64)
            .map(|id| {
                let center = self.area_centers[rng.random_range(0..self.area_centers.len())];
                let position = GeoPoint::new(
                    center.lat + self.jitter(rng),
                    center.lng + self.jitter(rng),
                );
                Stop::new(id, position)
            })
            .collect()
    }

    fn jitter<R: Rng>(&self, rng: &mut R) -> f64 {
        if !(self.jitter_radius.is_finite() && self.jitter_radius > 0.0) {
            return 0.0;
        }
        rng.random_range(-self.jitter_radius..=self.jitter_radius)
    }
}
