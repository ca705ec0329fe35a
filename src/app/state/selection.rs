use indexmap::IndexSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand (Stopps für die nächste Einfärbung)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// IDs der selektierten Stopps in Klick-Reihenfolge (Arc für O(1)-Clone in RenderScene)
    pub selected_stop_ids: Arc<IndexSet<u64>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_stop_ids: Arc::new(IndexSet::new()),
        }
    }

    /// Gibt eine mutable Referenz auf das IndexSet zurück (CoW: klont nur wenn nötig).
    ///
    /// Alle Mutationen der Selektion gehen über diese Methode, damit der
    /// Arc-Klon in `render_scene::build()` O(1) bleibt.
    #[inline]
    pub fn ids_mut(&mut self) -> &mut IndexSet<u64> {
        Arc::make_mut(&mut self.selected_stop_ids)
    }

    /// Anzahl selektierter Stopps.
    pub fn len(&self) -> usize {
        self.selected_stop_ids.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected_stop_ids.is_empty()
    }

    /// Prüft, ob ein Stopp selektiert ist.
    pub fn contains(&self, stop_id: u64) -> bool {
        self.selected_stop_ids.contains(&stop_id)
    }
}
