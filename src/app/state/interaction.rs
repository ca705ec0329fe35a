use crate::core::StopColor;

/// Wartet die Karte auf einen Klick für den Startpunkt?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropMode {
    /// Klicks auf die Karte setzen keinen Startpunkt
    #[default]
    NotDropping,
    /// Der nächste Karten-Klick setzt den Startpunkt
    AwaitingClick,
}

/// Farbmodus für das Kategorisieren von Stopps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Stopp-Klicks ändern die Selektion nicht
    #[default]
    Inactive,
    /// Stopp-Klicks schalten die Selektion um
    SelectMode,
}

impl ColorMode {
    /// Der jeweils andere Modus.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Inactive => ColorMode::SelectMode,
            ColorMode::SelectMode => ColorMode::Inactive,
        }
    }
}

/// Zustand der laufenden Benutzer-Interaktion
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    /// Startpunkt-Platzierung
    pub drop_mode: DropMode,
    /// Farbmodus
    pub color_mode: ColorMode,
    /// Farbe, die beim nächsten Anwenden auf die Selektion gesetzt wird
    pub active_color: StopColor,
}

impl InteractionState {
    /// Erstellt den Startzustand mit gegebener aktiver Farbe.
    pub fn new(active_color: StopColor) -> Self {
        Self {
            drop_mode: DropMode::NotDropping,
            color_mode: ColorMode::Inactive,
            active_color,
        }
    }

    /// Gibt `true` zurück, solange auf den Startpunkt-Klick gewartet wird.
    pub fn drop_pending(&self) -> bool {
        self.drop_mode == DropMode::AwaitingClick
    }

    /// Gibt `true` zurück, wenn der Farbmodus aktiv ist.
    pub fn color_mode_active(&self) -> bool {
        self.color_mode == ColorMode::SelectMode
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(StopColor::Red)
    }
}
