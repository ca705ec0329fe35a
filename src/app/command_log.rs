//! Verlauf der Benutzer-Aktionen einer Demo-Sitzung.
//!
//! Die Integrationstests lesen daran ab, welche Commands ein Intent
//! ausgelöst hat; die Status-Bar zeigt die Anzahl.

use super::AppCommand;
use std::collections::VecDeque;

/// Begrenzter Verlauf ausgeführter Commands, älteste zuerst.
///
/// `SetViewportSize` kommt jeden Frame und wird nicht aufgezeichnet.
#[derive(Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt einen leeren Verlauf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet einen ausgeführten Command auf.
    /// Ist der Verlauf voll, fällt die ältere Hälfte weg.
    pub fn record(&mut self, command: &AppCommand) {
        if matches!(command, AppCommand::SetViewportSize { .. }) {
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push_back(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Einträge in Ausführungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }

    /// Zuletzt aufgezeichneter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }
}
