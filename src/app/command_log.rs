//! Verlauf ausgefuehrter Commands.
//!
//! Der Controller protokolliert jeden ausgefuehrten `AppCommand` in
//! Reihenfolge. Integrationstests pruefen darueber, welche Mutationen
//! ein Intent tatsaechlich ausgeloest hat; beim Debuggen zeigt der
//! Verlauf die letzten Schritte vor einem fehlerhaften Zustand.

use super::AppCommand;

/// Chronologisches, groessenbeschraenktes Protokoll der Commands.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    /// Obergrenze des Verlaufs; beim Erreichen wird die aeltere Haelfte
    /// verworfen, damit nicht jeder weitere Command verschieben muss.
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Protokolliert einen ausgefuehrten Command.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    /// Anzahl der protokollierten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Ist der Verlauf leer?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only Sicht auf den Verlauf, aelteste zuerst.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
