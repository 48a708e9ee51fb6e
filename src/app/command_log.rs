//! Minimales Command-Log für Diagnose und Tests.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Anzahl geloggter Frame-Schritte (Frame-Ticks dominieren das Log).
    pub fn step_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|c| matches!(c, AppCommand::StepAnimation))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_drops_oldest_half() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::ClearAnchors);
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::StepAnimation);
        }

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert!(log
            .entries()
            .iter()
            .all(|c| matches!(c, AppCommand::StepAnimation)));
        assert_eq!(log.step_count(), log.len());
    }
}
