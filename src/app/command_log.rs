//! Command-Log als strukturierter Beobachtungs-Hook.
//!
//! Ersetzt die Konsolenausgabe pro Drag: jede ausgeführte Aktion landet hier
//! und kann von Tests oder dem Treiber ausgewertet werden.

use super::AppCommand;
use std::collections::VecDeque;

/// Standard-Kapazität des Logs.
pub const DEFAULT_LOG_CAPACITY: usize = 1000;

/// Die zuletzt ausgeführten Commands, ältester zuerst.
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

impl CommandLog {
    /// Leeres Log mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leeres Log, das höchstens `capacity` Einträge hält (mindestens einen).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Hängt einen Command an; bei voller Kapazität fällt der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle gehaltenen Einträge, ältester zuerst.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &AppCommand> + '_ {
        self.entries.iter()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Zählt Einträge, die `predicate` erfüllen.
    pub fn count_matching(&self, predicate: impl Fn(&AppCommand) -> bool) -> usize {
        self.entries.iter().filter(|command| predicate(command)).count()
    }
}
