use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
    Hint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputEntry {
    pub tone: Tone,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

/// Text produced by the most recent menu action.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputLog {
    pub entries: Vec<OutputEntry>,
    pub scroll: u16,
}

impl OutputLog {
    pub fn clear(&mut self) {
        self.entries.clear();
        self.scroll = 0;
    }

    pub fn push(&mut self, tone: Tone, text: impl Into<String>) {
        self.entries.push(OutputEntry {
            tone,
            text: text.into(),
            timestamp: Local::now(),
        });
    }

    pub fn line_count(&self) -> usize {
        self.entries.iter().map(|e| e.text.lines().count().max(1)).sum()
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: u16) {
        let max_scroll = u16::try_from(self.line_count().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(amount).min(max_scroll);
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.text.contains(needle))
    }

    pub fn last(&self) -> Option<&OutputEntry> {
        self.entries.last()
    }
}
