//! Console output formatter for draws

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use corpus_domain::Draw;

/// Formats draws for console display
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFormatter {
    show_corpus: bool,
    color: bool,
}

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix each item with the corpus it came from
    pub fn with_corpus(mut self, show_corpus: bool) -> Self {
        self.show_corpus = show_corpus;
        self
    }

    /// Colour the corpus prefix
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Format a single draw as one line (without trailing newline)
    pub fn format_draw(&self, draw: &Draw) -> String {
        if !self.show_corpus {
            return draw.item.to_string();
        }

        let label = format!("{}:", draw.corpus);
        let label = if self.color {
            label.cyan().bold().to_string()
        } else {
            label
        };
        format!("{} {}", label, draw.item)
    }

    /// Format draws as a JSON array of `{ "corpus", "item" }` objects
    pub fn format_json(draws: &[Draw]) -> String {
        serde_json::to_string_pretty(draws).unwrap_or_else(|_| "[]".to_string())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_plain(&self, draws: &[Draw]) -> String {
        draws
            .iter()
            .map(|draw| self.format_draw(draw))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_json(&self, draws: &[Draw]) -> String {
        Self::format_json(draws)
    }
}
