//! Output formatter trait

use corpus_domain::Draw;

/// Trait for formatting draw results
pub trait OutputFormatter {
    /// Format draws for humans, one per line
    fn format_plain(&self, draws: &[Draw]) -> String;

    /// Format as JSON
    fn format_json(&self, draws: &[Draw]) -> String;
}
