//! Last-resort content substitution for failed generation runs.

use std::collections::HashMap;

/// Provider of substitute narration for one slide position.
///
/// This is the seam behind the demo failover path: when an entire
/// generation run fails, the orchestrator writes whatever this provider
/// returns into every narration slot, so the viewer always has something
/// to display.
pub trait FallbackScripts: Send + Sync {
    /// The substitute narration for a 1-based slide position.
    fn script_for(&self, position: i32) -> String;
}

/// A fixed position-keyed table of hand-authored scripts.
///
/// Positions absent from the table receive a generic transition line.
/// The table contents are injected (typically from configuration), not
/// baked into orchestration.
///
/// # Examples
///
/// ```
/// use prompteur_narration::{FallbackScripts, StaticFallbackScripts};
///
/// let scripts = StaticFallbackScripts::new([(1, "Welcome everyone.".to_string())]);
/// assert_eq!(scripts.script_for(1), "Welcome everyone.");
/// assert!(scripts.script_for(7).contains("next point"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticFallbackScripts {
    table: HashMap<i32, String>,
    filler: Option<String>,
}

impl StaticFallbackScripts {
    /// Create a table from `(position, text)` entries.
    pub fn new(entries: impl IntoIterator<Item = (i32, String)>) -> Self {
        Self {
            table: entries.into_iter().collect(),
            filler: None,
        }
    }

    /// Override the generic line used for positions not in the table.
    pub fn with_filler(mut self, filler: impl Into<String>) -> Self {
        self.filler = Some(filler.into());
        self
    }

    /// Number of hand-authored entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table has no hand-authored entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl FallbackScripts for StaticFallbackScripts {
    fn script_for(&self, position: i32) -> String {
        if let Some(text) = self.table.get(&position) {
            return text.clone();
        }
        match &self.filler {
            Some(filler) => filler.clone(),
            None => {
                "Let's move on to the next point and continue through the presentation."
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entries_win_over_the_filler() {
        let scripts = StaticFallbackScripts::new([
            (1, "Opening line.".to_string()),
            (2, "Second line.".to_string()),
        ]);
        assert_eq!(scripts.script_for(1), "Opening line.");
        assert_eq!(scripts.script_for(2), "Second line.");
    }

    #[test]
    fn unknown_positions_get_the_generic_line() {
        let scripts = StaticFallbackScripts::new([(1, "Opening line.".to_string())]);
        let generic = scripts.script_for(9);
        assert!(generic.contains("next point"));
    }

    #[test]
    fn filler_override_is_used_for_unknown_positions() {
        let scripts = StaticFallbackScripts::new([]).with_filler("Moving on.");
        assert_eq!(scripts.script_for(3), "Moving on.");
    }
}
