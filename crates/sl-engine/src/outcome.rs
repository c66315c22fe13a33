//! The result of a finished run.

use serde::{Deserialize, Serialize};

/// The personalized story produced by a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishedStory {
    /// The player's name.
    pub player_name: String,
    /// All drawn fragments, in traversal order, joined by the separator.
    pub story: String,
}

impl FinishedStory {
    /// Render the closing line: `"{intro} {player_name} {story}"`.
    ///
    /// An empty intro is left out.
    pub fn narrate(&self, intro: &str) -> String {
        let intro = intro.trim();
        if intro.is_empty() {
            format!("{} {}", self.player_name, self.story)
        } else {
            format!("{intro} {} {}", self.player_name, self.story)
        }
    }
}
