//! Configuration for a story engine.

use sl_core::content::DEFAULT_PLACEHOLDER;

/// Configuration for a [`StoryEngine`](crate::StoryEngine).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible fragment draws. `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Token in question texts replaced by the player's name.
    pub placeholder: String,
    /// Text placed between fragments in the finished story.
    pub separator: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            separator: " ".to_string(),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the name placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the fragment separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
