//! Quiz content files.
//!
//! A content file is a JSON document carrying the question graph together
//! with the presentation data a player needs: the name placeholder, the
//! result preamble, and the pool of player names.
//!
//! ```json
//! {
//!   "title": "Thoughts of the Machine",
//!   "placeholder": "{player}",
//!   "intro": "In 2049,",
//!   "questions": [
//!     {
//!       "text": "{player} wakes up to a talking house. What now?",
//!       "answers": [
//!         { "text": "Say hello", "fragments": ["made friends with the house."] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::QuizResult;
use crate::graph::QuestionGraph;
use crate::question::{Answer, Question};
use crate::random::DEFAULT_NAMES;

/// Placeholder used when a content file does not name one.
pub const DEFAULT_PLACEHOLDER: &str = "you";

/// A complete quiz: question graph plus presentation data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizContent {
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Token in question texts replaced by the player's name.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Preamble printed before the player's name in the final story.
    #[serde(default)]
    pub intro: String,
    /// Candidate player names.
    #[serde(default = "default_names")]
    pub names: Vec<String>,
    /// The question graph.
    pub questions: QuestionGraph,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_names() -> Vec<String> {
    DEFAULT_NAMES.iter().map(|s| (*s).to_string()).collect()
}

impl QuizContent {
    /// Wrap a question graph with default presentation data.
    pub fn new(questions: QuestionGraph) -> Self {
        Self {
            title: None,
            placeholder: default_placeholder(),
            intro: String::new(),
            names: default_names(),
            questions,
        }
    }

    /// Parse content from a JSON string.
    pub fn from_json_str(json: &str) -> QuizResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a content file.
    pub fn from_path(path: &Path) -> QuizResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> QuizResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A small built-in quiz about life with machines in 2049.
    pub fn sample() -> Self {
        let questions = QuestionGraph::new(vec![
            Question::new(
                "{player} wakes up to a voice assistant that has rewritten the morning schedule. What do you do?",
            )
            .with_answer(
                Answer::new("Follow the new schedule")
                    .with_fragment("learned to trust the quiet voice that planned every day.")
                    .with_fragment("let the machine decide, and found unexpected free time.")
                    .with_next(1),
            )
            .with_answer(
                Answer::new("Switch the assistant off")
                    .with_fragment("kept the old habits, one handwritten list at a time.")
                    .with_fragment("chose silence over suggestions and never looked back.")
                    .with_next(2),
            ),
            Question::new("At work, an AI offers to write {player}'s reports. Accept?")
                .with_answer(
                    Answer::new("Yes, and review everything")
                        .with_fragment("became the editor of a tireless machine colleague.")
                        .with_fragment("spent the saved hours mentoring new engineers.")
                        .with_next(2),
                )
                .with_answer(
                    Answer::new("Yes, without reading them")
                        .with_fragment("signed a report that promised a moon base by Friday.")
                        .with_fragment("was promoted for ideas nobody had actually had."),
                ),
            Question::new("A city council asks {player} to vote on AI-run public transport.")
                .with_answer(
                    Answer::new("Vote in favor")
                        .with_fragment("rode driverless trams that were never late again.")
                        .with_fragment("watched traffic jams become a story for grandchildren."),
                )
                .with_answer(
                    Answer::new("Ask for a trial first")
                        .with_fragment("led the trial that shaped the city's rules for machines.")
                        .with_next(1),
                ),
        ]);

        Self {
            title: Some("Thoughts of the Machine".to_string()),
            placeholder: "{player}".to_string(),
            intro: "In 2049,".to_string(),
            names: default_names(),
            questions,
        }
    }
}
