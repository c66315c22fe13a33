//! Questions and answers.

use serde::{Deserialize, Serialize};

/// A question presented to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text. May embed the player-name placeholder until personalized.
    pub text: String,
    /// Answer choices, in display order.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    /// Create a question with no answers.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            answers: Vec::new(),
        }
    }

    /// Add an answer.
    pub fn with_answer(mut self, answer: Answer) -> Self {
        self.answers.push(answer);
        self
    }

    /// Position of an answer in this question, compared by value.
    pub fn position_of(&self, answer: &Answer) -> Option<usize> {
        self.answers.iter().position(|a| a == answer)
    }
}

/// An answer choice and the narrative it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Label shown to the player.
    pub text: String,
    /// Candidate narrative continuations; one is drawn when the answer is taken.
    #[serde(default)]
    pub fragments: Vec<String>,
    /// Index of the next question, or `None` if this answer ends the quiz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<usize>,
}

impl Answer {
    /// Create a terminal answer with no fragments.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fragments: Vec::new(),
            next: None,
        }
    }

    /// Add a candidate fragment.
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragments.push(fragment.into());
        self
    }

    /// Point this answer at the question with the given index.
    pub fn with_next(mut self, next: usize) -> Self {
        self.next = Some(next);
        self
    }

    /// Whether taking this answer ends the quiz.
    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }
}
