//! Core types for Storyloom branching quizzes.
//!
//! Provides the question/answer data model, the question graph with its
//! validation rules, placeholder substitution for the player's name, the
//! uniform random selector used to draw narrative fragments, and loading of
//! quiz content files.

/// Quiz content files (JSON).
pub mod content;
/// Error types for quiz data and traversal.
pub mod error;
/// The ordered question graph.
pub mod graph;
/// Player-name placeholder substitution.
pub mod placeholder;
/// Questions and answers.
pub mod question;
/// Uniform random selection.
pub mod random;

pub use content::QuizContent;
pub use error::{QuizError, QuizResult};
pub use graph::{GraphIssue, QuestionGraph};
pub use placeholder::substitute_placeholder;
pub use question::{Answer, Question};
pub use random::{DEFAULT_NAMES, pick_name, pick_random};
