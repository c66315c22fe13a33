//! Error types for quiz data and traversal.

use thiserror::Error;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur while loading or traversing a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A selection was requested from an empty sequence.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An answer points at a question index outside the graph.
    #[error(
        "invalid graph: question {question}, answer {answer} points to question {next}, but the graph has {len} question(s)"
    )]
    InvalidGraph {
        /// Index of the question holding the answer.
        question: usize,
        /// Index of the answer within that question.
        answer: usize,
        /// The out-of-range target index.
        next: usize,
        /// Number of questions in the graph.
        len: usize,
    },

    /// The graph has no questions to start from.
    #[error("invalid graph: the quiz has no questions")]
    EmptyGraph,

    /// An operation is not allowed in the current traversal state.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// Reading or writing a content file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A content file is not valid quiz JSON.
    #[error("malformed quiz content: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuizError {
    /// Whether this error describes malformed question graph data.
    pub fn is_graph_error(&self) -> bool {
        matches!(self, Self::InvalidGraph { .. } | Self::EmptyGraph)
    }
}
