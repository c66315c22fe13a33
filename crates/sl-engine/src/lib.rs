//! Story traversal engine for Storyloom branching quizzes.
//!
//! A [`StoryEngine`] walks a [`QuestionGraph`](sl_core::QuestionGraph): each
//! submitted answer draws one of its narrative fragments at random, appends
//! it to the story, and moves to the answer's next question or finishes the
//! quiz. One engine holds one run; create one per concurrent session.

pub mod config;
pub mod engine;
pub mod outcome;
pub mod state;

pub use config::EngineConfig;
pub use engine::{Step, StoryEngine};
pub use outcome::FinishedStory;
pub use state::{Progress, TraversalState};
