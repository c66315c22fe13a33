//! Traversal state for a single quiz run.

/// Where a run stands: current question, accumulated story, and the path taken.
///
/// Created at question 0 with an empty story. Only the engine mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalState {
    current_index: usize,
    story: Vec<String>,
    finished: bool,
    /// (question index, answer index) pairs in the order they were taken.
    path: Vec<(usize, usize)>,
}

impl TraversalState {
    /// Create the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the question being presented (the last one, once finished).
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Fragments drawn so far, in traversal order.
    pub fn story(&self) -> &[String] {
        &self.story
    }

    /// Whether the run has reached a terminal answer.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Answers taken so far as (question index, answer index) pairs.
    pub fn path(&self) -> &[(usize, usize)] {
        &self.path
    }

    /// Record a taken answer and move to `next`, or finish when it is `None`.
    pub(crate) fn record(
        &mut self,
        question_index: usize,
        answer_index: usize,
        fragment: String,
        next: Option<usize>,
    ) {
        self.story.push(fragment);
        self.path.push((question_index, answer_index));
        match next {
            Some(next) => self.current_index = next,
            None => self.finished = true,
        }
    }

    /// Return to question 0 with an empty story.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.story.clear();
        self.finished = false;
        self.path.clear();
    }
}

/// How far a run has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Index of the current question.
    pub position: usize,
    /// Number of questions in the graph.
    pub total: usize,
    /// Answers taken so far. Can exceed `total` in cyclic graphs.
    pub answered: usize,
    /// Whether the run has finished.
    pub finished: bool,
}

impl Progress {
    /// Completion percentage based on the current question's position.
    pub fn percent(&self) -> u8 {
        if self.finished {
            100
        } else if self.total == 0 {
            0
        } else {
            (self.position.min(self.total) * 100 / self.total) as u8
        }
    }
}
