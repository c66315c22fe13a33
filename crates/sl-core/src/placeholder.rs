//! Player-name placeholder substitution.

use crate::graph::QuestionGraph;
use crate::question::Question;

/// Replace every occurrence of `placeholder` in each question's text with `name`.
///
/// Matching is literal and case-sensitive. An empty placeholder leaves the
/// questions untouched. Once no placeholder remains, applying it again is a
/// no-op.
pub fn substitute_placeholder(questions: &mut [Question], placeholder: &str, name: &str) {
    if placeholder.is_empty() {
        return;
    }
    for question in questions {
        if question.text.contains(placeholder) {
            question.text = question.text.replace(placeholder, name);
        }
    }
}

impl QuestionGraph {
    /// Return a copy of this graph with the placeholder replaced by `name`.
    ///
    /// The template graph is left untouched, so personalizing it again for a
    /// new run never substitutes twice.
    pub fn personalize(&self, placeholder: &str, name: &str) -> QuestionGraph {
        let mut graph = self.clone();
        substitute_placeholder(graph.questions_mut(), placeholder, name);
        graph
    }
}
