//! The ordered question graph.
//!
//! Questions are addressed by their position. An answer's `next` must name a
//! position inside the graph; self-loops and cycles are legal, so a quiz can
//! revisit a question as often as its data allows.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, QuizResult};
use crate::question::{Answer, Question};

/// An ordered sequence of questions, indexed `0..len`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionGraph {
    questions: Vec<Question>,
}

impl QuestionGraph {
    /// Create a graph from questions in index order.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the graph has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the question at `index`.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// All questions in index order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Mutable access for one-time preprocessing such as name substitution.
    pub fn questions_mut(&mut self) -> &mut [Question] {
        &mut self.questions
    }

    /// Iterate over questions in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Resolve where `answer` (the `answer_index`-th answer of question
    /// `question_index`) leads.
    ///
    /// Returns `Ok(None)` for a terminal answer and
    /// [`QuizError::InvalidGraph`] when the target lies outside the graph.
    pub fn check_next(
        &self,
        question_index: usize,
        answer_index: usize,
        answer: &Answer,
    ) -> QuizResult<Option<usize>> {
        match answer.next {
            Some(next) if next >= self.len() => Err(QuizError::InvalidGraph {
                question: question_index,
                answer: answer_index,
                next,
                len: self.len(),
            }),
            next => Ok(next),
        }
    }

    /// Collect every structural problem in the graph.
    ///
    /// An empty result means every answer can be taken without error.
    pub fn validate(&self) -> Vec<GraphIssue> {
        if self.is_empty() {
            return vec![GraphIssue::Empty];
        }

        let mut issues = Vec::new();
        for (qi, question) in self.questions.iter().enumerate() {
            for (ai, answer) in question.answers.iter().enumerate() {
                if let Err(QuizError::InvalidGraph { next, .. }) = self.check_next(qi, ai, answer) {
                    issues.push(GraphIssue::NextOutOfRange {
                        question: qi,
                        answer: ai,
                        next,
                    });
                }
                if answer.fragments.is_empty() {
                    issues.push(GraphIssue::NoFragments {
                        question: qi,
                        answer: ai,
                    });
                }
            }
        }
        issues
    }

    /// Indices of the questions reachable from question 0.
    pub fn reachable(&self) -> Vec<usize> {
        let mut seen = vec![false; self.len()];
        let mut stack = Vec::new();
        if !self.is_empty() {
            stack.push(0);
        }
        while let Some(index) = stack.pop() {
            if seen[index] {
                continue;
            }
            seen[index] = true;
            for answer in &self.questions[index].answers {
                if let Some(next) = answer.next.filter(|n| *n < self.len()) {
                    stack.push(next);
                }
            }
        }
        seen.iter()
            .enumerate()
            .filter_map(|(i, s)| s.then_some(i))
            .collect()
    }
}

impl From<Vec<Question>> for QuestionGraph {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

impl<'a> IntoIterator for &'a QuestionGraph {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A structural problem found by [`QuestionGraph::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphIssue {
    /// The graph has no questions.
    Empty,
    /// An answer points outside the graph.
    NextOutOfRange {
        /// Question index.
        question: usize,
        /// Answer index within the question.
        answer: usize,
        /// The invalid target.
        next: usize,
    },
    /// An answer has no fragments to draw from.
    NoFragments {
        /// Question index.
        question: usize,
        /// Answer index within the question.
        answer: usize,
    },
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "the quiz has no questions"),
            Self::NextOutOfRange {
                question,
                answer,
                next,
            } => write!(
                f,
                "question {question}, answer {answer}: next question {next} does not exist"
            ),
            Self::NoFragments { question, answer } => {
                write!(f, "question {question}, answer {answer}: no story fragments")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_step() -> QuestionGraph {
        QuestionGraph::new(vec![
            Question::new("First?").with_answer(Answer::new("A").with_fragment("a").with_next(1)),
            Question::new("Second?").with_answer(Answer::new("B").with_fragment("b")),
        ])
    }

    #[test]
    fn valid_graph_has_no_issues() {
        assert!(two_step().validate().is_empty());
    }

    #[test]
    fn empty_graph_is_reported() {
        assert_eq!(QuestionGraph::default().validate(), vec![GraphIssue::Empty]);
    }

    #[test]
    fn out_of_range_next_is_reported() {
        let graph = QuestionGraph::new(vec![
            Question::new("Q0").with_answer(Answer::new("A").with_fragment("a").with_next(5)),
            Question::new("Q1"),
            Question::new("Q2"),
        ]);
        assert_eq!(
            graph.validate(),
            vec![GraphIssue::NextOutOfRange {
                question: 0,
                answer: 0,
                next: 5
            }]
        );

        let err = graph.check_next(0, 0, &graph.questions()[0].answers[0]).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidGraph {
                next: 5,
                len: 3,
                ..
            }
        ));
    }

    #[test]
    fn answer_without_fragments_is_reported() {
        let graph = QuestionGraph::new(vec![Question::new("Q0").with_answer(Answer::new("A"))]);
        let issues = graph.validate();
        assert_eq!(
            issues,
            vec![GraphIssue::NoFragments {
                question: 0,
                answer: 0
            }]
        );
        assert_eq!(issues[0].to_string(), "question 0, answer 0: no story fragments");
    }

    #[test]
    fn cycles_are_valid() {
        let graph = QuestionGraph::new(vec![
            Question::new("Loop?")
                .with_answer(Answer::new("Again").with_fragment("again").with_next(0))
                .with_answer(Answer::new("Onward").with_fragment("onward").with_next(1)),
            Question::new("Back?").with_answer(Answer::new("Back").with_fragment("back").with_next(0)),
        ]);
        assert!(graph.validate().is_empty());
        assert_eq!(graph.reachable(), vec![0, 1]);
    }

    #[test]
    fn reachable_skips_orphans() {
        let graph = QuestionGraph::new(vec![
            Question::new("Q0").with_answer(Answer::new("A").with_fragment("a").with_next(2)),
            Question::new("orphan"),
            Question::new("Q2").with_answer(Answer::new("B").with_fragment("b")),
        ]);
        assert_eq!(graph.reachable(), vec![0, 2]);
    }

    #[test]
    fn terminal_answer_resolves_to_none() {
        let graph = two_step();
        let answer = &graph.questions()[1].answers[0];
        assert_eq!(graph.check_next(1, 0, answer).unwrap(), None);
    }
}
