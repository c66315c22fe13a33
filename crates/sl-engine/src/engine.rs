//! The story traversal engine.
//!
//! States are "at question `i`" and "finished". Submitting an answer draws a
//! fragment, appends it to the story, and follows the answer's `next` index.
//! Every check runs before anything changes, so a rejected answer leaves the
//! run exactly as it was.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use sl_core::{Answer, Question, QuestionGraph, QuizError, QuizResult, pick_random};

use crate::config::EngineConfig;
use crate::outcome::FinishedStory;
use crate::state::{Progress, TraversalState};

/// What the caller should present after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'a> {
    /// The next question to show.
    Question {
        /// Its index in the graph.
        index: usize,
        /// The question itself.
        question: &'a Question,
    },
    /// The quiz has ended.
    Finished(FinishedStory),
}

/// Walks one quiz run over a personalized question graph.
pub struct StoryEngine<R: Rng = StdRng> {
    graph: QuestionGraph,
    player_name: String,
    config: EngineConfig,
    rng: R,
    state: TraversalState,
}

impl StoryEngine<StdRng> {
    /// Start a run over `graph` for `player_name`.
    ///
    /// The graph is copied and personalized with the player's name. Fragment
    /// draws are seeded from `config.seed`, or from OS entropy when unset.
    pub fn start(
        graph: &QuestionGraph,
        player_name: impl Into<String>,
        config: EngineConfig,
    ) -> QuizResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(graph, player_name, config, rng)
    }
}

impl<R: Rng> StoryEngine<R> {
    /// Start a run that draws fragments from the given random source.
    pub fn with_rng(
        graph: &QuestionGraph,
        player_name: impl Into<String>,
        config: EngineConfig,
        rng: R,
    ) -> QuizResult<Self> {
        if graph.is_empty() {
            return Err(QuizError::EmptyGraph);
        }
        let player_name = player_name.into();
        let graph = graph.personalize(&config.placeholder, &player_name);
        info!(player = %player_name, questions = graph.len(), "quiz started");

        Ok(Self {
            graph,
            player_name,
            config,
            rng,
            state: TraversalState::new(),
        })
    }

    /// The personalized graph.
    pub fn graph(&self) -> &QuestionGraph {
        &self.graph
    }

    /// The player's name.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The traversal state.
    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    /// Whether the run has finished.
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// The question to present, or an error once the run has finished.
    pub fn current_question(&self) -> QuizResult<&Question> {
        if self.state.is_finished() {
            return Err(QuizError::InvalidTransition(
                "the quiz has finished; there is no current question".to_string(),
            ));
        }
        self.question_at(self.state.current_index())
    }

    /// Submit one of the current question's answers.
    ///
    /// The answer is matched by value against the current question's answers;
    /// one that does not belong to it is rejected with
    /// [`QuizError::InvalidTransition`].
    pub fn submit_answer(&mut self, answer: &Answer) -> QuizResult<Step<'_>> {
        let question = self.current_question().map_err(rejected)?;
        let index = question.position_of(answer).ok_or_else(|| {
            rejected(QuizError::InvalidTransition(format!(
                "answer \"{}\" does not belong to question {}",
                answer.text,
                self.state.current_index()
            )))
        })?;
        self.choose(index)
    }

    /// Submit the current question's answer at `answer_index`.
    pub fn choose(&mut self, answer_index: usize) -> QuizResult<Step<'_>> {
        if self.state.is_finished() {
            return Err(rejected(QuizError::InvalidTransition(
                "the quiz has already finished".to_string(),
            )));
        }

        let question_index = self.state.current_index();
        let question = self
            .graph
            .get(question_index)
            .ok_or_else(|| rejected(out_of_graph(question_index)))?;
        let answer = question.answers.get(answer_index).ok_or_else(|| {
            rejected(QuizError::InvalidTransition(format!(
                "question {question_index} has no answer {answer_index}"
            )))
        })?;
        let next = self
            .graph
            .check_next(question_index, answer_index, answer)
            .map_err(rejected)?;
        let fragment = pick_random(&mut self.rng, &answer.fragments)
            .map_err(rejected)?
            .clone();

        debug!(
            question = question_index,
            answer = answer_index,
            next = ?next,
            "answer accepted"
        );
        self.state.record(question_index, answer_index, fragment, next);

        match next {
            Some(index) => Ok(Step::Question {
                index,
                question: self.question_at(index)?,
            }),
            None => {
                let finished = self.finished_story();
                info!(
                    player = %self.player_name,
                    answers = self.state.path().len(),
                    "quiz finished"
                );
                Ok(Step::Finished(finished))
            }
        }
    }

    /// The finished story, once the run has ended.
    pub fn result(&self) -> Option<FinishedStory> {
        self.state.is_finished().then(|| self.finished_story())
    }

    /// The story accumulated so far, joined by the separator.
    pub fn story_so_far(&self) -> String {
        self.state.story().join(&self.config.separator)
    }

    /// How far the run has progressed.
    pub fn progress(&self) -> Progress {
        Progress {
            position: self.state.current_index(),
            total: self.graph.len(),
            answered: self.state.path().len(),
            finished: self.state.is_finished(),
        }
    }

    /// Return to the first question with an empty story, keeping the player's name.
    pub fn reset(&mut self) -> &Question {
        debug!(discarded = self.state.story().len(), "quiz reset");
        self.state.reset();
        &self.graph.questions()[0]
    }

    fn question_at(&self, index: usize) -> QuizResult<&Question> {
        self.graph.get(index).ok_or_else(|| out_of_graph(index))
    }

    fn finished_story(&self) -> FinishedStory {
        FinishedStory {
            player_name: self.player_name.clone(),
            story: self.story_so_far(),
        }
    }
}

fn out_of_graph(index: usize) -> QuizError {
    QuizError::InvalidTransition(format!("question {index} is outside the graph"))
}

fn rejected(err: QuizError) -> QuizError {
    warn!(error = %err, "answer rejected");
    err
}
