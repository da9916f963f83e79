//! # Quiz
//!
//! The five Jedi Code questions and a forward-only cursor over them.
//! Answers are compared exactly and case-sensitively; the last question
//! takes either "the Force" or "Force".
//!
//! Timing lives elsewhere (`console::quiz_runner`). This module only knows
//! which question is next and whether an answer is right.

use crate::core::content;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub accepted: &'static [&'static str],
}

impl Question {
    pub fn accepts(&self, answer: &str) -> bool {
        self.accepted.iter().any(|accepted| *accepted == answer)
    }
}

pub static QUESTIONS: [Question; 5] = [
    Question {
        prompt: "There is no emotion, there is ...\n",
        accepted: &["peace"],
    },
    Question {
        prompt: "There is no ignorance, there is ...\n",
        accepted: &["knowledge"],
    },
    Question {
        prompt: "There is no passion, there is ...\n",
        accepted: &["serenity"],
    },
    Question {
        prompt: "There is no chaos, there is ...\n",
        accepted: &["harmony"],
    },
    Question {
        prompt: "There is no death, there is ...\n",
        accepted: &["the Force", "Force"],
    },
];

/// How a quiz run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    TimedOut,
}

impl Outcome {
    /// Text shown to the user once the run is over.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Passed => content::PASSED,
            Outcome::Failed => content::FAILED,
            Outcome::TimedOut => content::TIMED_OUT,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Passed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

/// Cursor over `QUESTIONS`. Moves forward on a correct answer and never
/// moves back.
#[derive(Debug, Default)]
pub struct QuizSession {
    cursor: usize,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the question being asked.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.cursor)
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= QUESTIONS.len()
    }

    /// Checks `answer` against the current question. A wrong answer, or an
    /// answer after the last question, leaves the cursor where it is.
    pub fn submit(&mut self, answer: &str) -> Verdict {
        match self.current() {
            Some(question) if question.accepts(answer) => {
                self.cursor += 1;
                Verdict::Correct
            }
            _ => Verdict::Wrong,
        }
    }
}
