//! # Quiz Runner
//!
//! Asks the questions in order against a one-shot countdown.
//!
//! Two parties race to end the session: the foreground (an answer decides
//! pass or fail) and the timer callback (time ran out). `ended` is the
//! single point of shared state. Whoever flips it from `false` to `true`
//! first owns the outcome; the loser's result is discarded.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, info, warn};
use tokio::io::AsyncBufRead;
use tokio::sync::Notify;

use super::Console;
use crate::core::quiz::{Outcome, QuizSession, Verdict};
use crate::timer::{CountdownTimer, TimerError};

#[derive(Debug)]
pub enum QuizError {
    /// The countdown couldn't be set up, so the quiz never started.
    Timer(TimerError),
    Io(io::Error),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Timer(e) => write!(f, "cannot run timed quiz: {e}"),
            QuizError::Io(e) => write!(f, "console I/O error: {e}"),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Timer(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<TimerError> for QuizError {
    fn from(e: TimerError) -> Self {
        QuizError::Timer(e)
    }
}

impl From<io::Error> for QuizError {
    fn from(e: io::Error) -> Self {
        QuizError::Io(e)
    }
}

/// Runs the quiz with `time_limit` for all five answers together.
///
/// The timer is destroyed before this returns, whatever the result.
pub async fn run_quiz<R, W>(
    console: &mut Console<R, W>,
    time_limit: Duration,
) -> Result<Outcome, QuizError>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    run_quiz_with(console, time_limit, || {}).await
}

/// `run_quiz`, with `on_expiry` called every time the countdown fires.
async fn run_quiz_with<R, W, F>(
    console: &mut Console<R, W>,
    time_limit: Duration,
    on_expiry: F,
) -> Result<Outcome, QuizError>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
    F: Fn() + Send + Sync + 'static,
{
    let ended = Arc::new(AtomicBool::new(false));
    let expired = Arc::new(Notify::new());

    let mut timer = CountdownTimer::create({
        let ended = Arc::clone(&ended);
        let expired = Arc::clone(&expired);
        move || {
            on_expiry();
            if !ended.swap(true, Ordering::SeqCst) {
                info!("Quiz time limit reached");
                expired.notify_one();
            }
        }
    })?;
    timer.start(time_limit, true)?;
    info!("Quiz started with a {:?} time limit", time_limit);

    let result = ask_all(console, &ended, &expired).await;
    timer.destroy();
    result
}

async fn ask_all<R, W>(
    console: &mut Console<R, W>,
    ended: &AtomicBool,
    expired: &Notify,
) -> Result<Outcome, QuizError>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    let mut session = QuizSession::new();

    while let Some(question) = session.current() {
        console.say(question.prompt)?;

        let answer = tokio::select! {
            biased;
            _ = expired.notified() => return Ok(Outcome::TimedOut),
            line = console.read_line() => line?,
        };
        let answer = answer.unwrap_or_else(|| {
            warn!("Input closed during quiz, treating as empty answer");
            String::new()
        });

        if session.submit(&answer) == Verdict::Wrong {
            debug!("Wrong answer to question {}", session.position() + 1);
            return Ok(conclude(ended, Outcome::Failed));
        }
    }

    Ok(conclude(ended, Outcome::Passed))
}

/// Claims the session for the foreground. If the timer got there first,
/// the quiz timed out regardless of the answer.
fn conclude(ended: &AtomicBool, outcome: Outcome) -> Outcome {
    if ended.swap(true, Ordering::SeqCst) {
        Outcome::TimedOut
    } else {
        outcome
    }
}
