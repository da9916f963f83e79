//! # Console Adapter
//!
//! The line-oriented terminal layer. Reads lines, prints text, and drives
//! the navigator and the quiz with them.
//!
//! This is the only module that touches stdin/stdout. `Console` is generic
//! over its reader and writer so the whole session can be run against
//! scripted input in tests.
//!
//! ## Session Flow
//!
//! ```text
//! run_menu: start ─▶ read line ─▶ translate ─▶ advance ─┬─ Continue ──▶ (loop)
//!                        ▲                              ├─ error ─────▶ "Try again"
//!                        └──────────────────────────────┤
//!                                                       ├─ Terminate ─▶ Exited
//!                                                       └─ BeginTesting
//!                                                              │
//! run_quiz: arm timer ─▶ ask ─▶ select!(answer, expiry) ─▶ Outcome
//! ```

mod quiz_runner;
mod screen;

pub use quiz_runner::{QuizError, run_quiz};

use log::{info, warn};
use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::core::config::ResolvedConfig;
use crate::core::content;
use crate::core::convert::trim_line_terminator;
use crate::core::navigator::{Navigator, NavigatorError, Signal, translate_user_text};
use crate::core::quiz::Outcome;

/// How a whole run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked Exit (or input ended) before testing.
    Exited,
    /// The quiz ran to an outcome.
    Completed(Outcome),
}

impl SessionEnd {
    /// Process exit status. Leaving via Exit is a success, same as a pass.
    pub fn exit_code(self) -> i32 {
        match self {
            SessionEnd::Exited | SessionEnd::Completed(Outcome::Passed) => 0,
            SessionEnd::Completed(Outcome::Failed | Outcome::TimedOut) => 1,
        }
    }
}

/// A line reader plus a writer, with the pacing used for slow text.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    pacing: Duration,
}

impl Console<BufReader<Stdin>, io::Stdout> {
    pub fn stdio(pacing: Duration) -> Self {
        Console::new(BufReader::new(tokio::io::stdin()), io::stdout(), pacing)
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(reader: R, writer: W, pacing: Duration) -> Self {
        Self {
            reader,
            writer,
            pacing,
        }
    }

    /// Reads one line with its terminator stripped. `None` at end of input.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_terminator(&line).to_string()))
    }

    /// Prints `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.writer, MoveTo(0, 0), Clear(ClearType::All))?;
        self.writer.flush()
    }

    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Runs the menu until it hands off to testing or exits.
///
/// Bad input never ends the loop; it prints "Try again" and reads again.
/// End of input counts as choosing Exit.
pub async fn run_menu<R, W>(console: &mut Console<R, W>) -> io::Result<Signal>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    let mut navigator = Navigator::new();
    if let Err(e) = navigator.start(console).await {
        return Err(into_io(e));
    }

    loop {
        let Some(line) = console.read_line().await? else {
            info!("Input closed in menu, exiting");
            return Ok(Signal::Terminate);
        };
        console.say("")?;

        let result = match translate_user_text(&line) {
            Ok(event) => navigator.advance(event, console).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(Signal::Continue) => {}
            Ok(signal) => {
                info!("Menu finished in {:?} with {:?}", navigator.state(), signal);
                return Ok(signal);
            }
            Err(NavigatorError::Render(e)) => return Err(e),
            Err(e) => {
                warn!("Menu input rejected: {}", e);
                console.say(content::TRY_AGAIN)?;
            }
        }
    }
}

fn into_io(e: NavigatorError) -> io::Error {
    match e {
        NavigatorError::Render(e) => e,
        other => io::Error::other(other.to_string()),
    }
}

/// Menu, then quiz if the user asked for it.
pub async fn run_session<R, W>(
    console: &mut Console<R, W>,
    time_limit: Duration,
) -> Result<SessionEnd, QuizError>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    match run_menu(console).await? {
        Signal::BeginTesting => {
            console.say(content::TESTING_STARTED)?;
            let outcome = run_quiz(console, time_limit).await?;
            console.say(outcome.message())?;
            info!("Quiz finished: {:?}", outcome);
            Ok(SessionEnd::Completed(outcome))
        }
        Signal::Terminate | Signal::Continue => Ok(SessionEnd::Exited),
    }
}

/// Runs a full session on stdin/stdout.
pub async fn run(config: &ResolvedConfig) -> Result<SessionEnd, QuizError> {
    let mut console = Console::stdio(config.pacing);
    run_session(&mut console, config.time_limit).await
}
