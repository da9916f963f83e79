//! # Menu Navigator
//!
//! A Moore state machine driving the menu. Every screen is a `State`, every
//! digit the user types is an `Event`, and `TRANSITIONS` says where each
//! (state, event) pair leads.
//!
//! ```text
//!  Undefined ──Start──▶ MainMenu ──1──▶ JediCode ◀─1─┐
//!                        │ ▲  │            │ 2        │
//!                        │ └──┼────────────┘          │
//!                        │    └─2──▶ JediOrder ──1────┘
//!                        ├─3──▶ StartTesting  (terminal)
//!                        └─4──▶ Exit          (terminal)
//! ```
//!
//! Landing in a state runs its entry action once. Screens are rendered
//! through the `Screen` trait; the two terminal states produce a `Signal`
//! instead so the caller decides what "start testing" or "exit" means.

use std::fmt;
use std::io;

use async_trait::async_trait;
use log::{debug, warn};

use crate::core::convert::{parse_integer, trim_line_terminator};

/// Menu screens. `Undefined` is 0 so it doubles as the "no transition"
/// marker in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum State {
    Undefined = 0,
    MainMenu,
    JediCode,
    JediOrder,
    StartTesting,
    Exit,
}

impl State {
    pub const COUNT: usize = 6;

    pub const ALL: [State; State::COUNT] = [
        State::Undefined,
        State::MainMenu,
        State::JediCode,
        State::JediOrder,
        State::StartTesting,
        State::Exit,
    ];

    pub fn is_terminal(self) -> bool {
        matches!(self, State::StartTesting | State::Exit)
    }
}

/// User actions. `Start` is 0 so digit `n` maps straight to discriminant `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Event {
    Start = 0,
    Choice1,
    Choice2,
    Choice3,
    Choice4,
}

impl Event {
    pub const COUNT: usize = 5;

    pub const ALL: [Event; Event::COUNT] = [
        Event::Start,
        Event::Choice1,
        Event::Choice2,
        Event::Choice3,
        Event::Choice4,
    ];
}

impl TryFrom<i32> for Event {
    type Error = NavigatorError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Event::ALL.get(i).copied())
            .ok_or_else(|| NavigatorError::InvalidInput(format!("no event with index {value}")))
    }
}

use self::State::{
    Exit as EX, JediCode as JC, JediOrder as JO, MainMenu as MM, StartTesting as ST,
    Undefined as UN,
};

/// Transition table. Row: current state. Column: event. `Undefined` means
/// the pair has no transition.
pub const TRANSITIONS: [[State; Event::COUNT]; State::COUNT] = [
    //  Start  1    2    3    4
    [MM, UN, UN, UN, UN], // Undefined
    [UN, JC, JO, ST, EX], // MainMenu
    [UN, JO, MM, UN, UN], // JediCode
    [UN, JC, MM, UN, UN], // JediOrder
    [UN, UN, UN, UN, UN], // StartTesting
    [UN, UN, UN, UN, UN], // Exit
];

/// Looks up where `event` leads from `state`, if anywhere.
pub fn next_state(state: State, event: Event) -> Option<State> {
    match TRANSITIONS[state as usize][event as usize] {
        State::Undefined => None,
        next => Some(next),
    }
}

/// What the caller should do after a successful transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep feeding input to the navigator.
    Continue,
    /// Hand control to the quiz.
    BeginTesting,
    /// Leave the program.
    Terminate,
}

/// Something a `Screen` is asked to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    MainMenu,
    JediCode,
    JediOrder,
}

/// Output side of the navigator. Implemented by the console adapter, and by
/// a recording double in tests.
#[async_trait]
pub trait Screen: Send {
    async fn show(&mut self, view: View) -> io::Result<()>;
}

#[derive(Debug)]
pub enum NavigatorError {
    /// Text that doesn't name an event, or an event index out of range.
    InvalidInput(String),
    /// A real event that leads nowhere from the current state.
    NoSuchTransition { state: State, event: Event },
    /// The entry action couldn't write to the screen.
    Render(io::Error),
}

impl fmt::Display for NavigatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigatorError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            NavigatorError::NoSuchTransition { state, event } => {
                write!(f, "no transition from {state:?} on {event:?}")
            }
            NavigatorError::Render(e) => write!(f, "render error: {e}"),
        }
    }
}

impl std::error::Error for NavigatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavigatorError::Render(e) => Some(e),
            _ => None,
        }
    }
}

/// Turns a raw input line into a menu event.
///
/// One trailing line terminator is stripped; the rest must be exactly one of
/// the digits 1 to 4.
pub fn translate_user_text(raw_line: &str) -> Result<Event, NavigatorError> {
    let text = trim_line_terminator(raw_line);
    let value = parse_integer(text, 10)
        .map_err(|e| NavigatorError::InvalidInput(format!("{text:?}: {e}")))?;
    if !(1..=4).contains(&value) {
        return Err(NavigatorError::InvalidInput(format!(
            "{value} is not a menu item"
        )));
    }
    Event::try_from(value)
}

/// The menu state machine. One per session, owned by whoever drives it.
#[derive(Debug)]
pub struct Navigator {
    state: State,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            state: State::Undefined,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Shows the main menu. Must be the first call.
    pub async fn start<S: Screen + ?Sized>(&mut self, screen: &mut S) -> Result<Signal, NavigatorError> {
        self.advance(Event::Start, screen).await
    }

    /// Applies `event`: runs the destination's entry action, then commits
    /// the new state. On any error the current state is unchanged.
    pub async fn advance<S: Screen + ?Sized>(
        &mut self,
        event: Event,
        screen: &mut S,
    ) -> Result<Signal, NavigatorError> {
        let state = self.state;
        let Some(next) = next_state(state, event) else {
            warn!("No transition from {:?} on {:?}", state, event);
            return Err(NavigatorError::NoSuchTransition { state, event });
        };

        let signal = match next {
            State::MainMenu => render(screen, View::MainMenu).await?,
            State::JediCode => render(screen, View::JediCode).await?,
            State::JediOrder => render(screen, View::JediOrder).await?,
            State::StartTesting => Signal::BeginTesting,
            State::Exit => Signal::Terminate,
            State::Undefined => return Err(NavigatorError::NoSuchTransition { state, event }),
        };

        debug!("Menu {:?} --{:?}--> {:?}", state, event, next);
        self.state = next;
        Ok(signal)
    }
}

async fn render<S: Screen + ?Sized>(screen: &mut S, view: View) -> Result<Signal, NavigatorError> {
    screen.show(view).await.map_err(NavigatorError::Render)?;
    Ok(Signal::Continue)
}
