use std::time::Duration;

use jedi_quiz::console::{Console, SessionEnd, run_session};
use jedi_quiz::core::navigator::{Event, Navigator, NavigatorError, Signal, State, translate_user_text};
use jedi_quiz::core::quiz::Outcome;
use tokio::io::{AsyncWriteExt, BufReader};

// ============================================================================
// Helper Functions
// ============================================================================

const LIMIT: Duration = Duration::from_secs(30);

/// Runs a whole session against `input` and returns the end plus everything printed.
async fn run_scripted(input: &'static str) -> (SessionEnd, String) {
    let mut console = Console::new(input.as_bytes(), Vec::new(), Duration::ZERO);
    let end = run_session(&mut console, LIMIT).await.expect("session should not error");
    let out = String::from_utf8(console.into_writer()).expect("output is UTF-8");
    (end, out)
}

// ============================================================================
// Menu Scenarios
// ============================================================================

#[tokio::test]
async fn test_boot_then_start_testing_locks_navigator() {
    let mut console = Console::new(&b""[..], Vec::new(), Duration::ZERO);
    let mut navigator = Navigator::new();

    assert_eq!(navigator.start(&mut console).await.unwrap(), Signal::Continue);
    assert_eq!(navigator.state(), State::MainMenu);

    let event = translate_user_text("3\n").unwrap();
    assert_eq!(event, Event::Choice3);
    assert_eq!(
        navigator.advance(event, &mut console).await.unwrap(),
        Signal::BeginTesting
    );
    assert_eq!(navigator.state(), State::StartTesting);

    for event in [Event::Start, Event::Choice1, Event::Choice2, Event::Choice3, Event::Choice4] {
        assert!(matches!(
            navigator.advance(event, &mut console).await,
            Err(NavigatorError::NoSuchTransition { state: State::StartTesting, .. })
        ));
    }

    let out = String::from_utf8(console.into_writer()).unwrap();
    assert!(out.contains("(3) Start testing"));
}

#[tokio::test]
async fn test_jedi_code_back_to_main_then_bad_digit() {
    let mut console = Console::new(&b""[..], Vec::new(), Duration::ZERO);
    let mut navigator = Navigator::new();
    navigator.start(&mut console).await.unwrap();

    let event = translate_user_text("1\n").unwrap();
    navigator.advance(event, &mut console).await.unwrap();
    assert_eq!(navigator.state(), State::JediCode);

    let event = translate_user_text("2\n").unwrap();
    navigator.advance(event, &mut console).await.unwrap();
    assert_eq!(navigator.state(), State::MainMenu);

    assert!(matches!(
        translate_user_text("9\n"),
        Err(NavigatorError::InvalidInput(_))
    ));
    assert_eq!(navigator.state(), State::MainMenu);

    let out = String::from_utf8(console.into_writer()).unwrap();
    assert_eq!(out.matches("Hello, young Padawan!").count(), 2);
    assert!(out.contains("There is no death, there is the Force."));
}

// ============================================================================
// Full Sessions
// ============================================================================

#[tokio::test]
async fn test_session_browse_then_pass() {
    let (end, out) = run_scripted(
        "1\n1\n2\nx\n3\npeace\nknowledge\nserenity\nharmony\nthe Force\n",
    )
    .await;
    assert_eq!(end, SessionEnd::Completed(Outcome::Passed));
    assert_eq!(end.exit_code(), 0);
    assert!(out.contains("Jedi Order was a noble religious order"));
    assert!(out.contains("Try again"));
    assert!(out.contains("Testing started: please enter correct answer for each question"));
    assert!(out.trim_end().ends_with("May the Force be with you!"));
}

#[tokio::test]
async fn test_session_fail_stops_asking() {
    let (end, out) = run_scripted("3\npeace\nhate\nserenity\n").await;
    assert_eq!(end, SessionEnd::Completed(Outcome::Failed));
    assert_eq!(end.exit_code(), 1);
    assert!(out.contains("There is no ignorance, there is ..."));
    assert!(!out.contains("There is no passion, there is ..."));
    assert!(out.trim_end().ends_with("Alas, young Padawan, you are not ready for the path yet!"));
}

#[tokio::test]
async fn test_session_exit_from_menu() {
    let (end, out) = run_scripted("2\n2\n4\n").await;
    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(end.exit_code(), 0);
    assert!(!out.contains("Testing started"));
}

#[tokio::test]
async fn test_session_times_out_waiting_for_answer() {
    // Keep the writer half alive so reads stay pending instead of hitting EOF
    let (reader, mut writer) = tokio::io::duplex(64);
    writer.write_all(b"3\npeace\n").await.unwrap();

    let mut console = Console::new(BufReader::new(reader), Vec::new(), Duration::ZERO);
    let end = run_session(&mut console, Duration::from_millis(100)).await.unwrap();
    assert_eq!(end, SessionEnd::Completed(Outcome::TimedOut));
    assert_eq!(end.exit_code(), 1);

    let out = String::from_utf8(console.into_writer()).unwrap();
    assert!(out.contains("There is no ignorance, there is ..."));
    assert!(!out.contains("There is no passion, there is ..."));
    assert!(out.trim_end().ends_with("Time is up, young Padawan! A Jedi must be quicker than that."));
    drop(writer);
}
