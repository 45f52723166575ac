//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input, timer
//! expiry, deck loading results, and worker responses, translating them into
//! state changes and action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `QuizSession` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Input**: `Intent`, `PointerDown`, `PointerUp`, `CloseFocus`
//! - **Animation**: `PhaseElapsed`
//! - **Loading**: `PermissionsResult`, `DeckFetched`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use flashquiz::app::{handle_event, AppState, Event, QuizSettings};
//! use flashquiz::input::Intent;
//! use flashquiz::ui::Theme;
//!
//! let mut state = AppState::new(None, QuizSettings::default(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Intent(Intent::Next))?;
//! assert!(!should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), flashquiz::FlashquizError>(())
//! ```

use super::session::SessionOutcome;
use super::state::DeckLocation;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::input::{column_to_units, Intent, Swipe};
use crate::storage::parse_payload;
use crate::ui::components::controls::Control;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, timers, or loading results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A normalized request from the keyboard or another input surface.
    Intent(Intent),

    /// The timer for the current transition phase fired.
    PhaseElapsed,

    /// Left button pressed.
    PointerDown {
        /// 0-indexed column of the press.
        col: usize,
        /// Control under the pointer, if any.
        control: Option<Control>,
    },

    /// Left button released.
    PointerUp {
        /// 0-indexed column of the release.
        col: usize,
        /// Control under the pointer, if any.
        control: Option<Control>,
    },

    /// An HTTP deck request completed.
    DeckFetched {
        status: u16,
        body: Vec<u8>,
    },

    /// The user answered the permission request.
    PermissionsResult {
        granted: bool,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),

    /// Hides the plugin UI.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// Whether the UI must be re-rendered, and the actions to execute in order.
///
/// # Errors
///
/// Reserved for failures that cannot be represented in the state. Deck loading
/// problems are not errors here: they move the app into the failed state.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::Intent(intent) => Ok(apply_intent(state, *intent)),
        Event::PhaseElapsed => {
            let Some(session) = state.session_mut() else {
                tracing::debug!("timer fired without a session");
                return Ok((false, vec![]));
            };

            let Some(step) = session.on_phase_elapsed() else {
                tracing::debug!("timer fired with no transition running");
                return Ok((false, vec![]));
            };

            tracing::debug!(
                swapped = step.swapped,
                complete = step.is_complete(),
                "transition phase elapsed"
            );

            Ok((true, step.next_timer.map(Action::ScheduleTimer).into_iter().collect()))
        }
        Event::PointerDown { col, control } => {
            state.gesture.start(column_to_units(*col));
            state.pressed_control = *control;
            Ok((false, vec![]))
        }
        Event::PointerUp { col, control } => {
            if !state.gesture.in_progress() {
                return Ok((false, vec![]));
            }

            let swipe = state.gesture.end(column_to_units(*col));
            let pressed = state.pressed_control.take();

            let intent = match swipe {
                // A click fires only when released over the control it pressed.
                Swipe::None => pressed.filter(|p| Some(*p) == *control).map(Control::intent),
                Swipe::Next | Swipe::Previous => swipe.intent(),
            };

            tracing::debug!(swipe = ?swipe, pressed = ?pressed, released = ?control, intent = ?intent, "pointer released");

            match intent {
                Some(intent) => Ok(apply_intent(state, intent)),
                None => Ok((false, vec![])),
            }
        }
        Event::DeckFetched { status, body } => {
            if !state.is_loading() {
                tracing::debug!(status, "deck response arrived after loading finished");
                return Ok((false, vec![]));
            }

            if !(200..300).contains(status) {
                let source = state
                    .source
                    .as_ref()
                    .map_or_else(|| "deck server".to_string(), DeckLocation::describe);
                let message = format!("HTTP {status} from {source}");
                state.fail_load(message);
                return Ok((true, vec![]));
            }

            match parse_payload(body) {
                Ok(payload) => {
                    let (name, cards) = payload.into_parts();
                    state.install_deck(name, cards);
                }
                Err(e) => state.fail_load(e.to_string()),
            }

            Ok((true, vec![]))
        }
        Event::PermissionsResult { granted } => {
            if !state.is_loading() {
                return Ok((false, vec![]));
            }

            if !granted {
                state.fail_load("permissions denied: flashquiz needs file and web access to load a deck");
                return Ok((true, vec![]));
            }

            match &state.source {
                Some(DeckLocation::File(path)) => {
                    tracing::debug!(path = %path, "requesting deck from worker");
                    Ok((false, vec![Action::PostToWorker(WorkerMessage::load_deck(path.clone()))]))
                }
                Some(DeckLocation::Url(url)) => {
                    tracing::debug!(url = %url, "fetching deck");
                    Ok((false, vec![Action::FetchDeck { url: url.clone() }]))
                }
                None => {
                    state.fail_load("no deck configured: set deck_file, deck_url, or server_url and deck_id");
                    Ok((true, vec![]))
                }
            }
        }
        Event::WorkerResponse(response) => {
            if !state.is_loading() {
                tracing::debug!("worker response arrived after loading finished");
                return Ok((false, vec![]));
            }

            match response {
                WorkerResponse::DeckLoaded { name, cards } => {
                    state.install_deck(name.clone(), cards.clone());
                }
                WorkerResponse::Error { message } => {
                    tracing::error!("Worker error: {}", message);
                    state.fail_load(message.clone());
                }
            }

            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn apply_intent(state: &mut AppState, intent: Intent) -> (bool, Vec<Action>) {
    let Some(session) = state.session_mut() else {
        tracing::debug!(intent = ?intent, "no session, intent dropped");
        return (false, vec![]);
    };

    match session.apply(intent) {
        SessionOutcome::Ignored => (false, vec![]),
        SessionOutcome::Changed | SessionOutcome::Completed => (true, vec![]),
        SessionOutcome::TransitionStarted { first_phase } => {
            (true, vec![Action::ScheduleTimer(first_phase)])
        }
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Intent(_) => "intent",
        Event::PhaseElapsed => "phase_elapsed",
        Event::PointerDown { .. } => "pointer_down",
        Event::PointerUp { .. } => "pointer_up",
        Event::DeckFetched { .. } => "deck_fetched",
        Event::PermissionsResult { .. } => "permissions_result",
        Event::WorkerResponse(_) => "worker_response",
        Event::CloseFocus => "close_focus",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{FADE_IN, FADE_OUT};
    use crate::app::QuizSettings;
    use crate::domain::Card;
    use crate::ui::Theme;

    fn loading(source: Option<DeckLocation>) -> AppState {
        let settings = QuizSettings {
            shuffle: false,
            ..QuizSettings::default()
        };
        AppState::new(source, settings, Theme::default())
    }

    fn ready() -> AppState {
        let mut state = loading(None);
        state.install_deck(None, vec![Card::text("2+2?", "4"), Card::text("3+3?", "6")]);
        state
    }

    #[test]
    fn permissions_post_file_source_to_worker() {
        let mut state = loading(Some(DeckLocation::File("/host/decks/a.json".into())));

        let (render, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();

        assert!(!render);
        match actions.as_slice() {
            [Action::PostToWorker(WorkerMessage::LoadDeck { path, .. })] => {
                assert_eq!(path, "/host/decks/a.json");
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn permissions_fetch_url_source() {
        let mut state = loading(Some(DeckLocation::Url("http://quiz.local/deck/3/quiz_data/".into())));

        let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();

        assert_eq!(
            actions,
            vec![Action::FetchDeck {
                url: "http://quiz.local/deck/3/quiz_data/".into()
            }]
        );
    }

    #[test]
    fn missing_source_fails() {
        let mut state = loading(None);

        let (render, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();

        assert!(render);
        assert!(actions.is_empty());
        assert!(state.session().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn denied_permissions_fail() {
        let mut state = loading(Some(DeckLocation::File("/host/a.json".into())));

        handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();

        assert!(!state.is_loading());
        assert!(state.session().is_none());
    }

    #[test]
    fn fetched_deck_starts_session() {
        let mut state = loading(Some(DeckLocation::Url("http://quiz.local/deck/3/quiz_data/".into())));
        let body = br#"{"name":"Capitals","cards":[{"question":"France?","answer":"Paris"}]}"#.to_vec();

        let (render, _) = handle_event(&mut state, &Event::DeckFetched { status: 200, body }).unwrap();

        assert!(render);
        assert_eq!(state.deck_name.as_deref(), Some("Capitals"));
        assert_eq!(state.session().unwrap().deck().len(), 1);
    }

    #[test]
    fn http_error_fails_load() {
        let mut state = loading(Some(DeckLocation::Url("http://quiz.local/deck/9/quiz_data/".into())));

        handle_event(&mut state, &Event::DeckFetched { status: 404, body: vec![] }).unwrap();

        match &state.deck {
            crate::app::DeckStatus::Failed(message) => assert!(message.contains("404")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn malformed_body_fails_load() {
        let mut state = loading(Some(DeckLocation::Url("http://quiz.local/deck/1/quiz_data/".into())));

        handle_event(&mut state, &Event::DeckFetched { status: 200, body: b"<html>".to_vec() }).unwrap();

        assert!(matches!(state.deck, crate::app::DeckStatus::Failed(_)));
    }

    #[test]
    fn worker_error_fails_load() {
        let mut state = loading(Some(DeckLocation::File("/host/missing.json".into())));

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                message: "not found".into(),
            }),
        )
        .unwrap();

        assert!(matches!(&state.deck, crate::app::DeckStatus::Failed(m) if m == "not found"));
    }

    #[test]
    fn late_worker_response_is_ignored() {
        let mut state = ready();

        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::DeckLoaded {
                name: None,
                cards: vec![Card::text("other", "deck")],
            }),
        )
        .unwrap();

        assert!(!render);
        assert_eq!(state.session().unwrap().deck().len(), 2);
    }

    #[test]
    fn next_schedules_phase_timers() {
        let mut state = ready();

        let (render, actions) = handle_event(&mut state, &Event::Intent(Intent::Next)).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::ScheduleTimer(FADE_OUT)]);

        let (_, actions) = handle_event(&mut state, &Event::PhaseElapsed).unwrap();
        assert_eq!(actions, vec![Action::ScheduleTimer(FADE_IN)]);
        assert_eq!(state.session().unwrap().current_index(), 1);

        let (render, actions) = handle_event(&mut state, &Event::PhaseElapsed).unwrap();
        assert!(render);
        assert!(actions.is_empty());

        let (render, _) = handle_event(&mut state, &Event::PhaseElapsed).unwrap();
        assert!(!render);
    }

    #[test]
    fn intents_dropped_mid_transition() {
        let mut state = ready();
        handle_event(&mut state, &Event::Intent(Intent::Next)).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Intent(Intent::Previous)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());

        let (render, _) = handle_event(&mut state, &Event::Intent(Intent::Reveal)).unwrap();
        assert!(!render);
    }

    #[test]
    fn swipe_left_advances() {
        let mut state = ready();

        handle_event(&mut state, &Event::PointerDown { col: 60, control: None }).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::PointerUp { col: 40, control: None }).unwrap();

        assert_eq!(actions, vec![Action::ScheduleTimer(FADE_OUT)]);
    }

    #[test]
    fn short_drag_is_not_a_swipe() {
        let mut state = ready();

        handle_event(&mut state, &Event::PointerDown { col: 40, control: None }).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::PointerUp { col: 36, control: None }).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn click_on_control_applies_its_intent() {
        let mut state = ready();

        handle_event(&mut state, &Event::PointerDown { col: 30, control: Some(Control::Reveal) }).unwrap();
        let (render, _) = handle_event(
            &mut state,
            &Event::PointerUp { col: 30, control: Some(Control::Reveal) },
        )
        .unwrap();

        assert!(render);
        assert!(state.session().unwrap().revealed());
        assert_eq!(state.pressed_control, None);
    }

    #[test]
    fn release_off_pressed_control_does_nothing() {
        let mut state = ready();

        handle_event(&mut state, &Event::PointerDown { col: 60, control: Some(Control::Next) }).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::PointerUp { col: 52, control: None }).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.session().unwrap().current_index(), 0);
        assert_eq!(state.pressed_control, None);
    }

    #[test]
    fn release_on_other_control_does_nothing() {
        let mut state = ready();

        handle_event(&mut state, &Event::PointerDown { col: 60, control: Some(Control::Next) }).unwrap();
        let (render, actions) = handle_event(
            &mut state,
            &Event::PointerUp { col: 58, control: Some(Control::Reveal) },
        )
        .unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert!(!state.session().unwrap().revealed());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = ready();

        let (render, actions) = handle_event(&mut state, &Event::PointerUp { col: 10, control: None }).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn close_focus() {
        let mut state = ready();

        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();

        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
