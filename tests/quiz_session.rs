//! End-to-end quiz scenarios driven through `handle_event`, with timer expiry
//! delivered as `PhaseElapsed` events.

use flashquiz::app::DeckStatus;
use flashquiz::input::Intent;
use flashquiz::ui::{hit_test, Body, CardView, Control};
use flashquiz::worker::WorkerResponse;
use flashquiz::{
    handle_event, Action, AppState, Card, CompletionPolicy, Event, PresentationStyle,
    QuizSettings, Theme,
};

const ROWS: usize = 24;
const COLS: usize = 80;

fn settings(style: PresentationStyle, completion: CompletionPolicy) -> QuizSettings {
    QuizSettings {
        style,
        completion,
        shuffle: false,
        ..QuizSettings::default()
    }
}

fn start(settings: QuizSettings, cards: Vec<Card>) -> AppState {
    let mut state = AppState::new(None, settings, Theme::default());
    let (render, _) = handle_event(
        &mut state,
        &Event::WorkerResponse(WorkerResponse::DeckLoaded { name: None, cards }),
    )
    .unwrap();
    assert!(render);
    state
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

/// Delivers timer expiry until the running transition finishes.
fn run_timers(state: &mut AppState, mut actions: Vec<Action>) {
    while actions
        .iter()
        .any(|action| matches!(action, Action::ScheduleTimer(_)))
    {
        actions = send(state, Event::PhaseElapsed).1;
    }
}

fn view(state: &AppState) -> CardView {
    match state.compute_viewmodel(ROWS, COLS).body {
        Body::Card(view) => view,
        Body::Empty(empty) => panic!("expected a card, got {empty:?}"),
    }
}

fn index(state: &AppState) -> usize {
    state.session().unwrap().current_index()
}

#[test]
fn two_card_walkthrough() {
    let mut state = start(
        settings(PresentationStyle::Fade, CompletionPolicy::Disable),
        vec![Card::text("2+2?", "4"), Card::text("3+3?", "6")],
    );

    let initial = view(&state);
    assert_eq!(initial.question.as_deref(), Some("2+2?"));
    assert_eq!(initial.answer, None);
    assert!(!initial.controls.previous);
    assert!(initial.controls.next);

    send(&mut state, Event::Intent(Intent::Reveal));
    assert_eq!(view(&state).answer.as_deref(), Some("4"));

    let (_, actions) = send(&mut state, Event::Intent(Intent::Next));
    run_timers(&mut state, actions);

    let after = view(&state);
    assert_eq!(after.question.as_deref(), Some("3+3?"));
    assert_eq!(after.answer, None);
    assert!(!after.controls.next);
    assert!(after.controls.previous);
}

#[test]
fn single_card_deck_cannot_move() {
    let mut state = start(
        settings(PresentationStyle::Fade, CompletionPolicy::Disable),
        vec![Card::text("only", "one")],
    );

    let controls = view(&state).controls;
    assert!(!controls.previous);
    assert!(!controls.next);

    for intent in [Intent::Next, Intent::Previous] {
        let (render, actions) = send(&mut state, Event::Intent(intent));
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(index(&state), 0);
    }
}

#[test]
fn n_nexts_stop_at_last_card() {
    let cards: Vec<Card> = (0..5).map(|i| Card::text(format!("q{i}"), format!("a{i}"))).collect();
    let mut state = start(settings(PresentationStyle::Fade, CompletionPolicy::Disable), cards);

    for _ in 0..5 {
        let (_, actions) = send(&mut state, Event::Intent(Intent::Next));
        run_timers(&mut state, actions);
    }

    assert_eq!(index(&state), 4);

    let (render, actions) = send(&mut state, Event::Intent(Intent::Next));
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(index(&state), 4);
}

#[test]
fn second_intent_during_transition_is_dropped() {
    let mut state = start(
        settings(PresentationStyle::Fade, CompletionPolicy::Disable),
        vec![Card::text("a", "1"), Card::text("b", "2"), Card::text("c", "3")],
    );

    let (_, first) = send(&mut state, Event::Intent(Intent::Next));
    let (render, second) = send(&mut state, Event::Intent(Intent::Previous));
    assert!(!render);
    assert!(second.is_empty());

    run_timers(&mut state, first);
    assert_eq!(index(&state), 1);

    // The dropped intent is not replayed once the transition ends.
    let (render, _) = send(&mut state, Event::PhaseElapsed);
    assert!(!render);
    assert_eq!(index(&state), 1);
}

#[test]
fn flip_style_turns_and_resets_on_card_change() {
    let mut state = start(
        settings(PresentationStyle::Flip, CompletionPolicy::Disable),
        vec![Card::text("front", "back"), Card::text("second", "side")],
    );

    send(&mut state, Event::Intent(Intent::ToggleFlip));
    assert_eq!(view(&state).answer.as_deref(), Some("back"));

    send(&mut state, Event::Intent(Intent::ToggleFlip));
    send(&mut state, Event::Intent(Intent::ToggleFlip));
    assert!(state.session().unwrap().flipped());

    let (_, actions) = send(&mut state, Event::Intent(Intent::Next));
    run_timers(&mut state, actions);

    let after = view(&state);
    assert!(!state.session().unwrap().flipped());
    assert_eq!(after.question.as_deref(), Some("second"));
    assert_eq!(after.answer, None);
}

#[test]
fn notify_policy_reports_completion_once() {
    let mut state = start(
        settings(PresentationStyle::Fade, CompletionPolicy::Notify),
        vec![Card::text("last", "card")],
    );

    let (render, actions) = send(&mut state, Event::Intent(Intent::Next));
    assert!(render);
    assert!(actions.is_empty());
    assert!(view(&state).notice.is_some());

    let (render, _) = send(&mut state, Event::Intent(Intent::Next));
    assert!(!render);
}

#[test]
fn swipes_navigate_both_ways() {
    let mut state = start(
        settings(PresentationStyle::Fade, CompletionPolicy::Disable),
        vec![Card::text("a", "1"), Card::text("b", "2")],
    );

    send(&mut state, Event::PointerDown { col: 50, control: None });
    let (_, actions) = send(&mut state, Event::PointerUp { col: 30, control: None });
    run_timers(&mut state, actions);
    assert_eq!(index(&state), 1);

    send(&mut state, Event::PointerDown { col: 30, control: None });
    let (_, actions) = send(&mut state, Event::PointerUp { col: 50, control: None });
    run_timers(&mut state, actions);
    assert_eq!(index(&state), 0);
}

#[test]
fn clicking_drawn_next_button_advances() {
    let mut state = start(
        settings(PresentationStyle::Fade, CompletionPolicy::Disable),
        vec![Card::text("a", "1"), Card::text("b", "2")],
    );

    let line = isize::try_from(flashquiz::ui::components::controls::control_row(ROWS) - 1).unwrap();
    let (_, start_col, width) = flashquiz::ui::components::controls::layout(COLS)
        .into_iter()
        .find(|(control, _, _)| *control == Control::Next)
        .unwrap();
    let col = start_col - 1 + width / 2;

    let control = hit_test(line, col, ROWS, COLS);
    assert_eq!(control, Some(Control::Next));

    send(&mut state, Event::PointerDown { col, control });
    let (_, actions) = send(&mut state, Event::PointerUp { col, control });
    run_timers(&mut state, actions);

    assert_eq!(index(&state), 1);
}

#[test]
fn invalid_deck_never_starts_a_session() {
    let mut state = AppState::new(None, QuizSettings::default(), Theme::default());

    send(
        &mut state,
        Event::WorkerResponse(WorkerResponse::DeckLoaded {
            name: None,
            cards: vec![Card::default()],
        }),
    );

    assert!(matches!(state.deck, DeckStatus::Failed(_)));
    let (render, _) = send(&mut state, Event::Intent(Intent::Next));
    assert!(!render);
}

#[test]
fn seeded_shuffle_keeps_every_card() {
    let cards: Vec<Card> = (0..10).map(|i| Card::text(format!("q{i}"), format!("a{i}"))).collect();
    let mut state = AppState::new(None, QuizSettings::default(), Theme::default()).with_seed(42);
    state.install_deck(None, cards.clone());

    let mut shuffled: Vec<Card> = state.session().unwrap().deck().cards().to_vec();
    shuffled.sort_by(|a, b| a.question.cmp(&b.question));
    let mut expected = cards;
    expected.sort_by(|a, b| a.question.cmp(&b.question));

    assert_eq!(shuffled, expected);
}
