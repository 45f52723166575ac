//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It holds the deck loading status, the running [`QuizSession`] once the deck
//! is ready, and the transient pointer state used for clicks and swipes.
//!
//! # State Components
//!
//! - **Deck status**: loading, ready (with a session), or failed
//! - **Source**: where the deck comes from (a file read by the worker or a URL)
//! - **Settings**: presentation style, completion policy, shuffle
//! - **Pointer**: gesture recognizer plus the control pressed at mouse down
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method is a pure projection of the session into a
//! renderable [`QuizViewModel`]. It never changes the index or the reveal and
//! flip flags.
//!
//! # Example
//!
//! ```rust
//! use flashquiz::app::{AppState, QuizSettings};
//! use flashquiz::domain::Card;
//! use flashquiz::ui::{Body, Theme};
//!
//! let mut state = AppState::new(None, QuizSettings::default(), Theme::default()).with_seed(7);
//! state.install_deck(None, vec![Card::text("2+2?", "4")]);
//!
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(matches!(viewmodel.body, Body::Card(_)));
//! ```

use super::modes::{CompletionPolicy, PresentationStyle, SessionPhase};
use super::session::QuizSession;
use crate::animation::{Direction, PhaseKind};
use crate::domain::{Card, Deck};
use crate::infrastructure::strip_host_prefix;
use crate::input::{GestureRecognizer, DEFAULT_MIN_DISTANCE};
use crate::ui::components::controls::Control;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Appearance, Body, CardView, ControlStates, EmptyState, Face, FooterInfo, HeaderInfo,
    QuizViewModel,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Title shown for decks without a name.
pub const DEFAULT_TITLE: &str = "Flashquiz";

/// Banner shown after finishing the deck under the notify policy.
pub const COMPLETION_NOTICE: &str = "Quiz completed!";

/// Columns the card moves while fading between cards.
const SLIDE_SHIFT: isize = 4;

const MIN_ROWS: usize = 12;
const MIN_COLS: usize = 30;

/// Narrower panes get the short footer.
const COMPACT_COLS: usize = 72;

/// Where the deck is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckLocation {
    /// A JSON file read by the worker. Sandbox path under `/host`.
    File(String),
    /// A JSON document fetched over HTTP.
    Url(String),
}

impl DeckLocation {
    /// Human readable location for loading and error messages.
    ///
    /// Sandbox paths are shown relative to `~`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => strip_host_prefix(path),
            Self::Url(url) => url.clone(),
        }
    }
}

/// Deck loading status.
#[derive(Debug, Clone)]
pub enum DeckStatus {
    /// Waiting for permissions, the worker, or the HTTP response.
    Loading,
    /// The deck is loaded and a session is running.
    Ready(QuizSession),
    /// The deck could not be loaded. No session exists.
    Failed(String),
}

/// Quiz behaviour chosen by configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizSettings {
    pub style: PresentationStyle,
    pub completion: CompletionPolicy,
    pub shuffle: bool,
    /// Minimum horizontal travel, in gesture units, for a swipe.
    pub swipe_threshold: f64,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            style: PresentationStyle::default(),
            completion: CompletionPolicy::default(),
            shuffle: true,
            swipe_threshold: DEFAULT_MIN_DISTANCE,
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub deck: DeckStatus,

    /// Deck title from the payload, if any.
    pub deck_name: Option<String>,

    /// `None` when nothing was configured; loading then fails once
    /// permissions are granted.
    pub source: Option<DeckLocation>,

    pub settings: QuizSettings,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Tracks an in-progress click-drag.
    pub gesture: GestureRecognizer,

    /// Control under the pointer at mouse down, if any.
    pub pressed_control: Option<Control>,

    rng: StdRng,
}

impl AppState {
    /// Creates a state waiting for its deck.
    #[must_use]
    pub fn new(source: Option<DeckLocation>, settings: QuizSettings, theme: Theme) -> Self {
        Self {
            deck: DeckStatus::Loading,
            deck_name: None,
            source,
            gesture: GestureRecognizer::new(settings.swipe_threshold),
            settings,
            theme,
            pressed_control: None,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Replaces the shuffle source with a seeded one for reproducible order.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The running session, once the deck is ready.
    #[must_use]
    pub const fn session(&self) -> Option<&QuizSession> {
        match &self.deck {
            DeckStatus::Ready(session) => Some(session),
            DeckStatus::Loading | DeckStatus::Failed(_) => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        match &mut self.deck {
            DeckStatus::Ready(session) => Some(session),
            DeckStatus::Loading | DeckStatus::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.deck, DeckStatus::Loading)
    }

    /// Validates raw cards and starts a session, or records the failure.
    ///
    /// Cards are shuffled once here when shuffling is enabled; the order is
    /// fixed for the rest of the session.
    pub fn install_deck(&mut self, name: Option<String>, cards: Vec<Card>) {
        let _span = tracing::debug_span!("install_deck", raw_count = cards.len()).entered();

        match Deck::load(cards) {
            Ok(deck) => {
                let deck = if self.settings.shuffle {
                    deck.shuffle(&mut self.rng)
                } else {
                    deck
                };
                tracing::info!(card_count = deck.len(), name = ?name, "deck ready");

                self.deck_name = name;
                self.deck = DeckStatus::Ready(QuizSession::new(
                    deck,
                    self.settings.style,
                    self.settings.completion,
                ));
            }
            Err(e) => self.fail_load(e.to_string()),
        }
    }

    /// Puts the app into the failed state.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "deck load failed");
        self.deck = DeckStatus::Failed(message);
    }

    /// Computes a view model for rendering the UI.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in rows
    /// * `cols` - Terminal width in columns
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> QuizViewModel {
        let header = self.header();
        let footer = self.footer(cols);

        if rows < MIN_ROWS || cols < MIN_COLS {
            return QuizViewModel {
                header,
                body: Body::Empty(EmptyState {
                    message: "Pane too small".to_string(),
                    subtitle: format!("resize to at least {MIN_COLS}x{MIN_ROWS}"),
                    is_error: false,
                }),
                footer,
            };
        }

        let body = match &self.deck {
            DeckStatus::Ready(session) => Body::Card(self.card_view(session)),
            DeckStatus::Loading => Body::Empty(EmptyState {
                message: "Loading deck…".to_string(),
                subtitle: self
                    .source
                    .as_ref()
                    .map_or_else(String::new, DeckLocation::describe),
                is_error: false,
            }),
            DeckStatus::Failed(message) => Body::Empty(EmptyState {
                message: "Could not load deck".to_string(),
                subtitle: message.clone(),
                is_error: true,
            }),
        };

        QuizViewModel { header, body, footer }
    }

    fn header(&self) -> HeaderInfo {
        HeaderInfo {
            title: self
                .deck_name
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            progress: self.session().map(|session| {
                format!("Card {} / {}", session.current_index() + 1, session.deck().len())
            }),
        }
    }

    fn footer(&self, cols: usize) -> FooterInfo {
        let compact = cols < COMPACT_COLS;
        let keybindings = match self.session().map(QuizSession::style) {
            None => "q quit",
            Some(PresentationStyle::Fade) if compact => "h/l move · space reveal · q quit",
            Some(PresentationStyle::Fade) => {
                "h/← previous · l/→ next · space reveal · drag to swipe · q quit"
            }
            Some(PresentationStyle::Flip) if compact => "h/l move · space reveal · f flip · q quit",
            Some(PresentationStyle::Flip) => {
                "h/← previous · l/→ next · space reveal · f flip · drag to swipe · q quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn card_view(&self, session: &QuizSession) -> CardView {
        let card = session.current_card();

        let (face, show_question, show_answer) = match session.style() {
            PresentationStyle::Fade => (None, true, session.revealed()),
            PresentationStyle::Flip if session.flipped() => (Some(Face::Back), false, true),
            PresentationStyle::Flip => (Some(Face::Front), true, session.revealed()),
        };

        let has_answer = card.answer.is_some() || card.answer_image.is_some();
        let answer_hidden = has_answer && !show_answer;

        let (appearance, shift) = session
            .current_transition()
            .map_or((Appearance::Solid, 0), |(direction, phase)| {
                let sign = match direction {
                    Direction::Forward => 1,
                    Direction::Backward => -1,
                };
                match phase.kind {
                    PhaseKind::FadeOut => (Appearance::Faded, -SLIDE_SHIFT * sign),
                    PhaseKind::FadeIn => (Appearance::Faded, SLIDE_SHIFT * sign),
                    PhaseKind::HalfFlipIn => (Appearance::Faded, 0),
                    PhaseKind::Unflip | PhaseKind::HalfFlipOut => (Appearance::EdgeOn, 0),
                }
            });

        let idle = session.phase() == SessionPhase::Idle;
        let enablement = session.button_enablement();
        let finish_available = self.settings.completion == CompletionPolicy::Notify
            && !enablement.next
            && !session.completed();

        CardView {
            question: card.question.clone().filter(|_| show_question),
            question_image: card.question_image.clone().filter(|_| show_question),
            answer: card.answer.clone().filter(|_| show_answer),
            answer_image: card.answer_image.clone().filter(|_| show_answer),
            answer_hidden,
            face,
            appearance,
            shift,
            controls: ControlStates {
                previous: enablement.previous,
                reveal: idle && answer_hidden && !session.revealed(),
                flip: idle && session.style() == PresentationStyle::Flip,
                next: enablement.next || finish_available,
            },
            notice: session.completed().then(|| COMPLETION_NOTICE.to_string()),
        }
    }
}
