//! View model types representing renderable UI state.
//!
//! View models are produced by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no logic, only display-ready data: which of the
//! six card regions are showing, which controls are usable, and how the
//! current transition phase should look.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizViewModel {
    pub header: HeaderInfo,
    pub body: Body,
    pub footer: FooterInfo,
}

/// Main area of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// A quiz session is running.
    Card(CardView),
    /// No session: still loading, or the deck could not be loaded.
    Empty(EmptyState),
}

/// The current card and its controls.
///
/// A region is `Some` only when it is both present on the card and visible
/// in the current presentation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub question: Option<String>,
    pub question_image: Option<String>,
    pub answer: Option<String>,
    pub answer_image: Option<String>,

    /// The card has an answer that is not shown yet.
    pub answer_hidden: bool,

    /// Visible face in the flip style, `None` in the fade style.
    pub face: Option<Face>,

    pub appearance: Appearance,

    /// Horizontal offset in columns while sliding.
    pub shift: isize,

    /// Positional enablement, except that under the notify completion policy
    /// `next` stays enabled on the last card until completion is reported.
    pub controls: ControlStates,

    /// Banner text, e.g. after finishing the deck.
    pub notice: Option<String>,
}

/// Side of a two-sided card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

/// How the card is drawn during the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    /// At rest.
    Solid,
    /// Fading out or in.
    Faded,
    /// Turned edge-on halfway through a flip.
    EdgeOn,
}

/// Whether each control can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlStates {
    pub previous: bool,
    pub reveal: bool,
    pub flip: bool,
    pub next: bool,
}

/// Header bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Deck name, or the plugin name for unnamed decks.
    pub title: String,

    /// Progress such as `"Card 2 / 5"`, absent without a session.
    pub progress: Option<String>,
}

/// Footer help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown instead of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    pub is_error: bool,
}
