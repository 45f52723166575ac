//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → QuizViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor and text fitting utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use components::controls::{hit_test, Control};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Appearance, Body, CardView, ControlStates, EmptyState, Face, FooterInfo, HeaderInfo,
    QuizViewModel,
};
