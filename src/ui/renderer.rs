//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `QuizViewModel`
//! 2. **Component Rendering**: the view model is handed to the components for
//!    the active body (card or empty state)

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, QuizViewModel};

/// Renders the plugin UI to stdout.
///
/// Owns no state: everything drawn comes from `state` through the view model.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a pre-computed view model.
pub fn render_viewmodel(vm: &QuizViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        Body::Card(view) => components::render_quiz_mode(vm, view, theme, cols, rows),
        Body::Empty(empty) => components::render_empty_mode(vm, empty, theme, cols, rows),
    }
}
