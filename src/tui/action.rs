//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use crate::model::ActivityAction;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update the activity list and navigate
/// between screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Hand an action to the activity list owner.
    Dispatch(ActivityAction),
    /// Dispatch, then navigate.
    DispatchAndNavigate(ActivityAction, Screen),
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
