use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tracing::{debug, warn};

use crate::model::{ActivityAction, ActivityState, CalorieSummary};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    ActivityFormState, ActivityListState, HelpState, draw_activity_form, draw_activity_list,
    draw_help,
};
use super::widgets::draw_status_bar;

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Create or edit an activity.
    #[default]
    ActivityForm,
    /// Browse, select and delete recorded activities.
    ActivityList,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable screen name.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::ActivityForm => "Activity Form",
            Self::ActivityList => "Activity List",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
///
/// Owns the activity list and applies every [`ActivityAction`] the screens
/// emit, then lets the form follow the resulting active id.
pub struct App {
    screen: Screen,
    state: ActivityState,
    form: ActivityFormState,
    list: ActivityListState,
    help: HelpState,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` with an empty activity list, starting on the form.
    pub fn new() -> Self {
        Self {
            screen: Screen::ActivityForm,
            state: ActivityState::new(),
            form: ActivityFormState::new(),
            list: ActivityListState::new(),
            help: HelpState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the status bar and the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [status_area, screen_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        let summary = CalorieSummary::from_activities(self.state.activities());
        draw_status_bar(&summary, frame, status_area);

        match self.screen {
            Screen::ActivityForm => draw_activity_form(&self.form, frame, screen_area),
            Screen::ActivityList => {
                draw_activity_list(&self.list, self.state.activities(), frame, screen_area)
            }
            Screen::Help => draw_help(&self.help, frame, screen_area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.set_origin(self.screen);
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::ActivityForm => self.form.handle_key(key),
            Screen::ActivityList => self.list.handle_key(key, self.state.activities()),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply_action(action);
    }

    /// Applies an [`Action`] returned by a screen handler.
    fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen),
            Action::Dispatch(activity_action) => self.dispatch(activity_action),
            Action::DispatchAndNavigate(activity_action, screen) => {
                self.dispatch(activity_action);
                self.navigate(screen);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn navigate(&mut self, screen: Screen) {
        debug!(from = ?self.screen, to = ?screen, "navigate");
        self.screen = screen;
    }

    /// Hands an action to the activity list and re-syncs the form.
    pub fn dispatch(&mut self, action: ActivityAction) {
        self.state.dispatch(action);
        if let Err(e) = self.form.sync(&self.state) {
            warn!(error = %e, "form could not follow active activity");
            self.form.set_error(e.to_string());
        }
        let count = self.state.activities().len();
        if self.list.selected() >= count {
            self.list.set_selected(count.saturating_sub(1));
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the activity list.
    pub fn state(&self) -> &ActivityState {
        &self.state
    }

    /// Returns the form screen state.
    pub fn form(&self) -> &ActivityFormState {
        &self.form
    }
}
