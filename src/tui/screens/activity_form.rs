//! Activity form screen: create a new entry or edit the selected one.
//!
//! The draft [`Activity`] is the single source of truth. Every edit builds a
//! [`FieldChange`] from the raw input, replaces the draft with the changed
//! copy, then mirrors the draft back into the form widget.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::debug;

use crate::model::{
    Activity, ActivityAction, ActivityId, ActivityState, CATEGORIES, Category, Field, FieldChange,
    is_valid_activity,
};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::error::FormError;
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Keybindings listed on the help screen.
pub(crate) static KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("\u{2190} / \u{2192}", "change category"),
    ("Enter", "save activity (when name and calories are set)"),
    ("Esc", "activity list"),
    ("F1", "help"),
    ("Ctrl-C", "quit"),
];

/// Field index for the category selector.
const CATEGORY: usize = 0;
/// Field index for the activity name.
const NAME: usize = 1;
/// Field index for the calorie count.
const CALORIES: usize = 2;

/// Whether the draft is a new record or a copy of an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// State for the activity form screen.
#[derive(Debug, Clone)]
pub struct ActivityFormState {
    form: Form,
    draft: Activity,
    mode: FormMode,
    /// Last active id observed by [`sync`](Self::sync).
    seen_active_id: Option<ActivityId>,
    error: Option<String>,
}

impl Default for ActivityFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityFormState {
    /// Creates a form holding a fresh draft.
    pub fn new() -> Self {
        let options = CATEGORIES.iter().map(|c| c.name.to_string()).collect();
        let form = Form::new(vec![
            FormField::select("Category", options),
            FormField::new("Activity", true),
            FormField::new("Calories", true),
        ]);
        let mut state = Self {
            form,
            draft: Activity::draft(),
            mode: FormMode::Create,
            seen_active_id: None,
            error: None,
        };
        state.refresh_form();
        state
    }

    /// Returns the current draft.
    pub fn draft(&self) -> &Activity {
        &self.draft
    }

    /// Returns whether the form is creating or editing.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Returns a reference to the form widget for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sets an error message to display.
    pub fn set_error(&mut self, msg: String) {
        self.error = Some(msg);
    }

    /// Returns `true` if the draft may be submitted.
    pub fn is_valid(&self) -> bool {
        is_valid_activity(&self.draft)
    }

    /// Returns the label of the submit control for the draft's category.
    pub fn submit_label(&self) -> &'static str {
        self.draft.category.submit_label()
    }

    /// Coerces raw input for `field` and applies it to the draft.
    ///
    /// On a coercion error the draft is left unchanged.
    pub fn handle_change(&mut self, field: Field, raw: &str) -> Result<(), FormError> {
        let change = FieldChange::parse(field, raw)?;
        self.apply_change(change);
        Ok(())
    }

    /// Replaces exactly one field of the draft.
    pub fn apply_change(&mut self, change: FieldChange) {
        debug!(field = ?change.field(), "draft field changed");
        self.draft = self.draft.with_change(change);
        self.refresh_form();
    }

    /// Follows the externally selected activity.
    ///
    /// Only reacts when the active id differs from the last one observed, so
    /// in-progress edits survive unrelated state changes. When a new id is
    /// set, the draft becomes a copy of that activity. When the id is
    /// cleared, the draft is left alone unless the record it was copied
    /// from has been removed, in which case the form falls back to a fresh
    /// draft. An id that matches no activity is reported as
    /// [`FormError::UnknownActivity`] and the draft is kept.
    pub fn sync(&mut self, state: &ActivityState) -> Result<(), FormError> {
        if self.mode == FormMode::Edit && state.get(self.draft.id).is_none() {
            debug!(id = %self.draft.id, "edited activity was removed");
            self.reset_draft();
        }

        let active_id = state.active_id();
        if active_id == self.seen_active_id {
            return Ok(());
        }
        self.seen_active_id = active_id;

        let Some(id) = active_id else {
            return Ok(());
        };
        let activity = state.get(id).ok_or(FormError::UnknownActivity(id))?;
        debug!(%id, "loaded activity into draft");
        self.draft = activity.clone();
        self.mode = FormMode::Edit;
        self.error = None;
        self.refresh_form();
        Ok(())
    }

    /// Emits the draft for saving and starts over with a fresh draft.
    ///
    /// Does nothing while the draft is invalid.
    pub fn submit(&mut self) -> Action {
        if !self.is_valid() {
            return Action::None;
        }
        let new_activity = self.draft.clone();
        self.reset_draft();
        Action::Dispatch(ActivityAction::SaveActivity { new_activity })
    }

    /// Starts over with a fresh draft in create mode.
    fn reset_draft(&mut self) {
        self.draft = Activity::draft();
        self.mode = FormMode::Create;
        self.error = None;
        self.form.set_focus(CATEGORY);
        self.refresh_form();
    }

    /// Copies the draft's values into the form widget.
    fn refresh_form(&mut self) {
        self.form
            .set_value(CATEGORY, self.draft.category.display_name());
        self.form.set_value(NAME, self.draft.name.as_str());
        self.form
            .set_value(CALORIES, self.draft.calories.to_string());
    }

    /// Returns the model field behind the focused form field.
    fn focused_field(&self) -> Field {
        match self.form.focus() {
            CATEGORY => Field::Category,
            NAME => Field::Name,
            _ => Field::Calories,
        }
    }

    /// Steps the category selector through the option table, wrapping around.
    fn cycle_category(&mut self, forward: bool) {
        let all = Category::all();
        let pos = all
            .iter()
            .position(|&c| c == self.draft.category)
            .unwrap_or(0);
        let next = if forward {
            (pos + 1) % all.len()
        } else {
            (pos + all.len() - 1) % all.len()
        };
        let code = all[next].code().to_string();
        self.change_or_ignore(Field::Category, &code);
    }

    fn change_or_ignore(&mut self, field: Field, raw: &str) {
        if let Err(e) = self.handle_change(field, raw) {
            debug!(?field, error = %e, "rejected input");
        }
    }
}

impl ScreenState for ActivityFormState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        let field = self.focused_field();
        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Left | KeyCode::Right if field == Field::Category => {
                self.cycle_category(key.code == KeyCode::Right);
                Action::None
            }
            KeyCode::Backspace if field != Field::Category => {
                let raw = self.form.value_without_last_char();
                self.change_or_ignore(field, &raw);
                Action::None
            }
            KeyCode::Char(ch) if field == Field::Calories && !ch.is_ascii_digit() => Action::None,
            KeyCode::Char(ch) if field != Field::Category => {
                let raw = self.form.value_with_char(ch);
                self.change_or_ignore(field, &raw);
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Navigate(Screen::ActivityList),
            _ => Action::None,
        }
    }
}

/// Renders the activity form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_activity_form(state: &ActivityFormState, frame: &mut Frame, area: Rect) {
    let title = match state.mode() {
        FormMode::Create => " New Activity ",
        FormMode::Edit => " Edit Activity ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, submit_area, error_area, _, footer_area] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.form(), frame, form_area);

    // Submit control: dimmed while the draft is invalid
    let submit_style = if state.is_valid() {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    let submit = Paragraph::new(Line::from(Span::styled(
        state.submit_label().to_uppercase(),
        submit_style,
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(submit_style));
    frame.render_widget(submit, submit_area);

    if let Some(err) = state.error() {
        let err_paragraph = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
        frame.render_widget(err_paragraph, error_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab: next  \u{2190}/\u{2192}: category  Enter: save  Esc: activities  F1: help",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
