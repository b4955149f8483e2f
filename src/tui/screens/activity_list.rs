//! Activity list screen: table of recorded activities.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Row, Table};

use crate::model::{Activity, ActivityAction, Category};
use crate::tui::action::Action;
use crate::tui::app::Screen;

/// Keybindings listed on the help screen.
pub(crate) static KEYS: &[(&str, &str)] = &[
    ("\u{2191} / \u{2193}", "navigate"),
    ("Home / End", "first / last"),
    ("Enter", "edit activity"),
    ("d", "delete activity"),
    ("R", "restart (clear all activities)"),
    ("Esc", "back to form"),
    ("q", "quit"),
    ("F1", "help"),
];

/// State for the activity list screen.
#[derive(Debug, Clone)]
pub struct ActivityListState {
    /// Index of the currently highlighted row (0-based).
    selected: usize,
}

impl Default for ActivityListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityListState {
    /// Creates a new state with the cursor at the first row.
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent, activities: &[Activity]) -> Action {
        let count = activities.len();
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
                Action::None
            }
            KeyCode::Home => {
                self.selected = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected = count.saturating_sub(1);
                Action::None
            }
            KeyCode::Enter => match activities.get(self.selected) {
                Some(activity) => Action::DispatchAndNavigate(
                    ActivityAction::SetActiveId { id: activity.id },
                    Screen::ActivityForm,
                ),
                None => Action::None,
            },
            KeyCode::Char('d') => match activities.get(self.selected) {
                Some(activity) => {
                    // Keep the cursor on a real row once this one is gone.
                    self.selected = self.selected.min(count.saturating_sub(2));
                    Action::Dispatch(ActivityAction::DeleteActivity { id: activity.id })
                }
                None => Action::None,
            },
            KeyCode::Char('R') => {
                if count == 0 {
                    return Action::None;
                }
                self.selected = 0;
                Action::Dispatch(ActivityAction::RestartApp)
            }
            KeyCode::Esc => Action::Navigate(Screen::ActivityForm),
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    /// Returns the currently selected row index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Sets the selected row index.
    pub fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }
}

/// Renders the activity list screen.
#[mutants::skip]
pub fn draw_activity_list(
    state: &ActivityListState,
    activities: &[Activity],
    frame: &mut Frame,
    area: Rect,
) {
    let [title_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let title = Paragraph::new(Line::from(format!(
        "Activities ({})",
        activities.len()
    )))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, title_area);

    if activities.is_empty() {
        let empty = Paragraph::new("No activities yet").alignment(Alignment::Center);
        frame.render_widget(empty, table_area);
    } else {
        let header = Row::new(vec!["Category", "Activity", "Calories"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows: Vec<Row> = activities
            .iter()
            .enumerate()
            .map(|(i, activity)| {
                let style = if i == state.selected() {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else {
                    match activity.category {
                        Category::Food => Style::default().fg(Color::Green),
                        Category::Exercise => Style::default().fg(Color::Magenta),
                    }
                };
                Row::new(vec![
                    activity.category.to_string(),
                    activity.name.clone(),
                    activity.calories.to_string(),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(10),
            Constraint::Min(10),
            Constraint::Length(9),
        ];

        let table = Table::new(rows, widths).header(header);
        frame.render_widget(table, table_area);
    }

    let footer = Paragraph::new("↑↓: navigate  Enter: edit  d: delete  R: restart  Esc: form  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
