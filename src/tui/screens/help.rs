//! Key reference for the screen that opened help.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

use super::{activity_form, activity_list};

/// Remembers which screen to go back to.
#[derive(Debug, Clone, Default)]
pub struct HelpState {
    origin: Screen,
}

impl HelpState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(&self) -> Screen {
        self.origin
    }

    pub fn set_origin(&mut self, screen: Screen) {
        self.origin = screen;
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(self.origin),
            _ => Action::None,
        }
    }
}

/// Key table shown for `origin`.
fn keys_for(origin: Screen) -> &'static [(&'static str, &'static str)] {
    match origin {
        Screen::ActivityList => activity_list::KEYS,
        Screen::ActivityForm | Screen::Help => activity_form::KEYS,
    }
}

#[mutants::skip]
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" Help: {} ", state.origin().label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let lines: Vec<Line> = keys_for(state.origin())
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {key:<18}"), Style::default().fg(Color::Yellow)),
                Span::raw(*desc),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), content_area);

    let footer = Paragraph::new("q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
