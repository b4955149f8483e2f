//! Reusable form widget: labelled inputs with focus management.
//!
//! The form only mirrors values; screens own the underlying record and push
//! fresh values in with [`Form::set_value`] after every change.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown in the field's border.
    pub label: String,
    /// Current text value. For selectors, the label of the chosen option.
    pub value: String,
    /// Fixed choices for a selector field; empty for free-text fields.
    pub options: Vec<String>,
    /// Whether the field must be filled in before submitting.
    pub required: bool,
}

impl FormField {
    /// Creates a free-text field.
    pub fn new(label: impl Into<String>, required: bool) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            options: Vec::new(),
            required,
        }
    }

    /// Creates a selector field over a fixed list of options.
    pub fn select(label: impl Into<String>, options: Vec<String>) -> Self {
        let value = options.first().cloned().unwrap_or_default();
        Self {
            label: label.into(),
            value,
            options,
            required: false,
        }
    }

    /// Returns `true` if this field picks from fixed options.
    pub fn is_select(&self) -> bool {
        !self.options.is_empty()
    }
}

/// A multi-field form with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the field at `index`; out-of-range indices are ignored.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Replaces the value of the field at `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Returns the focused field's value with `ch` appended.
    pub fn value_with_char(&self, ch: char) -> String {
        let mut raw = self.value(self.focus).to_string();
        raw.push(ch);
        raw
    }

    /// Returns the focused field's value with its last character removed.
    pub fn value_without_last_char(&self) -> String {
        let mut raw = self.value(self.focus).to_string();
        raw.pop();
        raw
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Renders a form within the given area, one bordered row per field.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(row_height))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus;

        let border_color = if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let line = if field.is_select() {
            select_line(field, is_focused)
        } else {
            let mut spans = vec![Span::raw(field.value.as_str())];
            if is_focused {
                spans.push(Span::styled(
                    "\u{2588}",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        frame.render_widget(Paragraph::new(line).block(block), rows[i]);
    }
}

/// Lays out every option on one line, highlighting the chosen one.
fn select_line(field: &FormField, is_focused: bool) -> Line<'_> {
    let mut spans = Vec::new();
    if is_focused {
        spans.push(Span::styled("\u{25c0} ", Style::default().fg(Color::Yellow)));
    }
    for (i, option) in field.options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *option == field.value {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(option.as_str(), style));
    }
    if is_focused {
        spans.push(Span::styled(" \u{25b6}", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}
