//! Status bar widget: one-line calorie totals shown on every screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::CalorieSummary;

/// Renders the calorie totals.
///
/// Display format: `Consumed 550  Burned 400  Net +150`. Net is green when
/// at or below zero and yellow otherwise.
#[mutants::skip]
pub fn draw_status_bar(summary: &CalorieSummary, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let net = summary.net();
    let net_style = if net <= 0 {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let spans = vec![
        Span::styled(format!("Consumed {}", summary.consumed), cyan),
        Span::styled("  ", cyan),
        Span::styled(format!("Burned {}", summary.burned), cyan),
        Span::styled("  ", cyan),
        Span::styled(format!("Net {net:+}"), net_style),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
