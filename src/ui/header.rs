use crate::constants::APP_TITLE;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_header(f: &mut Frame<'_>, area: Rect, endpoint: &str) {
    let title = Line::from(vec![
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            endpoint.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);

    f.render_widget(Paragraph::new(title).alignment(Alignment::Left), area);
}
