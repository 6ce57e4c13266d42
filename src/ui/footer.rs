use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Draws the footer with key hints and the number of outstanding replies.
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, pending_replies: usize) {
    let mut instructions =
        "Enter or click [ Send ] to send · PgUp/PgDn to scroll · Esc to quit".to_string();
    if pending_replies > 0 {
        let noun = if pending_replies == 1 { "reply" } else { "replies" };
        instructions.push_str(&format!(" · waiting on {} {}", pending_replies, noun));
    }

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center);

    f.render_widget(footer, area);
}
