use crate::constants::{SEND_BUTTON_LABEL, SEND_BUTTON_WIDTH};
use crate::widget::ChatState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the message list, input line and send button. Returns the area of
/// the send button.
pub fn draw_chat(f: &mut Frame<'_>, area: Rect, state: &mut ChatState) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Messages
            Constraint::Length(3), // Input
        ])
        .split(area);

    draw_messages(f, chunks[0], state);

    let input_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SEND_BUTTON_WIDTH)])
        .split(chunks[1]);

    draw_input(f, input_chunks[0], state);
    draw_send_button(f, input_chunks[1]);

    input_chunks[1]
}

fn draw_messages(f: &mut Frame<'_>, area: Rect, state: &mut ChatState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Chat")
        .style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    state
        .messages
        .set_viewport(inner.width as usize, inner.height as usize);

    let scroll = u16::try_from(state.messages.scroll()).unwrap_or(u16::MAX);
    let messages = Paragraph::new(state.messages.render_lines()).scroll((scroll, 0));

    f.render_widget(block, area);
    f.render_widget(messages, inner);
}

fn draw_input(f: &mut Frame<'_>, area: Rect, state: &ChatState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Message")
        .style(Style::default().fg(Color::LightYellow));
    let inner = block.inner(area);

    let visible_width = inner.width.saturating_sub(1);
    let text_width = u16::try_from(state.input.width()).unwrap_or(u16::MAX);
    let scroll_offset = text_width.saturating_sub(visible_width);

    let input = Paragraph::new(state.input.value())
        .style(Style::default().fg(Color::White))
        .scroll((0, scroll_offset));

    f.render_widget(block, area);
    f.render_widget(input, inner);

    let cursor_x = inner.x + text_width.min(visible_width);
    f.set_cursor_position((cursor_x, inner.y));
}

fn draw_send_button(f: &mut Frame<'_>, area: Rect) {
    let button = Paragraph::new(SEND_BUTTON_LABEL)
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(button, area);
}
