use crate::constants::{BOT_PREFIX, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, USER_PREFIX};
use crate::models::{Message, Origin, TypingIndicator};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// Append-only list of messages plus the typing slot. Scroll is measured in
/// rendered lines and is pinned to the bottom after every insertion.
#[derive(Debug)]
pub struct MessageList {
    messages: Vec<Message>,
    typing: Option<TypingIndicator>,
    /// Wrapped line total of all messages at `viewport_width`.
    wrapped_height: usize,
    viewport_width: usize,
    viewport_height: usize,
    scroll: usize,
}

impl MessageList {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            typing: None,
            wrapped_height: 0,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            scroll: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: Message) {
        self.wrapped_height += wrap(&display_text(&message), self.wrap_width()).len();
        self.messages.push(message);
        self.scroll_to_bottom();
    }

    /// Returns false if an indicator was already showing.
    pub fn show_typing(&mut self) -> bool {
        if self.typing.is_some() {
            return false;
        }
        self.typing = Some(TypingIndicator::new());
        self.scroll_to_bottom();
        true
    }

    /// Returns false if there was nothing to hide.
    pub fn hide_typing(&mut self) -> bool {
        let removed = self.typing.take().is_some();
        if removed {
            self.scroll = self.scroll.min(self.max_scroll());
        }
        removed
    }

    pub fn typing(&self) -> Option<&TypingIndicator> {
        self.typing.as_ref()
    }

    pub fn is_typing(&self) -> bool {
        self.typing.is_some()
    }

    pub fn update_spinner(&mut self) {
        if let Some(typing) = self.typing.as_mut() {
            typing.update_spinner();
        }
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn max_scroll(&self) -> usize {
        self.content_height().saturating_sub(self.viewport_height)
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll >= self.max_scroll()
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Called by the host before drawing. A list that was following the
    /// bottom keeps following it after a resize.
    pub fn set_viewport(&mut self, width: usize, height: usize) {
        if width == self.viewport_width && height == self.viewport_height {
            return;
        }
        let follow = self.is_at_bottom();
        let rewrap = width != self.viewport_width;
        self.viewport_width = width;
        self.viewport_height = height;
        if rewrap {
            let wrap_width = self.wrap_width();
            self.wrapped_height = self
                .messages
                .iter()
                .map(|message| wrap(&display_text(message), wrap_width).len())
                .sum();
        }
        if follow {
            self.scroll_to_bottom();
        } else {
            self.scroll = self.scroll.min(self.max_scroll());
        }
    }

    /// Same as `render_lines().len()` without wrapping anything.
    pub fn content_height(&self) -> usize {
        let separators = self.messages.len().saturating_sub(1);
        let typing = match (&self.typing, self.messages.is_empty()) {
            (None, _) => 0,
            (Some(_), true) => 1,
            (Some(_), false) => 2,
        };
        self.wrapped_height + separators + typing
    }

    fn wrap_width(&self) -> usize {
        self.viewport_width.max(1)
    }

    /// Lines for the current viewport width: one wrapped block per message,
    /// separated by a blank line, with the typing indicator last.
    pub fn render_lines(&self) -> Vec<Line<'static>> {
        let width = self.wrap_width();
        let mut lines = Vec::new();

        for message in &self.messages {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            let style = match message.origin() {
                Origin::User => Style::default()
                    .fg(Color::Rgb(255, 223, 128))
                    .add_modifier(Modifier::BOLD),
                Origin::Bot => Style::default().fg(Color::Rgb(144, 238, 144)),
            };
            for wrapped_line in wrap(&display_text(message), width) {
                lines.push(Line::from(Span::styled(wrapped_line.into_owned(), style)));
            }
        }

        if let Some(typing) = &self.typing {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(vec![
                Span::styled(typing.spinner(), Style::default().fg(Color::Gray)),
                Span::raw(" "),
                Span::styled(
                    typing.label().to_string(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]));
        }

        lines
    }
}

fn display_text(message: &Message) -> String {
    let prefix = match message.origin() {
        Origin::User => USER_PREFIX,
        Origin::Bot => BOT_PREFIX,
    };
    format!("{}{}", prefix, message.text())
}

impl Default for MessageList {
    fn default() -> Self {
        Self::new()
    }
}
