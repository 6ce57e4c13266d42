use crate::widget::ChatWidget;
use ratatui::layout::Rect;
use tokio::task::JoinHandle;

pub struct App {
    pub widget: ChatWidget,
    /// Where the send button was last drawn, for mouse hit-testing.
    pub send_button: Rect,
    pub in_flight: Vec<JoinHandle<()>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(widget: ChatWidget) -> App {
        App {
            widget,
            send_button: Rect::default(),
            in_flight: Vec::new(),
            should_quit: false,
        }
    }

    pub async fn submit(&mut self) {
        if let Some(handle) = self.widget.send_current_input().await {
            self.in_flight.push(handle);
        }
    }

    pub fn pending_replies(&self) -> usize {
        self.in_flight.iter().filter(|h| !h.is_finished()).count()
    }

    pub async fn on_tick(&mut self) {
        self.in_flight.retain(|h| !h.is_finished());
        self.widget.state().lock().await.messages.update_spinner();
    }

    pub async fn scroll_up(&mut self, lines: usize) {
        self.widget.state().lock().await.messages.scroll_up(lines);
    }

    pub async fn scroll_down(&mut self, lines: usize) {
        self.widget.state().lock().await.messages.scroll_down(lines);
    }

    pub async fn page_size(&self) -> usize {
        self.widget
            .state()
            .lock()
            .await
            .messages
            .viewport_height()
            .max(1)
    }
}
