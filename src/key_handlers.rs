use crate::App;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

pub async fn handle_event(event: Event, app: &mut App) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, app).await,
        Event::Mouse(mouse) => handle_mouse(mouse, app).await,
        _ => {}
    }
}

async fn handle_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        KeyCode::Enter => app.submit().await,
        KeyCode::Backspace => app.widget.state().lock().await.input.backspace(),
        KeyCode::Up => app.scroll_up(1).await,
        KeyCode::Down => app.scroll_down(1).await,
        KeyCode::PageUp => {
            let page = app.page_size().await;
            app.scroll_up(page).await;
        }
        KeyCode::PageDown => {
            let page = app.page_size().await;
            app.scroll_down(page).await;
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.widget.state().lock().await.input.push(c)
        }
        _ => {}
    }
}

async fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app
                .send_button
                .contains(Position::new(mouse.column, mouse.row))
            {
                app.submit().await;
            }
        }
        MouseEventKind::ScrollUp => app.scroll_up(1).await,
        MouseEventKind::ScrollDown => app.scroll_down(1).await,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::ChatClient, input::InputField, message_list::MessageList, models::Origin,
        widget::ChatWidget,
    };
    use ratatui::layout::Rect;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn app_for(server: &MockServer) -> App {
        App::new(ChatWidget::new(
            MessageList::new(),
            InputField::new(),
            ChatClient::new(format!("{}/chat", server.uri())),
        ))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(key(KeyCode::Char(c)), app).await;
        }
    }

    async fn wait_for_replies(app: &mut App) {
        for handle in app.in_flight.drain(..) {
            handle.await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_enter_sends_trimmed_input() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(json!({ "message": "hi" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "Hello!" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut app = app_for(&mock_server);
        type_text(&mut app, "  hi  ").await;
        handle_event(key(KeyCode::Enter), &mut app).await;

        {
            let state = app.widget.state().lock().await;
            assert_eq!(state.messages.len(), 1);
            assert_eq!(state.messages.messages()[0].text(), "hi");
            assert_eq!(state.input.value(), "");
        }

        wait_for_replies(&mut app).await;

        let state = app.widget.state().lock().await;
        let reply = &state.messages.messages()[1];
        assert_eq!(reply.text(), "Hello!");
        assert_eq!(reply.origin(), Origin::Bot);
    }

    #[tokio::test]
    async fn test_enter_on_blank_input_does_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "x" })))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut app = app_for(&mock_server);
        type_text(&mut app, "   ").await;
        handle_event(key(KeyCode::Enter), &mut app).await;

        assert!(app.in_flight.is_empty());
        assert!(app.widget.state().lock().await.messages.is_empty());
    }

    #[tokio::test]
    async fn test_click_on_send_button() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({ "message": "clicked" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut app = app_for(&mock_server);
        app.send_button = Rect::new(70, 20, 10, 3);
        type_text(&mut app, "clicked").await;

        handle_event(click(5, 21), &mut app).await;
        assert!(app.in_flight.is_empty());

        handle_event(click(72, 21), &mut app).await;
        assert_eq!(app.in_flight.len(), 1);
        wait_for_replies(&mut app).await;

        assert_eq!(app.widget.state().lock().await.messages.len(), 2);
    }

    #[tokio::test]
    async fn test_backspace_and_quit_keys() {
        let mock_server = MockServer::start().await;
        let mut app = app_for(&mock_server);

        type_text(&mut app, "hey").await;
        handle_event(key(KeyCode::Backspace), &mut app).await;
        assert_eq!(app.widget.state().lock().await.input.value(), "he");

        handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            &mut app,
        )
        .await;
        assert!(app.should_quit);
        assert_eq!(app.widget.state().lock().await.input.value(), "he");

        let mut app = app_for(&mock_server);
        handle_event(key(KeyCode::Esc), &mut app).await;
        assert!(app.should_quit);
    }
}
