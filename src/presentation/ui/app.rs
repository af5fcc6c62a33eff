//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::backend::{Action, PromptFetcher};
use super::prompt_screen::{PromptScreen, PromptScreenStyle};
use crate::application::use_cases::FetchPromptUseCase;
use crate::domain::entities::Prompt;
use crate::domain::ports::PromptSourcePort;
use crate::presentation::events::{EventHandler, EventResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

pub struct App {
    state: AppState,
    screen: PromptScreen,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    #[must_use]
    pub fn new(
        prompt_source: Arc<dyn PromptSourcePort>,
        style: PromptScreenStyle,
        initial_prompt: Prompt,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let fetcher = PromptFetcher::new(FetchPromptUseCase::new(prompt_source), action_tx);

        Self {
            state: AppState::Running,
            screen: PromptScreen::new(fetcher, style, initial_prompt),
            action_rx,
        }
    }

    /// Mounts the screen and runs until a quit key is pressed.
    ///
    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.screen.mount();

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                else => break,
            }
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        self.screen.apply_action(action);
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.handle_key(key),
            Event::Mouse(mouse) => self.screen.handle_mouse(mouse),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                EventResult::Continue
            }
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }
        self.screen.handle_key(key)
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_widget(&mut self.screen, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockPromptSource;
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

    fn make_app(source: &Arc<MockPromptSource>) -> App {
        App::new(source.clone(), PromptScreenStyle::default(), Prompt::default())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_key_exits() {
        let source = Arc::new(MockPromptSource::new());
        let mut app = make_app(&source);

        assert_eq!(
            app.handle_terminal_event(key(KeyCode::Char('q'))),
            EventResult::Exit
        );
        assert_eq!(app.handle_terminal_event(key(KeyCode::Esc)), EventResult::Exit);
        assert_eq!(source.calls(), 0);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let source = Arc::new(MockPromptSource::new());
        let mut app = make_app(&source);
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));

        assert_eq!(app.handle_terminal_event(release), EventResult::Continue);
        assert_eq!(app.handle_terminal_event(Event::Resize(80, 24)), EventResult::Continue);
    }

    #[tokio::test]
    async fn test_next_key_updates_prompt_through_action_channel() {
        let source = Arc::new(MockPromptSource::new());
        source.push_title("Some text");
        let mut app = make_app(&source);

        assert_eq!(app.screen.prompt().as_str(), "Hello!");
        assert_eq!(
            app.handle_terminal_event(key(KeyCode::Enter)),
            EventResult::Consumed
        );

        let action = app.action_rx.recv().await.unwrap();
        app.handle_action(action);

        assert_eq!(app.screen.prompt().as_str(), "Some text");
        assert_eq!(source.calls(), 1);
    }
}
