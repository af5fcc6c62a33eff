//! Random prompt screen.

use crossterm::event::{KeyEvent, MouseEvent};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};
use tracing::{debug, warn};

use super::backend::{Action, PromptFetcher};
use crate::domain::entities::{BackgroundColor, Prompt};
use crate::infrastructure::config::UiConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::widgets::{BUTTON_HEIGHT, RoundedButton};

const KEY_HINT: &str = "Enter/n: next  q: quit";

impl From<BackgroundColor> for Color {
    fn from(color: BackgroundColor) -> Self {
        let (r, g, b) = color.channels();
        Self::Rgb(r, g, b)
    }
}

/// Colours and labels of the prompt screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptScreenStyle {
    pub next_label: String,
    pub button_text_color: Color,
    pub prompt_text_color: Color,
}

impl PromptScreenStyle {
    const DEFAULT_BUTTON_TEXT: Color = Color::Rgb(0x16, 0x16, 0x16);
    const DEFAULT_PROMPT_TEXT: Color = Color::White;

    /// Builds style from config, falling back per field on unparseable colours.
    #[must_use]
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            next_label: config.next_label.clone(),
            button_text_color: parse_color(&config.button_text_color, Self::DEFAULT_BUTTON_TEXT),
            prompt_text_color: parse_color(&config.prompt_text_color, Self::DEFAULT_PROMPT_TEXT),
        }
    }
}

impl Default for PromptScreenStyle {
    fn default() -> Self {
        Self {
            next_label: "Next".to_string(),
            button_text_color: Self::DEFAULT_BUTTON_TEXT,
            prompt_text_color: Self::DEFAULT_PROMPT_TEXT,
        }
    }
}

fn parse_color(value: &str, fallback: Color) -> Color {
    value.parse::<Color>().unwrap_or_else(|_| {
        warn!(value, "Unrecognised colour in config, using default");
        fallback
    })
}

/// Screen owning the current prompt and background colour.
pub struct PromptScreen {
    prompt: Prompt,
    background: BackgroundColor,
    mounted: bool,
    style: PromptScreenStyle,
    fetcher: PromptFetcher,
    rng: StdRng,
    button_area: Option<Rect>,
}

impl PromptScreen {
    #[must_use]
    pub fn new(fetcher: PromptFetcher, style: PromptScreenStyle, initial_prompt: Prompt) -> Self {
        Self {
            prompt: initial_prompt,
            background: BackgroundColor::INITIAL,
            mounted: false,
            style,
            fetcher,
            rng: StdRng::from_entropy(),
            button_area: None,
        }
    }

    /// Replaces the colour generator.
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub const fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    #[must_use]
    pub const fn background(&self) -> BackgroundColor {
        self.background
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// First appearance: randomizes the colour and fetches a prompt, once.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.randomize_color();
        self.fetch_prompt();
    }

    pub fn randomize_color(&mut self) {
        randomize(&mut self.background, &mut self.rng);
    }

    /// Fire-and-forget; the result comes back through [`apply_action`](Self::apply_action).
    pub fn fetch_prompt(&self) {
        self.fetcher.fetch();
    }

    /// Presses the next button: new colour, then a new fetch.
    pub fn press_next(&mut self) {
        let Self {
            style,
            background,
            rng,
            fetcher,
            ..
        } = self;

        let mut button = next_button(style).on_press(|| {
            randomize(background, rng);
            fetcher.fetch();
        });
        button.press();
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::PromptLoaded { request_id, prompt } => {
                debug!(request_id, title = %prompt, "Applying fetched prompt");
                self.prompt = prompt;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_next_event(&key) {
            self.press_next();
            return EventResult::Consumed;
        }
        EventResult::Continue
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        let position = Position::new(mouse.column, mouse.row);
        let on_button = self
            .button_area
            .is_some_and(|area| area.contains(position));

        if EventHandler::is_primary_click(&mouse) && on_button {
            self.press_next();
            return EventResult::Consumed;
        }
        EventResult::Continue
    }
}

fn randomize(background: &mut BackgroundColor, rng: &mut StdRng) {
    *background = BackgroundColor::random_with(rng);
    debug!(color = %background, "Background colour randomized");
}

fn next_button(style: &PromptScreenStyle) -> RoundedButton<'_> {
    RoundedButton::new(style.next_label.as_str()).text_color(style.button_text_color)
}

fn prompt_paragraph(prompt: &Prompt, color: Color) -> Paragraph<'_> {
    Paragraph::new(prompt.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// Rows `paragraph` occupies once wrapped at `width` columns.
fn wrapped_height(paragraph: &Paragraph<'_>, width: u16) -> u16 {
    u16::try_from(paragraph.line_count(width.max(1)))
        .unwrap_or(u16::MAX)
        .max(1)
}

impl Widget for &mut PromptScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let container = Block::new()
            .style(Style::default().bg(Color::from(self.background)))
            .padding(Padding::uniform(1));
        let inner = container.inner(area);
        container.render(area, buf);

        let [body, hint_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

        let prompt = prompt_paragraph(&self.prompt, self.style.prompt_text_color);
        let prompt_height = wrapped_height(&prompt, body.width);
        let [_, prompt_area, _, button_row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(prompt_height),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(body);

        prompt.render(prompt_area, buf);

        let button = next_button(&self.style);
        let [button_area] = Layout::horizontal([Constraint::Length(button.width())])
            .flex(Flex::Center)
            .areas(button_row);
        (&button).render(button_area, buf);
        self.button_area = Some(button_area);

        Paragraph::new(KEY_HINT)
            .style(
                Style::default()
                    .fg(self.style.prompt_text_color)
                    .add_modifier(Modifier::DIM),
            )
            .alignment(Alignment::Center)
            .render(hint_area, buf);
    }
}
