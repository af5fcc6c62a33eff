//! Rounded button widget.

use std::borrow::Cow;
use std::fmt;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const DEFAULT_TEXT_COLOR: Color = Color::White;
const BORDER_COLOR: Color = Color::White;
const HORIZONTAL_PADDING: u16 = 2;

/// Height of a rendered button, borders included.
pub const BUTTON_HEIGHT: u16 = 3;

/// Pressable label with a rounded border.
///
/// Holds no state of its own: build one per frame from its properties and
/// either render it or [`press`](Self::press) it.
pub struct RoundedButton<'a> {
    text: Cow<'a, str>,
    icon: Option<Span<'a>>,
    text_color: Option<Color>,
    background_color: Option<Color>,
    on_press: Option<Box<dyn FnMut() + 'a>>,
}

impl<'a> RoundedButton<'a> {
    /// Creates button with a label and every other property unset.
    #[must_use]
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            text: text.into(),
            icon: None,
            text_color: None,
            background_color: None,
            on_press: None,
        }
    }

    /// Sets icon rendered before the label.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<Span<'a>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets label colour. Defaults to white.
    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Sets fill colour. Defaults to transparent.
    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets handler invoked on press.
    #[must_use]
    pub fn on_press(mut self, handler: impl FnMut() + 'a) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    /// Returns label.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns effective label colour.
    #[must_use]
    pub fn effective_text_color(&self) -> Color {
        self.text_color.unwrap_or(DEFAULT_TEXT_COLOR)
    }

    /// Returns fill colour; `None` leaves whatever is underneath visible.
    #[must_use]
    pub const fn effective_background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// Returns whether a press handler is attached.
    #[must_use]
    pub fn has_handler(&self) -> bool {
        self.on_press.is_some()
    }

    /// Invokes the press handler. Without one this does nothing.
    pub fn press(&mut self) {
        if let Some(handler) = self.on_press.as_mut() {
            handler();
        }
    }

    /// Width needed to draw the whole label, borders included.
    #[must_use]
    pub fn width(&self) -> u16 {
        let icon_width = self.icon.as_ref().map_or(0, |icon| icon.width() + 1);
        let content = icon_width + self.text.width();
        u16::try_from(content)
            .unwrap_or(u16::MAX)
            .saturating_add(2 * HORIZONTAL_PADDING + 2)
    }
}

impl fmt::Debug for RoundedButton<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundedButton")
            .field("text", &self.text)
            .field("icon", &self.icon)
            .field("text_color", &self.text_color)
            .field("background_color", &self.background_color)
            .field("has_handler", &self.has_handler())
            .finish()
    }
}

impl Widget for &RoundedButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block_style = Style::default();
        if let Some(bg) = self.background_color {
            block_style = block_style.bg(bg);
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER_COLOR))
            .style(block_style)
            .padding(Padding::horizontal(HORIZONTAL_PADDING));

        let inner = block.inner(area);
        block.render(area, buf);

        let text_style = Style::default().fg(self.effective_text_color());
        let mut spans = Vec::with_capacity(3);
        if let Some(icon) = &self.icon {
            spans.push(icon.clone());
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(self.text.as_ref(), text_style));

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
