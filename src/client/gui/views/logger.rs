use iced::{Color, Element, Length};
use iced::widget::{Container, Row, Space, Text};
use crate::client::gui::style::{pill, ACCENT, BOLD_FONT, DANGER, EMOJI_FONT, SUCCESS, TEXT_PRIMARY};
use crate::client::models::messages::Message;

/// Severity of an alert-bar line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
}

impl LogLevel {
    fn icon(self) -> &'static str {
        match self {
            LogLevel::Success => "✅",
            LogLevel::Error => "⛔",
            LogLevel::Info => "💬",
        }
    }

    fn tint(self) -> Color {
        match self {
            LogLevel::Success => SUCCESS,
            LogLevel::Error => DANGER,
            LogLevel::Info => ACCENT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into() }
    }
}

/// Alert bar showing only the most recent line, tinted by its level.
pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    let Some(line) = messages.last() else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };

    let content = Row::new()
        .spacing(10)
        .align_items(iced::Alignment::Center)
        .push(Text::new(line.level.icon()).font(EMOJI_FONT).size(16))
        .push(Text::new(&line.message).font(BOLD_FONT).size(14).style(TEXT_PRIMARY));

    Container::new(content)
        .padding([8, 14])
        .width(Length::Fill)
        .style(pill(line.level.tint()))
        .into()
}
