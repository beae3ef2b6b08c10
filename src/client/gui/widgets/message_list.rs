// Widget per la lista dei messaggi
use iced::{Element, Length};
use iced::widget::{Column, Container, Scrollable, Space, Text, scrollable};
use crate::client::gui::style::{filled, ACCENT, CARD_BG, TEXT_MUTED, TEXT_PRIMARY};
use crate::client::models::chat::ChatMessage;
use crate::client::models::messages::Message;
use crate::utils::format::clock_time;

const BUBBLE_TIME_MINE: iced::Color = iced::Color::from_rgb(0.75, 0.85, 1.0);

pub fn view(messages: &[ChatMessage]) -> Element<'_, Message> {
    let mut column = Column::new().spacing(12).padding([12, 16]);

    if messages.is_empty() {
        column = column.push(
            Container::new(Text::new("No messages yet. Say hello!").size(14).style(TEXT_MUTED))
                .width(Length::Fill)
                .center_x()
                .padding(20),
        );
    }

    for msg in messages {
        column = column.push(bubble(msg));
    }

    column = column.push(Space::new(Length::Fixed(0.0), Length::Fixed(12.0)));

    Scrollable::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .id(scrollable::Id::new("messages_scroll"))
        .into()
}

fn bubble(msg: &ChatMessage) -> Element<'_, Message> {
    let (color, time_color) = if msg.is_current_user {
        (ACCENT, BUBBLE_TIME_MINE)
    } else {
        (CARD_BG, TEXT_MUTED)
    };

    let content = Column::new()
        .spacing(4)
        .push(Text::new(&msg.content).size(14).style(TEXT_PRIMARY))
        .push(Text::new(clock_time(&msg.timestamp)).size(10).style(time_color));

    let bubble = Container::new(content)
        .padding([8, 14])
        .max_width(360.0)
        .style(filled(color, 12.0));

    let alignment = if msg.is_current_user {
        iced::alignment::Horizontal::Right
    } else {
        iced::alignment::Horizontal::Left
    };

    Container::new(bubble)
        .width(Length::Fill)
        .align_x(alignment)
        .into()
}
