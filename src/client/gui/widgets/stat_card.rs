use iced::{Color, Element, Length};
use iced::widget::{Column, Container, Text};
use crate::client::gui::style::{card_appearance, BOLD_FONT, TEXT_SECONDARY};
use crate::client::models::messages::Message;

/// One of the summary tiles on the payments page: a big figure over a caption.
pub fn view<'a>(value: String, caption: &'a str, color: Color) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(4)
        .align_items(iced::Alignment::Center)
        .push(Text::new(value).font(BOLD_FONT).size(26).style(color))
        .push(Text::new(caption).size(13).style(TEXT_SECONDARY));

    Container::new(content)
        .width(Length::Fill)
        .padding(16)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}
