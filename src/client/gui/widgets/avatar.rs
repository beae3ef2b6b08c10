// Avatar circolare con le iniziali
use iced::{Color, Element, Length};
use iced::widget::{Container, Text};
use crate::client::gui::style::{filled, BOLD_FONT, TEXT_PRIMARY};
use crate::client::models::messages::Message;

pub fn view<'a>(initials: String, size: f32, color: Color) -> Element<'a, Message> {
    let label = Text::new(initials)
        .font(BOLD_FONT)
        .size((size * 0.4).round())
        .style(TEXT_PRIMARY);

    Container::new(label)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .center_x()
        .center_y()
        .style(filled(color, size / 2.0))
        .into()
}

/// Small presence dot next to a contact name.
pub fn presence_dot<'a>(online: bool) -> Element<'a, Message> {
    let color = if online {
        crate::client::gui::style::SUCCESS
    } else {
        crate::client::gui::style::TEXT_MUTED
    };
    Container::new(Text::new(""))
        .width(Length::Fixed(10.0))
        .height(Length::Fixed(10.0))
        .style(filled(color, 5.0))
        .into()
}
