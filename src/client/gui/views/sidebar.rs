use iced::{Element, Length, Alignment};
use iced::widget::{Button, Column, Container, Space, Text};
use crate::client::gui::style::{filled, panel_appearance, ACCENT, BOLD_FONT, EMOJI_FONT, TEXT_SECONDARY};
use crate::client::gui::widgets::avatar;
use crate::client::models::app_state::{ChatAppState, Page};
use crate::client::models::messages::Message;
use crate::utils::format::user_initials;

pub const SIDEBAR_WIDTH: f32 = 72.0;

fn rail_button<'a>(icon: &'a str, message: Message, style: iced::theme::Button) -> Button<'a, Message> {
    Button::new(
        Container::new(Text::new(icon).font(EMOJI_FONT).size(18))
            .width(Length::Fill)
            .center_x(),
    )
    .on_press(message)
    .style(style)
    .width(Length::Fill)
    .padding([10, 0])
}

fn nav_button(icon: &str, page: Page, current: Page) -> Button<'_, Message> {
    let style = if page == current {
        iced::theme::Button::Primary
    } else {
        iced::theme::Button::Text
    };
    rail_button(icon, Message::PageSelected(page), style)
}

pub fn view(state: &ChatAppState) -> Element<'_, Message> {
    let brand = Column::new()
        .spacing(4)
        .align_items(Alignment::Center)
        .push(
            Container::new(Text::new("CP").font(BOLD_FONT).size(14))
                .width(Length::Fixed(40.0))
                .height(Length::Fixed(40.0))
                .center_x()
                .center_y()
                .style(filled(ACCENT, 8.0)),
        )
        .push(Text::new("Chat").size(10).style(TEXT_SECONDARY))
        .push(Text::new("Pay").size(10).style(TEXT_SECONDARY));

    let name = state.user.as_ref().map(|u| u.name.as_str());
    let profile = avatar::view(user_initials(name), 32.0, ACCENT);

    let nav = Column::new()
        .spacing(8)
        .push(nav_button("💬", Page::Chat, state.current_page))
        .push(nav_button("💳", Page::Payment, state.current_page));

    let footer = Column::new()
        .spacing(8)
        .push(rail_button("⚙️", Message::OpenSettings, iced::theme::Button::Text))
        .push(rail_button("🚪", Message::Logout, iced::theme::Button::Destructive));

    let content = Column::new()
        .spacing(16)
        .padding(8)
        .align_items(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(brand)
        .push(profile)
        .push(nav)
        .push(Space::new(Length::Fill, Length::Fill))
        .push(footer);

    Container::new(content)
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(panel_appearance)))
        .into()
}
