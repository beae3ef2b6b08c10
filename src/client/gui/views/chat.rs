use iced::{Element, Length, Alignment};
use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};
use crate::client::gui::style::{
    card_appearance, filled, input_appearance, panel_appearance, BG_MAIN, BOLD_FONT, EMOJI_FONT, SUCCESS, TEXT_MUTED,
    TEXT_PRIMARY,
};
use crate::client::gui::views::friends_sidebar;
use crate::client::gui::widgets::{avatar, message_list};
use crate::client::models::chat::{CallKind, ChatState, Friend};
use crate::client::models::messages::Message;
use crate::utils::format::initials;

fn header(friend: Option<&Friend>, call_active: bool) -> Element<'_, Message> {
    let Some(friend) = friend else {
        return Container::new(Text::new("Select a conversation").size(16).style(TEXT_MUTED))
            .padding(16)
            .width(Length::Fill)
            .into();
    };

    let (status, status_color) = if friend.is_online { ("Online", SUCCESS) } else { ("Offline", TEXT_MUTED) };
    let info = Column::new()
        .spacing(2)
        .push(Text::new(&friend.name).font(BOLD_FONT).size(18).style(TEXT_PRIMARY))
        .push(Text::new(status).size(12).style(status_color));

    let call_button = |icon: &'static str, kind: CallKind| {
        Button::new(Text::new(icon).font(EMOJI_FONT).size(16))
            .on_press_maybe((!call_active).then_some(Message::StartCall(kind)))
            .style(iced::theme::Button::Secondary)
            .padding([6, 12])
    };

    let row = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(avatar::view(initials(&friend.name), 40.0, SUCCESS))
        .push(info)
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(call_button("📞", CallKind::Audio))
        .push(call_button("🎥", CallKind::Video));

    Container::new(row)
        .padding([12, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(panel_appearance)))
        .into()
}

fn call_overlay<'a>(friend: &'a Friend, kind: CallKind, muted: bool) -> Element<'a, Message> {
    let title = match kind {
        CallKind::Audio => "Audio Call Active",
        CallKind::Video => "Video Call Active",
    };

    let stage = Container::new(
        Column::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(avatar::view(initials(&friend.name), 80.0, SUCCESS))
            .push(Text::new(&friend.name).size(16).style(TEXT_PRIMARY))
            .push(Text::new("Connected").size(13).style(SUCCESS)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(220.0))
    .center_x()
    .center_y()
    .style(filled(BG_MAIN, 12.0));

    let mute_button = Button::new(Text::new(if muted { "🔇" } else { "🎤" }).font(EMOJI_FONT).size(16))
        .on_press(Message::ToggleMute)
        .style(if muted { iced::theme::Button::Destructive } else { iced::theme::Button::Secondary })
        .padding([6, 12]);

    let end_button = Button::new(Text::new("End Call").font(BOLD_FONT).size(14))
        .on_press(Message::EndCall)
        .style(iced::theme::Button::Destructive)
        .padding([6, 12]);

    let controls = Row::new().spacing(16).push(mute_button).push(end_button);

    Container::new(
        Column::new()
            .spacing(16)
            .padding(16)
            .align_items(Alignment::Center)
            .push(Text::new(title).font(BOLD_FONT).size(18).style(TEXT_PRIMARY))
            .push(stage)
            .push(controls),
    )
    .width(Length::Fill)
    .padding([0, 16])
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

fn input_area(chat: &ChatState) -> Element<'_, Message> {
    let enabled = !chat.is_call_active();

    let mut input = TextInput::new("Type a message...", &chat.message_input)
        .padding(12)
        .size(14)
        .width(Length::Fill);
    if enabled {
        input = input.on_input(Message::MessageInputChanged).on_submit(Message::SendMessage);
    }

    let send = Button::new(Text::new("Send").font(BOLD_FONT).size(14))
        .on_press_maybe(enabled.then_some(Message::SendMessage))
        .style(iced::theme::Button::Primary)
        .padding([12, 16]);

    Container::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Container::new(input).style(iced::theme::Container::Custom(Box::new(input_appearance))))
            .push(send),
    )
    .padding([12, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(panel_appearance)))
    .into()
}

pub fn view(chat: &ChatState) -> Element<'_, Message> {
    let friend = chat.selected_friend();

    let mut conversation = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header(friend, chat.is_call_active()));

    if let (Some(friend), Some(kind)) = (friend, chat.call) {
        conversation = conversation
            .push(Space::new(Length::Fill, Length::Fixed(16.0)))
            .push(call_overlay(friend, kind, chat.muted));
    }

    conversation = conversation
        .push(message_list::view(chat.messages()))
        .push(input_area(chat));

    Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(friends_sidebar::view(&chat.friends))
        .push(conversation)
        .into()
}
