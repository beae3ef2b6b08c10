use iced::{Element, Length, Alignment};
use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};
use crate::client::gui::style::{
    bg_main_appearance, card_appearance, input_appearance, BOLD_FONT, EMOJI_FONT, SUCCESS, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::client::gui::views::logger::logger_view;
use crate::client::models::app_state::ChatAppState;
use crate::client::models::messages::Message;
use crate::client::models::user::is_valid_email;

fn labelled_input<'a>(icon: &'a str, label: &'a str, input: TextInput<'a, Message>) -> Column<'a, Message> {
    Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new(icon).font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(Text::new(label).size(14).style(TEXT_SECONDARY)),
        )
        .push(
            Container::new(input.width(Length::Fill).padding(12).size(14))
                .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
}

fn check_row(ok: bool, label: &str) -> Row<'_, Message> {
    Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new(if ok { "✅" } else { "❌" }).font(EMOJI_FONT).size(12))
        .push(Text::new(label).size(12).style(if ok { SUCCESS } else { TEXT_SECONDARY }))
}

pub fn view(state: &ChatAppState) -> Element<'_, Message> {
    let form = &state.login_form;
    let name_ok = !form.name.trim().is_empty();
    let email_ok = is_valid_email(form.email.trim());
    let submit_enabled = form.is_complete();

    let logger_bar = Container::new(logger_view(&state.logger))
        .width(Length::Fill)
        .padding([8, 12, 0, 12]);

    let title = Column::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("Chat Pay").size(42).font(BOLD_FONT).style(TEXT_PRIMARY))
        .push(Text::new("Messages and payments in one place").size(16).style(TEXT_SECONDARY));

    let name_field = labelled_input(
        "👤",
        "Name",
        TextInput::new("Your full name", &form.name)
            .on_input(Message::LoginNameChanged)
            .on_submit(Message::SubmitLogin),
    );

    let email_field = labelled_input(
        "✉️",
        "Email",
        TextInput::new("you@example.com", &form.email)
            .on_input(Message::LoginEmailChanged)
            .on_submit(Message::SubmitLogin),
    );

    let checks = Column::new()
        .spacing(4)
        .push(check_row(name_ok, "Name is required"))
        .push(check_row(email_ok, "Valid email address"));

    let submit_button = Button::new(
        Container::new(Text::new("Sign In").font(BOLD_FONT).size(16))
            .width(Length::Fill)
            .center_x(),
    )
    .on_press_maybe(submit_enabled.then_some(Message::SubmitLogin))
    .style(if submit_enabled { iced::theme::Button::Primary } else { iced::theme::Button::Secondary })
    .width(Length::Fill)
    .padding(16);

    let card_content = Column::new()
        .width(Length::Fixed(420.0))
        .spacing(24)
        .padding(32)
        .align_items(Alignment::Center)
        .push(title)
        .push(Space::new(Length::Fill, Length::Fixed(8.0)))
        .push(name_field)
        .push(email_field)
        .push(checks)
        .push(submit_button);

    let card = Container::new(card_content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(logger_bar)
        .push(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x()
                .center_y(),
        );

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
