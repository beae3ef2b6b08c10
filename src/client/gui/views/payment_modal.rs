use iced::{Element, Length, Alignment};
use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};
use crate::client::gui::style::{
    card_appearance, input_appearance, BORDER, BOLD_FONT, EMOJI_FONT, SUCCESS, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::client::models::messages::Message;
use crate::client::models::payment::{PaymentField, PaymentModalState};

pub const MODAL_WIDTH: f32 = 440.0;

fn field<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    target: PaymentField,
    editable: bool,
) -> Column<'a, Message> {
    let mut input = TextInput::new(placeholder, value).padding(10).size(14).width(Length::Fill);
    if editable {
        input = input
            .on_input(move |v| Message::PaymentFieldChanged(target, v))
            .on_submit(Message::SubmitPayment);
    }
    Column::new()
        .spacing(6)
        .width(Length::Fill)
        .push(Text::new(label).size(13).style(TEXT_SECONDARY))
        .push(Container::new(input).style(iced::theme::Container::Custom(Box::new(input_appearance))))
}

pub fn view(modal: &PaymentModalState) -> Element<'_, Message> {
    let draft = &modal.draft;
    let idle = !modal.is_processing;

    let title = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("💳").font(EMOJI_FONT).size(18))
        .push(Text::new("Send Payment").font(BOLD_FONT).size(20).style(TEXT_PRIMARY));

    let secure = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("🔒").font(EMOJI_FONT).size(14).style(SUCCESS))
        .push(Text::new("Secure Payment Method").size(13).style(TEXT_SECONDARY));

    let divider = Container::new(Space::new(Length::Fill, Length::Fixed(1.0)))
        .width(Length::Fill)
        .style(crate::client::gui::style::filled(BORDER, 0.0));

    let card_row = Row::new()
        .spacing(12)
        .push(field("Expiry Date", "MM/YY", &draft.expiry_date, PaymentField::ExpiryDate, idle))
        .push(field("CVV", "123", &draft.cvv, PaymentField::Cvv, idle));

    let cancel = Button::new(Container::new(Text::new("Cancel").size(14)).width(Length::Fill).center_x())
        .on_press_maybe(idle.then_some(Message::ClosePaymentModal))
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(12);

    let submit_label = if idle { draft.submit_label() } else { "Processing...".to_string() };
    let submit = Button::new(
        Container::new(Text::new(submit_label).font(BOLD_FONT).size(14))
            .width(Length::Fill)
            .center_x(),
    )
    .on_press_maybe(idle.then_some(Message::SubmitPayment))
    .style(iced::theme::Button::Primary)
    .width(Length::Fill)
    .padding(12);

    let content = Column::new()
        .spacing(16)
        .padding(24)
        .push(title)
        .push(field("Recipient Email", "Enter recipient's email", &draft.recipient, PaymentField::Recipient, idle))
        .push(field("Amount ($)", "0.00", &draft.amount, PaymentField::Amount, idle))
        .push(field("Description (Optional)", "What's this for?", &draft.description, PaymentField::Description, idle))
        .push(divider)
        .push(secure)
        .push(field("Card Number", "1234 5678 9012 3456", &draft.card_number, PaymentField::CardNumber, idle))
        .push(card_row)
        .push(Row::new().spacing(8).push(cancel).push(submit));

    Container::new(content)
        .width(Length::Fixed(MODAL_WIDTH))
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}
