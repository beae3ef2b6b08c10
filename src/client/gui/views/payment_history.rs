use iced::{Color, Element, Length, Alignment};
use iced::widget::{Column, Container, Row, Space, Text};
use crate::client::gui::style::{
    card_appearance, pill, row_appearance, BOLD_FONT, DANGER, EMOJI_FONT, SUCCESS, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY, WARNING,
};
use crate::client::gui::widgets::avatar;
use crate::client::models::messages::Message;
use crate::client::models::payment::{PaymentHistory, Transaction, TransactionKind, TransactionStatus};
use crate::utils::format::{initials, relative_time};

const AVATAR_BG: Color = Color::from_rgb(0.28, 0.33, 0.41);

pub fn status_color(status: TransactionStatus) -> Color {
    match status {
        TransactionStatus::Completed => SUCCESS,
        TransactionStatus::Pending => WARNING,
        TransactionStatus::Failed => DANGER,
    }
}

pub fn amount_color(kind: TransactionKind) -> Color {
    match kind {
        TransactionKind::Sent => DANGER,
        TransactionKind::Received => SUCCESS,
    }
}

fn transaction_row<'a>(tx: &'a Transaction, history: &PaymentHistory) -> Element<'a, Message> {
    let direction = match tx.kind {
        TransactionKind::Sent => "⬆️",
        TransactionKind::Received => "⬇️",
    };

    let badge = Container::new(Text::new(tx.status.to_string()).size(11))
        .padding([2, 8])
        .style(pill(status_color(tx.status)));

    let details = Column::new()
        .spacing(4)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new(&tx.recipient).font(BOLD_FONT).size(15).style(TEXT_PRIMARY))
                .push(badge),
        )
        .push(Text::new(&tx.description).size(13).style(TEXT_SECONDARY))
        .push(
            Row::new()
                .spacing(4)
                .align_items(Alignment::Center)
                .push(Text::new("🕒").font(EMOJI_FONT).size(11))
                .push(Text::new(relative_time(&tx.date, &history.mounted_at)).size(11).style(TEXT_MUTED)),
        );

    let row = Row::new()
        .spacing(14)
        .align_items(Alignment::Center)
        .push(avatar::view(initials(&tx.recipient), 40.0, AVATAR_BG))
        .push(Text::new(direction).font(EMOJI_FONT).size(14))
        .push(details)
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(Text::new(tx.signed_amount()).font(BOLD_FONT).size(16).style(amount_color(tx.kind)));

    Container::new(row)
        .padding(14)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(row_appearance)))
        .into()
}

pub fn view(history: &PaymentHistory) -> Element<'_, Message> {
    let mut list = Column::new()
        .spacing(12)
        .push(Text::new("Transaction History").font(BOLD_FONT).size(18).style(TEXT_PRIMARY));

    if history.transactions.is_empty() {
        list = list.push(Text::new("No transactions yet").size(13).style(TEXT_MUTED));
    }
    for tx in &history.transactions {
        list = list.push(transaction_row(tx, history));
    }

    Container::new(list)
        .padding(20)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}
