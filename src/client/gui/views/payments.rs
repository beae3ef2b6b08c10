use iced::{Element, Length, Alignment};
use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text};
use iced_aw::Modal;
use crate::client::gui::style::{
    balance_appearance, ACCENT, BOLD_FONT, DANGER, SUCCESS, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::client::gui::views::{payment_history, payment_modal};
use crate::client::gui::widgets::stat_card;
use crate::client::models::messages::Message;
use crate::client::models::payment::PaymentsState;
use crate::utils::format::format_usd;

fn balance_card(balance_cents: u64) -> Element<'static, Message> {
    let content = Column::new()
        .spacing(8)
        .push(Text::new("Account Balance").font(BOLD_FONT).size(16).style(TEXT_PRIMARY))
        .push(Text::new(format_usd(balance_cents)).font(BOLD_FONT).size(36).style(TEXT_PRIMARY))
        .push(Text::new("Available for transfers").size(13).style(iced::Color::from_rgb(0.86, 0.91, 1.0)));

    Container::new(content)
        .padding(24)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(balance_appearance)))
        .into()
}

pub fn view(payments: &PaymentsState) -> Element<'_, Message> {
    let header = Row::new()
        .align_items(Alignment::Center)
        .push(
            Column::new()
                .spacing(4)
                .push(Text::new("Payments").font(BOLD_FONT).size(26).style(TEXT_PRIMARY))
                .push(Text::new("Manage your transactions and send money").size(14).style(TEXT_SECONDARY)),
        )
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(
            Button::new(Text::new("+  Make Payment").font(BOLD_FONT).size(14))
                .on_press(Message::OpenPaymentModal)
                .style(iced::theme::Button::Primary)
                .padding([10, 16]),
        );

    let summary = &payments.summary;
    let stats = Row::new()
        .spacing(16)
        .push(stat_card::view(format_usd(summary.received_today_cents), "Received Today", SUCCESS))
        .push(stat_card::view(format_usd(summary.sent_today_cents), "Sent Today", DANGER))
        .push(stat_card::view(summary.total_transactions.to_string(), "Total Transactions", ACCENT));

    let page = Column::new()
        .spacing(24)
        .padding(24)
        .width(Length::Fill)
        .push(header)
        .push(balance_card(summary.balance_cents))
        .push(stats)
        .push(payment_history::view(&payments.history));

    let underlay = Scrollable::new(page).width(Length::Fill).height(Length::Fill);

    let overlay = payments.modal.is_open.then(|| payment_modal::view(&payments.modal));

    Modal::new(underlay, overlay)
        .backdrop(Message::ClosePaymentModal)
        .on_esc(Message::ClosePaymentModal)
        .into()
}
