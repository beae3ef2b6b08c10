use iced::{Application, Command, Element, Length, Theme};
use iced::widget::{Column, Container, Row};
use log::info;
use crate::client::config::ClientConfig;
use crate::client::gui::style::bg_main_appearance;
use crate::client::gui::views::{chat, logger::logger_view, login, payments, sidebar};
use crate::client::models::app_state::{AppState, ChatAppState, Page};
use crate::client::models::messages::Message;

pub struct ChatPayApp {
    pub state: ChatAppState,
}

impl Application for ChatPayApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ClientConfig;

    fn new(config: ClientConfig) -> (Self, Command<Message>) {
        info!("Starting ChatPay (payment delay {} ms)", config.payment_delay_ms);
        let app = ChatPayApp {
            state: ChatAppState::new(config),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        match &self.state.user {
            Some(user) => format!("Chat Pay - {}", user.name),
            None => "Chat Pay".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.state.update(message)
    }

    fn view(&self) -> Element<Message> {
        match self.state.app_state {
            AppState::Login => login::view(&self.state),
            AppState::Main => self.main_view(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

impl ChatPayApp {
    fn main_view(&self) -> Element<Message> {
        let page = match self.state.current_page {
            Page::Chat => chat::view(&self.state.chat),
            Page::Payment => payments::view(&self.state.payments),
        };

        let main = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(Container::new(logger_view(&self.state.logger)).width(Length::Fill))
            .push(page);

        Container::new(
            Row::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(sidebar::view(&self.state))
                .push(main),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
    }
}
