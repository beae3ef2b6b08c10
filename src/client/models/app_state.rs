use chrono::Local;
use iced::Command;
use log::{debug, info, warn};
use crate::client::config::ClientConfig;
use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::models::chat::{ChatState, ANONYMOUS_SENDER};
use crate::client::models::messages::Message;
use crate::client::models::payment::PaymentsState;
use crate::client::models::user::{LoginForm, User};
use crate::client::services::fixtures;
use crate::client::services::payment_service::PaymentService;
use crate::utils::format::{clock_time, format_usd};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Login,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Chat,
    Payment,
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Page::Chat => "chat",
            Page::Payment => "payment",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone)]
pub struct ChatAppState {
    pub app_state: AppState,
    pub current_page: Page,
    pub user: Option<User>,
    pub login_form: LoginForm,
    pub chat: ChatState,
    pub payments: PaymentsState,
    pub logger: Vec<LogMessage>,
    log_generation: u64,
    // survives logout so a receipt from a previous session never matches
    payment_ticket: u64,
    pub config: ClientConfig,
}

impl Default for ChatAppState {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl ChatAppState {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            app_state: AppState::Login,
            current_page: Page::Chat,
            user: None,
            login_form: LoginForm::default(),
            chat: ChatState::default(),
            payments: PaymentsState::new(),
            logger: Vec::new(),
            log_generation: 0,
            payment_ticket: 0,
            config,
        }
    }

    /// Name used as sender of outgoing chat messages.
    pub fn sender_name(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or(ANONYMOUS_SENDER)
    }

    /// Pushes a line on the alert bar and schedules its removal.
    fn log(&mut self, level: LogLevel, text: impl Into<String>) -> Command<Message> {
        self.logger.push(LogMessage::new(level, text));
        self.log_generation += 1;
        let generation = self.log_generation;
        let delay = self.config.log_clear_delay();
        Command::perform(
            async move {
                tokio::time::sleep(delay).await;
                generation
            },
            Message::ClearLog,
        )
    }

    fn sign_in(&mut self, user: User) {
        let now = Local::now();
        let friends = fixtures::load_friends(now).unwrap_or_else(|e| {
            warn!("Friends fixture unavailable: {}", e);
            Vec::new()
        });
        let seed = fixtures::load_conversation(&user.name, now).unwrap_or_else(|e| {
            warn!("Conversation fixture unavailable: {}", e);
            Vec::new()
        });
        self.chat = ChatState::new(friends, seed);
        self.payments = PaymentsState::new();
        self.user = Some(user);
        self.login_form = LoginForm::default();
        self.app_state = AppState::Main;
        self.current_page = Page::Chat;
    }

    fn sign_out(&mut self) {
        self.user = None;
        self.app_state = AppState::Login;
        self.current_page = Page::Chat;
        self.chat = ChatState::default();
        self.payments = PaymentsState::new();
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::NoOp => {}
            Message::LoginNameChanged(name) => {
                self.login_form.name = name;
            }
            Message::LoginEmailChanged(email) => {
                self.login_form.email = email;
            }
            Message::SubmitLogin => match self.login_form.submit() {
                Ok(user) => {
                    info!("Signed in as {} <{}>", user.name, user.email);
                    let welcome = format!("Welcome, {}", user.name);
                    self.sign_in(user);
                    self.logger.clear();
                    return self.log(LogLevel::Success, welcome);
                }
                Err(e) => {
                    warn!("Login rejected: {}", e);
                    return self.log(LogLevel::Error, e.to_string());
                }
            },
            Message::Logout => {
                if let Some(user) = &self.user {
                    info!("{} signed out", user.name);
                }
                self.sign_out();
                self.logger.clear();
            }
            Message::PageSelected(page) => {
                if self.app_state == AppState::Main && self.current_page != page {
                    debug!("Switching page to {}", page);
                    self.current_page = page;
                }
            }
            Message::OpenSettings => {
                info!("Settings requested (not available in this demo)");
                return self.log(LogLevel::Info, "Settings are not available in this demo");
            }
            Message::FriendSearchChanged(query) => {
                self.chat.friends.search_query = query;
            }
            Message::FriendSelected(id) => {
                if self.chat.select_friend(&id) {
                    if let Some(friend) = self.chat.selected_friend() {
                        debug!("Opened conversation with {}", friend.name);
                    }
                }
            }
            Message::AddFriend => {
                info!("Add friend requested (not available in this demo)");
                return self.log(LogLevel::Info, "Adding friends is not available in this demo");
            }
            Message::MessageInputChanged(text) => {
                if !self.chat.is_call_active() {
                    self.chat.message_input = text;
                }
            }
            Message::SendMessage => {
                let sender = self.sender_name().to_string();
                if let Some(sent) = self.chat.send_message(&sender) {
                    debug!("Message {} appended by {}", sent.id, sent.sender);
                }
            }
            Message::StartCall(kind) => {
                if self.chat.start_call(kind) {
                    let name = self.chat.selected_friend().map(|f| f.name.clone()).unwrap_or_default();
                    info!("Starting {} call with {}...", kind, name);
                }
            }
            Message::ToggleMute => {
                self.chat.toggle_mute();
            }
            Message::EndCall => {
                if self.chat.is_call_active() {
                    info!("Call ended");
                }
                self.chat.end_call();
            }
            Message::OpenPaymentModal => {
                self.payments.modal.open();
            }
            Message::ClosePaymentModal => {
                if !self.payments.modal.close() {
                    debug!("Ignoring close while a payment is processing");
                }
            }
            Message::PaymentFieldChanged(field, value) => {
                self.payments.modal.set_field(field, value);
            }
            Message::SubmitPayment => match self.payments.modal.begin_submit(self.payment_ticket + 1) {
                Some(Ok(request)) => {
                    self.payment_ticket += 1;
                    let service = PaymentService::new(self.config.payment_delay());
                    return Command::perform(
                        service.submit(self.payment_ticket, request),
                        Message::PaymentProcessed,
                    );
                }
                Some(Err(e)) => {
                    return self.log(LogLevel::Error, e.to_string());
                }
                None => {}
            },
            Message::PaymentProcessed(receipt) => {
                if !self.payments.modal.awaits(receipt.submission) {
                    debug!("Dropping stale receipt {} for payment #{}", receipt.id, receipt.submission);
                    return Command::none();
                }
                self.payments.payment_succeeded();
                return self.log(
                    LogLevel::Success,
                    format!(
                        "Sent {} to {} at {}",
                        format_usd(receipt.amount_cents),
                        receipt.recipient,
                        clock_time(&receipt.processed_at)
                    ),
                );
            }
            Message::ClearLog(generation) => {
                if generation == self.log_generation {
                    self.logger.clear();
                }
            }
        }
        Command::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::chat::CallKind;
    use crate::client::models::payment::{PaymentDraft, PaymentField};
    use crate::client::services::payment_service::PaymentReceipt;

    fn signed_in() -> ChatAppState {
        let mut state = ChatAppState::default();
        let _ = state.update(Message::LoginNameChanged("Jane Doe".to_string()));
        let _ = state.update(Message::LoginEmailChanged("jane@example.com".to_string()));
        let _ = state.update(Message::SubmitLogin);
        state
    }

    fn fill_payment(state: &mut ChatAppState) {
        let fields = [
            (PaymentField::Recipient, "bob@example.com"),
            (PaymentField::Amount, "20.00"),
            (PaymentField::CardNumber, "4242 4242 4242 4242"),
            (PaymentField::ExpiryDate, "10/28"),
            (PaymentField::Cvv, "321"),
        ];
        for (field, value) in fields {
            let _ = state.update(Message::PaymentFieldChanged(field, value.to_string()));
        }
    }

    fn receipt(submission: u64) -> PaymentReceipt {
        PaymentReceipt {
            id: format!("r-{}", submission),
            submission,
            recipient: "bob@example.com".to_string(),
            amount_cents: 2000,
            processed_at: Local::now(),
        }
    }

    #[test]
    fn test_login_enters_chat_page() {
        let state = signed_in();
        assert_eq!(state.app_state, AppState::Main);
        assert_eq!(state.current_page, Page::Chat);
        assert_eq!(state.sender_name(), "Jane Doe");
        assert_eq!(state.chat.friends.filtered().len(), 4);
        assert_eq!(state.chat.messages().len(), 3);
        assert_eq!(state.chat.messages()[1].sender, "Jane Doe");
        assert!(state.login_form.name.is_empty());
    }

    #[test]
    fn test_invalid_login_stays_on_form() {
        let mut state = ChatAppState::default();
        let _ = state.update(Message::LoginNameChanged("Jane".to_string()));
        let _ = state.update(Message::SubmitLogin);
        assert_eq!(state.app_state, AppState::Login);
        assert!(state.user.is_none());
        assert_eq!(state.logger.last().map(|l| l.level), Some(LogLevel::Error));
    }

    #[test]
    fn test_logout_resets_page_and_user() {
        let mut state = signed_in();
        let _ = state.update(Message::PageSelected(Page::Payment));
        assert_eq!(state.current_page, Page::Payment);
        let _ = state.update(Message::Logout);
        assert_eq!(state.app_state, AppState::Login);
        assert!(state.user.is_none());
        assert_eq!(state.current_page, Page::Chat);
        assert_eq!(state.sender_name(), ANONYMOUS_SENDER);
    }

    #[test]
    fn test_logout_discards_chat_and_payments() {
        let mut state = signed_in();
        let _ = state.update(Message::MessageInputChanged("before logout".to_string()));
        let _ = state.update(Message::SendMessage);
        assert_eq!(state.chat.messages().len(), 4);
        let _ = state.update(Message::OpenPaymentModal);
        fill_payment(&mut state);
        let _ = state.update(Message::SubmitPayment);
        let _ = state.update(Message::PaymentProcessed(receipt(1)));
        assert_eq!(state.payments.history_key, 1);

        let _ = state.update(Message::Logout);
        assert!(state.chat.messages().is_empty());

        let _ = state.update(Message::LoginNameChanged("Jane Doe".to_string()));
        let _ = state.update(Message::LoginEmailChanged("jane@example.com".to_string()));
        let _ = state.update(Message::SubmitLogin);
        assert_eq!(state.chat.messages().len(), 3);
        assert_eq!(state.payments.history_key, 0);
        assert!(!state.payments.modal.is_open);
    }

    #[test]
    fn test_send_message_through_update() {
        let mut state = signed_in();
        let _ = state.update(Message::MessageInputChanged("See you at 5".to_string()));
        let _ = state.update(Message::SendMessage);
        assert_eq!(state.chat.messages().len(), 4);
        let last = state.chat.messages().last().unwrap();
        assert_eq!(last.sender, "Jane Doe");
        assert!(last.is_current_user);

        let _ = state.update(Message::MessageInputChanged("   ".to_string()));
        let _ = state.update(Message::SendMessage);
        assert_eq!(state.chat.messages().len(), 4);
    }

    #[test]
    fn test_selecting_friend_updates_header() {
        let mut state = signed_in();
        let _ = state.update(Message::FriendSelected("3".to_string()));
        assert_eq!(state.chat.selected_friend().map(|f| f.name.as_str()), Some("Carol Wilson"));
        assert!(state.chat.messages().is_empty());
    }

    #[test]
    fn test_input_locked_during_call() {
        let mut state = signed_in();
        let _ = state.update(Message::StartCall(CallKind::Audio));
        let _ = state.update(Message::MessageInputChanged("hi".to_string()));
        assert!(state.chat.message_input.is_empty());
        let _ = state.update(Message::ToggleMute);
        assert!(state.chat.muted);
        let _ = state.update(Message::EndCall);
        assert!(!state.chat.is_call_active());
        assert!(!state.chat.muted);
    }

    #[test]
    fn test_payment_submission_flow() {
        let mut state = signed_in();
        let _ = state.update(Message::PageSelected(Page::Payment));
        let _ = state.update(Message::OpenPaymentModal);
        fill_payment(&mut state);

        let _ = state.update(Message::SubmitPayment);
        assert!(state.payments.modal.is_processing);
        assert!(state.payments.modal.is_open);

        let _ = state.update(Message::ClosePaymentModal);
        assert!(state.payments.modal.is_open);

        let _ = state.update(Message::PaymentProcessed(receipt(1)));
        assert!(!state.payments.modal.is_processing);
        assert!(!state.payments.modal.is_open);
        assert_eq!(state.payments.modal.draft, PaymentDraft::default());
        assert_eq!(state.payments.history_key, 1);

        // a stray second receipt must not bump the key again
        let _ = state.update(Message::PaymentProcessed(receipt(1)));
        assert_eq!(state.payments.history_key, 1);
    }

    #[test]
    fn test_receipt_from_previous_session_is_ignored() {
        let mut state = signed_in();
        let _ = state.update(Message::OpenPaymentModal);
        fill_payment(&mut state);
        let _ = state.update(Message::SubmitPayment);
        assert!(state.payments.modal.awaits(1));

        // sign out while the first payment is still sleeping
        let _ = state.update(Message::Logout);
        let _ = state.update(Message::LoginNameChanged("Jane Doe".to_string()));
        let _ = state.update(Message::LoginEmailChanged("jane@example.com".to_string()));
        let _ = state.update(Message::SubmitLogin);
        let _ = state.update(Message::OpenPaymentModal);
        fill_payment(&mut state);
        let _ = state.update(Message::SubmitPayment);
        assert!(state.payments.modal.awaits(2));

        let _ = state.update(Message::PaymentProcessed(receipt(1)));
        assert!(state.payments.modal.is_processing);
        assert!(state.payments.modal.is_open);
        assert_eq!(state.payments.history_key, 0);

        let _ = state.update(Message::PaymentProcessed(receipt(2)));
        assert!(!state.payments.modal.is_processing);
        assert!(!state.payments.modal.is_open);
        assert_eq!(state.payments.history_key, 1);
    }

    #[test]
    fn test_invalid_payment_keeps_modal_open() {
        let mut state = signed_in();
        let _ = state.update(Message::OpenPaymentModal);
        let _ = state.update(Message::PaymentFieldChanged(PaymentField::Recipient, "bob".to_string()));
        let _ = state.update(Message::SubmitPayment);
        assert!(!state.payments.modal.is_processing);
        assert!(state.payments.modal.is_open);
        assert_eq!(state.payments.history_key, 0);
        assert_eq!(state.logger.last().map(|l| l.level), Some(LogLevel::Error));
    }

    #[test]
    fn test_stale_clear_log_keeps_newer_line() {
        let mut state = ChatAppState::default();
        let _ = state.update(Message::OpenSettings);
        let _ = state.update(Message::AddFriend);
        let _ = state.update(Message::ClearLog(1));
        assert_eq!(state.logger.len(), 2);
        let _ = state.update(Message::ClearLog(2));
        assert!(state.logger.is_empty());
    }
}
