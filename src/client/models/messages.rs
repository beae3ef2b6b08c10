use crate::client::models::app_state::Page;
use crate::client::models::chat::CallKind;
use crate::client::models::payment::PaymentField;
use crate::client::services::payment_service::PaymentReceipt;

#[derive(Debug, Clone)]
pub enum Message {
    NoOp,
    // Login form
    LoginNameChanged(String),
    LoginEmailChanged(String),
    SubmitLogin,
    Logout,
    // Sidebar navigation
    PageSelected(Page),
    OpenSettings,
    // Friends list
    FriendSearchChanged(String),
    FriendSelected(String),
    AddFriend,
    // Chat
    MessageInputChanged(String),
    SendMessage,
    StartCall(CallKind),
    ToggleMute,
    EndCall,
    // Payments
    OpenPaymentModal,
    ClosePaymentModal,
    PaymentFieldChanged(PaymentField, String),
    SubmitPayment,
    PaymentProcessed(PaymentReceipt),
    // Alert bar; carries the generation of the line to clear
    ClearLog(u64),
}
