use chrono::{DateTime, Local};
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::client::models::user::is_valid_email;
use crate::client::services::fixtures;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Sent,
    Received,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub recipient: String,
    pub amount_cents: u64,
    pub description: String,
    pub date: DateTime<Local>,
    pub status: TransactionStatus,
}

impl Transaction {
    /// `-$125.50` for money sent, `+$75.00` for money received.
    pub fn signed_amount(&self) -> String {
        let sign = match self.kind {
            TransactionKind::Sent => '-',
            TransactionKind::Received => '+',
        };
        format!("{}{}", sign, crate::utils::format::format_usd(self.amount_cents))
    }
}

/// Figures shown on the balance card and the three summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountSummary {
    pub balance_cents: u64,
    pub received_today_cents: u64,
    pub sent_today_cents: u64,
    pub total_transactions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    Recipient,
    Amount,
    Description,
    CardNumber,
    ExpiryDate,
    Cvv,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentFormError {
    #[error("Enter the recipient's email address")]
    InvalidRecipient,
    #[error("Enter an amount of at least $0.01")]
    InvalidAmount,
    #[error("Card number is required")]
    MissingCardNumber,
    #[error("Expiry date is required")]
    MissingExpiryDate,
    #[error("CVV is required")]
    MissingCvv,
}

/// Parses a dollar amount with at most two decimals into cents. Zero is rejected.
pub fn parse_amount_cents(input: &str) -> Result<u64, PaymentFormError> {
    let input = input.trim();
    let (whole, frac) = match input.split_once('.') {
        Some((w, f)) => (w, f),
        None => (input, ""),
    };
    let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || frac.len() > 2 || !digits_only(whole) || !digits_only(frac) {
        return Err(PaymentFormError::InvalidAmount);
    }

    let dollars: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| PaymentFormError::InvalidAmount)?
    };
    let cents: u64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u64>().map_err(|_| PaymentFormError::InvalidAmount)? * 10,
        _ => frac.parse().map_err(|_| PaymentFormError::InvalidAmount)?,
    };

    let total = dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or(PaymentFormError::InvalidAmount)?;
    if total == 0 {
        return Err(PaymentFormError::InvalidAmount);
    }
    Ok(total)
}

/// What leaves the form once it validates. Card details stay behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub recipient: String,
    pub amount_cents: u64,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentDraft {
    pub recipient: String,
    pub amount: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub description: String,
}

impl PaymentDraft {
    pub fn set(&mut self, field: PaymentField, value: String) {
        match field {
            PaymentField::Recipient => self.recipient = value,
            PaymentField::Amount => self.amount = value,
            PaymentField::Description => self.description = value,
            PaymentField::CardNumber => self.card_number = value,
            PaymentField::ExpiryDate => self.expiry_date = value,
            PaymentField::Cvv => self.cvv = value,
        }
    }

    /// Checks fields in form order and reports the first one that fails.
    pub fn validate(&self) -> Result<PaymentRequest, PaymentFormError> {
        let recipient = self.recipient.trim();
        if !is_valid_email(recipient) {
            return Err(PaymentFormError::InvalidRecipient);
        }
        let amount_cents = parse_amount_cents(&self.amount)?;
        if self.card_number.trim().is_empty() {
            return Err(PaymentFormError::MissingCardNumber);
        }
        if self.expiry_date.trim().is_empty() {
            return Err(PaymentFormError::MissingExpiryDate);
        }
        if self.cvv.trim().is_empty() {
            return Err(PaymentFormError::MissingCvv);
        }
        Ok(PaymentRequest {
            recipient: recipient.to_string(),
            amount_cents,
            description: self.description.trim().to_string(),
        })
    }

    /// Label of the submit button while idle, echoing the raw amount.
    pub fn submit_label(&self) -> String {
        let amount = if self.amount.is_empty() { "0.00" } else { self.amount.as_str() };
        format!("Send ${}", amount)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaymentModalState {
    pub is_open: bool,
    pub draft: PaymentDraft,
    pub is_processing: bool,
    /// Ticket of the submission in flight. Completions for any other ticket are stale.
    pub submission: Option<u64>,
}

impl PaymentModalState {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Closing is refused while a submission is in flight.
    pub fn close(&mut self) -> bool {
        if self.is_processing {
            return false;
        }
        self.is_open = false;
        true
    }

    pub fn set_field(&mut self, field: PaymentField, value: String) {
        if !self.is_processing {
            self.draft.set(field, value);
        }
    }

    /// Validates the draft and flips into processing under `ticket`. `None` when already processing.
    pub fn begin_submit(&mut self, ticket: u64) -> Option<Result<PaymentRequest, PaymentFormError>> {
        if self.is_processing {
            return None;
        }
        let result = self.draft.validate();
        match &result {
            Ok(_) => {
                self.is_processing = true;
                self.submission = Some(ticket);
            }
            Err(e) => warn!("Payment form rejected: {}", e),
        }
        Some(result)
    }

    pub fn awaits(&self, ticket: u64) -> bool {
        self.is_processing && self.submission == Some(ticket)
    }

    /// Ends processing and clears the form.
    pub fn finish(&mut self) {
        self.is_processing = false;
        self.submission = None;
        self.draft = PaymentDraft::default();
    }
}

// Storico transazioni, ricostruito ad ogni "remount"
#[derive(Debug, Clone)]
pub struct PaymentHistory {
    pub transactions: Vec<Transaction>,
    pub mounted_at: DateTime<Local>,
}

impl PaymentHistory {
    pub fn mount(now: DateTime<Local>) -> Self {
        let transactions = fixtures::load_transactions(now).unwrap_or_else(|e| {
            warn!("Transaction fixtures unavailable: {}", e);
            Vec::new()
        });
        Self { transactions, mounted_at: now }
    }
}

#[derive(Debug, Clone)]
pub struct PaymentsState {
    pub summary: AccountSummary,
    pub history: PaymentHistory,
    pub history_key: u64,
    pub modal: PaymentModalState,
}

impl PaymentsState {
    pub fn new() -> Self {
        let summary = fixtures::load_account_summary().unwrap_or_else(|e| {
            warn!("Account summary fixture unavailable: {}", e);
            AccountSummary::default()
        });
        Self {
            summary,
            history: PaymentHistory::mount(Local::now()),
            history_key: 0,
            modal: PaymentModalState::default(),
        }
    }

    /// Success path of a submission: reset the form, close the modal, remount history.
    pub fn payment_succeeded(&mut self) {
        self.modal.finish();
        self.modal.close();
        self.history_key += 1;
        self.history = PaymentHistory::mount(Local::now());
    }
}

impl Default for PaymentsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> PaymentDraft {
        PaymentDraft {
            recipient: "bob@example.com".to_string(),
            amount: "12.5".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            expiry_date: "12/29".to_string(),
            cvv: "123".to_string(),
            description: "  Lunch ".to_string(),
        }
    }

    #[test]
    fn test_parse_amount_cents() {
        assert_eq!(parse_amount_cents("12.50"), Ok(1250));
        assert_eq!(parse_amount_cents("12.5"), Ok(1250));
        assert_eq!(parse_amount_cents("7"), Ok(700));
        assert_eq!(parse_amount_cents(".01"), Ok(1));
        assert_eq!(parse_amount_cents(" 3. "), Ok(300));
        assert_eq!(parse_amount_cents("0.00"), Err(PaymentFormError::InvalidAmount));
        assert_eq!(parse_amount_cents("1.234"), Err(PaymentFormError::InvalidAmount));
        assert_eq!(parse_amount_cents("-5"), Err(PaymentFormError::InvalidAmount));
        assert_eq!(parse_amount_cents("abc"), Err(PaymentFormError::InvalidAmount));
        assert_eq!(parse_amount_cents(""), Err(PaymentFormError::InvalidAmount));
        assert_eq!(parse_amount_cents("."), Err(PaymentFormError::InvalidAmount));
    }

    #[test]
    fn test_validate_reports_first_failing_field() {
        let mut draft = PaymentDraft::default();
        assert_eq!(draft.validate(), Err(PaymentFormError::InvalidRecipient));
        draft.recipient = "bob@example.com".to_string();
        assert_eq!(draft.validate(), Err(PaymentFormError::InvalidAmount));
        draft.amount = "10".to_string();
        assert_eq!(draft.validate(), Err(PaymentFormError::MissingCardNumber));
        draft.card_number = "4242".to_string();
        assert_eq!(draft.validate(), Err(PaymentFormError::MissingExpiryDate));
        draft.expiry_date = "01/30".to_string();
        assert_eq!(draft.validate(), Err(PaymentFormError::MissingCvv));
        draft.cvv = "999".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_description_is_optional() {
        let mut draft = valid_draft();
        draft.description.clear();
        let req = draft.validate().unwrap();
        assert_eq!(req.description, "");
        assert_eq!(req.amount_cents, 1250);
    }

    #[test]
    fn test_submit_label() {
        let mut draft = PaymentDraft::default();
        assert_eq!(draft.submit_label(), "Send $0.00");
        draft.amount = "42".to_string();
        assert_eq!(draft.submit_label(), "Send $42");
    }

    #[test]
    fn test_modal_processing_blocks_close_and_resubmit() {
        let mut modal = PaymentModalState::default();
        modal.open();
        modal.draft = valid_draft();

        let req = modal.begin_submit(7).unwrap().unwrap();
        assert_eq!(req.recipient, "bob@example.com");
        assert_eq!(req.description, "Lunch");
        assert!(modal.is_processing);
        assert!(modal.awaits(7));
        assert!(!modal.awaits(6));

        assert!(modal.begin_submit(8).is_none());
        assert!(modal.awaits(7));
        assert!(!modal.close());
        assert!(modal.is_open);

        modal.set_field(PaymentField::Amount, "99".to_string());
        assert_eq!(modal.draft.amount, "12.5");

        modal.finish();
        assert!(!modal.is_processing);
        assert!(!modal.awaits(7));
        assert_eq!(modal.draft, PaymentDraft::default());
        assert!(modal.close());
        assert!(!modal.is_open);
    }

    #[test]
    fn test_invalid_submit_does_not_process() {
        let mut modal = PaymentModalState::default();
        modal.open();
        let result = modal.begin_submit(1).unwrap();
        assert_eq!(result, Err(PaymentFormError::InvalidRecipient));
        assert!(!modal.is_processing);
        assert_eq!(modal.submission, None);
    }

    #[test]
    fn test_payment_succeeded_bumps_history_key_once() {
        let mut payments = PaymentsState::new();
        assert_eq!(payments.history_key, 0);
        assert_eq!(payments.history.transactions.len(), 5);

        payments.modal.open();
        payments.modal.draft = valid_draft();
        let _ = payments.modal.begin_submit(1);
        payments.payment_succeeded();

        assert_eq!(payments.history_key, 1);
        assert!(!payments.modal.is_open);
        assert!(!payments.modal.is_processing);
        assert_eq!(payments.modal.draft, PaymentDraft::default());
        assert_eq!(payments.history.transactions.len(), 5);
    }

    #[test]
    fn test_signed_amount() {
        let history = PaymentHistory::mount(Local::now());
        let sent = &history.transactions[0];
        let received = &history.transactions[1];
        assert_eq!(sent.signed_amount(), "-$125.50");
        assert_eq!(received.signed_amount(), "+$75.00");
    }
}
