//! Hardcoded sample records standing in for a backend.
//!
//! The records are embedded as JSON and carry ages ("seconds ago", "hours ago")
//! instead of absolute dates, so every load lines them up against the `now`
//! passed in by the caller.

use chrono::{DateTime, Duration, Local};
use serde::Deserialize;
use thiserror::Error;
use crate::client::models::chat::{ChatMessage, Friend};
use crate::client::models::payment::{AccountSummary, Transaction, TransactionKind, TransactionStatus};

const FRIENDS_JSON: &str = include_str!("../../../assets/fixtures/friends.json");
const CONVERSATION_JSON: &str = include_str!("../../../assets/fixtures/conversation.json");
const PAYMENTS_JSON: &str = include_str!("../../../assets/fixtures/payments.json");

/// Sender of the incoming messages in the seeded conversation.
pub const SEED_CONTACT: &str = "Alice Johnson";

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("malformed fixture {name}: {source}")]
    Malformed {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate id {id} in fixture {name}")]
    DuplicateId { name: &'static str, id: String },
}

#[derive(Debug, Deserialize)]
struct FriendRecord {
    id: String,
    name: String,
    email: String,
    is_online: bool,
    last_message: Option<String>,
    last_message_secs_ago: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ConversationRecord {
    id: String,
    from_current_user: bool,
    content: String,
    secs_ago: i64,
}

#[derive(Debug, Deserialize)]
struct TransactionRecord {
    id: String,
    kind: TransactionKind,
    recipient: String,
    amount_cents: u64,
    description: String,
    hours_ago: i64,
    status: TransactionStatus,
}

#[derive(Debug, Deserialize)]
struct PaymentsFixture {
    summary: AccountSummary,
    transactions: Vec<TransactionRecord>,
}

fn parse<'a, T: Deserialize<'a>>(name: &'static str, json: &'a str) -> Result<T, FixtureError> {
    serde_json::from_str(json).map_err(|source| FixtureError::Malformed { name, source })
}

fn ensure_unique_ids<'a>(name: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), FixtureError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId { name, id: id.to_string() });
        }
    }
    Ok(())
}

pub fn load_friends(now: DateTime<Local>) -> Result<Vec<Friend>, FixtureError> {
    let records: Vec<FriendRecord> = parse("friends", FRIENDS_JSON)?;
    ensure_unique_ids("friends", records.iter().map(|r| r.id.as_str()))?;
    Ok(records
        .into_iter()
        .map(|r| Friend {
            id: r.id,
            name: r.name,
            email: r.email,
            is_online: r.is_online,
            last_message: r.last_message,
            last_message_time: r.last_message_secs_ago.map(|s| now - Duration::seconds(s)),
        })
        .collect())
}

/// Opening conversation with [`SEED_CONTACT`]; outgoing lines are attributed to `user_name`.
pub fn load_conversation(user_name: &str, now: DateTime<Local>) -> Result<Vec<ChatMessage>, FixtureError> {
    let records: Vec<ConversationRecord> = parse("conversation", CONVERSATION_JSON)?;
    ensure_unique_ids("conversation", records.iter().map(|r| r.id.as_str()))?;
    Ok(records
        .into_iter()
        .map(|r| ChatMessage {
            id: r.id,
            sender: if r.from_current_user { user_name.to_string() } else { SEED_CONTACT.to_string() },
            content: r.content,
            timestamp: now - Duration::seconds(r.secs_ago),
            is_current_user: r.from_current_user,
        })
        .collect())
}

pub fn load_transactions(now: DateTime<Local>) -> Result<Vec<Transaction>, FixtureError> {
    let fixture: PaymentsFixture = parse("payments", PAYMENTS_JSON)?;
    ensure_unique_ids("payments", fixture.transactions.iter().map(|r| r.id.as_str()))?;
    Ok(fixture
        .transactions
        .into_iter()
        .map(|r| Transaction {
            id: r.id,
            kind: r.kind,
            recipient: r.recipient,
            amount_cents: r.amount_cents,
            description: r.description,
            date: now - Duration::hours(r.hours_ago),
            status: r.status,
        })
        .collect())
}

pub fn load_account_summary() -> Result<AccountSummary, FixtureError> {
    let fixture: PaymentsFixture = parse("payments", PAYMENTS_JSON)?;
    Ok(fixture.summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::format::{format_usd, relative_time};

    #[test]
    fn test_friends_fixture() {
        let now = Local::now();
        let friends = load_friends(now).unwrap();
        assert_eq!(friends.len(), 4);
        assert_eq!(friends[0].name, "Alice Johnson");
        assert!(friends[0].is_online);
        assert!(!friends[1].is_online);
        assert_eq!(friends[1].last_message_time, Some(now - Duration::hours(1)));
    }

    #[test]
    fn test_conversation_fixture_uses_user_name() {
        let now = Local::now();
        let messages = load_conversation("Jane Doe", now).unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].sender, SEED_CONTACT);
        assert_eq!(messages[1].sender, "Jane Doe");
        assert!(messages[1].is_current_user);
        assert!(messages.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn test_transactions_fixture() {
        let now = Local::now();
        let txs = load_transactions(now).unwrap();
        assert_eq!(txs.len(), 5);
        let ages: Vec<String> = txs.iter().map(|t| relative_time(&t.date, &now)).collect();
        assert_eq!(ages, vec!["2h ago", "5h ago", "Yesterday", "2 days ago", "3 days ago"]);
        assert_eq!(txs[2].status, TransactionStatus::Pending);
        assert_eq!(txs[4].status, TransactionStatus::Failed);
        assert_eq!(txs[1].kind, TransactionKind::Received);
    }

    #[test]
    fn test_account_summary_fixture() {
        let summary = load_account_summary().unwrap();
        assert_eq!(format_usd(summary.balance_cents), "$2,450.00");
        assert_eq!(format_usd(summary.received_today_cents), "$125.50");
        assert_eq!(format_usd(summary.sent_today_cents), "$89.75");
        assert_eq!(summary.total_transactions, 12);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = ensure_unique_ids("test", ["1", "2", "1"].into_iter()).unwrap_err();
        assert!(matches!(err, FixtureError::DuplicateId { ref id, .. } if id == "1"));
    }

    #[test]
    fn test_malformed_fixture() {
        let err = parse::<Vec<FriendRecord>>("broken", "[{\"id\": 1}]").unwrap_err();
        assert!(err.to_string().starts_with("malformed fixture broken"));
    }
}
