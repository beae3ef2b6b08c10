use std::time::Duration;
use chrono::{DateTime, Local};
use log::info;
use crate::client::models::payment::PaymentRequest;
use crate::utils::format::format_usd;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub id: String,
    /// Ticket of the submission this receipt answers.
    pub submission: u64,
    pub recipient: String,
    pub amount_cents: u64,
    pub processed_at: DateTime<Local>,
}

/// Fake payment processor. Every submission waits `delay` and then succeeds.
#[derive(Debug, Clone)]
pub struct PaymentService {
    delay: Duration,
}

impl PaymentService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn submit(self, submission: u64, request: PaymentRequest) -> PaymentReceipt {
        info!(
            "Processing payment #{} of {} to {} (simulated, {} ms)",
            submission,
            format_usd(request.amount_cents),
            request.recipient,
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        let receipt = PaymentReceipt {
            id: uuid::Uuid::new_v4().to_string(),
            submission,
            recipient: request.recipient,
            amount_cents: request.amount_cents,
            processed_at: Local::now(),
        };
        info!("Payment {} completed", receipt.id);
        receipt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn request() -> PaymentRequest {
        PaymentRequest {
            recipient: "bob@example.com".to_string(),
            amount_cents: 4200,
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_submit_waits_for_delay_then_succeeds() {
        let svc = PaymentService::new(Duration::from_millis(50));
        let started = Instant::now();
        let receipt = svc.submit(3, request()).await;
        assert!(started.elapsed() >= Duration::from_millis(50));
        assert_eq!(receipt.submission, 3);
        assert_eq!(receipt.recipient, "bob@example.com");
        assert_eq!(receipt.amount_cents, 4200);
        assert!(!receipt.id.is_empty());
    }

    #[tokio::test]
    async fn test_receipts_have_distinct_ids() {
        let svc = PaymentService::new(Duration::ZERO);
        let a = svc.clone().submit(1, request()).await;
        let b = svc.submit(2, request()).await;
        assert_ne!(a.id, b.id);
    }
}
