use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub payment_delay_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
    pub log_clear_ms: u64,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            payment_delay_ms: 2000,
            window_width: 1280.0,
            window_height: 800.0,
            log_clear_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads the process environment. Missing or unparsable values keep their default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            payment_delay_ms: env::var("CHATPAY_PAYMENT_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.payment_delay_ms),
            window_width: env::var("CHATPAY_WINDOW_WIDTH").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.window_width),
            window_height: env::var("CHATPAY_WINDOW_HEIGHT").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.window_height),
            log_clear_ms: env::var("CHATPAY_LOG_CLEAR_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.log_clear_ms),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    pub fn log_clear_delay(&self) -> Duration {
        Duration::from_millis(self.log_clear_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.payment_delay(), Duration::from_millis(2000));
        assert_eq!(cfg.log_clear_delay(), Duration::from_millis(3000));
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn test_from_env_falls_back_on_bad_values() {
        env::set_var("CHATPAY_PAYMENT_DELAY_MS", "abc");
        env::set_var("CHATPAY_WINDOW_WIDTH", "900");
        env::remove_var("CHATPAY_WINDOW_HEIGHT");
        let cfg = ClientConfig::from_env();
        env::remove_var("CHATPAY_PAYMENT_DELAY_MS");
        env::remove_var("CHATPAY_WINDOW_WIDTH");

        assert_eq!(cfg.payment_delay_ms, 2000);
        assert_eq!(cfg.window_width, 900.0);
        assert_eq!(cfg.window_height, 800.0);
    }
}
