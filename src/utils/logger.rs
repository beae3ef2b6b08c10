use chrono::Utc;
use log::info;
use std::io::Write;

/// Logger setup for the ChatPay client
pub struct ChatPayLogger;

impl ChatPayLogger {
    /// Initialises `env_logger`. `RUST_LOG` wins over `default_filter` when set.
    pub fn init(default_filter: &str) -> anyhow::Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] [{}] [{}:{}] {}",
                    Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .try_init()?;

        info!("ChatPay logger initialized");
        Ok(())
    }
}
