use iced::Application;
use chatpay::client::config::ClientConfig;
use chatpay::client::gui::app::ChatPayApp;
use chatpay::utils::logger::ChatPayLogger;

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    let config = ClientConfig::from_env();
    ChatPayLogger::init(&config.log_level)?;

    let mut settings = iced::Settings::with_flags(config.clone());
    settings.window.size = iced::Size::new(config.window_width, config.window_height);
    ChatPayApp::run(settings)?;
    Ok(())
}
