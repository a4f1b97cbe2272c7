use anyhow::Result;
use taskcards::config::Config;
use taskcards::logger::Logger;
use taskcards::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(path);
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            eprintln!("\n💡 Run with --init-config to write a fresh configuration file.");
            return Ok(());
        }
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(config.logging.level_filter()?)?;

    // Run the TUI application
    ui::run_app(&config, logger).await?;

    Ok(())
}
