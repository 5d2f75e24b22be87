use clap::Parser;
use img2mesh::domain::ports::ConfigProvider;
use img2mesh::utils::error::ErrorSeverity;
use img2mesh::utils::{logger, validation::Validate};
use img2mesh::web::server;
use img2mesh::{CliConfig, TomlConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting img2mesh server");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 如果指定了 TOML 配置檔，改用檔案設定
    let config: Arc<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };

            // 驗證配置
            if let Err(e) = file_config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }

            Arc::new(file_config)
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }

            Arc::new(cli.clone())
        }
    };

    tracing::info!("✅ Configuration loaded and validated successfully");
    tracing::info!("📂 Media root: {}", config.media_root());

    match server::run(config).await {
        Ok(()) => {
            tracing::info!("✅ Server shut down cleanly");
        }
        Err(e) => {
            tracing::error!(
                "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
