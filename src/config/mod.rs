pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "img2mesh")]
#[command(about = "Image upload server with a depth-to-mesh conversion toolkit")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub bind_addr: String,

    #[arg(long, default_value = "./media")]
    pub media_root: String,

    #[arg(long, default_value = "10")]
    pub max_upload_mb: usize,

    #[arg(long, value_delimiter = ',', default_value = "jpg,jpeg,png")]
    pub allowed_extensions: Vec<String>,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    fn media_root(&self) -> &str {
        &self.media_root
    }

    fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }

    fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_bind_addr("bind_addr", &self.bind_addr)?;
        validation::validate_path("media_root", &self.media_root)?;
        validation::validate_positive_number("max_upload_mb", self.max_upload_mb, 1)?;
        for extension in &self.allowed_extensions {
            validation::validate_non_empty_string("allowed_extensions", extension)?;
        }
        Ok(())
    }
}
