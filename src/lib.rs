pub mod config;
pub mod convert;
pub mod domain;
pub mod storage;
pub mod utils;
pub mod web;

pub use config::{CliConfig, TomlConfig};
pub use storage::LocalStorage;
pub use utils::error::{AppError, Result};
pub use web::server::{build_router, AppState};
