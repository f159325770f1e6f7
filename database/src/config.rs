use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://avalon.db";

pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: usize,
}

impl DatabaseConfig {
    pub fn from_cli_or_env_or_yaml(cli_arg: Option<String>, yaml_config: Option<String>) -> Self {
        let url = if let Some(arg) = cli_arg {
            arg
        } else if let Ok(env) = std::env::var("DATABASE_URL") {
            env
        } else if let Some(yaml) = yaml_config {
            yaml
        } else {
            DEFAULT_DATABASE_URL.to_string()
        };

        Self { url, pool_size: 4 }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }

    pub async fn create_pool(&self) -> Result<sqlx::SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?.create_if_missing(true);
        // every connection to :memory: opens its own empty database
        let max_connections = if self.is_in_memory() { 1 } else { self.pool_size };
        SqlitePoolOptions::new()
            .max_connections(max_connections as u32)
            .connect_with(options)
            .await
    }
}
