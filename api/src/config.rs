use std::env;

use anyhow::Context;
use chrono::Duration;

use crate::app::ADJUSTMENT_COOLDOWN_SECS;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Minimum time between two salary adjustments of the same department
    pub adjustment_cooldown_secs: i64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: parse_port(env::var("PORT").ok()),
            adjustment_cooldown_secs: parse_cooldown(env::var("ADJUSTMENT_COOLDOWN_SECS").ok()),
        })
    }

    pub fn adjustment_cooldown(&self) -> Duration {
        Duration::seconds(self.adjustment_cooldown_secs)
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|p| p.parse().ok()).unwrap_or(8080)
}

/// Positive number of seconds, falling back to the default cooldown
fn parse_cooldown(raw: Option<String>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(ADJUSTMENT_COOLDOWN_SECS)
}
