use std::{fs, path::Path, str::FromStr};

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing::warn;

pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_bind: String,
    pub session_idle_ttl_seconds: i64,
    pub session_sweep_interval_seconds: u64,
    pub session_cookie_name: String,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8501".into(),
            session_idle_ttl_seconds: 3600,
            session_sweep_interval_seconds: 60,
            session_cookie_name: "rag_tutorial_session".into(),
            max_body_bytes: 16 * 1024,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    bind_addr: Option<String>,
    session_idle_ttl_seconds: Option<i64>,
    session_sweep_interval_seconds: Option<u64>,
    session_cookie_name: Option<String>,
    max_body_bytes: Option<usize>,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if Path::new(SETTINGS_FILE).exists() {
        let raw = fs::read_to_string(SETTINGS_FILE)
            .with_context(|| format!("failed to read {SETTINGS_FILE}"))?;
        apply_file_settings(&mut settings, &raw)
            .with_context(|| format!("failed to parse {SETTINGS_FILE}"))?;
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings.idle_ttl()?;
    Ok(settings)
}

impl Settings {
    /// Idle timeout as a duration. Must be positive and representable.
    pub fn idle_ttl(&self) -> anyhow::Result<chrono::Duration> {
        if self.session_idle_ttl_seconds <= 0 {
            bail!(
                "session_idle_ttl_seconds must be positive, got {}",
                self.session_idle_ttl_seconds
            );
        }
        chrono::Duration::try_seconds(self.session_idle_ttl_seconds).with_context(|| {
            format!(
                "session_idle_ttl_seconds {} is out of range",
                self.session_idle_ttl_seconds
            )
        })
    }
}

fn apply_file_settings(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.bind_addr {
        settings.server_bind = v;
    }
    if let Some(v) = file_cfg.session_idle_ttl_seconds {
        settings.session_idle_ttl_seconds = v;
    }
    if let Some(v) = file_cfg.session_sweep_interval_seconds {
        settings.session_sweep_interval_seconds = v;
    }
    if let Some(v) = file_cfg.session_cookie_name {
        settings.session_cookie_name = v;
    }
    if let Some(v) = file_cfg.max_body_bytes {
        settings.max_body_bytes = v;
    }
    Ok(())
}

/// Environment wins over `server.toml`. `APP__*` keys win over the legacy names.
fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = parsed(&var, "APP__SESSION_IDLE_TTL_SECONDS") {
        settings.session_idle_ttl_seconds = v;
    }
    if let Some(v) = parsed(&var, "APP__SESSION_SWEEP_INTERVAL_SECONDS") {
        settings.session_sweep_interval_seconds = v;
    }
    if let Some(v) = var("APP__SESSION_COOKIE_NAME") {
        settings.session_cookie_name = v;
    }
    if let Some(v) = parsed(&var, "APP__MAX_BODY_BYTES") {
        settings.max_body_bytes = v;
    }
}

fn parsed<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = var(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable setting");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
