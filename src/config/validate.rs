use anyhow::{Result, bail};
use axum::http::HeaderValue;

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    }

    if cfg.database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if cfg.database.min_idle > cfg.database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            cfg.database.min_idle, cfg.database.max_connections
        ));
    }

    for origin in &cfg.cors.allowed_origins {
        if origin.trim().is_empty() || HeaderValue::from_str(origin).is_err() {
            errors.push(format!("cors.allowed_origins contains an invalid origin '{origin}'"));
        }
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::AppConfig;

    #[test]
    fn defaults_are_valid() {
        validate(&AppConfig::default()).expect("default config should validate");
    }

    #[test]
    fn reports_every_problem_at_once() {
        let mut cfg = AppConfig::default();
        cfg.general.host = "  ".to_string();
        cfg.database.url = String::new();
        cfg.database.max_connections = 2;
        cfg.database.min_idle = 5;

        let err = validate(&cfg).expect_err("config should be rejected");
        let message = err.to_string();

        assert!(message.contains("general.host"));
        assert!(message.contains("database.url"));
        assert!(message.contains("database.min_idle (5)"));
    }

    #[test]
    fn rejects_unusable_origin() {
        let mut cfg = AppConfig::default();
        cfg.cors.allowed_origins = vec!["http://ok.example".to_string(), "bad\norigin".to_string()];

        let err = validate(&cfg).expect_err("origin with newline should be rejected");
        assert!(err.to_string().contains("bad\norigin"));
    }
}
