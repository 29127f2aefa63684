//! Configuration model loaded from external sources.

use std::sync::{PoisonError, RwLock};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_WEBHOOK_URL: &str = "https://example.com/webhooks/signup";
const DEFAULT_APP_TITLE: &str = "WHATICKET PRO";
const DEFAULT_APP_SUBTITLE: &str = "Bem-vindo ao Futuro da Automação!";
const DEFAULT_APP_DESCRIPTION: &str =
    "Junte-se a milhares de empresas que já transformaram seus processos";
const DEFAULT_FREE_TRIAL_DAYS: &str = "7";

#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Effective configuration shared across handlers.
///
/// Every field resolves its source independently: environment variable,
/// then config file key, then built-in default.
pub struct AppConfig {
    pub port: u16,
    pub webhook_url: String,
    pub app_title: String,
    pub app_subtitle: String,
    pub app_description: String,
    pub free_trial_days: String,
    pub redirect_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
            app_subtitle: DEFAULT_APP_SUBTITLE.to_string(),
            app_description: DEFAULT_APP_DESCRIPTION.to_string(),
            free_trial_days: DEFAULT_FREE_TRIAL_DAYS.to_string(),
            redirect_url: String::new(),
        }
    }
}

impl AppConfig {
    /// Resolve the effective configuration. Never fails: a broken config
    /// file degrades to environment-plus-defaults resolution, and a broken
    /// environment degrades to the built-in defaults.
    pub fn load(config_file: &str) -> Self {
        match Self::resolve(config_file, true) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "Error loading config file {config_file}: {err}. Using environment and defaults."
                );
                Self::resolve(config_file, false).unwrap_or_else(|err| {
                    log::warn!("Error resolving environment configuration: {err}. Using defaults.");
                    Self::default()
                })
            }
        }
    }

    fn resolve(config_file: &str, use_file: bool) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("webhook_url", DEFAULT_WEBHOOK_URL)?
            .set_default("app_title", DEFAULT_APP_TITLE)?
            .set_default("app_subtitle", DEFAULT_APP_SUBTITLE)?
            .set_default("app_description", DEFAULT_APP_DESCRIPTION)?
            .set_default("free_trial_days", DEFAULT_FREE_TRIAL_DAYS)?
            .set_default("redirect_url", "")?;

        if use_file {
            builder = builder.add_source(File::with_name(config_file).required(false));
        }

        builder
            // PORT, WEBHOOK_URL, APP_TITLE etc.; empty values do not override.
            .add_source(Environment::default().ignore_empty(true))
            .build()?
            .try_deserialize()
    }
}

/// Process-wide configuration holder supporting reload without restart.
#[derive(Debug)]
pub struct SharedConfig {
    config_file: String,
    inner: RwLock<AppConfig>,
}

impl SharedConfig {
    pub fn new(config_file: impl Into<String>) -> Self {
        let config_file = config_file.into();
        let config = AppConfig::load(&config_file);
        Self {
            config_file,
            inner: RwLock::new(config),
        }
    }

    /// Snapshot of the currently effective configuration.
    pub fn current(&self) -> AppConfig {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Re-resolve configuration and replace the shared copy wholesale.
    ///
    /// Unlike [`AppConfig::load`], a config file that exists but cannot be
    /// parsed is reported back to the caller so an operator learns about a
    /// broken edit; the previous configuration stays in effect.
    pub fn reload(&self) -> Result<AppConfig, ConfigError> {
        let fresh = AppConfig::resolve(&self.config_file, true)?;
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = fresh.clone();
        Ok(fresh)
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::path::Path;
    use std::sync::Mutex;

    use tempfile::tempdir;

    use super::*;

    // Serializes tests that read or mutate process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 7] = [
        "PORT",
        "WEBHOOK_URL",
        "APP_TITLE",
        "APP_SUBTITLE",
        "APP_DESCRIPTION",
        "FREE_TRIAL_DAYS",
        "REDIRECT_URL",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            unsafe { env::remove_var(var) };
        }
    }

    fn write_config(dir: &Path, contents: &str) -> String {
        let path = dir.join("config.yaml");
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn missing_file_yields_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_env();

        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").to_string_lossy().into_owned();
        let config = AppConfig::load(&path);

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.free_trial_days, "7");
        assert!(config.redirect_url.is_empty());
    }

    #[test]
    fn file_overrides_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_env();

        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "APP_TITLE: Painel\nPORT: 8080\nREDIRECT_URL: https://app.example.com/login\n",
        );
        let config = AppConfig::load(&path);

        assert_eq!(config.app_title, "Painel");
        assert_eq!(config.port, 8080);
        assert_eq!(config.redirect_url, "https://app.example.com/login");
        // Untouched fields keep their defaults.
        assert_eq!(config.free_trial_days, "7");
    }

    #[test]
    fn env_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_env();

        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "APP_TITLE: FromFile\nAPP_SUBTITLE: Sub\n");

        unsafe { env::set_var("APP_TITLE", "Foo") };
        let config = AppConfig::load(&path);
        unsafe { env::remove_var("APP_TITLE") };

        assert_eq!(config.app_title, "Foo");
        assert_eq!(config.app_subtitle, "Sub");
    }

    #[test]
    fn empty_env_var_does_not_override() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_env();

        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "APP_TITLE: FromFile\n");

        unsafe { env::set_var("APP_TITLE", "") };
        let config = AppConfig::load(&path);
        unsafe { env::remove_var("APP_TITLE") };

        assert_eq!(config.app_title, "FromFile");
    }

    #[test]
    fn malformed_file_falls_back() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_env();

        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "{{{ not yaml");
        let config = AppConfig::load(&path);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reload_picks_up_file_changes() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_env();

        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "APP_TITLE: Antes\n");
        let shared = SharedConfig::new(path.clone());
        assert_eq!(shared.current().app_title, "Antes");

        fs::write(&path, "APP_TITLE: Depois\n").unwrap();
        shared.reload().unwrap();
        assert_eq!(shared.current().app_title, "Depois");
    }

    #[test]
    fn reload_reports_parse_error_and_keeps_previous() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_env();

        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "APP_TITLE: Antes\n");
        let shared = SharedConfig::new(path.clone());

        fs::write(&path, "{{{ not yaml").unwrap();
        assert!(shared.reload().is_err());
        assert_eq!(shared.current().app_title, "Antes");
    }
}
