use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables =
        toml::from_str(contents).context("failed to parse config tables")?;
    Ok(tables.into())
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string(&ConfigTables::from(config)).context("failed to serialize config tables")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};
    use folio_core::{FontFamily, FontSize, LineHeight};
    use std::time::Duration;

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.settle_delay(), Duration::from_millis(300));
    }

    #[test]
    fn reader_table_sets_session_defaults() {
        let config = parse_config(
            r#"
            [appearance]
            theme = "day"

            [reader]
            font_size = "extra-large"
            line_height = "relaxed"
            font_family = "sans"
            settle_delay_ms = 120

            [logging]
            log_level = "debug"
            "#,
        )
        .expect("config parses");

        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.log_level, LogLevel::Debug);
        let settings = config.default_reading_settings();
        assert_eq!(settings.font_size, FontSize::ExtraLarge);
        assert_eq!(settings.line_height, LineHeight::Relaxed);
        assert_eq!(settings.font_family, FontFamily::Sans);
        assert_eq!(config.settle_delay(), Duration::from_millis(120));
    }

    #[test]
    fn negative_settle_delay_is_clamped() {
        let config = parse_config("[reader]\nsettle_delay_ms = -50\n").expect("config parses");
        assert_eq!(config.settle_delay(), Duration::ZERO);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        assert!(parse_config("[reader]\nfont_size = \"huge\"\n").is_err());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = AppConfig::default();
        config.font_family = FontFamily::Sans;
        config.window_width = 900.0;
        let text = serialize_config(&config).expect("config serializes");
        assert_eq!(parse_config(&text).expect("config parses"), config);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "folio-reader-missing-config-{}.toml",
            std::process::id()
        ));
        assert_eq!(load_config(&path), AppConfig::default());
    }
}
