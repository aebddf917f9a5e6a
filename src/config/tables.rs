use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use folio_core::{FontFamily, FontSize, LineHeight};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    reader: ReaderConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            font_size: tables.reader.font_size,
            line_height: tables.reader.line_height,
            font_family: tables.reader.font_family,
            settle_delay_ms: tables.reader.settle_delay_ms,
            window_width: tables.window.width,
            window_height: tables.window.height,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
            },
            reader: ReaderConfig {
                font_size: config.font_size,
                line_height: config.line_height,
                font_family: config.font_family,
                settle_delay_ms: config.settle_delay_ms,
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ReaderConfig {
    #[serde(default = "defaults::default_font_size")]
    font_size: FontSize,
    #[serde(default = "defaults::default_line_height")]
    line_height: LineHeight,
    #[serde(default = "defaults::default_font_family")]
    font_family: FontFamily,
    #[serde(default = "defaults::default_settle_delay_ms")]
    settle_delay_ms: i64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            font_size: defaults::default_font_size(),
            line_height: defaults::default_line_height(),
            font_family: defaults::default_font_family(),
            settle_delay_ms: defaults::default_settle_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
