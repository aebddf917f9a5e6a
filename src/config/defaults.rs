use folio_core::{FontFamily, FontSize, LineHeight};

pub(crate) fn default_font_size() -> FontSize {
    FontSize::Medium
}

pub(crate) fn default_line_height() -> LineHeight {
    LineHeight::Normal
}

pub(crate) fn default_font_family() -> FontFamily {
    FontFamily::Serif
}

pub(crate) fn default_settle_delay_ms() -> i64 {
    300
}

pub(crate) fn default_window_width() -> f32 {
    1100.0
}

pub(crate) fn default_window_height() -> f32 {
    780.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
