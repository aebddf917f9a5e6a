use crate::config::AppConfig;
use folio_core::catalog::literary_works;
use folio_core::{FontFamily, LiteraryWork, ReaderOverlay, ReadingSettings, SystemClock};
use iced::font::Family;
use iced::{Font, Task};

use super::messages::Message;

/// Interval at which a pending settle deadline is checked.
pub(crate) const SETTLE_TICK_MS: u64 = 50;
pub(crate) const CARD_SPACING_PX: f32 = 14.0;
pub(crate) const READER_MAX_WIDTH_PX: f32 = 760.0;

/// Core application state.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) catalog: &'static [LiteraryWork],
    pub(super) overlay: ReaderOverlay<SystemClock>,
    /// Id of the work most recently opened in the reader.
    pub(super) last_opened: Option<String>,
}

impl App {
    pub(super) fn bootstrap(config: AppConfig) -> (App, Task<Message>) {
        let overlay = ReaderOverlay::new(SystemClock, config.settle_delay());
        let app = App {
            catalog: literary_works(),
            overlay,
            last_opened: None,
            config,
        };
        tracing::info!(
            works = app.catalog.len(),
            theme = %app.config.theme,
            "Initialized app state"
        );
        (app, Task::none())
    }

    /// Settings a freshly opened reader starts from.
    pub(super) fn reading_defaults(&self) -> ReadingSettings {
        self.config.default_reading_settings()
    }

    pub(super) fn is_last_opened(&self, work: &LiteraryWork) -> bool {
        self.last_opened.as_deref() == Some(work.id.as_str())
    }
}

pub(super) fn reader_font(family: FontFamily) -> Font {
    let family = match family {
        FontFamily::Serif => Family::Serif,
        FontFamily::Sans => Family::SansSerif,
    };
    Font {
        family,
        ..Font::DEFAULT
    }
}
