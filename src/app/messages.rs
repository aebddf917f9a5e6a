use folio_core::{FontFamily, FontSize, LineHeight, LoadTicket, PreparedWork};
use iced::keyboard::{Key, Modifiers};

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    OpenWork(String),
    ReaderPrepared {
        ticket: LoadTicket,
        prepared: PreparedWork,
    },
    CloseReader,
    FontSizeChanged(FontSize),
    LineHeightChanged(LineHeight),
    FontFamilyChanged(FontFamily),
    ResetReadingSettings,
    ToggleTheme,
    SafeQuit,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Tick,
}
