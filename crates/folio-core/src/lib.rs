//! UI-agnostic core of the portfolio reader.
//!
//! The shell owns rendering; everything with behavior worth testing lives
//! here: the literary catalog, per-work content cleanup, paragraph splitting,
//! the debounced reading-settings store and the reader overlay state machine.

pub mod catalog;
pub mod clock;
pub mod debounce;
pub mod formatter;
pub mod overlay;
pub mod paragraphs;
pub mod settings;

pub use catalog::{LiteraryWork, WorkKind};
pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::{DEFAULT_SETTLE_DELAY, Debounced, settle_delay_from_millis};
pub use overlay::{LoadTicket, OverlayView, PreparedWork, ReaderBody, ReaderOverlay};
pub use settings::{FontFamily, FontSize, LineHeight, ReadingSettings, SettingsChange};
