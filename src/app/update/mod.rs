use folio_core::{LiteraryWork, LoadTicket};

mod core;
mod reader;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    PrepareWork {
        ticket: LoadTicket,
        work: LiteraryWork,
    },
    QuitSafely,
}
