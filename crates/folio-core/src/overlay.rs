//! Reader overlay state machine.
//!
//! `Closed → Loading → Open → Closed`. Opening hands back a [`LoadTicket`];
//! the host prepares the work off the UI thread with [`prepare_work`] and
//! reports back through [`ReaderOverlay::finish_loading`]. Every open or
//! close bumps the generation, so a preparation that finishes after the user
//! moved on is discarded instead of resurrecting a torn-down session.

use crate::catalog::LiteraryWork;
use crate::clock::Clock;
use crate::debounce::Debounced;
use crate::formatter::format_work;
use crate::paragraphs::ParagraphCache;
use crate::settings::{ReadingSettings, SettingsChange};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Identifies one pending load. Only the most recent ticket is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

/// Content prepared for display.
#[derive(Debug, Clone)]
pub struct PreparedWork {
    pub content: Arc<str>,
}

/// Format `work` for display. Runs off the UI thread.
pub fn prepare_work(work: &LiteraryWork) -> PreparedWork {
    PreparedWork {
        content: Arc::from(format_work(work)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReaderBody {
    /// The work has no full text; show the unavailable notice.
    Placeholder,
    Paragraphs(Arc<[String]>),
}

impl ReaderBody {
    pub fn block_count(&self) -> usize {
        match self {
            ReaderBody::Placeholder => 0,
            ReaderBody::Paragraphs(blocks) => blocks.len(),
        }
    }
}

/// One open reading session. Owns its settings and debounce deadline.
#[derive(Debug)]
pub struct ReaderSession {
    work: LiteraryWork,
    defaults: ReadingSettings,
    settings: Debounced<ReadingSettings>,
    body: ReaderBody,
}

impl ReaderSession {
    pub fn work(&self) -> &LiteraryWork {
        &self.work
    }

    pub fn body(&self) -> &ReaderBody {
        &self.body
    }

    pub fn live_settings(&self) -> ReadingSettings {
        *self.settings.live()
    }

    /// Settings the body should currently be rendered with.
    pub fn settled_settings(&self) -> ReadingSettings {
        *self.settings.settled()
    }
}

#[derive(Debug)]
enum OverlayState {
    Closed,
    Loading {
        ticket: LoadTicket,
        work: LiteraryWork,
        defaults: ReadingSettings,
    },
    Open(ReaderSession),
}

/// Read-only snapshot for the view layer.
#[derive(Debug, Clone, Copy)]
pub enum OverlayView<'a> {
    Hidden,
    Loading {
        work: &'a LiteraryWork,
    },
    Open {
        work: &'a LiteraryWork,
        body: &'a ReaderBody,
        settings: ReadingSettings,
        live_settings: ReadingSettings,
    },
}

pub struct ReaderOverlay<C: Clock> {
    clock: C,
    settle_delay: Duration,
    generation: u64,
    state: OverlayState,
    paragraph_cache: ParagraphCache,
}

impl<C: Clock> ReaderOverlay<C> {
    pub fn new(clock: C, settle_delay: Duration) -> Self {
        Self {
            clock,
            settle_delay,
            generation: 0,
            state: OverlayState::Closed,
            paragraph_cache: ParagraphCache::new(),
        }
    }

    /// Begin a session for `work`, tearing down any current one.
    pub fn open(&mut self, work: LiteraryWork, defaults: ReadingSettings) -> LoadTicket {
        self.teardown();
        self.generation = self.generation.wrapping_add(1);
        let ticket = LoadTicket(self.generation);
        info!(work = %work.id, generation = self.generation, "Opening reader");
        self.state = OverlayState::Loading {
            ticket,
            work,
            defaults,
        };
        ticket
    }

    /// Complete the load identified by `ticket`. Returns whether it applied.
    pub fn finish_loading(&mut self, ticket: LoadTicket, prepared: PreparedWork) -> bool {
        let (work, defaults) = match std::mem::replace(&mut self.state, OverlayState::Closed) {
            OverlayState::Loading {
                ticket: expected,
                work,
                defaults,
            } if expected == ticket => (work, defaults),
            other => {
                warn!(?ticket, generation = self.generation, "Dropping stale reader load");
                self.state = other;
                return false;
            }
        };

        let body = if work.has_full_content() {
            ReaderBody::Paragraphs(self.paragraph_cache.blocks(&prepared.content))
        } else {
            ReaderBody::Placeholder
        };
        debug!(
            work = %work.id,
            blocks = body.block_count(),
            "Reader content ready"
        );
        self.state = OverlayState::Open(ReaderSession {
            work,
            defaults,
            settings: Debounced::new(defaults, self.settle_delay),
            body,
        });
        true
    }

    /// Close the overlay, cancelling any pending load or settle deadline.
    pub fn close(&mut self) {
        if matches!(self.state, OverlayState::Closed) {
            return;
        }
        self.teardown();
        self.generation = self.generation.wrapping_add(1);
        info!(generation = self.generation, "Closed reader");
    }

    /// Apply a settings edit to the live value and restart the settle window.
    pub fn update_settings(&mut self, change: SettingsChange) {
        let now = self.clock.now();
        let OverlayState::Open(session) = &mut self.state else {
            debug!(?change, "Ignoring settings change while reader is not open");
            return;
        };
        let next = session.settings.live().apply(change, session.defaults);
        debug!(?change, ?next, "Reading settings changed");
        session.settings.set(next, now);
    }

    /// Publish settled settings if the window elapsed. Returns whether it did.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        let OverlayState::Open(session) = &mut self.state else {
            return false;
        };
        match session.settings.poll(now) {
            Some(settled) => {
                debug!(?settled, "Reading settings settled");
                true
            }
            None => false,
        }
    }

    /// The pending settle deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.state {
            OverlayState::Open(session) => session.settings.deadline(),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, OverlayState::Loading { .. })
    }

    pub fn session(&self) -> Option<&ReaderSession> {
        match &self.state {
            OverlayState::Open(session) => Some(session),
            _ => None,
        }
    }

    pub fn view(&self) -> OverlayView<'_> {
        match &self.state {
            OverlayState::Closed => OverlayView::Hidden,
            OverlayState::Loading { work, .. } => OverlayView::Loading { work },
            OverlayState::Open(session) => OverlayView::Open {
                work: &session.work,
                body: &session.body,
                settings: session.settled_settings(),
                live_settings: session.live_settings(),
            },
        }
    }

    fn teardown(&mut self) {
        if let OverlayState::Open(session) = &mut self.state {
            session.settings.cancel();
        }
        self.state = OverlayState::Closed;
    }
}
