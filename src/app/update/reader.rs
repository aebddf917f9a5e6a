use super::super::state::App;
use super::Effect;
use folio_core::catalog::find_work;
use folio_core::{
    FontFamily, FontSize, LineHeight, LoadTicket, OverlayView, PreparedWork, SettingsChange,
};
use tracing::{debug, warn};

impl App {
    pub(super) fn reader_visible(&self) -> bool {
        !matches!(self.overlay.view(), OverlayView::Hidden)
    }

    pub(super) fn handle_open_work(&mut self, id: &str, effects: &mut Vec<Effect>) {
        let Some(work) = find_work(id) else {
            warn!(%id, "Requested work is not in the catalog");
            return;
        };
        self.last_opened = Some(work.id.clone());
        let ticket = self.overlay.open(work.clone(), self.reading_defaults());
        effects.push(Effect::PrepareWork {
            ticket,
            work: work.clone(),
        });
    }

    pub(super) fn handle_reader_prepared(&mut self, ticket: LoadTicket, prepared: PreparedWork) {
        if !self.overlay.finish_loading(ticket, prepared) {
            debug!(?ticket, "Reader preparation arrived after the session moved on");
        }
    }

    pub(super) fn handle_close_reader(&mut self) {
        self.overlay.close();
    }

    pub(super) fn handle_font_size_changed(&mut self, size: FontSize) {
        self.overlay.update_settings(SettingsChange::FontSize(size));
    }

    pub(super) fn handle_line_height_changed(&mut self, height: LineHeight) {
        self.overlay.update_settings(SettingsChange::LineHeight(height));
    }

    pub(super) fn handle_font_family_changed(&mut self, family: FontFamily) {
        self.overlay.update_settings(SettingsChange::FontFamily(family));
    }

    pub(super) fn handle_reset_reading_settings(&mut self) {
        self.overlay.update_settings(SettingsChange::Reset);
    }

    pub(super) fn handle_tick(&mut self) {
        if self.overlay.poll() {
            if let Some(session) = self.overlay.session() {
                debug!(
                    work = %session.work().id,
                    font_size = %session.settled_settings().font_size,
                    "Re-rendering reader with settled settings"
                );
            }
        }
    }
}
