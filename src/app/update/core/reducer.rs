use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use iced::keyboard::{Key, Modifiers, key::Named};
use tracing::info;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::OpenWork(id) => self.handle_open_work(&id, &mut effects),
            Message::ReaderPrepared { ticket, prepared } => {
                self.handle_reader_prepared(ticket, prepared)
            }
            Message::CloseReader => self.handle_close_reader(),
            Message::FontSizeChanged(size) => self.handle_font_size_changed(size),
            Message::LineHeightChanged(height) => self.handle_line_height_changed(height),
            Message::FontFamilyChanged(family) => self.handle_font_family_changed(family),
            Message::ResetReadingSettings => self.handle_reset_reading_settings(),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::Tick => self.handle_tick(),
        }

        effects
    }

    fn handle_toggle_theme(&mut self) {
        let next = match self.config.theme {
            crate::config::ThemeMode::Night => crate::config::ThemeMode::Day,
            crate::config::ThemeMode::Day => crate::config::ThemeMode::Night,
        };
        info!(theme = %next, "Toggled theme");
        self.config.theme = next;
    }

    fn shortcut_message_for_key(&self, key: Key, modifiers: Modifiers) -> Option<Message> {
        match key.as_ref() {
            Key::Named(Named::Escape) if self.reader_visible() => Some(Message::CloseReader),
            Key::Character("q") if modifiers.command() => Some(Message::SafeQuit),
            _ => None,
        }
    }
}
