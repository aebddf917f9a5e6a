use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use folio_core::overlay::prepare_work;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::window;
use tracing::{debug, info};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::PrepareWork { ticket, work } => {
                debug!(work = %work.id, ?ticket, "Preparing reader content");
                Task::perform(async move { prepare_work(&work) }, move |prepared| {
                    Message::ReaderPrepared { ticket, prepared }
                })
            }
            Effect::QuitSafely => {
                self.overlay.close();
                info!("Quitting");
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
