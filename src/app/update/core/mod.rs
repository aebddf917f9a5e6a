mod reducer;
mod runtime;

use super::super::messages::Message;
use super::super::state::{App, SETTLE_TICK_MS};
use iced::event;
use iced::time;
use iced::{Subscription, Task};
use std::time::Duration;

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime::runtime_event_to_message)];

        // Only tick while a settle deadline is outstanding; closing the reader
        // clears it, which drops this subscription.
        if app.overlay.next_deadline().is_some() {
            subscriptions.push(
                time::every(Duration::from_millis(SETTLE_TICK_MS)).map(|_| Message::Tick),
            );
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
