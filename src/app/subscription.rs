// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The animation tick only runs while a fade is actually in flight, so
//! an idle magnifier costs nothing.

use super::{App, Message};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval between animation ticks while a fade is animating.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

pub fn subscription(app: &App) -> Subscription<Message> {
    let ticks = if app.zoomer.is_animating() {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    };

    let events = event::listen_with(|event, _status, _window| {
        if let event::Event::Window(window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }
        None
    });

    Subscription::batch([ticks, events])
}
