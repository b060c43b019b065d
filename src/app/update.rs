// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::media;
use crate::ui::zoomer;
use iced::Task;
use std::path::PathBuf;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Zoomer(msg) => {
            match app.zoomer.handle(msg) {
                zoomer::Effect::ModeChanged(_) => {
                    // A stale load notice is no longer interesting once
                    // the user is interacting with the widget.
                    app.notice_key = None;
                }
                zoomer::Effect::None => {}
            }
            Task::none()
        }
        Message::Tick(now) => {
            let _ = app.zoomer.handle(zoomer::Message::Tick(now));
            Task::none()
        }
        Message::OpenFileDialog => Task::perform(pick_image(), Message::OpenFileDialogResult),
        Message::OpenFileDialogResult(Some(path)) => load(app, path),
        Message::OpenFileDialogResult(None) => Task::none(),
        Message::ImageLoaded(Ok(data)) => {
            app.loading = false;
            app.notice_key = None;
            app.zoomer.set_media(data);
            Task::none()
        }
        Message::ImageLoaded(Err(err)) => {
            app.loading = false;
            app.notice_key = Some(err.i18n_key());
            Task::none()
        }
        Message::FileDropped(path) => {
            if media::is_supported_image(&path) {
                load(app, path)
            } else {
                app.notice_key = Some("error-load-image");
                Task::none()
            }
        }
    }
}

fn load(app: &mut App, path: PathBuf) -> Task<Message> {
    app.loading = true;
    Task::perform(media::load_image_async(path), Message::ImageLoaded)
}

async fn pick_image() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .add_filter("Images", media::IMAGE_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
