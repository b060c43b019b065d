// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::zoomer;
use std::path::PathBuf;
use std::time::Instant;

/// Values parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub lang: Option<String>,
    pub file_path: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// widget messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Zoomer(zoomer::Message),
    /// Periodic tick driving fade animations.
    Tick(Instant),
    /// Trigger the open file dialog.
    OpenFileDialog,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// Result of asynchronous image decoding.
    ImageLoaded(Result<ImageData, Error>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
}
