// SPDX-License-Identifier: MPL-2.0
//! `iced_zoomer` is a magnifying-glass image zoom widget built with the
//! Iced GUI framework.
//!
//! A thumbnail of the image tracks the pointer with a lens showing a
//! magnified crop; double-click toggles between the magnifier and a
//! full-size view. The crate demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_zoomer/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
