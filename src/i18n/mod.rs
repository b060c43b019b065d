// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system: `.ftl` bundles embedded in the
//! binary, locale resolution from CLI, config, or OS settings, and a
//! `tr` lookup for user-facing strings.

pub mod fluent;
