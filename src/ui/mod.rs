// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens and the zoom widget.

pub mod design_tokens;
pub mod zoomer;
