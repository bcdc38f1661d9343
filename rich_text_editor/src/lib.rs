// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolbar driven style editing over a [`rich_text::AttributedDocument`].
//!
//! - [`StyleToggleController`] decides and applies toggles. At a caret it only changes the
//!   [`PendingTypingStyle`]; over a range it inspects the covered runs and rewrites them.
//! - [`ToolbarState`] is derived from the selection after every change and drives button
//!   highlighting.
//! - [`RichTextEditor`] is one editing session. It queues [`Notification`]s for the host and
//!   delivers them in a batch to an [`EditorDelegate`].
//!
//! ## Example
//!
//! ```
//! use rich_text::{AttributedDocument, Attributes, FontDescriptor, StyleKey};
//! use rich_text_editor::{EditorConfig, RichTextEditor, Selection};
//!
//! let base = Attributes::with_font(FontDescriptor::body(17.0));
//! let doc = AttributedDocument::new("Hello World", base);
//! let mut editor = RichTextEditor::new(doc, EditorConfig::default());
//!
//! editor.set_selection(Selection::new(0, 5)).unwrap();
//! editor.toggle(StyleKey::Bold).unwrap();
//! assert!(editor.toolbar_state().bold);
//! assert!(!editor.document().attributes_at(6).unwrap().has(StyleKey::Bold));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod controller;
mod editor;
mod notify;
mod selection;
mod toolbar;
mod typing_style;


pub use config::{EditorConfig, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use controller::{stepped_size, Change, ColorTarget, FontSizeStep, StyleToggleController};
pub use editor::{Generation, HostRequest, ImageInfo, RichTextEditor, SizeEstimator};
pub use notify::{EditorDelegate, Notification, NotificationQueue};
pub use selection::Selection;
pub use toolbar::{ButtonState, ToolbarCommand, ToolbarState, LIGHT_CARET_THRESHOLD};
pub use typing_style::PendingTypingStyle;
