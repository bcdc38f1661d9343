// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich text styles and an attributed document built on [`attributed_runs`].
//!
//! - [`StyleKey`] names the closed set of inline styles a toolbar can toggle, and
//!   [`StyleProperty`] carries one of them together with its value.
//! - [`Attributes`] is the typed attribute record stored on every run. Bold and italic are
//!   [symbolic traits](SymbolicTraits) of the run's [`FontDescriptor`]; superscript and subscript
//!   are derived from the sign of the baseline offset.
//! - [`AttributedDocument`] answers per-key questions over a range (is it uniform, does every run
//!   carry it) and rewrites runs without touching text outside the range.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text and must lie on character boundaries.
//!
//! ## Example
//!
//! ```
//! use rich_text::{AttributedDocument, Attributes, FontDescriptor, StyleKey, StyleProperty};
//!
//! let base = Attributes::with_font(FontDescriptor::body(17.0));
//! let mut doc = AttributedDocument::new("Hello World", base);
//!
//! doc.set_attribute(0..5, StyleProperty::Bold).unwrap();
//! assert!(doc.all_carry(0..5, StyleKey::Bold).unwrap());
//! assert!(!doc.attributes_uniform(0..11, StyleKey::Bold).unwrap());
//! assert_eq!(doc.runs().len(), 2);
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

mod attributes;
mod document;
mod font;
mod property;
mod values;

#[cfg(test)]
mod tests;

pub use attributed_runs::{Error, ErrorKind, Run, RunsIn, TextRange};
pub use peniko::Color;

pub use attributes::Attributes;
pub use document::AttributedDocument;
pub use font::{AnyFont, FontDescriptor, FontResolver, FontWeight, SymbolicTraits, SYSTEM_FAMILY};
pub use property::{StyleKey, StyleProperty};
pub use values::{
    Alignment, Attachment, DecorationStyle, Script, CLEAR_COLOR, DEFAULT_FONT_SIZE, LABEL_COLOR,
    OBJECT_REPLACEMENT, SCRIPT_SCALE,
};
