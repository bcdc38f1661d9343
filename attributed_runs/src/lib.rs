// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Runs is a Rust crate which stores a UTF-8 text buffer partitioned into
//! contiguous, non-overlapping runs, each carrying one attribute value.
//!
//! Unlike a span list, where attributes may overlap and are resolved later, the runs here
//! always cover `0..len` exactly once. Mutations over a range first split the runs at the range
//! boundaries, so runs outside the range are never touched.
//!
//! ## Example
//!
//! ```
//! use attributed_runs::AttributedRuns;
//!
//! let mut text = AttributedRuns::new("Hello World", false);
//! let hello = text.range(0..5).unwrap();
//! text.update(hello, |bold| *bold = true).unwrap();
//!
//! let runs: Vec<_> = text.runs().iter().map(|run| (run.range(), *run.attributes())).collect();
//! assert_eq!(runs, [(0..5, true), (5..11, false)]);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward
//!   compatibility.
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
#![no_std]

extern crate alloc;

mod attributed_runs;
mod error;
mod run;
mod text_range;

pub use crate::attributed_runs::{AttributedRuns, RunsIn};
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::run::Run;
pub use crate::text_range::TextRange;
