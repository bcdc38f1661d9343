// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred delivery of editor events to the host.

use core::ops::Range;
use std::collections::VecDeque;

use peniko::kurbo::Size;
use rich_text::{AttributedDocument, Attributes};

use crate::{Selection, ToolbarState};

/// Receives editor events. Every method has an empty default.
pub trait EditorDelegate {
    /// Runs inside `range` were restyled; `runs` holds the new attributes, clipped to `range`.
    fn on_attribute_change(&mut self, range: Range<usize>, runs: &[(Range<usize>, Attributes)]) {
        let _ = (range, runs);
    }

    /// The estimated content size changed.
    fn on_size_estimate(&mut self, size: Size) {
        let _ = size;
    }

    /// The selection or the toolbar state changed.
    fn on_selection_changed(&mut self, selection: Selection, toolbar: &ToolbarState) {
        let _ = (selection, toolbar);
    }

    /// The document changed. The host should store this as its bound value.
    fn on_buffer_changed(&mut self, document: &AttributedDocument) {
        let _ = document;
    }

    /// Editing ended with a non-empty document.
    fn on_commit(&mut self, document: &AttributedDocument) {
        let _ = document;
    }
}

/// A queued editor event. Each carries a snapshot taken when it was queued.
#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    /// See [`EditorDelegate::on_attribute_change`].
    AttributesChanged {
        /// The restyled range.
        range: Range<usize>,
        /// Clipped runs inside `range`.
        runs: Vec<(Range<usize>, Attributes)>,
    },
    /// See [`EditorDelegate::on_size_estimate`].
    SizeEstimate(Size),
    /// See [`EditorDelegate::on_selection_changed`].
    SelectionChanged {
        /// The selection.
        selection: Selection,
        /// The derived toolbar state.
        toolbar: ToolbarState,
    },
    /// See [`EditorDelegate::on_buffer_changed`].
    BufferChanged(AttributedDocument),
    /// See [`EditorDelegate::on_commit`].
    Commit(AttributedDocument),
}

impl Notification {
    /// Hand this event to `delegate`.
    pub fn deliver(&self, delegate: &mut dyn EditorDelegate) {
        match self {
            Self::AttributesChanged { range, runs } => {
                delegate.on_attribute_change(range.clone(), runs);
            }
            Self::SizeEstimate(size) => delegate.on_size_estimate(*size),
            Self::SelectionChanged { selection, toolbar } => {
                delegate.on_selection_changed(*selection, toolbar);
            }
            Self::BufferChanged(document) => delegate.on_buffer_changed(document),
            Self::Commit(document) => delegate.on_commit(document),
        }
    }
}

/// A FIFO of events waiting for the host's next tick.
///
/// Events are queued while the editor mutates its state and delivered in one batch, so the
/// host never observes the editor halfway through an operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `notification` behind everything already queued.
    pub fn push(&mut self, notification: Notification) {
        log::trace!("queued {notification:?}");
        self.pending.push_back(notification);
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// The queued events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    /// Deliver every queued event to `delegate`, oldest first, and empty the queue.
    ///
    /// Returns the number of events delivered. Events queued by the delegate while draining
    /// wait for the next drain.
    pub fn drain_into(&mut self, delegate: &mut dyn EditorDelegate) -> usize {
        let batch = core::mem::take(&mut self.pending);
        let count = batch.len();
        for notification in batch {
            notification.deliver(delegate);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use peniko::kurbo::Size;
    use rich_text::{AttributedDocument, Attributes};

    use super::{EditorDelegate, Notification, NotificationQueue};

    #[derive(Default)]
    struct Log(Vec<&'static str>);

    impl EditorDelegate for Log {
        fn on_size_estimate(&mut self, _size: Size) {
            self.0.push("size");
        }

        fn on_commit(&mut self, _document: &AttributedDocument) {
            self.0.push("commit");
        }
    }

    #[test]
    fn drains_in_order_once() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::SizeEstimate(Size::new(10.0, 20.0)));
        queue.push(Notification::Commit(AttributedDocument::new(
            "x",
            Attributes::default(),
        )));
        queue.push(Notification::SizeEstimate(Size::new(10.0, 40.0)));
        let mut log = Log::default();
        assert_eq!(queue.drain_into(&mut log), 3);
        assert_eq!(log.0, ["size", "commit", "size"]);
        assert!(queue.is_empty());
        assert_eq!(queue.drain_into(&mut log), 0);
        assert_eq!(log.0.len(), 3);
    }
}
