// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use peniko::kurbo::Size;
use peniko::Color;
use rich_text::{
    AnyFont, AttributedDocument, Attachment, Attributes, Error, FontResolver, StyleKey,
    OBJECT_REPLACEMENT,
};

use crate::{
    Change, ColorTarget, EditorConfig, EditorDelegate, FontSizeStep, Notification,
    NotificationQueue, PendingTypingStyle, Selection, StyleToggleController, ToolbarCommand,
    ToolbarState,
};

/// Opaque representation of a generation.
///
/// Obtained from [`RichTextEditor::generation`].
// The generations are only compared, so wrapping is fine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation(u32);

impl Generation {
    /// Make it not what it currently is.
    pub(crate) fn nudge(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Host measurement of the laid out document.
pub trait SizeEstimator {
    /// The size `document` needs when laid out.
    fn estimate(&self, document: &AttributedDocument) -> Size;
}

impl<F: Fn(&AttributedDocument) -> Size> SizeEstimator for F {
    fn estimate(&self, document: &AttributedDocument) -> Size {
        self(document)
    }
}

/// An image chosen by the host's picker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageInfo {
    /// Host identifier for the image data.
    pub id: u64,
    /// Natural size of the image.
    pub size: Size,
}

/// Something only the host can do, requested by a toolbar command.
///
/// The host answers through [`RichTextEditor::color_picked`] or
/// [`RichTextEditor::image_picked`], passing `None` if the user cancelled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostRequest {
    /// Show a color picker.
    PickColor {
        /// Where the picked color goes.
        target: ColorTarget,
        /// The color currently shown on the toolbar.
        current: Color,
    },
    /// Show an image picker.
    PickImage,
    /// Dismiss the keyboard and end editing.
    DismissKeyboard,
}

/// One rich text editing session.
///
/// Owns the document, the selection and the style controller. Host events go in through the
/// methods here; resulting events for the host are queued and handed out by
/// [`drain_notifications`](Self::drain_notifications), once per host tick.
pub struct RichTextEditor {
    document: AttributedDocument,
    selection: Selection,
    controller: StyleToggleController,
    config: EditorConfig,
    notifications: NotificationQueue,
    editing: bool,
    last_estimate: Option<Size>,
    estimator: Option<Box<dyn SizeEstimator>>,
    fonts: Box<dyn FontResolver>,
    generation: Generation,
}

impl fmt::Debug for RichTextEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RichTextEditor")
            .field("document", &self.document)
            .field("selection", &self.selection)
            .field("controller", &self.controller)
            .field("editing", &self.editing)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl RichTextEditor {
    /// Start a session on `document` with the caret at its end.
    pub fn new(mut document: AttributedDocument, config: EditorConfig) -> Self {
        document.normalize_fonts();
        if document.is_empty() {
            document.set_alignment(config.alignment);
        }
        let mut controller = StyleToggleController::new(&config);
        let selection = Selection::caret(document.len());
        controller.reseed(&document, selection.start);
        Self {
            document,
            selection,
            controller,
            config,
            notifications: NotificationQueue::new(),
            editing: false,
            last_estimate: None,
            estimator: None,
            fonts: Box::new(AnyFont),
            generation: Generation(1),
        }
    }

    /// Report size estimates from `estimator` whenever the document changes.
    #[must_use]
    pub fn with_size_estimator(mut self, estimator: impl SizeEstimator + 'static) -> Self {
        self.estimator = Some(Box::new(estimator));
        self
    }

    /// Check font family changes against `resolver`.
    #[must_use]
    pub fn with_font_resolver(mut self, resolver: impl FontResolver + 'static) -> Self {
        self.fonts = Box::new(resolver);
        self
    }

    /// The document.
    pub fn document(&self) -> &AttributedDocument {
        &self.document
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The style text typed at the caret will carry.
    pub fn typing_style(&self) -> &PendingTypingStyle {
        self.controller.typing_style()
    }

    /// Returns `true` between [`begin_editing`](Self::begin_editing) and
    /// [`end_editing`](Self::end_editing).
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Get the current `Generation` of the document, to decide whether to redraw.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Events waiting for the next drain.
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// The placeholder text and its color, if it should be shown instead of the document.
    pub fn placeholder(&self) -> Option<(&str, Color)> {
        (!self.editing && self.document.is_empty())
            .then(|| (self.config.placeholder.as_str(), self.config.hint_color))
    }

    /// What the toolbar should show for the current selection.
    pub fn toolbar_state(&self) -> ToolbarState {
        let alignment = self.document.alignment();
        if !self.selection.is_caret() {
            if let Ok(merged) = self.document.merged_attributes(self.selection.range()) {
                return ToolbarState::from_attributes(&merged, alignment, &self.config);
            }
        }
        ToolbarState::from_typing_style(self.controller.typing_style(), alignment)
    }

    /// Deliver queued events to `delegate`. Returns how many were delivered.
    pub fn drain_notifications(&mut self, delegate: &mut dyn EditorDelegate) -> usize {
        self.notifications.drain_into(delegate)
    }

    // --- MARK: Host events ---

    /// The host started editing. Hides the placeholder.
    pub fn begin_editing(&mut self) {
        if self.editing {
            return;
        }
        self.editing = true;
        log::debug!("editing started");
        self.queue_selection();
    }

    /// The host stopped editing. Queues a commit if the document has text.
    pub fn end_editing(&mut self) {
        if !self.editing {
            return;
        }
        self.editing = false;
        log::debug!("editing ended");
        if !self.document.is_empty() {
            self.notifications
                .push(Notification::Commit(self.document.clone()));
        }
    }

    /// Move the selection.
    ///
    /// Moving the caret re-seeds the typing style from the text before it. Setting the same
    /// selection again does nothing, so pending caret toggles survive.
    pub fn set_selection(&mut self, selection: Selection) -> Result<(), Error> {
        self.document.range(selection.range())?;
        if selection == self.selection {
            return Ok(());
        }
        self.selection = selection;
        if selection.is_caret() {
            self.controller.reseed(&self.document, selection.start);
        }
        self.queue_selection();
        Ok(())
    }

    /// Type `text`, replacing the selection.
    ///
    /// At a caret the text takes the pending typing style. Replacing a range continues the
    /// style of the first replaced character.
    pub fn insert_text(&mut self, text: &str) -> Result<(), Error> {
        let range = self.selection.range();
        let attributes = if self.selection.is_caret() {
            self.controller.typing_style().to_attributes()
        } else {
            match self.document.attributes_at(range.start) {
                Some(attrs) => attrs.clone(),
                None => self.controller.typing_style().to_attributes(),
            }
        };
        let inserted = self.document.replace(range, text, attributes)?;
        let replaced = !self.selection.is_caret();
        self.selection = Selection::caret(inserted.end());
        if replaced {
            self.controller.reseed(&self.document, self.selection.start);
        }
        self.content_changed();
        Ok(())
    }

    /// Delete the selection, or the character before the caret.
    pub fn delete_backward(&mut self) -> Result<(), Error> {
        let range = if self.selection.is_caret() {
            let caret = self.selection.start;
            self.document.range(caret..caret)?;
            match self.document.as_str()[..caret].chars().next_back() {
                Some(c) => caret - c.len_utf8()..caret,
                None => return Ok(()),
            }
        } else {
            self.selection.range()
        };
        self.document.delete(range.clone())?;
        self.selection = Selection::caret(range.start);
        self.controller.reseed(&self.document, range.start);
        self.content_changed();
        Ok(())
    }

    /// Toggle an on/off style over the selection.
    pub fn toggle(&mut self, key: StyleKey) -> Result<(), Error> {
        let change = self
            .controller
            .toggle(&mut self.document, self.selection, key)?;
        self.apply(change);
        Ok(())
    }

    /// Step the font size of the selection.
    pub fn step_font_size(&mut self, step: FontSizeStep) -> Result<(), Error> {
        let change = self
            .controller
            .step_font_size(&mut self.document, self.selection, step)?;
        self.apply(change);
        Ok(())
    }

    /// Advance the paragraph alignment.
    pub fn cycle_alignment(&mut self) {
        let change = self.controller.cycle_alignment(&mut self.document);
        self.apply(change);
    }

    /// Switch the font family of the selection.
    pub fn set_font_family(&mut self, family: &str) -> Result<(), Error> {
        let change = self.controller.set_font_family(
            &mut self.document,
            self.selection,
            family,
            &*self.fonts,
        )?;
        self.apply(change);
        Ok(())
    }

    /// Answer a [`HostRequest::PickColor`]. `None` means the picker was cancelled.
    pub fn color_picked(&mut self, target: ColorTarget, color: Option<Color>) -> Result<(), Error> {
        let Some(color) = color else {
            log::debug!("{target:?} color pick cancelled");
            return Ok(());
        };
        let change =
            self.controller
                .set_color(&mut self.document, self.selection, target, color)?;
        self.apply(change);
        Ok(())
    }

    /// Answer a [`HostRequest::PickImage`]. `None` means the picker was cancelled.
    ///
    /// The image is appended to the end of the document, scaled to fit
    /// [`EditorConfig::max_image_size`].
    pub fn image_picked(&mut self, image: Option<ImageInfo>) -> Result<(), Error> {
        let Some(image) = image else {
            log::debug!("image pick cancelled");
            return Ok(());
        };
        let attachment = Attachment::fitted(image.id, image.size, self.config.max_image_size);
        let attributes = Attributes {
            attachment: Some(attachment),
            ..Attributes::default()
        };
        let mut buf = [0; 4];
        let end = self.document.len();
        self.document
            .insert(end, OBJECT_REPLACEMENT.encode_utf8(&mut buf), attributes)?;
        log::debug!("inserted image {} at {end}", image.id);
        self.content_changed();
        Ok(())
    }

    /// Run a toolbar command.
    ///
    /// Commands the editor can finish itself return `None`. The others return what the host
    /// needs to do.
    pub fn perform(&mut self, command: ToolbarCommand) -> Result<Option<HostRequest>, Error> {
        let key = match command {
            ToolbarCommand::Bold => StyleKey::Bold,
            ToolbarCommand::Italic => StyleKey::Italic,
            ToolbarCommand::Underline => StyleKey::Underline,
            ToolbarCommand::Strikethrough => StyleKey::Strikethrough,
            ToolbarCommand::Superscript => StyleKey::Superscript,
            ToolbarCommand::Subscript => StyleKey::Subscript,
            ToolbarCommand::IncreaseFontSize => {
                self.step_font_size(FontSizeStep::Increase)?;
                return Ok(None);
            }
            ToolbarCommand::DecreaseFontSize => {
                self.step_font_size(FontSizeStep::Decrease)?;
                return Ok(None);
            }
            ToolbarCommand::AlignText => {
                self.cycle_alignment();
                return Ok(None);
            }
            ToolbarCommand::SelectColor => {
                return Ok(Some(HostRequest::PickColor {
                    target: ColorTarget::Foreground,
                    current: self.toolbar_state().color,
                }));
            }
            ToolbarCommand::SelectBackground => {
                return Ok(Some(HostRequest::PickColor {
                    target: ColorTarget::Background,
                    current: self.toolbar_state().background,
                }));
            }
            ToolbarCommand::InsertImage => return Ok(Some(HostRequest::PickImage)),
            ToolbarCommand::DismissKeyboard => return Ok(Some(HostRequest::DismissKeyboard)),
        };
        self.toggle(key)?;
        Ok(None)
    }

    fn apply(&mut self, change: Change) {
        match change {
            Change::None => {}
            Change::TypingStyle => self.queue_selection(),
            Change::Alignment => self.content_changed(),
            Change::Document(range) => {
                if let Ok(runs) = self.document.enumerate(range.clone()) {
                    let runs = runs.map(|(range, attrs)| (range, attrs.clone())).collect();
                    self.notifications
                        .push(Notification::AttributesChanged { range, runs });
                }
                self.content_changed();
            }
        }
    }

    fn content_changed(&mut self) {
        self.generation.nudge();
        self.notifications
            .push(Notification::BufferChanged(self.document.clone()));
        if let Some(estimator) = &self.estimator {
            let size = estimator.estimate(&self.document);
            if self.last_estimate != Some(size) {
                self.last_estimate = Some(size);
                self.notifications.push(Notification::SizeEstimate(size));
            }
        }
        self.queue_selection();
    }

    fn queue_selection(&mut self) {
        self.notifications.push(Notification::SelectionChanged {
            selection: self.selection,
            toolbar: self.toolbar_state(),
        });
    }
}
