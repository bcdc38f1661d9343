// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use peniko::color::palette::css;

use crate::{
    AttributedDocument, Attributes, DecorationStyle, ErrorKind, FontDescriptor, FontWeight,
    StyleKey, StyleProperty, SymbolicTraits,
};

fn hello_world() -> AttributedDocument {
    AttributedDocument::new(
        "Hello World",
        Attributes::with_font(FontDescriptor::body(17.0)),
    )
}

fn ranges(doc: &AttributedDocument) -> Vec<Range<usize>> {
    doc.runs().iter().map(|run| run.range()).collect()
}

#[test]
fn set_attribute_only_touches_the_range() {
    let mut doc = hello_world();
    doc.set_attribute(0..5, StyleProperty::Bold).unwrap();
    assert_eq!(ranges(&doc), [0..5, 5..11]);
    assert!(doc.runs()[0].attributes().has(StyleKey::Bold));
    assert_eq!(
        doc.runs()[1].attributes(),
        &Attributes::with_font(FontDescriptor::body(17.0))
    );
}

#[test]
fn uniformity_breaks_after_sub_run_mutation() {
    let mut doc = hello_world();
    assert!(doc.attributes_uniform(0..11, StyleKey::Underline).unwrap());
    assert!(doc.attributes_uniform(0..11, StyleKey::Bold).unwrap());

    doc.set_attribute(3..4, StyleProperty::Underline(DecorationStyle::Single))
        .unwrap();
    assert!(!doc.attributes_uniform(0..11, StyleKey::Underline).unwrap());
    assert!(doc.attributes_uniform(3..4, StyleKey::Underline).unwrap());
    assert!(doc.attributes_uniform(5..11, StyleKey::Underline).unwrap());
}

#[test]
fn all_carry_requires_every_run() {
    let mut doc = hello_world();
    assert!(!doc.all_carry(0..11, StyleKey::Strikethrough).unwrap());
    doc.set_attribute(0..11, StyleProperty::Strikethrough(DecorationStyle::Double))
        .unwrap();
    assert!(doc.all_carry(0..11, StyleKey::Strikethrough).unwrap());
    doc.remove_attribute(6..7, StyleKey::Strikethrough).unwrap();
    assert!(!doc.all_carry(0..11, StyleKey::Strikethrough).unwrap());
    assert!(!doc.all_carry(3..3, StyleKey::Strikethrough).unwrap());
}

#[test]
fn out_of_bounds_aborts_without_mutation() {
    let mut doc = hello_world();
    let before = doc.clone();
    let err = doc.set_attribute(4..12, StyleProperty::Italic).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    assert_eq!(doc, before);
    assert_eq!(
        doc.attributes_uniform(0..20, StyleKey::Bold)
            .unwrap_err()
            .kind(),
        ErrorKind::OutOfBounds
    );
    assert!(doc.enumerate(11..12).is_err());
}

#[test]
fn enumerate_clips_runs() {
    let mut doc = hello_world();
    doc.set_attribute(2..8, StyleProperty::ForegroundColor(css::RED))
        .unwrap();
    let seen: Vec<_> = doc
        .enumerate(4..10)
        .unwrap()
        .map(|(range, attrs)| (range, attrs.foreground))
        .collect();
    assert_eq!(seen, [(4..8, Some(css::RED)), (8..10, None)]);
}

#[test]
fn merged_attributes_prefer_later_runs() {
    let mut doc = hello_world();
    doc.set_attribute(0..3, StyleProperty::ForegroundColor(css::RED))
        .unwrap();
    doc.set_attribute(6..11, StyleProperty::ForegroundColor(css::BLUE))
        .unwrap();
    doc.set_attribute(0..2, StyleProperty::Underline(DecorationStyle::Single))
        .unwrap();
    let merged = doc.merged_attributes(0..11).unwrap();
    assert_eq!(merged.foreground, Some(css::BLUE));
    assert_eq!(merged.underline, Some(DecorationStyle::Single));
}

#[test]
fn normalize_fonts_fixes_light_bold() {
    let light_bold = FontDescriptor {
        weight: FontWeight::LIGHT,
        traits: SymbolicTraits::BOLD,
        ..FontDescriptor::body(17.0)
    };
    let mut doc = AttributedDocument::from_runs(
        "abcdef",
        [
            (0..3, Attributes::with_font(light_bold)),
            (3..6, Attributes::with_font(FontDescriptor::body(17.0))),
        ],
    )
    .unwrap();
    doc.normalize_fonts();
    let font = doc.runs()[0].attributes().font.as_ref().unwrap();
    assert_eq!(font.weight, FontWeight::BOLD);
    let font = doc.runs()[1].attributes().font.as_ref().unwrap();
    assert_eq!(font.weight, FontWeight::REGULAR);
}

#[test]
fn insert_keeps_partition_and_text() {
    let mut doc = hello_world();
    let mut bold = Attributes::with_font(FontDescriptor::body(17.0));
    bold.insert(StyleProperty::Bold);
    doc.insert(5, "X", bold).unwrap();
    assert_eq!(doc.as_str(), "HelloX World");
    assert_eq!(ranges(&doc), [0..5, 5..6, 6..12]);
    assert!(doc.attributes_at(5).unwrap().has(StyleKey::Bold));
    assert!(!doc.attributes_at(6).unwrap().has(StyleKey::Bold));
}
