//! Writer for Qt Linguist `.ts` files.
//!
//! Output follows lupdate's layout so rewritten files diff cleanly against files
//! lupdate produced: `<context>` is not indented, everything below it is indented by
//! four spaces per level, and control characters become `<byte value="xNN"/>`.
//! Locations are always written in absolute form. Raw elements kept by the reader
//! are written back verbatim.

use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context as _, Result};
use quick_xml::escape::escape;

use crate::core::{Catalog, Message, Translation};

const INDENT: &str = "    ";

/// Serialize a catalog to `.ts` XML.
pub fn write_ts(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    let _ = write!(out, "<TS version=\"{}\"", escape(catalog.version.as_str()));
    if let Some(language) = &catalog.language {
        let _ = write!(out, " language=\"{}\"", escape(language.as_str()));
    }
    if let Some(source_language) = &catalog.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", escape(source_language.as_str()));
    }
    out.push_str(">\n");
    write_raw(&mut out, 0, &catalog.extras);

    for context in &catalog.contexts {
        out.push_str("<context>\n");
        write_element(&mut out, 1, "name", &context.name);
        if let Some(comment) = &context.comment {
            write_element(&mut out, 1, "comment", comment);
        }
        write_raw(&mut out, 1, &context.extras);
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

/// Serialize a catalog and write it to `path`.
pub fn write_ts_file(path: &Path, catalog: &Catalog) -> Result<()> {
    fs::write(path, write_ts(catalog))
        .with_context(|| format!("Failed to write TS file: {:?}", path))
}

fn write_message(out: &mut String, message: &Message) {
    indent(out, 1);
    out.push_str("<message");
    if let Some(id) = &message.id {
        let _ = write!(out, " id=\"{}\"", escape(id.as_str()));
    }
    if message.numerus {
        out.push_str(" numerus=\"yes\"");
    }
    out.push_str(">\n");

    for location in &message.locations {
        indent(out, 2);
        let _ = write!(out, "<location filename=\"{}\"", escape(location.filename.as_str()));
        if let Some(line) = location.line {
            let _ = write!(out, " line=\"{}\"", line);
        }
        out.push_str("/>\n");
    }

    write_element(out, 2, "source", &message.source);
    write_optional(out, "oldsource", message.old_source.as_deref());
    write_optional(out, "comment", message.comment.as_deref());
    write_optional(out, "oldcomment", message.old_comment.as_deref());
    write_optional(out, "extracomment", message.extra_comment.as_deref());
    write_optional(out, "translatorcomment", message.translator_comment.as_deref());
    write_translation(out, &message.translation, message.numerus);
    write_raw(out, 2, &message.extras);

    indent(out, 1);
    out.push_str("</message>\n");
}

fn write_translation(out: &mut String, translation: &Translation, numerus: bool) {
    indent(out, 2);
    out.push_str("<translation");
    if let Some(state) = translation.state.as_attr() {
        let _ = write!(out, " type=\"{}\"", state);
    }

    if numerus && !translation.forms.is_empty() {
        out.push_str(">\n");
        for (i, form) in translation.forms.iter().enumerate() {
            match translation.form_variants.get(i) {
                Some(variants) if !variants.is_empty() => {
                    write_variants(out, 3, "numerusform", variants);
                }
                _ => write_element(out, 3, "numerusform", form),
            }
        }
        indent(out, 2);
    } else if !translation.variants.is_empty() {
        out.push_str(" variants=\"yes\">\n");
        for variant in &translation.variants {
            write_element(out, 3, "lengthvariant", variant);
        }
        indent(out, 2);
    } else {
        out.push('>');
        out.push_str(&protect(&translation.text));
    }
    out.push_str("</translation>\n");
}

/// `<name variants="yes">` holding one `<lengthvariant>` per entry.
fn write_variants(out: &mut String, level: usize, name: &str, variants: &[String]) {
    indent(out, level);
    let _ = writeln!(out, "<{name} variants=\"yes\">");
    for variant in variants {
        write_element(out, level + 1, "lengthvariant", variant);
    }
    indent(out, level);
    let _ = writeln!(out, "</{name}>");
}

fn write_raw(out: &mut String, level: usize, elements: &[String]) {
    for raw in elements {
        indent(out, level);
        out.push_str(raw);
        out.push('\n');
    }
}

fn write_optional(out: &mut String, name: &str, text: Option<&str>) {
    if let Some(text) = text {
        write_element(out, 2, name, text);
    }
}

fn write_element(out: &mut String, level: usize, name: &str, text: &str) {
    indent(out, level);
    let _ = writeln!(out, "<{name}>{}</{name}>", protect(text));
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

/// Escape text content: XML entities plus `<byte>` for control characters.
fn protect(text: &str) -> String {
    let escaped = escape(text);
    if !escaped.chars().any(is_control) {
        return escaped.into_owned();
    }

    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        if is_control(c) {
            let _ = write!(out, "<byte value=\"x{:x}\"/>", c as u32);
        } else {
            out.push(c);
        }
    }
    out
}

fn is_control(c: char) -> bool {
    (c as u32) < 0x20 && !matches!(c, '\n' | '\r' | '\t')
}
