//! Reader for Qt Linguist `.ts` files.
//!
//! Walks the document with a pull parser and builds a [`Catalog`]. Relative
//! `<location>` entries written by lupdate (`line="+3"`, `filename` omitted) are
//! resolved to absolute locations while reading. Elements the model has no field
//! for (`<dependencies>`, `<userdata>`, `<extra-*>`) are kept as raw XML.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context as _, Result};
use quick_xml::{
    Reader,
    events::{BytesStart, BytesText, Event},
};
use tracing::trace;

use crate::core::{Catalog, Context, Location, Message, Translation, TranslationState};

#[derive(Debug, thiserror::Error)]
pub enum TsParseError {
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("no <TS> root element found")]
    MissingRoot,

    #[error("unexpected root element <{name}>, expected <TS>")]
    UnexpectedRoot { name: String },

    #[error("unexpected end of file inside <{element}>")]
    UnexpectedEof { element: &'static str },

    #[error("invalid location line \"{value}\" at line {line}")]
    InvalidLine { value: String, line: usize },

    #[error("invalid byte value \"{value}\" at line {line}")]
    InvalidByte { value: String, line: usize },
}

/// Parse a `.ts` document from a string.
pub fn parse_ts_str(content: &str) -> Result<Catalog, TsParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    TsReader::new(content).parse_document()
}

/// Read and parse a `.ts` file.
pub fn parse_ts_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read TS file: {:?}", path))?;
    let catalog = parse_ts_str(&content)
        .with_context(|| format!("Failed to parse TS file: {:?}", path))?;
    trace!(
        path = %path.display(),
        contexts = catalog.contexts.len(),
        messages = catalog.message_count(),
        "parsed TS file"
    );
    Ok(catalog)
}

/// Build an index of line start byte offsets for O(log n) line lookups.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Tracks the state lupdate's relative locations are resolved against.
///
/// Reset for every `<context>`.
#[derive(Debug, Default)]
struct LocationTracker {
    current_file: String,
    current_lines: HashMap<String, i64>,
}

impl LocationTracker {
    /// Resolve a `<location>`; on failure returns the offending `line` value.
    fn resolve(
        &mut self,
        filename: Option<String>,
        line: Option<&str>,
    ) -> Result<Location, String> {
        if let Some(filename) = filename.filter(|f| !f.is_empty()) {
            self.current_file = filename;
        }
        let filename = self.current_file.clone();

        let Some(value) = line.filter(|l| !l.is_empty()) else {
            return Ok(Location::new(filename, None));
        };

        let number: i64 = value
            .strip_prefix('+')
            .unwrap_or(value)
            .parse()
            .map_err(|_| value.to_string())?;

        if value.starts_with('+') || value.starts_with('-') {
            let current = self.current_lines.entry(filename.clone()).or_insert(0);
            *current += number;
            let line = *current;
            Ok(Location::new(filename, Some(line)))
        } else {
            Ok(Location::new(filename, Some(number)))
        }
    }
}

struct TsReader<'a> {
    content: &'a str,
    reader: Reader<&'a [u8]>,
    line_index: Vec<usize>,
}

impl<'a> TsReader<'a> {
    fn new(content: &'a str) -> Self {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(false);
        Self {
            content,
            reader,
            line_index: build_line_index(content),
        }
    }

    fn position(&self) -> usize {
        usize::try_from(self.reader.buffer_position()).unwrap_or(usize::MAX)
    }

    fn line_at(&self, offset: usize) -> usize {
        offset_to_line(&self.line_index, offset)
    }

    fn current_line(&self) -> usize {
        self.line_at(self.position())
    }

    fn xml_error<E: Into<quick_xml::Error>>(&self, err: E) -> TsParseError {
        TsParseError::Xml {
            position: usize::try_from(self.reader.error_position()).unwrap_or(usize::MAX),
            source: err.into(),
        }
    }

    fn next(&mut self) -> Result<Event<'a>, TsParseError> {
        self.reader.read_event().map_err(|err| self.xml_error(err))
    }

    fn skip(&mut self, start: &BytesStart<'a>) -> Result<(), TsParseError> {
        self.reader
            .read_to_end(start.name())
            .map(|_| ())
            .map_err(|err| self.xml_error(err))
    }

    /// Consume an element the model does not know and return its source text.
    ///
    /// `start` is the reader position before the element's start tag.
    fn raw_element(
        &mut self,
        start: usize,
        element: &BytesStart<'a>,
        empty: bool,
    ) -> Result<String, TsParseError> {
        if !empty {
            self.skip(element)?;
        }
        let raw = self.content.get(start..self.position()).unwrap_or_default();
        Ok(raw.to_string())
    }

    fn attr(&self, element: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, TsParseError> {
        for attr in element.attributes() {
            let attr = attr.map_err(|err| self.xml_error(err))?;
            if attr.key.as_ref() == name {
                let value = attr.unescape_value().map_err(|err| self.xml_error(err))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    fn unescape(&self, text: &BytesText<'_>) -> Result<String, TsParseError> {
        text.unescape()
            .map(|t| t.into_owned())
            .map_err(|err| self.xml_error(err))
    }

    /// Decode `<byte value="x1b"/>`, lupdate's escape for control characters.
    fn byte(&self, element: &BytesStart<'_>) -> Result<char, TsParseError> {
        let value = self.attr(element, b"value")?.unwrap_or_default();
        let code = match value.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => value.parse::<u32>().ok(),
        };
        code.and_then(char::from_u32)
            .ok_or_else(|| TsParseError::InvalidByte {
                value,
                line: self.current_line(),
            })
    }

    fn parse_document(&mut self) -> Result<Catalog, TsParseError> {
        loop {
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"TS" => {
                    let mut catalog = self.catalog_header(&e)?;
                    self.parse_ts_body(&mut catalog)?;
                    return Ok(catalog);
                }
                Event::Empty(e) if e.name().as_ref() == b"TS" => {
                    return self.catalog_header(&e);
                }
                Event::Start(e) | Event::Empty(e) => {
                    return Err(TsParseError::UnexpectedRoot {
                        name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    });
                }
                Event::Eof => return Err(TsParseError::MissingRoot),
                // XML declaration, doctype, comments, whitespace
                _ => {}
            }
        }
    }

    fn catalog_header(&self, root: &BytesStart<'_>) -> Result<Catalog, TsParseError> {
        let mut catalog = Catalog::default();
        if let Some(version) = self.attr(root, b"version")? {
            catalog.version = version;
        }
        catalog.language = self.attr(root, b"language")?.filter(|l| !l.is_empty());
        catalog.source_language = self
            .attr(root, b"sourcelanguage")?
            .filter(|l| !l.is_empty());
        Ok(catalog)
    }

    fn parse_ts_body(&mut self, catalog: &mut Catalog) -> Result<(), TsParseError> {
        loop {
            let start = self.position();
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"context" => {
                    catalog.contexts.push(self.parse_context()?);
                }
                Event::Start(e) => catalog.extras.push(self.raw_element(start, &e, false)?),
                Event::Empty(e) => catalog.extras.push(self.raw_element(start, &e, true)?),
                Event::End(e) if e.name().as_ref() == b"TS" => return Ok(()),
                Event::Eof => return Err(TsParseError::UnexpectedEof { element: "TS" }),
                _ => {}
            }
        }
    }

    fn parse_context(&mut self) -> Result<Context, TsParseError> {
        let mut context = Context::default();
        let mut tracker = LocationTracker::default();
        loop {
            let start = self.position();
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"name" => context.name = self.read_text(b"name")?,
                    b"comment" => context.comment = non_empty(self.read_text(b"comment")?),
                    b"message" => {
                        let line = self.line_at(start);
                        let message = self.parse_message(&e, line, &mut tracker)?;
                        context.messages.push(message);
                    }
                    _ => context.extras.push(self.raw_element(start, &e, false)?),
                },
                Event::Empty(e) => context.extras.push(self.raw_element(start, &e, true)?),
                Event::End(e) if e.name().as_ref() == b"context" => return Ok(context),
                Event::Eof => return Err(TsParseError::UnexpectedEof { element: "context" }),
                _ => {}
            }
        }
    }

    fn parse_message(
        &mut self,
        start: &BytesStart<'a>,
        line: usize,
        tracker: &mut LocationTracker,
    ) -> Result<Message, TsParseError> {
        let mut message = Message {
            id: self.attr(start, b"id")?.filter(|id| !id.is_empty()),
            numerus: self.attr(start, b"numerus")?.as_deref() == Some("yes"),
            line,
            ..Default::default()
        };

        loop {
            let start = self.position();
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"source" => message.source = self.read_text(b"source")?,
                    b"oldsource" => message.old_source = non_empty(self.read_text(b"oldsource")?),
                    b"comment" => message.comment = non_empty(self.read_text(b"comment")?),
                    b"oldcomment" => {
                        message.old_comment = non_empty(self.read_text(b"oldcomment")?)
                    }
                    b"extracomment" => {
                        message.extra_comment = non_empty(self.read_text(b"extracomment")?)
                    }
                    b"translatorcomment" => {
                        message.translator_comment =
                            non_empty(self.read_text(b"translatorcomment")?)
                    }
                    b"translation" => message.translation = self.parse_translation(&e)?,
                    b"location" => {
                        let location = self.parse_location(&e, tracker)?;
                        message.locations.push(location);
                        self.skip(&e)?;
                    }
                    _ => message.extras.push(self.raw_element(start, &e, false)?),
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"location" => {
                        let location = self.parse_location(&e, tracker)?;
                        message.locations.push(location);
                    }
                    b"translation" => {
                        message.translation = Translation {
                            state: self.translation_state(&e)?,
                            ..Default::default()
                        };
                    }
                    _ => message.extras.push(self.raw_element(start, &e, true)?),
                },
                Event::End(e) if e.name().as_ref() == b"message" => return Ok(message),
                Event::Eof => return Err(TsParseError::UnexpectedEof { element: "message" }),
                _ => {}
            }
        }
    }

    fn parse_location(
        &self,
        element: &BytesStart<'_>,
        tracker: &mut LocationTracker,
    ) -> Result<Location, TsParseError> {
        let filename = self.attr(element, b"filename")?;
        let line = self.attr(element, b"line")?;
        tracker
            .resolve(filename, line.as_deref())
            .map_err(|value| TsParseError::InvalidLine {
                value,
                line: self.current_line(),
            })
    }

    fn translation_state(
        &self,
        element: &BytesStart<'_>,
    ) -> Result<TranslationState, TsParseError> {
        Ok(self
            .attr(element, b"type")?
            .as_deref()
            .and_then(TranslationState::from_attr)
            .unwrap_or_default())
    }

    fn parse_translation(&mut self, start: &BytesStart<'a>) -> Result<Translation, TsParseError> {
        let mut translation = Translation {
            state: self.translation_state(start)?,
            ..Default::default()
        };
        let mut text = String::new();

        loop {
            match self.next()? {
                Event::Text(t) => text.push_str(&self.unescape(&t)?),
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
                Event::Start(e) => match e.name().as_ref() {
                    b"numerusform" => {
                        let (text, variants) = self.read_variants(b"numerusform")?;
                        translation.forms.push(variants.first().cloned().unwrap_or(text));
                        translation.form_variants.push(variants);
                    }
                    b"lengthvariant" => {
                        translation.variants.push(self.read_text(b"lengthvariant")?)
                    }
                    _ => self.skip(&e)?,
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"numerusform" => {
                        translation.forms.push(String::new());
                        translation.form_variants.push(Vec::new());
                    }
                    b"lengthvariant" => translation.variants.push(String::new()),
                    b"byte" => text.push(self.byte(&e)?),
                    _ => {}
                },
                Event::End(e) if e.name().as_ref() == b"translation" => break,
                Event::Eof => {
                    return Err(TsParseError::UnexpectedEof {
                        element: "translation",
                    });
                }
                _ => {}
            }
        }

        if translation.form_variants.iter().all(Vec::is_empty) {
            translation.form_variants.clear();
        }
        if let Some(first) = translation.variants.first() {
            translation.text = first.clone();
        } else if translation.forms.is_empty() {
            translation.text = text;
        }
        Ok(translation)
    }

    /// Read the text content of the element that was just opened.
    ///
    /// When the element holds `<lengthvariant>` children, the first one wins.
    fn read_text(&mut self, end: &'static [u8]) -> Result<String, TsParseError> {
        let (text, variants) = self.read_variants(end)?;
        Ok(variants.into_iter().next().unwrap_or(text))
    }

    /// Read the direct text and the `<lengthvariant>` children of the element that
    /// was just opened.
    fn read_variants(&mut self, end: &'static [u8]) -> Result<(String, Vec<String>), TsParseError> {
        let mut text = String::new();
        let mut variants = Vec::new();

        loop {
            match self.next()? {
                Event::Text(t) => text.push_str(&self.unescape(&t)?),
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
                Event::Empty(e) => match e.name().as_ref() {
                    b"byte" => text.push(self.byte(&e)?),
                    b"lengthvariant" => variants.push(String::new()),
                    _ => {}
                },
                Event::Start(e) if e.name().as_ref() == b"lengthvariant" => {
                    variants.push(self.read_text(b"lengthvariant")?);
                }
                Event::Start(e) => self.skip(&e)?,
                Event::End(e) if e.name().as_ref() == end => break,
                Event::Eof => {
                    return Err(TsParseError::UnexpectedEof {
                        element: element_name(end),
                    });
                }
                _ => {}
            }
        }

        Ok((text, variants))
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

fn element_name(name: &'static [u8]) -> &'static str {
    std::str::from_utf8(name).unwrap_or("element")
}
