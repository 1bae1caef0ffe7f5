//! Depth-aware pull reader over quick-xml.
//!
//! Sub-parsers are handed an [`Element`] for the start tag they own and
//! must leave the reader positioned after that element's end tag, either
//! by walking its children with [`TokenReader::children`] or by calling
//! [`TokenReader::skip`].

use std::borrow::Cow;
use std::io::BufRead;
use std::str::FromStr;

use log::trace;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, TmxError};
use crate::types::Colour;

use super::tag::Tag;

/// One step of the token stream.
#[derive(Debug)]
pub enum Token {
    /// A start tag, or a self-closing tag (see [`Element::is_empty`]).
    Start(Element),
    /// An end tag. `depth` is the depth of the element it closes.
    End { depth: usize },
    /// Text, comments, declarations and the like.
    Other,
    Eof,
}

/// A start tag together with its attributes.
#[derive(Debug)]
pub struct Element {
    tag: Tag,
    depth: usize,
    empty: bool,
    position: u64,
    start: BytesStart<'static>,
}

impl Element {
    fn new(start: BytesStart<'static>, depth: usize, empty: bool, position: u64) -> Self {
        Self {
            tag: Tag::from_name(start.name().as_ref()),
            depth,
            empty,
            position,
            start,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Number of enclosing elements; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True for self-closing tags, which have no children and no end tag.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn name(&self) -> Cow<'_, str> {
        match self.tag.name() {
            Some(name) => Cow::Borrowed(name),
            None => String::from_utf8_lossy(self.start.name().into_inner()),
        }
    }

    /// Look up an attribute by name.
    pub fn attr(&self, key: &str) -> Result<Option<String>> {
        let attribute = self
            .start
            .try_get_attribute(key)
            .map_err(|e| self.xml_error(e))?;

        match attribute {
            Some(attribute) => {
                let value = attribute.unescape_value().map_err(|e| self.xml_error(e))?;
                Ok(Some(value.into_owned()))
            }
            None => Ok(None),
        }
    }

    /// Look up an attribute that must be present.
    pub fn required(&self, key: &str) -> Result<String> {
        self.attr(key)?
            .ok_or_else(|| TmxError::missing(key, &self.name()))
    }

    /// Look up and parse an optional attribute.
    pub fn parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>> {
        self.attr(key)?
            .map(|value| self.parse_value(key, &value))
            .transpose()
    }

    /// Look up and parse an attribute that must be present.
    pub fn required_parsed<T: FromStr>(&self, key: &str) -> Result<T> {
        let value = self.required(key)?;
        self.parse_value(key, &value)
    }

    /// Look up an optional hex colour attribute.
    pub fn colour(&self, key: &str) -> Result<Option<Colour>> {
        self.attr(key)?
            .map(|value| {
                Colour::from_hex(&value)
                    .map_err(|e| TmxError::content(&self.name(), format!("'{}': {}", key, e)))
            })
            .transpose()
    }

    fn parse_value<T: FromStr>(&self, key: &str, value: &str) -> Result<T> {
        value.trim().parse().map_err(|_| {
            TmxError::content(
                &self.name(),
                format!("invalid '{}' attribute value '{}'", key, value),
            )
        })
    }

    fn xml_error(&self, err: impl std::fmt::Display) -> TmxError {
        TmxError::Xml {
            position: self.position,
            message: format!("in '{}': {}", self.name(), err),
        }
    }
}

/// Streaming token reader that tracks element depth.
pub struct TokenReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    depth: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
            depth: 0,
        }
    }

    /// Pull the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.buf.clear();
        let position = self.reader.buffer_position() as u64;

        let token = match self.reader.read_event_into(&mut self.buf) {
            Ok(Event::Start(start)) => {
                let element = Element::new(start.into_owned(), self.depth, false, position);
                self.depth += 1;
                Token::Start(element)
            }
            Ok(Event::Empty(start)) => {
                Token::Start(Element::new(start.into_owned(), self.depth, true, position))
            }
            Ok(Event::End(_)) => {
                self.depth = self.depth.saturating_sub(1);
                Token::End { depth: self.depth }
            }
            Ok(Event::Eof) => Token::Eof,
            Ok(_) => Token::Other,
            Err(e) => return Err(xml_error(&self.reader, e)),
        };
        Ok(token)
    }

    /// Walk the direct children of `parent`, handing each child start tag
    /// to `visit`. Returns once `parent`'s end tag has been consumed.
    ///
    /// `visit` must consume the whole subtree of the child it is given.
    pub fn children<F>(&mut self, parent: &Element, mut visit: F) -> Result<()>
    where
        F: FnMut(&mut Self, Element) -> Result<()>,
    {
        if parent.is_empty() {
            return Ok(());
        }

        loop {
            match self.next_token()? {
                Token::Start(child) => visit(self, child)?,
                Token::End { depth } if depth == parent.depth => return Ok(()),
                Token::End { .. } | Token::Other => {}
                Token::Eof => return Err(unterminated(parent)),
            }
        }
    }

    /// Consume the rest of `element`'s subtree.
    pub fn skip(&mut self, element: &Element) -> Result<()> {
        if element.tag() == Tag::Unknown {
            trace!("skipping unknown element '{}'", element.name());
        }
        if element.is_empty() {
            return Ok(());
        }

        loop {
            match self.next_token()? {
                Token::End { depth } if depth == element.depth => return Ok(()),
                Token::Eof => return Err(unterminated(element)),
                _ => {}
            }
        }
    }

    /// Read the text content of `element` up to its end tag.
    ///
    /// Text and CDATA sections are concatenated. A child element is an
    /// error built by `reject`.
    pub fn read_text<F>(&mut self, element: &Element, reject: F) -> Result<String>
    where
        F: FnOnce(&Element) -> TmxError,
    {
        let mut text = String::new();
        if element.is_empty() {
            return Ok(text);
        }

        loop {
            self.buf.clear();
            let position = self.reader.buffer_position() as u64;

            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Text(t)) => {
                    let decoded = t.decode().map_err(|e| xml_error(&self.reader, e))?;
                    text.push_str(&decoded);
                }
                Ok(Event::CData(c)) => {
                    let decoded = c.decode().map_err(|e| xml_error(&self.reader, e))?;
                    text.push_str(&decoded);
                }
                Ok(Event::Start(start)) | Ok(Event::Empty(start)) => {
                    let child = Element::new(start.into_owned(), self.depth, false, position);
                    return Err(reject(&child));
                }
                Ok(Event::GeneralRef(_)) => {
                    return Err(TmxError::content(
                        &element.name(),
                        "character and entity references are not allowed in element text",
                    ));
                }
                Ok(Event::End(_)) => {
                    self.depth = self.depth.saturating_sub(1);
                    return Ok(text);
                }
                Ok(Event::Eof) => return Err(unterminated(element)),
                Ok(_) => {}
                Err(e) => return Err(xml_error(&self.reader, e)),
            }
        }
    }
}

fn xml_error<R>(reader: &Reader<R>, err: impl std::fmt::Display) -> TmxError {
    TmxError::Xml {
        position: reader.error_position() as u64,
        message: err.to_string(),
    }
}

fn unterminated(element: &Element) -> TmxError {
    TmxError::content(&element.name(), "document ended before the closing tag")
}
