//! Strict XML well-formedness checking and tree-builder normalization.
//!
//! The DOM crate only materializes trees through the HTML parsing algorithm,
//! which recovers from anything. XML callers expect malformed input to fail,
//! so XML content is first streamed through a strict pull parser. The same
//! pass rewrites the document into a form the HTML tree builder reproduces
//! faithfully:
//!
//! - empty-element tags (`<a/>`) are expanded to `<a></a>`, since the HTML
//!   tree builder would otherwise keep the element open and adopt its
//!   siblings as children
//! - CDATA sections become escaped text
//! - the XML declaration, processing instructions, and doctype are dropped
//!
//! Exactly one root element is required; text outside it, mismatched or
//! unclosed tags, and malformed attributes are all reported as
//! [`Error::ParseError`].

use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

use crate::error::{Error, Result};

/// Validate `content` as XML and rewrite it into tree-builder input.
pub(crate) fn to_tree_input(content: &str) -> Result<String> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().check_end_names = true;

    let mut writer = Writer::new(Vec::new());
    let mut depth = 0usize;
    let mut roots = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Start(start)) => {
                check_attributes(&start, &reader)?;
                if depth == 0 {
                    roots += 1;
                    if roots > 1 {
                        return Err(Error::ParseError(
                            "extra content after document element".to_string(),
                        ));
                    }
                }
                depth += 1;
                write_event(&mut writer, Event::Start(start))?;
            }
            Ok(Event::End(end)) => {
                depth = depth.saturating_sub(1);
                write_event(&mut writer, Event::End(end))?;
            }
            Ok(Event::Empty(start)) => {
                check_attributes(&start, &reader)?;
                if depth == 0 {
                    roots += 1;
                    if roots > 1 {
                        return Err(Error::ParseError(
                            "extra content after document element".to_string(),
                        ));
                    }
                }
                let end = start.to_end().into_owned();
                write_event(&mut writer, Event::Start(start))?;
                write_event(&mut writer, Event::End(end))?;
            }
            Ok(Event::Text(text)) => {
                if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(Error::ParseError(
                        "text content outside the document element".to_string(),
                    ));
                }
                write_event(&mut writer, Event::Text(text))?;
            }
            Ok(Event::CData(cdata)) => {
                let text = String::from_utf8_lossy(&cdata).into_owned();
                write_event(&mut writer, Event::Text(BytesText::new(&text)))?;
            }
            Ok(Event::GeneralRef(reference)) => {
                if depth == 0 {
                    return Err(Error::ParseError(
                        "text content outside the document element".to_string(),
                    ));
                }
                write_event(&mut writer, Event::GeneralRef(reference))?;
            }
            Ok(Event::Comment(comment)) => {
                write_event(&mut writer, Event::Comment(comment))?;
            }
            // The HTML tree builder has no representation for these.
            Ok(Event::Decl(_) | Event::PI(_) | Event::DocType(_)) => {}
            Err(err) => {
                return Err(Error::ParseError(format!(
                    "{err} at position {}",
                    reader.buffer_position()
                )));
            }
        }
    }

    if depth > 0 {
        return Err(Error::ParseError("unclosed element at end of input".to_string()));
    }
    if roots == 0 {
        return Err(Error::ParseError("document has no root element".to_string()));
    }

    String::from_utf8(writer.into_inner()).map_err(|err| Error::ParseError(err.to_string()))
}

/// Surface malformed attributes (bad syntax, duplicates) from a start tag.
fn check_attributes<R>(start: &BytesStart, reader: &Reader<R>) -> Result<()> {
    for attr in start.attributes() {
        if let Err(err) = attr {
            return Err(Error::ParseError(format!(
                "{err} at position {}",
                reader.buffer_position()
            )));
        }
    }
    Ok(())
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|err| Error::ParseError(err.to_string()))
}
