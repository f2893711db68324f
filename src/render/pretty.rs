use crate::error::{Result, TileError};
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use std::io::Cursor;

/// Indentation width of re-serialized documents
const INDENT: usize = 4;

/// Re-serialize an SVG document with stable indentation
///
/// Each element lands on its own line, indented by nesting depth, and
/// whitespace-only text is dropped. Attributes are written back exactly as
/// they were read. No XML declaration is emitted.
///
/// # Arguments
/// * `svg` - SVG text to reformat
///
/// # Returns
/// * `Ok(String)` - Reformatted document
/// * `Err(TileError::Serialization)` - If the markup is malformed or tags are unbalanced
///
/// # Examples
/// ```
/// use tileglow::render::pretty_print;
///
/// let pretty = pretty_print("<svg><g>  <rect/>\n</g></svg>").unwrap();
/// assert_eq!(pretty, "<svg>\n    <g>\n        <rect/>\n    </g>\n</svg>");
/// ```
pub fn pretty_print(svg: &str) -> Result<String> {
    let mut reader = Reader::from_str(svg);

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::with_capacity(svg.len())), b' ', INDENT);
    let mut depth = 0usize;
    // Whitespace-only text survives only between two pieces of character data
    let mut in_char_data = false;
    let mut pending_space: Option<Event<'_>> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            TileError::Serialization(format!(
                "XML parse error at position {}: {}",
                reader.error_position(),
                e
            ))
        })?;

        let blank = matches!(&event, Event::Text(text) if text.iter().all(u8::is_ascii_whitespace));
        if blank {
            if in_char_data {
                pending_space = Some(event);
            }
            continue;
        }

        let is_char_data = matches!(event, Event::Text(_) | Event::GeneralRef(_));
        if let Some(space) = pending_space.take() {
            if is_char_data {
                write_event(&mut writer, space)?;
            }
        }
        in_char_data = is_char_data;

        match event {
            Event::Eof => break,
            Event::Decl(_) => continue,
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    TileError::Serialization("unexpected closing tag".to_string())
                })?;
            }
            _ => {}
        }

        write_event(&mut writer, event)?;
    }

    if depth != 0 {
        return Err(TileError::Serialization(format!(
            "{} unclosed element(s) at end of document",
            depth
        )));
    }

    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| TileError::Serialization(e.to_string()))
}

fn write_event(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| TileError::Serialization(e.to_string()))
}
