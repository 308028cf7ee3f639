//! mIRC control-sequence tokenizer.
//!
//! Message bodies are split on four reserved control bytes: color (0x03),
//! bold (0x02), italic (0x16), underline (0x1f). Color controls carry an
//! ambiguous digit grammar: an optional 1-or-2-digit foreground index,
//! then an optional `,` plus 1-or-2-digit background index, where a second
//! digit is consumed only while the value stays within the palette. Bold,
//! italic and underline are consumed but render nothing and do not count
//! as formatting for grouping purposes.

use std::iter::Peekable;
use std::str::Chars;

/// mIRC bold control byte.
pub const CTRL_BOLD: char = '\x02';
/// mIRC color control byte.
pub const CTRL_COLOR: char = '\x03';
/// mIRC italic control byte.
pub const CTRL_ITALIC: char = '\x16';
/// mIRC underline control byte.
pub const CTRL_UNDERLINE: char = '\x1f';

/// Highest valid palette index. A second color digit is only consumed
/// while the combined value stays at or below this bound, so `99` parses
/// as index 9 followed by a literal `9`.
pub const MAX_COLOR_INDEX: u8 = 15;

/// One token of a decoded message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, displayed as-is.
    Text(String),
    /// Set the foreground to a palette index (0-15).
    Fg(u8),
    /// Set the background to a palette index (0-15).
    Bg(u8),
    /// Reset all formatting.
    Reset,
}

/// Result of tokenizing one message body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedBody {
    /// Text and style directives in display order.
    pub segments: Vec<Segment>,
    /// True iff at least one color control byte was present, even when its
    /// directive degraded to a reset.
    pub has_color: bool,
}

/// Tokenize a message body into text segments and style directives.
///
/// Never fails: a color control with no digits degrades to a reset
/// directive, and every non-control byte passes through as text.
pub fn decode_body(message: &str) -> DecodedBody {
    let mut body = DecodedBody::default();
    let mut text = String::new();
    let mut chars = message.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            CTRL_COLOR => {
                body.has_color = true;
                flush_text(&mut body.segments, &mut text);

                let fg = read_color_index(&mut chars);
                let bg = read_background(&mut chars);

                if fg.is_none() && bg.is_none() {
                    body.segments.push(Segment::Reset);
                } else {
                    if let Some(index) = fg {
                        body.segments.push(Segment::Fg(index));
                    }
                    if let Some(index) = bg {
                        body.segments.push(Segment::Bg(index));
                    }
                }
            }
            CTRL_BOLD | CTRL_ITALIC | CTRL_UNDERLINE => {
                // Consumed without producing a directive; the text around
                // the marker joins back together.
            }
            _ => text.push(c),
        }
    }

    flush_text(&mut body.segments, &mut text);
    body
}

fn flush_text(segments: &mut Vec<Segment>, text: &mut String) {
    if !text.is_empty() {
        segments.push(Segment::Text(std::mem::take(text)));
    }
}

/// Read a 1-or-2-digit palette index. The second digit is consumed only
/// when the two-digit value stays within [`MAX_COLOR_INDEX`]; otherwise it
/// remains in the stream as ordinary text.
fn read_color_index(chars: &mut Peekable<Chars>) -> Option<u8> {
    let first = *chars.peek()?;
    if !first.is_ascii_digit() {
        return None;
    }
    chars.next();
    let mut value = first as u8 - b'0';

    if let Some(&second) = chars.peek() {
        if second.is_ascii_digit() {
            let combined = value * 10 + (second as u8 - b'0');
            if combined <= MAX_COLOR_INDEX {
                value = combined;
                chars.next();
            }
        }
    }

    Some(value)
}

/// Read `,` plus a background index. The comma is consumed only when a
/// digit immediately follows it; a bare comma stays in the text.
fn read_background(chars: &mut Peekable<Chars>) -> Option<u8> {
    let mut ahead = chars.clone();
    if ahead.next() != Some(',') || !ahead.next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    chars.next();
    read_color_index(chars)
}
