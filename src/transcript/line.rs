//! Chat line parsing.

use super::format::{self, DecodedBody, Segment};

/// One transcript line after parsing.
///
/// Three shapes are recognized:
/// - `[timestamp] <nick> message`: an attributed chat message; the body
///   is decoded for formatting.
/// - `[timestamp] anything-else`: a server/status line; it has no message
///   body and is never format-decoded.
/// - anything else: the whole line is an unattributed message body, ready
///   to be decoded (raw art files fall in this bucket).
///
/// Construction never fails.
#[derive(Debug, Clone)]
pub struct ChatLine {
    raw: String,
    timestamp: Option<String>,
    nick: Option<String>,
    message: Option<String>,
    body: DecodedBody,
    is_chat: bool,
}

impl ChatLine {
    /// Parse one raw transcript line.
    pub fn parse(raw: &str) -> Self {
        if let Some((timestamp, rest)) = match_timestamp(raw) {
            if let Some((nick, message)) = match_attributed(rest) {
                let body = format::decode_body(message);
                return Self {
                    raw: raw.to_string(),
                    timestamp: Some(timestamp.to_string()),
                    nick: Some(nick.to_string()),
                    message: Some(message.to_string()),
                    body,
                    is_chat: true,
                };
            }
            // Server or status line: no message body to decode.
            return Self {
                raw: raw.to_string(),
                timestamp: Some(timestamp.to_string()),
                nick: None,
                message: None,
                body: DecodedBody::default(),
                is_chat: false,
            };
        }

        let body = format::decode_body(raw);
        Self {
            raw: raw.to_string(),
            timestamp: None,
            nick: None,
            message: Some(raw.to_string()),
            body,
            is_chat: false,
        }
    }

    /// The line as read from the transcript.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Timestamp text (without brackets), when the line carried one.
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    /// Sender nick, when the line was an attributed chat message.
    pub fn sender(&self) -> Option<&str> {
        self.nick.as_deref()
    }

    /// True iff the line matched the `<nick> message` chat shape.
    pub fn is_chat(&self) -> bool {
        self.is_chat
    }

    /// Message body; absent for timestamped non-chat lines.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True iff the message body contained a color control sequence.
    /// Emphasis markers alone do not count.
    pub fn has_format(&self) -> bool {
        self.body.has_color
    }

    /// Decoded text segments and style directives, in display order.
    pub fn segments(&self) -> &[Segment] {
        &self.body.segments
    }
}

/// Match `[timestamp] rest` where the timestamp is one or more digits and
/// colons and exactly one space follows the bracket. Returns the timestamp
/// (without brackets) and the non-empty remainder.
fn match_timestamp(line: &str) -> Option<(&str, &str)> {
    let inner = line.strip_prefix('[')?;
    let close = inner.find(']')?;
    let stamp = &inner[..close];
    if stamp.is_empty() || !stamp.chars().all(|c| c.is_ascii_digit() || c == ':') {
        return None;
    }
    let rest = inner[close + 1..].strip_prefix(' ')?;
    if rest.is_empty() {
        return None;
    }
    Some((stamp, rest))
}

/// Match `<nick> message` with a non-empty nick (any characters except
/// `>`) and a non-empty message after a single space.
fn match_attributed(rest: &str) -> Option<(&str, &str)> {
    let after = rest.strip_prefix('<')?;
    let close = after.find('>')?;
    let nick = &after[..close];
    if nick.is_empty() {
        return None;
    }
    let message = after[close + 1..].strip_prefix(' ')?;
    if message.is_empty() {
        return None;
    }
    Some((nick, message))
}
