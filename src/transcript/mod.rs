//! Transcript line decoding.
//!
//! Raw IRC log lines carry an optional `[timestamp] <nick> message` shape
//! and inline mIRC formatting control bytes inside the message body. This
//! module turns a raw line into a [`ChatLine`]: sender identity, message
//! body, and the decoded segment stream used for rendering and grouping.

mod format;
mod line;

pub use format::{decode_body, DecodedBody, Segment};
pub use line::ChatLine;
