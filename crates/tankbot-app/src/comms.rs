//! Line-oriented engine channel.
//!
//! Inbound: one JSON envelope or bare sentinel per line. Outbound: one
//! action document per line, flushed immediately so the engine never waits
//! on a buffered turn.

use std::io::{BufRead, Write};

use tracing::debug;

use tankbot_core::commands::TurnAction;
use tankbot_core::constants::{END_INIT_SIGNAL, END_SIGNAL};
use tankbot_core::state::{EngineMessage, Envelope};

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("engine channel I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed message on line {line}: {source}")]
    Malformed {
        line: u64,
        source: serde_json::Error,
    },
    #[error("cannot encode action: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("unexpected {found} while {expecting}")]
    Unexpected {
        expecting: &'static str,
        found: &'static str,
    },
}

/// Short name of a message, for logs and sequencing errors.
pub fn message_kind(message: &EngineMessage) -> &'static str {
    match message {
        EngineMessage::Handshake(_) => "handshake",
        EngineMessage::Delta(_) => "world delta",
        EngineMessage::EndInit => "END_INIT",
        EngineMessage::End => "END",
    }
}

/// Parse one non-empty line. Sentinels may arrive bare or JSON-quoted.
pub fn parse_line(line: &str) -> Result<EngineMessage, serde_json::Error> {
    let line = line.trim();
    let bare = line
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(line);
    match bare {
        END_INIT_SIGNAL => return Ok(EngineMessage::EndInit),
        END_SIGNAL => return Ok(EngineMessage::End),
        _ => {}
    }
    let envelope: Envelope = serde_json::from_str(line)?;
    Ok(envelope.message.into())
}

pub struct MessageReader<R> {
    reader: R,
    buf: String,
    line: u64,
}

impl<R: BufRead> MessageReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line: 0,
        }
    }

    /// Next message. Blank lines are skipped; end of input reads as `End`.
    pub fn next_message(&mut self) -> Result<EngineMessage, ProtocolError> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                debug!(lines = self.line, "engine closed input");
                return Ok(EngineMessage::End);
            }
            self.line += 1;
            if self.buf.trim().is_empty() {
                continue;
            }
            return parse_line(&self.buf).map_err(|source| ProtocolError::Malformed {
                line: self.line,
                source,
            });
        }
    }
}

pub struct ActionWriter<W> {
    writer: W,
}

impl<W: Write> ActionWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn send(&mut self, action: &TurnAction) -> Result<(), ProtocolError> {
        serde_json::to_writer(&mut self.writer, action)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
