//! Hyprland `socket2` wire format.
//!
//! Each event is a single line of the form `EVENT>>DATA\n`, e.g.
//!
//! ```text
//! monitoraddedv2>>1,HDMI-A-1,Samsung Electric Company Odyssey G9 LC49G95T
//! focusedmon>>eDP-1,1
//! monitorremoved>>HDMI-A-1
//! ```
//!
//! Only the event name is consulted.  Both the v1 and v2 variants of the
//! monitor events count as hotplugs.

/// Event-name prefixes that mean a display came or went.
const HOTPLUG_PREFIXES: [&str; 2] = ["monitoradded", "monitorremoved"];

/// One event line, split at the first `>>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyprEvent<'a> {
    pub name: &'a str,
    pub data: &'a str,
}

impl<'a> HyprEvent<'a> {
    /// Split a line into name and data.  A line without `>>` is all name.
    pub fn parse(line: &'a str) -> Self {
        match line.split_once(">>") {
            Some((name, data)) => Self { name, data },
            None => Self { name: line, data: "" },
        }
    }

    /// Whether this is a monitor attach/detach notification.
    pub fn is_hotplug(&self) -> bool {
        HOTPLUG_PREFIXES.iter().any(|p| self.name.starts_with(*p))
    }
}

/// Reassembles newline-terminated lines from arbitrary read chunks.
///
/// Bytes are kept raw until a full line is available and then decoded
/// lossily, so a multi-byte character split across two reads survives
/// intact while genuinely invalid bytes become U+FFFD.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk read from the socket.
    pub fn push(&mut self, chunk: &[u8]) {
        self.pending.extend_from_slice(chunk);
    }

    /// Take the next complete line (without its `\n`), if any.
    pub fn next_line(&mut self) -> Option<String> {
        let end = self.pending.iter().position(|&b| b == b'\n')?;
        let line: Vec<u8> = self.pending.drain(..=end).collect();
        Some(String::from_utf8_lossy(&line[..end]).into_owned())
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
