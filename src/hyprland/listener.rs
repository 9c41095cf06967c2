//! Long-running listener on Hyprland's event socket (`socket2`).
//!
//! The listener is a two-state loop:
//!
//! ```text
//!            connect ok
//!   Disconnected ─────────▶ Connected
//!      ▲   │ connect err        │ EOF / read error
//!      │   └─ backoff ──┐       │
//!      └────────────────┴───────┘ backoff
//! ```
//!
//! While connected, every complete line is parsed as a [`HyprEvent`].  For
//! hotplug events the listener waits the settle delay and then calls the
//! handler synchronously; no further bytes are read until it returns.  All
//! other events are discarded.

use crate::config::TimingConfig;
use crate::hyprland::event::{HyprEvent, LineBuffer};
use log::{debug, info, trace, warn};
use std::io::{ErrorKind, Read};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Size of a single socket read.
const READ_CHUNK: usize = 4096;

enum State {
    Disconnected,
    Connected(UnixStream),
}

/// Reconnecting consumer of the Hyprland event socket.
pub struct EventListener {
    path: PathBuf,
    reconnect_backoff: Duration,
    settle_delay: Duration,
}

impl EventListener {
    /// Create a listener for the socket at `path`.  Nothing is opened until
    /// [`run`](Self::run) is called.
    pub fn new(path: impl AsRef<Path>, timing: &TimingConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            reconnect_backoff: timing.reconnect_backoff(),
            settle_delay: timing.settle_delay(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Connect and dispatch hotplug events to `on_hotplug` forever.
    ///
    /// This method **never returns**; connection failures and dropped
    /// connections are retried after the reconnect backoff.
    pub fn run<F>(&self, mut on_hotplug: F)
    where
        F: FnMut(&HyprEvent<'_>),
    {
        let mut state = State::Disconnected;
        let mut failed_attempts: u32 = 0;

        loop {
            state = match state {
                State::Disconnected => match UnixStream::connect(&self.path) {
                    Ok(stream) => {
                        info!("connected to {}", self.path.display());
                        failed_attempts = 0;
                        State::Connected(stream)
                    }
                    Err(e) => {
                        if failed_attempts == 0 {
                            warn!("cannot connect to {}: {}", self.path.display(), e);
                        } else {
                            debug!("connect attempt {} failed: {}", failed_attempts + 1, e);
                        }
                        failed_attempts = failed_attempts.saturating_add(1);
                        std::thread::sleep(self.reconnect_backoff);
                        State::Disconnected
                    }
                },
                State::Connected(stream) => {
                    match self.serve(stream, &mut on_hotplug) {
                        Ok(()) => info!("event socket closed by compositor"),
                        Err(e) => warn!("event socket read error: {}", e),
                    }
                    std::thread::sleep(self.reconnect_backoff);
                    State::Disconnected
                }
            };
        }
    }

    /// Read events from one connection until the peer closes it.
    ///
    /// The stream is dropped when this returns.
    fn serve<R, F>(&self, mut stream: R, on_hotplug: &mut F) -> std::io::Result<()>
    where
        R: Read,
        F: FnMut(&HyprEvent<'_>),
    {
        let mut lines = LineBuffer::new();
        let mut chunk = [0u8; READ_CHUNK];

        loop {
            let n = match stream.read(&mut chunk) {
                Ok(0) => return Ok(()),
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            lines.push(&chunk[..n]);

            while let Some(line) = lines.next_line() {
                let event = HyprEvent::parse(&line);
                if event.is_hotplug() {
                    info!("{} ({}), re-evaluating layout", event.name, event.data);
                    std::thread::sleep(self.settle_delay);
                    on_hotplug(&event);
                } else {
                    trace!("ignoring {}", event.name);
                }
            }
        }
    }
}

//  Tests
