//! [`Compositor`] implementation that shells out to `hyprctl`.
//!
//! Every invocation is bounded by a timeout.  The child's stdout is drained
//! on a helper thread while the calling thread polls for exit, so a chatty
//! child can never wedge on a full pipe.  When the deadline passes the child
//! is killed and reaped.

use crate::traits::Compositor;
use log::debug;
use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// How often a running child is checked for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// `hyprctl`-backed compositor control.
pub struct Hyprctl {
    program: String,
    timeout: Duration,
}

/// Errors from running the control command.
#[derive(Debug, thiserror::Error)]
pub enum HyprctlError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed waiting for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} did not finish within {timeout:?}")]
    Timeout { program: String, timeout: Duration },
}

impl Hyprctl {
    /// Create a handle that runs `program` with the given per-call timeout.
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Run the control command with `args` and return its stdout.
    ///
    /// A non-zero exit status is not an error: whatever the command printed
    /// is returned as-is.  Invalid UTF-8 is replaced.
    pub fn run(&self, args: &[&str]) -> Result<String, HyprctlError> {
        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| HyprctlError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let (tx, rx) = mpsc::channel();
        if let Some(mut stdout) = child.stdout.take() {
            std::thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = stdout.read_to_end(&mut buf);
                let _ = tx.send(buf);
            });
        }

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(HyprctlError::Timeout {
                        program: self.program.clone(),
                        timeout: self.timeout,
                    });
                }
                Ok(None) => std::thread::sleep(POLL_INTERVAL),
                Err(source) => {
                    let _ = child.kill();
                    return Err(HyprctlError::Wait {
                        program: self.program.clone(),
                        source,
                    });
                }
            }
        };

        if !status.success() {
            debug!("{} {:?} exited with {}", self.program, args, status);
        }

        // A grandchild holding the pipe open must not stretch the call past
        // the deadline.
        let remaining = deadline.saturating_duration_since(Instant::now());
        let stdout = rx.recv_timeout(remaining).unwrap_or_default();
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

impl Compositor for Hyprctl {
    type Error = HyprctlError;

    fn monitors(&self) -> Result<String, Self::Error> {
        self.run(&["-j", "monitors"])
    }

    fn reload(&self) -> Result<(), Self::Error> {
        self.run(&["reload"]).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_stdout() {
        let ctl = Hyprctl::new("echo", Duration::from_secs(5));
        assert_eq!(ctl.monitors().unwrap(), "-j monitors\n");
    }

    #[test]
    fn reload_passes_reload_argument() {
        let ctl = Hyprctl::new("echo", Duration::from_secs(5));
        assert_eq!(ctl.run(&["reload"]).unwrap(), "reload\n");
        assert!(ctl.reload().is_ok());
    }

    #[test]
    fn nonzero_exit_is_not_an_error() {
        let ctl = Hyprctl::new("false", Duration::from_secs(5));
        assert_eq!(ctl.monitors().unwrap(), "");
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let ctl = Hyprctl::new("/nonexistent/hyprlayout-test-hyprctl", Duration::from_secs(5));
        assert!(matches!(ctl.monitors(), Err(HyprctlError::Spawn { .. })));
    }

    #[test]
    fn slow_program_times_out() {
        let ctl = Hyprctl::new("sleep", Duration::from_millis(100));
        let started = Instant::now();
        let result = ctl.run(&["5"]);
        assert!(matches!(result, Err(HyprctlError::Timeout { .. })));
        assert!(started.elapsed() < Duration::from_secs(4));
    }
}
