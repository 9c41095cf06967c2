//! The probe → select → write → reload pipeline.
//!
//! [`LayoutSync`] ties a [`Compositor`] and a [`LayoutStore`] together.  It
//! holds no state of its own between runs: the monitor list is probed fresh
//! and the stored layout is re-read every time.
//!
//! Failures degrade instead of propagating:
//!
//! * a failed probe counts as an empty monitor list, which selects
//!   [`LayoutProfile::Standard`];
//! * a failed write skips the reload and leaves the old file in place;
//! * a failed reload is logged and otherwise ignored.

use crate::layout::LayoutProfile;
use crate::layout_file::{write_if_changed, WriteOutcome};
use crate::traits::{Compositor, LayoutStore};
use log::{debug, error, info, warn};

/// What happened to the layout file during one [`LayoutSync::sync`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// Already up to date; no reload was requested.
    Unchanged,
    /// Rewritten and a reload was requested.
    Reloaded,
    /// Writing failed; no reload was requested.
    WriteFailed,
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    pub profile: LayoutProfile,
    pub action: FileAction,
}

/// Keeps the stored layout in line with the connected displays.
pub struct LayoutSync<C: Compositor, S: LayoutStore> {
    compositor: C,
    store: S,
}

impl<C: Compositor, S: LayoutStore> LayoutSync<C, S> {
    pub fn new(compositor: C, store: S) -> Self {
        Self { compositor, store }
    }

    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Probe the compositor, pick a profile, store it if it differs from
    /// what is stored, and reload when it did.
    pub fn sync(&self) -> SyncOutcome {
        let monitors = self.compositor.monitors().unwrap_or_else(|e| {
            warn!("monitor probe failed, assuming no known displays: {}", e);
            String::new()
        });

        let profile = LayoutProfile::select(&monitors);
        debug!("selected {} layout", profile);

        let action = match write_if_changed(&self.store, profile.text()) {
            Ok(WriteOutcome::Unchanged) => {
                debug!("{} layout already in place", profile);
                FileAction::Unchanged
            }
            Ok(WriteOutcome::Changed) => {
                info!("switched to {} layout, reloading", profile);
                if let Err(e) = self.compositor.reload() {
                    warn!("reload failed: {}", e);
                }
                FileAction::Reloaded
            }
            Err(e) => {
                error!("could not store {} layout: {}", profile, e);
                FileAction::WriteFailed
            }
        };

        SyncOutcome { profile, action }
    }
}
