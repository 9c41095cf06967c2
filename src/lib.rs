//! **hyprlayout** — keeps Hyprland's monitor layout in step with the
//! displays that are actually plugged in.
//!
//! The daemon probes the connected monitors, picks one of two static
//! [`LayoutProfile`](layout::LayoutProfile)s, writes it to the layout file
//! that Hyprland `source`s (only when it differs), and asks Hyprland to
//! reload.  It does this once at startup and again after every monitor
//! hotplug event seen on the compositor's event socket.
//!
//! # Architecture
//!
//! The crate is organised around two traits:
//!
//! * [`traits::Compositor`] — probes monitors and triggers reloads.
//! * [`traits::LayoutStore`] — reads and replaces the persisted layout.
//!
//! [`sync::LayoutSync`] is the pipeline built on top of them.  Concrete
//! implementations live in [`hyprland`] (`hyprctl` and the event socket)
//! and [`layout_file`].

pub mod config;
pub mod hyprland;
pub mod layout;
pub mod layout_file;
pub mod sync;
pub mod traits;
