//! Hyprland-specific implementations.
//!
//! This module provides the concrete [`Compositor`](crate::traits::Compositor)
//! backend (`hyprctl`) and the consumer of Hyprland's event socket.
//!
//! Nothing outside this module should reference Hyprland directly.

pub mod ctl;
pub mod event;
pub mod listener;
