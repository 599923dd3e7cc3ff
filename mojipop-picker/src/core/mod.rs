//! Core picker functionality
//!
//! This module contains the session state machine, the element capability
//! seam, and the controller that wires page events to the popup.

pub mod candidate;
pub mod controller;
pub mod events;
pub mod presenter;
pub mod session;
pub mod state;
pub mod target;
