// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Organized following a component-based architecture with the Elm-style
//! "state down, messages up" pattern.
//!
//! - [`autoscroll`] - The middle-click autoscroll component (session state
//!   machine, direction indicator, orchestrator)
//! - [`widgets`] - Custom Iced widgets (the event capture area)
//! - [`styles`] - Centralized styling for overlay surfaces
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod autoscroll;
pub mod design_tokens;
pub mod styles;
pub mod widgets;
