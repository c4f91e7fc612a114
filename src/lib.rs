// SPDX-License-Identifier: MPL-2.0
//! `iced_drift` adds middle-click autoscroll to an Iced document view.
//!
//! Hold the middle mouse button and drag to pan the document; a quick middle
//! click enters a toggle mode where scrolling continues without the button
//! held, until the next click. The crate ships the interaction state
//! machine, a canvas-drawn direction indicator, and a demo application
//! around them.

#![doc(html_root_url = "https://docs.rs/iced_drift/0.1.0")]

pub mod app;
pub mod ui;
