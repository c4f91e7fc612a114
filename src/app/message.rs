// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::autoscroll::component;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Autoscroll(component::Message),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional displacement-to-velocity scaling override.
    pub sensitivity: Option<f32>,
    /// Optional quick-click threshold override, in milliseconds.
    pub toggle_ms: Option<u64>,
}
