//! Maps the current window width onto named breakpoints.
//!
//! Every check is an independent comparison against one breakpoint. Being at
//! least `Wide` says nothing about the answer for `Medium`; callers ask each
//! question they care about separately.

use serde::{Deserialize, Serialize};

/// Named width thresholds, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Small,
    Medium,
    Large,
    Wide,
    Huge,
}

/// Minimum widths (in logical points) for each breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub mobile: f32,
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    pub wide: f32,
    pub huge: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 480.0,
            small: 600.0,
            medium: 782.0,
            large: 960.0,
            wide: 1280.0,
            huge: 1440.0,
        }
    }
}

impl Breakpoints {
    pub fn min_width(&self, breakpoint: Breakpoint) -> f32 {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Small => self.small,
            Breakpoint::Medium => self.medium,
            Breakpoint::Large => self.large,
            Breakpoint::Wide => self.wide,
            Breakpoint::Huge => self.huge,
        }
    }
}

/// The two viewport answers the toolbar needs each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ViewportClass {
    /// At least the `Medium` breakpoint.
    pub is_large: bool,
    /// At least the `Wide` breakpoint.
    pub is_wide: bool,
}

/// A window width paired with the breakpoint table used to classify it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    breakpoints: Breakpoints,
}

impl Viewport {
    pub fn new(width: f32, breakpoints: Breakpoints) -> Self {
        Self { width, breakpoints }
    }

    /// Reads the current screen width from egui.
    pub fn from_egui(ctx: &egui::Context, breakpoints: Breakpoints) -> Self {
        Self::new(ctx.screen_rect().width(), breakpoints)
    }

    pub fn is_at_least(&self, breakpoint: Breakpoint) -> bool {
        self.width >= self.breakpoints.min_width(breakpoint)
    }

    pub fn is_below(&self, breakpoint: Breakpoint) -> bool {
        self.width < self.breakpoints.min_width(breakpoint)
    }

    pub fn classify(&self) -> ViewportClass {
        ViewportClass {
            is_large: self.is_at_least(Breakpoint::Medium),
            is_wide: self.is_at_least(Breakpoint::Wide),
        }
    }
}
