//! Colored header band behind a block's top padding.
//!
//! The band's height depends on the rendered header, which is only known
//! after layout. The measured value is cached and marked stale on mount,
//! on any state change and on window resize; `sync` re-measures stale bands.

use crate::fields::TRANSPARENT;
use crate::models::StateMap;
use serde::Serialize;
use serde_json::Value;

/// Block-state key of the band color
pub const HEADER_BACKGROUND_KEY: &str = "headerBackgroundColor";

/// Events that make a measured height out of date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureTrigger {
    Mount,
    StateChange,
    Resize,
}

/// Access to the laid-out page
pub trait LayoutHost {
    /// Height in pixels of the header of the block at `block`, once laid out
    fn header_height(&self, block: usize) -> Option<f64>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderBand {
    pub color: String,
    height: Option<f64>,

    #[serde(skip)]
    stale: bool,

    #[serde(skip)]
    measurements: usize,
}

impl HeaderBand {
    /// Band for a block, if its header color is visible
    pub fn from_block_state(state: &StateMap) -> Option<Self> {
        let color = match state.get(HEADER_BACKGROUND_KEY) {
            Some(Value::String(color)) => color.trim(),
            _ => return None,
        };
        if color.is_empty() || color.eq_ignore_ascii_case(TRANSPARENT) {
            return None;
        }
        Some(Self {
            color: color.to_string(),
            height: None,
            stale: true,
            measurements: 0,
        })
    }

    pub fn invalidate(&mut self, trigger: MeasureTrigger) {
        tracing::trace!("Header band invalidated by {:?}", trigger);
        self.stale = true;
    }

    /// Re-measure if stale; returns true when a measurement was taken
    pub fn sync(&mut self, host: &dyn LayoutHost, block: usize) -> bool {
        if !self.stale {
            return false;
        }
        match host.header_height(block) {
            Some(height) => {
                self.height = Some(height);
                self.stale = false;
                self.measurements += 1;
                true
            }
            // Not laid out yet; stay stale so the next sync retries
            None => false,
        }
    }

    /// Last measured height
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// How often the band was measured
    pub fn measurements(&self) -> usize {
        self.measurements
    }
}
