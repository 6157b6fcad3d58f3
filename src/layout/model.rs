use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{FramepressError, FramepressResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A frame's slot layout.
///
/// This is the JSON-facing, administrator-edited description of where visitor photos land on
/// the output canvas: `{"w": ..., "h": ..., "slots": [{"x", "y", "w", "h"}, ...]}`.
///
/// Slot order is significant. It is the single source of truth for which photo goes where:
/// photo `i` of an ordered assignment fills `slots[i]`, and on overlap later slots paint over
/// earlier ones.
pub struct FrameLayout {
    /// Output canvas width in pixels.
    #[serde(rename = "w")]
    pub width: u32,
    /// Output canvas height in pixels.
    #[serde(rename = "h")]
    pub height: u32,
    /// Ordered photo slots; may be empty (artwork-only frame).
    #[serde(default)]
    pub slots: Vec<Slot>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A rectangular photo placeholder in canvas coordinates.
///
/// Slots may overlap and are not checked against canvas bounds; the frame author is
/// responsible for placement.
pub struct Slot {
    /// Left edge in canvas pixels.
    pub x: u32,
    /// Top edge in canvas pixels.
    pub y: u32,
    /// Slot width in pixels.
    pub w: u32,
    /// Slot height in pixels.
    pub h: u32,
}

impl FrameLayout {
    /// Parse a frame layout from a JSON string.
    ///
    /// Missing canvas dimensions are a parse error, not a silent default.
    pub fn from_json_str(s: &str) -> FramepressResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FramepressError::layout(format!("parse frame layout JSON: {e}")))
    }

    /// Parse a frame layout from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FramepressResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FramepressError::layout(format!("parse frame layout JSON: {e}")))
    }

    /// Parse a frame layout from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FramepressResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FramepressError::layout(format!("open frame layout '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate layout invariants.
    ///
    /// Checks canvas dimensions and slot geometry. Slot overlap and out-of-bounds placement
    /// are intentionally not checked.
    pub fn validate(&self) -> FramepressResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FramepressError::layout("canvas width/height must be > 0"));
        }
        for (index, slot) in self.slots.iter().enumerate() {
            if slot.w == 0 || slot.h == 0 {
                return Err(FramepressError::layout(format!(
                    "slot {index} has degenerate size {}x{}",
                    slot.w, slot.h
                )));
            }
        }
        Ok(())
    }

    /// Number of photo slots in this layout.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/model.rs"]
mod tests;
