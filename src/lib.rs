//! Framepress is a photobooth frame compositing engine.
//!
//! Framepress turns a frame layout (slot rectangles over decorative artwork) plus an ordered
//! set of visitor photos into one print-ready composite image.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `FrameLayout` from JSON ([`FrameLayout::from_path`]), artwork and photos via
//!    [`decode_artwork`] / [`decode_photo`] (or resolved through a [`FrameStore`])
//! 2. **Fit**: each photo is center-cropped to its slot's exact aspect ratio ([`fit_region`])
//! 3. **Compose**: white canvas, artwork blended with its alpha preserved, photos pasted
//!    opaque per slot in slot order ([`compose_canvas`])
//! 4. **Encode**: flattened to opaque RGB and encoded as a print-quality JPEG carrying a
//!    300 DPI density tag ([`compose`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs produce pixel-identical output bytes.
//! - **No IO in the compositor**: reading layouts and artwork is front-loaded in
//!   [`FrameStore`]; [`compose`] only transforms already-decoded rasters.
//! - **Inputs are never mutated**: the composite is a freshly allocated canvas.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod layout;
mod render;
mod session;

pub use assets::decode::{decode_artwork, decode_photo};
pub use assets::store::{FrameDef, FrameStore, normalize_rel_path};
pub use foundation::error::{FramepressError, FramepressResult};
pub use layout::model::{FrameLayout, Slot};
pub use render::compose::{compose, compose_canvas};
pub use render::encode::{JPEG_QUALITY, PRINT_DPI, encode_jpeg, set_jfif_density};
pub use render::fit::{CropRegion, fit_region};
pub use session::slots::SlotAssignments;
