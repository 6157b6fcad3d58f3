use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::error::{FramepressError, FramepressResult};
use crate::layout::model::FrameLayout;

/// Name of the frame catalog manifest expected under the store root.
pub const CATALOG_FILE: &str = "frames.json";

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One administrator-defined frame: display name, artwork file, and slot layout.
pub struct FrameDef {
    /// Human-readable frame name.
    pub name: String,
    /// Artwork path relative to the store root.
    pub artwork: String,
    /// Slot layout associated 1:1 with the artwork.
    pub layout: FrameLayout,
    /// Whether the frame is offered to visitors.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Clone, Debug)]
/// Filesystem-backed frame catalog.
///
/// Resolves frame identifiers to their layout and artwork bytes. All catalog IO happens at
/// [`FrameStore::load`] time or in [`FrameStore::artwork_bytes`]; the compositor itself never
/// touches the filesystem.
pub struct FrameStore {
    root: PathBuf,
    frames: BTreeMap<String, FrameDef>,
}

impl FrameStore {
    /// Load the catalog manifest (`frames.json`) from directory `root`.
    ///
    /// The manifest maps frame identifiers to [`FrameDef`] entries. Every layout in the
    /// catalog is validated up front so a bad frame fails at load time, not mid-render.
    pub fn load(root: impl Into<PathBuf>) -> FramepressResult<Self> {
        let root = root.into();
        let path = root.join(CATALOG_FILE);
        let f = File::open(&path).map_err(|e| {
            FramepressError::asset_read(format!("open frame catalog '{}': {e}", path.display()))
        })?;
        let frames: BTreeMap<String, FrameDef> = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| {
                FramepressError::asset_read(format!(
                    "parse frame catalog '{}': {e}",
                    path.display()
                ))
            })?;

        for (id, def) in &frames {
            def.layout
                .validate()
                .map_err(|e| FramepressError::layout(format!("frame '{id}': {e}")))?;
            normalize_rel_path(&def.artwork)
                .map_err(|e| FramepressError::asset_read(format!("frame '{id}': {e}")))?;
        }

        Ok(Self { root, frames })
    }

    /// Return root directory used when resolving artwork paths.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up a frame definition by identifier.
    pub fn get(&self, id: &str) -> FramepressResult<&FrameDef> {
        self.frames
            .get(id)
            .ok_or_else(|| FramepressError::asset_read(format!("unknown frame '{id}'")))
    }

    /// Iterate frames currently offered to visitors, in identifier order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &FrameDef)> {
        self.frames
            .iter()
            .filter(|(_, def)| def.active)
            .map(|(id, def)| (id.as_str(), def))
    }

    /// Read the artwork bytes for frame `id`.
    pub fn artwork_bytes(&self, id: &str) -> FramepressResult<Vec<u8>> {
        let def = self.get(id)?;
        let rel = normalize_rel_path(&def.artwork)?;
        let path = self.root.join(Path::new(&rel));
        std::fs::read(&path).map_err(|e| {
            FramepressError::asset_read(format!(
                "read artwork for frame '{id}' from '{}': {e}",
                path.display()
            ))
        })
    }
}

/// Normalize and validate a store-relative artwork path.
///
/// The normalized result uses `/` separators and drops `.` segments. Absolute paths and
/// parent traversals (`..`) are rejected so a catalog entry cannot escape the store root.
pub fn normalize_rel_path(source: &str) -> FramepressResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(FramepressError::asset_read(
            "artwork paths must be relative",
        ));
    }

    let mut parts = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(FramepressError::asset_read(
                "artwork paths must not contain '..'",
            ));
        }
        parts.push(part);
    }

    if parts.is_empty() {
        return Err(FramepressError::asset_read(
            "artwork path must name a file",
        ));
    }

    Ok(parts.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
