//! Image source provenance.
//!
//! The engine only consumes raw dimensions and a focal point; where the
//! pixels come from is the caller's business. This variant type carries the
//! two provenances a new-tab background can have — a wallpaper file on disk
//! with a curated focal point, or a bundled asset with a designed center —
//! and resolves either to the inputs the engine needs.

use alloc::format;
use alloc::string::String;

use crate::fit::FocalPoint;

/// Where a background image comes from, resolved before fitting.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    /// Image decoded from a file on disk.
    FileBacked {
        /// Filesystem path to the encoded image.
        path: String,
        /// Curated focal point in source pixel coordinates.
        focal: FocalPoint,
    },
    /// Bundled asset addressed by resource id.
    ResourceBacked {
        /// Opaque asset identifier in the caller's resource table.
        id: u32,
        /// Designed center point in source pixel coordinates.
        center: FocalPoint,
    },
}

impl ImageSource {
    /// A file-backed source with its focal point.
    pub fn file_backed(path: impl Into<String>, focal: FocalPoint) -> Self {
        Self::FileBacked {
            path: path.into(),
            focal,
        }
    }

    /// A resource-backed source with its center point.
    pub fn resource_backed(id: u32, center: FocalPoint) -> Self {
        Self::ResourceBacked { id, center }
    }

    /// The focal point to hand the engine, regardless of provenance.
    pub fn focal_point(&self) -> FocalPoint {
        match self {
            Self::FileBacked { focal, .. } => *focal,
            Self::ResourceBacked { center, .. } => *center,
        }
    }

    /// Stable key for keeping decoded entries in a
    /// [`BoundedCache`](crate::cache::BoundedCache).
    pub fn cache_key(&self) -> String {
        match self {
            Self::FileBacked { path, .. } => format!("file:{path}"),
            Self::ResourceBacked { id, .. } => format!("res:{id}"),
        }
    }
}
