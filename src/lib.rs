//! Focal-point crop/scale layout for viewport background fills.
//!
//! Given a source image's dimensions, an optional focal point, and a target
//! viewport, computes the scale and crop rectangle that make the image
//! exactly fill the viewport without letterboxing, keeping the focal point
//! as centered as the image allows.
//!
//! Pure geometry — no pixel operations, no I/O, `no_std` compatible.
//!
//! # Modules
//!
//! - [`fit`] — the focal-crop-scale engine
//! - [`orientation`] — EXIF orientation of dimensions and focal points
//! - [`source`] — image source provenance (`alloc`)
//! - [`cache`] — bounded cache for caller-owned decoded entries (`alloc`)
//! - `svg` — fit-plan visualization (`svg` feature)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod cache;
pub mod fit;
pub mod orientation;
#[cfg(feature = "alloc")]
pub mod source;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types from fit module
pub use fit::{FitError, FitPlan, FocalPoint, Rect, Size, Viewport};
pub use orientation::Orientation;

#[cfg(feature = "alloc")]
pub use cache::BoundedCache;
#[cfg(feature = "alloc")]
pub use source::ImageSource;
