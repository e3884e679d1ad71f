//! Focal-point crop/scale computation for viewport fills.
//!
//! Computes the scale-then-crop transform that makes a source image exactly
//! fill a viewport, keeping a focal point as centered as the image allows.
//! Pure geometry — no pixel operations, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zenfit::{FocalPoint, Size, Viewport};
//!
//! let plan = Viewport::new(400, 400)
//!     .fit(Size::new(1000, 500), FocalPoint::UNSET)
//!     .unwrap();
//!
//! // Scaled to span the viewport height, crop centered on the fallback focal
//! assert_eq!(plan.scaled, Size::new(800, 400));
//! assert_eq!((plan.crop.x, plan.crop.y), (200, 0));
//! ```

#[cfg(not(feature = "std"))]
use num_traits::Float as _;

use crate::orientation::Orientation;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate one past the right edge.
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Y coordinate one past the bottom edge.
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Focal point in source-image pixel coordinates.
///
/// `(0, 0)` is the sentinel for "unset". Each zero axis falls back
/// independently: `x == 0` substitutes the horizontal center, `y == 0` skips
/// the vertical pass and centers the crop vertically instead. Coordinates
/// beyond the image bounds are not an error — the crop pins to the far edge.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FocalPoint {
    pub x: f32,
    pub y: f32,
}

impl FocalPoint {
    /// The unset sentinel. Behaves identically to a focal point at the
    /// exact image center.
    pub const UNSET: Self = Self { x: 0.0, y: 0.0 };

    /// Create a focal point at the given source coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether both axes carry the unset sentinel.
    pub fn is_unset(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Target area the fitted image must exactly fill.
///
/// Entry point for the engine:
///
/// ```
/// use zenfit::{FocalPoint, Size, Viewport};
///
/// let plan = Viewport::new(400, 400)
///     .fit(Size::new(200, 200), FocalPoint::new(50.0, 50.0))
///     .unwrap();
///
/// // Source smaller than the viewport — upscale path
/// assert_eq!(plan.scaled, Size::new(400, 400));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Create a viewport with the given target dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport dimensions as a [`Size`].
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Compute the scale-then-crop transform for a source image.
    ///
    /// The horizontal pass anchors the scale on the viewport height (falling
    /// back to the width anchor when the scaled image would be too narrow to
    /// cover) and places the crop around the focal x. When `focal.y > 0`, a
    /// vertical pass re-derives the scale anchored on the viewport width and
    /// places the crop around the focal y; its dimensions supersede the
    /// horizontal pass's rather than composing with them (see DESIGN.md).
    ///
    /// The result always satisfies `scaled >= viewport` on both axes and
    /// keeps the crop inside the scaled bounds, pinning to the nearest edge
    /// where the focal point is too close to one.
    pub fn fit(&self, source: Size, focal: FocalPoint) -> Result<FitPlan, FitError> {
        if source.width == 0 || source.height == 0 {
            return Err(FitError::ZeroSourceDimension);
        }
        if self.width == 0 || self.height == 0 {
            return Err(FitError::ZeroViewportDimension);
        }

        let (vw, vh) = (self.width, self.height);
        let sw = source.width as f64;
        let sh = source.height as f64;

        // Horizontal pass: span the viewport height and let the width
        // overflow for the crop to eat.
        let mut scaled_w = (vh as f64 * sw / sh).round() as u32;
        let mut scaled_h = vh;
        if scaled_w < vw {
            // Too narrow to cover — anchor on width instead. Covers
            // landscape viewports and unusual tablet aspect ratios.
            scaled_w = vw;
            scaled_h = (vw as f64 * sh / sw).round() as u32;
        }

        let focal_x = if focal.x == 0.0 { sw / 2.0 } else { focal.x as f64 };
        let crop_x = crop_offset(scaled_w, vw, focal_x / sw);

        // Vertical pass, only when a vertical focal point is present.
        let (scaled, crop_y) = if focal.y > 0.0 {
            let mut w = vw;
            let mut h = (vw as f64 * sh / sw).round() as u32;
            if h < vh {
                h = vh;
                w = (vh as f64 * sw / sh).round() as u32;
            }
            (Size::new(w, h), crop_offset(h, vh, focal.y as f64 / sh))
        } else {
            // No vertical focal point: center the crop vertically.
            (
                Size::new(scaled_w, scaled_h),
                scaled_h.saturating_sub(vh) / 2,
            )
        };

        // The two passes round independently, so pin the crop origin to the
        // nearest valid edge of whichever dimensions won.
        let crop = Rect::new(
            crop_x.min(scaled.width.saturating_sub(vw)),
            crop_y.min(scaled.height.saturating_sub(vh)),
            vw,
            vh,
        );

        Ok(FitPlan {
            source,
            scaled,
            crop,
        })
    }

    /// Like [`fit`](Self::fit), for a source that carries an EXIF
    /// orientation. Dimensions and focal point are mapped into display
    /// space before fitting.
    ///
    /// Rotations mix the axes, so the per-axis sentinel fallback is only
    /// meaningful in source space: zero axes are resolved to the source
    /// center before the transform.
    pub fn fit_oriented(
        &self,
        source: Size,
        focal: FocalPoint,
        orientation: Orientation,
    ) -> Result<FitPlan, FitError> {
        if orientation.is_identity() {
            return self.fit(source, focal);
        }
        if source.width == 0 || source.height == 0 {
            return Err(FitError::ZeroSourceDimension);
        }

        let fx = if focal.x == 0.0 {
            source.width as f32 / 2.0
        } else {
            focal.x
        };
        let fy = if focal.y == 0.0 {
            source.height as f32 / 2.0
        } else {
            focal.y
        };
        let (dx, dy) = orientation.transform_point(fx, fy, source.width, source.height);
        let oriented = orientation.transform_dimensions(source.width, source.height);
        self.fit(oriented, FocalPoint::new(dx, dy))
    }
}

/// Computed scale-then-crop transform.
///
/// The caller scales the source image to `scaled`, then crops `crop` out of
/// it; the crop is always exactly viewport-sized and inside the scaled
/// bounds. Computed fresh per request — never cached or mutated by the
/// engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FitPlan {
    /// Original source dimensions.
    pub source: Size,
    /// Dimensions to scale the source to.
    pub scaled: Size,
    /// Viewport-sized region to crop out of the scaled image.
    pub crop: Rect,
}

impl FitPlan {
    /// Whether resampling is needed (scaled dimensions differ from source).
    pub fn needs_resize(&self) -> bool {
        self.scaled != self.source
    }

    /// Whether cropping is needed (crop does not cover the scaled image).
    pub fn needs_crop(&self) -> bool {
        self.crop.x != 0
            || self.crop.y != 0
            || self.crop.width != self.scaled.width
            || self.crop.height != self.scaled.height
    }

    /// Output dimensions (always the viewport's).
    pub fn output(&self) -> Size {
        Size::new(self.crop.width, self.crop.height)
    }
}

/// Fit computation error. Any error is a caller programming defect — the
/// engine is a deterministic pure function with no retry semantics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FitError {
    /// Source image has zero width or height.
    ZeroSourceDimension,
    /// Viewport has zero width or height.
    ZeroViewportDimension,
}

// ============================================================================
// Internal geometry
// ============================================================================

/// Map a focal ratio into scaled space and derive the crop origin on one
/// axis. The focal point lands at the viewport center unless that would push
/// the crop outside the scaled image; then the crop pins to the near or far
/// edge.
fn crop_offset(scaled: u32, viewport: u32, focal_ratio: f64) -> u32 {
    let half = viewport as f64 / 2.0;
    let focal = scaled as f64 * focal_ratio;
    if focal < half {
        0
    } else if (scaled as f64 - focal) < half {
        scaled - viewport
    } else {
        (focal - half).round() as u32
    }
}
