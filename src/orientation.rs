//! EXIF orientation of source dimensions and focal points.
//!
//! Wallpapers decoded from camera-originated files store their dimensions
//! and curated focal points in sensor coordinates. Before fitting, both are
//! mapped into display space. Only the transforms the engine consumes are
//! kept here — a rotation (0, 90, 180, 270 degrees clockwise) optionally
//! followed by a horizontal flip covers all 8 EXIF orientations.

use crate::fit::Size;

/// Image orientation: rotation in 90° steps, then an optional horizontal
/// flip. All 8 EXIF orientations map to this.
///
/// ```text
///     1: Identity    2: FlipH       3: Rotate180   4: FlipV
///     5: Transpose   6: Rotate90    7: Transverse  8: Rotate270
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Rotation in 90-degree increments (0-3). 0=0°, 1=90°, 2=180°, 3=270°.
    pub rotation: u8,
    /// Horizontal flip applied after rotation.
    pub flip: bool,
}

impl Orientation {
    /// Identity (no transformation). EXIF 1.
    pub const IDENTITY: Self = Self {
        rotation: 0,
        flip: false,
    };
    /// Horizontal flip. EXIF 2.
    pub const FLIP_H: Self = Self {
        rotation: 0,
        flip: true,
    };
    /// 180° rotation. EXIF 3.
    pub const ROTATE_180: Self = Self {
        rotation: 2,
        flip: false,
    };
    /// Vertical flip. EXIF 4.
    pub const FLIP_V: Self = Self {
        rotation: 2,
        flip: true,
    };
    /// Transpose (reflect over main diagonal). EXIF 5.
    pub const TRANSPOSE: Self = Self {
        rotation: 1,
        flip: true,
    };
    /// 90° clockwise rotation. EXIF 6.
    pub const ROTATE_90: Self = Self {
        rotation: 1,
        flip: false,
    };
    /// Transverse (reflect over anti-diagonal). EXIF 7.
    pub const TRANSVERSE: Self = Self {
        rotation: 3,
        flip: true,
    };
    /// 270° clockwise rotation (90° counter-clockwise). EXIF 8.
    pub const ROTATE_270: Self = Self {
        rotation: 3,
        flip: false,
    };

    /// All 8 orientations, indexed by EXIF value - 1.
    pub const ALL: [Self; 8] = [
        Self::IDENTITY,
        Self::FLIP_H,
        Self::ROTATE_180,
        Self::FLIP_V,
        Self::TRANSPOSE,
        Self::ROTATE_90,
        Self::TRANSVERSE,
        Self::ROTATE_270,
    ];

    /// Create from EXIF orientation tag (1-8). Returns `None` for invalid values.
    pub fn from_exif(value: u8) -> Option<Self> {
        if (1..=8).contains(&value) {
            Some(Self::ALL[(value - 1) as usize])
        } else {
            None
        }
    }

    /// Convert to EXIF orientation tag (1-8).
    pub fn to_exif(self) -> u8 {
        for (i, &o) in Self::ALL.iter().enumerate() {
            if o == self {
                return (i + 1) as u8;
            }
        }
        // Only reachable for a hand-built Orientation with rotation > 3.
        1
    }

    /// Whether this is the identity transformation.
    pub fn is_identity(self) -> bool {
        self.rotation == 0 && !self.flip
    }

    /// Whether this orientation swaps width and height.
    pub fn swaps_axes(self) -> bool {
        self.rotation % 2 == 1
    }

    /// Transform source dimensions to display dimensions.
    pub fn transform_dimensions(self, w: u32, h: u32) -> Size {
        if self.swaps_axes() {
            Size::new(h, w)
        } else {
            Size::new(w, h)
        }
    }

    /// Map a continuous point from source space into display space.
    ///
    /// `(0, 0)` is the top-left corner and `(w, h)` the bottom-right; unlike
    /// pixel-index mapping there is no `-1` since points address positions,
    /// not cells. The display frame's dimensions are
    /// [`transform_dimensions`](Self::transform_dimensions)`(w, h)`.
    pub fn transform_point(self, x: f32, y: f32, w: u32, h: u32) -> (f32, f32) {
        let (w, h) = (w as f32, h as f32);
        match (self.rotation, self.flip) {
            // Identity
            (0, false) => (x, y),
            // FlipH
            (0, true) => (w - x, y),
            // Rotate90
            (1, false) => (h - y, x),
            // Transpose
            (1, true) => (y, x),
            // Rotate180
            (2, false) => (w - x, h - y),
            // FlipV
            (2, true) => (x, h - y),
            // Rotate270
            (3, false) => (y, w - x),
            // Transverse
            (3, true) => (h - y, w - x),
            _ => (x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exif_round_trip() {
        for v in 1..=8u8 {
            let o = Orientation::from_exif(v).unwrap();
            assert_eq!(o.to_exif(), v, "round-trip failed for EXIF {v}");
        }
    }

    #[test]
    fn exif_invalid() {
        assert!(Orientation::from_exif(0).is_none());
        assert!(Orientation::from_exif(9).is_none());
        assert!(Orientation::from_exif(255).is_none());
    }

    #[test]
    fn identity_properties() {
        assert!(Orientation::IDENTITY.is_identity());
        assert!(!Orientation::FLIP_H.is_identity());
        assert!(!Orientation::ROTATE_90.is_identity());
    }

    #[test]
    fn swaps_axes() {
        assert!(!Orientation::IDENTITY.swaps_axes());
        assert!(!Orientation::FLIP_H.swaps_axes());
        assert!(!Orientation::ROTATE_180.swaps_axes());
        assert!(!Orientation::FLIP_V.swaps_axes());
        assert!(Orientation::TRANSPOSE.swaps_axes());
        assert!(Orientation::ROTATE_90.swaps_axes());
        assert!(Orientation::TRANSVERSE.swaps_axes());
        assert!(Orientation::ROTATE_270.swaps_axes());
    }

    #[test]
    fn transform_dimensions() {
        for &o in &Orientation::ALL {
            let d = o.transform_dimensions(100, 200);
            if o.swaps_axes() {
                assert_eq!(d, Size::new(200, 100), "{o:?}");
            } else {
                assert_eq!(d, Size::new(100, 200), "{o:?}");
            }
        }
    }

    #[test]
    fn point_stays_in_display_frame() {
        let (w, h) = (100u32, 200u32);
        let points = [
            (0.0f32, 0.0f32),
            (100.0, 200.0),
            (30.0, 150.0),
            (50.0, 100.0),
        ];
        for &o in &Orientation::ALL {
            let d = o.transform_dimensions(w, h);
            for &(x, y) in &points {
                let (dx, dy) = o.transform_point(x, y, w, h);
                assert!(
                    (0.0..=d.width as f32).contains(&dx)
                        && (0.0..=d.height as f32).contains(&dy),
                    "({x},{y}) mapped to ({dx},{dy}) outside {}x{} for {o:?}",
                    d.width,
                    d.height
                );
            }
        }
    }

    #[test]
    fn center_maps_to_center() {
        let (w, h) = (100u32, 200u32);
        for &o in &Orientation::ALL {
            let d = o.transform_dimensions(w, h);
            let (dx, dy) = o.transform_point(50.0, 100.0, w, h);
            assert_eq!(
                (dx, dy),
                (d.width as f32 / 2.0, d.height as f32 / 2.0),
                "center not preserved for {o:?}"
            );
        }
    }

    #[test]
    fn corner_mapping_rotate90() {
        // Top-left of the source lands at the top-right of the display
        // frame under a clockwise quarter turn.
        let (dx, dy) = Orientation::ROTATE_90.transform_point(0.0, 0.0, 100, 200);
        assert_eq!((dx, dy), (200.0, 0.0));

        // Bottom-left lands at top-left.
        let (dx, dy) = Orientation::ROTATE_90.transform_point(0.0, 200.0, 100, 200);
        assert_eq!((dx, dy), (0.0, 0.0));
    }

    #[test]
    fn corner_mapping_flip_h() {
        let (dx, dy) = Orientation::FLIP_H.transform_point(0.0, 0.0, 100, 200);
        assert_eq!((dx, dy), (100.0, 0.0));

        let (dx, dy) = Orientation::FLIP_H.transform_point(100.0, 200.0, 100, 200);
        assert_eq!((dx, dy), (0.0, 200.0));
    }

    #[test]
    fn transverse_is_antidiagonal_reflection() {
        // Reflecting twice over the anti-diagonal is the identity.
        let (w, h) = (100u32, 200u32);
        let (dx, dy) = Orientation::TRANSVERSE.transform_point(30.0, 150.0, w, h);
        let d = Orientation::TRANSVERSE.transform_dimensions(w, h);
        let (rx, ry) = Orientation::TRANSVERSE.transform_point(dx, dy, d.width, d.height);
        assert_eq!((rx, ry), (30.0, 150.0));
    }
}
