//! Density-aware unit conversion
//!
//! iced lays widgets out in logical units. The window's scale factor maps
//! those onto physical pixels, and images look sharpest when their edges
//! land on whole pixels. These helpers do that arithmetic.

use iced::{Point, Size};

/// An offset expressed in logical (device-independent) units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UnitOffset {
    pub x: f32,
    pub y: f32,
}

impl UnitOffset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixels per logical unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(f32);

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Density {
    /// Create a density, falling back to 1.0 for zero, negative or non-finite factors
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() && factor > 0.0 {
            Self(factor)
        } else {
            Self::default()
        }
    }

    pub fn factor(self) -> f32 {
        self.0
    }

    /// Logical units to pixels
    pub fn to_pixels(self, unit: f32) -> f32 {
        unit * self.0
    }

    /// Pixels to logical units
    pub fn to_unit(self, pixels: f32) -> f32 {
        pixels / self.0
    }

    /// Logical units to the nearest whole pixel, halves rounded up
    pub fn round_to_pixels(self, unit: f32) -> i32 {
        (self.to_pixels(unit) + 0.5).floor() as i32
    }

    /// Logical length of the whole pixel nearest to `unit`
    ///
    /// Used to place overlapping elements so their edges stay pixel-aligned.
    pub fn snap(self, unit: f32) -> f32 {
        self.to_unit(self.round_to_pixels(unit) as f32)
    }

    /// Pixel point to a unit offset
    pub fn unit_offset(self, point: Point) -> UnitOffset {
        UnitOffset::new(self.to_unit(point.x), self.to_unit(point.y))
    }

    /// Unit offset to a pixel point
    pub fn offset(self, offset: UnitOffset) -> Point {
        Point::new(self.to_pixels(offset.x), self.to_pixels(offset.y))
    }

    /// Pixel size of a `width` x `height` unit rectangle
    pub fn size(self, width: f32, height: f32) -> Size {
        Size::new(self.to_pixels(width), self.to_pixels(height))
    }

    /// Offset whose point lands on the nearest whole pixel on both axes
    pub fn snap_offset(self, offset: UnitOffset) -> UnitOffset {
        let point = self.offset(offset);
        self.unit_offset(Point::new(
            (point.x + 0.5).floor(),
            (point.y + 0.5).floor(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DENSITIES: [f32; 6] = [0.75, 1.0, 1.25, 1.5, 2.0, 3.0];
    const PIXELS: [f32; 6] = [1.0, 7.0, 33.3, 160.0, 1920.0, 12345.6];

    #[test]
    fn test_pixels_unit_roundtrip() {
        for d in DENSITIES {
            let density = Density::new(d);
            for p in PIXELS {
                let back = density.to_pixels(density.to_unit(p));
                assert!((back - p).abs() <= p * 1e-5, "d={d} p={p} back={back}");
            }
        }
    }

    #[test]
    fn test_round_half_up() {
        let density = Density::new(1.0);
        assert_eq!(density.round_to_pixels(2.5), 3);
        assert_eq!(density.round_to_pixels(2.49), 2);
        assert_eq!(Density::new(1.5).round_to_pixels(250.0), 375);
        assert_eq!(Density::new(1.25).round_to_pixels(2.0), 3);
    }

    #[test]
    fn test_invalid_density_falls_back() {
        assert_eq!(Density::new(0.0).factor(), 1.0);
        assert_eq!(Density::new(-2.0).factor(), 1.0);
        assert_eq!(Density::new(f32::NAN).factor(), 1.0);
        assert_eq!(Density::new(f32::INFINITY).factor(), 1.0);
    }

    #[test]
    fn test_snap_lands_on_pixel() {
        let density = Density::new(1.25);
        let snapped = density.snap(139.9);
        let px = density.to_pixels(snapped);
        assert!((px - px.round()).abs() < 1e-3);
    }

    #[test]
    fn test_offset_conversion() {
        let density = Density::new(2.0);
        let offset = density.unit_offset(Point::new(280.0, 500.0));
        assert_eq!(offset, UnitOffset::new(140.0, 250.0));
        assert_eq!(density.offset(offset), Point::new(280.0, 500.0));
    }

    #[test]
    fn test_snap_offset_per_axis() {
        let density = Density::new(2.0);
        let snapped = density.snap_offset(UnitOffset::new(139.9, 170.3));
        assert_eq!(snapped, UnitOffset::new(140.0, 170.5));
        assert_eq!(density.offset(snapped), Point::new(280.0, 341.0));
        assert_eq!(density.snap_offset(snapped), snapped);
    }

    #[test]
    fn test_sizes() {
        let density = Density::new(2.0);
        assert_eq!(density.size(10.0, 5.0), Size::new(20.0, 10.0));
    }
}
