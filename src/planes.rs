// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners defining the leftlower and rightupper corners of the
//! complex window.
use error::{RenderError, Result};
use num::Complex;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// The x, y of a cell on the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian
/// plane, and a complex cartesian plane.  Maps points from the
/// complex plane onto cells of the integral one.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The far corner of the integral cartesian plane.  The near
    /// corner is at 0,0.
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
    // Pixels per unit of the complex plane, horizontally and
    // vertically.
    grid_factors: (f64, f64),
}

impl PlaneMapper {
    /// Takes the size of the integral plane and two points describing
    /// the complex window that is stretched over it.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "the pixel grid {}x{} has no cells",
                width, height
            )));
        }

        if !(rightupper.re > leftlower.re) {
            return Err(RenderError::InvalidConfig(
                "The left lower corner is not to the left of the right upper corner.".to_string(),
            ));
        }

        if !(rightupper.im > leftlower.im) {
            return Err(RenderError::InvalidConfig(
                "The left lower corner is not lower than the right upper corner".to_string(),
            ));
        }

        let grid_factors = (
            (width as f64) / (rightupper.re - leftlower.re),
            (height as f64) / (rightupper.im - leftlower.im),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            grid_factors,
        })
    }

    /// The total number of cells in the integral grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// The constructor refuses empty planes, so this only exists to
    /// keep `len` company.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Map a point on the complex plane to the cell containing it, or
    /// None if the point lies outside the window.  Right and top edges
    /// are exclusive, so `rightupper` itself maps to None.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> Option<Pixel> {
        let left = (point.re - self.complex_plane.0.re) * self.grid_factors.0;
        let top = (point.im - self.complex_plane.0.im) * self.grid_factors.1;
        // Written as negations so that NaN falls out too.
        if !(left >= 0.0 && left < self.integral_plane.0 as f64) {
            return None;
        }
        if !(top >= 0.0 && top < self.integral_plane.1 as f64) {
            return None;
        }
        Some(Pixel(left as usize, top as usize))
    }

    /// Since the Buddhabrot tracks the progress of a complex number as
    /// it orbits, we have to map those complex numbers back to the
    /// pixel plane and increment the cells the orbit passes through.
    /// This returns the row-major offset of the cell under `point`.
    pub fn point_to_offset(&self, point: &Complex<f64>) -> Option<usize> {
        self.point_to_pixel(point)
            .map(|p| p.1 * self.integral_plane.0 + p.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planemapper_fails_on_bad_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_empty_grid() {
        let pm = PlaneMapper::new(0, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_ok());
    }

    #[test]
    fn point_to_pixel_on_positive_planes() {
        let pm = PlaneMapper::new(5, 5, Complex::new(0.0, 0.0), Complex::new(5.0, 5.0)).unwrap();
        assert_eq!(pm.point_to_pixel(&Complex::new(0.0, 0.0)), Some(Pixel(0, 0)));
        assert_eq!(pm.point_to_pixel(&Complex::new(2.0, 2.0)), Some(Pixel(2, 2)));
        assert_eq!(pm.point_to_pixel(&Complex::new(4.9, 4.0)), Some(Pixel(4, 4)));
    }

    #[test]
    fn point_to_pixel_on_mixed_planes() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.point_to_pixel(&Complex::new(0.0, 0.0)), Some(Pixel(2, 2)));
        assert_eq!(pm.point_to_pixel(&Complex::new(-2.0, -2.0)), Some(Pixel(0, 0)));
        assert_eq!(pm.point_to_pixel(&Complex::new(1.5, -0.5)), Some(Pixel(3, 1)));
    }

    #[test]
    fn point_to_pixel_maps_on_large_mixed_planes() {
        let pm =
            PlaneMapper::new(640, 640, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.point_to_pixel(&Complex::new(0.0, 0.0)), Some(Pixel(320, 320)));
        assert_eq!(pm.point_to_pixel(&Complex::new(-2.0, -2.0)), Some(Pixel(0, 0)));
        assert_eq!(pm.point_to_pixel(&Complex::new(1.0, 1.5)), Some(Pixel(480, 560)));
    }

    #[test]
    fn far_edges_and_outside_points_are_dropped() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.point_to_pixel(&Complex::new(2.0, 2.0)), None);
        assert_eq!(pm.point_to_pixel(&Complex::new(2.0, 0.0)), None);
        assert_eq!(pm.point_to_pixel(&Complex::new(0.0, -2.1)), None);
        assert_eq!(pm.point_to_pixel(&Complex::new(::std::f64::NAN, 0.0)), None);
    }

    #[test]
    fn offsets_are_row_major() {
        let pm = PlaneMapper::new(4, 3, Complex::new(0.0, 0.0), Complex::new(4.0, 3.0)).unwrap();
        assert_eq!(pm.len(), 12);
        assert_eq!(pm.point_to_offset(&Complex::new(1.5, 0.5)), Some(1));
        assert_eq!(pm.point_to_offset(&Complex::new(3.5, 2.5)), Some(11));
        assert_eq!(pm.point_to_offset(&Complex::new(4.5, 2.5)), None);
    }
}
