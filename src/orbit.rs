// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Mandelbrot iteration itself: `z = z * z + c`, starting at zero.

use num::Complex;

/// A point on the complex plane.
pub type Point = Complex<f64>;

/// The squared escape radius.  Once |z| passes 2 the orbit is gone.
pub const ESCAPE_NORM_SQR: f64 = 4.0;

/// This is our classic iterator function.  Returns the iteration
/// (counting from 1) on which the orbit of `point` left the circle of
/// radius 2, or `depth` if it was still inside after `depth`
/// iterations.
pub fn orbital_length(point: Point, depth: usize) -> usize {
    let mut z = Complex::new(0.0_f64, 0.0_f64);
    for i in 1..=depth {
        z = z * z + point;
        if z.norm_sqr() > ESCAPE_NORM_SQR {
            return i;
        }
    }
    depth
}

/// The positions an orbit visits while it stays inside the escape
/// radius, truncated after a fixed number of steps.  The position that
/// escapes is never yielded.
#[derive(Clone, Debug)]
pub struct Orbit {
    c: Point,
    z: Point,
    remaining: usize,
}

impl Orbit {
    /// The orbit of `c`, at most `steps` long.
    pub fn new(c: Point, steps: usize) -> Self {
        Orbit {
            c,
            z: Complex::new(0.0, 0.0),
            remaining: steps,
        }
    }
}

impl Iterator for Orbit {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.z = self.z * self.z + self.c;
        if self.z.norm_sqr() > ESCAPE_NORM_SQR {
            self.remaining = 0;
            return None;
        }
        self.remaining -= 1;
        Some(self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(orbital_length(Complex::new(0.0, 0.0), 50), 50);
        assert_eq!(orbital_length(Complex::new(-1.0, 0.0), 50), 50);
    }

    #[test]
    fn escaping_iteration_is_counted() {
        // 3 escapes at once, 1 goes 1, 2, 5, and 2 goes 2, 6.
        assert_eq!(orbital_length(Complex::new(3.0, 0.0), 100), 1);
        assert_eq!(orbital_length(Complex::new(1.0, 0.0), 100), 3);
        assert_eq!(orbital_length(Complex::new(2.0, 0.0), 100), 2);
    }

    #[test]
    fn depth_caps_the_count() {
        assert_eq!(orbital_length(Complex::new(1.0, 0.0), 2), 2);
        assert_eq!(orbital_length(Complex::new(1.0, 0.0), 1), 1);
    }

    #[test]
    fn orbital_length_is_deterministic() {
        let c = Complex::new(-0.7453, 0.1127);
        let first = orbital_length(c, 5_000);
        for _ in 0..10 {
            assert_eq!(orbital_length(c, 5_000), first);
        }
    }

    #[test]
    fn orbit_stops_before_the_escaping_point() {
        let points: Vec<Complex<f64>> = Orbit::new(Complex::new(1.0, 0.0), 100).collect();
        assert_eq!(points, vec![Complex::new(1.0, 0.0), Complex::new(2.0, 0.0)]);
    }

    #[test]
    fn orbit_is_truncated() {
        assert_eq!(Orbit::new(Complex::new(0.0, 0.0), 7).count(), 7);
        assert_eq!(Orbit::new(Complex::new(0.0, 0.0), 0).count(), 0);
    }

    #[test]
    fn escaping_orbit_yields_one_less_than_its_length() {
        // 0.5+0.5i, 0.5+1i, -0.25+1.5i, -1.6875-0.25i, then out.
        let c = Complex::new(0.5, 0.5);
        let length = orbital_length(c, 1_000);
        assert_eq!(length, 5);
        assert_eq!(Orbit::new(c, length).count(), length - 1);
    }
}
