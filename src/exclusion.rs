// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cheap tests that throw away candidate points before we spend
//! thousands of iterations learning that they never escape.  None of
//! these are authoritative; the escape-time evaluator still decides.
//! A false "admit" costs time, and a false "reject" only thins the
//! sample a little.

use num::Complex;
use std::fmt;
use std::str::FromStr;

const D4: f64 = 1.0 / 4.0;
const D16: f64 = D4 / 4.0;

/// A predicate over candidate points.  `admits` returns true when a
/// point is worth iterating.
pub trait Exclusion {
    /// Should this point be handed to the escape-time evaluator?
    fn admits(&self, point: Complex<f64>) -> bool;
}

/// Rejects the main cardioid and the period-2 bulb, the two largest
/// regions of the set, both of which have closed forms.
#[derive(Copy, Clone, Debug, Default)]
pub struct CardioidBulb;

impl CardioidBulb {
    /// True if `point` is inside the main cardioid.
    pub fn in_cardioid(point: Complex<f64>) -> bool {
        let p = ((point.re - D4).powi(2) + point.im.powi(2)).sqrt();
        point.re < p - 2.0 * p.powi(2) + D4
    }

    /// True if `point` is inside the disc of radius 1/4 centered on -1.
    pub fn in_bulb(point: Complex<f64>) -> bool {
        (point.re + 1.0).powi(2) + point.im.powi(2) < D16
    }
}

impl Exclusion for CardioidBulb {
    fn admits(&self, point: Complex<f64>) -> bool {
        !(CardioidBulb::in_cardioid(point) || CardioidBulb::in_bulb(point))
    }
}

/// Rectangles known to lie inside the set.  Each row is
/// `(re_low, re_high, im_low, im_high)`; a point is inside when
/// `re_low < re <= re_high` and `im_low < im < im_high`.
const BOXES: [(f64, f64, f64, f64); 9] = [
    (-1.2, -1.1, -0.1, 0.1),
    (-1.1, -0.9, -0.2, 0.2),
    (-0.9, -0.8, -0.1, 0.1),
    (-0.69, -0.61, -0.2, 0.2),
    (-0.61, -0.5, -0.37, 0.37),
    (-0.5, -0.39, -0.48, 0.48),
    (-0.39, 0.14, -0.55, 0.55),
    (0.14, 0.29, -0.42, -0.07),
    (0.14, 0.29, 0.07, 0.42),
];

/// A coarser, cheaper test: a handful of axis-aligned boxes tucked
/// inside the cardioid and the bulb.
#[derive(Copy, Clone, Debug, Default)]
pub struct Boxes;

impl Exclusion for Boxes {
    fn admits(&self, point: Complex<f64>) -> bool {
        !BOXES.iter().any(|&(rl, rh, il, ih)| {
            point.re > rl && point.re <= rh && point.im > il && point.im < ih
        })
    }
}

/// Admits everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct Unfiltered;

impl Exclusion for Unfiltered {
    fn admits(&self, _point: Complex<f64>) -> bool {
        true
    }
}

/// The exclusion strategies selectable at runtime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Strategy {
    /// See [`CardioidBulb`].
    Cardioid,
    /// See [`Boxes`].
    Boxes,
    /// See [`Unfiltered`].
    Unfiltered,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Cardioid
    }
}

impl Exclusion for Strategy {
    fn admits(&self, point: Complex<f64>) -> bool {
        match *self {
            Strategy::Cardioid => CardioidBulb.admits(point),
            Strategy::Boxes => Boxes.admits(point),
            Strategy::Unfiltered => Unfiltered.admits(point),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cardioid" => Ok(Strategy::Cardioid),
            "boxes" => Ok(Strategy::Boxes),
            "none" => Ok(Strategy::Unfiltered),
            _ => Err(format!(
                "Unknown exclusion strategy '{}' (expected cardioid, boxes, or none)",
                s
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Strategy::Cardioid => "cardioid",
            Strategy::Boxes => "boxes",
            Strategy::Unfiltered => "none",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_in_the_cardioid() {
        let c = Complex::new(0.0, 0.0);
        assert!(CardioidBulb::in_cardioid(c));
        assert!(!CardioidBulb.admits(c));
    }

    #[test]
    fn minus_one_is_in_the_bulb() {
        let c = Complex::new(-1.0, 0.0);
        assert!(CardioidBulb::in_bulb(c));
        assert!(!CardioidBulb::in_cardioid(c));
        assert!(!CardioidBulb.admits(c));
    }

    #[test]
    fn bulb_uses_real_division() {
        // 0.2 from the bulb's center: inside a radius of 1/4, which an
        // integer 1/16 would have collapsed to nothing.
        assert!(!CardioidBulb.admits(Complex::new(-1.2, 0.0)));
        assert!(CardioidBulb.admits(Complex::new(-1.3, 0.0)));
    }

    #[test]
    fn points_outside_both_regions_are_admitted() {
        assert!(CardioidBulb.admits(Complex::new(1.0, 1.0)));
        assert!(CardioidBulb.admits(Complex::new(-2.0, 0.0)));
        assert!(CardioidBulb.admits(Complex::new(0.3, 0.0)));
    }

    #[test]
    fn boxes_reject_their_interiors() {
        assert!(!Boxes.admits(Complex::new(0.0, 0.0)));
        assert!(!Boxes.admits(Complex::new(-1.0, 0.0)));
        assert!(!Boxes.admits(Complex::new(0.2, 0.3)));
        assert!(Boxes.admits(Complex::new(0.2, 0.0)));
        assert!(Boxes.admits(Complex::new(1.0, 1.0)));
    }

    #[test]
    fn unfiltered_admits_the_origin() {
        assert!(Unfiltered.admits(Complex::new(0.0, 0.0)));
    }

    #[test]
    fn strategies_parse_and_dispatch() {
        assert_eq!("cardioid".parse::<Strategy>(), Ok(Strategy::Cardioid));
        assert_eq!("boxes".parse::<Strategy>(), Ok(Strategy::Boxes));
        assert_eq!("none".parse::<Strategy>(), Ok(Strategy::Unfiltered));
        assert!("bulb".parse::<Strategy>().is_err());
        assert_eq!(Strategy::default(), Strategy::Cardioid);
        assert!(!Strategy::Cardioid.admits(Complex::new(0.0, 0.0)));
        assert!(Strategy::Unfiltered.admits(Complex::new(0.0, 0.0)));
        assert_eq!(Strategy::Unfiltered.to_string(), "none");
    }
}
