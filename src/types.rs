//! Core geometric types for figure layout.
//!
//! Angles are measured in half-turns (1.0 = 180 degrees) because the
//! direction table and the jitter bounds are expressed in that unit;
//! conversion to radians happens exactly once, inside [`Point::offset`].

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use glam::DVec2;

/// An angle in half-turn units: 0 is 0 degrees, 0.5 is 90 degrees,
/// 1 is 180 degrees, 1.5 is 270 degrees.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// One full turn, in half-turn units.
    pub const TURN: f64 = 2.0;

    /// Wrap into `[0, 2)`. Direction bookkeeping treats angles modulo a
    /// full turn.
    #[inline]
    pub fn normalized(self) -> Angle {
        Angle(self.0.rem_euclid(Self::TURN))
    }

    /// Convert to radians: `half_turns * pi`.
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0 * std::f64::consts::PI
    }

    /// Get the raw half-turn value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle { Angle(self.0 + rhs.0) }
}
impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle { Angle(self.0 - rhs.0) }
}
impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle { Angle(-self.0) }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A segment length (or ellipse radius) in output units.
///
/// Lengths come out of the proportion table already multiplied by the
/// base factor and the per-figure scale; there is no separate model unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Get the absolute value
    #[inline]
    pub fn abs(self) -> Length {
        Length(self.0.abs())
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}
impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length { Length(self.0 - rhs.0) }
}
impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length { Length(self.0 * rhs) }
}
impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length { Length(-self.0) }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Length {
    fn sub_assign(&mut self, rhs: Length) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position in the drawing plane. y grows upward; the envelope the
/// primitives get wrapped in carries a `cartesian` class so stylesheets
/// can flip accordingly.
///
/// Points are immutable values. Every joint of a figure is derived from
/// an earlier point via [`Point::offset`], the only coordinate transform
/// in the system.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Polar offset: the point `length` away from `self` in the direction
    /// of `angle`.
    ///
    /// Total for finite inputs; a negative length walks backward.
    pub fn offset(self, angle: Angle, length: Length) -> Point {
        let step = DVec2::from_angle(angle.to_radians()) * length.raw();
        Point::new(self.x + step.x, self.y + step.y)
    }

    /// Straight-line distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        DVec2::from(self).distance(DVec2::from(other))
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> DVec2 {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Point {
        Point::new(v.x, v.y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}
impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
