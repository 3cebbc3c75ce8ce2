//! The fixed body topology: the segment set, the direction table, and the
//! proportion table that turns ratios into scaled lengths.
//!
//! Both tables are closed enums. Layout resolves parts and directions by
//! variant, which is total; the free-text lookup path ([`FromStr`] and
//! [`Proportions::get`]) exists for callers that start from names, and is
//! the only place an [`UnknownKey`] can arise.

use std::fmt;
use std::str::FromStr;

use crate::errors::{KeyKind, UnknownKey};
use crate::types::{Angle, Length};

/// Base scaling constant. Proportions are measured in half-head units and
/// multiplied by this factor to land in viewport units.
pub const FACTOR: f64 = 10.0;

/// Every measured segment of the figure.
///
/// The `HalfHeight`/`HalfWidth` entries are ellipse radii for the caps
/// (head, hands, feet); the remainder are bone lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyPart {
    HeadHalfHeight,
    HeadHalfWidth,
    Neck,
    Ribs,
    Belly,
    Shoulder,
    UpperArm,
    LowerArm,
    HandHalfHeight,
    HandHalfWidth,
    Hip,
    UpperLeg,
    LowerLeg,
    FootHalfHeight,
    FootHalfWidth,
}

impl BodyPart {
    /// All parts, in table order.
    pub const ALL: [BodyPart; 15] = [
        BodyPart::HeadHalfHeight,
        BodyPart::HeadHalfWidth,
        BodyPart::Neck,
        BodyPart::Ribs,
        BodyPart::Belly,
        BodyPart::Shoulder,
        BodyPart::UpperArm,
        BodyPart::LowerArm,
        BodyPart::HandHalfHeight,
        BodyPart::HandHalfWidth,
        BodyPart::Hip,
        BodyPart::UpperLeg,
        BodyPart::LowerLeg,
        BodyPart::FootHalfHeight,
        BodyPart::FootHalfWidth,
    ];

    /// Proportion of this segment in half-head units, before scaling.
    pub const fn ratio(self) -> f64 {
        match self {
            BodyPart::HeadHalfHeight => 0.5,
            BodyPart::HeadHalfWidth => 0.3,
            BodyPart::Neck => 0.25,
            BodyPart::Ribs => 1.0,
            BodyPart::Belly => 1.0,
            BodyPart::Shoulder => 0.75,
            BodyPart::UpperArm => 1.25,
            BodyPart::LowerArm => 1.0,
            BodyPart::HandHalfHeight => 0.3,
            BodyPart::HandHalfWidth => 0.2,
            BodyPart::Hip => 0.5,
            BodyPart::UpperLeg => 1.5,
            BodyPart::LowerLeg => 1.5,
            BodyPart::FootHalfHeight => 0.15,
            BodyPart::FootHalfWidth => 0.3,
        }
    }

    /// Jitter amplitude class for this segment. The belly and the four
    /// long limb bones swing wide; everything else stays close to its
    /// nominal direction.
    pub const fn sway_class(self) -> f64 {
        match self {
            BodyPart::Belly
            | BodyPart::UpperArm
            | BodyPart::LowerArm
            | BodyPart::UpperLeg
            | BodyPart::LowerLeg => 4.0,
            _ => 1.0,
        }
    }

    /// Table key, as spelled on the free-text lookup path.
    pub const fn name(self) -> &'static str {
        match self {
            BodyPart::HeadHalfHeight => "head_half_height",
            BodyPart::HeadHalfWidth => "head_half_width",
            BodyPart::Neck => "neck",
            BodyPart::Ribs => "ribs",
            BodyPart::Belly => "belly",
            BodyPart::Shoulder => "shoulder",
            BodyPart::UpperArm => "upper_arm",
            BodyPart::LowerArm => "lower_arm",
            BodyPart::HandHalfHeight => "hand_half_height",
            BodyPart::HandHalfWidth => "hand_half_width",
            BodyPart::Hip => "hip",
            BodyPart::UpperLeg => "upper_leg",
            BodyPart::LowerLeg => "lower_leg",
            BodyPart::FootHalfHeight => "foot_half_height",
            BodyPart::FootHalfWidth => "foot_half_width",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BodyPart {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<BodyPart, UnknownKey> {
        BodyPart::ALL
            .into_iter()
            .find(|part| part.name() == s)
            .ok_or_else(|| UnknownKey::new(KeyKind::BodyPart, s, &BodyPart::ALL.map(BodyPart::name)))
    }
}

/// Named directions, in half-turn units from the positive x axis.
///
/// The skeletal walk only uses the four cardinals; the diagonals round
/// out the table for callers positioning figures relative to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// All directions, counterclockwise from `Right`.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// The direction's angle, already within `[0, 2)` half-turns.
    pub const fn angle(self) -> Angle {
        match self {
            Direction::Right => Angle(0.0),
            Direction::UpRight => Angle(0.25),
            Direction::Up => Angle(0.5),
            Direction::UpLeft => Angle(0.75),
            Direction::Left => Angle(1.0),
            Direction::DownLeft => Angle(1.25),
            Direction::Down => Angle(1.5),
            Direction::DownRight => Angle(1.75),
        }
    }

    /// Table key, as spelled on the free-text lookup path.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::UpRight => "up-right",
            Direction::Up => "up",
            Direction::UpLeft => "up-left",
            Direction::Left => "left",
            Direction::DownLeft => "down-left",
            Direction::Down => "down",
            Direction::DownRight => "down-right",
        }
    }

    /// Resolve a direction name to its angle: the free-text lookup path.
    pub fn angle_of(name: &str) -> Result<Angle, UnknownKey> {
        name.parse::<Direction>().map(Direction::angle)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Direction {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Direction, UnknownKey> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.name() == s)
            .ok_or_else(|| {
                UnknownKey::new(KeyKind::Direction, s, &Direction::ALL.map(Direction::name))
            })
    }
}

/// The two mirrored limb sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// The horizontal direction a limb on this side extends toward.
    pub const fn direction(self) -> Direction {
        match self {
            Side::Right => Direction::Right,
            Side::Left => Direction::Left,
        }
    }
}

/// The per-figure proportion table: base ratios times [`FACTOR`] times
/// the figure scale.
///
/// Immutable once built; a render constructs one per figure and there is
/// no process-wide table to mutate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Proportions {
    scale: f64,
}

impl Proportions {
    pub fn new(scale: f64) -> Proportions {
        Proportions { scale }
    }

    /// Scaled length of a segment. Total over the closed part set.
    #[inline]
    pub fn length(&self, part: BodyPart) -> Length {
        Length(part.ratio() * FACTOR * self.scale)
    }

    /// Free-text lookup. Unknown names are a configuration error, not a
    /// value to guess at.
    pub fn get(&self, name: &str) -> Result<Length, UnknownKey> {
        name.parse::<BodyPart>().map(|part| self.length(part))
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}
