//! Turtle pose and the pure operations defined on it.

use crate::error::TurtleError;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The state of a 2D turtle: where it stands and which way it faces.
///
/// A `Turtle` is an immutable value. Every motion returns a new pose and leaves
/// the receiver untouched, so two turtles from the same lineage never observe
/// each other's moves. Fields are private: the only ways to obtain a pose are
/// [`Turtle::new`] and the operations below, all of which reject non-finite
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPose", into = "RawPose")]
pub struct Turtle {
    /// World-space position of the turtle.
    position: DVec2,

    /// Heading in radians. `0` points along `+X`; never normalized.
    heading: f64,
}

/// A single field of the pose, as addressed by [`Turtle::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    X,
    Y,
    Direction,
}

impl Slot {
    /// The tag this slot answers to in the command surface.
    pub fn tag(self) -> &'static str {
        match self {
            Slot::X => "x",
            Slot::Y => "y",
            Slot::Direction => "direction",
        }
    }
}

impl FromStr for Slot {
    type Err = TurtleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Slot::X),
            "y" => Ok(Slot::Y),
            "direction" => Ok(Slot::Direction),
            other => Err(TurtleError::InvalidAccessor(other.to_owned())),
        }
    }
}

/// Operations that can be performed by the turtle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Move forward along the heading by the given step (`fd`).
    Forward(f64),
    /// Move backward along the heading by the given step (`bk`).
    Back(f64),
    /// Rotate clockwise, increasing the heading (`rt`).
    Right(f64),
    /// Rotate counter-clockwise, decreasing the heading (`lt`).
    Left(f64),
    /// Replace a single pose field (`update`).
    Set(Slot, f64),
}

impl Turtle {
    /// Builds a pose, failing if any argument is NaN or infinite.
    pub fn new(x: f64, y: f64, heading: f64) -> Result<Self, TurtleError> {
        check("x", x)?;
        check("y", y)?;
        check("direction", heading)?;

        Ok(Self {
            position: DVec2::new(x, y),
            heading,
        })
    }

    /// The pose at the origin facing `+X`.
    pub fn origin() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Current heading in radians.
    pub fn direction(&self) -> f64 {
        self.heading
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Returns the unit vector the turtle is facing.
    pub fn facing(&self) -> DVec2 {
        DVec2::from_angle(self.heading)
    }

    /// Moves `step` units along the heading.
    pub fn fd(&self, step: f64) -> Result<Self, TurtleError> {
        self.moved_to(self.position + self.facing() * step)
    }

    /// Moves `step` units against the heading, i.e. `fd(-step)`; `fd(s)`
    /// followed by `bk(s)` lands back on the starting point.
    pub fn bk(&self, step: f64) -> Result<Self, TurtleError> {
        self.moved_to(self.position - self.facing() * step)
    }

    /// Turns clockwise by `angle` radians.
    pub fn rt(&self, angle: f64) -> Result<Self, TurtleError> {
        Self::new(self.x(), self.y(), self.heading + angle)
    }

    /// Turns counter-clockwise by `angle` radians.
    pub fn lt(&self, angle: f64) -> Result<Self, TurtleError> {
        Self::new(self.x(), self.y(), self.heading - angle)
    }

    /// Rebuilds the pose with one field replaced.
    ///
    /// The new value goes through [`Turtle::new`] like any other pose.
    pub fn update(&self, slot: Slot, value: f64) -> Result<Self, TurtleError> {
        match slot {
            Slot::X => Self::new(value, self.y(), self.heading),
            Slot::Y => Self::new(self.x(), value, self.heading),
            Slot::Direction => Self::new(self.x(), self.y(), value),
        }
    }

    /// Applies a single [`TurtleOp`].
    pub fn apply(&self, op: TurtleOp) -> Result<Self, TurtleError> {
        match op {
            TurtleOp::Forward(step) => self.fd(step),
            TurtleOp::Back(step) => self.bk(step),
            TurtleOp::Right(angle) => self.rt(angle),
            TurtleOp::Left(angle) => self.lt(angle),
            TurtleOp::Set(slot, value) => self.update(slot, value),
        }
    }

    /// Formats the pose and writes it to the trace sink.
    pub fn debug(&self) -> String {
        let line = self.to_string();
        tracing::debug!("{line}");
        line
    }

    fn moved_to(&self, position: DVec2) -> Result<Self, TurtleError> {
        Self::new(position.x, position.y, self.heading)
    }
}

impl Default for Turtle {
    fn default() -> Self {
        Self::origin()
    }
}

impl fmt::Display for Turtle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Turtle: x: {}, y: {}, direction: {}",
            self.x(),
            self.y(),
            self.heading
        )
    }
}

fn check(field: &'static str, value: f64) -> Result<(), TurtleError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TurtleError::InvalidArgument { field, value })
    }
}

/// Wire shape of a pose. Deserialization is funneled through [`Turtle::new`].
#[derive(Serialize, Deserialize)]
struct RawPose {
    x: f64,
    y: f64,
    direction: f64,
}

impl TryFrom<RawPose> for Turtle {
    type Error = TurtleError;

    fn try_from(raw: RawPose) -> Result<Self, Self::Error> {
        Turtle::new(raw.x, raw.y, raw.direction)
    }
}

impl From<Turtle> for RawPose {
    fn from(turtle: Turtle) -> Self {
        RawPose {
            x: turtle.position.x,
            y: turtle.position.y,
            direction: turtle.heading,
        }
    }
}
