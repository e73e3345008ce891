//! Tag-based command surface over a [`Turtle`].
//!
//! [`Turtle::dispatch`] resolves a command tag (`"x"`, `"fd"`, `"update"`, ...)
//! into a [`Capability`] bound to that turtle. The command set is closed:
//! anything outside it fails with [`TurtleError::UnknownCommand`].

use crate::error::TurtleError;
use crate::turtle::{Slot, Turtle, TurtleOp};
use std::fmt;
use std::str::FromStr;

/// Every command a turtle answers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    X,
    Y,
    Direction,
    Update,
    Debug,
    Fd,
    Bk,
    Rt,
    Lt,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::X,
        Command::Y,
        Command::Direction,
        Command::Update,
        Command::Debug,
        Command::Fd,
        Command::Bk,
        Command::Rt,
        Command::Lt,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Command::X => "x",
            Command::Y => "y",
            Command::Direction => "direction",
            Command::Update => "update",
            Command::Debug => "debug",
            Command::Fd => "fd",
            Command::Bk => "bk",
            Command::Rt => "rt",
            Command::Lt => "lt",
        }
    }
}

impl FromStr for Command {
    type Err = TurtleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|cmd| cmd.tag() == s)
            .ok_or_else(|| TurtleError::UnknownCommand(s.to_owned()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What a command tag resolves to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Capability {
    /// A reader (`x`, `y`, `direction`).
    Value(f64),
    /// A one-argument motion (`fd`, `bk`, `rt`, `lt`).
    Motion(Motion),
    /// The generic single-field rebuild (`update`).
    Update(Updater),
    /// The debug-string producer (`debug`).
    Debug(Debugger),
}

impl Capability {
    pub fn as_value(&self) -> Option<f64> {
        match self {
            Capability::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn into_motion(self) -> Option<Motion> {
        match self {
            Capability::Motion(m) => Some(m),
            _ => None,
        }
    }

    pub fn into_updater(self) -> Option<Updater> {
        match self {
            Capability::Update(u) => Some(u),
            _ => None,
        }
    }

    pub fn into_debugger(self) -> Option<Debugger> {
        match self {
            Capability::Debug(d) => Some(d),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MotionKind {
    Forward,
    Back,
    Right,
    Left,
}

/// A motion captured against one turtle, waiting for its argument.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    turtle: Turtle,
    kind: MotionKind,
}

impl Motion {
    /// Runs the motion. `arg` is a step for `fd`/`bk` and an angle for `rt`/`lt`.
    pub fn call(&self, arg: f64) -> Result<Turtle, TurtleError> {
        let op = match self.kind {
            MotionKind::Forward => TurtleOp::Forward(arg),
            MotionKind::Back => TurtleOp::Back(arg),
            MotionKind::Right => TurtleOp::Right(arg),
            MotionKind::Left => TurtleOp::Left(arg),
        };
        self.turtle.apply(op)
    }
}

/// `update` captured against one turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Updater {
    turtle: Turtle,
}

impl Updater {
    /// Replaces the field named by `slot`; any other name is an
    /// [`TurtleError::InvalidAccessor`].
    pub fn call(&self, slot: &str, value: f64) -> Result<Turtle, TurtleError> {
        let slot: Slot = slot.parse()?;
        self.turtle.update(slot, value)
    }
}

/// `debug` captured against one turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Debugger {
    turtle: Turtle,
}

impl Debugger {
    pub fn call(&self) -> String {
        self.turtle.debug()
    }
}

impl Turtle {
    /// Resolves a command tag against this turtle.
    ///
    /// The returned capability holds its own copy of the pose, so calling it
    /// never affects `self`.
    pub fn dispatch(&self, tag: &str) -> Result<Capability, TurtleError> {
        Ok(self.resolve(tag.parse()?))
    }

    /// Same as [`dispatch`](Self::dispatch) for an already-parsed [`Command`].
    pub fn resolve(&self, command: Command) -> Capability {
        let turtle = *self;
        let motion = |kind| Capability::Motion(Motion { turtle, kind });

        match command {
            Command::X => Capability::Value(self.x()),
            Command::Y => Capability::Value(self.y()),
            Command::Direction => Capability::Value(self.direction()),
            Command::Update => Capability::Update(Updater { turtle }),
            Command::Debug => Capability::Debug(Debugger { turtle }),
            Command::Fd => motion(MotionKind::Forward),
            Command::Bk => motion(MotionKind::Back),
            Command::Rt => motion(MotionKind::Right),
            Command::Lt => motion(MotionKind::Left),
        }
    }
}
