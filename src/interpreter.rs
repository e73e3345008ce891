//! Runs a sequence of [`TurtleOp`]s against an immutable [`Turtle`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure the starting pose with a
//! [`TurtleConfig`], then call [`TurtleInterpreter::run`] with the ops to apply.

use crate::error::TurtleError;
use crate::turtle::{Turtle, TurtleOp};

/// Configuration for turtle interpretation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TurtleConfig {
    /// Starting x coordinate.
    pub start_x: f64,
    /// Starting y coordinate.
    pub start_y: f64,
    /// Starting heading in radians.
    pub start_heading: f64,
}

/// Applies op sequences to a fresh turtle built from a [`TurtleConfig`].
pub struct TurtleInterpreter {
    config: TurtleConfig,
}

impl TurtleInterpreter {
    pub fn new(config: TurtleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// The pose every run starts from.
    pub fn start(&self) -> Result<Turtle, TurtleError> {
        Turtle::new(
            self.config.start_x,
            self.config.start_y,
            self.config.start_heading,
        )
    }

    /// Applies `ops` in order and returns the final pose.
    ///
    /// Each op sees the result of the previous one. The first failing op stops
    /// the run and its error is returned.
    pub fn run(&self, ops: &[TurtleOp]) -> Result<Turtle, TurtleError> {
        ops.iter().try_fold(self.start()?, |turtle, op| {
            tracing::trace!(?op, %turtle, "applying");
            turtle.apply(*op)
        })
    }
}

impl Default for TurtleInterpreter {
    fn default() -> Self {
        Self::new(TurtleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turtle::Slot;

    #[test]
    fn empty_program_returns_start() {
        let interp = TurtleInterpreter::new(TurtleConfig {
            start_x: 2.0,
            start_y: -1.0,
            start_heading: 0.3,
        });
        assert_eq!(interp.config().start_y, -1.0);
        assert_eq!(interp.run(&[]).unwrap(), Turtle::new(2.0, -1.0, 0.3).unwrap());
    }

    #[test]
    fn ops_apply_to_previous_result() {
        let ops = [
            TurtleOp::Forward(10.0),
            TurtleOp::Set(Slot::Direction, std::f64::consts::FRAC_PI_2),
            TurtleOp::Forward(5.0),
        ];
        let t = TurtleInterpreter::default().run(&ops).unwrap();
        assert!((t.x() - 10.0).abs() < 1e-9);
        assert!((t.y() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn first_error_aborts_run() {
        let ops = [
            TurtleOp::Forward(1.0),
            TurtleOp::Right(f64::NAN),
            TurtleOp::Forward(1.0),
        ];
        assert!(matches!(
            TurtleInterpreter::default().run(&ops),
            Err(TurtleError::InvalidArgument {
                field: "direction",
                ..
            })
        ));
    }

    #[test]
    fn invalid_start_is_reported() {
        let interp = TurtleInterpreter::new(TurtleConfig {
            start_y: f64::INFINITY,
            ..Default::default()
        });
        assert!(interp.run(&[TurtleOp::Forward(1.0)]).is_err());
    }
}
