//! # pose-turtle
//!
//! An immutable 2D turtle: a pose (`x`, `y`, heading) with a small, closed set of
//! pure operations. Every motion returns a new [`Turtle`]; the receiver is never
//! changed.
//!
//! Callers either use the typed methods ([`Turtle::fd`], [`Turtle::rt`], ...) or
//! go through the tag-based [`Turtle::dispatch`], which hands out a
//! [`Capability`] for each recognized command and rejects everything else.

pub mod error;
pub mod handle;
pub mod interpreter;
pub mod turtle;

pub use error::*;
pub use handle::*;
pub use interpreter::*;
pub use turtle::*;
