//! This crate provides comparison helpers that tolerate the way
//! machines represent values.
//!
//! It offers three independent facilities:
//!
//!  |Module                |Description
//!  |----------------------|------------------------------------------
//!  |[`fuzzy`]             |tolerance-based float equality and ordering
//!  |[`intersect`]         |sorted sequence against a bounded interval
//!  |[`calendar`]          |calendar-day comparison, recurring dates
//!
//! The [`fuzzy`] module declares two floats equal when they are within
//! a relative-or-absolute tolerance of each other, and keeps every
//! ordering relation consistent with that equality.  The [`intersect`]
//! module selects the elements of a sorted sequence that fall inside an
//! interval with any combination of open and closed endpoints, through
//! a caller-supplied three-way comparator; for float elements the
//! comparator of choice is [`FuzzyCmp::fuzzy_cmp`].  The [`calendar`]
//! module compares timestamps by calendar day only, handles yearly
//! recurring month/day dates, and computes the date of Easter Sunday in
//! the Gregorian and Julian calendars.
//!
//! All of it is pure, synchronous and call-scoped: no global state, no
//! I/O, nothing retained between calls.

pub mod calendar;
pub mod errors;
pub mod fuzzy;
pub mod intersect;

pub use crate::calendar::Anniversary;
pub use crate::errors::Error;
pub use crate::fuzzy::FuzzyCmp;
pub use crate::intersect::{intersect, intersect_unsorted, IntervalKind};
