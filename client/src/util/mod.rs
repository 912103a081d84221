//! Small client-side helpers shared by components.

pub mod year;
