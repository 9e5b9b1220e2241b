//! Instance loading from external data.

pub mod benchmark;
