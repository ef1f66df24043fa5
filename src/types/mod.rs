//! Assorted types, or rather, at present, errors.

pub mod err;
