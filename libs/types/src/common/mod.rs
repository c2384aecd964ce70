//! Common types shared across the type system

pub mod errors;
