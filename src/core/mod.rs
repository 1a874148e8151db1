//! Core computation modules

pub mod cost;
