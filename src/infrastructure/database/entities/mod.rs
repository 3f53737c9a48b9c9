//! Database entities module

pub mod post;
