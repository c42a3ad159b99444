#![forbid(unsafe_code)]

//! Interactive demo for the peekcard carousel.

pub mod app;
pub mod cli;
pub mod session;
