#![cfg_attr(not(any(test, feature = "csv")), no_std)]

pub use angles::QuatOrder;

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod phase;
pub use phase::*;

pub mod sagittal;
pub use sagittal::*;

pub mod detector;
pub use detector::*;

pub mod feedback;
pub use feedback::*;

pub mod actuation;
pub use actuation::*;

pub mod session;
pub use session::*;

#[cfg(test)]
mod tests;
