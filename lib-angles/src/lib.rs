#![cfg_attr(not(test), no_std)]

pub mod angle;
pub use angle::*;

pub mod error;
pub use error::*;

pub mod euler_angles;
pub use euler_angles::*;

pub mod vector;
pub use vector::*;

pub mod quaternion;
pub use quaternion::*;


pub const DEG_TO_RAD: f32 = 0.0174533;

pub const RAD_TO_DEG: f32 = 57.29578;
