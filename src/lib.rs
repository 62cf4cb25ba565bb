//! A fixed-capacity free-space tracker using one bit per unit.

#![no_std]

extern crate alloc;

mod constants;
mod error;
mod prelude;
mod tracker;

pub use constants::*;
pub use error::*;
pub use prelude::Result;
pub use tracker::*;
