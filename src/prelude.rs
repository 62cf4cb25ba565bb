pub(crate) use alloc::format;
pub(crate) use alloc::string::String;
pub(crate) use core::fmt::Debug;

pub use crate::error::*;

pub type Result<T> = core::result::Result<T, TrackerError>;
