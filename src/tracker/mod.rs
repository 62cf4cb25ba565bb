//! # Bit-level free-space tracking
//!
//! A [`BitTracker`] records the state of `size` units with one bit per
//! unit, packed eight to a byte in caller-provided storage:
//!
//! | byte 0: units 0..8 | byte 1: units 8..16 | ... | last byte (padding bits set) |
//!
//! Unit `i` lives in bit `i % 8` of byte `i / 8`, low bit first. A set bit
//! means used, a clear bit means free. Unit 0 is reserved and is never
//! returned by the free-run search.
//!
//! The tracker has no internal locking. Callers sharing one across
//! threads must wrap it in their own lock.

use crate::constants::*;
use crate::prelude::*;
use crate::return_error;

mod bits;
mod mark;
mod search;


/// Number of bytes needed to track `size` units.
pub const fn bytes_for(size: usize) -> usize {
    size.div_ceil(BITS_PER_BYTE)
}

pub struct BitTracker<'a> {
    buffer: &'a mut [u8],
    size: usize,
    /// Where the next free-run search starts. Always in `[0, size)`.
    last_free: usize,
}

impl<'a> BitTracker<'a> {
    /// Create a tracker over `buffer` covering `size` units.
    ///
    /// Only the first [`bytes_for`]`(size)` bytes of `buffer` are used.
    /// They are filled with ones, so every unit starts out used and must
    /// be released with [`BitTracker::mark_free`] before it can be handed out.
    ///
    /// # Return
    ///
    /// `Err(EINVAL)` if `size` is zero or `buffer` is too short.
    pub fn new(buffer: &'a mut [u8], size: usize) -> Result<Self> {
        if size == 0 {
            return_error!(ErrCode::EINVAL, "Tracker must cover at least one unit");
        }
        let bytes = bytes_for(size);
        if buffer.len() < bytes {
            return_error!(
                ErrCode::EINVAL,
                "Buffer of {} bytes cannot hold {} units",
                buffer.len(),
                size
            );
        }
        log::info!(
            "Creating tracker at address {:p} which is {} bytes big",
            buffer.as_ptr(),
            bytes
        );
        let buffer = &mut buffer[..bytes];
        buffer.fill(USED_FILL);
        log::info!("Tracker created with {} units", size);
        Ok(Self {
            buffer,
            size,
            last_free: 0,
        })
    }

    /// Create a tracker over raw storage, e.g. frames handed out by a
    /// physical memory manager.
    ///
    /// # Safety
    ///
    /// `data` must be valid for reads and writes of [`bytes_for`]`(size)`
    /// bytes for `'a`, and nothing else may access that memory while the
    /// tracker is alive.
    pub unsafe fn from_raw_parts(data: *mut u8, size: usize) -> Result<Self> {
        if data.is_null() || size == 0 {
            return_error!(ErrCode::EINVAL, "Invalid raw storage {:p} for {} units", data, size);
        }
        let buffer = unsafe { core::slice::from_raw_parts_mut(data, bytes_for(size)) };
        Self::new(buffer, size)
    }

    /// Number of units tracked.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index the next free-run search starts from.
    pub fn cursor(&self) -> usize {
        self.last_free
    }

    /// The packed bitmap bytes.
    pub fn as_raw(&self) -> &[u8] {
        self.buffer
    }

    pub fn free_count(&self) -> usize {
        (0..self.size).filter(|&i| self.is_free(i)).count()
    }

    pub fn used_count(&self) -> usize {
        self.size - self.free_count()
    }
}
