use super::BitTracker;
use crate::prelude::*;
use crate::return_error;

impl BitTracker<'_> {
    /// Find a run of `length` free units, mark it used and move the cursor
    /// past it.
    ///
    /// # Return
    ///
    /// `Ok(start)` - first unit of the run, never 0
    ///
    /// `Err(EINVAL)` if `length` is zero. Running out of space is fatal,
    /// see [`BitTracker::find_free_run`].
    pub fn allocate(&mut self, length: usize) -> Result<usize> {
        let Some(start) = self.find_free_run(length) else {
            log::warn!("Can't allocate {} units", length);
            return_error!(ErrCode::EINVAL, "Cannot allocate an empty run");
        };
        if let Err(e) = self.mark_used(start, length) {
            log::warn!("Can't set units {:#x}..{:#x} as used", start, start + length);
            return Err(e);
        }
        let end = start + length;
        self.last_free = if end == self.size { 0 } else { end };
        Ok(start)
    }

    /// Mark `length` units starting at `index` as used.
    pub fn mark_used(&mut self, index: usize, length: usize) -> Result<()> {
        self.check_range(index, length)?;
        for i in index..index + length {
            self.set_bit(i, true);
        }
        Ok(())
    }

    /// Mark `length` units starting at `index` as free and point the cursor
    /// at `index`, so the next search starts in the released region.
    pub fn mark_free(&mut self, index: usize, length: usize) -> Result<()> {
        self.check_range(index, length)?;
        for i in index..index + length {
            log::debug!("Freeing unit {:#x}", i);
            self.set_bit(i, false);
        }
        self.last_free = index;
        Ok(())
    }

    /// The range must start inside the space and end at or before `size`.
    fn check_range(&self, index: usize, length: usize) -> Result<()> {
        match index.checked_add(length) {
            Some(end) if index < self.size && end <= self.size => Ok(()),
            _ => {
                return_error!(
                    ErrCode::ERANGE,
                    "Range {:#x}+{:#x} outside of {:#x} units",
                    index,
                    length,
                    self.size
                );
            }
        }
    }
}
