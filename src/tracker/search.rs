use super::BitTracker;
use crate::constants::*;

impl BitTracker<'_> {
    /// Find the lowest-indexed run of `length` free units at or after the
    /// cursor, wrapping to the start of the space once if nothing fits.
    ///
    /// This does not change any state; claim the run with
    /// [`BitTracker::allocate`] or [`BitTracker::mark_used`].
    ///
    /// # Return
    ///
    /// `Some(start)` with `start != 0`, or `None` if `length` is zero.
    ///
    /// # Panics
    ///
    /// If no run fits anywhere in the space.
    pub fn find_free_run(&self, length: usize) -> Option<usize> {
        if length == 0 {
            return None;
        }
        let mut start = self.last_free;
        loop {
            if let Some(found) = self.scan_from(start, length) {
                return Some(found);
            }
            if start == 0 {
                log::error!(
                    "No free run of {} units in a space of {} units",
                    length,
                    self.size
                );
                panic!("No free entry found for allocation");
            }
            // Second and last pass covers the part skipped before the cursor
            start = 0;
        }
    }

    /// Linear scan of `[start, size)` for `length` consecutive free units.
    fn scan_from(&self, start: usize, length: usize) -> Option<usize> {
        let mut run_len = 0;
        let mut run_start = 0;
        let mut i = start;
        while i < self.size {
            // Skip whole bytes with every unit used
            if i % BITS_PER_BYTE == 0
                && i + BITS_PER_BYTE <= self.size
                && self.buffer[i / BITS_PER_BYTE] == USED_FILL
            {
                run_len = 0;
                i += BITS_PER_BYTE;
                continue;
            }
            if i != RESERVED_UNIT {
                if self.get_bit(i) {
                    run_len = 0;
                } else {
                    if run_len == 0 {
                        run_start = i;
                    }
                    run_len += 1;
                    if run_len == length {
                        return Some(run_start);
                    }
                }
            }
            i += 1;
        }
        None
    }
}
