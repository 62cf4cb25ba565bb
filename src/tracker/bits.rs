use super::BitTracker;
use crate::constants::*;

impl BitTracker<'_> {
    /// Whether unit `index` is used.
    ///
    /// Panics if `index` is not below `size`.
    pub fn get_bit(&self, index: usize) -> bool {
        self.check_index(index, "get");
        self.buffer[index / BITS_PER_BYTE] & (1 << (index % BITS_PER_BYTE)) != 0
    }

    /// Mark unit `index` used (`true`) or free (`false`).
    ///
    /// Panics if `index` is not below `size`.
    pub fn set_bit(&mut self, index: usize, value: bool) {
        self.check_index(index, "set");
        let mask = 1 << (index % BITS_PER_BYTE);
        if value {
            self.buffer[index / BITS_PER_BYTE] |= mask;
        } else {
            self.buffer[index / BITS_PER_BYTE] &= !mask;
        }
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.get_bit(index)
    }

    pub fn is_free(&self, index: usize) -> bool {
        !self.get_bit(index)
    }

    fn check_index(&self, index: usize, op: &str) {
        if index >= self.size {
            log::error!(
                "Trying to {} bit outside of the tracker! {:#x} >= {:#x}",
                op,
                index,
                self.size
            );
            panic!("Trying to {} bit outside of the tracker!", op);
        }
    }
}
