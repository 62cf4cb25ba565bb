/// Number of units packed into one byte of the backing buffer
pub const BITS_PER_BYTE: usize = 8;

/// Unit 0 is never handed out by the free-run search
pub const RESERVED_UNIT: usize = 0;

/// Fill pattern written at construction: every unit starts out used
pub const USED_FILL: u8 = 0xFF;
