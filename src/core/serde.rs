/// Serde helper functions for custom serialization/deserialization
use crate::core::types::Tick;

/// Skip serializing if value is zero
pub fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}

/// Skip serializing if value is zero
pub fn is_zero_tick(value: &Tick) -> bool {
    *value == 0
}
