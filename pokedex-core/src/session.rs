//! Session state: the cursor and the volume filter
//!
//! The entire mutable state of the device lives here: the currently
//! selected catalog id and the last volume level forwarded to the audio
//! module. Everything else is immutable tables or peripheral registers.

use crate::catalog::CATALOG_LEN;

/// Navigation direction for a cursor step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Next,
    Previous,
}

/// Maximum volume level accepted by the audio module
pub const VOLUME_MAX: u8 = 30;

/// Raw ADC full-scale reading (12-bit)
pub const ADC_MAX: u16 = 4095;

/// Minimum change in mapped volume before a new level is forwarded
///
/// A single unit of jitter on the mapped value is treated as analog
/// noise and suppressed.
const VOLUME_DEADBAND: i16 = 1;

/// Map a raw 12-bit ADC reading to a volume level in `[0, VOLUME_MAX]`
///
/// Linear scaling with floor semantics; readings above full scale clamp
/// to the maximum.
pub fn map_volume(raw: u16) -> u8 {
    let level = (raw as u32 * VOLUME_MAX as u32) / ADC_MAX as u32;
    level.min(VOLUME_MAX as u32) as u8
}

/// Mutable session state
///
/// Created once at boot; the cursor starts at entry 1 and the volume
/// filter starts at -1 so the first real reading is forwarded (unless
/// the pot sits at zero, where the deadband swallows it - preserved
/// behavior from the original device).
pub struct Session {
    cursor: u16,
    last_volume: i16,
}

impl Session {
    pub const fn new() -> Self {
        Self {
            cursor: 1,
            last_volume: -1,
        }
    }

    /// Currently selected catalog id, always within `[1, CATALOG_LEN]`
    pub fn cursor(&self) -> u16 {
        self.cursor
    }

    /// Step the cursor one entry in the given direction
    ///
    /// Wraps at both ends: past the last entry back to 1, below 1 up to
    /// the last entry. Returns the new cursor value.
    pub fn advance(&mut self, direction: Direction) -> u16 {
        self.cursor = match direction {
            Direction::Next => {
                if self.cursor >= CATALOG_LEN {
                    1
                } else {
                    self.cursor + 1
                }
            }
            Direction::Previous => {
                if self.cursor <= 1 {
                    CATALOG_LEN
                } else {
                    self.cursor - 1
                }
            }
        };
        self.cursor
    }

    /// Run a raw pot reading through the volume filter
    ///
    /// Returns `Some(level)` when the mapped level differs from the last
    /// forwarded one by more than the deadband; the caller then sends it
    /// to the audio module. Returns `None` when the change is jitter.
    pub fn apply_volume(&mut self, raw: u16) -> Option<u8> {
        let level = map_volume(raw) as i16;
        if (level - self.last_volume).abs() > VOLUME_DEADBAND {
            self.last_volume = level;
            Some(level as u8)
        } else {
            None
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cursor_starts_at_one() {
        assert_eq!(Session::new().cursor(), 1);
    }

    #[test]
    fn next_increments_and_wraps() {
        let mut session = Session::new();
        for expected in 2..=CATALOG_LEN {
            assert_eq!(session.advance(Direction::Next), expected);
        }
        // From the last entry, wrap back to the first
        assert_eq!(session.cursor(), CATALOG_LEN);
        assert_eq!(session.advance(Direction::Next), 1);
    }

    #[test]
    fn previous_decrements_and_wraps() {
        let mut session = Session::new();
        assert_eq!(session.advance(Direction::Previous), CATALOG_LEN);
        for expected in (1..CATALOG_LEN).rev() {
            assert_eq!(session.advance(Direction::Previous), expected);
        }
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn next_then_previous_is_identity_everywhere() {
        let mut session = Session::new();
        for _ in 0..CATALOG_LEN {
            let before = session.cursor();
            session.advance(Direction::Next);
            session.advance(Direction::Previous);
            assert_eq!(session.cursor(), before);
            session.advance(Direction::Next);
        }
    }

    #[test]
    fn volume_mapping_endpoints() {
        assert_eq!(map_volume(0), 0);
        assert_eq!(map_volume(2048), 15);
        assert_eq!(map_volume(4095), 30);
        // Readings past full scale clamp rather than overflow
        assert_eq!(map_volume(u16::MAX), 30);
    }

    #[test]
    fn volume_mapping_floors() {
        // 136 * 30 / 4095 = 0.996.. -> 0
        assert_eq!(map_volume(136), 0);
        // 137 * 30 / 4095 = 1.003.. -> 1
        assert_eq!(map_volume(137), 1);
    }

    #[test]
    fn volume_forwarded_only_past_deadband() {
        let mut session = Session::new();
        // last starts at -1: level 10 differs by 11, forwarded
        assert_eq!(session.apply_volume(1365), Some(10));
        // Same reading again: difference 0, suppressed
        assert_eq!(session.apply_volume(1365), None);
        // One unit of jitter: difference 1, suppressed
        assert_eq!(session.apply_volume(1502), None);
        // Two units: forwarded
        assert_eq!(session.apply_volume(1638), Some(12));
    }

    #[test]
    fn zero_reading_at_boot_is_swallowed() {
        // last starts at -1, mapped 0 differs by exactly 1: inside the
        // deadband, so the module keeps its power-on default until the
        // pot actually moves. Preserved from the original device.
        let mut session = Session::new();
        assert_eq!(session.apply_volume(0), None);
    }

    proptest! {
        #[test]
        fn mapped_volume_always_in_range(raw in 0u16..=u16::MAX) {
            prop_assert!(map_volume(raw) <= VOLUME_MAX);
        }

        #[test]
        fn cursor_always_in_range(steps in proptest::collection::vec(prop_oneof![Just(Direction::Next), Just(Direction::Previous)], 0..500)) {
            let mut session = Session::new();
            for step in steps {
                session.advance(step);
                prop_assert!((1..=CATALOG_LEN).contains(&session.cursor()));
            }
        }
    }
}
