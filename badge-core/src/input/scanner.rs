//! Debounced button scanner
//!
//! Call [`ButtonScanner::scan`] once per sample period. A level change has
//! to persist for the debounce time before it is reported; a key held past
//! the hold delay reports [`EventKind::Hold`] and then repeats.

use badge_hal::{ActiveInput, EventKind, InputPin};
use heapless::Vec;

/// Scan timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanTiming {
    /// Time between calls to `scan`
    pub period_ms: u32,
    /// A new level must be stable this long
    pub debounce_ms: u32,
    /// First hold report after the press
    pub hold_ms: u32,
    /// Hold repeat interval
    pub repeat_ms: u32,
}

impl Default for ScanTiming {
    fn default() -> Self {
        Self {
            period_ms: 5,
            debounce_ms: 20,
            hold_ms: 500,
            repeat_ms: 100,
        }
    }
}

impl ScanTiming {
    fn samples(&self, ms: u32) -> u32 {
        let period = self.period_ms.max(1);
        ms.div_ceil(period).max(1)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct KeyState {
    down: bool,
    /// Consecutive samples disagreeing with `down`
    changing: u32,
    /// Samples since the debounced press
    down_for: u32,
}

/// Scanner for N active-level inputs
pub struct ButtonScanner<P, const N: usize> {
    inputs: [ActiveInput<P>; N],
    keys: [KeyState; N],
    debounce: u32,
    hold_after: u32,
    repeat_every: u32,
}

impl<P: InputPin, const N: usize> ButtonScanner<P, N> {
    /// Create a scanner; all keys start released
    pub fn new(inputs: [ActiveInput<P>; N], timing: ScanTiming) -> Self {
        Self {
            inputs,
            keys: [KeyState::default(); N],
            debounce: timing.samples(timing.debounce_ms),
            hold_after: timing.samples(timing.hold_ms),
            repeat_every: timing.samples(timing.repeat_ms),
        }
    }

    /// Sample every input once
    ///
    /// Returns `(input index, transition)` for each key that changed.
    pub fn scan(&mut self) -> Vec<(usize, EventKind), N> {
        let mut events = Vec::new();

        for (index, (input, key)) in self.inputs.iter().zip(self.keys.iter_mut()).enumerate() {
            let active = input.is_active();

            if active != key.down {
                key.changing += 1;
                if key.changing >= self.debounce {
                    key.down = active;
                    key.changing = 0;
                    key.down_for = 0;
                    let kind = if active {
                        EventKind::Press
                    } else {
                        EventKind::Release
                    };
                    // Capacity is N and each key reports at most once per scan
                    let _ = events.push((index, kind));
                }
                continue;
            }

            key.changing = 0;
            if key.down {
                key.down_for += 1;
                if key.down_for >= self.hold_after
                    && (key.down_for - self.hold_after) % self.repeat_every == 0
                {
                    let _ = events.push((index, EventKind::Hold));
                }
            }
        }

        events
    }

    /// Check if a key is currently (debounced) down
    pub fn is_down(&self, index: usize) -> bool {
        self.keys.get(index).is_some_and(|k| k.down)
    }
}
