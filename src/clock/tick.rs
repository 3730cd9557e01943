//! Per-cycle change detection
//!
//! Once per cycle the current time is split into one digit per row. Rows whose
//! digit differs from the previous cycle are reported as changed, together with
//! the placements of the lights that must now be on. Unchanged rows are
//! reported empty so the renderer can leave them alone.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use super::layout::LayoutEngine;
use crate::Position;
use crate::consts::*;

/// One digit per row: 5-hours, hours, 5-minutes, minutes, seconds parity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickDigits(pub [usize; ROW_COUNT]);

impl TickDigits {
    /// Split a time of day into row digits
    pub fn from_time<T: Timelike>(now: &T) -> Self {
        Self::from_hms(now.hour(), now.minute(), now.second())
    }

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self([
            (hour / 5) as usize,
            (hour % 5) as usize,
            (minute / 5) as usize,
            (minute % 5) as usize,
            (second % 2) as usize,
        ])
    }

    /// Number of lit lights in a row
    #[inline]
    pub fn get(&self, row: usize) -> usize {
        self.0[row]
    }
}

/// What a single row needs this cycle
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub changed: bool,
    /// Top-left placements of the lit lights; empty when unchanged
    pub lit_positions: Vec<Position>,
}

/// Change records for every row of one cycle
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangeSet {
    pub digits: Option<TickDigits>,
    pub rows: [ChangeRecord; ROW_COUNT],
}

impl ChangeSet {
    pub fn row(&self, row: usize) -> &ChangeRecord {
        &self.rows[row]
    }

    /// Changed rows with their records
    pub fn changed(&self) -> impl Iterator<Item = (usize, &ChangeRecord)> {
        self.rows.iter().enumerate().filter(|(_, record)| record.changed)
    }

    pub fn any_changed(&self) -> bool {
        self.rows.iter().any(|record| record.changed)
    }
}

/// Remembers the previous cycle's digits
#[derive(Debug, Clone, Default)]
pub struct TickStateTracker {
    /// `None` until the first evaluation, which reports every row as changed
    last: Option<TickDigits>,
}

impl TickStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no cycle has been evaluated yet
    pub fn is_first_cycle(&self) -> bool {
        self.last.is_none()
    }

    pub fn last_digits(&self) -> Option<TickDigits> {
        self.last
    }

    /// Evaluate one cycle at `now`
    pub fn evaluate<T: Timelike>(&mut self, now: &T, layout: &LayoutEngine) -> ChangeSet {
        self.evaluate_digits(TickDigits::from_time(now), layout)
    }

    /// Evaluate one cycle for already computed digits
    pub fn evaluate_digits(&mut self, digits: TickDigits, layout: &LayoutEngine) -> ChangeSet {
        let previous = self.last;

        let rows = std::array::from_fn(|row| {
            let value = digits.get(row);
            let changed = match previous {
                None => true,
                Some(last) => last.get(row) != value,
            };

            if changed {
                log::trace!("Row {} changed to {}", row, value);
                ChangeRecord {
                    changed,
                    lit_positions: layout.lit_positions(row, value),
                }
            } else {
                ChangeRecord::default()
            }
        });

        self.last = Some(digits);
        ChangeSet {
            digits: Some(digits),
            rows,
        }
    }

    /// Forget the previous cycle so the next one redraws every row
    pub fn reset(&mut self) {
        self.last = None;
    }
}
