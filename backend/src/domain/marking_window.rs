//! Morning marking window for attendance.
//!
//! Attendance may only be recorded between the configured start and end
//! times (local wall clock). The start is inclusive and the end exclusive, so
//! a 06:00 to 10:00 window accepts 09:59:59 and rejects 10:00:00.

use anyhow::{anyhow, Result};
use chrono::NaiveTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkingWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl MarkingWindow {
    /// Create a window; `start` must be strictly before `end`
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(anyhow!(
                "Marking window start {} must be before end {}",
                start,
                end
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time < self.end
    }
}

const DEFAULT_START: NaiveTime = wall_clock(6, 0);
const DEFAULT_END: NaiveTime = wall_clock(10, 0);

/// Evaluated at compile time, so an invalid constant fails the build
const fn wall_clock(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(time) => time,
        None => panic!("invalid wall-clock time"),
    }
}

impl Default for MarkingWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

/// Rules applied when marking attendance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendancePolicy {
    pub window: MarkingWindow,
    /// Reject marks outside the window; when false the window is advisory
    pub auto_lock_after_deadline: bool,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            window: MarkingWindow::default(),
            auto_lock_after_deadline: true,
        }
    }
}
