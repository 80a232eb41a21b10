//! Points in time accepted by the ordering checks.

use std::fmt::Debug;
use std::time::{Instant, SystemTime};

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone};

/// A point in time that can be shifted by a signed offset.
pub trait TimePoint: Clone + PartialOrd + Debug {
    /// Returns the point moved by `offset`, or `None` when the result falls
    /// outside the representable range.
    fn shifted(&self, offset: TimeDelta) -> Option<Self>;

    /// Signed distance `self - earlier`.
    fn since(&self, earlier: &Self) -> TimeDelta;
}

/// Applies every offset to `base` in order; `None` once any step overflows.
pub fn shift_all<T: TimePoint>(base: &T, offsets: &[TimeDelta]) -> Option<T> {
    offsets
        .iter()
        .try_fold(base.clone(), |point, offset| point.shifted(*offset))
}

impl<Tz: TimeZone> TimePoint for DateTime<Tz> {
    fn shifted(&self, offset: TimeDelta) -> Option<Self> {
        self.clone().checked_add_signed(offset)
    }

    fn since(&self, earlier: &Self) -> TimeDelta {
        self.clone().signed_duration_since(earlier.clone())
    }
}

impl TimePoint for NaiveDateTime {
    fn shifted(&self, offset: TimeDelta) -> Option<Self> {
        self.checked_add_signed(offset)
    }

    fn since(&self, earlier: &Self) -> TimeDelta {
        self.signed_duration_since(*earlier)
    }
}

fn std_delta(duration: std::time::Duration) -> TimeDelta {
    TimeDelta::from_std(duration).unwrap_or(TimeDelta::MAX)
}

impl TimePoint for SystemTime {
    fn shifted(&self, offset: TimeDelta) -> Option<Self> {
        match offset.to_std() {
            Ok(forward) => self.checked_add(forward),
            Err(_) => offset.abs().to_std().ok().and_then(|back| self.checked_sub(back)),
        }
    }

    fn since(&self, earlier: &Self) -> TimeDelta {
        match self.duration_since(*earlier) {
            Ok(forward) => std_delta(forward),
            Err(err) => -std_delta(err.duration()),
        }
    }
}

impl TimePoint for Instant {
    fn shifted(&self, offset: TimeDelta) -> Option<Self> {
        match offset.to_std() {
            Ok(forward) => self.checked_add(forward),
            Err(_) => offset.abs().to_std().ok().and_then(|back| self.checked_sub(back)),
        }
    }

    fn since(&self, earlier: &Self) -> TimeDelta {
        if self >= earlier {
            std_delta(self.duration_since(*earlier))
        } else {
            -std_delta(earlier.duration_since(*self))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;

    use super::*;

    #[test]
    fn offsets_accumulate() {
        let t0 = Utc::now();
        let shifted = shift_all(&t0, &[TimeDelta::milliseconds(5), TimeDelta::milliseconds(-2)]);
        assert_eq!(shifted.map(|t| t.since(&t0)), Some(TimeDelta::milliseconds(3)));
    }

    #[test]
    fn system_time_moves_both_ways() {
        let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(100);
        let back = t0.shifted(TimeDelta::seconds(-10)).map(|t| t.since(&t0));
        let forward = t0.shifted(TimeDelta::seconds(10)).map(|t| t.since(&t0));
        assert_eq!(back, Some(TimeDelta::seconds(-10)));
        assert_eq!(forward, Some(TimeDelta::seconds(10)));
    }

    #[test]
    fn overflow_is_reported_not_clamped() {
        assert_eq!(NaiveDateTime::MAX.shifted(TimeDelta::seconds(1)), None);
        assert_eq!(NaiveDateTime::MIN.shifted(TimeDelta::seconds(-1)), None);
        let offsets = [TimeDelta::seconds(-1), TimeDelta::seconds(2)];
        assert_eq!(shift_all(&NaiveDateTime::MAX, &offsets), None);
    }
}
