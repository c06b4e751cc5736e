use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Timelike, Utc};
use serde::{Serialize, Deserialize};

/// When a session happened. Timestamps with an offset keep it; ISO-8601
/// datetimes without one are wall-clock local time.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum ActivityTimestamp {
    Zoned(DateTime<FixedOffset>),
    Local(NaiveDateTime),
}

impl ActivityTimestamp {
    /// Resolve to a zoned time. Zoned values are shifted to `offset` when one
    /// is given; local values are read in `offset`, or UTC when it is unset.
    pub fn resolve(&self, offset: Option<FixedOffset>) -> DateTime<FixedOffset> {
        match (*self, offset) {
            (ActivityTimestamp::Zoned(ts), Some(offset)) => ts.with_timezone(&offset),
            (ActivityTimestamp::Zoned(ts), None) => ts,
            (ActivityTimestamp::Local(naive), offset) => {
                let offset = offset.unwrap_or_else(|| Utc.fix());
                naive
                    .and_local_timezone(offset)
                    .single()
                    .unwrap_or_else(|| naive.and_utc().fixed_offset())
            }
        }
    }
}

impl From<DateTime<FixedOffset>> for ActivityTimestamp {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        ActivityTimestamp::Zoned(ts)
    }
}

impl From<NaiveDateTime> for ActivityTimestamp {
    fn from(naive: NaiveDateTime) -> Self {
        ActivityTimestamp::Local(naive)
    }
}

/// One study session from the student's activity log.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ActivityRecord {
    pub timestamp: ActivityTimestamp,
    /// Minutes spent
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub completed: bool,
}

impl ActivityRecord {
    /// Local time of the record, shifted to `offset` when one is given.
    pub fn local_time(&self, offset: Option<FixedOffset>) -> DateTime<FixedOffset> {
        self.timestamp.resolve(offset)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Morning [5,12), Afternoon [12,17), Evening [17,22), Night otherwise.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn of(time: &DateTime<FixedOffset>) -> Self {
        Self::from_hour(time.hour())
    }
}

/// Aggregate of all sessions that fell in one time-of-day bucket.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningPattern {
    pub time_of_day: TimeOfDay,
    pub sessions: u32,
    /// Running mean of session minutes
    pub average_duration: f64,
    /// Running mean of completed sessions, in [0, 1]
    pub completion_rate: f64,
}

impl LearningPattern {
    pub fn new(time_of_day: TimeOfDay) -> Self {
        LearningPattern {
            time_of_day,
            sessions: 0,
            average_duration: 0.0,
            completion_rate: 0.0,
        }
    }

    /// Fold one more session into the running means.
    pub fn record(&mut self, duration: f64, completed: bool) {
        self.sessions += 1;
        let n = self.sessions as f64;
        self.average_duration = (self.average_duration * (n - 1.0) + duration) / n;
        let done = if completed { 1.0 } else { 0.0 };
        self.completion_rate = (self.completion_rate * (n - 1.0) + done) / n;
    }

    pub fn strength(&self) -> f64 {
        self.completion_rate * self.sessions as f64
    }
}
