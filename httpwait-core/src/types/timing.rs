use std::time::Duration;

/// Inclusive millisecond range a timing input is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u64,
    pub max: u64,
}

/// Result of clamping a raw value into [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamp {
    Within(u64),
    Raised { from: i64, to: u64 },
    Lowered { from: i64, to: u64 },
}

impl Clamp {
    pub fn value(&self) -> u64 {
        match *self {
            Clamp::Within(v) => v,
            Clamp::Raised { to, .. } | Clamp::Lowered { to, .. } => to,
        }
    }

    pub fn is_adjusted(&self) -> bool {
        !matches!(self, Clamp::Within(_))
    }
}

impl Bounds {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: i64) -> Clamp {
        if value < 0 || (value as u64) < self.min {
            return Clamp::Raised {
                from: value,
                to: self.min,
            };
        }
        let v = value as u64;
        if v > self.max {
            return Clamp::Lowered {
                from: value,
                to: self.max,
            };
        }
        Clamp::Within(v)
    }
}

/// The three timing inputs, in the order they are normalized and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingField {
    Timeout,
    SingleFetchTimeout,
    WaitingTime,
}

impl TimingField {
    pub const ALL: [TimingField; 3] = [
        TimingField::Timeout,
        TimingField::SingleFetchTimeout,
        TimingField::WaitingTime,
    ];

    pub fn input_name(&self) -> &'static str {
        match self {
            TimingField::Timeout => "timeout",
            TimingField::SingleFetchTimeout => "single-fetch-timeout",
            TimingField::WaitingTime => "waiting-time",
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            TimingField::Timeout => Bounds::new(500, 1_800_000),
            TimingField::SingleFetchTimeout => Bounds::new(200, 300_000),
            TimingField::WaitingTime => Bounds::new(200, 600_000),
        }
    }

    /// Used when the input is left empty.
    pub fn default_ms(&self) -> u64 {
        match self {
            TimingField::Timeout => 60_000,
            TimingField::SingleFetchTimeout => 5_000,
            TimingField::WaitingTime => 1_000,
        }
    }

    pub fn clamp(&self, value: i64) -> Clamp {
        self.bounds().clamp(value)
    }

    /// Warning text for an adjusted value, `None` if the value was in range.
    pub fn clamp_warning(&self, clamp: &Clamp) -> Option<String> {
        let name = self.input_name();
        match *clamp {
            Clamp::Within(_) => None,
            Clamp::Raised { to, .. } => Some(format!("{name} < {to} ms, new {name} = {to} ms")),
            Clamp::Lowered { to, .. } => Some(format!("{name} > {to} ms, new {name} = {to} ms")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingPolicy {
    /// Total poll budget.
    pub timeout: Duration,
    /// Deadline for receiving the response of a single request.
    pub single_attempt_timeout: Duration,
    /// Delay between two attempts.
    pub waiting_time: Duration,
}

impl TimingPolicy {
    pub fn from_millis(timeout: u64, single_attempt_timeout: u64, waiting_time: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout),
            single_attempt_timeout: Duration::from_millis(single_attempt_timeout),
            waiting_time: Duration::from_millis(waiting_time),
        }
    }

    /// Attempt ceiling: `ceil(timeout / waiting_time)`.
    ///
    /// Independent of the wall clock so that a near-zero waiting time cannot
    /// spin forever. A zero waiting time is treated as 1 ms.
    pub fn max_attempts(&self) -> u64 {
        let timeout = self.timeout.as_millis() as u64;
        let waiting = (self.waiting_time.as_millis() as u64).max(1);
        timeout.div_ceil(waiting)
    }
}

impl Default for TimingPolicy {
    fn default() -> Self {
        Self::from_millis(
            TimingField::Timeout.default_ms(),
            TimingField::SingleFetchTimeout.default_ms(),
            TimingField::WaitingTime.default_ms(),
        )
    }
}
