//! Typed expiration values.
//!
//! The raw encoding reserves [`IDLE`] and [`SYNC`] as sentinels and packs every
//! computed deadline between them. [`ExpirationTime`] keeps the sentinels as
//! their own variants so comparisons never depend on where the computed range
//! happens to end.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ExpiryError;
use crate::quantize::{BATCHED, IDLE, SYNC};

/// A computed expiration, strictly between [`IDLE`] and [`BATCHED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PriorityTime(i64);

impl PriorityTime {
    pub fn new(value: i64) -> Result<Self, ExpiryError> {
        if value > IDLE && value < BATCHED {
            Ok(Self(value))
        } else {
            Err(ExpiryError::ExpirationOutOfRange { value })
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PriorityTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How urgent a pending unit of work is.
///
/// Ordered by urgency: `Idle` is least urgent, `Sync` most urgent, and
/// computed values sit in between. A larger computed value is closer to
/// `Sync` and therefore more urgent; later deadlines produce smaller values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpirationTime {
    Idle,
    Computed(PriorityTime),
    Sync,
}

impl ExpirationTime {
    /// Classify a raw encoded value.
    pub fn from_raw(value: i64) -> Result<Self, ExpiryError> {
        match value {
            IDLE => Ok(Self::Idle),
            SYNC => Ok(Self::Sync),
            v => PriorityTime::new(v)
                .map(Self::Computed)
                .map_err(|_| ExpiryError::InvalidExpiration(v)),
        }
    }

    /// The raw encoded value.
    pub fn raw(self) -> i64 {
        match self {
            Self::Idle => IDLE,
            Self::Computed(t) => t.get(),
            Self::Sync => SYNC,
        }
    }

    pub fn is_sentinel(self) -> bool {
        !matches!(self, Self::Computed(_))
    }

    pub fn is_more_urgent_than(self, other: Self) -> bool {
        compare_urgency(self, other) == Ordering::Greater
    }

    fn rank(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Computed(_) => 1,
            Self::Sync => 2,
        }
    }
}

/// Compare two expirations by urgency. `Greater` means `a` is more urgent.
pub fn compare_urgency(a: ExpirationTime, b: ExpirationTime) -> Ordering {
    match (a, b) {
        (ExpirationTime::Computed(x), ExpirationTime::Computed(y)) => x.cmp(&y),
        _ => a.rank().cmp(&b.rank()),
    }
}

impl Ord for ExpirationTime {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_urgency(*self, *other)
    }
}

impl PartialOrd for ExpirationTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<PriorityTime> for ExpirationTime {
    fn from(t: PriorityTime) -> Self {
        Self::Computed(t)
    }
}

impl TryFrom<i64> for ExpirationTime {
    type Error = ExpiryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_raw(value)
    }
}

impl fmt::Display for ExpirationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Computed(t) => write!(f, "{t}"),
            Self::Sync => write!(f, "sync"),
        }
    }
}

impl Serialize for ExpirationTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.raw())
    }
}

impl<'de> Deserialize<'de> for ExpirationTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(serde::de::Error::custom)
    }
}
