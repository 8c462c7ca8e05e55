//! Alert domain types
//!
//! Defines the alert severity levels and the alert entity itself. Alerts are
//! passive records: raising, routing, presentation, and timeout-based
//! dismissal are the job of whatever owns them.

use crate::error::{AlertError, Result};
use serde::{de, Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

/// Alert severity levels
///
/// Declaration order is significant: collaborators sort and compare alerts
/// numerically, so the ordinals are part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertLevel {
    /// General informational alert
    Info = 0,
    /// More concerning alert
    Warning = 1,
    /// Critical service alert
    Critical = 2,
}

impl AlertLevel {
    /// Numeric severity tier, increasing with urgency
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Inverse of [`ordinal`](Self::ordinal)
    pub fn from_ordinal(ordinal: u8) -> Result<Self> {
        match ordinal {
            0 => Ok(Self::Info),
            1 => Ok(Self::Warning),
            2 => Ok(Self::Critical),
            other => Err(AlertError::UnknownLevel(other)),
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl FromStr for AlertLevel {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "critical" => Ok(Self::Critical),
            other => Err(AlertError::UnknownLevelName(other.to_string())),
        }
    }
}

// Levels serialize as their ordinal so severity survives numeric sorting
// in whatever store or wire format the owner uses.
impl Serialize for AlertLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.ordinal())
    }
}

impl<'de> Deserialize<'de> for AlertLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let ordinal = u8::deserialize(deserializer)?;
        Self::from_ordinal(ordinal).map_err(de::Error::custom)
    }
}

/// A single notification record describing a service condition
///
/// Everything except the cleared flag is fixed at construction. The entity
/// enforces no policy: the owner reads [`timeout`](Self::timeout) and
/// [`timestamp`](Self::timestamp) to decide when to dismiss, and calls
/// [`clear`](Self::clear) when it does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    level: AlertLevel,
    title: String,
    description: String,
    timeout: u64,
    sound: bool,
    cleared: bool,
    timestamp: SystemTime,
}

impl Alert {
    /// Create a new active alert
    ///
    /// `timeout` is the period in seconds after which the owner should
    /// consider dismissing the alert. The timestamp is taken from the wall
    /// clock here; callers cannot supply one.
    pub fn new(
        level: AlertLevel,
        title: String,
        description: String,
        timeout: u64,
        sound: bool,
    ) -> Self {
        log::debug!("raising {} alert: {}", level, title);
        Self {
            level,
            title,
            description,
            timeout,
            sound,
            cleared: false,
            timestamp: SystemTime::now(),
        }
    }

    /// Severity of the alert
    pub fn level(&self) -> AlertLevel {
        self.level
    }

    /// Short label for the condition
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Longer explanatory text
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Timeout period as supplied at construction
    // TODO: settle whether the timeout contract is seconds or milliseconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Whether an audible cue should accompany the alert
    pub fn sound(&self) -> bool {
        self.sound
    }

    /// Wall-clock moment the alert was constructed
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Dismiss the alert
    ///
    /// Idempotent; there is no way back to the active state.
    pub fn clear(&mut self) {
        if !self.cleared {
            log::debug!("alert cleared: {}", self.title);
        }
        self.cleared = true;
    }

    /// Whether the alert has been dismissed
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.title, self.description)
    }
}
