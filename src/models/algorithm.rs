//! Algorithm identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The six supported disk-head scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Seek Time First.
    Sstf,
    /// Elevator sweep to the high boundary, then reverse.
    Scan,
    /// Circular SCAN: sweep up, wrap to 0, sweep up again.
    Cscan,
    /// SCAN that turns at the extreme request.
    Look,
    /// C-SCAN that jumps between extreme requests.
    Clook,
}

impl Algorithm {
    /// All algorithms in canonical comparison order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::Cscan,
        Algorithm::Look,
        Algorithm::Clook,
    ];

    /// Display name (e.g., "C-SCAN").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sstf => "SSTF",
            Algorithm::Scan => "SCAN",
            Algorithm::Cscan => "C-SCAN",
            Algorithm::Look => "LOOK",
            Algorithm::Clook => "C-LOOK",
        }
    }

    /// Lowercase key used on the command line and in JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sstf => "sstf",
            Algorithm::Scan => "scan",
            Algorithm::Cscan => "cscan",
            Algorithm::Look => "look",
            Algorithm::Clook => "clook",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sstf" => Ok(Algorithm::Sstf),
            "scan" => Ok(Algorithm::Scan),
            "cscan" => Ok(Algorithm::Cscan),
            "look" => Ok(Algorithm::Look),
            "clook" => Ok(Algorithm::Clook),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
