use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MANIFEST_VERSION: i32 = 5;

/// Varbit 4101 is the first prayer; toggling it in game produces a submission.
const DEFAULT_VARBITS: [i32; 7] = [0, 100, 9657, 4101, 5000, 10000, 4104];
const DEFAULT_VARPS: [i32; 6] = [1, 3, 5, 6, 7, 10];

/// Descriptor telling the client which varbits and varps to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub varbits: Vec<i32>,
    pub varps: Vec<i32>,
    pub version: i32,
    /// Collection-log item ids the client should sync.
    pub collections: Vec<i32>,
}

impl Manifest {
    pub fn with_version(version: i32) -> Self {
        Self {
            varbits: DEFAULT_VARBITS.to_vec(),
            varps: DEFAULT_VARPS.to_vec(),
            version,
            collections: Vec::new(),
        }
    }

    /// The version-check payload is always derived from the manifest it
    /// describes.
    pub fn version_check(&self) -> VersionCheck {
        VersionCheck {
            version: self.version,
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::with_version(DEFAULT_MANIFEST_VERSION)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionCheck {
    pub version: i32,
}

/// Outcome of one submission, decided by its sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Even sequence number: answered immediately with 200.
    Accepted,
    /// Odd sequence number: held for the fail delay, then answered with 400.
    Rejected,
}

impl SubmissionOutcome {
    pub fn for_sequence(seq: u64) -> Self {
        if seq % 2 == 0 {
            Self::Accepted
        } else {
            Self::Rejected
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// A submission as seen by the stub: its 0-based position in the process
/// lifetime and the outcome that position implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub seq: u64,
    pub outcome: SubmissionOutcome,
}

impl Submission {
    pub fn new(seq: u64) -> Self {
        Self {
            seq,
            outcome: SubmissionOutcome::for_sequence(seq),
        }
    }
}

/// Payload the client posts to the submit route. Only used to summarise the
/// body in logs; nothing rejects a submission for failing to parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerDataSubmission {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub data: PlayerData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerData {
    #[serde(default)]
    pub varb: HashMap<i32, i32>,
    #[serde(default)]
    pub varp: HashMap<i32, i32>,
    #[serde(default)]
    pub level: HashMap<String, i32>,
}

impl PlayerData {
    pub fn is_empty(&self) -> bool {
        self.varb.is_empty() && self.varp.is_empty() && self.level.is_empty()
    }
}
