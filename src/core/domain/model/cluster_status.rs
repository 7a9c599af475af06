//! The closed set of cluster statuses reported upward to RPC callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a cluster as exposed on the RPC surface.
///
/// The provisioning service reports statuses as free-form strings. They are
/// translated with [`ClusterStatus::from_provider`], which never fails: any
/// string outside the name table becomes [`ClusterStatus::StatusUnspecified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClusterStatus {
    /// Zero value, also used for statuses this adapter does not recognise.
    #[default]
    StatusUnspecified,
    Provisioning,
    Running,
    Reconciling,
    Stopping,
    Error,
    Degraded,
}

impl ClusterStatus {
    /// Every status, in wire-number order.
    pub const ALL: [ClusterStatus; 7] = [
        ClusterStatus::StatusUnspecified,
        ClusterStatus::Provisioning,
        ClusterStatus::Running,
        ClusterStatus::Reconciling,
        ClusterStatus::Stopping,
        ClusterStatus::Error,
        ClusterStatus::Degraded,
    ];

    /// Translates a provider status string.
    ///
    /// Matching is exact and case-sensitive; no trimming is applied.
    pub fn from_provider(status: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == status)
            .unwrap_or_default()
    }

    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterStatus::StatusUnspecified => "STATUS_UNSPECIFIED",
            ClusterStatus::Provisioning => "PROVISIONING",
            ClusterStatus::Running => "RUNNING",
            ClusterStatus::Reconciling => "RECONCILING",
            ClusterStatus::Stopping => "STOPPING",
            ClusterStatus::Error => "ERROR",
            ClusterStatus::Degraded => "DEGRADED",
        }
    }

    /// Returns the wire number of the status.
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }
}

impl fmt::Display for ClusterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
