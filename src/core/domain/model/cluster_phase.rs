use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phase of a tracked cluster record.
///
/// Owned by the cluster operator; this crate only requests transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
pub enum ClusterPhase {
    #[default]
    Pending,
    Provisioning,
    Running,
    Upgrading,
    Deleting,
    Failed,
}

impl fmt::Display for ClusterPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClusterPhase::Pending => "Pending",
            ClusterPhase::Provisioning => "Provisioning",
            ClusterPhase::Running => "Running",
            ClusterPhase::Upgrading => "Upgrading",
            ClusterPhase::Deleting => "Deleting",
            ClusterPhase::Failed => "Failed",
        };
        f.write_str(name)
    }
}
