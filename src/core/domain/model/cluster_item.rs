//! Cluster views returned by the provisioning service and the RPC surface.

use super::cluster_status::ClusterStatus;
use serde::{Deserialize, Serialize};

/// A cluster as reported by the provisioning service.
///
/// `status` is the provider's raw string.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ProviderClusterItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
}

/// A cluster, including credentials, as reported by the provisioning service.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ProviderClusterDetailItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub kubeconfig: String,
}

/// Summary view of a cluster on the RPC surface.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ClusterItem {
    pub id: String,
    pub name: String,
    pub status: ClusterStatus,
}

impl From<ProviderClusterItem> for ClusterItem {
    fn from(item: ProviderClusterItem) -> Self {
        Self {
            status: ClusterStatus::from_provider(&item.status),
            id: item.id,
            name: item.name,
        }
    }
}

/// Detailed view of a cluster on the RPC surface.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ClusterDetailItem {
    pub id: String,
    pub name: String,
    pub status: ClusterStatus,
    /// Credential material for cluster access.
    pub kubeconfig: String,
}

impl From<ProviderClusterDetailItem> for ClusterDetailItem {
    fn from(item: ProviderClusterDetailItem) -> Self {
        Self {
            status: ClusterStatus::from_provider(&item.status),
            id: item.id,
            name: item.name,
            kubeconfig: item.kubeconfig,
        }
    }
}
