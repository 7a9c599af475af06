//! Input and output shapes of the provisioning service.
//!
//! These serialize to the camelCase JSON understood by the service's REST
//! gateway.

use super::{
    cluster_item::{ProviderClusterDetailItem, ProviderClusterItem},
    machine_spec::{MachineSpec, RemoveMachineSpec},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterInput {
    pub name: String,
    #[serde(rename = "k8sVersion")]
    pub k8s_version: String,
    pub control_plane_nodes: Vec<MachineSpec>,
    pub worker_nodes: Vec<MachineSpec>,
    pub api_endpoint: String,
    pub high_availability: bool,
    pub network_fabric: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct CreateClusterOutput {
    #[serde(default)]
    pub cluster: ProviderClusterItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GetClusterInput {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct GetClusterOutput {
    #[serde(default)]
    pub cluster: ProviderClusterDetailItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ListClusterInput {}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ListClusterOutput {
    #[serde(default)]
    pub clusters: Vec<ProviderClusterItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeleteClusterInput {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct DeleteClusterOutput {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GetClusterUpgradesInput {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct GetClusterUpgradesOutput {
    #[serde(default)]
    pub versions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClusterUpgradeInput {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ClusterUpgradeOutput {
    #[serde(default)]
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustClusterInput {
    pub name: String,
    pub add_nodes: Vec<MachineSpec>,
    pub remove_nodes: Vec<RemoveMachineSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct AdjustClusterOutput {
    #[serde(default)]
    pub ok: bool,
}
