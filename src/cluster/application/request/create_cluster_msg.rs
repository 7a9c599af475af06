//! Inbound messages describing the machines of a VMware cluster.

use super::callback_msg::CallbackMsg;
use serde::{Deserialize, Serialize};

/// A node label as carried on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct KubernetesLabelMsg {
    pub name: String,
    pub value: String,
}

/// A VM reachable over SSH, as carried on the wire.
///
/// `port` is wider than a TCP port; it is range-checked before it reaches the
/// provisioning service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct VmwareMachineSpecMsg {
    pub username: String,
    pub host: String,
    pub port: i64,
    pub password: String,
    #[serde(default)]
    pub labels: Vec<KubernetesLabelMsg>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterVmwareSpec {
    #[serde(default)]
    pub control_plane_nodes: Vec<VmwareMachineSpecMsg>,
    #[serde(default)]
    pub worker_nodes: Vec<VmwareMachineSpecMsg>,
    pub api_endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterProviderSpec {
    pub name: String,
    #[serde(rename = "k8sVersion")]
    pub k8s_version: String,
    pub high_availability: bool,
    pub network_fabric: String,
    /// Only VMware clusters are handled here; other providers leave this unset.
    pub vmware: Option<CreateClusterVmwareSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct CreateClusterMsg {
    pub name: String,
    pub provider: CreateClusterProviderSpec,
    pub callback: Option<CallbackMsg>,
}
