use super::{callback_msg::CallbackMsg, create_cluster_msg::VmwareMachineSpecMsg};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct VmwareRemoveMachineSpecMsg {
    pub host: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustClusterVmwareSpec {
    #[serde(default)]
    pub add_nodes: Vec<VmwareMachineSpecMsg>,
    #[serde(default)]
    pub remove_nodes: Vec<VmwareRemoveMachineSpecMsg>,
}

/// Resizes an existing cluster by adding and removing machines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct AdjustClusterMsg {
    pub name: String,
    pub callback: Option<CallbackMsg>,
    pub vmware: Option<AdjustClusterVmwareSpec>,
}
