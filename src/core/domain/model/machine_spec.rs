//! Machines handed to the provisioning service.

use crate::core::domain::value_object::MachinePort;
use serde::{Deserialize, Serialize};

/// A Kubernetes node label applied to a provisioned machine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KubernetesLabel {
    pub name: String,
    pub value: String,
}

/// One VM to bootstrap as a control-plane or worker node.
///
/// The host identifies the machine within a request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MachineSpec {
    pub host: String,
    pub username: String,
    pub port: MachinePort,
    pub password: String,
    /// Labels in request order.
    #[serde(default)]
    pub labels: Vec<KubernetesLabel>,
}

/// A machine to drop from an existing cluster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoveMachineSpec {
    pub host: String,
}
