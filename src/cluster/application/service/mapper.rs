//! Translation of inbound messages into provisioning inputs.
//!
//! Order of nodes and labels is preserved. Ports are range-checked; nothing
//! else is validated here.

use crate::{
    cluster::application::request::{
        adjust_cluster_msg::{AdjustClusterMsg, VmwareRemoveMachineSpecMsg},
        callback_msg::CallbackMsg,
        create_cluster_msg::{CreateClusterMsg, KubernetesLabelMsg, VmwareMachineSpecMsg},
    },
    core::domain::{
        error::ValidationError,
        model::{
            cluster_record::ClusterRecord,
            machine_spec::{KubernetesLabel, MachineSpec, RemoveMachineSpec},
            provisioning::{AdjustClusterInput, CreateClusterInput},
        },
        value_object::MachinePort,
    },
};

pub(crate) fn machine_spec(msg: VmwareMachineSpecMsg) -> Result<MachineSpec, ValidationError> {
    let port = MachinePort::try_from(msg.port).map_err(|e| match e {
        ValidationError::Field { field, message } => ValidationError::Field {
            field,
            message: format!("{} (host {})", message, msg.host),
        },
        other => other,
    })?;
    Ok(MachineSpec {
        host: msg.host,
        username: msg.username,
        port,
        password: msg.password,
        labels: msg.labels.into_iter().map(kubernetes_label).collect(),
    })
}

fn kubernetes_label(msg: KubernetesLabelMsg) -> KubernetesLabel {
    KubernetesLabel {
        name: msg.name,
        value: msg.value,
    }
}

pub(crate) fn machine_specs(
    msgs: Vec<VmwareMachineSpecMsg>,
) -> Result<Vec<MachineSpec>, ValidationError> {
    msgs.into_iter().map(machine_spec).collect()
}

fn remove_machine_spec(msg: VmwareRemoveMachineSpecMsg) -> RemoveMachineSpec {
    RemoveMachineSpec { host: msg.host }
}

pub(crate) fn create_cluster_input(
    msg: CreateClusterMsg,
) -> Result<CreateClusterInput, ValidationError> {
    let provider = msg.provider;
    let vmware = provider.vmware.ok_or_else(|| {
        ValidationError::field("provider.vmware", "VMware provider spec is required")
    })?;
    Ok(CreateClusterInput {
        name: msg.name,
        k8s_version: provider.k8s_version,
        control_plane_nodes: machine_specs(vmware.control_plane_nodes)?,
        worker_nodes: machine_specs(vmware.worker_nodes)?,
        api_endpoint: vmware.api_endpoint,
        high_availability: provider.high_availability,
        network_fabric: provider.network_fabric,
    })
}

pub(crate) fn adjust_cluster_input(
    msg: AdjustClusterMsg,
) -> Result<AdjustClusterInput, ValidationError> {
    let vmware = msg
        .vmware
        .ok_or_else(|| ValidationError::field("vmware", "VMware adjust spec is required"))?;
    Ok(AdjustClusterInput {
        name: msg.name,
        add_nodes: machine_specs(vmware.add_nodes)?,
        remove_nodes: vmware
            .remove_nodes
            .into_iter()
            .map(remove_machine_spec)
            .collect(),
    })
}

/// Builds the tracking record. A missing callback leaves its fields empty.
pub(crate) fn cluster_record(callback: Option<&CallbackMsg>, provider: &str) -> ClusterRecord {
    let callback = callback.cloned().unwrap_or_default();
    ClusterRecord {
        callback_url: callback.url,
        provider: provider.to_string(),
        request_id: callback.request_id,
    }
}
