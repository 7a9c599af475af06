//! Cluster-manager adapter for VMware-backed Kubernetes clusters.
//!
//! [`VmwareClusterService`] turns cluster RPCs (create, get, list, delete,
//! upgrade information, upgrade, adjust) into calls against a
//! [`ProvisioningClient`], then records the outcome through a
//! [`ClusterRecordClient`]. Concrete clients are provided for the cma-vmware
//! REST gateway ([`VmwareProvisioningClient`]) and for `SDSCluster` custom
//! resources ([`KubeClusterRecordStore`]).
//!
//! # Examples
//!
//! ```no_run
//! use cma_vmware_adapter::{
//!     CmaResult, GetClusterListMsg, KubeClusterRecordStore, VmwareClusterService,
//!     VmwareProvisioningClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> CmaResult<()> {
//!     let service = VmwareClusterService::builder()
//!         .provider("vmware")
//!         .provisioning_client(
//!             VmwareProvisioningClient::builder()
//!                 .endpoint("http://localhost:9050")?
//!                 .build()?,
//!         )
//!         .record_client(KubeClusterRecordStore::try_default("default").await?)
//!         .build()?;
//!
//!     for cluster in service.get_cluster_list(GetClusterListMsg {}).await?.clusters {
//!         println!("{} {} {}", cluster.id, cluster.name, cluster.status);
//!     }
//!     Ok(())
//! }
//! ```

mod cluster;
mod core;

pub use crate::cluster::application::{
    request::{
        adjust_cluster_msg::{AdjustClusterMsg, AdjustClusterVmwareSpec, VmwareRemoveMachineSpecMsg},
        callback_msg::CallbackMsg,
        cluster_msg::{
            DeleteClusterMsg, GetClusterListMsg, GetClusterMsg, GetUpgradeClusterInformationMsg,
            UpgradeClusterMsg,
        },
        create_cluster_msg::{
            CreateClusterMsg, CreateClusterProviderSpec, CreateClusterVmwareSpec,
            KubernetesLabelMsg, VmwareMachineSpecMsg,
        },
    },
    response::cluster_reply::{
        AdjustClusterReply, CreateClusterReply, DeleteClusterReply, GetClusterListReply,
        GetClusterReply, GetUpgradeClusterInformationReply, UpgradeClusterReply,
    },
    service::vmware_cluster_service::{VmwareClusterService, VmwareClusterServiceBuilder},
};
pub use crate::core::{
    config::{
        AdapterConfig, ClientConfig, DEFAULT_PROVIDER, DEFAULT_RECORD_NAMESPACE, RateLimitConfig,
    },
    domain::{
        client::{ClusterRecordClient, ProvisioningClient},
        error::{CmaError, CmaResult, ValidationError},
        model::{
            cluster_item::{
                ClusterDetailItem, ClusterItem, ProviderClusterDetailItem, ProviderClusterItem,
            },
            cluster_phase::ClusterPhase,
            cluster_record::ClusterRecord,
            cluster_status::ClusterStatus,
            machine_spec::{KubernetesLabel, MachineSpec, RemoveMachineSpec},
            provisioning::{
                AdjustClusterInput, AdjustClusterOutput, ClusterUpgradeInput,
                ClusterUpgradeOutput, CreateClusterInput, CreateClusterOutput,
                DeleteClusterInput, DeleteClusterOutput, GetClusterInput, GetClusterOutput,
                GetClusterUpgradesInput, GetClusterUpgradesOutput, ListClusterInput,
                ListClusterOutput,
            },
        },
        value_object::MachinePort,
    },
    infrastructure::{
        kube_record_store::{KubeClusterRecordStore, SDSCluster, SDSClusterSpec, SDSClusterStatus},
        vmware_provisioning_client::{VmwareProvisioningClient, VmwareProvisioningClientBuilder},
    },
};
