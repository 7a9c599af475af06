use crate::core::domain::{
    error::CmaResult,
    model::provisioning::{
        AdjustClusterInput, AdjustClusterOutput, ClusterUpgradeInput, ClusterUpgradeOutput,
        CreateClusterInput, CreateClusterOutput, DeleteClusterInput, DeleteClusterOutput,
        GetClusterInput, GetClusterOutput, GetClusterUpgradesInput, GetClusterUpgradesOutput,
        ListClusterInput, ListClusterOutput,
    },
};
use async_trait::async_trait;

/// Performs cluster lifecycle operations against the VMware provider.
///
/// Implementations own VM provisioning, node bootstrap and any retry policy;
/// callers treat every method as a single opaque request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProvisioningClient: Send + Sync {
    /// Starts provisioning a new cluster.
    async fn create_cluster(&self, input: CreateClusterInput) -> CmaResult<CreateClusterOutput>;

    /// Fetches one cluster, including its kubeconfig.
    async fn get_cluster(&self, input: GetClusterInput) -> CmaResult<GetClusterOutput>;

    /// Lists every cluster known to the provider.
    async fn list_clusters(&self, input: ListClusterInput) -> CmaResult<ListClusterOutput>;

    /// Starts tearing down a cluster.
    async fn delete_cluster(&self, input: DeleteClusterInput) -> CmaResult<DeleteClusterOutput>;

    /// Lists the Kubernetes versions a cluster can be upgraded to.
    async fn get_cluster_upgrades(
        &self,
        input: GetClusterUpgradesInput,
    ) -> CmaResult<GetClusterUpgradesOutput>;

    /// Starts upgrading a cluster to a target version.
    async fn cluster_upgrade(&self, input: ClusterUpgradeInput) -> CmaResult<ClusterUpgradeOutput>;

    /// Adds and removes nodes of an existing cluster.
    async fn adjust_cluster(&self, input: AdjustClusterInput) -> CmaResult<AdjustClusterOutput>;
}
