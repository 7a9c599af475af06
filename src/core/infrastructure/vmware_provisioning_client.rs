//! [`ProvisioningClient`] backed by the cma-vmware REST gateway.

use super::api_client::ApiClient;
use crate::core::{
    config::ClientConfig,
    domain::{
        client::ProvisioningClient,
        error::{CmaResult, ValidationError},
        model::provisioning::{
            AdjustClusterInput, AdjustClusterOutput, ClusterUpgradeInput, ClusterUpgradeOutput,
            CreateClusterInput, CreateClusterOutput, DeleteClusterInput, DeleteClusterOutput,
            GetClusterInput, GetClusterOutput, GetClusterUpgradesInput, GetClusterUpgradesOutput,
            ListClusterInput, ListClusterOutput,
        },
    },
};
use async_trait::async_trait;
use url::Url;

const CLUSTER_PATH: &str = "/api/v1/cluster";
const CLUSTER_LIST_PATH: &str = "/api/v1/cluster/list";
const CLUSTER_UPGRADE_PATH: &str = "/api/v1/cluster/upgrade";
const CLUSTER_ADJUST_PATH: &str = "/api/v1/cluster/adjust";

/// A provisioning client talking JSON over HTTP to the cma-vmware service.
///
/// # Examples
///
/// ```no_run
/// use cma_vmware_adapter::{CmaResult, VmwareProvisioningClient};
///
/// fn main() -> CmaResult<()> {
///     let client = VmwareProvisioningClient::builder()
///         .endpoint("http://cma-vmware.cma.svc:9050")?
///         .accept_invalid_certs(false)
///         .build()?;
///     # let _ = client;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct VmwareProvisioningClient {
    api_client: ApiClient,
}

/// Builder for VmwareProvisioningClient configuration
#[derive(Debug, Default)]
pub struct VmwareProvisioningClientBuilder {
    endpoint: Option<Url>,
    config: ClientConfig,
}

impl VmwareProvisioningClientBuilder {
    /// Sets the root URL of the provisioning service.
    pub fn endpoint(mut self, endpoint: impl AsRef<str>) -> CmaResult<Self> {
        let url = Url::parse(endpoint.as_ref()).map_err(|e| {
            ValidationError::field("endpoint", format!("Invalid endpoint URL: {}", e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ValidationError::field(
                "endpoint",
                format!("Unsupported scheme '{}'", url.scheme()),
            )
            .into());
        }
        self.endpoint = Some(url);
        Ok(self)
    }

    /// Replaces the whole client configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> CmaResult<VmwareProvisioningClient> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| ValidationError::field("endpoint", "Endpoint is required"))?;
        Ok(VmwareProvisioningClient {
            api_client: ApiClient::new(endpoint, &self.config)?,
        })
    }
}

impl VmwareProvisioningClient {
    /// Creates a new builder for VmwareProvisioningClient configuration
    pub fn builder() -> VmwareProvisioningClientBuilder {
        VmwareProvisioningClientBuilder::default()
    }

    /// Returns the root URL of the provisioning service.
    pub fn endpoint(&self) -> &Url {
        self.api_client.base_url()
    }
}

#[async_trait]
impl ProvisioningClient for VmwareProvisioningClient {
    async fn create_cluster(&self, input: CreateClusterInput) -> CmaResult<CreateClusterOutput> {
        self.api_client.post(CLUSTER_PATH, &input).await
    }

    async fn get_cluster(&self, input: GetClusterInput) -> CmaResult<GetClusterOutput> {
        self.api_client
            .get(CLUSTER_PATH, &[("name", input.name.as_str())])
            .await
    }

    async fn list_clusters(&self, _input: ListClusterInput) -> CmaResult<ListClusterOutput> {
        self.api_client.get(CLUSTER_LIST_PATH, &[]).await
    }

    async fn delete_cluster(&self, input: DeleteClusterInput) -> CmaResult<DeleteClusterOutput> {
        self.api_client
            .delete(CLUSTER_PATH, &[("name", input.name.as_str())])
            .await
    }

    async fn get_cluster_upgrades(
        &self,
        input: GetClusterUpgradesInput,
    ) -> CmaResult<GetClusterUpgradesOutput> {
        self.api_client
            .get(CLUSTER_UPGRADE_PATH, &[("name", input.name.as_str())])
            .await
    }

    async fn cluster_upgrade(&self, input: ClusterUpgradeInput) -> CmaResult<ClusterUpgradeOutput> {
        self.api_client.put(CLUSTER_UPGRADE_PATH, &input).await
    }

    async fn adjust_cluster(&self, input: AdjustClusterInput) -> CmaResult<AdjustClusterOutput> {
        self.api_client.put(CLUSTER_ADJUST_PATH, &input).await
    }
}
