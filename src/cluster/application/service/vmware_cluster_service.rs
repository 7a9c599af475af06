use super::{advisory_write::AdvisoryWrite, mapper};
use crate::{
    cluster::application::{
        request::{
            adjust_cluster_msg::AdjustClusterMsg,
            callback_msg::CallbackMsg,
            cluster_msg::{
                DeleteClusterMsg, GetClusterListMsg, GetClusterMsg,
                GetUpgradeClusterInformationMsg, UpgradeClusterMsg,
            },
            create_cluster_msg::CreateClusterMsg,
        },
        response::cluster_reply::{
            AdjustClusterReply, CreateClusterReply, DeleteClusterReply, GetClusterListReply,
            GetClusterReply, GetUpgradeClusterInformationReply, UpgradeClusterReply,
        },
    },
    core::{
        config::AdapterConfig,
        domain::{
            client::{ClusterRecordClient, ProvisioningClient},
            error::{CmaResult, ValidationError},
            model::{
                cluster_item::ClusterItem,
                cluster_phase::ClusterPhase,
                cluster_record::ClusterRecord,
                provisioning::{
                    ClusterUpgradeInput, DeleteClusterInput, GetClusterInput,
                    GetClusterUpgradesInput, ListClusterInput,
                },
            },
        },
    },
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Serves cluster RPCs for the VMware provider.
///
/// Each operation first calls the provisioning service. A provisioning error
/// is returned as-is and the cluster record is left untouched. On success the
/// cluster record is written as an advisory write and the reply is assembled
/// from the provisioning result.
///
/// # Examples
///
/// ```no_run
/// use cma_vmware_adapter::{
///     AdapterConfig, CmaResult, GetClusterMsg, KubeClusterRecordStore,
///     VmwareClusterService, VmwareProvisioningClient,
/// };
///
/// #[tokio::main]
/// async fn main() -> CmaResult<()> {
///     let config = AdapterConfig::from_env()?;
///     let service = VmwareClusterService::builder()
///         .config(config.clone())
///         .provisioning_client(
///             VmwareProvisioningClient::builder()
///                 .endpoint("http://cma-vmware.cma.svc:9050")?
///                 .build()?,
///         )
///         .record_client(KubeClusterRecordStore::try_default(&config.record_namespace).await?)
///         .build()?;
///
///     let reply = service
///         .get_cluster(GetClusterMsg { name: "c1".to_string() })
///         .await?;
///     println!("{:?}", reply.cluster);
///     Ok(())
/// }
/// ```
pub struct VmwareClusterService {
    provisioning: Arc<dyn ProvisioningClient>,
    records: Arc<dyn ClusterRecordClient>,
    provider: String,
}

/// Builder for VmwareClusterService configuration
#[derive(Default)]
pub struct VmwareClusterServiceBuilder {
    provisioning: Option<Arc<dyn ProvisioningClient>>,
    records: Option<Arc<dyn ClusterRecordClient>>,
    config: AdapterConfig,
}

impl VmwareClusterServiceBuilder {
    pub fn provisioning_client(mut self, client: impl ProvisioningClient + 'static) -> Self {
        self.provisioning = Some(Arc::new(client));
        self
    }

    pub fn record_client(mut self, client: impl ClusterRecordClient + 'static) -> Self {
        self.records = Some(Arc::new(client));
        self
    }

    /// Sets the provider name stamped on cluster records.
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.config.provider = provider.into();
        self
    }

    pub fn config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> CmaResult<VmwareClusterService> {
        self.config.validate()?;
        let provisioning = self.provisioning.ok_or_else(|| {
            ValidationError::field("provisioning_client", "Provisioning client is required")
        })?;
        let records = self
            .records
            .ok_or_else(|| ValidationError::field("record_client", "Record client is required"))?;

        Ok(VmwareClusterService {
            provisioning,
            records,
            provider: self.config.provider,
        })
    }
}

impl VmwareClusterService {
    /// Creates a new builder for VmwareClusterService configuration
    pub fn builder() -> VmwareClusterServiceBuilder {
        VmwareClusterServiceBuilder::default()
    }

    /// Returns the provider name stamped on cluster records.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    fn record(&self, callback: Option<&CallbackMsg>) -> ClusterRecord {
        mapper::cluster_record(callback, &self.provider)
    }

    /// Rewrites the record of an existing cluster and moves it to `phase`.
    ///
    /// Both steps run even if the first one fails.
    async fn transition_record(
        &self,
        name: &str,
        operation: &'static str,
        record: ClusterRecord,
        phase: ClusterPhase,
    ) {
        let write = AdvisoryWrite::new(name, operation);
        write
            .run("update record", self.records.update_or_create_cluster(name, record))
            .await;
        write
            .run("change phase", self.records.change_cluster_status(name, phase))
            .await;
    }

    /// Requests provisioning of a new cluster and creates its record.
    ///
    /// # Errors
    ///
    /// Returns `CmaError::Validation` for a missing VMware spec or an
    /// out-of-range machine port, or the provisioning client's error.
    #[instrument(skip_all, fields(cluster = %msg.name))]
    pub async fn create_cluster(&self, msg: CreateClusterMsg) -> CmaResult<CreateClusterReply> {
        let name = msg.name.clone();
        let record = self.record(msg.callback.as_ref());
        let input = mapper::create_cluster_input(msg)?;
        debug!(
            control_plane = input.control_plane_nodes.len(),
            workers = input.worker_nodes.len(),
            "requesting cluster creation"
        );

        let result = self.provisioning.create_cluster(input).await?;

        AdvisoryWrite::new(&name, "create_cluster")
            .run("create record", self.records.create_cluster(&name, record))
            .await;

        let mut cluster = ClusterItem::from(result.cluster);
        if cluster.name.is_empty() {
            cluster.name = name;
        }
        info!(id = %cluster.id, status = %cluster.status, "cluster creation accepted");
        Ok(CreateClusterReply {
            ok: true,
            cluster: Some(cluster),
        })
    }

    #[instrument(skip_all, fields(cluster = %msg.name))]
    pub async fn get_cluster(&self, msg: GetClusterMsg) -> CmaResult<GetClusterReply> {
        let result = self
            .provisioning
            .get_cluster(GetClusterInput { name: msg.name })
            .await?;
        Ok(GetClusterReply {
            ok: true,
            cluster: Some(result.cluster.into()),
        })
    }

    #[instrument(skip_all)]
    pub async fn get_cluster_list(&self, _msg: GetClusterListMsg) -> CmaResult<GetClusterListReply> {
        let result = self.provisioning.list_clusters(ListClusterInput {}).await?;
        debug!(count = result.clusters.len(), "listed clusters");
        Ok(GetClusterListReply {
            ok: true,
            clusters: result.clusters.into_iter().map(ClusterItem::from).collect(),
        })
    }

    /// Requests deletion and marks the cluster record `Deleting`.
    #[instrument(skip_all, fields(cluster = %msg.name))]
    pub async fn delete_cluster(&self, msg: DeleteClusterMsg) -> CmaResult<DeleteClusterReply> {
        let result = self
            .provisioning
            .delete_cluster(DeleteClusterInput {
                name: msg.name.clone(),
            })
            .await?;

        let record = self.record(msg.callback.as_ref());
        self.transition_record(&msg.name, "delete_cluster", record, ClusterPhase::Deleting)
            .await;

        info!(status = %result.status, "cluster deletion accepted");
        Ok(DeleteClusterReply {
            ok: true,
            status: result.status,
        })
    }

    #[instrument(skip_all, fields(cluster = %msg.name))]
    pub async fn get_cluster_upgrades(
        &self,
        msg: GetUpgradeClusterInformationMsg,
    ) -> CmaResult<GetUpgradeClusterInformationReply> {
        let result = self
            .provisioning
            .get_cluster_upgrades(GetClusterUpgradesInput { name: msg.name })
            .await?;
        Ok(GetUpgradeClusterInformationReply {
            ok: true,
            versions: result.versions,
        })
    }

    /// Requests an upgrade and marks the cluster record `Upgrading`.
    #[instrument(skip_all, fields(cluster = %msg.name, version = %msg.version))]
    pub async fn cluster_upgrade(&self, msg: UpgradeClusterMsg) -> CmaResult<UpgradeClusterReply> {
        self.provisioning
            .cluster_upgrade(ClusterUpgradeInput {
                name: msg.name.clone(),
                version: msg.version.clone(),
            })
            .await?;

        let record = self.record(msg.callback.as_ref());
        self.transition_record(&msg.name, "cluster_upgrade", record, ClusterPhase::Upgrading)
            .await;

        info!("cluster upgrade accepted");
        Ok(UpgradeClusterReply { ok: true })
    }

    /// Requests a resize and marks the cluster record `Upgrading`.
    ///
    /// The operator has no dedicated resize phase; a resize is tracked the
    /// same way as an upgrade.
    #[instrument(skip_all, fields(cluster = %msg.name))]
    pub async fn adjust_cluster(&self, msg: AdjustClusterMsg) -> CmaResult<AdjustClusterReply> {
        let name = msg.name.clone();
        let record = self.record(msg.callback.as_ref());
        let input = mapper::adjust_cluster_input(msg)?;
        debug!(
            add = input.add_nodes.len(),
            remove = input.remove_nodes.len(),
            "requesting cluster adjustment"
        );

        self.provisioning.adjust_cluster(input).await?;

        self.transition_record(&name, "adjust_cluster", record, ClusterPhase::Upgrading)
            .await;

        info!("cluster adjustment accepted");
        Ok(AdjustClusterReply { ok: true })
    }
}
