//! [`ClusterRecordClient`] persisting `SDSCluster` custom resources.

use crate::core::domain::{
    client::ClusterRecordClient,
    error::CmaResult,
    model::{cluster_phase::ClusterPhase, cluster_record::ClusterRecord},
};
use async_trait::async_trait;
use kube::{
    Api, Client, CustomResource,
    api::{Patch, PatchParams, PostParams},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Spec of the cluster tracking resource watched by the cluster operator.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "cma.sds.samsung.com",
    version = "v1alpha1",
    kind = "SDSCluster",
    plural = "sdsclusters",
    status = "SDSClusterStatus",
    namespaced,
    printcolumn = r#"{"name":"Phase","type":"string","jsonPath":".status.phase"}"#,
    printcolumn = r#"{"name":"Provider","type":"string","jsonPath":".spec.provider"}"#
)]
pub struct SDSClusterSpec {
    #[serde(default)]
    pub provider: String,
    #[serde(rename = "callbackURL", default)]
    pub callback_url: String,
    #[serde(rename = "requestID", default)]
    pub request_id: String,
}

/// Status of the cluster tracking resource.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct SDSClusterStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<ClusterPhase>,
}

impl From<ClusterRecord> for SDSClusterSpec {
    fn from(record: ClusterRecord) -> Self {
        Self {
            provider: record.provider,
            callback_url: record.callback_url,
            request_id: record.request_id,
        }
    }
}

/// Cluster records stored as `SDSCluster` resources in one namespace.
#[derive(Clone)]
pub struct KubeClusterRecordStore {
    api: Api<SDSCluster>,
}

impl KubeClusterRecordStore {
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
        }
    }

    /// Connects using the ambient kubeconfig or in-cluster service account.
    pub async fn try_default(namespace: &str) -> CmaResult<Self> {
        let client = Client::try_default().await?;
        Ok(Self::new(client, namespace))
    }
}

fn spec_patch(record: ClusterRecord) -> serde_json::Value {
    json!({ "spec": SDSClusterSpec::from(record) })
}

fn status_patch(phase: ClusterPhase) -> serde_json::Value {
    json!({ "status": SDSClusterStatus { phase: Some(phase) } })
}

#[async_trait]
impl ClusterRecordClient for KubeClusterRecordStore {
    async fn create_cluster(&self, name: &str, record: ClusterRecord) -> CmaResult<()> {
        let resource = SDSCluster::new(name, SDSClusterSpec::from(record));
        self.api.create(&PostParams::default(), &resource).await?;
        debug!(cluster = %name, "created cluster record");
        Ok(())
    }

    async fn update_or_create_cluster(&self, name: &str, record: ClusterRecord) -> CmaResult<()> {
        if self.api.get_opt(name).await?.is_none() {
            return self.create_cluster(name, record).await;
        }
        self.api
            .patch(name, &PatchParams::default(), &Patch::Merge(spec_patch(record)))
            .await?;
        debug!(cluster = %name, "updated cluster record");
        Ok(())
    }

    async fn change_cluster_status(&self, name: &str, phase: ClusterPhase) -> CmaResult<()> {
        self.api
            .patch_status(name, &PatchParams::default(), &Patch::Merge(status_patch(phase)))
            .await?;
        debug!(cluster = %name, %phase, "changed cluster phase");
        Ok(())
    }
}
