use crate::core::domain::{
    error::CmaResult,
    model::{cluster_phase::ClusterPhase, cluster_record::ClusterRecord},
};
use async_trait::async_trait;

/// Persists the lightweight tracking record of a cluster.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClusterRecordClient: Send + Sync {
    /// Creates the record. Fails if it already exists.
    async fn create_cluster(&self, name: &str, record: ClusterRecord) -> CmaResult<()>;

    /// Replaces the record's fields, creating the record when absent.
    async fn update_or_create_cluster(&self, name: &str, record: ClusterRecord) -> CmaResult<()>;

    /// Requests a phase transition on an existing record.
    async fn change_cluster_status(&self, name: &str, phase: ClusterPhase) -> CmaResult<()>;
}
