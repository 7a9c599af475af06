use serde::{Deserialize, Serialize};

/// Tracking record persisted for a cluster in the control-plane datastore.
///
/// The phase is transitioned separately through
/// [`ClusterRecordClient::change_cluster_status`](crate::ClusterRecordClient::change_cluster_status).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ClusterRecord {
    pub callback_url: String,
    pub provider: String,
    pub request_id: String,
}
