//! Outbound replies. Every reply carries an explicit `ok` flag.

use crate::core::domain::model::cluster_item::{ClusterDetailItem, ClusterItem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct CreateClusterReply {
    pub ok: bool,
    pub cluster: Option<ClusterItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct GetClusterReply {
    pub ok: bool,
    pub cluster: Option<ClusterDetailItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct GetClusterListReply {
    pub ok: bool,
    pub clusters: Vec<ClusterItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct DeleteClusterReply {
    pub ok: bool,
    /// Provider status string, passed through untranslated.
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct GetUpgradeClusterInformationReply {
    pub ok: bool,
    pub versions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct UpgradeClusterReply {
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct AdjustClusterReply {
    pub ok: bool,
}
