use super::callback_msg::CallbackMsg;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct GetClusterMsg {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct GetClusterListMsg {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct DeleteClusterMsg {
    pub name: String,
    pub callback: Option<CallbackMsg>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct GetUpgradeClusterInformationMsg {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct UpgradeClusterMsg {
    pub name: String,
    /// Target Kubernetes version.
    pub version: String,
    pub callback: Option<CallbackMsg>,
}
