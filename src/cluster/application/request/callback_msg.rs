use serde::{Deserialize, Serialize};

/// Where the caller wants to be notified once a long-running operation ends.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackMsg {
    pub url: String,
    pub request_id: String,
}
