mod cluster_record_client;
mod provisioning_client;

pub use cluster_record_client::ClusterRecordClient;
pub use provisioning_client::ProvisioningClient;

#[cfg(test)]
pub use cluster_record_client::MockClusterRecordClient;
#[cfg(test)]
pub use provisioning_client::MockProvisioningClient;
