pub mod api_client;
pub mod kube_record_store;
pub mod vmware_provisioning_client;
