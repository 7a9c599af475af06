mod advisory_write;
mod mapper;
pub mod vmware_cluster_service;
