pub mod cluster_item;
pub mod cluster_phase;
pub mod cluster_record;
pub mod cluster_status;
pub mod machine_spec;
pub mod provisioning;
