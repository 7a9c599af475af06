pub mod adjust_cluster_msg;
pub mod callback_msg;
pub mod cluster_msg;
pub mod create_cluster_msg;
