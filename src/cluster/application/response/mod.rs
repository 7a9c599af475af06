pub mod cluster_reply;
