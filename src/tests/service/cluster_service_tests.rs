use crate::{
    AdjustClusterMsg, AdjustClusterOutput, AdjustClusterVmwareSpec, CallbackMsg, ClusterPhase,
    ClusterStatus, ClusterUpgradeOutput, CmaError, CreateClusterMsg, CreateClusterOutput,
    CreateClusterProviderSpec, CreateClusterVmwareSpec, DeleteClusterMsg, DeleteClusterOutput,
    GetClusterListMsg, GetClusterMsg, GetClusterOutput, GetClusterUpgradesOutput,
    GetUpgradeClusterInformationMsg, KubernetesLabelMsg, ListClusterOutput,
    ProviderClusterDetailItem, ProviderClusterItem, UpgradeClusterMsg, ValidationError,
    VmwareClusterService, VmwareMachineSpecMsg, VmwareRemoveMachineSpecMsg,
    core::domain::client::{MockClusterRecordClient, MockProvisioningClient},
};
use mockall::Sequence;

fn create_service(
    provisioning: MockProvisioningClient,
    records: MockClusterRecordClient,
) -> VmwareClusterService {
    VmwareClusterService::builder()
        .provider("vmware")
        .provisioning_client(provisioning)
        .record_client(records)
        .build()
        .unwrap()
}

fn callback() -> Option<CallbackMsg> {
    Some(CallbackMsg {
        url: "https://callback.example.com/hook".to_string(),
        request_id: "req-1".to_string(),
    })
}

fn machine(host: &str) -> VmwareMachineSpecMsg {
    VmwareMachineSpecMsg {
        username: "root".to_string(),
        host: host.to_string(),
        port: 22,
        password: "secret".to_string(),
        labels: vec![KubernetesLabelMsg {
            name: "node-role".to_string(),
            value: host.to_string(),
        }],
    }
}

fn create_msg(
    control_plane_nodes: Vec<VmwareMachineSpecMsg>,
    worker_nodes: Vec<VmwareMachineSpecMsg>,
) -> CreateClusterMsg {
    CreateClusterMsg {
        name: "c1".to_string(),
        provider: CreateClusterProviderSpec {
            name: "vmware".to_string(),
            k8s_version: "1.28.3".to_string(),
            high_availability: false,
            network_fabric: "calico".to_string(),
            vmware: Some(CreateClusterVmwareSpec {
                control_plane_nodes,
                worker_nodes,
                api_endpoint: "10.0.0.100".to_string(),
            }),
        },
        callback: callback(),
    }
}

fn provisioning_failure() -> CmaError {
    CmaError::provisioning(500, "vSphere unavailable")
}

fn record_failure() -> CmaError {
    CmaError::Connection("apiserver unavailable".to_string())
}

fn expect_no_record_writes(records: &mut MockClusterRecordClient) {
    records.expect_create_cluster().never();
    records.expect_update_or_create_cluster().never();
    records.expect_change_cluster_status().never();
}

fn expect_transition(records: &mut MockClusterRecordClient, expected: ClusterPhase) {
    let mut seq = Sequence::new();
    records
        .expect_update_or_create_cluster()
        .withf(|name, record| {
            name == "c1"
                && record.provider == "vmware"
                && record.callback_url == "https://callback.example.com/hook"
                && record.request_id == "req-1"
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    records
        .expect_change_cluster_status()
        .withf(move |name, phase| name == "c1" && *phase == expected)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
}

fn expect_failing_transition(records: &mut MockClusterRecordClient) {
    records
        .expect_update_or_create_cluster()
        .times(1)
        .returning(|_, _| Err(record_failure()));
    records
        .expect_change_cluster_status()
        .times(1)
        .returning(|_, _| Err(record_failure()));
}

// ---------------------------------------------------------------------------
// create_cluster
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_cluster_success() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_create_cluster()
        .withf(|input| {
            input.name == "c1"
                && input.control_plane_nodes.len() == 1
                && input.control_plane_nodes[0].host == "10.0.0.1"
                && input.worker_nodes.is_empty()
        })
        .times(1)
        .returning(|_| {
            Ok(CreateClusterOutput {
                cluster: ProviderClusterItem {
                    id: "abc".to_string(),
                    name: "c1".to_string(),
                    status: "PROVISIONING".to_string(),
                },
            })
        });

    let mut records = MockClusterRecordClient::new();
    records
        .expect_create_cluster()
        .withf(|name, record| {
            name == "c1"
                && record.provider == "vmware"
                && record.callback_url == "https://callback.example.com/hook"
                && record.request_id == "req-1"
        })
        .times(1)
        .returning(|_, _| Ok(()));

    let service = create_service(provisioning, records);
    let reply = service
        .create_cluster(create_msg(vec![machine("10.0.0.1")], vec![]))
        .await
        .unwrap();

    assert!(reply.ok);
    let cluster = reply.cluster.unwrap();
    assert_eq!(cluster.id, "abc");
    assert_eq!(cluster.name, "c1");
    assert_eq!(cluster.status, ClusterStatus::Provisioning);
}

#[tokio::test]
async fn test_create_cluster_forwards_every_node() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_create_cluster()
        .withf(|input| {
            let cp: Vec<_> = input.control_plane_nodes.iter().map(|m| m.host.as_str()).collect();
            let workers: Vec<_> = input.worker_nodes.iter().map(|m| m.host.as_str()).collect();
            cp == ["10.0.0.1", "10.0.0.2", "10.0.0.3"]
                && workers == ["10.0.1.1", "10.0.1.2"]
                && input
                    .worker_nodes
                    .iter()
                    .all(|m| m.port.get() == 22 && m.labels[0].value == m.host)
                && input.k8s_version == "1.28.3"
                && input.api_endpoint == "10.0.0.100"
                && input.network_fabric == "calico"
        })
        .times(1)
        .returning(|_| Ok(CreateClusterOutput::default()));

    let mut records = MockClusterRecordClient::new();
    records.expect_create_cluster().returning(|_, _| Ok(()));

    let service = create_service(provisioning, records);
    let reply = service
        .create_cluster(create_msg(
            vec![machine("10.0.0.1"), machine("10.0.0.2"), machine("10.0.0.3")],
            vec![machine("10.0.1.1"), machine("10.0.1.2")],
        ))
        .await
        .unwrap();

    // The provider echoed nothing back; the requested name is kept.
    let cluster = reply.cluster.unwrap();
    assert_eq!(cluster.name, "c1");
    assert_eq!(cluster.status, ClusterStatus::StatusUnspecified);
}

#[tokio::test]
async fn test_create_cluster_provisioning_error_skips_record() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_create_cluster()
        .times(1)
        .returning(|_| Err(provisioning_failure()));

    let mut records = MockClusterRecordClient::new();
    expect_no_record_writes(&mut records);

    let service = create_service(provisioning, records);
    let result = service
        .create_cluster(create_msg(vec![machine("10.0.0.1")], vec![]))
        .await;
    assert!(matches!(result, Err(CmaError::Provisioning { status: 500, .. })));
}

#[tokio::test]
async fn test_create_cluster_record_failure_still_succeeds() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning.expect_create_cluster().returning(|_| {
        Ok(CreateClusterOutput {
            cluster: ProviderClusterItem {
                id: "abc".to_string(),
                name: "c1".to_string(),
                status: "PROVISIONING".to_string(),
            },
        })
    });

    let mut records = MockClusterRecordClient::new();
    records
        .expect_create_cluster()
        .times(1)
        .returning(|_, _| Err(record_failure()));

    let service = create_service(provisioning, records);
    let reply = service
        .create_cluster(create_msg(vec![machine("10.0.0.1")], vec![]))
        .await
        .unwrap();
    assert!(reply.ok);
    assert_eq!(reply.cluster.unwrap().id, "abc");
}

#[tokio::test]
async fn test_create_cluster_invalid_port_rejected_before_provisioning() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning.expect_create_cluster().never();
    let mut records = MockClusterRecordClient::new();
    expect_no_record_writes(&mut records);

    let mut bad = machine("10.0.1.1");
    bad.port = 65536;
    let service = create_service(provisioning, records);
    let result = service
        .create_cluster(create_msg(vec![machine("10.0.0.1")], vec![bad]))
        .await;
    assert!(matches!(
        result,
        Err(CmaError::Validation(ValidationError::Field { ref field, .. })) if field == "port"
    ));
}

#[tokio::test]
async fn test_create_cluster_without_callback_records_empty_fields() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_create_cluster()
        .returning(|_| Ok(CreateClusterOutput::default()));

    let mut records = MockClusterRecordClient::new();
    records
        .expect_create_cluster()
        .withf(|_, record| record.callback_url.is_empty() && record.request_id.is_empty())
        .times(1)
        .returning(|_, _| Ok(()));

    let mut msg = create_msg(vec![], vec![]);
    msg.callback = None;
    let service = create_service(provisioning, records);
    assert!(service.create_cluster(msg).await.unwrap().ok);
}

// ---------------------------------------------------------------------------
// get_cluster / get_cluster_list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_cluster_success() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_get_cluster()
        .withf(|input| input.name == "c1")
        .times(1)
        .returning(|_| {
            Ok(GetClusterOutput {
                cluster: ProviderClusterDetailItem {
                    id: "abc".to_string(),
                    name: "c1".to_string(),
                    status: "RUNNING".to_string(),
                    kubeconfig: "apiVersion: v1\nkind: Config".to_string(),
                },
            })
        });
    let mut records = MockClusterRecordClient::new();
    expect_no_record_writes(&mut records);

    let service = create_service(provisioning, records);
    let reply = service
        .get_cluster(GetClusterMsg {
            name: "c1".to_string(),
        })
        .await
        .unwrap();

    assert!(reply.ok);
    let cluster = reply.cluster.unwrap();
    assert_eq!(cluster.status, ClusterStatus::Running);
    assert_eq!(cluster.kubeconfig, "apiVersion: v1\nkind: Config");
}

#[tokio::test]
async fn test_get_cluster_unknown_status_is_unspecified() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning.expect_get_cluster().returning(|_| {
        Ok(GetClusterOutput {
            cluster: ProviderClusterDetailItem {
                id: "abc".to_string(),
                name: "c1".to_string(),
                status: "Bootstrapping".to_string(),
                kubeconfig: String::new(),
            },
        })
    });

    let service = create_service(provisioning, MockClusterRecordClient::new());
    let reply = service
        .get_cluster(GetClusterMsg {
            name: "c1".to_string(),
        })
        .await
        .unwrap();
    assert!(reply.ok);
    assert_eq!(reply.cluster.unwrap().status, ClusterStatus::StatusUnspecified);
}

#[tokio::test]
async fn test_get_cluster_missing_returns_error() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_get_cluster()
        .withf(|input| input.name == "missing")
        .returning(|_| Err(CmaError::NotFound("cluster missing not found".to_string())));
    let mut records = MockClusterRecordClient::new();
    expect_no_record_writes(&mut records);

    let service = create_service(provisioning, records);
    let result = service
        .get_cluster(GetClusterMsg {
            name: "missing".to_string(),
        })
        .await;
    assert!(matches!(result, Err(CmaError::NotFound(_))));
}

#[tokio::test]
async fn test_get_cluster_list_maps_statuses() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning.expect_list_clusters().times(1).returning(|_| {
        Ok(ListClusterOutput {
            clusters: vec![
                ProviderClusterItem {
                    id: "1".to_string(),
                    name: "a".to_string(),
                    status: "RUNNING".to_string(),
                },
                ProviderClusterItem {
                    id: "2".to_string(),
                    name: "b".to_string(),
                    status: "upgrading".to_string(),
                },
                ProviderClusterItem {
                    id: "3".to_string(),
                    name: "c".to_string(),
                    status: "ERROR".to_string(),
                },
            ],
        })
    });
    let mut records = MockClusterRecordClient::new();
    expect_no_record_writes(&mut records);

    let service = create_service(provisioning, records);
    let reply = service.get_cluster_list(GetClusterListMsg {}).await.unwrap();

    assert!(reply.ok);
    let statuses: Vec<_> = reply.clusters.iter().map(|c| c.status).collect();
    assert_eq!(statuses, [
        ClusterStatus::Running,
        ClusterStatus::StatusUnspecified,
        ClusterStatus::Error
    ]);
    let names: Vec<_> = reply.clusters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[tokio::test]
async fn test_get_cluster_list_empty() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_list_clusters()
        .returning(|_| Ok(ListClusterOutput::default()));

    let service = create_service(provisioning, MockClusterRecordClient::new());
    let reply = service.get_cluster_list(GetClusterListMsg {}).await.unwrap();
    assert!(reply.ok);
    assert!(reply.clusters.is_empty());
}

#[tokio::test]
async fn test_get_cluster_list_error() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_list_clusters()
        .returning(|_| Err(provisioning_failure()));
    let mut records = MockClusterRecordClient::new();
    expect_no_record_writes(&mut records);

    let service = create_service(provisioning, records);
    assert!(service.get_cluster_list(GetClusterListMsg {}).await.is_err());
}

// ---------------------------------------------------------------------------
// delete_cluster
// ---------------------------------------------------------------------------

fn delete_msg() -> DeleteClusterMsg {
    DeleteClusterMsg {
        name: "c1".to_string(),
        callback: callback(),
    }
}

#[tokio::test]
async fn test_delete_cluster_marks_record_deleting() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_delete_cluster()
        .withf(|input| input.name == "c1")
        .times(1)
        .returning(|_| {
            Ok(DeleteClusterOutput {
                status: "Deleting".to_string(),
            })
        });
    let mut records = MockClusterRecordClient::new();
    expect_transition(&mut records, ClusterPhase::Deleting);

    let service = create_service(provisioning, records);
    let reply = service.delete_cluster(delete_msg()).await.unwrap();
    assert!(reply.ok);
    assert_eq!(reply.status, "Deleting");
}

#[tokio::test]
async fn test_delete_cluster_provisioning_error_skips_record() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_delete_cluster()
        .returning(|_| Err(provisioning_failure()));
    let mut records = MockClusterRecordClient::new();
    expect_no_record_writes(&mut records);

    let service = create_service(provisioning, records);
    assert!(service.delete_cluster(delete_msg()).await.is_err());
}

#[tokio::test]
async fn test_delete_cluster_record_failures_still_succeed() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_delete_cluster()
        .returning(|_| Ok(DeleteClusterOutput::default()));
    let mut records = MockClusterRecordClient::new();
    expect_failing_transition(&mut records);

    let service = create_service(provisioning, records);
    let reply = service.delete_cluster(delete_msg()).await.unwrap();
    assert!(reply.ok);
}

// ---------------------------------------------------------------------------
// get_cluster_upgrades / cluster_upgrade
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_cluster_upgrades_returns_versions() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_get_cluster_upgrades()
        .withf(|input| input.name == "c1")
        .returning(|_| {
            Ok(GetClusterUpgradesOutput {
                versions: vec!["1.28.4".to_string(), "1.29.0".to_string()],
            })
        });
    let mut records = MockClusterRecordClient::new();
    expect_no_record_writes(&mut records);

    let service = create_service(provisioning, records);
    let reply = service
        .get_cluster_upgrades(GetUpgradeClusterInformationMsg {
            name: "c1".to_string(),
        })
        .await
        .unwrap();
    assert!(reply.ok);
    assert_eq!(reply.versions, ["1.28.4", "1.29.0"]);
}

#[tokio::test]
async fn test_get_cluster_upgrades_error() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_get_cluster_upgrades()
        .returning(|_| Err(provisioning_failure()));
    let mut records = MockClusterRecordClient::new();
    expect_no_record_writes(&mut records);

    let service = create_service(provisioning, records);
    let result = service
        .get_cluster_upgrades(GetUpgradeClusterInformationMsg {
            name: "c1".to_string(),
        })
        .await;
    assert!(result.is_err());
}

fn upgrade_msg() -> UpgradeClusterMsg {
    UpgradeClusterMsg {
        name: "c1".to_string(),
        version: "1.29.0".to_string(),
        callback: callback(),
    }
}

#[tokio::test]
async fn test_cluster_upgrade_marks_record_upgrading() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_cluster_upgrade()
        .withf(|input| input.name == "c1" && input.version == "1.29.0")
        .times(1)
        .returning(|_| Ok(ClusterUpgradeOutput { ok: true }));
    let mut records = MockClusterRecordClient::new();
    expect_transition(&mut records, ClusterPhase::Upgrading);

    let service = create_service(provisioning, records);
    assert!(service.cluster_upgrade(upgrade_msg()).await.unwrap().ok);
}

#[tokio::test]
async fn test_cluster_upgrade_provisioning_error_skips_record() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_cluster_upgrade()
        .returning(|_| Err(provisioning_failure()));
    let mut records = MockClusterRecordClient::new();
    expect_no_record_writes(&mut records);

    let service = create_service(provisioning, records);
    assert!(service.cluster_upgrade(upgrade_msg()).await.is_err());
}

#[tokio::test]
async fn test_cluster_upgrade_record_failures_still_succeed() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_cluster_upgrade()
        .returning(|_| Ok(ClusterUpgradeOutput { ok: true }));
    let mut records = MockClusterRecordClient::new();
    expect_failing_transition(&mut records);

    let service = create_service(provisioning, records);
    assert!(service.cluster_upgrade(upgrade_msg()).await.unwrap().ok);
}

// ---------------------------------------------------------------------------
// adjust_cluster
// ---------------------------------------------------------------------------

fn adjust_msg() -> AdjustClusterMsg {
    AdjustClusterMsg {
        name: "c1".to_string(),
        callback: callback(),
        vmware: Some(AdjustClusterVmwareSpec {
            add_nodes: vec![machine("10.0.2.1")],
            remove_nodes: vec![VmwareRemoveMachineSpecMsg {
                host: "10.0.1.1".to_string(),
            }],
        }),
    }
}

#[tokio::test]
async fn test_adjust_cluster_one_add_one_remove() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_adjust_cluster()
        .withf(|input| {
            input.name == "c1"
                && input.add_nodes.len() == 1
                && input.add_nodes[0].host == "10.0.2.1"
                && input.add_nodes[0].username == "root"
                && input.add_nodes[0].password == "secret"
                && input.add_nodes[0].port.get() == 22
                && input.add_nodes[0].labels.len() == 1
                && input.remove_nodes.len() == 1
                && input.remove_nodes[0].host == "10.0.1.1"
        })
        .times(1)
        .returning(|_| Ok(AdjustClusterOutput { ok: true }));
    let mut records = MockClusterRecordClient::new();
    expect_transition(&mut records, ClusterPhase::Upgrading);

    let service = create_service(provisioning, records);
    assert!(service.adjust_cluster(adjust_msg()).await.unwrap().ok);
}

#[tokio::test]
async fn test_adjust_cluster_provisioning_error_skips_record() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_adjust_cluster()
        .returning(|_| Err(provisioning_failure()));
    let mut records = MockClusterRecordClient::new();
    expect_no_record_writes(&mut records);

    let service = create_service(provisioning, records);
    let result = service.adjust_cluster(adjust_msg()).await;
    assert!(matches!(result, Err(CmaError::Provisioning { .. })));
}

#[tokio::test]
async fn test_adjust_cluster_record_failures_still_succeed() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_adjust_cluster()
        .returning(|_| Ok(AdjustClusterOutput { ok: true }));
    let mut records = MockClusterRecordClient::new();
    expect_failing_transition(&mut records);

    let service = create_service(provisioning, records);
    assert!(service.adjust_cluster(adjust_msg()).await.unwrap().ok);
}

#[tokio::test]
async fn test_adjust_cluster_without_vmware_spec_is_rejected() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning.expect_adjust_cluster().never();
    let mut records = MockClusterRecordClient::new();
    expect_no_record_writes(&mut records);

    let mut msg = adjust_msg();
    msg.vmware = None;
    let service = create_service(provisioning, records);
    assert!(matches!(
        service.adjust_cluster(msg).await,
        Err(CmaError::Validation(_))
    ));
}

// ---------------------------------------------------------------------------
// builder
// ---------------------------------------------------------------------------

#[test]
fn test_builder_requires_both_clients() {
    let result = VmwareClusterService::builder()
        .provisioning_client(MockProvisioningClient::new())
        .build();
    assert!(matches!(
        result,
        Err(CmaError::Validation(ValidationError::Field { ref field, .. })) if field == "record_client"
    ));

    let result = VmwareClusterService::builder()
        .record_client(MockClusterRecordClient::new())
        .build();
    assert!(matches!(
        result,
        Err(CmaError::Validation(ValidationError::Field { ref field, .. }))
            if field == "provisioning_client"
    ));
}

#[tokio::test]
async fn test_configured_provider_is_stamped_on_records() {
    let mut provisioning = MockProvisioningClient::new();
    provisioning
        .expect_create_cluster()
        .returning(|_| Ok(CreateClusterOutput::default()));
    let mut records = MockClusterRecordClient::new();
    records
        .expect_create_cluster()
        .withf(|_, record| record.provider == "vsphere-lab")
        .times(1)
        .returning(|_, _| Ok(()));

    let service = VmwareClusterService::builder()
        .provider("vsphere-lab")
        .provisioning_client(provisioning)
        .record_client(records)
        .build()
        .unwrap();
    assert_eq!(service.provider(), "vsphere-lab");
    service
        .create_cluster(create_msg(vec![], vec![]))
        .await
        .unwrap();
}
