use rf_project::schema::*;
use rf_project::{LATEST_VERSION, load_json, load_yaml, save_json, save_yaml, validate_scenario};

fn ring_on_plane() -> Scenario {
    Scenario {
        version: LATEST_VERSION,
        name: "Ring on plane".to_string(),
        systems: vec![
            SystemDef {
                id: "ring".to_string(),
                kind: SystemKindDef::Rod {
                    n_elems: 16,
                    length: 1.0,
                    radius: 0.02,
                    periodic: true,
                    ring_radius: Some(0.5),
                },
            },
            SystemDef {
                id: "ball".to_string(),
                kind: SystemKindDef::RigidBody {
                    center: [0.0, 0.0, 1.0],
                    radius: 0.1,
                },
            },
            SystemDef {
                id: "floor".to_string(),
                kind: SystemKindDef::Surface {
                    origin: [0.0, 0.0, 0.0],
                    normal: [0.0, 0.0, 1.0],
                },
            },
        ],
        contacts: vec![
            ContactDef {
                first: "ring".to_string(),
                second: "floor".to_string(),
                model: ContactModelDef::NoContact,
            },
            ContactDef {
                first: "ball".to_string(),
                second: "floor".to_string(),
                model: ContactModelDef::NoContact,
            },
        ],
        run: RunDef {
            dt: 1e-4,
            t_end: 0.5,
            max_steps: 10_000,
            record_every: 20,
            parallel: true,
        },
    }
}

#[test]
fn roundtrip_yaml_empty_scenario() {
    let scenario = Scenario {
        version: LATEST_VERSION,
        name: "Empty".to_string(),
        systems: vec![],
        contacts: vec![],
        run: RunDef::default(),
    };

    validate_scenario(&scenario).unwrap();

    let path = std::env::temp_dir().join("rf_project_roundtrip_empty.yaml");
    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_yaml_ring_on_plane() {
    let scenario = ring_on_plane();
    let path = std::env::temp_dir().join("rf_project_roundtrip_ring.yaml");
    save_yaml(&path, &scenario).unwrap();
    assert_eq!(load_yaml(&path).unwrap(), scenario);
}

#[test]
fn roundtrip_json_ring_on_plane() {
    let scenario = ring_on_plane();
    let path = std::env::temp_dir().join("rf_project_roundtrip_ring.json");
    save_json(&path, &scenario).unwrap();
    assert_eq!(load_json(&path).unwrap(), scenario);
}

#[test]
fn save_refuses_invalid_scenario() {
    let mut scenario = ring_on_plane();
    scenario.contacts[0] = ContactDef {
        first: "floor".to_string(),
        second: "ring".to_string(),
        model: ContactModelDef::NoContact,
    };
    let path = std::env::temp_dir().join("rf_project_invalid.yaml");
    assert!(save_yaml(&path, &scenario).is_err());
}
