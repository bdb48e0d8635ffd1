use super::{MachineEnvelope, envelope_v1};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Payload {
    value: u32,
}

#[test]
fn envelope_ok_reflects_errors_empty() {
    let env = envelope_v1("run", Payload { value: 1 }, vec![], vec![]);

    let json = serde_json::to_value(&env).expect("serialize");
    assert_eq!(json["version"], "v1");
    assert_eq!(json["command"], "run");
    assert_eq!(json["ok"], true);
    assert_eq!(json["data"]["value"], 1);

    let failed = envelope_v1("run", Payload { value: 1 }, vec![], vec!["boom".to_string()]);
    assert!(!failed.ok);
}

#[test]
fn envelope_serializes_core_fields_for_contract() {
    let env = MachineEnvelope {
        version: "v1".to_string(),
        command: "matrix".to_string(),
        ok: false,
        data: Payload { value: 2 },
        warnings: vec!["warn".to_string()],
        errors: vec!["err".to_string()],
        meta: super::MachineMeta {
            generated_at: "2026-02-18T00:00:00Z".to_string(),
        },
    };

    let json = serde_json::to_value(&env).expect("serialize");
    assert!(json.get("data").is_some());
    assert!(json.get("warnings").is_some());
    assert!(json.get("errors").is_some());
    assert_eq!(json["meta"]["generated_at"], "2026-02-18T00:00:00Z");
}
