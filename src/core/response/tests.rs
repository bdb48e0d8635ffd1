use super::*;
use serde_json::json;

#[test]
fn parses_list_and_single_responses_across_documents() {
    let stdout = r#"SetContext:
  - responseType: nil
GetContext:
  - responseType: map
    responseBody:
      name: ctx
      target: kubernetes
---
GetEnv:
  responseType: err
  responseBody: not found
"#;

    let mut log = parse_plugin_output(stdout).unwrap();
    assert_eq!(log.len(), 3);

    let set = log.next(RuntimeApiName::SetContext).unwrap();
    assert_eq!(set.response_type, ResponseType::Nil);
    assert_eq!(set.response_body, Value::Null);

    let get = log.next(RuntimeApiName::GetContext).unwrap();
    assert_eq!(get.response_body, json!({"name": "ctx", "target": "kubernetes"}));

    let env = log.next(RuntimeApiName::GetEnv).unwrap();
    assert!(env.is_error());
    assert_eq!(env.error_message().as_deref(), Some("not found"));
    assert!(log.is_empty());
}

#[test]
fn repeated_api_names_are_consumed_in_call_order() {
    let stdout = r#"GetEnv:
  - responseType: str
    responseBody: one
---
GetEnv:
  - responseType: str
    responseBody: two
"#;
    let mut log = parse_plugin_output(stdout).unwrap();
    assert_eq!(log.next(RuntimeApiName::GetEnv).unwrap().response_body, json!("one"));
    assert_eq!(log.next(RuntimeApiName::GetEnv).unwrap().response_body, json!("two"));
    assert!(log.next(RuntimeApiName::GetEnv).is_none());
}

#[test]
fn plain_log_lines_are_skipped() {
    let stdout = "starting plugin: {broken\n---\nhello world\n---\nSetEnv:\n  responseType: nil\n";
    let mut log = parse_plugin_output(stdout).unwrap();
    assert_eq!(log.skipped_documents(), 2);
    assert!(log.next(RuntimeApiName::SetEnv).is_some());
}

#[test]
fn unknown_keys_do_not_count_as_responses() {
    let stdout = "level: info\nmsg: running\n";
    let mut log = parse_plugin_output(stdout).unwrap();
    assert!(log.is_empty());
    assert_eq!(log.skipped_documents(), 1);
}

#[test]
fn malformed_response_for_known_api_is_an_error() {
    let stdout = "GetEnv:\n  responseType: banana\n";
    let err = parse_plugin_output(stdout).unwrap_err();
    assert!(matches!(err, CompatError::MalformedOutput(_)));
}

#[test]
fn empty_output_yields_empty_log() {
    let mut log = parse_plugin_output("").unwrap();
    assert!(log.is_empty());
    assert_eq!(log.skipped_documents(), 0);
}

#[test]
fn str_body_keeps_its_printed_form() {
    let mut log = parse_plugin_output(
        "GetEnv:\n  - responseType: str\n    responseBody: 8080\n  - responseType: str\n    responseBody: true\n",
    )
    .unwrap();

    assert_eq!(log.next(RuntimeApiName::GetEnv).unwrap().body(), json!("8080"));
    assert_eq!(log.next(RuntimeApiName::GetEnv).unwrap().body(), json!("true"));
}

#[test]
fn typed_bodies_are_left_alone() {
    let int = ApiResponse {
        response_type: ResponseType::Int,
        response_body: json!(3),
    };
    let nil = ApiResponse {
        response_type: ResponseType::Nil,
        response_body: json!("ignored"),
    };
    assert_eq!(int.body(), json!(3));
    assert_eq!(nil.body(), serde_json::Value::Null);
}
