use super::*;
use crate::core::ApiResult;
use crate::types::{ContextType, Target};
use serde_json::json;

fn k8s_context(version: RuntimeVersion) -> ContextOpts {
    ContextOpts::for_version("ctx", Target::Kubernetes, version).with_global("https://api.example.com")
}

#[test]
fn test_build_api_rejects_unsupported_version() {
    let input = DeleteFeatureInput::new(RuntimeVersion::V0254, "builder", "compact");
    let err = build_api(&input, &ExpectedOutput::ok()).unwrap_err();

    match err {
        CompatError::UnsupportedApi { api, version, since } => {
            assert_eq!(api, RuntimeApiName::DeleteFeature);
            assert_eq!(version, RuntimeVersion::V0254);
            assert_eq!(since, RuntimeVersion::V0280);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_get_current_context_shapes_kind_per_version() {
    let legacy = GetCurrentContextInput::new(RuntimeVersion::V0254, Target::MissionControl);
    let api = build_api(&legacy, &ExpectedOutput::<ContextOpts>::default()).unwrap();
    assert_eq!(api.arguments.get("type"), Some(&json!("tmc")));
    assert!(api.arguments.get("target").is_none());

    let current = GetCurrentContextInput::new(RuntimeVersion::V102, Target::MissionControl);
    let api = build_api(&current, &ExpectedOutput::<ContextOpts>::default()).unwrap();
    assert_eq!(api.arguments.get("target"), Some(&json!("mission-control")));
    assert!(api.arguments.get("type").is_none());
}

#[test]
fn test_kind_selector_rejects_wrong_field() {
    let input = RemoveCurrentContextInput {
        runtime_version: RuntimeVersion::V0280,
        target: None,
        context_type: Some(ContextType::K8s),
    };
    assert!(build_unchecked(&input).is_err());

    let input = GetCurrentContextInput {
        runtime_version: RuntimeVersion::V0254,
        target: Some(Target::Kubernetes),
        context_type: None,
    };
    assert!(build_unchecked(&input).is_err());
}

#[test]
fn test_set_context_arguments_shape() {
    let input = SetContextInput::new(RuntimeVersion::V0280, k8s_context(RuntimeVersion::V0280)).current();
    let api = build_api(&input, &ExpectedOutput::ok()).unwrap();

    assert_eq!(api.name, RuntimeApiName::SetContext);
    assert_eq!(
        Value::Object(api.arguments),
        json!({
            "context": {
                "name": "ctx",
                "target": "kubernetes",
                "globalOpts": { "endpoint": "https://api.example.com" }
            },
            "isCurrent": true
        })
    );

    let output = api.output.unwrap();
    assert_eq!(output.result, ApiResult::Success);
    assert!(output.content.is_null());
}

#[test]
fn test_set_context_requires_kind_for_write() {
    let mut context = k8s_context(RuntimeVersion::V0280);
    context.target = None;
    let input = SetContextInput::new(RuntimeVersion::V0280, context);
    assert!(build_api(&input, &ExpectedOutput::ok()).is_err());
}

#[test]
fn test_error_output() {
    let input = GetContextInput::new(RuntimeVersion::V090, "missing");
    let expected = ExpectedOutput::<ContextOpts>::error(errors::context_not_found(
        RuntimeVersion::V090,
        "missing",
    ));
    let output = build_api(&input, &expected).unwrap().output.unwrap();

    assert_eq!(output.result, ApiResult::Failed);
    assert_eq!(output.content, json!("context missing not found"));
}

#[test]
fn test_strict_output() {
    let input = GetEnvInput::new(RuntimeVersion::V0254, "EDITOR");
    let expected = ExpectedOutput::success("vim".to_string()).strict();
    let output = build_api(&input, &expected).unwrap().output.unwrap();

    assert_eq!(output.validation_strategy, ValidationStrategy::Strict);
    assert_eq!(output.content, json!("vim"));
}

#[test]
fn test_content_and_error_together_is_rejected() {
    let input = GetEnvInput::new(RuntimeVersion::V0254, "EDITOR");
    let expected = ExpectedOutput {
        content: Some("vim".to_string()),
        error: Some("boom".to_string()),
        validation_strategy: ValidationStrategy::Lenient,
    };
    assert!(build_api(&input, &expected).is_err());
}

#[test]
fn test_expected_content_follows_version_rules() {
    let input = GetContextInput::new(RuntimeVersion::V0280, "ctx");
    let mut content = k8s_context(RuntimeVersion::V0280);
    content.additional_metadata = Some(Map::new());

    assert!(build_api(&input, &ExpectedOutput::success(content.clone())).is_err());

    let input = GetContextInput::new(RuntimeVersion::V102, "ctx");
    assert!(build_api(&input, &ExpectedOutput::success(content)).is_ok());
}

#[test]
fn test_empty_inputs_serialize_to_empty_arguments() {
    let api = build_unchecked(&GetCurrentServerInput::new(RuntimeVersion::V0116)).unwrap();
    assert!(api.arguments.is_empty());
}

#[test]
fn test_missing_key_is_rejected() {
    let input = SetEnvInput::new(RuntimeVersion::V0254, " ", "value");
    let err = build_unchecked(&input).unwrap_err();
    assert!(err.to_string().contains("key is required"));
}

#[test]
fn test_local_discovery_removed_in_v090() {
    let source = PluginDiscoveryOpts::local("default", "/tmp/plugins");
    assert!(build_unchecked(&SetCliDiscoverySourceInput::new(RuntimeVersion::V0280, source.clone())).is_ok());
    assert!(build_unchecked(&SetCliDiscoverySourceInput::new(RuntimeVersion::V090, source)).is_err());
}

#[test]
fn test_command_wraps_single_api() {
    let input = IsFeatureEnabledInput::new(RuntimeVersion::V0116, "builder", "compact");
    let command = command(&input, &ExpectedOutput::success(true)).unwrap();
    assert_eq!(command.apis.len(), 1);
    assert_eq!(command.apis[0].output.as_ref().unwrap().content, json!(true));
}

#[test]
fn test_check_api_accepts_built_apis() {
    let input = SetServerInput::new(RuntimeVersion::V0116, ServerOpts::global("srv", "https://s"));
    let api = build_api(&input, &ExpectedOutput::ok()).unwrap();
    check_api(&api).unwrap();
}

#[test]
fn test_check_api_rejects_bad_arguments() {
    let api = Api::new(RuntimeApiName::GetEnv, RuntimeVersion::V0254).with_argument("name", json!("EDITOR"));
    assert!(check_api(&api).is_err());

    let api = Api::new(RuntimeApiName::GetEnv, RuntimeVersion::V0116).with_argument("key", json!("EDITOR"));
    assert!(matches!(check_api(&api), Err(CompatError::UnsupportedApi { .. })));
}

#[test]
fn test_check_api_validates_expected_output() {
    let base = Api::new(RuntimeApiName::SetEnv, RuntimeVersion::V0254)
        .with_argument("key", json!("EDITOR"))
        .with_argument("value", json!("vim"));

    let with_content = base.clone().with_output(Output::success(json!({"unexpected": true})));
    assert!(check_api(&with_content).is_err());

    let bad_failure = base.clone().with_output(Output {
        result: ApiResult::Failed,
        content: json!(42),
        ..Default::default()
    });
    assert!(check_api(&bad_failure).is_err());

    let failure = base.with_output(Output::failed("boom"));
    check_api(&failure).unwrap();
}

#[test]
fn test_check_api_legacy_context_type() {
    let api = Api::new(RuntimeApiName::GetCurrentContext, RuntimeVersion::V0254)
        .with_argument("type", json!("k8s"))
        .with_output(Output::success(json!({"name": "ctx", "type": "k8s"})));
    check_api(&api).unwrap();

    let api = Api::new(RuntimeApiName::GetCurrentContext, RuntimeVersion::Latest)
        .with_argument("target", json!("k8s"))
        .with_output(Output::success(json!({"name": "ctx", "type": "k8s"})));
    assert!(check_api(&api).is_err());
}
