//! Error text each runtime version produces for well-known failures.
//!
//! Expected errors are compared verbatim, so these strings are part of the
//! compatibility contract.

use crate::core::RuntimeVersion;
use crate::types::{ContextType, Target};

/// Sentinel for "missing entry" errors; matches any error ending in it.
pub const ERR_NOT_FOUND: &str = "not found";

pub fn is_not_found(message: &str) -> bool {
    message.trim_end().ends_with(ERR_NOT_FOUND)
}

pub fn context_not_found(version: RuntimeVersion, name: &str) -> String {
    if version.at_least(RuntimeVersion::V090) {
        format!("context {} not found", name)
    } else {
        format!("could not find context \"{}\"", name)
    }
}

/// v0.25.4 names the legacy context type, later versions the target.
pub fn current_context_not_set(version: RuntimeVersion, target: Target) -> String {
    if version.at_least(RuntimeVersion::V0280) {
        format!("no current context set for target \"{}\"", target)
    } else {
        format!("no current context set for type \"{}\"", ContextType::from(target))
    }
}

pub fn server_not_found(name: &str) -> String {
    format!("could not find server \"{}\"", name)
}

pub fn current_server_not_set() -> String {
    "current server \"\" not found".to_string()
}

pub fn feature_not_found(version: RuntimeVersion, plugin: &str, key: &str) -> String {
    if version.at_least(RuntimeVersion::V0280) {
        ERR_NOT_FOUND.to_string()
    } else {
        format!("could not find feature \"{}\" for plugin \"{}\"", key, plugin)
    }
}

pub fn env_not_found() -> String {
    ERR_NOT_FOUND.to_string()
}

pub fn discovery_source_not_found(version: RuntimeVersion, name: &str) -> String {
    if version.at_least(RuntimeVersion::V090) {
        format!("cli discovery source \"{}\" not found", name)
    } else {
        "cli discovery source not found".to_string()
    }
}

pub fn metadata_setting_not_found() -> String {
    ERR_NOT_FOUND.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_messages_change_at_v0_90() {
        assert_eq!(
            context_not_found(RuntimeVersion::V0280, "ctx"),
            "could not find context \"ctx\""
        );
        assert_eq!(context_not_found(RuntimeVersion::V090, "ctx"), "context ctx not found");
        assert_eq!(context_not_found(RuntimeVersion::Latest, "ctx"), "context ctx not found");
    }

    #[test]
    fn current_context_message_uses_type_on_v0_25() {
        assert_eq!(
            current_context_not_set(RuntimeVersion::V0254, Target::Kubernetes),
            "no current context set for type \"k8s\""
        );
        assert_eq!(
            current_context_not_set(RuntimeVersion::V102, Target::MissionControl),
            "no current context set for target \"mission-control\""
        );
    }

    #[test]
    fn feature_errors_collapse_to_sentinel() {
        assert_eq!(
            feature_not_found(RuntimeVersion::V0116, "builder", "alpha"),
            "could not find feature \"alpha\" for plugin \"builder\""
        );
        assert_eq!(feature_not_found(RuntimeVersion::V0280, "builder", "alpha"), ERR_NOT_FOUND);
    }

    #[test]
    fn sentinel_matching() {
        assert!(is_not_found("not found"));
        assert!(is_not_found("context ctx not found"));
        assert!(is_not_found(&current_server_not_set()));
        assert!(!is_not_found("could not find context \"ctx\""));
        assert!(is_not_found(&discovery_source_not_found(RuntimeVersion::V0254, "d")));
    }
}
