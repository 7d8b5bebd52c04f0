//! Cross-crate integration tests verifying contracts between workspace crates.
//!
//! The CLI and LSP hosts both drive `fileextswitch_core::switch_to_companion`
//! through their own `Host`. These tests pin the parts of the core API they
//! rely on so a change there shows up before either binary breaks.

use std::path::Path;

use fileextswitch_core::{
    COMMAND_NAME, CommandRegistry, DirectoryLister, HostEffect, RealFileSystem, SwitchConfig,
    SwitchOutcome, ViewColumn, activate, deactivate, parse_args, switch_to_companion,
};
use fileextswitch_lsp::DeferredHost;
use serde_json::json;

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), "").unwrap();
    }
}

// ============================================================================
// LSP <-> core contracts
// ============================================================================

#[test]
fn lsp_deferred_host_queues_open_effect() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), &["a.ts", "a.css"]);

    let host = DeferredHost::new(Some(dir.path().join("a.ts")), Some(ViewColumn::TWO));
    let outcome = switch_to_companion(
        &host,
        &json!({ "extensions": [".css"], "useOtherColumn": true }),
    );

    assert_eq!(outcome.target(), Some(dir.path().join("a.css").as_path()));
    assert_eq!(
        host.into_effects(),
        vec![HostEffect::Open {
            path: dir.path().join("a.css"),
            column: ViewColumn::ONE,
        }]
    );
}

#[test]
fn lsp_deferred_host_queues_warning_before_info() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), &["a.ts", "a.css"]);

    let host = DeferredHost::with_lister(Some(dir.path().join("a.ts")), None, RealFileSystem);
    let outcome = switch_to_companion(&host, &json!({ "extensions": ["css"] }));

    assert!(matches!(outcome, SwitchOutcome::NoMatch));
    let effects = host.into_effects();
    assert!(matches!(
        effects.as_slice(),
        [HostEffect::Warning(_), HostEffect::Info(_)]
    ));
}

#[test]
fn lsp_registry_matches_command_name() {
    let registry = CommandRegistry::new();
    let registration = activate(&registry).unwrap();
    assert_eq!(registry.names(), vec![COMMAND_NAME.to_string()]);
    assert!(activate(&registry).is_err());

    deactivate(registration);
    assert!(registry.names().is_empty());
}

// ============================================================================
// CLI <-> core contracts
// ============================================================================

#[test]
fn cli_binding_payload_feeds_parse_args() {
    let config: SwitchConfig = toml_config(
        r#"
[bindings.style]
extensions = [".scss", ".css"]
useOtherColumn = true
"#,
    );
    let payload = config.binding("style").unwrap();
    let validated = parse_args(&payload);
    assert!(validated.warning.is_none());
    assert!(validated.request.use_other_column());
    assert_eq!(validated.request.extensions().len(), 2);
}

#[test]
fn cli_real_listing_includes_directories() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("nested.css")).unwrap();
    touch(dir.path(), &["a.ts"]);

    let listing = RealFileSystem.list_dir(dir.path()).unwrap();
    assert!(listing.contains("a.ts"));
    assert!(listing.contains("nested.css"));
}

#[test]
fn cli_failed_outcome_carries_detail() {
    let dir = tempfile::tempdir().unwrap();
    let host = DeferredHost::new(Some(dir.path().join("gone").join("a.ts")), None);
    let outcome = switch_to_companion(&host, &json!({ "extensions": [".css"] }));

    match outcome {
        SwitchOutcome::Failed(e) => assert!(!e.detail().is_empty()),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

fn toml_config(content: &str) -> SwitchConfig {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    SwitchConfig::load(&path).unwrap()
}
