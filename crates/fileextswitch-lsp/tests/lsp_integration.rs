//! Integration tests for fileextswitch-lsp.
//!
//! These drive the public `Backend` through `LspService` the way a client
//! session would: initialize, open a document, execute the command.

use fileextswitch_core::{DirectoryListing, HostEffect, ViewColumn, switch_to_companion};
use fileextswitch_lsp::{Backend, DeferredHost};
use serde_json::json;
use tower_lsp::LanguageServer;
use tower_lsp::LspService;
use tower_lsp::lsp_types::*;

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_session_cycles_through_companions() {
        let temp = tempfile::tempdir().unwrap();
        for name in ["x.ts", "x.html", "x.css"] {
            std::fs::write(temp.path().join(name), "").unwrap();
        }

        let (service, _socket) = LspService::new(Backend::new);
        service
            .inner()
            .initialize(InitializeParams {
                initialization_options: Some(json!({ "locale": "en" })),
                ..Default::default()
            })
            .await
            .unwrap();

        let mut current = Url::from_file_path(temp.path().join("x.ts")).unwrap();
        let mut seen = Vec::new();
        for _ in 0..3 {
            let result = service
                .inner()
                .execute_command(ExecuteCommandParams {
                    command: "fileextswitch".to_string(),
                    arguments: vec![json!({
                        "extensions": [".html", ".css"],
                        "uri": current.as_str(),
                    })],
                    work_done_progress_params: WorkDoneProgressParams::default(),
                })
                .await
                .unwrap()
                .expect("companion expected");
            current = Url::parse(result["uri"].as_str().unwrap()).unwrap();
            let path = current.to_file_path().unwrap();
            seen.push(path.file_name().unwrap().to_string_lossy().into_owned());
        }

        assert_eq!(seen, vec!["x.html", "x.css", "x.html"]);
    }
}

mod deferred_host_tests {
    use super::*;
    use fileextswitch_core::{DirectoryLister, SwitchResult};
    use std::path::{Path, PathBuf};

    /// Lister with a fixed set of names for every directory.
    #[derive(Debug)]
    struct FixedLister(Vec<&'static str>);

    impl DirectoryLister for FixedLister {
        fn list_dir(&self, _dir: &Path) -> SwitchResult<DirectoryListing> {
            Ok(self.0.iter().map(|name| name.to_string()).collect())
        }
    }

    #[test]
    fn test_effects_follow_switch_order() {
        let host = DeferredHost::with_lister(
            Some(PathBuf::from("/work/a.ts")),
            Some(ViewColumn::ONE),
            FixedLister(vec!["a.ts", "a.css"]),
        );
        switch_to_companion(
            &host,
            &json!({ "extensions": [".css"], "useOtherColumn": "yes" }),
        );

        assert_eq!(
            host.into_effects(),
            vec![HostEffect::Open {
                path: PathBuf::from("/work/a.css"),
                column: ViewColumn::TWO,
            }]
        );
    }
}
