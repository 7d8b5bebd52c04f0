//! Public API tests for fileextswitch-core, run against real directories.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use fileextswitch_core::*;
use serde_json::json;

/// Host over a real directory that records what it was asked to do.
struct DiskHost {
    active: Option<PathBuf>,
    column: Option<ViewColumn>,
    effects: RefCell<Vec<HostEffect>>,
}

impl DiskHost {
    fn editing(path: PathBuf) -> Self {
        Self {
            active: Some(path),
            column: None,
            effects: RefCell::new(Vec::new()),
        }
    }
}

impl Host for DiskHost {
    fn active_file_path(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn active_column(&self) -> Option<ViewColumn> {
        self.column
    }

    fn list_directory(&self, dir: &Path) -> SwitchResult<DirectoryListing> {
        RealFileSystem.list_dir(dir)
    }

    fn open_document(&self, path: &Path, column: ViewColumn) {
        self.effects.borrow_mut().push(HostEffect::Open {
            path: path.to_path_buf(),
            column,
        });
    }

    fn show_warning(&self, message: &str) {
        self.effects
            .borrow_mut()
            .push(HostEffect::Warning(message.to_string()));
    }

    fn show_info(&self, message: &str) {
        self.effects
            .borrow_mut()
            .push(HostEffect::Info(message.to_string()));
    }

    fn show_error(&self, message: &str) {
        self.effects
            .borrow_mut()
            .push(HostEffect::Error(message.to_string()));
    }
}

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), "").unwrap();
    }
}

#[test]
fn test_angular_component_cycle() {
    let temp = tempfile::tempdir().unwrap();
    touch(
        temp.path(),
        &[
            "hero.component.ts",
            "hero.component.spec.ts",
            "hero.component.css",
            "hero.component.html",
        ],
    );
    let args = json!({ "extensions": [".spec.ts", ".css", ".html", ".ts"] });

    let mut host = DiskHost::editing(temp.path().join("hero.component.ts"));
    let mut opened = Vec::new();
    for _ in 0..4 {
        let outcome = switch_to_companion(&host, &args);
        let target = outcome.target().expect("companion expected").to_path_buf();
        opened.push(target.file_name().unwrap().to_string_lossy().into_owned());
        host.active = Some(target);
    }

    assert_eq!(opened[0], "hero.component.spec.ts");
    assert!(opened.iter().all(|name| name.starts_with("hero.component.")));
}

#[test]
fn test_resolve_with_real_listing() {
    let temp = tempfile::tempdir().unwrap();
    touch(temp.path(), &["a.b.c.ts", "a.b.ts", "a.ts"]);

    let listing = RealFileSystem.list_dir(temp.path()).unwrap();
    let request = parse_args(&json!({ "extensions": [".ts"] })).request;
    let target = resolve(&temp.path().join("a.b.c.ts"), &request, &listing);
    assert_eq!(target, Some(temp.path().join("a.b.ts")));
}

#[test]
fn test_folder_fallback_with_real_listing() {
    let temp = tempfile::tempdir().unwrap();
    let widget = temp.path().join("widget");
    std::fs::create_dir(&widget).unwrap();
    touch(&widget, &["index.ts", "widget.scss"]);

    let host = DiskHost::editing(widget.join("index.ts"));
    let outcome = switch_to_companion(&host, &json!({ "extensions": [".scss"] }));
    assert_eq!(outcome.target(), Some(widget.join("widget.scss").as_path()));
}

#[test]
fn test_deleted_directory_reports_error() {
    let temp = tempfile::tempdir().unwrap();
    let gone = temp.path().join("gone");
    let host = DiskHost::editing(gone.join("a.ts"));

    let outcome = switch_to_companion(&host, &json!({ "extensions": [".css"] }));
    assert!(matches!(outcome, SwitchOutcome::Failed(_)));
    assert!(matches!(
        host.effects.borrow().as_slice(),
        [HostEffect::Error(_)]
    ));
}

#[test]
fn test_other_column_without_active_column_opens_first() {
    let temp = tempfile::tempdir().unwrap();
    touch(temp.path(), &["a.ts", "a.css"]);

    let host = DiskHost::editing(temp.path().join("a.ts"));
    let outcome = switch_to_companion(
        &host,
        &json!({ "extensions": [".css"], "useOtherColumn": true }),
    );
    match outcome {
        SwitchOutcome::Opened { column, .. } => assert_eq!(column, ViewColumn::ONE),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_typed_arguments_round_trip_through_json() {
    let args = CommandArguments {
        extensions: vec![".ts".to_string(), ".html".to_string()],
        use_other_column: true,
    };
    let from_json = parse_args(&serde_json::to_value(&args).unwrap());
    let typed = Request::from_arguments(args);
    assert_eq!(from_json, typed);
    assert!(typed.warning.is_none());
}

#[test]
fn test_collect_candidates_exposes_full_cycle() {
    let temp = tempfile::tempdir().unwrap();
    touch(temp.path(), &["x.ts", "x.css", "x.html"]);

    let listing = RealFileSystem.list_dir(temp.path()).unwrap();
    let request = parse_args(&json!({ "extensions": [".html", ".css"] })).request;
    let candidates = collect_candidates(&temp.path().join("x.ts"), &request, &listing);
    assert_eq!(
        candidates.into_vec(),
        vec![temp.path().join("x.html"), temp.path().join("x.css")]
    );
}
