//! End-to-end driver runs over on-disk workspaces: every directive of
//! every (project, source set) variant resolved and declared.


use jpms_deps::testing::{RecordingDeclarationSink, RecordingWarningSink};
use jpms_deps::Resolution;
use test_utils::WorkspaceFixture;

#[test]
fn full_workspace_declares_all_edge_kinds() {
    let fixture = WorkspaceFixture::new();
    fixture.add_descriptor(
        "app",
        "main",
        r#"
        module org.example.app {
            requires java.sql;
            requires org.example.core;
            requires transitive org.example.core.events;
            requires static com.fasterxml.jackson.databind;
        }
        "#,
    );
    fixture.add_descriptor("core", "main", "module org.example.core { }");
    let workspace = fixture.load(
        r#"
        [[project]]
        name = "app"
        group = "org.example"

        [[project]]
        name = "core"
        group = "org.example"
        "#,
    );

    let mut sink = RecordingDeclarationSink::new();
    let mut warnings = RecordingWarningSink::new();
    let summary = workspace.declare_all(&mut sink, &mut warnings).unwrap();

    assert_eq!(summary.platform, 1);
    assert_eq!(summary.declared, 3);
    assert_eq!(summary.unresolved, 0);

    // sibling project, plain requires
    let core = sink.for_module("org.example.core").unwrap();
    assert_eq!(core.scope, "implementation");
    assert_eq!(
        core.resolution,
        Resolution::Project {
            path: ":core".to_string(),
            name: "core".to_string(),
        }
    );

    // capability on the owning project, requires transitive
    let events = sink.for_module("org.example.core.events").unwrap();
    assert_eq!(events.scope, "api");
    assert_eq!(
        events.resolution,
        Resolution::ProjectWithCapability {
            path: ":core".to_string(),
            name: "core".to_string(),
            capability: "org.example:events".to_string(),
        }
    );

    // built-in mapping, requires static
    let jackson = sink.for_module("com.fasterxml.jackson.databind").unwrap();
    assert_eq!(jackson.scope, "compileOnly");
    match &jackson.resolution {
        Resolution::External(coordinates) => {
            assert_eq!(coordinates.ga(), "com.fasterxml.jackson.core:jackson-databind");
        }
        other => panic!("expected External, got {other:?}"),
    }
}

#[test]
fn directive_kinds_map_to_their_scopes() {
    let fixture = WorkspaceFixture::new();
    fixture.add_descriptor(
        "app",
        "main",
        r#"
        module org.x.app {
            requires org.x.a;
            requires static org.x.b;
            requires transitive org.x.c;
            requires static transitive org.x.d;
            requires /*runtime*/ org.x.e;
        }
        "#,
    );
    fixture.add_descriptor("a", "main", "module org.x.a { }");
    fixture.add_descriptor("b", "main", "module org.x.b { }");
    fixture.add_descriptor("c", "main", "module org.x.c { }");
    fixture.add_descriptor("d", "main", "module org.x.d { }");
    fixture.add_descriptor("e", "main", "module org.x.e { }");
    let workspace = fixture.load(
        r#"
        [[project]]
        name = "app"
        group = "org.x"
        [[project]]
        name = "a"
        group = "org.x"
        [[project]]
        name = "b"
        group = "org.x"
        [[project]]
        name = "c"
        group = "org.x"
        [[project]]
        name = "d"
        group = "org.x"
        [[project]]
        name = "e"
        group = "org.x"
        "#,
    );

    let mut sink = RecordingDeclarationSink::new();
    let mut warnings = RecordingWarningSink::new();
    workspace.declare_all(&mut sink, &mut warnings).unwrap();

    assert_eq!(sink.for_module("org.x.a").unwrap().scope, "implementation");
    assert_eq!(sink.for_module("org.x.b").unwrap().scope, "compileOnly");
    assert_eq!(sink.for_module("org.x.c").unwrap().scope, "api");
    assert_eq!(sink.for_module("org.x.d").unwrap().scope, "compileOnlyApi");
    assert_eq!(sink.for_module("org.x.e").unwrap().scope, "runtimeOnly");
}

#[test]
fn parent_path_prefixes_project_paths() {
    let fixture = WorkspaceFixture::new();
    fixture.add_descriptor("app", "main", "module org.x.app { requires org.x.core; }");
    fixture.add_descriptor("core", "main", "module org.x.core { }");
    let workspace = fixture.load(
        r#"
        [settings]
        parent_path = ":server"

        [[project]]
        name = "app"
        group = "org.x"

        [[project]]
        name = "core"
        group = "org.x"
        "#,
    );

    let mut sink = RecordingDeclarationSink::new();
    let mut warnings = RecordingWarningSink::new();
    workspace.declare_all(&mut sink, &mut warnings).unwrap();

    assert_eq!(
        sink.for_module("org.x.core").unwrap().resolution,
        Resolution::Project {
            path: ":server:core".to_string(),
            name: "core".to_string(),
        }
    );
}

#[test]
fn secondary_source_set_resolves_against_its_own_prefix() {
    let fixture = WorkspaceFixture::new();
    fixture.add_descriptor("core", "main", "module org.x.core { }");
    fixture.add_descriptor(
        "core",
        "test-fixtures",
        "module org.x.core.test.fixtures { requires org.x.core; }",
    );
    let workspace = fixture.load(
        r#"
        [[project]]
        name = "core"
        group = "org.x"
        source_sets = [{ name = "main" }, { name = "test-fixtures" }]
        "#,
    );

    let mut sink = RecordingDeclarationSink::new();
    let mut warnings = RecordingWarningSink::new();
    let summary = workspace.declare_all(&mut sink, &mut warnings).unwrap();

    assert_eq!(summary.declared, 1);
    assert_eq!(
        sink.for_module("org.x.core").unwrap().resolution,
        Resolution::Project {
            path: ":core".to_string(),
            name: "core".to_string(),
        }
    );
}

#[test]
fn explicit_module_info_path_overrides_convention() {
    let fixture = WorkspaceFixture::new();
    let custom = fixture.root().join("app").join("module-descriptors");
    std::fs::create_dir_all(&custom).unwrap();
    std::fs::write(
        custom.join("module-info.java"),
        "module org.x.app { requires java.sql; }",
    )
    .unwrap();
    let workspace = fixture.load(
        r#"
        [[project]]
        name = "app"
        group = "org.x"
        source_sets = [{ name = "main", module_info = "app/module-descriptors/module-info.java" }]
        "#,
    );

    let mut sink = RecordingDeclarationSink::new();
    let mut warnings = RecordingWarningSink::new();
    let summary = workspace.declare_all(&mut sink, &mut warnings).unwrap();

    assert_eq!(summary.platform, 1);
}

#[test]
fn analyse_only_declares_nothing() {
    let fixture = WorkspaceFixture::new();
    fixture.add_descriptor("app", "main", "module org.x.app { requires java.sql; }");
    let workspace = fixture.load(
        r#"
        [settings]
        analyse_only = true

        [[project]]
        name = "app"
        group = "org.x"
        "#,
    );

    let mut sink = RecordingDeclarationSink::new();
    let mut warnings = RecordingWarningSink::new();
    let summary = workspace.declare_all(&mut sink, &mut warnings).unwrap();

    assert_eq!(summary.declared, 0);
    assert_eq!(summary.platform, 0);
    assert!(sink.edges.is_empty());
    assert!(warnings.warnings.is_empty());
}

#[test]
fn missing_descriptor_contributes_no_directives() {
    let fixture = WorkspaceFixture::new();
    fixture.add_descriptor("app", "main", "module org.x.app { requires org.x.core; }");
    // "core" is declared in the manifest but has no descriptor on disk
    let workspace = fixture.load(
        r#"
        [[project]]
        name = "app"
        group = "org.x"

        [[project]]
        name = "core"
        group = "org.x"
        "#,
    );

    let mut sink = RecordingDeclarationSink::new();
    let mut warnings = RecordingWarningSink::new();
    let summary = workspace.declare_all(&mut sink, &mut warnings).unwrap();

    // core still resolves as a project target even without a descriptor
    assert_eq!(summary.declared, 1);
    assert_eq!(summary.unresolved, 0);
}

#[test]
fn manifest_mappings_extend_built_in_defaults() {
    let fixture = WorkspaceFixture::new();
    fixture.add_descriptor(
        "app",
        "main",
        r#"
        module org.x.app {
            requires org.inhouse.commons;
            requires org.slf4j;
        }
        "#,
    );
    let workspace = fixture.load(
        r#"
        [[project]]
        name = "app"
        group = "org.x"

        [mappings]
        "org.inhouse.commons" = "org.inhouse:commons:2.4"
        "#,
    );

    let mut sink = RecordingDeclarationSink::new();
    let mut warnings = RecordingWarningSink::new();
    let summary = workspace.declare_all(&mut sink, &mut warnings).unwrap();

    assert_eq!(summary.declared, 2);
    match &sink.for_module("org.inhouse.commons").unwrap().resolution {
        Resolution::External(coordinates) => {
            assert_eq!(coordinates.group, "org.inhouse");
            assert_eq!(coordinates.version.as_deref(), Some("2.4"));
        }
        other => panic!("expected External, got {other:?}"),
    }
    // the built-in table still serves untouched entries
    match &sink.for_module("org.slf4j").unwrap().resolution {
        Resolution::External(coordinates) => {
            assert_eq!(coordinates.ga(), "org.slf4j:slf4j-api");
        }
        other => panic!("expected External, got {other:?}"),
    }
}

#[test]
fn ambiguous_exact_match_fails_the_run() {
    let fixture = WorkspaceFixture::new();
    // "foo-bar" and "foo.bar" both present as dot form "foo.bar";
    // the requester is a root module so the full name is the suffix
    fixture.add_descriptor("app", "main", "module app { requires foo.bar; }");
    let workspace = fixture.load(
        r#"
        [[project]]
        name = "app"
        group = "org.x"

        [[project]]
        name = "foo-bar"
        group = "org.x"

        [[project]]
        name = "foo.bar"
        group = "org.x"
        "#,
    );

    let mut sink = RecordingDeclarationSink::new();
    let mut warnings = RecordingWarningSink::new();
    let err = workspace.declare_all(&mut sink, &mut warnings).unwrap_err();
    assert!(err.to_string().contains("foo.bar"));
}
