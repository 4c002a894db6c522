/*!
Integration tests for CommonJS module resolution
*/

use jsdoc_bridge::{BaseKind, CandidateBase, ModuleResolver, ResolveError};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, text: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, text).unwrap();
    path
}

fn privileged(dir: &Path) -> CandidateBase {
    CandidateBase::from_path(dir, BaseKind::Privileged).unwrap()
}

fn fallback(dir: &Path) -> CandidateBase {
    CandidateBase::from_path(dir, BaseKind::Fallback).unwrap()
}

#[test]
fn test_privileged_bases_win() {
    let sys = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    let system_file = write(sys.path(), "util.js", "// system");
    write(user.path(), "util.js", "// user");

    let resolver = ModuleResolver::new(vec![privileged(sys.path())], vec![fallback(user.path())])
        .with_context_dir(user.path());
    let module = resolver.resolve("util").unwrap();
    assert_eq!(module.path, system_file);
    assert_eq!(module.base_kind, BaseKind::Privileged);
    assert_eq!(module.id, "util");
}

#[test]
fn test_bases_tried_in_order() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let expected = write(second.path(), "only-here.js", "");

    let resolver = ModuleResolver::new(Vec::new(), Vec::new())
        .with_context_dir(first.path());
    let bases = [fallback(first.path()), fallback(second.path())];
    let module = resolver.resolve_in("./only-here", &bases).unwrap();
    assert_eq!(module.path, expected);
    assert_eq!(module.base.to_file_path().unwrap(), second.path());
}

#[test]
fn test_package_main_and_index() {
    let root = TempDir::new().unwrap();
    write(root.path(), "with-main/package.json", r#"{"name": "x", "main": "./src/entry"}"#);
    let entry = write(root.path(), "with-main/src/entry.js", "");
    let index = write(root.path(), "plain/index.js", "");

    let resolver = ModuleResolver::new(vec![privileged(root.path())], Vec::new())
        .with_context_dir(root.path());
    assert_eq!(resolver.resolve("with-main").unwrap().path, entry);
    assert_eq!(resolver.resolve("plain").unwrap().path, index);
}

#[test]
fn test_broken_package_json_is_swallowed() {
    let root = TempDir::new().unwrap();
    write(root.path(), "pkg/package.json", "{ not json");
    let other = TempDir::new().unwrap();
    let found = write(other.path(), "pkg.js", "");

    let resolver = ModuleResolver::new(vec![privileged(root.path())], vec![fallback(other.path())])
        .with_context_dir(other.path());
    let module = resolver.resolve("pkg").unwrap();
    assert_eq!(module.path, found);
    assert_eq!(module.base_kind, BaseKind::Fallback);
}

#[test]
fn test_node_modules_two_levels_up() {
    let root = TempDir::new().unwrap();
    let dep = write(root.path(), "node_modules/dep/index.js", "module.exports = {};");
    let base = root.path().join("app");
    let context = root.path().join("app/src");
    fs::create_dir_all(&context).unwrap();

    let resolver = ModuleResolver::new(vec![privileged(&base)], Vec::new()).with_context_dir(&context);
    assert_eq!(resolver.resolve("dep").unwrap().path, dep);
}

#[test]
fn test_exact_non_js_file() {
    let root = TempDir::new().unwrap();
    let template = write(root.path(), "views/page.tmpl", "<p/>");

    let resolver = ModuleResolver::new(vec![privileged(root.path())], Vec::new())
        .with_context_dir(root.path());
    assert_eq!(resolver.resolve("views/page.tmpl").unwrap().path, template);
}

#[test]
fn test_json_module() {
    let root = TempDir::new().unwrap();
    let data = write(root.path(), "data.json", "{}");

    let resolver = ModuleResolver::new(vec![privileged(root.path())], Vec::new())
        .with_context_dir(root.path());
    assert_eq!(resolver.resolve("./data.json").unwrap().path, data);
}

#[test]
fn test_not_found_and_load() {
    let root = TempDir::new().unwrap();
    write(root.path(), "lib/text.js", "\u{FEFF}exports.x = 1;");

    let resolver = ModuleResolver::new(vec![privileged(root.path())], Vec::new())
        .with_context_dir(root.path());
    assert_eq!(resolver.resolve("nope"), None);
    assert!(matches!(resolver.load("nope"), Err(ResolveError::NotFound(_))));

    let source = resolver.load("lib/text").unwrap();
    assert_eq!(source.text, "exports.x = 1;");
    assert_eq!(source.module.path, root.path().join("lib/text.js"));
}

#[test]
fn test_uri_base() {
    let root = TempDir::new().unwrap();
    let file = write(root.path(), "remote-ish/mod.js", "");
    let uri = url::Url::from_directory_path(root.path().join("remote-ish")).unwrap();

    let base = CandidateBase::parse(uri.as_str(), BaseKind::Fallback).unwrap();
    let resolver = ModuleResolver::new(Vec::new(), vec![base]).with_context_dir(root.path());
    assert_eq!(resolver.resolve("mod").unwrap().path, file);
}

#[test]
fn test_package_fixture_tree() {
    let root = TempDir::new().unwrap();
    let foo = write(root.path(), "foo.js", "");
    write(root.path(), "bar/package.json", r#"{"main": "./bar.js"}"#);
    let bar = write(root.path(), "bar/bar.js", "");
    let baz = write(root.path(), "baz/index.js", "");

    let resolver = ModuleResolver::new(vec![privileged(root.path())], Vec::new())
        .with_context_dir(root.path());
    assert_eq!(resolver.resolve("foo").unwrap().path, foo);
    assert_eq!(resolver.resolve("bar").unwrap().path, bar);
    assert_eq!(resolver.resolve("baz").unwrap().path, baz);
    assert_eq!(resolver.resolve("missing"), None);
    assert_eq!(resolver.resolve("./foo.js").unwrap().path, foo);
}

#[test]
fn test_missing_main_target_is_not_found() {
    let root = TempDir::new().unwrap();
    write(root.path(), "pkg/package.json", r#"{"main": "gone.js"}"#);
    write(root.path(), "pkg/index.js", "");

    let resolver = ModuleResolver::new(vec![privileged(root.path())], Vec::new())
        .with_context_dir(root.path());
    assert_eq!(resolver.resolve("pkg"), None);
}

#[test]
fn test_no_node_modules_on_any_ancestor() {
    let root = TempDir::new().unwrap();
    let base = root.path().join("app");
    let context = root.path().join("app/src/deep");
    fs::create_dir_all(&context).unwrap();

    let resolver = ModuleResolver::new(vec![privileged(&base)], Vec::new()).with_context_dir(&context);
    assert_eq!(resolver.resolve("jsdoc-bridge-absent-dependency"), None);

    // the same tree resolves once a node_modules directory appears above the context
    let dep = write(
        root.path(),
        "node_modules/jsdoc-bridge-absent-dependency/index.js",
        "",
    );
    assert_eq!(
        resolver.resolve("jsdoc-bridge-absent-dependency").unwrap().path,
        dep
    );
}
