use codemap::core::scanner::FileScanner;
use std::fs;
use std::path::Path;

fn touch<P: AsRef<Path>>(p: P) {
    fs::write(p, "// test").unwrap();
}

#[test]
fn scanner_filters_by_extension_and_maps_languages() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b")).unwrap();

    touch(root.join("a/lib.ts"));
    touch(root.join("a/view.vue"));
    touch(root.join("b/app.js"));
    touch(root.join("b/widget.jsx"));
    touch(root.join("b/page.tsx")); // not requested
    touch(root.join("b/readme.txt")); // ignored

    let scanner = FileScanner::new();
    let files = scanner
        .scan_directory(root, &["ts", "vue", "jsx", "js"])
        .unwrap();

    let mut langs: Vec<_> = files.iter().map(|f| f.language.as_str()).collect();
    langs.sort();
    assert_eq!(langs, vec!["javascript", "javascript", "typescript", "vue"]);
    assert!(!files.iter().any(|f| f.path.ends_with("page.tsx")));
}

#[test]
fn scanner_order_is_deterministic() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("z")).unwrap();
    touch(root.join("b.ts"));
    touch(root.join("a.ts"));
    touch(root.join("z/c.ts"));

    let files = FileScanner::new().scan_directory(root, &["ts"]).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|f| {
            f.path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    assert_eq!(names, vec!["a.ts", "b.ts", "z/c.ts"]);
}

#[test]
fn scanner_returns_nothing_for_missing_root() {
    let dir = tempfile::TempDir::new().unwrap();
    let files = FileScanner::new()
        .scan_directory(&dir.path().join("src"), &["ts"])
        .unwrap();
    assert!(files.is_empty());
}
