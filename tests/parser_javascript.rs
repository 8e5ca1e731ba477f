use codemap::parsers::javascript::JavaScriptParser;
use codemap::parsers::{DeclarationKind, LanguageParser};
use std::collections::BTreeSet;
use std::fs;

#[test]
fn javascript_parser_extracts_functions_variables_and_methods() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("app.jsx");
    let code = r#"
const React = require('react');

function App() {
  const data = useData();
  return <div onClick={() => handle(data)}>{render()}</div>;
}

var legacy = function named() { App(); };
function* gen() { yield step(); }
const obj = { method() { inObject(); } };

class Widget {
  render() { return App(); }
}

module.exports = { App };
"#;
    fs::write(&file, code).unwrap();

    let parser = JavaScriptParser::new();
    let result = parser.parse_file(&file).unwrap();

    let names: Vec<&str> = result
        .declarations
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, vec!["App", "gen", "legacy", "Widget.render"]);

    let app = &result.declarations[0];
    assert_eq!(app.kind, DeclarationKind::Function);
    let expected: BTreeSet<String> = ["handle", "render", "useData"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(app.calls, expected);

    let legacy = &result.declarations[2];
    assert_eq!(legacy.kind, DeclarationKind::Variable);
    assert!(legacy.calls.contains("App"));

    assert!(result.declarations[1].calls.contains("step"));
    assert!(result.declarations[3].calls.contains("App"));
    assert!(!names.contains(&"method"));
    assert!(!names.contains(&"React"));
}

#[test]
fn javascript_parser_tolerates_syntax_errors() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("broken.js");
    fs::write(&file, "function ok() { fine(); }\nfunction broken( {\n").unwrap();

    let result = JavaScriptParser::new().parse_file(&file).unwrap();
    assert!(result.declarations.iter().any(|d| d.name == "ok"));
}

#[test]
fn javascript_parser_counts_member_decorator_calls() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("service.js");
    fs::write(
        &file,
        "class Service {\n  @log()\n  run() { work(); }\n  plain() {}\n}\n",
    )
    .unwrap();

    let result = JavaScriptParser::new().parse_file(&file).unwrap();
    let run = result
        .declarations
        .iter()
        .find(|d| d.name == "Service.run")
        .unwrap();
    let expected: BTreeSet<String> = ["log", "work"].iter().map(|s| s.to_string()).collect();
    assert_eq!(run.calls, expected);

    let plain = result
        .declarations
        .iter()
        .find(|d| d.name == "Service.plain")
        .unwrap();
    assert!(plain.calls.is_empty());
}
