//! Tests for the turtle processor API

use rstest::rstest;
use std::fs;
use turtle::turtle::config::{load_defaults, OutputConfig};
use turtle::turtle::processor::{
    process_file, process_source, OutputFormat, ProcessingError, ProcessingSpec, ProcessingStage,
};

const SQUARE: &str = "pendown\nrepeat 4 {\n  move 50\n  rotate 90\n}\npenup\n";

#[test]
fn test_available_specs() {
    let specs = ProcessingSpec::available_specs();
    assert_eq!(specs.len(), 5);

    let ast_treeviz = specs
        .iter()
        .find(|s| s.stage == ProcessingStage::Ast && s.format == OutputFormat::Treeviz);
    assert!(ast_treeviz.is_some());
}

#[rstest]
#[case("token-simple")]
#[case("token-json")]
#[case("ast-tag")]
#[case("ast-treeviz")]
#[case("ast-json")]
fn test_every_format_processes_a_square(#[case] format: &str) {
    let spec = ProcessingSpec::from_string(format).unwrap();
    let output = process_source(SQUARE, &spec, &OutputConfig::default()).unwrap();
    assert!(!output.is_empty(), "{} produced no output", format);
    assert_eq!(spec.name(), format);
}

#[test]
fn test_square_treeviz() {
    let spec = ProcessingSpec::from_string("ast-treeviz").unwrap();
    let output = process_source(SQUARE, &spec, &OutputConfig::default()).unwrap();
    let expected = "\
├─ PenDown: pendown
├─ Repeat
│ ├─ Number: 4
│ ├─ Move
│ │ └─ Number: 50
│ └─ Rotate
│   └─ Number: 90
└─ PenUp: penup
";
    assert_eq!(output, expected);
}

#[test]
fn test_configured_indent_is_used() {
    let spec = ProcessingSpec::from_string("ast-tag").unwrap();
    let config = OutputConfig {
        indent: "    ".to_string(),
        ..OutputConfig::default()
    };
    let output = process_source("move 1", &spec, &config).unwrap();
    assert_eq!(
        output,
        "<program>\n    <move>\n        <number>1</number>\n    </move>\n</program>\n"
    );
}

#[test]
fn test_configured_label_width_is_used() {
    let spec = ProcessingSpec::from_string("ast-treeviz").unwrap();
    let config = OutputConfig {
        label_width: 3,
        ..OutputConfig::default()
    };
    let output = process_source("function abcdef() { }", &spec, &config).unwrap();
    assert!(output.contains("Identifier: abc...\n"));
}

#[test]
fn test_process_file() {
    let path = std::env::temp_dir().join(format!("turtle-square-{}.turtle", std::process::id()));
    fs::write(&path, SQUARE).unwrap();

    let spec = ProcessingSpec::from_string("ast-json").unwrap();
    let output = process_file(&path, &spec, &load_defaults().unwrap().output).unwrap();
    fs::remove_file(&path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["children"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_unclosed_block_is_reported() {
    let spec = ProcessingSpec::from_string("ast-tag").unwrap();
    let error = process_source("repeat 4 { move 10", &spec, &OutputConfig::default()).unwrap_err();
    assert!(matches!(error, ProcessingError::Failed { .. }));
    assert_eq!(
        error.to_string(),
        "error: expected CloseBrace, got End at 1:19"
    );
}
