use anyhow::Result;
use bendec::translate;
use bendec::BufferedReporter;
use bendec::Expr;
use indoc::indoc;

fn run(src: &str) -> Result<Vec<Expr>> {
    let mut reporter = BufferedReporter::default();
    translate(src.as_bytes(), &mut reporter)
}

#[test]
fn test_translate_metainfo() {
    let src = indoc! {"
    d
      8:announce 18:http://example.com
      4:info
      d
        4:name 8:file.txt
        6:pieces i3e
      e
    e
    "};
    let expressions = run(src).unwrap();
    assert_eq!(expressions.len(), 1);
    let entries = expressions[0].as_dictionary().unwrap();
    assert_eq!(
        entries["announce"].as_text(),
        Some("http://example.com")
    );
    let info = entries["info"].as_dictionary().unwrap();
    assert_eq!(info["name"].as_text(), Some("file.txt"));
    assert_eq!(info["pieces"].as_integer(), Some(3));

    let printed = expressions[0].to_string();
    assert_eq!(
        printed,
        "{\"announce\": \"http://example.com\", \"info\": {\"name\": \"file.txt\", \"pieces\": 3}}"
    );
}

#[test]
fn test_translate_forest() {
    let src = indoc! {"
    i1e
    4:spam

    le
    "};
    let expressions = run(src).unwrap();
    assert_eq!(
        expressions,
        vec![
            Expr::Integer(1),
            Expr::Text("spam".to_string()),
            Expr::List(vec![]),
        ]
    );
}

#[test]
fn test_success_reports_nothing() {
    let mut reporter = BufferedReporter::default();
    translate("i1e".as_bytes(), &mut reporter).unwrap();
    assert!(reporter.messages.is_empty());
}

#[test]
fn test_scan_failure_reported_once() {
    let mut reporter = BufferedReporter::default();
    let err = translate("i1x".as_bytes(), &mut reporter).unwrap_err();
    assert_eq!(reporter.messages.len(), 1);
    assert_eq!(reporter.messages[0], err.to_string());
}

#[test]
fn test_parse_failure_reported_once() {
    let mut reporter = BufferedReporter::default();
    let err = translate("l4:spam".as_bytes(), &mut reporter).unwrap_err();
    assert_eq!(reporter.messages.len(), 1);
    assert_eq!(reporter.messages[0], err.to_string());
    assert!(err.to_string().starts_with("Unterminated list"));
}

#[test]
fn test_failure_is_deterministic() {
    let first = run("d3:foo4:eggs3:bar4:spame").unwrap_err().to_string();
    let second = run("d3:foo4:eggs3:bar4:spame").unwrap_err().to_string();
    assert_eq!(first, second);

    let first = run("10:spam").unwrap_err().to_string();
    let second = run("10:spam").unwrap_err().to_string();
    assert_eq!(first, second);
}
