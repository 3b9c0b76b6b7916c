use symcalc_attrs::ErrorKind;
use symcalc_error::{Error, ErrorKind};

#[derive(Debug, ErrorKind)]
#[error(
    message = "cannot divide by zero",
    labels = ["this expression", "evaluates to zero"],
    help = "make sure the divisor is not zero",
)]
struct DivideByZero;

#[derive(Debug, ErrorKind)]
#[error(
    message = format!("`{}` is not a valid name", name),
    labels = [format!("found `{}`", name)],
)]
struct BadName {
    name: String,
}

/// Renders the report for the given error without color codes.
fn render(err: &Error, input: &str) -> String {
    let mut buf = Vec::new();
    err.write_report("input", input, &mut buf).unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn report_contains_message_labels_and_help() {
    let input = "1 / (2 - 2)";
    let err = Error::new(vec![0..11, 4..11], DivideByZero);
    let report = render(&err, input);

    assert!(report.contains("cannot divide by zero"));
    assert!(report.contains("this expression"));
    assert!(report.contains("evaluates to zero"));
    assert!(report.contains("make sure the divisor is not zero"));
}

#[test]
fn report_uses_struct_fields() {
    let input = "2 + $";
    let err = Error::new(vec![4..5], BadName { name: "$".to_string() });
    let report = render(&err, input);

    assert!(report.contains("`$` is not a valid name"));
    assert!(report.contains("found `$`"));
}

#[test]
fn extra_labels_without_spans_are_dropped() {
    let input = "0";
    let err = Error::new(vec![0..1], DivideByZero);
    let report = render(&err, input);

    assert!(report.contains("this expression"));
    assert!(!report.contains("evaluates to zero"));
}

#[test]
fn downcast_kind() {
    let err = Error::new(vec![], DivideByZero);
    assert!(err.is::<DivideByZero>());
    assert!(!err.is::<BadName>());
    assert_eq!(err.spans, vec![0..0]);
}
