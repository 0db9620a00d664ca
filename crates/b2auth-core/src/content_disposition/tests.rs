use super::*;

#[test]
fn parse_quoted_filename() {
    let cd = ContentDisposition::parse("attachment; filename=\"report.pdf\"").unwrap();
    assert!(cd.is_attachment());
    assert_eq!(cd.filename().as_deref(), Some("report.pdf"));
}

#[test]
fn parse_token_filename() {
    let cd = ContentDisposition::parse("attachment; filename=report.pdf").unwrap();
    assert_eq!(cd.filename().as_deref(), Some("report.pdf"));
}

#[test]
fn parse_filename_star_utf8() {
    let cd = ContentDisposition::parse("attachment; filename*=UTF-8''caf%C3%A9.txt").unwrap();
    assert_eq!(cd.filename().as_deref(), Some("café.txt"));
}

#[test]
fn parse_filename_star_precedence() {
    let cd = ContentDisposition::parse(
        "attachment; filename=\"fallback.bin\"; filename*=UTF-8''real%20name.dat",
    )
    .unwrap();
    assert_eq!(cd.filename().as_deref(), Some("real name.dat"));
}

#[test]
fn type_only_and_case_insensitive_queries() {
    let cd = ContentDisposition::parse("  INLINE ").unwrap();
    assert!(cd.is_inline());
    assert_eq!(cd.disposition_type(), "INLINE");
    assert!(cd.parameters().is_empty());

    let cd = ContentDisposition::parse("inline; FileName=a.txt").unwrap();
    assert_eq!(cd.parameter("filename"), Some("a.txt"));
}

#[test]
fn trailing_semicolon_tolerated() {
    let cd = ContentDisposition::parse("attachment;").unwrap();
    assert_eq!(cd.to_string(), "attachment");
}

#[test]
fn malformed_values_rejected() {
    for raw in [
        "",
        "   ",
        "; filename=a",
        "attachment filename=a",
        "attachment; filename",
        "attachment; filename=",
        "attachment; filename=\"unterminated",
        "attachment; filename=\"a\"b",
        "attachment; =a",
        "attach ment",
    ] {
        let err = ContentDisposition::parse(raw).unwrap_err();
        assert!(matches!(err, AuthError::Parse { .. }), "{raw:?}: {err}");
    }
}

#[test]
fn canonical_form_quotes_only_when_needed() {
    let cd = ContentDisposition::attachment()
        .with_filename("report.pdf")
        .unwrap();
    assert_eq!(cd.to_string(), "attachment; filename=report.pdf");

    let cd = ContentDisposition::attachment()
        .with_filename("annual report \"final\".pdf")
        .unwrap();
    assert_eq!(
        cd.to_string(),
        r#"attachment; filename="annual report \"final\".pdf""#
    );
}

#[test]
fn string_form_round_trips() {
    let values = [
        ContentDisposition::inline(),
        ContentDisposition::attachment().with_filename("").unwrap(),
        ContentDisposition::attachment()
            .with_filename("a;b \\ \"c\".txt")
            .unwrap(),
        ContentDisposition::new("x-custom")
            .unwrap()
            .with_parameter("size", "1024")
            .unwrap()
            .with_filename("resume\tv2.pdf")
            .unwrap(),
    ];
    for v in values {
        let raw = v.to_string();
        let reparsed = ContentDisposition::parse(&raw).unwrap();
        assert_eq!(reparsed, v, "{raw}");
        assert_eq!(reparsed.to_string(), raw);
    }
}

#[test]
fn constructors_reject_unserializable_input() {
    assert!(ContentDisposition::new("").is_err());
    assert!(ContentDisposition::new("in line").is_err());
    assert!(ContentDisposition::inline().with_parameter("file name", "a").is_err());
    assert!(ContentDisposition::inline().with_filename("a\nb").is_err());
    assert!(ContentDisposition::inline().with_filename("a\u{7f}b").is_err());
}

#[test]
fn built_values_are_ascii_only() {
    let err = ContentDisposition::attachment()
        .with_filename("résumé.pdf")
        .unwrap_err();
    assert!(matches!(err, AuthError::Parse { .. }), "{err}");

    let cd = ContentDisposition::attachment()
        .with_filename("resume ~[v2]~.pdf")
        .unwrap();
    let raw = cd.to_string();
    assert!(raw.is_ascii(), "{raw}");
    assert_eq!(raw, "attachment; filename=\"resume ~[v2]~.pdf\"");
}

#[test]
fn parameter_continuations_detected() {
    let plain = ContentDisposition::parse("attachment; filename=a.txt").unwrap();
    assert!(!plain.has_parameter_continuations());
    assert!(plain.reject_parameter_continuations().is_ok());

    let ext = ContentDisposition::parse("attachment; filename*=UTF-8''a.txt").unwrap();
    assert!(ext.has_parameter_continuations());
    match ext.reject_parameter_continuations() {
        Err(AuthError::ParameterContinuation(name)) => assert_eq!(name, "filename*"),
        other => panic!("expected ParameterContinuation, got {other:?}"),
    }
}

#[test]
fn from_str_matches_parse() {
    let cd: ContentDisposition = "inline; filename=x".parse().unwrap();
    assert_eq!(cd, ContentDisposition::parse("inline; filename=x").unwrap());
}
