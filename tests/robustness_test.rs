use page_signals::{analyze, Error, PageReport, StatusCode};

fn run(html: &str) -> PageReport {
    match analyze(html, "https://example.com/", StatusCode::NotAvailable) {
        Ok(report) => report,
        Err(err) => panic!("expected a report, got Err({err:?})"),
    }
}

fn assert_invariants(report: &PageReport) {
    assert!(report.main_content_characters <= report.full_page_characters);
    assert!(report.main_content_words <= report.full_page_words);
    assert!(report.json_ld_list.iter().all(|entry| !entry.types.is_empty()));
}

#[test]
fn malformed_html_unclosed_tags() {
    let report = run("<p>text<div>more");
    assert_eq!(report.full_page_words, 2);
    assert_invariants(&report);
}

#[test]
fn malformed_html_invalid_nesting() {
    assert_invariants(&run("<p><div></p></div>"));
}

#[test]
fn malformed_html_broken_attributes() {
    assert_invariants(&run("<div class=\"test id=broken>"));
}

#[test]
fn empty_input_yields_empty_report() {
    let report = run("");
    assert_eq!(report.page_title, None);
    assert_eq!(report.full_page_characters, 0);
    assert_eq!(report.main_content_characters, 0);
    assert!(report.hreflang.is_empty());
}

#[test]
fn deeply_nested_markup_does_not_overflow() {
    let depth = 5_000;
    let html = format!("{}deep{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let report = run(&html);
    assert_eq!(report.full_page_words, 1);
    assert_invariants(&report);
}

#[test]
fn hostile_json_ld_is_reported_not_fatal() {
    let nested = format!("{}{}", "[".repeat(500), "]".repeat(500));
    let html = format!(
        r#"<script type="application/ld+json">{nested}</script>
           <script type="application/ld+json">{{"@type": 42}}</script>
           <script type="application/ld+json"></script>"#
    );
    let report = run(&html);

    // serde_json rejects nesting past its recursion limit.
    assert_eq!(report.json_ld_list.len(), 2);
    assert_eq!(report.json_ld_list[0].types, vec!["Invalid JSON"]);
    assert_eq!(report.json_ld_list[1].types, vec!["Unknown"]);
}

#[test]
fn invalid_custom_selectors_are_skipped() {
    use page_signals::{assemble, Options, PageSnapshot};

    let snapshot = PageSnapshot::parse("<body><nav>menu</nav><p>kept text</p></body>", "");
    let options = Options {
        main_content_selectors: vec!["::bogus(".to_string(), "#nope".to_string()],
        boilerplate_selectors: vec!["[[".to_string(), "nav".to_string()],
        ..Options::default()
    };

    let report = assemble("", StatusCode::NotAvailable, Some(&snapshot), &options).expect("analysis failed");
    assert_eq!(report.main_content_words, 2);
    assert_eq!(report.full_page_words, 3);
}

#[test]
fn no_target_is_the_only_error_without_a_page() {
    use page_signals::{assemble, Options};

    let err = assemble("", StatusCode::NotAvailable, None, &Options::default()).expect_err("should fail");
    assert!(matches!(err, Error::NoTargetContext));
    assert_eq!(err.to_string(), "no target page to analyze");
}
