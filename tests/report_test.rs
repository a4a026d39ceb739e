use page_signals::{
    analyze, assemble, Error, Options, PageSnapshot, RenderType, StatusCode,
};

const ENGLISH_BODY: &str = "Hello world, this is a test page with more than fifty characters total here.";

fn english_page() -> String {
    format!(
        r#"<html lang="en"><head><title>Hello</title></head><body><p>{ENGLISH_BODY}</p></body></html>"#
    )
}

#[test]
fn english_server_rendered_page() {
    let report = analyze(&english_page(), "https://example.com/", StatusCode::Code(200))
        .expect("analysis failed");

    assert_eq!(report.render_type, RenderType::Ssr);
    assert_eq!(report.page_title.as_deref(), Some("Hello"));
    assert_eq!(report.content_language.as_deref(), Some("en"));
    assert_eq!(report.full_page_characters, 76);
    assert_eq!(report.full_page_words, 14);
    assert_eq!(report.main_content_characters, 76);
    assert_eq!(report.main_content_words, 14);
    assert!(report.json_ld_list.is_empty());
}

#[test]
fn empty_root_mount_is_client_rendered() {
    let html = r#"<html><head><title>My App</title></head><body><div id="root"></div></body></html>"#;
    let report = analyze(html, "https://app.example.com/", StatusCode::Code(200)).expect("analysis failed");

    assert_eq!(report.render_type, RenderType::Csr);
    assert_eq!(report.full_page_characters, 0);
    assert_eq!(report.full_page_words, 0);
    assert_eq!(report.main_content_words, 0);
}

#[test]
fn nested_json_ld_types_in_order() {
    let html = r#"<html><head>
        <script type="application/ld+json">{"@type":"Article","author":{"@type":"Person"}}</script>
        </head><body></body></html>"#;
    let report = analyze(html, "", StatusCode::NotAvailable).expect("analysis failed");

    assert_eq!(report.json_ld_list.len(), 1);
    assert_eq!(report.json_ld_list[0].types, vec!["Article", "Person"]);
}

#[test]
fn invalid_json_ld_is_a_finding() {
    let html = r#"<html><head>
        <script type="application/ld+json">not valid json</script>
        <script type="application/ld+json">{"name":"untyped"}</script>
        </head><body></body></html>"#;
    let report = analyze(html, "", StatusCode::NotAvailable).expect("analysis failed");

    assert_eq!(report.json_ld_list[0].raw, "not valid json");
    assert_eq!(report.json_ld_list[0].types, vec!["Invalid JSON"]);
    assert_eq!(report.json_ld_list[1].types, vec!["Unknown"]);
    assert!(report.json_ld_list.iter().all(|entry| !entry.types.is_empty()));
}

#[test]
fn hreflang_keeps_document_order() {
    let html = r#"<html><head>
        <link rel="alternate" hreflang="en" href="https://example.com/en">
        <link rel="alternate" hreflang="fr" href="https://example.com/fr">
        <link rel="alternate" hreflang="en" href="https://example.com/en">
        </head><body></body></html>"#;
    let report = analyze(html, "https://example.com/", StatusCode::NotAvailable).expect("analysis failed");

    assert_eq!(
        report.hreflang,
        vec![
            "en:https://example.com/en",
            "fr:https://example.com/fr",
            "en:https://example.com/en",
        ]
    );
}

#[test]
fn chinese_lang_counts_ideographs_as_words() {
    let html = r#"<html lang="zh-CN"><head><title>中文</title></head>
        <body><main><p>这是中文 page text</p></main></body></html>"#;
    let report = analyze(html, "", StatusCode::NotAvailable).expect("analysis failed");

    assert_eq!(report.full_page_characters, 14);
    assert_eq!(report.full_page_words, 4);
    assert_eq!(report.main_content_words, 4);
}

#[test]
fn chinese_text_ratio_without_lang() {
    // 8 ideographs out of 10 visible characters.
    let html = "<html><head><title>t</title></head><body><p>我们今天学习中文 ok</p></body></html>";
    let report = analyze(html, "", StatusCode::NotAvailable).expect("analysis failed");
    assert_eq!(report.full_page_words, 8);

    // 3 ideographs out of 10 visible characters: exactly 0.3 is not CJK.
    let html = "<html><body><p>中文字 abcdefg</p></body></html>";
    let report = analyze(html, "", StatusCode::NotAvailable).expect("analysis failed");
    assert_eq!(report.full_page_words, 2);
}

#[test]
fn content_language_meta_marks_chinese() {
    let html = r#"<html><head><meta http-equiv="content-language" content="zh-TW"></head>
        <body><p>繁體中文 and English words mixed here for the ratio</p></body></html>"#;
    let report = analyze(html, "", StatusCode::NotAvailable).expect("analysis failed");

    assert_eq!(report.content_language.as_deref(), Some("zh-TW"));
    assert_eq!(report.full_page_words, 4);
}

#[test]
fn main_content_never_exceeds_full_page() {
    let hidden = "hidden words ".repeat(20);
    let html = format!(
        r#"<html><head><title>t</title></head><body><div hidden><main>{hidden}</main></div><p>short visible</p></body></html>"#
    );
    let report = analyze(&html, "", StatusCode::NotAvailable).expect("analysis failed");

    assert_eq!(report.full_page_words, 2);
    assert_eq!(report.main_content_words, report.full_page_words);
    assert_eq!(report.main_content_characters, report.full_page_characters);
}

#[test]
fn main_content_excludes_boilerplate() {
    let html = r#"<html><head><title>t</title></head><body>
        <header>Site name and tagline</header>
        <nav>Home About Contact</nav>
        <div class="story"><p>One two three four.</p></div>
        <footer>Copyright notice</footer>
        </body></html>"#;
    let report = analyze(html, "", StatusCode::NotAvailable).expect("analysis failed");

    assert_eq!(report.main_content_words, 4);
    assert!(report.full_page_words > report.main_content_words);
}

#[test]
fn repeated_analysis_is_stable() {
    let html = r#"<html lang="en"><head><title>Stable</title>
        <meta name="description" content="d">
        <link rel="alternate" hreflang="de" href="/de">
        <script type="application/ld+json">{"@graph":[{"@type":"WebSite"},{"@type":"Organization"}]}</script>
        </head><body><main><p>Some words here.</p></main></body></html>"#;
    let snapshot = PageSnapshot::parse(html, "https://example.com/");
    let options = Options::default();

    let first = assemble("https://example.com/", StatusCode::Code(200), Some(&snapshot), &options)
        .expect("analysis failed");
    let second = assemble("https://example.com/", StatusCode::Code(200), Some(&snapshot), &options)
        .expect("analysis failed");

    assert_eq!(first.render_type, second.render_type);
    assert_eq!(first.seo_metas, second.seo_metas);
    assert_eq!(first.hreflang, second.hreflang);
    assert_eq!(first.json_ld_list, second.json_ld_list);
    assert_eq!(first.full_page_characters, second.full_page_characters);
}

#[test]
fn missing_snapshot_is_no_target_context() {
    let result = assemble("about:blank", StatusCode::NotAvailable, None, &Options::default());
    assert!(matches!(result, Err(Error::NoTargetContext)));
}

#[test]
fn frameset_page_still_reports() {
    let html = r#"<html><head><title>Frames</title><meta name="description" content="d"></head><frameset cols="50%,50%"><frame src="a.html"></frameset></html>"#;
    let report = analyze(html, "", StatusCode::Code(200)).expect("frameset page should report");

    assert_eq!(report.page_title.as_deref(), Some("Frames"));
    assert_eq!(report.seo_metas.general.get("description"), Some("d"));
    assert_eq!(report.render_type, RenderType::Csr);
    assert_eq!(report.full_page_characters, 0);
    assert_eq!(report.full_page_words, 0);
    assert!(report.main_content_characters <= report.full_page_characters);
    assert!(report.main_content_words <= report.full_page_words);
}

#[test]
fn status_code_is_reported_as_given() {
    let report = analyze(&english_page(), "", StatusCode::Code(503)).expect("analysis failed");
    assert_eq!(report.status_code, StatusCode::Code(503));

    let report = analyze(&english_page(), "", StatusCode::NotAvailable).expect("analysis failed");
    let json = report.to_json(false).expect("serialization failed");
    assert!(json.contains(r#""statusCode":"N/A""#));
}

#[test]
fn report_json_uses_interchange_names() {
    let report = analyze(&english_page(), "https://example.com/", StatusCode::Code(200))
        .expect("analysis failed");
    let value: serde_json::Value =
        serde_json::from_str(&report.to_json(true).expect("serialization failed")).expect("valid json");

    for key in [
        "url",
        "timestamp",
        "statusCode",
        "_meta",
        "renderType",
        "pageTitle",
        "canonical",
        "charset",
        "contentLanguage",
        "seoMetas",
        "hreflang",
        "fullPage_characters",
        "fullPage_words",
        "mainContent_characters",
        "mainContent_words",
        "jsonLdList",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["renderType"], "SSR");
    assert_eq!(value["statusCode"], 200);
    assert!(value["canonical"].is_null());
    assert!(value["seoMetas"]["openGraph"]["og:title"].is_null());

    assert_eq!(value["_meta"]["tool"], "page-signals");
    assert_eq!(value["_meta"]["version"], env!("CARGO_PKG_VERSION"));
    let keys: Vec<&str> = value
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(&keys[2..4], ["statusCode", "_meta"]);
}

#[test]
fn custom_mount_ids_are_honored() {
    let html = format!(
        r#"<html><head><title>Next</title></head><body><div id="__next"></div><p>{ENGLISH_BODY}</p></body></html>"#
    );
    let snapshot = PageSnapshot::parse(&html, "");

    let default_report = assemble("", StatusCode::NotAvailable, Some(&snapshot), &Options::default())
        .expect("analysis failed");
    assert_eq!(default_report.render_type, RenderType::Ssr);

    let options = Options {
        mount_element_ids: vec!["__next".to_string()],
        ..Options::default()
    };
    let custom_report =
        assemble("", StatusCode::NotAvailable, Some(&snapshot), &options).expect("analysis failed");
    assert_eq!(custom_report.render_type, RenderType::Csr);
}
