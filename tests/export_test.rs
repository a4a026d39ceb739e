use page_signals::export::{default_file_stem, json_ld_exports, to_csv};
use page_signals::{analyze, StatusCode};

const PAGE: &str = r#"<html lang="en"><head>
    <title>Recipe, with a comma</title>
    <meta name="description" content="Short description">
    <link rel="alternate" hreflang="en" href="https://example.com/en">
    <link rel="alternate" hreflang="es" href="https://example.com/es">
    <script type="application/ld+json">{"@context":"https://schema.org","@type":"Recipe","author":{"@type":"Person","name":"Ann"}}</script>
    <script type="application/ld+json">{oops</script>
</head><body><main><p>Mix and bake.</p></main></body></html>"#;

#[test]
fn csv_has_one_header_and_one_value_line() {
    let report = analyze(PAGE, "https://example.com/recipe", StatusCode::Code(200)).expect("analysis failed");
    let csv = to_csv(&report).expect("csv failed");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);

    let header: Vec<&str> = lines[0].split(',').collect();
    assert_eq!(header.first(), Some(&"url"));
    assert_eq!(header.last(), Some(&"jsonLdList"));
    assert!(header.contains(&"seoMetas_openGraph_og:title"));
    assert!(header.contains(&"seoMetas_twitterCard_twitter:site"));
    assert!(header.contains(&"fullPage_words"));
    assert!(header.contains(&"_meta_tool"));
    assert!(header.contains(&"_meta_version"));

    assert!(lines[1].contains(r#","Recipe, with a comma","#));
    assert!(lines[1].contains(",en:https://example.com/en; es:https://example.com/es,"));
    assert!(lines[1].ends_with(r#","Recipe, Person; Invalid JSON""#));
}

#[test]
fn json_ld_files_per_block() {
    let report = analyze(PAGE, "https://example.com/recipe", StatusCode::Code(200)).expect("analysis failed");
    let exports = json_ld_exports(&report);

    assert_eq!(exports.len(), 2);
    assert_eq!(exports[0].file_name, "schema-1-Recipe.json");
    assert_eq!(exports[0].document["author"]["name"], "Ann");
    assert!(exports[0].document["_meta"].is_object());

    assert_eq!(exports[1].file_name, "schema-2-Invalid_JSON.json");
    assert_eq!(exports[1].document["raw"], "{oops");
}

#[test]
fn file_stem_matches_report_date() {
    let report = analyze(PAGE, "", StatusCode::NotAvailable).expect("analysis failed");
    let stem = default_file_stem(&report);

    assert_eq!(stem, format!("seo-report-{}", &report.timestamp[..10]));
}
