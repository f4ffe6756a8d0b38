use std::fs;
use std::io::Write;

use tailwind_remap::{analyze, run_analysis, AnalyzeArgs, TailwindConfig};
use tempfile::TempDir;

fn default_args(file: std::path::PathBuf, css_file: std::path::PathBuf) -> AnalyzeArgs {
    AnalyzeArgs {
        file,
        css_file,
        write: false,
        tailwind_file: None,
        class_blacklist: vec![],
        verbose: false,
    }
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_scenario_a_simple_resolution() {
    let css = ".btn { background-color: #3b82f6; color: #fff; }";
    let html = r#"<button class="btn">Go</button>"#;

    let resolved = run_analysis(css, html, &[], &TailwindConfig::default()).unwrap();

    assert_eq!(resolved["btn"], vec!["bg-blue-500", "text-white"]);
}

#[test]
fn test_scenario_b_blacklisted_token_resolves_to_nothing() {
    let css = ".btn { background-color: #3b82f6; color: #fff; }";
    let html = r#"<button class="btn">Go</button>"#;

    let resolved = run_analysis(
        css,
        html,
        &["btn".to_string()],
        &TailwindConfig::default(),
    )
    .unwrap();

    assert_eq!(resolved.len(), 1);
    assert!(resolved["btn"].is_empty());
}

#[test]
fn test_scenario_c_group_union_preserves_discovery_order() {
    let css = ".card { padding: 1rem; } .header { font-weight: 700; }";
    let html = r#"<div class="card header">x</div>"#;

    let resolved = run_analysis(css, html, &[], &TailwindConfig::default()).unwrap();

    assert_eq!(resolved["card header"], vec!["p-4", "font-bold"]);
}

#[test]
fn test_scenario_d_write_rewrites_file_in_place() {
    let dir = TempDir::new().unwrap();
    let css_path = write_file(
        &dir,
        "styles.css",
        ".btn { background-color: #3b82f6; color: #fff; }",
    );
    let html_path = write_file(
        &dir,
        "index.html",
        r#"<button class="btn">btn says hi</button>"#,
    );

    let mut args = default_args(html_path.clone(), css_path);
    args.write = true;

    let report = analyze(&args).unwrap();
    assert!(report.written);

    let rewritten = fs::read_to_string(&html_path).unwrap();
    // Global literal replacement: the body occurrence of "btn" is rewritten
    // too, unrelated text stays.
    assert_eq!(
        rewritten,
        r#"<button class="bg-blue-500 text-white">bg-blue-500 text-white says hi</button>"#
    );
}

#[test]
fn test_scenario_e_templated_class_excluded() {
    let css = ".btn { color: #fff; }";
    let html = r#"<div class="{{dynamicClass}}">x</div><a class="btn">y</a>"#;

    let resolved = run_analysis(css, html, &[], &TailwindConfig::default()).unwrap();

    assert_eq!(resolved.len(), 1);
    assert!(resolved.contains_key("btn"));
    assert!(!resolved.keys().any(|k| k.contains("{{")));
}

#[test]
fn test_duplicate_attributes_collapse_to_one_entry() {
    let css = ".btn { color: #fff; }";
    let html = r#"<a class="btn">x</a><b class="btn">y</b>"#;

    let resolved = run_analysis(css, html, &[], &TailwindConfig::default()).unwrap();

    assert_eq!(resolved.len(), 1);
}

#[test]
fn test_glob_blacklist_end_to_end() {
    let css = ".icon-star { width: 1rem; } .card { padding: 1rem; }";
    let html = r#"<i class="icon-star"></i><div class="card">x</div>"#;

    let resolved = run_analysis(
        css,
        html,
        &["icon-*".to_string()],
        &TailwindConfig::default(),
    )
    .unwrap();

    assert!(resolved["icon-star"].is_empty());
    assert_eq!(resolved["card"], vec!["p-4"]);
}

#[test]
fn test_id_selector_matches_token() {
    let css = "#hero { display: flex; }";
    let html = r#"<div class="hero">x</div>"#;

    let resolved = run_analysis(css, html, &[], &TailwindConfig::default()).unwrap();

    assert_eq!(resolved["hero"], vec!["flex"]);
}

#[test]
fn test_multiple_rules_for_same_token_union_without_duplicates() {
    let css = ".btn { padding: 1rem; } .btn { padding: 1rem; color: #fff; }";
    let html = r#"<a class="btn">x</a>"#;

    let resolved = run_analysis(css, html, &[], &TailwindConfig::default()).unwrap();

    assert_eq!(resolved["btn"], vec!["p-4", "text-white"]);
}

#[test]
fn test_hover_and_breakpoint_variants_flow_through() {
    let css = r#"
        .btn { background-color: #3b82f6; }
        .btn:hover { background-color: #2563eb; }
        @media (min-width: 768px) { .btn { padding: 1rem; } }
    "#;
    let html = r#"<a class="btn">x</a>"#;

    let resolved = run_analysis(css, html, &[], &TailwindConfig::default()).unwrap();

    assert_eq!(
        resolved["btn"],
        vec!["bg-blue-500", "hover:bg-blue-600", "md:p-4"]
    );
}

#[test]
fn test_tailwind_config_customizes_conversion() {
    let dir = TempDir::new().unwrap();
    let config_path = write_file(
        &dir,
        "tailwind.config.json",
        r##"{ "theme": { "extend": { "colors": { "brand": "#123456" } } } }"##,
    );

    let config = TailwindConfig::from_file(&config_path).unwrap();
    let css = ".cta { background-color: #123456; }";
    let html = r#"<a class="cta">x</a>"#;

    let resolved = run_analysis(css, html, &[], &config).unwrap();

    assert_eq!(resolved["cta"], vec!["bg-brand"]);
}

#[test]
fn test_report_mode_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let css_path = write_file(&dir, "styles.css", ".btn { color: #fff; }");
    let original = r#"<a class="btn">x</a>"#;
    let html_path = write_file(&dir, "index.html", original);

    let args = default_args(html_path.clone(), css_path);
    let report = analyze(&args).unwrap();

    assert!(!report.written);
    assert_eq!(fs::read_to_string(&html_path).unwrap(), original);
}
