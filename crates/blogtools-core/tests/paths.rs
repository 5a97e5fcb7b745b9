use blogtools_core::error::CoreError;
use blogtools_core::paths::{is_root_name, is_tool_file, public_url, tool_filename};

#[test]
fn appends_html_suffix() {
    assert_eq!(tool_filename("widget").unwrap(), "widget.html");
}

#[test]
fn keeps_existing_suffix() {
    assert_eq!(tool_filename("widget.html").unwrap(), "widget.html");
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(tool_filename("  budget-calculator ").unwrap(), "budget-calculator.html");
}

#[test]
fn blank_name_is_missing() {
    assert!(matches!(tool_filename("   "), Err(CoreError::MissingField(_))));
}

#[test]
fn nested_paths_are_rejected() {
    for name in ["tools/widget", "..", "a\\b", "../secret"] {
        assert!(
            matches!(tool_filename(name), Err(CoreError::InvalidFilename(_))),
            "{name} should be rejected"
        );
    }
}

#[test]
fn root_names_have_no_separators() {
    assert!(is_root_name("widget.html"));
    assert!(!is_root_name("sub/x.html"));
    assert!(!is_root_name("sub\\x.html"));
    assert!(!is_root_name("..x.html"));
}

#[test]
fn only_html_files_are_tools() {
    assert!(is_tool_file("quiz.html"));
    assert!(!is_tool_file("README.md"));
    assert!(!is_tool_file("style.css"));
    assert!(!is_tool_file("html"));
}

#[test]
fn public_url_joins_without_double_slash() {
    assert_eq!(
        public_url("https://acme.github.io/tools/", "widget.html"),
        "https://acme.github.io/tools/widget.html"
    );
    assert_eq!(
        public_url("https://acme.github.io/tools", "widget.html"),
        "https://acme.github.io/tools/widget.html"
    );
}
