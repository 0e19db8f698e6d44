#![cfg(test)]
//! The desktop build inlines `ui/assets/theme/main.css`; a broken path or a
//! truncated file would only show up as an unstyled window at runtime.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_defines_series_colors() {
    // Same stroke colours the chart and control swatches use.
    let required = [
        "--color-bg",
        "body {",
        "--color-windows: rgba(0, 120, 212, 1)",
        "--color-linux: rgba(255, 193, 7, 1)",
        "--color-macos: rgba(108, 117, 125, 1)",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
