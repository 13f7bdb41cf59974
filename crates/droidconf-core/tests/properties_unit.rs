use droidconf_core::properties::Properties;
use droidconf_util::errors::ConfigError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn load_with_key_value_comments_blank_lines() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(
        tmp,
        "# comment line\n\
         KEY1=value1\n\
         \n\
         ! bang comment\n\
         KEY2:value2\n\
         KEY3  =  value3\n"
    )
    .unwrap();
    tmp.flush().unwrap();

    let props = Properties::load(tmp.path()).unwrap();
    assert!(props.exists());
    assert_eq!(props.get("KEY1"), Some("value1"));
    assert_eq!(props.get("KEY2"), Some("value2"));
    assert_eq!(props.get("KEY3"), Some("value3"));
    assert_eq!(props.len(), 3);
}

#[test]
fn load_nonexistent_path_is_empty_and_absent() {
    let path = std::path::Path::new("/nonexistent/path/to/local.properties");
    let props = Properties::load(path).unwrap();
    assert!(props.is_empty());
    assert!(!props.exists());
    assert_eq!(props.path(), Some(path));
}

#[test]
fn parse_continuation_lines() {
    let props = Properties::parse("fruits=apple, \\\n    banana, \\\n    cherry\nnext=1\n");
    assert_eq!(props.get("fruits"), Some("apple, banana, cherry"));
    assert_eq!(props.get("next"), Some("1"));
}

#[test]
fn parse_windows_sdk_dir_escapes() {
    let props = Properties::parse("sdk.dir=C\\:\\\\Users\\\\dev\\\\AppData\\\\Local\\\\Android\\\\Sdk\n");
    assert_eq!(
        props.get("sdk.dir"),
        Some(r"C:\Users\dev\AppData\Local\Android\Sdk")
    );
}

#[test]
fn parse_value_keeps_embedded_separators() {
    let props = Properties::parse("url=https://example.com/a=b\n");
    assert_eq!(props.get("url"), Some("https://example.com/a=b"));
}

#[test]
fn parse_later_duplicate_wins() {
    let props = Properties::parse("k=first\nk=second\n");
    assert_eq!(props.get("k"), Some("second"));
}

#[test]
fn parse_crlf_line_endings() {
    let props = Properties::parse("a=1\r\nb=2\r\n");
    assert_eq!(props.get("a"), Some("1"));
    assert_eq!(props.get("b"), Some("2"));
}

#[test]
fn require_on_missing_file_is_file_not_found() {
    let props = Properties::load(std::path::Path::new("/nonexistent/local.properties")).unwrap();
    let err = props.require("GOOGLE_MAP_API_KEY").unwrap_err();
    assert!(
        matches!(err, ConfigError::FileNotFound { ref key, .. } if key == "GOOGLE_MAP_API_KEY"),
        "got: {err}"
    );
}

#[test]
fn require_on_present_file_is_missing_required_key() {
    let props = Properties::parse("other=1\n");
    let err = props.require("GOOGLE_MAP_API_KEY").unwrap_err();
    assert!(matches!(err, ConfigError::MissingRequiredKey { .. }), "got: {err}");
}

#[test]
fn parse_unicode_escape_surrogate_pair() {
    let props = Properties::parse("app.label=Maps \\uD83D\\uDDFA\n");
    assert_eq!(props.get("app.label"), Some("Maps \u{1F5FA}"));
}
