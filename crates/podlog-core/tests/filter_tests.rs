//! Tests for filter-file parsing and `$env` substitution.

use podlog_core::FilterFile;

#[test]
fn comment_lines_are_dropped() {
    let parsed = FilterFile::parse("# heading\nresource.type=\"container\"\n# trailing\n");
    assert_eq!(parsed.filter, "resource.type=\"container\"\n");
}

#[test]
fn order_by_directive_is_extracted_not_accumulated() {
    let parsed = FilterFile::parse("log.orderBy.timestamp=desc\nseverity>=ERROR\n");
    assert_eq!(parsed.order_by.as_deref(), Some("timestamp desc"));
    assert_eq!(parsed.filter, "severity>=ERROR\n");
}

#[test]
fn order_by_direction_is_taken_verbatim() {
    let parsed = FilterFile::parse("log.orderBy.timestamp=asc\n");
    assert_eq!(parsed.order_by.as_deref(), Some("timestamp asc"));
}

#[test]
fn missing_order_by_stays_none() {
    let parsed = FilterFile::parse("severity>=ERROR\n");
    assert_eq!(parsed.order_by, None);
}

#[test]
fn credential_lines_are_captured_after_first_colon() {
    let parsed = FilterFile::parse("access_token:ya29.abc:def\nrefresh_token:1//xyz\n");
    // Only the first colon separates; the rest of the line is the token.
    assert_eq!(parsed.credentials.access_token, "ya29.abc:def");
    assert_eq!(parsed.credentials.refresh_token, "1//xyz");
    assert_eq!(parsed.filter, "", "credential lines must not leak into the filter");
}

#[test]
fn credential_line_without_separator_uses_whole_line() {
    let parsed = FilterFile::parse("access_token\n");
    assert_eq!(parsed.credentials.access_token, "access_token");
}

#[test]
fn credential_values_are_not_trimmed() {
    let parsed = FilterFile::parse("access_token: spaced \n");
    assert_eq!(parsed.credentials.access_token, " spaced ");
}

#[test]
fn blank_lines_are_preserved_in_the_filter() {
    let parsed = FilterFile::parse("severity>=ERROR\n\nresource.type=\"container\"\n");
    assert_eq!(parsed.filter, "severity>=ERROR\n\nresource.type=\"container\"\n");
}

#[test]
fn env_placeholder_is_substituted_everywhere() {
    let parsed = FilterFile::parse(
        "logName=\"projects/$env/logs/app\"\nresource.labels.project_id=\"$env\"\n",
    );
    assert_eq!(
        parsed.filter_for("acme-prod"),
        "logName=\"projects/acme-prod/logs/app\"\nresource.labels.project_id=\"acme-prod\"\n"
    );
}

#[test]
fn filter_without_placeholder_is_unchanged() {
    let parsed = FilterFile::parse("severity>=ERROR\n");
    assert_eq!(parsed.filter_for("acme-prod"), "severity>=ERROR\n");
}

#[test]
fn empty_input_parses_to_defaults() {
    let parsed = FilterFile::parse("");
    assert_eq!(parsed, FilterFile::default());
}

#[test]
fn realistic_file_parses_fully() {
    let text = "\
# logs for the checkout service
log.orderBy.timestamp=desc
refresh_token:1//refresh
access_token:ya29.access

resource.type=\"container\"
resource.labels.project_id=\"$env\"
textPayload:\"checkout\"
";
    let parsed = FilterFile::parse(text);
    assert_eq!(parsed.order_by.as_deref(), Some("timestamp desc"));
    assert_eq!(parsed.credentials.refresh_token, "1//refresh");
    assert_eq!(parsed.credentials.access_token, "ya29.access");
    assert_eq!(
        parsed.filter_for("acme-staging"),
        "\nresource.type=\"container\"\nresource.labels.project_id=\"acme-staging\"\ntextPayload:\"checkout\"\n"
    );
}
