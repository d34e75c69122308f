use crate::TextQuery;

#[test]
fn test_empty_query_matches_everything() {
    let query = TextQuery::new("");

    assert!(query.is_empty());
    assert!(query.matches_any(&["anything"]));
    assert!(query.matches_any(&[]));
}

#[test]
fn test_whitespace_only_query_is_empty() {
    let query = TextQuery::new("   ");

    assert!(query.is_empty());
}

#[test]
fn test_query_is_case_insensitive() {
    let query = TextQuery::new("PRINTER");

    assert!(query.matches_any(&["Printer not working in office 204"]));
}

#[test]
fn test_query_matches_any_field() {
    let query = TextQuery::new("tkt-2845");

    assert!(query.matches_any(&["WiFi connection issues", "TKT-2845"]));
    assert!(!query.matches_any(&["WiFi connection issues"]));
}
