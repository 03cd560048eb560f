//! Facade tests: typed extraction, the fluent builder and config handling

use pathq::{
    DescentMode, ErrorKind, FilterRoot, LookupConfig, LookupStats, PathQuery, QueryError,
    TracingSink,
};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize, PartialEq)]
struct Book {
    title: String,
    price: f64,
}

fn library() -> Value {
    json!({
        "budget": 15,
        "book": [
            {"title": "Sayings", "price": 8.95},
            {"title": "Moby Dick", "price": 22.99},
            {"title": "Sword", "price": 12.99}
        ]
    })
}

#[test]
fn test_lookup_as_deserializes_filtered_elements() {
    let books: Vec<Book> = pathq::lookup_as(&library(), "$.book[?(@.price < $.budget)]").unwrap();
    assert_eq!(
        books,
        vec![
            Book { title: "Sayings".into(), price: 8.95 },
            Book { title: "Sword".into(), price: 12.99 },
        ]
    );
}

#[test]
fn test_lookup_as_scalar() {
    let title: String = pathq::lookup_as(&library(), "$.book[-1].title").unwrap();
    assert_eq!(title, "Sword");
}

#[test]
fn test_lookup_as_reports_shape_mismatch() {
    let err = pathq::lookup_as::<u64>(&library(), "$.book[0].title").unwrap_err();
    assert!(matches!(err, QueryError::Deserialize(_)), "{err}");
}

#[test]
fn test_lookup_as_passes_engine_errors_through() {
    let err = pathq::lookup_as::<Value>(&library(), "$.book[9]").unwrap_err();
    assert_eq!(
        err.as_path_error().map(|e| e.kind),
        Some(ErrorKind::IndexOutOfRange)
    );
}

#[test]
fn test_builder_search_descent() {
    let doc = json!({"shelf": {"a": {"title": "x"}, "b": {"title": "y"}}});
    let titles: Vec<String> = PathQuery::new("$..title")
        .descent(DescentMode::Search)
        .lookup_as(&doc)
        .unwrap();
    assert_eq!(titles, vec!["x", "y"]);
}

#[test]
fn test_builder_trace_counts_events() {
    let stats = LookupStats::new();
    let query = PathQuery::new("$.book[?(@.price > 10)].title").trace(&stats);
    let titles = query.lookup(&library()).unwrap();
    assert_eq!(titles, json!(["Moby Dick", "Sword"]));
    assert_eq!(stats.lookups(), 1);
    assert_eq!(stats.filter_evaluations(), 3);
    assert_eq!(stats.filter_matches(), 2);
}

#[test]
fn test_builder_rejects_zero_limits() {
    for query in [
        PathQuery::new("$.budget").max_path_length(0),
        PathQuery::new("$.budget").max_indices(0),
    ] {
        let err = query.lookup(&library()).unwrap_err();
        assert!(matches!(err, QueryError::Config(_)), "{err}");
    }
}

#[test]
fn test_builder_enforces_index_limit() {
    let err = PathQuery::new("$.book[0,1,2]")
        .max_indices(2)
        .lookup(&library())
        .unwrap_err();
    assert_eq!(err.as_path_error().map(|e| e.kind), Some(ErrorKind::Unsupported));
}

#[test]
fn test_builder_accepts_whole_config() {
    let config: LookupConfig =
        serde_json::from_value(json!({"filter_root": "working_copy"})).unwrap();
    let query = PathQuery::new("$.book[?(@.price < $.budget)].title").config(config);
    assert_eq!(query.lookup_config().filter_root, FilterRoot::WorkingCopy);
    assert_eq!(query.lookup_config().max_indices, LookupConfig::default().max_indices);
    assert_eq!(query.lookup(&library()).unwrap(), json!(["Sayings", "Sword"]));
}

#[test]
fn test_compiled_query_reused_across_documents() {
    let path = PathQuery::new("$.v").compile().unwrap();
    assert_eq!(path.evaluate(&json!({"v": 1})).unwrap(), json!(1));
    assert_eq!(path.evaluate(&json!({"v": [2]})).unwrap(), json!([2]));
    assert_eq!(path.to_string(), "JSONPath('$.v')");
}

#[test]
fn test_builder_with_tracing_sink_under_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("pathq=debug")
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let query = PathQuery::new("$.book[?(@.price > 20)].title").trace(&TracingSink);
        assert_eq!(query.lookup(&library()).unwrap(), json!(["Moby Dick"]));

        let err = PathQuery::new("$.book[7]")
            .trace(&TracingSink)
            .lookup(&library())
            .unwrap_err();
        assert_eq!(err.as_path_error().map(|e| e.kind), Some(ErrorKind::IndexOutOfRange));
    });
}
