//! N-gram and phrase-book clients against a mock upstream.

use linggle::{
    ClientFactory, DomainError, LanguageMode, LinggleConfig, Ngram, NgramService, QueryResult,
};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path, path_regex, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn factory_for(server: &MockServer) -> ClientFactory {
    ClientFactory::new(LinggleConfig::single_host(server.uri()))
}

fn discuss_body() -> serde_json::Value {
    json!({
        "query": "discuss ?about the issue",
        "ngrams": [["discuss the issue", 147489], ["discuss about the issue", 98]],
        "total": 147587
    })
}

#[tokio::test]
async fn test_query_returns_result_unmodified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query/discuss%20%3Fabout%20the%20issue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(discuss_body()))
        .expect(1)
        .mount(&server)
        .await;

    let factory = factory_for(&server);
    let client = factory.ngram_client("www").unwrap();
    let result = client
        .query("discuss ?about the issue")
        .await
        .expect("query failed")
        .expect("expected a result");

    assert_eq!(
        result,
        QueryResult {
            query: "discuss ?about the issue".to_string(),
            ngrams: vec![
                Ngram::new("discuss the issue", 147489),
                Ngram::new("discuss about the issue", 98),
            ],
            total: 147587,
        }
    );
}

#[tokio::test]
async fn test_query_sends_slashes_as_at_signs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query/in@on%20time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "in/on time",
            "ngrams": [["on time", 10]],
            "total": 10
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = factory_for(&server).ngram_client("coca").unwrap();
    let result = client.query("in/on time").await.unwrap().unwrap();
    assert_eq!(result.total, 10);
}

#[tokio::test]
async fn test_query_non_200_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("^/query/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = factory_for(&server).ngram_client("www").unwrap();
    let result = client.query("anything").await.expect("non-200 is not an error");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_query_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("^/query/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = factory_for(&server).ngram_client("www").unwrap();
    let err = client.query("anything").await.unwrap_err();
    assert!(err.is_parse_error(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_query_unreachable_host_is_transport_error() {
    let factory = ClientFactory::new(LinggleConfig::single_host("http://127.0.0.1:1"));
    let client = factory.ngram_client("www").unwrap();
    let err = client.query("anything").await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_dot_only_query_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(discuss_body()))
        .expect(0)
        .mount(&server)
        .await;

    let client = factory_for(&server).ngram_client("www").unwrap();
    for dots in [".", ".."] {
        let err = client.query(dots).await.unwrap_err();
        assert!(
            matches!(err, DomainError::InvalidInput(_)),
            "{dots:?}: unexpected error: {err}"
        );
    }

    let phrase_book = factory_for(&server).phrase_book_client().unwrap();
    assert!(phrase_book.query("..", 0).await.is_err());
}

#[tokio::test]
async fn test_bilingual_chinese_query_uses_equery() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("^/equery/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "吃藥",
            "ngrams": [["take medicine", 42]],
            "total": 42
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex("^/query/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "take medicine",
            "ngrams": [],
            "total": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = factory_for(&server).ngram_client("x").unwrap();

    let zh = client.query_in("吃藥", LanguageMode::Zh).await.unwrap().unwrap();
    assert_eq!(zh.ngrams[0].phrase(), "take medicine");

    // The mode is per call; an English query afterwards still hits /query/.
    let en = client.query("take medicine").await.unwrap().unwrap();
    assert!(en.is_empty());

    let again = client.query_in("吃藥", LanguageMode::Zh).await.unwrap().unwrap();
    assert_eq!(again, zh);
}

#[tokio::test]
async fn test_get_example_posts_ngram() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/example/"))
        .and(body_json(json!({ "ngram": "present a method" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "examples": ["a", "b"] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = factory_for(&server).ngram_client("www").unwrap();
    let examples = client.get_example("present a method").await.unwrap();
    assert_eq!(examples, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn test_get_example_without_field_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/example/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = factory_for(&server).ngram_client("www").unwrap();
    assert!(client.get_example("get a").await.unwrap().is_empty());
    assert!(client.get_example("get a").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_example_non_200_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/example/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = factory_for(&server).ngram_client("udn").unwrap();
    assert!(client.get_example("get a").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_phrase_book_query_returns_raw_body() {
    let server = MockServer::start().await;
    let body = json!({ "phrase": "take place", "translations": [["舉行", 12]] });
    Mock::given(method("GET"))
        .and(path("/phrase/take%20place"))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let factory = factory_for(&server);
    let client = factory.get_client("bi").unwrap();
    let phrase_book = client.as_phrase_book().unwrap();
    let result = phrase_book.query("take place", 10).await.unwrap();
    assert_eq!(result, Some(body));
}

#[tokio::test]
async fn test_phrase_book_example_sends_both_phrases() {
    let server = MockServer::start().await;
    let body = json!([["會議將在明天舉行。", "The meeting will take place tomorrow."]]);
    Mock::given(method("GET"))
        .and(path("/sentence"))
        .and(query_param("ch", "舉行"))
        .and(query_param("en", "take place"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let phrase_book = factory_for(&server).phrase_book_client().unwrap();
    let result = phrase_book.get_example("舉行", "take place").await.unwrap();
    assert_eq!(result, Some(body));
}

#[tokio::test]
async fn test_phrase_book_non_200_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let phrase_book = factory_for(&server).phrase_book_client().unwrap();
    assert!(phrase_book.query("take place", 0).await.unwrap().is_none());
    assert!(phrase_book
        .get_example("舉行", "take place")
        .await
        .unwrap()
        .is_none());
}
