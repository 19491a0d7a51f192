//! Search execution and orchestration

use super::models::{SearchRequest, SearchResponse};
use crate::engines::{Engine, RequestParams};
use crate::error::Result;
use crate::network::HttpClient;
use crate::query::{evidence_queries, SearchType, EVIDENCE_QUERY_COUNT};
use crate::results::{merge_results, FormattedResult, UpstreamResult};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Search executor that issues upstream queries and shapes the results
pub struct Search {
    /// HTTP client for making requests
    client: HttpClient,
    /// Upstream engine
    engine: Arc<dyn Engine>,
}

impl Search {
    /// Create a new search executor
    pub fn new(client: HttpClient, engine: Arc<dyn Engine>) -> Self {
        Self { client, engine }
    }

    /// Whether the upstream engine has the credentials it needs
    pub fn is_configured(&self) -> bool {
        self.engine.is_configured()
    }

    /// Execute a validated search request
    pub async fn execute(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let query = request.trimmed_query();

        let raw_results = match request.search_type {
            SearchType::General => {
                let mut results = self.search_engine(query, request.num_results).await?;
                results.truncate(request.num_results);
                results
            }
            SearchType::Evidence => {
                self.search_evidence(&request.query, request.num_results)
                    .await
            }
        };

        let results = raw_results
            .into_iter()
            .map(FormattedResult::from_upstream)
            .collect::<Result<Vec<_>>>()?;

        Ok(SearchResponse::new(query, results))
    }

    /// Fan the query out into evidence sub-queries and merge what comes back
    ///
    /// Failed sub-queries contribute nothing; the rest are concatenated in
    /// sub-query order before deduplication.
    async fn search_evidence(&self, query: &str, num_results: usize) -> Vec<UpstreamResult> {
        let per_query = num_results.div_ceil(EVIDENCE_QUERY_COUNT);
        let queries = evidence_queries(query);

        info!(
            "Executing evidence search '{}' as {} sub-queries",
            query.trim(),
            queries.len()
        );

        let outcomes = join_all(
            queries
                .iter()
                .map(|sub_query| self.search_engine(sub_query, per_query)),
        )
        .await;

        let mut lists = Vec::with_capacity(outcomes.len());
        for (sub_query, outcome) in queries.iter().zip(outcomes) {
            match outcome {
                Ok(results) => lists.push(results),
                Err(e) => warn!("Evidence sub-query '{}' failed: {}", sub_query, e),
            }
        }

        if lists.is_empty() {
            warn!("All evidence sub-queries failed for '{}'", query.trim());
        }

        merge_results(lists, num_results)
    }

    /// Run a single query against the upstream engine
    pub async fn search_engine(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<UpstreamResult>> {
        let engine_name = self.engine.name();
        let start = Instant::now();

        let params = RequestParams::new(query, num_results);
        let request = self.engine.request(&params)?;
        let response = self.client.execute(request).await?;
        let results = self.engine.response(response)?;

        debug!(
            "Engine {} returned {} results for '{}' in {:?}",
            engine_name,
            results.len(),
            query,
            start.elapsed()
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamSettings;
    use crate::engines::Serper;
    use crate::error::SearchError;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn search_for(server: &MockServer) -> Search {
        let settings = UpstreamSettings {
            url: format!("{}/search", server.uri()),
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };
        Search::new(HttpClient::new().unwrap(), Arc::new(Serper::new(&settings)))
    }

    fn hit(link: &str) -> serde_json::Value {
        json!({"title": link, "link": link, "snippet": "s"})
    }

    async fn mount_query(server: &MockServer, q: &str, status: u16, links: &[&str]) {
        let organic: Vec<_> = links.iter().map(|l| hit(l)).collect();
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "q": q })))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "organic": organic })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_general_search_uses_trimmed_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"q": "rust", "num": 2})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "organic": [hit("https://a.com/"), hit("https://b.com/"), hit("https://c.com/")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let search = search_for(&server);
        let request = SearchRequest::new("  rust ").with_num_results(2);
        let response = search.execute(&request).await.unwrap();

        assert_eq!(response.query, "rust");
        assert_eq!(response.total_results, 2);
        assert_eq!(response.results[0].source, "a.com");
    }

    #[tokio::test]
    async fn test_general_search_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let search = search_for(&server);
        let err = search.execute(&SearchRequest::new("rust")).await.unwrap_err();
        assert!(matches!(err, SearchError::Upstream { status: 401 }));
    }

    #[tokio::test]
    async fn test_evidence_merges_in_order_and_dedups() {
        let server = MockServer::start().await;
        mount_query(
            &server,
            "climate change evidence statistics data",
            200,
            &["https://a.com/", "https://b.com/"],
        )
        .await;
        mount_query(
            &server,
            "climate change research study findings",
            200,
            &["https://b.com/", "https://c.com/"],
        )
        .await;
        mount_query(
            &server,
            "climate climate change facts",
            200,
            &["https://d.com/"],
        )
        .await;

        let search = search_for(&server);
        let request = SearchRequest::new("climate change")
            .with_search_type(SearchType::Evidence)
            .with_num_results(6);
        let response = search.execute(&request).await.unwrap();

        let links: Vec<_> = response.results.iter().map(|r| r.link.as_str()).collect();
        assert_eq!(
            links,
            vec!["https://a.com/", "https://b.com/", "https://c.com/", "https://d.com/"]
        );
        assert_eq!(response.total_results, 4);
    }

    #[tokio::test]
    async fn test_evidence_requests_a_third_each() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"num": 4})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"organic": []})))
            .expect(3)
            .mount(&server)
            .await;

        let search = search_for(&server);
        let request = SearchRequest::new("ocean acidification")
            .with_search_type(SearchType::Evidence)
            .with_num_results(10);
        let response = search.execute(&request).await.unwrap();
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn test_evidence_truncates_to_num_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"q": "nuclear power evidence statistics data"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "organic": [hit("https://1.com/"), hit("https://2.com/"), hit("https://3.com/")]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "organic": [hit("https://4.com/"), hit("https://5.com/")]
            })))
            .mount(&server)
            .await;

        let search = search_for(&server);
        let request = SearchRequest::new("nuclear power")
            .with_search_type(SearchType::Evidence)
            .with_num_results(4);
        let response = search.execute(&request).await.unwrap();

        let links: Vec<_> = response.results.iter().map(|r| r.link.as_str()).collect();
        assert_eq!(
            links,
            vec!["https://1.com/", "https://2.com/", "https://3.com/", "https://4.com/"]
        );
    }

    #[tokio::test]
    async fn test_evidence_partial_failure_is_dropped() {
        let server = MockServer::start().await;
        mount_query(
            &server,
            "climate change evidence statistics data",
            500,
            &["https://a.com/"],
        )
        .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "organic": [hit("https://ok.com/")]
            })))
            .mount(&server)
            .await;

        let search = search_for(&server);
        let request = SearchRequest::new("climate change").with_search_type(SearchType::Evidence);
        let response = search.execute(&request).await.unwrap();

        assert_eq!(response.total_results, 1);
        assert_eq!(response.results[0].link, "https://ok.com/");
    }

    #[tokio::test]
    async fn test_evidence_sub_queries_run_concurrently() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"organic": []}))
                    .set_delay(Duration::from_millis(300)),
            )
            .expect(3)
            .mount(&server)
            .await;

        let search = search_for(&server);
        let request = SearchRequest::new("climate change").with_search_type(SearchType::Evidence);
        let start = Instant::now();
        let response = search.execute(&request).await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(response.total_results, 0);
        // one after another would take at least 900ms
        assert!(elapsed < Duration::from_millis(800), "took {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_evidence_total_failure_is_empty_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&server)
            .await;

        let search = search_for(&server);
        let request = SearchRequest::new("climate change").with_search_type(SearchType::Evidence);
        let response = search.execute(&request).await.unwrap();

        assert!(response.success);
        assert!(response.results.is_empty());
        assert_eq!(response.total_results, 0);
    }

    #[tokio::test]
    async fn test_invalid_link_fails_formatting() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "organic": [{"title": "broken", "link": "not a url"}]
            })))
            .mount(&server)
            .await;

        let search = search_for(&server);
        let err = search.execute(&SearchRequest::new("rust")).await.unwrap_err();
        assert!(matches!(err, SearchError::InvalidUrl(_)));
    }
}
