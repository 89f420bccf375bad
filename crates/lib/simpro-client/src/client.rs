//! The Simpro API client.
//!
//! Every operation is a single-shot GET against the versioned REST prefix.
//! Responses are decoded as opaque JSON and returned verbatim; any transport
//! error or non-2xx status becomes a [`ClientError`] for the caller to
//! handle. The client never retries and never paginates.

use reqwest::header;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

const API_PREFIX: &str = "/api/v1.0";

/// Page-size ceiling for the customer aggregation list fetch. Records past
/// this ceiling are not reachable; no follow-up page is requested.
const CUSTOMER_PAGE_LIMIT: &str = "100";

/// Stateless facade over the Simpro REST API.
///
/// The bearer token and JSON content headers are installed as reqwest
/// default headers at construction and are immutable afterwards.
#[derive(Debug, Clone)]
pub struct SimproClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SimproClient {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] if the access token cannot be encoded
    /// as a header value, or [`ClientError::Http`] if the transport cannot
    /// be constructed.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.access_token))
                .map_err(|_| ClientError::Config("access token is not a valid header value".to_string()))?,
        );
        headers.insert(header::CONTENT_TYPE, header::HeaderValue::from_static("application/json"));
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self { http, config })
    }

    /// Base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.get_json_with_query(path, &[] as &[(&str, &str)]).await
    }

    async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(url = %url, "GET request");

        let response = self.http.get(&url).query(query).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, url, message });
        }
        Ok(response.json().await?)
    }

    /// Retrieves all companies visible to the credential.
    ///
    /// # Errors
    /// Returns [`ClientError`] on any transport failure or non-2xx status.
    pub async fn get_companies(&self) -> ClientResult<Vec<Value>> {
        self.get_json(&format!("{API_PREFIX}/companies/")).await
    }

    /// Retrieves the employees of a company.
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] when no company id is supplied; there
    /// is no upstream endpoint for listing employees across companies.
    pub async fn get_employees(&self, company_id: Option<i64>) -> ClientResult<Vec<Value>> {
        let Some(company_id) = company_id else {
            return Err(ClientError::Config("company_id is required to list employees".to_string()));
        };
        self.get_json(&format!("{API_PREFIX}/companies/{company_id}/employees/")).await
    }

    /// Retrieves a single employee record.
    ///
    /// # Errors
    /// Returns [`ClientError`] on any transport failure or non-2xx status.
    pub async fn get_employee(&self, company_id: i64, employee_id: i64) -> ClientResult<Value> {
        self.get_json(&format!("{API_PREFIX}/companies/{company_id}/employees/{employee_id}")).await
    }

    /// Retrieves the customer list of a company, in the upstream's own list
    /// representation.
    ///
    /// # Errors
    /// Returns [`ClientError`] on any transport failure or non-2xx status.
    pub async fn get_customers(&self, company_id: i64) -> ClientResult<Value> {
        self.get_json(&format!("{API_PREFIX}/companies/{company_id}/customers/")).await
    }

    /// Retrieves a single customer-company record.
    ///
    /// # Errors
    /// Returns [`ClientError`] on any transport failure or non-2xx status.
    pub async fn get_customer(&self, company_id: i64, customer_id: i64) -> ClientResult<Value> {
        self.get_json(&format!(
            "{API_PREFIX}/companies/{company_id}/customers/companies/{customer_id}"
        ))
        .await
    }

    /// Retrieves full customer records for a company by following each list
    /// entry's `_href` self-link.
    ///
    /// The list fetch is capped at the first 100 records. Detail fetches run
    /// strictly one at a time in list order; an entry whose detail fetch
    /// fails, or that carries no usable self-link, is skipped without a
    /// diagnostic, so the result may be shorter than the list.
    ///
    /// # Errors
    /// Returns [`ClientError`] only when the initial list fetch fails.
    pub async fn get_customers_of_company(&self, company_id: i64) -> ClientResult<Vec<Value>> {
        let path = format!("{API_PREFIX}/companies/{company_id}/customers/");
        let summaries: Vec<Value> = self
            .get_json_with_query(&path, &[("limit", CUSTOMER_PAGE_LIMIT)])
            .await?;

        let mut details = Vec::with_capacity(summaries.len());
        for summary in &summaries {
            let Some(href) = summary.get("_href").and_then(Value::as_str) else {
                continue;
            };
            match self.get_json::<Value>(canonical_href(href)).await {
                Ok(detail) => details.push(detail),
                Err(_) => continue,
            }
        }
        Ok(details)
    }

    /// Retrieves the jobs of a company.
    ///
    /// # Errors
    /// Returns [`ClientError`] on any transport failure or non-2xx status.
    pub async fn get_jobs(&self, company_id: i64) -> ClientResult<Vec<Value>> {
        self.get_json(&format!("{API_PREFIX}/companies/{company_id}/jobs/")).await
    }

    /// Retrieves a single job record.
    ///
    /// # Errors
    /// Returns [`ClientError`] on any transport failure or non-2xx status.
    pub async fn get_job(&self, company_id: i64, job_id: i64) -> ClientResult<Value> {
        self.get_json(&format!("{API_PREFIX}/companies/{company_id}/jobs/{job_id}/")).await
    }

    /// Retrieves the file attachments of a job.
    ///
    /// # Errors
    /// Returns [`ClientError`] on any transport failure or non-2xx status.
    pub async fn get_job_attachments(&self, company_id: i64, job_id: i64) -> ClientResult<Vec<Value>> {
        self.get_json(&format!(
            "{API_PREFIX}/companies/{company_id}/jobs/{job_id}/attachments/files/"
        ))
        .await
    }

    /// Retrieves the cost-to-complete operations report for a company's jobs.
    ///
    /// Absent filters are sent as blank query values; the upstream tolerates
    /// present-but-empty keys.
    ///
    /// # Errors
    /// Returns [`ClientError`] on any transport failure or non-2xx status.
    pub async fn get_jobs_reports_ops(
        &self,
        company_id: i64,
        search: Option<String>,
        date: Option<String>,
    ) -> ClientResult<Vec<Value>> {
        let path = format!("{API_PREFIX}/companies/{company_id}/reports/jobs/costToComplete/operations/");
        let query = [
            ("search", search.unwrap_or_default()),
            ("date", date.unwrap_or_default()),
        ];
        self.get_json_with_query(&path, &query).await
    }

    /// Retrieves the cost-to-complete financial report for a company's jobs.
    ///
    /// # Errors
    /// Returns [`ClientError`] on any transport failure or non-2xx status.
    pub async fn get_jobs_reports_financials(&self, company_id: i64) -> ClientResult<Vec<Value>> {
        self.get_json(&format!(
            "{API_PREFIX}/companies/{company_id}/reports/jobs/costToComplete/financial/"
        ))
        .await
    }

    /// Retrieves the leads of a company.
    ///
    /// # Errors
    /// Returns [`ClientError`] on any transport failure or non-2xx status.
    pub async fn get_leads(&self, company_id: i64) -> ClientResult<Vec<Value>> {
        self.get_json(&format!("{API_PREFIX}/companies/{company_id}/leads/")).await
    }

    /// Retrieves a single lead record.
    ///
    /// # Errors
    /// Returns [`ClientError`] on any transport failure or non-2xx status.
    pub async fn get_lead(&self, company_id: i64, lead_id: i64) -> ClientResult<Value> {
        self.get_json(&format!("{API_PREFIX}/companies/{company_id}/leads/{lead_id}")).await
    }

    /// Retrieves the quotes of a company.
    ///
    /// The upstream requires `search`, `pageSize`, and `orderby` to be
    /// present even when blank, so they are always sent; `limit` is added
    /// only when supplied.
    ///
    /// # Errors
    /// Returns [`ClientError`] on any transport failure or non-2xx status.
    pub async fn get_quotes(&self, company_id: i64, limit: Option<u64>) -> ClientResult<Vec<Value>> {
        let path = format!("{API_PREFIX}/companies/{company_id}/quotes/");
        let mut query: Vec<(&str, String)> = vec![
            ("search", "all".to_string()),
            ("pageSize", String::new()),
            ("orderby", String::new()),
        ];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        self.get_json_with_query(&path, &query).await
    }

    /// Retrieves a single quote record.
    ///
    /// # Errors
    /// Returns [`ClientError`] on any transport failure or non-2xx status.
    pub async fn get_quote(&self, company_id: i64, quote_id: i64) -> ClientResult<Value> {
        self.get_json(&format!("{API_PREFIX}/companies/{company_id}/quotes/{quote_id}/")).await
    }
}

/// Truncates a record self-link strictly before its query string.
fn canonical_href(href: &str) -> &str {
    match href.find('?') {
        Some(idx) => &href[..idx],
        None => href,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, path_regex, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(base_url: &str) -> SimproClient {
        SimproClient::new(ClientConfig::new(base_url, "test-token")).expect("client builds")
    }

    /// Client pointed at a URL no request can reach, to simulate transport
    /// failure.
    fn unreachable_client() -> SimproClient {
        client_for("http://127.0.0.1:0")
    }

    #[test]
    fn canonical_href_truncates_before_query_string() {
        assert_eq!(
            canonical_href("/api/v1.0/companies/7/customers/companies/22935?display=all"),
            "/api/v1.0/companies/7/customers/companies/22935"
        );
    }

    #[test]
    fn canonical_href_passes_through_plain_paths() {
        assert_eq!(
            canonical_href("/api/v1.0/companies/7/customers/companies/22935"),
            "/api/v1.0/companies/7/customers/companies/22935"
        );
    }

    #[tokio::test]
    async fn get_companies_returns_decoded_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1.0/companies/"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"ID": 0, "Name": "Head Office"},
                {"ID": 1, "Name": "Branch"}
            ])))
            .mount(&server)
            .await;

        let companies = client_for(&server.uri()).get_companies().await.expect("list fetch");
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0]["Name"], "Head Office");
    }

    #[tokio::test]
    async fn list_fetch_surfaces_non_2xx_as_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1.0/companies/7/jobs/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server.uri()).get_jobs(7).await.expect_err("should fail");
        match err {
            ClientError::Status { status, .. } => assert_eq!(status, 503),
            other => panic!("expected status error, got {other}"),
        }
    }

    #[tokio::test]
    async fn list_fetch_surfaces_transport_failure_as_error() {
        let err = unreachable_client().get_leads(7).await.expect_err("should fail");
        assert!(matches!(err, ClientError::Http(_)));
    }

    #[tokio::test]
    async fn detail_fetch_surfaces_non_2xx_as_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1.0/companies/7/employees/1718"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server.uri())
            .get_employee(7, 1718)
            .await
            .expect_err("should fail");
        assert!(matches!(err, ClientError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn get_employees_without_company_id_does_not_issue_a_request() {
        let err = unreachable_client()
            .get_employees(None)
            .await
            .expect_err("should fail");
        assert!(matches!(err, ClientError::Config(_)));
    }

    fn customer_summary(company_id: i64, customer_id: i64) -> Value {
        json!({
            "ID": customer_id,
            "_href": format!("/api/v1.0/companies/{company_id}/customers/companies/{customer_id}?display=all")
        })
    }

    async fn mount_customer_list(server: &MockServer, company_id: i64, summaries: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1.0/companies/{company_id}/customers/")))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(summaries))
            .expect(1)
            .mount(server)
            .await;
    }

    async fn mount_customer_detail(server: &MockServer, company_id: i64, customer_id: i64, status: u16) {
        let detail = json!({"ID": customer_id, "CompanyName": format!("Customer {customer_id}")});
        Mock::given(method("GET"))
            .and(path(format!(
                "/api/v1.0/companies/{company_id}/customers/companies/{customer_id}"
            )))
            .respond_with(ResponseTemplate::new(status).set_body_json(detail))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn customer_aggregation_resolves_every_link_in_order() {
        let server = MockServer::start().await;
        mount_customer_list(
            &server,
            7,
            json!([customer_summary(7, 10), customer_summary(7, 11), customer_summary(7, 12)]),
        )
        .await;
        for customer_id in [10, 11, 12] {
            mount_customer_detail(&server, 7, customer_id, 200).await;
        }

        let details = client_for(&server.uri())
            .get_customers_of_company(7)
            .await
            .expect("aggregation succeeds");
        let ids: Vec<i64> = details.iter().map(|d| d["ID"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[tokio::test]
    async fn customer_aggregation_skips_failed_details_and_keeps_order() {
        let server = MockServer::start().await;
        mount_customer_list(
            &server,
            7,
            json!([customer_summary(7, 10), customer_summary(7, 11), customer_summary(7, 12)]),
        )
        .await;
        mount_customer_detail(&server, 7, 10, 200).await;
        mount_customer_detail(&server, 7, 11, 500).await;
        mount_customer_detail(&server, 7, 12, 200).await;

        let details = client_for(&server.uri())
            .get_customers_of_company(7)
            .await
            .expect("aggregation succeeds");
        let ids: Vec<i64> = details.iter().map(|d| d["ID"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![10, 12]);
    }

    #[tokio::test]
    async fn customer_aggregation_with_no_summaries_issues_no_detail_fetch() {
        let server = MockServer::start().await;
        mount_customer_list(&server, 7, json!([])).await;
        Mock::given(method("GET"))
            .and(path_regex(r"/customers/companies/\d+$"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let details = client_for(&server.uri())
            .get_customers_of_company(7)
            .await
            .expect("aggregation succeeds");
        assert!(details.is_empty());
    }

    #[tokio::test]
    async fn customer_aggregation_fails_when_list_fetch_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1.0/companies/7/customers/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server.uri())
            .get_customers_of_company(7)
            .await
            .expect_err("should fail");
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn quotes_request_carries_fixed_filter_keys_and_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1.0/companies/7/quotes/"))
            .and(query_param("search", "all"))
            .and(query_param("pageSize", ""))
            .and(query_param("orderby", ""))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"ID": 900}])))
            .expect(1)
            .mount(&server)
            .await;

        let quotes = client_for(&server.uri())
            .get_quotes(7, Some(10))
            .await
            .expect("quotes fetch");
        assert_eq!(quotes.len(), 1);
    }

    #[tokio::test]
    async fn report_filters_are_sent_blank_when_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1.0/companies/7/reports/jobs/costToComplete/operations/"))
            .and(query_param("search", ""))
            .and(query_param("date", ""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let report = client_for(&server.uri())
            .get_jobs_reports_ops(7, None, None)
            .await
            .expect("report fetch");
        assert!(report.is_empty());
    }
}
