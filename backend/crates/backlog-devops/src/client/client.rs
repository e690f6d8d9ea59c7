use crate::wire::{ProjectsEnvelope, WiqlRequest, WiqlResponse, WorkItemsEnvelope};
use crate::{ClientOptions, DevOpsError, DevOpsResult, auth_headers};

use backlog_core::{ProjectSummary, ProjectsPage, RawItem, mask_identifier};

use std::panic::Location;
use std::time::Instant;

use error_location::ErrorLocation;
use log::{debug, error, info};
use reqwest::header::HeaderMap;
use reqwest::{Client as ReqwestClient, Method, Response, Url};
use serde::de::DeserializeOwned;

const CONTINUATION_HEADER: &str = "x-ms-continuationtoken";

/// Client for one organization on the remote platform.
///
/// Cheap to build per request: the underlying connection pool lives in the
/// shared `reqwest::Client`.
pub struct DevOpsClient {
    pub base_url: Url,
    pub organization: String,
    options: ClientOptions,
    headers: HeaderMap,
    client: ReqwestClient,
}

impl DevOpsClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `client` - Shared HTTP client
    /// * `base_url` - API root (e.g., "https://dev.azure.com")
    /// * `organization` - Organization name, first path segment of every call
    /// * `pat` - Personal access token
    #[track_caller]
    pub fn new(
        client: ReqwestClient,
        base_url: &str,
        organization: &str,
        pat: &str,
        options: ClientOptions,
    ) -> DevOpsResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| DevOpsError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DevOpsError::InvalidUrl {
                url: base_url.to_string(),
                message: "URL cannot be used as a base".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            base_url,
            organization: organization.to_string(),
            options,
            headers: auth_headers(pat)?,
            client,
        })
    }

    /// Build an endpoint URL below `{base}/{organization}` with the api-version pair set
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();

        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(&self.organization).extend(segments);
        }
        url.query_pairs_mut()
            .append_pair("api-version", &self.options.api_version);

        url
    }

    /// Build a request carrying the auth headers
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .headers(self.headers.clone())
    }

    /// Execute request and turn non-success statuses into `DevOpsError::Remote`
    async fn execute(&self, req: reqwest::RequestBuilder, context: &str) -> DevOpsResult<Response> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{} | status={} body={}", context, status.as_u16(), body);
            return Err(DevOpsError::remote(status.as_u16(), context, &body));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> DevOpsResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List one page of projects in the organization
    pub async fn list_projects(
        &self,
        top: u32,
        skip: u32,
        continuation_token: Option<&str>,
    ) -> DevOpsResult<ProjectsPage> {
        let start = Instant::now();
        info!(
            "Fetching projects | org={} top={} skip={} continuation_token={}",
            mask_identifier(&self.organization),
            top,
            skip,
            continuation_token.is_some()
        );

        let mut url = self.endpoint(&["_apis", "projects"]);
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("$top", &top.to_string())
                .append_pair("$skip", &skip.to_string());
            if let Some(token) = continuation_token {
                query.append_pair("continuationToken", token);
            }
        }

        let response = self
            .execute(
                self.request(Method::GET, url),
                "Failed to fetch projects",
            )
            .await?;

        let next_token = response
            .headers()
            .get(CONTINUATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(String::from);

        let envelope: ProjectsEnvelope = Self::decode(response).await?;
        let projects: Vec<ProjectSummary> =
            envelope.value.into_iter().map(ProjectSummary::from).collect();
        let page = ProjectsPage::new(projects, envelope.count, next_token);

        info!(
            "Projects fetched | org={} count={} total={:?} has_more={} duration_ms={:.1}",
            mask_identifier(&self.organization),
            page.count,
            page.total_count,
            page.has_more,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(page)
    }

    // =========================================================================
    // Work Item Operations
    // =========================================================================

    /// Run a WIQL statement and return matching ids in result order
    pub async fn query_work_item_ids(&self, project: &str, wiql: &str) -> DevOpsResult<Vec<i64>> {
        let start = Instant::now();
        info!(
            "Executing WIQL query | org={} project={} wiql_len={}",
            mask_identifier(&self.organization),
            mask_identifier(project),
            wiql.len()
        );
        debug!("WIQL: {}", wiql);

        let mut url = self.endpoint(&[project, "_apis", "wit", "wiql"]);
        url.query_pairs_mut()
            .append_pair("$top", &self.options.max_results.to_string());

        let req = self
            .request(Method::POST, url)
            .json(&WiqlRequest { query: wiql });
        let response = self.execute(req, "Failed to query work items").await?;

        let body: WiqlResponse = Self::decode(response).await?;
        let ids: Vec<i64> = body.work_items.into_iter().map(|w| w.id).collect();

        info!(
            "WIQL query executed | org={} project={} ids={} duration_ms={:.1}",
            mask_identifier(&self.organization),
            mask_identifier(project),
            ids.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(ids)
    }

    /// Fetch full work items, one call per batch, in id order.
    ///
    /// Batches run one after another; the first failing batch aborts the
    /// whole fetch.
    pub async fn fetch_work_items(&self, project: &str, ids: &[i64]) -> DevOpsResult<Vec<RawItem>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let batch_size = self.options.batch_size.max(1);
        info!(
            "Fetching work item details | org={} project={} ids={} batches={}",
            mask_identifier(&self.organization),
            mask_identifier(project),
            ids.len(),
            ids.len().div_ceil(batch_size)
        );
        let mut items = Vec::with_capacity(ids.len());

        for batch in ids.chunks(batch_size) {
            let ids_param = batch
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(",");

            let mut url = self.endpoint(&[project, "_apis", "wit", "workitems"]);
            url.query_pairs_mut()
                .append_pair("ids", &ids_param)
                .append_pair("$expand", "relations");

            let response = self
                .execute(
                    self.request(Method::GET, url),
                    "Failed to fetch work item details",
                )
                .await?;
            let envelope: WorkItemsEnvelope = Self::decode(response).await?;
            items.extend(envelope.value);

            info!(
                "Fetched work item batch | org={} project={} batch_size={} accumulated={}",
                mask_identifier(&self.organization),
                mask_identifier(project),
                batch.len(),
                items.len()
            );
        }

        info!(
            "Work item details fetched | org={} project={} total={} duration_ms={:.1}",
            mask_identifier(&self.organization),
            mask_identifier(project),
            items.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(items)
    }
}
