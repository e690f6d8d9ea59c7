//! Backlog orchestration
//!
//! One linear pipeline per request: resolve credentials, resolve the date
//! window, build the WIQL statement, query ids, fetch details in batches,
//! normalize, categorize and assemble the result. All local validation runs
//! before the first outbound call.

use crate::service::credentials::{Credentials, non_empty};
use crate::{
    ApiError, ApiResult, AppState, BacklogRequest, DiagnosticsQuery, DiagnosticsResponse,
    DiagnosticsSample, ProjectsQuery,
};

use backlog_config::Config;
use backlog_core::{
    BacklogMetadata, BacklogResult, DateRange, FilterSet, NormalizedItem, ProjectsPage,
    build_wiql, categorize, mask_identifier, normalize_item, work_item_web_url,
};
use backlog_devops::{ClientOptions, DevOpsClient};

use std::collections::BTreeMap;
use std::time::Instant;

use log::info;

const NO_TYPE: &str = "(none)";

pub struct BacklogService<'a> {
    config: &'a Config,
    http: &'a reqwest::Client,
}

impl<'a> BacklogService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            config: &state.config,
            http: &state.http,
        }
    }

    // =========================================================================
    // Backlog
    // =========================================================================

    /// Fetch, normalize and categorize the backlog described by `request`
    pub async fn fetch_backlog(&self, request: BacklogRequest) -> ApiResult<BacklogResult> {
        let credentials = Credentials::resolve(
            request.organization.as_deref(),
            request.pat.as_deref(),
            &self.config.devops,
        )?;
        let project = self.resolve_project(request.project_name.as_deref())?;
        let range = self.resolve_date_range(
            request.start_date.as_deref(),
            request.end_date.as_deref(),
            request.year,
            request.month,
        )?;
        let filters = request.filters.filter(|f| !f.is_empty());

        let start = Instant::now();
        info!(
            "Backlog request | org={} project={} start={} end={} filters={}",
            mask_identifier(&credentials.organization),
            mask_identifier(&project),
            range.and_then(|r| r.start_str()).as_deref().unwrap_or("none"),
            range.and_then(|r| r.end_str()).as_deref().unwrap_or("none"),
            filters.as_ref().map(FilterSet::summarize).as_deref().unwrap_or("none"),
        );

        let client = self.client(&credentials)?;
        let wiql = build_wiql(&project, range.as_ref(), filters.as_ref());
        let metadata = BacklogMetadata::new(
            &credentials.organization,
            &project,
            range.as_ref(),
            filters.as_ref(),
        );

        let ids = client.query_work_item_ids(&project, &wiql).await?;
        if ids.is_empty() {
            info!(
                "Backlog empty | org={} project={} duration_ms={:.1}",
                mask_identifier(&credentials.organization),
                mask_identifier(&project),
                start.elapsed().as_secs_f64() * 1000.0
            );
            return Ok(BacklogResult::empty(metadata));
        }

        let raw_items = client.fetch_work_items(&project, &ids).await?;
        let items: Vec<NormalizedItem> = raw_items.iter().map(normalize_item).collect();
        let (parents, children) = categorize(items);
        let result = BacklogResult::new(parents, children, metadata);

        info!(
            "Backlog response | org={} project={} total={} parents={} children={} duration_ms={:.1}",
            mask_identifier(&credentials.organization),
            mask_identifier(&project),
            result.total_items,
            result.metadata.total_parents,
            result.metadata.total_children,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(result)
    }

    /// Unfiltered, open-ended fetch summarized by work item type
    pub async fn diagnostics(&self, query: DiagnosticsQuery) -> ApiResult<DiagnosticsResponse> {
        let credentials = Credentials::resolve(
            query.organization.as_deref(),
            query.pat.as_deref(),
            &self.config.devops,
        )?;
        let project = self.resolve_project(query.project_name.as_deref())?;

        let start = Instant::now();
        let client = self.client(&credentials)?;
        let wiql = build_wiql(&project, None, None);

        let ids = client.query_work_item_ids(&project, &wiql).await?;
        let raw_items = client.fetch_work_items(&project, &ids).await?;
        let items: Vec<NormalizedItem> = raw_items.iter().map(normalize_item).collect();

        let mut type_counts: BTreeMap<String, usize> = BTreeMap::new();
        for item in &items {
            let key = item.work_item_type.as_deref().unwrap_or(NO_TYPE);
            *type_counts.entry(key.to_string()).or_default() += 1;
        }

        let total_items = items.len();
        let sample: Vec<DiagnosticsSample> = items
            .into_iter()
            .take(self.config.backlog.diagnostics_sample_size)
            .map(|item| DiagnosticsSample {
                web_url: work_item_web_url(item.id, &credentials.organization, &project),
                item,
            })
            .collect();

        info!(
            "Diagnostics | org={} project={} total={} types={} duration_ms={:.1}",
            mask_identifier(&credentials.organization),
            mask_identifier(&project),
            total_items,
            type_counts.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(DiagnosticsResponse {
            organization: credentials.organization,
            project,
            total_items,
            type_counts,
            sample_size: sample.len(),
            sample,
        })
    }

    // =========================================================================
    // Projects
    // =========================================================================

    /// One page of the organization's projects
    pub async fn list_projects(&self, query: ProjectsQuery) -> ApiResult<ProjectsPage> {
        let credentials = Credentials::resolve(
            query.organization.as_deref(),
            query.pat.as_deref(),
            &self.config.devops,
        )?;
        let top = query.top()?;
        let skip = query.skip()?;
        let continuation_token = query.continuation_token();

        info!(
            "Projects request | org={} top={} skip={} continuation_token={}",
            mask_identifier(&credentials.organization),
            top,
            skip,
            continuation_token.is_some()
        );

        let client = self.client(&credentials)?;
        let page = client.list_projects(top, skip, continuation_token).await?;

        Ok(page)
    }

    // =========================================================================
    // Resolution helpers
    // =========================================================================

    #[track_caller]
    fn resolve_project(&self, project: Option<&str>) -> ApiResult<String> {
        non_empty(project)
            .or_else(|| self.config.devops.default_project())
            .map(String::from)
            .ok_or_else(|| {
                ApiError::validation(
                    "project_name must be provided in the request or configured via AZURE_DEVOPS_PROJECT",
                    Some("project_name"),
                )
            })
    }

    /// Date window for a backlog request.
    ///
    /// Explicit dates win (each bound on its own), then a whole `year`/`month`,
    /// then no window when open-ended queries are enabled, else the current
    /// calendar month.
    pub fn resolve_date_range(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
        year: Option<i32>,
        month: Option<u32>,
    ) -> ApiResult<Option<DateRange>> {
        let start_date = non_empty(start_date);
        let end_date = non_empty(end_date);

        if start_date.is_some() || end_date.is_some() {
            return Ok(Some(DateRange::parse(start_date, end_date)?));
        }

        if let (Some(year), Some(month)) = (year, month) {
            return Ok(Some(DateRange::for_month(year, month)?));
        }

        if self.config.backlog.open_ended_queries {
            return Ok(None);
        }

        Ok(Some(DateRange::current_month()?))
    }

    fn client(&self, credentials: &Credentials) -> ApiResult<DevOpsClient> {
        let options = ClientOptions {
            api_version: self.config.devops.api_version.clone(),
            batch_size: self.config.backlog.batch_size,
            max_results: self.config.backlog.max_results,
        };

        Ok(DevOpsClient::new(
            self.http.clone(),
            &self.config.devops.api_url,
            &credentials.organization,
            &credentials.pat,
            options,
        )?)
    }
}
