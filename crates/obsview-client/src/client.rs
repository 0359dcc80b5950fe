//! Typed calls for every endpoint the dashboard reads or writes

use crate::config::ClientConfig;
use crate::error::ClientError;
use obsview_wire::{
    CostByModel, CreateEvaluation, DashboardMetrics, EvaluationCreated, EvaluationPage,
    EvaluationStats, LatencyBucket, ModelPerformance, ObservationRecord, PromptEvaluation,
    PromptPage, PromptStats, PromptTrend, SlowestTrace, TopPrompt, TraceSummary, UsageTrend,
};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Filters for trace and observation listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceQuery {
    pub limit: usize,
    pub offset: usize,
    pub search: Option<String>,
}

impl Default for TraceQuery {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            search: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

/// Trace header and its complete observation list, fetched together
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSnapshot {
    pub trace: TraceSummary,
    pub observations: Vec<ObservationRecord>,
}

/// Headline metrics plus the breakdowns shown next to them
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOverview {
    pub metrics: DashboardMetrics,
    pub latency_distribution: Vec<LatencyBucket>,
    pub cost_by_model: Vec<CostByModel>,
    pub slowest_traces: Vec<SlowestTrace>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromptAnalytics {
    pub stats: PromptStats,
    pub top_prompts: Vec<TopPrompt>,
    pub evaluations: EvaluationStats,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base = Url::parse(&config.base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: config.base_url,
                reason: "not a hierarchical url".to_string(),
            });
        }
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { base, http })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `new` rejects cannot-be-a-base urls, so segments are always available
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub async fn list_traces(&self, query: &TraceQuery) -> Result<Vec<TraceSummary>, ClientError> {
        let url = with_listing(self.endpoint(&["traces"]), query);
        self.get_json(url, "list traces").await
    }

    pub async fn trace(&self, trace_id: &str) -> Result<TraceSummary, ClientError> {
        self.get_json(self.endpoint(&["traces", trace_id]), "fetch trace details")
            .await
    }

    pub async fn trace_observations(
        &self,
        trace_id: &str,
    ) -> Result<Vec<ObservationRecord>, ClientError> {
        let url = self.endpoint(&["traces", trace_id, "observations"]);
        self.get_json(url, "fetch trace observations").await
    }

    /// Header and observations fetched concurrently; either failure fails both
    pub async fn trace_snapshot(&self, trace_id: &str) -> Result<TraceSnapshot, ClientError> {
        let (trace, observations) =
            tokio::try_join!(self.trace(trace_id), self.trace_observations(trace_id))?;
        debug!(trace_id, observations = observations.len(), "fetched trace snapshot");
        Ok(TraceSnapshot {
            trace,
            observations,
        })
    }

    pub async fn list_observations(
        &self,
        query: &TraceQuery,
    ) -> Result<Vec<ObservationRecord>, ClientError> {
        let url = with_listing(self.endpoint(&["observations"]), query);
        self.get_json(url, "list observations").await
    }

    pub async fn create_evaluation(
        &self,
        request: &CreateEvaluation,
    ) -> Result<EvaluationCreated, ClientError> {
        let url = self.endpoint(&["evaluations"]);
        debug!(%url, name = %request.name, "POST");
        let response = self.http.post(url).json(request).send().await?;
        decode(response, "create evaluation").await
    }

    pub async fn list_evaluations(&self, page: Page) -> Result<EvaluationPage, ClientError> {
        let url = with_page(self.endpoint(&["evaluations"]), page);
        self.get_json(url, "list evaluations").await
    }

    pub async fn list_prompts(&self, page: Page) -> Result<PromptPage, ClientError> {
        let url = with_page(self.endpoint(&["promptops", "prompts"]), page);
        self.get_json(url, "list prompts").await
    }

    pub async fn evaluate_prompt(&self, prompt_id: &str) -> Result<PromptEvaluation, ClientError> {
        let url = self.endpoint(&["promptops", "prompts", prompt_id, "evaluate"]);
        debug!(%url, "POST");
        let response = self.http.post(url).send().await?;
        decode(response, "evaluate prompt").await
    }

    pub async fn dashboard_metrics(&self) -> Result<DashboardMetrics, ClientError> {
        self.get_json(self.endpoint(&["dashboard", "metrics"]), "fetch dashboard metrics")
            .await
    }

    /// Daily totals for the last seven days
    pub async fn usage_trends(&self) -> Result<Vec<UsageTrend>, ClientError> {
        self.get_json(self.endpoint(&["dashboard", "usage-trends"]), "fetch usage trends")
            .await
    }

    pub async fn model_performance(&self) -> Result<Vec<ModelPerformance>, ClientError> {
        let url = self.endpoint(&["dashboard", "model-performance"]);
        self.get_json(url, "fetch model performance").await
    }

    pub async fn cost_by_model(&self) -> Result<Vec<CostByModel>, ClientError> {
        self.get_json(self.endpoint(&["dashboard", "cost-by-model"]), "fetch cost by model")
            .await
    }

    pub async fn latency_distribution(&self) -> Result<Vec<LatencyBucket>, ClientError> {
        let url = self.endpoint(&["dashboard", "latency-distribution"]);
        self.get_json(url, "fetch latency distribution").await
    }

    pub async fn slowest_traces(&self, limit: usize) -> Result<Vec<SlowestTrace>, ClientError> {
        let mut url = self.endpoint(&["dashboard", "slowest-traces"]);
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        self.get_json(url, "fetch slowest traces").await
    }

    pub async fn dashboard_overview(&self, slowest: usize) -> Result<DashboardOverview, ClientError> {
        let (metrics, latency_distribution, cost_by_model, slowest_traces) = tokio::try_join!(
            self.dashboard_metrics(),
            self.latency_distribution(),
            self.cost_by_model(),
            self.slowest_traces(slowest),
        )?;
        Ok(DashboardOverview {
            metrics,
            latency_distribution,
            cost_by_model,
            slowest_traces,
        })
    }

    pub async fn prompt_stats(&self) -> Result<PromptStats, ClientError> {
        self.get_json(self.endpoint(&["promptops", "stats"]), "fetch prompt stats")
            .await
    }

    pub async fn top_prompts(&self) -> Result<Vec<TopPrompt>, ClientError> {
        self.get_json(self.endpoint(&["promptops", "top-prompts"]), "fetch top prompts")
            .await
    }

    pub async fn prompt_trends(&self) -> Result<Vec<PromptTrend>, ClientError> {
        self.get_json(self.endpoint(&["promptops", "trends"]), "fetch prompt trends")
            .await
    }

    pub async fn evaluation_stats(&self) -> Result<EvaluationStats, ClientError> {
        let url = self.endpoint(&["promptops", "evaluations", "stats"]);
        self.get_json(url, "fetch evaluation stats").await
    }

    pub async fn prompt_analytics(&self) -> Result<PromptAnalytics, ClientError> {
        let (stats, top_prompts, evaluations) = tokio::try_join!(
            self.prompt_stats(),
            self.top_prompts(),
            self.evaluation_stats(),
        )?;
        Ok(PromptAnalytics {
            stats,
            top_prompts,
            evaluations,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        what: &'static str,
    ) -> Result<T, ClientError> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        decode(response, what).await
    }
}

fn with_listing(mut url: Url, query: &TraceQuery) -> Url {
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("limit", &query.limit.to_string())
            .append_pair("offset", &query.offset.to_string());
        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.append_pair("search", search);
        }
    }
    url
}

fn with_page(mut url: Url, page: Page) -> Url {
    url.query_pairs_mut()
        .append_pair("limit", &page.limit.to_string())
        .append_pair("offset", &page.offset.to_string());
    url
}

async fn decode<T: DeserializeOwned>(
    response: Response,
    what: &'static str,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        let detail = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
            .unwrap_or_else(|| format!("failed to {}", what));
        return Err(ClientError::Status {
            status: status.as_u16(),
            detail,
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|source| ClientError::Decode { what, source })
}
