//! Load lifecycle and the derived view exposed to the presentation layer.
//!
//! The provider owns the canonical series for the lifetime of one load.
//! Readers only ever see immutable snapshots; every view is recomputed
//! from the canonical series on request.

use serde::Serialize;
use tracing::{info, warn};

use crate::http::HttpClient;
use crate::ingest::{parse_source, IngestReport};
use crate::{series, sma, window, LoadError, PriceBar, Timeframe};

/// Load lifecycle: `Idle -> Loading -> {Ready | Error}`.
///
/// `Ready` and `Error` are terminal; there is no reload within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Error(String),
}

/// Snapshot handed across the presentation boundary on each render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesView {
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub visible_bars: Vec<PriceBar>,
    pub timeframe: Timeframe,
    pub scroll_offset: usize,
    pub max_scroll_offset: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Owns the canonical series and the two mutable view parameters.
#[derive(Debug)]
pub struct SeriesProvider {
    state: LoadState,
    canonical: Vec<PriceBar>,
    report: IngestReport,
    timeframe: Timeframe,
    scroll_offset: usize,
}

impl SeriesProvider {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            canonical: Vec::new(),
            report: IngestReport::default(),
            timeframe: Timeframe::default(),
            scroll_offset: 0,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The canonical series, newest-first. Empty unless `Ready`.
    pub fn series(&self) -> &[PriceBar] {
        &self.canonical
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Fetch the raw resource and install the resulting series. Legal only
    /// from `Idle`; later calls are ignored, since the state machine has no
    /// transition back into `Loading`.
    pub async fn load(&mut self, client: &dyn HttpClient, url: &str) {
        if self.state != LoadState::Idle {
            warn!(state = ?self.state, "ignoring load request outside Idle");
            return;
        }
        self.state = LoadState::Loading;
        info!(url, "fetching price series");

        match client.fetch(url).await {
            Ok(response) if response.is_success() => self.install(&response.body),
            Ok(response) => self.fail(LoadError::FetchStatus {
                status: response.status,
            }),
            Err(error) => self.fail(LoadError::Fetch {
                message: error.message().to_owned(),
            }),
        }
    }

    /// Install a series from already-fetched text, e.g. a local file.
    /// Same state rules as `load`.
    pub fn load_text(&mut self, text: &str) {
        if self.state != LoadState::Idle {
            warn!(state = ?self.state, "ignoring load request outside Idle");
            return;
        }
        self.state = LoadState::Loading;
        self.install(text);
    }

    fn install(&mut self, text: &str) {
        let ingestion = match parse_source(text) {
            Ok(ingestion) => ingestion,
            Err(error) => return self.fail(error),
        };

        if ingestion.bars.is_empty() {
            return self.fail(LoadError::EmptySource);
        }

        self.canonical = series::build_series(ingestion.bars);
        self.report = ingestion.report;
        self.state = LoadState::Ready;
        info!(bars = self.canonical.len(), "price series ready");
    }

    fn fail(&mut self, error: LoadError) {
        warn!(%error, "load failed");
        self.state = LoadState::Error(error.to_string());
    }

    /// Switch timeframe. Resets the scroll offset to zero.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
        self.scroll_offset = 0;
    }

    /// Scroll the window. Clamped to `[0, max_scroll_offset]`.
    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.max_scroll_offset());
    }

    pub fn max_scroll_offset(&self) -> usize {
        window::max_scroll_offset(self.canonical.len(), self.timeframe)
    }

    /// Bars visible under the current timeframe and scroll offset.
    pub fn visible_bars(&self) -> Vec<PriceBar> {
        window::select_window(&self.canonical, self.timeframe, self.scroll_offset)
    }

    /// Simple moving average of closes over the current visible window.
    pub fn sma(&self, period: usize) -> Vec<Option<f64>> {
        sma::simple_moving_average(&self.visible_bars(), period)
    }

    /// Immutable render snapshot, recomputed from the canonical series.
    pub fn view(&self) -> SeriesView {
        let error = match &self.state {
            LoadState::Error(message) => Some(message.clone()),
            _ => None,
        };

        SeriesView {
            loading: matches!(self.state, LoadState::Idle | LoadState::Loading),
            error,
            visible_bars: self.visible_bars(),
            timeframe: self.timeframe,
            scroll_offset: self.scroll_offset,
            max_scroll_offset: self.max_scroll_offset(),
            warnings: self.report.warnings(),
        }
    }
}

impl Default for SeriesProvider {
    fn default() -> Self {
        Self::new()
    }
}
