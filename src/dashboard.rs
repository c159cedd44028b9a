use serde::Serialize;
use tracing::{info, warn};

use crate::comparison::build_comparison;
use crate::config::GlobeSettings;
use crate::dataset::{Dataset, TyphoonRecord};
use crate::detail::DetailPanel;
use crate::error::RenderError;
use crate::figure::Figure;
use crate::globe::build_globe;

/// The single piece of UI state: which record the detail view shows.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    record: &'a TyphoonRecord,
}

impl<'a> Selection<'a> {
    /// Falls back to the first record when nothing has been picked yet.
    pub fn resolve(dataset: &'a Dataset, requested: Option<&str>) -> Result<Self, RenderError> {
        let record = match requested {
            Some(name) => dataset
                .get(name)
                .ok_or_else(|| RenderError::UnknownTyphoon(name.to_string()))?,
            None => dataset.first().ok_or(RenderError::EmptyDataset)?,
        };
        Ok(Self { record })
    }

    pub fn record(&self) -> &'a TyphoonRecord {
        self.record
    }

    pub fn name(&self) -> &'a str {
        &self.record.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GlobePanel {
    Chart { figure: Figure },
    Failed { message: String },
}

impl GlobePanel {
    pub fn figure(&self) -> Option<&Figure> {
        match self {
            GlobePanel::Chart { figure } => Some(figure),
            GlobePanel::Failed { .. } => None,
        }
    }
}

/// Everything one render pass produces.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub options: Vec<SelectOption>,
    pub selected: String,
    pub globe: GlobePanel,
    pub detail: DetailPanel,
    pub comparison: Figure,
}

pub struct Dashboard {
    dataset: Dataset,
    settings: GlobeSettings,
}

impl Dashboard {
    pub fn new(dataset: Dataset, settings: GlobeSettings) -> Self {
        info!(records = dataset.len(), "dashboard ready");
        Self { dataset, settings }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn settings(&self) -> &GlobeSettings {
        &self.settings
    }

    pub fn options(&self) -> Vec<SelectOption> {
        self.dataset
            .records()
            .iter()
            .map(|record| SelectOption {
                value: record.name.clone(),
                label: format!("{} ({})", record.name, record.year),
            })
            .collect()
    }

    /// Builds the globe for a name filter, turning failure into a visible message.
    pub fn globe_panel(&self, name: &str) -> GlobePanel {
        let subset = self.dataset.filter_by_name(name);
        match build_globe(&subset, &self.settings) {
            Ok(figure) => GlobePanel::Chart { figure },
            Err(err) => {
                warn!(typhoon = name, error = %err, "globe visualization failed");
                GlobePanel::Failed {
                    message: format!("Error creating globe visualization: {err}"),
                }
            }
        }
    }

    pub fn render(&self, requested: Option<&str>) -> Result<DashboardView, RenderError> {
        let selection = Selection::resolve(&self.dataset, requested)?;
        let globe = self.globe_panel(selection.name());
        let detail = DetailPanel::from_record(selection.record());
        let comparison = build_comparison(&self.dataset)?;

        Ok(DashboardView {
            options: self.options(),
            selected: selection.name().to_string(),
            globe,
            detail,
            comparison,
        })
    }
}
