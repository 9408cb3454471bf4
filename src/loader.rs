//! Task Loading
//!
//! Fetches are never cancelled. Each one takes a ticket and only the
//! newest ticket may write its result into the grid.

use grid_model::ingest::{normalize, IngestReport};
use grid_model::{GridDimensions, GridModel, Item};

use crate::commands::FetchError;

/// Where the last load stands, for the status bar
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    /// Showing the seed layout
    #[default]
    Idle,
    Loading,
    Loaded { accepted: usize, dropped: usize },
    Failed(String),
}

impl LoadStatus {
    pub fn label(&self) -> String {
        match self {
            LoadStatus::Idle => "demo layout".to_string(),
            LoadStatus::Loading => "loading tasks...".to_string(),
            LoadStatus::Loaded { accepted, dropped: 0 } => format!("{} tasks loaded", accepted),
            LoadStatus::Loaded { accepted, dropped } => {
                format!("{} tasks loaded, {} dropped", accepted, dropped)
            }
            LoadStatus::Failed(msg) => format!("load failed: {}", msg),
        }
    }
}

/// Ticket 0 is never current
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadTicket(u64);

#[derive(Debug, Default)]
pub struct LoadSequencer {
    latest: u64,
}

impl LoadSequencer {
    pub fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Apply a successful fetch: normalize against the current bounds and
/// replace the whole collection.
pub fn apply_tasks(model: &mut GridModel, tasks: Vec<Item>, dimensions: GridDimensions) -> IngestReport {
    let (items, report) = normalize(tasks, dimensions);
    model.replace_items(items);
    log::info!(
        "[APP] Loaded {} tasks ({} dropped)",
        report.accepted,
        report.rejected.len()
    );
    report
}

/// Status after a finished fetch. A failure leaves the model untouched.
pub fn finish_load(
    model: &mut GridModel,
    result: Result<Vec<Item>, FetchError>,
    dimensions: GridDimensions,
) -> LoadStatus {
    match result {
        Ok(tasks) => {
            let report = apply_tasks(model, tasks, dimensions);
            LoadStatus::Loaded {
                accepted: report.accepted,
                dropped: report.rejected.len(),
            }
        }
        Err(err) => {
            log::error!("[APP] Error fetching tasks: {}", err);
            LoadStatus::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_items;

    #[test]
    fn test_newest_ticket_wins() {
        let mut seq = LoadSequencer::default();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(!seq.is_current(LoadTicket::default()));
    }

    #[test]
    fn test_failure_keeps_items() {
        let mut model = GridModel::new(seed_items());
        let status = finish_load(&mut model, Err(FetchError::Status(500)), GridDimensions::default());

        assert_eq!(status, LoadStatus::Failed("HTTP error! status: 500".to_string()));
        assert_eq!(model.items(), seed_items().as_slice());
        assert_eq!(model.revision(), 0);
    }

    #[test]
    fn test_empty_result_clears_grid() {
        let mut model = GridModel::new(seed_items());
        let status = finish_load(&mut model, Ok(Vec::new()), GridDimensions::default());

        assert_eq!(status, LoadStatus::Loaded { accepted: 0, dropped: 0 });
        assert!(model.is_empty());
        assert_eq!(model.occupant_at(0, 0), None);
    }

    #[test]
    fn test_overlapping_result_is_trimmed() {
        let mut model = GridModel::default();
        let tasks = vec![
            Item::new("a", 0, 0, 4, true),
            Item::new("b", 0, 2, 4, true),
        ];
        let status = finish_load(&mut model, Ok(tasks), GridDimensions::default());

        assert_eq!(status, LoadStatus::Loaded { accepted: 1, dropped: 1 });
        assert_eq!(status.label(), "1 tasks loaded, 1 dropped");
        assert_eq!(model.len(), 1);
    }
}
