//! Data and subset input slots.
//!
//! The analysis layer feeds a primary table and, optionally, a subset of it
//! to highlight. [`DataInputs`] holds both and keeps them aligned: a subset
//! whose columns do not match the primary domain is rejected with a
//! user-visible warning instead of a failure, and the warning is cleared
//! once an aligned subset (or compatible data) arrives.

use crate::table::DataTable;
use tracing::warn;

/// Input slots for a primary table and an optional subset table.
#[derive(Debug, Default)]
pub struct DataInputs {
    data: Option<DataTable>,
    raw_subset: Option<DataTable>,
    subset: Option<DataTable>,
    warning: Option<String>,
}

impl DataInputs {
    /// Creates empty input slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the primary table.
    ///
    /// A subset received earlier is re-aligned against the new data; a
    /// subset received before any data is processed now.
    pub fn set_data(&mut self, data: Option<DataTable>) {
        self.data = data;
        self.realign();
    }

    /// Replaces the subset table.
    ///
    /// When no primary data is present yet, the subset is held unprocessed
    /// until data arrives.
    pub fn set_subset(&mut self, subset: Option<DataTable>) {
        self.raw_subset = subset;
        self.realign();
    }

    /// Returns the primary table, if set.
    pub fn data(&self) -> Option<&DataTable> {
        self.data.as_ref()
    }

    /// Returns the subset projected onto the primary domain, if aligned.
    pub fn subset(&self) -> Option<&DataTable> {
        self.subset.as_ref()
    }

    /// Returns the current alignment warning, if any.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    fn realign(&mut self) {
        self.subset = None;
        self.warning = None;

        let (Some(data), Some(raw)) = (&self.data, &self.raw_subset) else {
            return;
        };

        match raw.select(data.domain()) {
            Ok(projected) => self.subset = Some(projected),
            Err(e) => {
                let message = format!(
                    "data and subset data do not have compatible domains ({e})"
                );
                warn!("{message}");
                self.warning = Some(message);
            }
        }
    }
}
