//! Enumeration of the measurable units.

use crate::utils::error::CollectError;
use log::warn;
use std::collections::HashSet;

/// Capability that lists every unit a runtime can load
pub trait UnitCatalog {
    fn enumerate(&self) -> Result<Vec<String>, CollectError>;
}

impl<C: UnitCatalog + ?Sized> UnitCatalog for &C {
    fn enumerate(&self) -> Result<Vec<String>, CollectError> {
        (**self).enumerate()
    }
}

/// Catalog backed by a fixed list, for pre-resolved platforms and tests
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    units: Vec<String>,
}

impl StaticCatalog {
    pub fn new<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            units: units.into_iter().map(Into::into).collect(),
        }
    }
}

impl UnitCatalog for StaticCatalog {
    fn enumerate(&self) -> Result<Vec<String>, CollectError> {
        Ok(dedup_units(self.units.clone()))
    }
}

/// Drop empty and repeated names, keeping first-seen order
///
/// **Public** - shared by every catalog implementation
pub fn dedup_units(units: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(units.len());
    units
        .into_iter()
        .filter(|unit| {
            if unit.is_empty() {
                warn!("Skipping empty unit name");
                return false;
            }
            seen.insert(unit.clone())
        })
        .collect()
}
