//! Run database capability.
//!
//! Time-dependent detector conditions (currently just the electron
//! lifetime) come from an external run database that this crate does not
//! implement. The lookup is modeled as a trait so the cache and
//! calibration logic stay independent of whatever service ends up behind
//! it; [`StaticRunDatabase`] is the stand-in used until a real
//! time-windowed lookup exists.

use crate::Result;

/// Source of per-run detector conditions.
pub trait RunDatabase {
    /// Electron lifetime in nanoseconds for the given run.
    fn electron_lifetime_ns(&self, run_id: &str) -> Result<f64>;
}

/// Run database stand-in that answers every query with fixed values.
///
/// Returned values are representative of stable detector conditions and
/// carry no per-run information.
#[derive(Debug, Clone, Copy)]
pub struct StaticRunDatabase {
    electron_lifetime_ns: f64,
}

impl StaticRunDatabase {
    /// Creates a stand-in answering with the given electron lifetime.
    #[must_use]
    pub const fn new(electron_lifetime_ns: f64) -> Self {
        Self {
            electron_lifetime_ns,
        }
    }
}

impl Default for StaticRunDatabase {
    fn default() -> Self {
        // 642 us, the long-standing placeholder value.
        Self::new(642e3)
    }
}

impl RunDatabase for StaticRunDatabase {
    fn electron_lifetime_ns(&self, _run_id: &str) -> Result<f64> {
        Ok(self.electron_lifetime_ns)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_static_lifetime_ignores_run_id() {
        let db = StaticRunDatabase::default();
        assert_eq!(db.electron_lifetime_ns("run_000001").unwrap(), 642e3);
        assert_eq!(db.electron_lifetime_ns("run_999999").unwrap(), 642e3);
    }

    #[test]
    fn test_custom_lifetime() {
        let db = StaticRunDatabase::new(500e3);
        assert_eq!(db.electron_lifetime_ns("any").unwrap(), 500e3);
    }

    #[test]
    fn test_trait_object_usability() {
        let db: Box<dyn RunDatabase> = Box::new(StaticRunDatabase::default());
        assert!(db.electron_lifetime_ns("run").is_ok());
    }
}
