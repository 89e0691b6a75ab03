//! Strongly-typed region identifier.

use std::fmt;

/// Identifies a region (node) of the connectivity graph.
///
/// Regions are positional: `RegionId(i)` addresses row and column `i` of
/// the connectivity matrix and entry `i` of every per-region vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

impl RegionId {
    /// Zero-based index into matrices and per-region vectors.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RegionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_id_roundtrips_index() {
        let r = RegionId::from(7u32);
        assert_eq!(r.index(), 7);
        assert_eq!(format!("{r}"), "7");
    }

    #[test]
    fn region_ids_order_by_value() {
        assert!(RegionId(2) < RegionId(10));
    }
}
