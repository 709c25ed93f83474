//! Ghost/source index table for periodic (ring) fields.
//!
//! A ring is stored as an open array padded with ghost entries. The
//! `BoundaryIndexMap` names which ghost positions mirror which interior
//! positions. Indices follow the "negative counts from the end" convention
//! and are normalized explicitly against the field length in [`resolve`].
//!
//! [`resolve`]: BoundaryIndexMap::resolve

use crate::error::{FieldError, FieldResult};

/// Number of ghost/source pairs. Matches the stencil half-width of the
/// kinematic operators; the table shape is fixed.
pub const PERIODIC_PAIRS: usize = 3;

/// Immutable 2x3 table of (destination, source) element indices.
///
/// Row 0 holds destinations, row 1 holds sources. After synchronization
/// `field[destination[i]] == field[source[i]]` for every pair `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundaryIndexMap {
    destinations: [isize; PERIODIC_PAIRS],
    sources: [isize; PERIODIC_PAIRS],
}

impl BoundaryIndexMap {
    /// Build a map from its destination and source rows.
    ///
    /// Fails with `InvalidIndexMap` if a destination is listed twice or if an
    /// index appears both as a destination and as a source.
    pub fn new(
        destinations: [isize; PERIODIC_PAIRS],
        sources: [isize; PERIODIC_PAIRS],
    ) -> FieldResult<Self> {
        for (i, &dst) in destinations.iter().enumerate() {
            if destinations[i + 1..].contains(&dst) {
                return Err(FieldError::InvalidIndexMap {
                    what: format!("destination {dst} is listed more than once"),
                });
            }
            if sources.contains(&dst) {
                return Err(FieldError::InvalidIndexMap {
                    what: format!("index {dst} is both a destination and a source"),
                });
            }
        }
        Ok(Self {
            destinations,
            sources,
        })
    }

    /// Build a map from a `[destinations, sources]` table.
    pub fn from_table(table: [[isize; PERIODIC_PAIRS]; 2]) -> FieldResult<Self> {
        let [destinations, sources] = table;
        Self::new(destinations, sources)
    }

    /// Build a map from untyped rows, checking the three-pair shape.
    pub fn from_rows(destinations: &[isize], sources: &[isize]) -> FieldResult<Self> {
        let destinations: [isize; PERIODIC_PAIRS] =
            destinations
                .try_into()
                .map_err(|_| FieldError::InvalidIndexMap {
                    what: format!(
                        "expected {PERIODIC_PAIRS} destinations, got {}",
                        destinations.len()
                    ),
                })?;
        let sources: [isize; PERIODIC_PAIRS] =
            sources
                .try_into()
                .map_err(|_| FieldError::InvalidIndexMap {
                    what: format!("expected {PERIODIC_PAIRS} sources, got {}", sources.len()),
                })?;
        Self::new(destinations, sources)
    }

    /// Canonical map of a ring stored as `[ghost, 1..=n, ghost, ghost]`.
    ///
    /// The leading ghost mirrors the last interior entry, the two trailing
    /// ghosts mirror the first two interior entries.
    pub fn ring_nodes() -> Self {
        Self {
            destinations: [0, -2, -1],
            sources: [-3, 1, 2],
        }
    }

    pub fn destinations(&self) -> [isize; PERIODIC_PAIRS] {
        self.destinations
    }

    pub fn sources(&self) -> [isize; PERIODIC_PAIRS] {
        self.sources
    }

    /// Row 0 destinations, row 1 sources.
    pub fn as_table(&self) -> [[isize; PERIODIC_PAIRS]; 2] {
        [self.destinations, self.sources]
    }

    /// `(destination, source)` pairs in table order.
    pub fn pairs(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.destinations
            .iter()
            .copied()
            .zip(self.sources.iter().copied())
    }

    /// Smallest element-axis length for which [`resolve`] succeeds.
    ///
    /// Every index must be in range and no two pairs may alias once negative
    /// indices are normalized. Beyond `max_forward + max_backward` a forward
    /// and a backward index never land on the same element.
    ///
    /// [`resolve`]: BoundaryIndexMap::resolve
    pub fn min_len(&self) -> usize {
        let indices = self.destinations.iter().chain(self.sources.iter());
        let max_forward = indices.clone().filter(|&&i| i >= 0).map(|&i| i.unsigned_abs()).max();
        let max_backward = indices.filter(|&&i| i < 0).map(|&i| i.unsigned_abs()).max();

        let in_range = max_forward
            .map_or(0, |i| i + 1)
            .max(max_backward.unwrap_or(0));
        let alias_free = max_forward.unwrap_or(0) + max_backward.unwrap_or(0) + 1;

        (in_range..alias_free)
            .find(|&len| self.resolve(len).is_ok())
            .unwrap_or(alias_free)
    }

    /// Normalize every index against an element axis of length `len`.
    ///
    /// Returns the resolved `(destination, source)` pairs. Fails with
    /// `IndexOutOfRange` for an index outside `[-len, len)` and with
    /// `InvalidIndexMap` if two pairs alias once resolved (a destination that
    /// is also another pair's destination or any pair's source).
    pub fn resolve(&self, len: usize) -> FieldResult<[(usize, usize); PERIODIC_PAIRS]> {
        let mut resolved = [(0, 0); PERIODIC_PAIRS];
        for (slot, (dst, src)) in resolved.iter_mut().zip(self.pairs()) {
            *slot = (resolve_index(dst, len)?, resolve_index(src, len)?);
        }

        for (i, &(dst, _)) in resolved.iter().enumerate() {
            let aliases_dst = resolved[i + 1..].iter().any(|&(other, _)| other == dst);
            let aliases_src = resolved.iter().any(|&(_, src)| src == dst);
            if aliases_dst || aliases_src {
                return Err(FieldError::InvalidIndexMap {
                    what: format!(
                        "destination {} aliases another pair at element {dst} (len={len})",
                        self.destinations[i]
                    ),
                });
            }
        }

        Ok(resolved)
    }
}

impl Default for BoundaryIndexMap {
    fn default() -> Self {
        Self::ring_nodes()
    }
}

/// Resolve one possibly negative index against an axis of length `len`.
///
/// `-1` is the last element, `-len` the first.
pub fn resolve_index(index: isize, len: usize) -> FieldResult<usize> {
    let resolved = if index >= 0 {
        Some(index.unsigned_abs())
    } else {
        len.checked_sub(index.unsigned_abs())
    };
    match resolved {
        Some(i) if i < len => Ok(i),
        _ => Err(FieldError::IndexOutOfRange { index, len }),
    }
}
