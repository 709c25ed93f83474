//! In-place periodic boundary synchronization.
//!
//! Each routine resolves the map against the element (last) axis first, so an
//! invalid map is reported before any write. The copy itself is exactly
//! `PERIODIC_PAIRS` element slices per call and never allocates.

use ndarray::{ArrayBase, Axis, DataMut, Ix1, Ix2, Ix3};

use crate::boundary::BoundaryIndexMap;
use crate::error::FieldResult;

/// Mirror scalar field entries: `field[dst] = field[src]` for each pair.
pub fn synchronize_scalar<A, S>(
    field: &mut ArrayBase<S, Ix1>,
    map: &BoundaryIndexMap,
) -> FieldResult<()>
where
    A: Clone,
    S: DataMut<Elem = A>,
{
    let pairs = map.resolve(field.len())?;
    for (dst, src) in pairs {
        field[dst] = field[src].clone();
    }
    Ok(())
}

/// Mirror whole vectors: `field[.., dst] = field[.., src]` for each pair.
pub fn synchronize_vector<A, S>(
    field: &mut ArrayBase<S, Ix2>,
    map: &BoundaryIndexMap,
) -> FieldResult<()>
where
    A: Clone,
    S: DataMut<Elem = A>,
{
    let pairs = map.resolve(field.len_of(Axis(1)))?;
    for component in 0..field.len_of(Axis(0)) {
        for (dst, src) in pairs {
            field[[component, dst]] = field[[component, src]].clone();
        }
    }
    Ok(())
}

/// Mirror whole matrices: `field[.., .., dst] = field[.., .., src]` for each pair.
pub fn synchronize_matrix<A, S>(
    field: &mut ArrayBase<S, Ix3>,
    map: &BoundaryIndexMap,
) -> FieldResult<()>
where
    A: Clone,
    S: DataMut<Elem = A>,
{
    let pairs = map.resolve(field.len_of(Axis(2)))?;
    for row in 0..field.len_of(Axis(0)) {
        for col in 0..field.len_of(Axis(1)) {
            for (dst, src) in pairs {
                field[[row, col, dst]] = field[[row, col, src]].clone();
            }
        }
    }
    Ok(())
}

/// Fields that can be made periodic with a `BoundaryIndexMap`.
///
/// Implemented for rank 1, 2 and 3 arrays (owned or mutable views) with the
/// element axis last.
pub trait PeriodicField {
    fn synchronize_periodic(&mut self, map: &BoundaryIndexMap) -> FieldResult<()>;
}

impl<A, S> PeriodicField for ArrayBase<S, Ix1>
where
    A: Clone,
    S: DataMut<Elem = A>,
{
    fn synchronize_periodic(&mut self, map: &BoundaryIndexMap) -> FieldResult<()> {
        synchronize_scalar(self, map)
    }
}

impl<A, S> PeriodicField for ArrayBase<S, Ix2>
where
    A: Clone,
    S: DataMut<Elem = A>,
{
    fn synchronize_periodic(&mut self, map: &BoundaryIndexMap) -> FieldResult<()> {
        synchronize_vector(self, map)
    }
}

impl<A, S> PeriodicField for ArrayBase<S, Ix3>
where
    A: Clone,
    S: DataMut<Elem = A>,
{
    fn synchronize_periodic(&mut self, map: &BoundaryIndexMap) -> FieldResult<()> {
        synchronize_matrix(self, map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use ndarray::{Array1, Array2, Array3, s};

    fn ramp_vector(n: usize) -> Array2<f64> {
        Array2::from_shape_fn((3, n), |(c, e)| (100 * c + e) as f64)
    }

    #[test]
    fn scalar_copies_three_pairs() {
        let mut f = Array1::from_shape_fn(13, |e| e as f64);
        synchronize_scalar(&mut f, &BoundaryIndexMap::ring_nodes()).unwrap();
        assert_eq!(f[0], 10.0);
        assert_eq!(f[11], 1.0);
        assert_eq!(f[12], 2.0);
        for e in 1..=10 {
            assert_eq!(f[e], e as f64);
        }
    }

    #[test]
    fn vector_copies_whole_columns() {
        let mut f = ramp_vector(13);
        synchronize_vector(&mut f, &BoundaryIndexMap::ring_nodes()).unwrap();
        for c in 0..3 {
            assert_eq!(f[[c, 0]], (100 * c + 10) as f64);
            assert_eq!(f[[c, 11]], (100 * c + 1) as f64);
            assert_eq!(f[[c, 12]], (100 * c + 2) as f64);
        }
    }

    #[test]
    fn matrix_copies_whole_matrices() {
        let mut f = Array3::from_shape_fn((3, 3, 8), |(r, c, e)| (100 * r + 10 * c + e) as f64);
        synchronize_matrix(&mut f, &BoundaryIndexMap::ring_nodes()).unwrap();
        assert_eq!(f.slice(s![.., .., 0]), f.slice(s![.., .., 5]));
        assert_eq!(f.slice(s![.., .., 6]), f.slice(s![.., .., 1]));
        assert_eq!(f.slice(s![.., .., 7]), f.slice(s![.., .., 2]));
    }

    #[test]
    fn out_of_range_leaves_field_untouched() {
        let mut f = ramp_vector(2);
        let before = f.clone();
        let err = synchronize_vector(&mut f, &BoundaryIndexMap::ring_nodes()).unwrap_err();
        assert!(matches!(err, FieldError::IndexOutOfRange { .. }));
        assert_eq!(f, before);
    }

    #[test]
    fn works_through_mutable_views() {
        let mut f = ramp_vector(13);
        let mut view = f.view_mut();
        view.synchronize_periodic(&BoundaryIndexMap::ring_nodes())
            .unwrap();
        assert_eq!(f[[2, 0]], 210.0);
    }

    #[test]
    fn trait_dispatches_by_rank() {
        let map = BoundaryIndexMap::ring_nodes();
        let mut s = Array1::from_shape_fn(6, |e| e as f64);
        let mut v = Array2::from_shape_fn((3, 6), |(_, e)| e as f64);
        let mut m = Array3::from_shape_fn((3, 3, 6), |(_, _, e)| e as f64);
        s.synchronize_periodic(&map).unwrap();
        v.synchronize_periodic(&map).unwrap();
        m.synchronize_periodic(&map).unwrap();
        assert_eq!(s[0], 3.0);
        assert_eq!(v[[1, 4]], 1.0);
        assert_eq!(m[[2, 2, 5]], 2.0);
    }

    #[test]
    fn generic_over_element_type() {
        let mut f = Array1::from(vec![0_u8, 1, 2, 3, 4, 5, 6]);
        synchronize_scalar(&mut f, &BoundaryIndexMap::ring_nodes()).unwrap();
        assert_eq!(f.to_vec(), vec![4, 1, 2, 3, 4, 1, 2]);
    }
}
