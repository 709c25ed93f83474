//! Periodic rods keep their ghost entries consistent with the interior.

use ndarray::s;
use proptest::prelude::*;
use rf_systems::{GHOST_PADDING, Rod, System, Topology};

#[test]
fn ring_closes_on_itself() {
    let rod = Rod::ring("loop", 16, 2.0, 0.1).unwrap();
    let pos = rod.position();

    // Every interior node sits on the circle.
    for k in 1..=16 {
        let r = (pos[[0, k]].powi(2) + pos[[1, k]].powi(2)).sqrt();
        assert!((r - 2.0).abs() < 1e-12, "node {k} off the ring: r={r}");
        assert_eq!(pos[[2, k]], 0.0);
    }

    // Leading ghost is the last node, trailing ghosts the first two.
    assert_eq!(pos.column(0), pos.column(16));
    assert_eq!(pos.column(17), pos.column(1));
    assert_eq!(pos.column(18), pos.column(2));
}

#[test]
fn interior_update_reaches_ghosts_after_sync() {
    let mut system: System = Rod::ring("loop", 10, 1.0, 0.05).unwrap().into();

    let rod = system.as_rod_mut().unwrap();
    rod.position_mut().slice_mut(s![.., 1]).assign(&ndarray::arr1(&[5.0, 6.0, 7.0]));
    rod.position_mut().slice_mut(s![.., 10]).fill(-1.0);
    assert_ne!(rod.position().column(11), rod.position().column(1));

    system.synchronize_periodic_boundary().unwrap();

    let rod = system.as_rod().unwrap();
    assert_eq!(rod.position().column(11).to_vec(), vec![5.0, 6.0, 7.0]);
    assert_eq!(rod.position().column(0).to_vec(), vec![-1.0, -1.0, -1.0]);
}

#[test]
fn topology_flag_is_exposed() {
    let open: System = Rod::straight("line", 4, 1.0, 0.1).unwrap().into();
    let ring: System = Rod::ring("loop", 4, 1.0, 0.1).unwrap().into();

    assert_eq!(open.as_rod().map(Rod::topology), Some(Topology::Open));
    assert_eq!(ring.as_rod().map(Rod::topology), Some(Topology::Periodic));
    assert!(ring.is_periodic());
}

proptest! {
    #[test]
    fn every_field_is_padded_for_any_ring(n_elems in 3_usize..64) {
        let rod = Rod::ring("loop", n_elems, 1.0, 0.05).unwrap();
        let len = n_elems + GHOST_PADDING;
        prop_assert_eq!(rod.n_nodes(), len);
        prop_assert_eq!(rod.velocity().ncols(), len);
        prop_assert_eq!(rod.omega().ncols(), len);
        prop_assert_eq!(rod.radius().len(), len);
        prop_assert_eq!(rod.director().dim(), (3, 3, len));
        prop_assert_eq!(rod.external_torques().ncols(), len);
    }

    #[test]
    fn sync_after_construction_is_stable(n_elems in 3_usize..64) {
        let mut rod = Rod::ring("loop", n_elems, 1.0, 0.05).unwrap();
        let before = rod.position().to_owned();
        rod.synchronize_periodic_boundary().unwrap();
        prop_assert_eq!(rod.position(), before.view());
    }
}
