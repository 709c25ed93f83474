//! Canonical contact order.

use core::fmt;

use rf_systems::{System, SystemKind};

use crate::error::{ContactError, ContactResult};

/// Reject a pair whose second member is a rod unless the first is a rod too.
///
/// Pure check; never reorders the pair.
pub fn check_kind_order(first: SystemKind, second: SystemKind) -> ContactResult<()> {
    if second.is_rod() && !first.is_rod() {
        return Err(ContactError::Order { first, second });
    }
    Ok(())
}

/// Order check on concrete systems. See [`check_kind_order`].
pub fn check_order(system_one: &System, system_two: &System) -> ContactResult<()> {
    check_kind_order(system_one.kind(), system_two.kind())
}

/// Ordered pair of system kinds, the key a driver uses to pick a contact model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKind {
    pub first: SystemKind,
    pub second: SystemKind,
}

impl PairKind {
    pub fn new(first: SystemKind, second: SystemKind) -> Self {
        Self { first, second }
    }

    pub fn of(system_one: &System, system_two: &System) -> Self {
        Self::new(system_one.kind(), system_two.kind())
    }

    /// Order check on the kinds alone, for callers that hold no systems yet.
    pub fn check(self) -> ContactResult<()> {
        check_kind_order(self.first, self.second)
    }
}

impl fmt::Display for PairKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rod_first_pairs_pass() {
        for second in SystemKind::ALL {
            assert!(check_kind_order(SystemKind::Rod, second).is_ok());
        }
    }

    #[test]
    fn non_rod_before_rod_fails() {
        for first in [SystemKind::RigidBody, SystemKind::Surface] {
            assert_eq!(
                check_kind_order(first, SystemKind::Rod),
                Err(ContactError::Order {
                    first,
                    second: SystemKind::Rod
                })
            );
        }
    }

    #[test]
    fn non_rod_pairs_are_vacuous() {
        assert!(check_kind_order(SystemKind::Surface, SystemKind::Surface).is_ok());
        assert!(check_kind_order(SystemKind::RigidBody, SystemKind::Surface).is_ok());
        assert!(check_kind_order(SystemKind::Surface, SystemKind::RigidBody).is_ok());
    }

    #[test]
    fn pair_kind_display_and_check() {
        let pair = PairKind::new(SystemKind::Surface, SystemKind::Rod);
        assert_eq!(pair.to_string(), "surface-rod");
        assert!(pair.check().is_err());
        assert!(PairKind::new(SystemKind::Rod, SystemKind::Surface).check().is_ok());
    }

    fn any_kind() -> impl Strategy<Value = SystemKind> {
        prop::sample::select(SystemKind::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn sorted_pairs_always_pass(a in any_kind(), b in any_kind()) {
            let (first, second) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(PairKind::new(first, second).check().is_ok());
        }

        #[test]
        fn failure_iff_rod_follows_non_rod(a in any_kind(), b in any_kind()) {
            let fails = check_kind_order(a, b).is_err();
            prop_assert_eq!(fails, b.is_rod() && !a.is_rod());
        }
    }
}
