pub mod classes;
pub mod classify;
pub mod conformity;
pub mod designation;
pub mod dispatch;
pub mod schema;
pub mod shared;
pub mod stats;

/// Whether a command found everything it checked in order.
///
/// `main` maps `Nonconforming` to exit code 2 when
/// `evaluation.fail_on_nonconformity` is set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Conforming,
    Nonconforming,
}

impl Outcome {
    #[must_use]
    pub const fn from_passed(passed: bool) -> Self {
        if passed {
            Self::Conforming
        } else {
            Self::Nonconforming
        }
    }
}
