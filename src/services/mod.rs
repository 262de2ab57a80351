//! Business logic of the mock admin API, generic over the repository traits.

use std::cmp::Ordering;

use crate::domain::types::SortDirection;

pub mod admins;
pub mod auth;
pub mod bans;
pub mod dns_records;
pub mod domains;
pub mod errors;
pub mod users;

pub use errors::{ServiceError, ServiceResult};

/// Applies the requested direction to an ascending comparison.
pub(crate) fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
