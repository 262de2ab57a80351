use crate::domain::admin::Admin;
use crate::domain::types::AdminId;
use crate::repository::AdminReader;
use crate::services::{ServiceError, ServiceResult};

/// Loads an administrator profile by id.
pub fn get_admin<R>(repo: &R, id: i64) -> ServiceResult<Admin>
where
    R: AdminReader + ?Sized,
{
    let id = AdminId::new(id)?;
    repo.get_admin_by_id(id)
        .map_err(|e| {
            log::error!("Failed to load admin {id}: {e}");
            ServiceError::from(e)
        })?
        .ok_or(ServiceError::NotFound)
}
