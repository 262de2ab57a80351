//! Banning and unbanning platform users.

use crate::domain::types::{AdminId, UserId};
use crate::domain::user_ban::UserBanDetails;
use crate::dto::ban::{BanUserRequest, UnbanUserRequest};
use crate::repository::{BanReader, BanWriter};
use crate::services::{ServiceError, ServiceResult};

fn load_details<R>(repo: &R, user_id: UserId) -> ServiceResult<UserBanDetails>
where
    R: BanReader + ?Sized,
{
    repo.get_ban_details(user_id)
        .map_err(|e| {
            log::error!("Failed to load ban details of user {user_id}: {e}");
            ServiceError::from(e)
        })?
        .ok_or(ServiceError::NotFound)
}

/// Bans a user who is not banned yet.
pub fn ban_user<R>(
    repo: &R,
    admin_id: AdminId,
    request: BanUserRequest,
) -> ServiceResult<UserBanDetails>
where
    R: BanReader + BanWriter + ?Sized,
{
    let details = load_details(repo, request.user_id)?;
    if details.is_banned {
        return Err(ServiceError::Conflict("User is already banned".to_string()));
    }

    let details = repo
        .ban_user(request.user_id, &request.ban_reason, admin_id)
        .map_err(ServiceError::from)?;
    log::info!(
        "Admin {admin_id} banned user {}: {}",
        request.user_id,
        request.ban_reason
    );
    Ok(details)
}

/// Lifts the ban of a banned user.
pub fn unban_user<R>(repo: &R, request: UnbanUserRequest) -> ServiceResult<UserBanDetails>
where
    R: BanReader + BanWriter + ?Sized,
{
    let details = load_details(repo, request.user_id)?;
    if !details.is_banned {
        return Err(ServiceError::Conflict("User is not banned".to_string()));
    }

    let details = repo
        .unban_user(request.user_id)
        .map_err(ServiceError::from)?;
    log::info!("User {} unbanned", request.user_id);
    Ok(details)
}

pub fn ban_status<R>(repo: &R, user_id: i64) -> ServiceResult<bool>
where
    R: BanReader + ?Sized,
{
    let user_id = UserId::new(user_id)?;
    Ok(load_details(repo, user_id)?.is_banned)
}

pub fn ban_details<R>(repo: &R, user_id: i64) -> ServiceResult<UserBanDetails>
where
    R: BanReader + ?Sized,
{
    let user_id = UserId::new(user_id)?;
    load_details(repo, user_id)
}
