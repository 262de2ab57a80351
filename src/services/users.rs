use crate::domain::user::UserInfo;
use crate::dto::query::{ListQuery, UserQuery, UserSortField};
use crate::pagination::Page;
use crate::repository::UserReader;
use crate::services::{ServiceError, ServiceResult, directed};

fn matches(query: &UserQuery, user: &UserInfo) -> bool {
    query.user_id.is_none_or(|id| user.id == id)
        && query.role.is_none_or(|role| user.role == role)
        && query
            .create_time_start
            .is_none_or(|start| user.create_time >= start)
        && query
            .create_time_end
            .is_none_or(|end| user.create_time <= end)
        && query
            .keyword
            .as_deref()
            .is_none_or(|keyword| user.matches_keyword(keyword))
}

/// Filters, sorts and paginates the platform users.
pub fn list_users<R>(repo: &R, query: UserQuery) -> ServiceResult<Page<UserInfo>>
where
    R: UserReader + ?Sized,
{
    let query = query.normalized();

    let mut users = repo.list_users().map_err(|e| {
        log::error!("Failed to list users: {e}");
        ServiceError::from(e)
    })?;
    users.retain(|user| matches(&query, user));

    users.sort_by(|a, b| {
        let ordering = match query.sort_by {
            UserSortField::Id => a.id.cmp(&b.id),
            UserSortField::Username => a.username.cmp(&b.username),
            UserSortField::Email => a.email.cmp(&b.email),
            UserSortField::CreateTime => a.create_time.cmp(&b.create_time),
            UserSortField::UpdateTime => a.update_time.cmp(&b.update_time),
        };
        directed(ordering, query.sort_dir)
    });

    Ok(Page::slice(users, query.page, query.size))
}
