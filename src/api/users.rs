//! User Endpoints
//!
//! List/create/update against `/users`. The search text travels as `name`,
//! and the endpoint only understands name ordering (`sortOrder`), so the
//! parameter is sent just while sorting by name.

use serde::Serialize;

use super::{get_json, post_json, put_json, ApiError};
use crate::controller::{ListQuery, UserFilters};
use crate::models::{ApiUser, Paginated, SortDirection, SortField, UserRole, UserStatus};
use crate::pagination::{skip_for_page, PAGE_SIZE};

/// Query parameters for the users list, derived from controller state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListUsersParams {
    pub name: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub page: u32,
    pub status: Option<UserStatus>,
    pub user_type: Option<UserRole>,
    pub project: Option<String>,
}

impl ListUsersParams {
    /// Snapshot of the controller with the debounced search text applied.
    pub fn from_query(query: &ListQuery<UserFilters>, search: &str) -> Self {
        Self {
            name: search.to_string(),
            sort_field: query.sort_field,
            sort_direction: query.sort_direction,
            page: query.page,
            status: query.filters.status,
            user_type: query.filters.user_type,
            project: query.filters.project.clone(),
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.name.is_empty() {
            params.push(("name", self.name.clone()));
        }
        if self.sort_field == SortField::Name {
            params.push(("sortOrder", self.sort_direction.as_str().to_string()));
        }
        params.push(("skip", skip_for_page(self.page).to_string()));
        params.push(("take", PAGE_SIZE.to_string()));
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(role) = self.user_type {
            params.push(("userType", role.as_str().to_string()));
        }
        if let Some(project) = &self.project {
            if !project.is_empty() {
                params.push(("project", project.clone()));
            }
        }
        params
    }
}

pub async fn list_users(
    token: &str,
    params: &ListUsersParams,
) -> Result<Paginated<ApiUser>, ApiError> {
    get_json("/users", &params.to_query(), token).await
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl CreateUserParams {
    pub fn new(
        name: &str,
        email: &str,
        password: String,
        role: UserRole,
        status: Option<UserStatus>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password,
            role,
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserParams {
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub user_type: UserRole,
}

impl UpdateUserParams {
    pub fn new(name: &str, email: &str, status: UserStatus, user_type: UserRole) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            status,
            user_type,
        }
    }
}

pub async fn create_user(token: &str, params: &CreateUserParams) -> Result<ApiUser, ApiError> {
    post_json("/users", params, token).await
}

pub async fn update_user(
    token: &str,
    id: &str,
    params: &UpdateUserParams,
) -> Result<ApiUser, ApiError> {
    put_json(&format!("/users/{id}"), params, token).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_default_query_sends_only_order_and_paging() {
        let query = ListQuery::<UserFilters>::default();
        let params = ListUsersParams::from_query(&query, "").to_query();

        assert_eq!(lookup(&params, "name"), None);
        assert_eq!(lookup(&params, "sortOrder"), Some("asc"));
        assert_eq!(lookup(&params, "skip"), Some("0"));
        assert_eq!(lookup(&params, "take"), Some("10"));
        assert_eq!(lookup(&params, "status"), None);
        assert_eq!(lookup(&params, "userType"), None);
        assert_eq!(lookup(&params, "project"), None);
    }

    #[test]
    fn test_sort_order_only_sent_for_name_sorting() {
        let mut query = ListQuery::<UserFilters>::default();
        query.toggle_sort(SortField::Status);
        let params = ListUsersParams::from_query(&query, "").to_query();
        assert_eq!(lookup(&params, "sortOrder"), None);
    }

    #[test]
    fn test_filters_and_search_are_sent_when_set() {
        let mut query = ListQuery::<UserFilters>::default();
        query.set_search("alice".to_string());
        query.update_filters(|f| {
            f.status = Some(UserStatus::Red);
            f.user_type = Some(UserRole::Admin);
            f.project = Some("Atlas".to_string());
        });
        query.set_page(2);

        let params = ListUsersParams::from_query(&query, "alice").to_query();
        assert_eq!(lookup(&params, "name"), Some("alice"));
        assert_eq!(lookup(&params, "status"), Some("RED"));
        assert_eq!(lookup(&params, "userType"), Some("ADMIN"));
        assert_eq!(lookup(&params, "project"), Some("Atlas"));
        assert_eq!(lookup(&params, "skip"), Some("10"));
    }

    #[test]
    fn test_create_params_trim_and_omit_unset_status() {
        let params = CreateUserParams::new(
            "  Alice  ",
            " alice@example.com ",
            "secret".to_string(),
            UserRole::Employee,
            None,
        );
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Alice",
                "email": "alice@example.com",
                "password": "secret",
                "role": "EMPLOYEE",
            })
        );
    }

    #[test]
    fn test_update_params_use_camel_case_user_type() {
        let params = UpdateUserParams::new(
            "Alice",
            "alice@example.com",
            UserStatus::Clean,
            UserRole::Admin,
        );
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["userType"], "ADMIN");
        assert_eq!(json["status"], "CLEAN");
    }
}
