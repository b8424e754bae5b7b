//! Project Endpoints
//!
//! List/create/update against `/projects`. Filter parameters are sent only
//! when set; the backend treats an empty string as a literal filter value,
//! so unset keys must be omitted entirely.

use serde::Serialize;

use super::{get_json, post_json, put_json, ApiError};
use crate::controller::{ListQuery, ProjectFilters};
use crate::models::{Paginated, Project, ProjectStatus, SortDirection, SortField};
use crate::pagination::{skip_for_page, PAGE_SIZE};

/// Query parameters for the projects list, derived from controller state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListProjectsParams {
    pub search: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub page: u32,
    pub status: Option<ProjectStatus>,
}

impl ListProjectsParams {
    /// Snapshot of the controller with the debounced search text applied.
    pub fn from_query(query: &ListQuery<ProjectFilters>, search: &str) -> Self {
        Self {
            search: search.to_string(),
            sort_field: query.sort_field,
            sort_direction: query.sort_direction,
            page: query.page,
            status: query.filters.status,
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        params.push(("sortField", self.sort_field.as_str().to_string()));
        params.push(("sortDirection", self.sort_direction.as_str().to_string()));
        params.push(("skip", skip_for_page(self.page).to_string()));
        params.push(("take", PAGE_SIZE.to_string()));
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        params
    }
}

pub async fn list_projects(
    token: &str,
    params: &ListProjectsParams,
) -> Result<Paginated<Project>, ApiError> {
    get_json("/projects", &params.to_query(), token).await
}

/// Fetch up to `take` projects without filters, for project pickers.
pub async fn list_all_projects(token: &str, take: u32) -> Result<Paginated<Project>, ApiError> {
    get_json("/projects", &[("take", take.to_string())], token).await
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
}

impl ProjectPayload {
    /// Trim the name and drop a blank description instead of sending "".
    pub fn new(name: &str, description: &str, status: ProjectStatus) -> Self {
        let description = description.trim();
        Self {
            name: name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            status,
        }
    }
}

pub async fn create_project(token: &str, payload: &ProjectPayload) -> Result<Project, ApiError> {
    post_json("/projects", payload, token).await
}

pub async fn update_project(
    token: &str,
    id: &str,
    payload: &ProjectPayload,
) -> Result<Project, ApiError> {
    put_json(&format!("/projects/{id}"), payload, token).await
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
    fn test_default_query_omits_search_and_status() {
        let query = ListQuery::<ProjectFilters>::default();
        let params = ListProjectsParams::from_query(&query, "").to_query();

        assert_eq!(lookup(&params, "search"), None);
        assert_eq!(lookup(&params, "status"), None);
        assert_eq!(lookup(&params, "sortField"), Some("name"));
        assert_eq!(lookup(&params, "sortDirection"), Some("asc"));
        assert_eq!(lookup(&params, "skip"), Some("0"));
        assert_eq!(lookup(&params, "take"), Some("10"));
    }

    #[test]
    fn test_pagination_maps_to_skip_take() {
        let mut query = ListQuery::<ProjectFilters>::default();
        query.set_page(3);
        let params = ListProjectsParams::from_query(&query, "").to_query();
        assert_eq!(lookup(&params, "skip"), Some("20"));
        assert_eq!(lookup(&params, "take"), Some("10"));
    }

    #[test]
    fn test_set_filters_are_sent() {
        let mut query = ListQuery::<ProjectFilters>::default();
        query.set_search("alice".to_string());
        query.update_filters(|f| f.status = Some(ProjectStatus::Support));
        let params = ListProjectsParams::from_query(&query, &query.search.clone()).to_query();
        assert_eq!(lookup(&params, "search"), Some("alice"));
        assert_eq!(lookup(&params, "status"), Some("SUPPORT"));
    }

    #[test]
    fn test_payload_trims_name_and_omits_blank_description() {
        let payload = ProjectPayload::new("  Atlas  ", "   ", ProjectStatus::Planned);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Atlas", "status": "PLANNED" })
        );
    }

    #[test]
    fn test_payload_keeps_trimmed_description() {
        let payload = ProjectPayload::new("Atlas", " internal tooling ", ProjectStatus::Onhold);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["description"], "internal tooling");
        assert_eq!(json["status"], "ONHOLD");
    }
}
