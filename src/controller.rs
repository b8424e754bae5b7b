//! List Query Controller
//!
//! Single source of truth for what a list page is currently viewing:
//! search text, sort column and direction, 1-based page number, and the
//! entity-specific filters. Operations that change the result set reset
//! the page to 1; operations that only move within the result set do not.

use crate::models::{ProjectStatus, SortDirection, SortField, UserRole, UserStatus};
use crate::query::{decode_page, QueryCodec};

/// Entity-specific filter values carried alongside the shared fields.
pub trait FilterSet: Clone + Default + PartialEq {
    /// Append set filters to the serialized query. Unset filters are
    /// omitted entirely, never written as empty strings.
    fn write_query(&self, out: &mut Vec<(&'static str, String)>);

    fn read_query(get: &dyn Fn(&str) -> Option<String>) -> Self;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F: FilterSet> {
    pub search: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub page: u32,
    pub filters: F,
}

impl<F: FilterSet> Default for ListQuery<F> {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_field: SortField::Name,
            sort_direction: SortDirection::Asc,
            page: 1,
            filters: F::default(),
        }
    }
}

impl<F: FilterSet> ListQuery<F> {
    /// Changing the search text invalidates the current page number.
    pub fn set_search(&mut self, text: String) {
        self.search = text;
        self.page = 1;
    }

    /// Mutate one or more entity filters; any filter change invalidates
    /// the current page number.
    pub fn update_filters(&mut self, mutate: impl FnOnce(&mut F)) {
        mutate(&mut self.filters);
        self.page = 1;
    }

    /// Toggling the current column flips direction; a new column starts
    /// ascending. Either way the result order changed, so back to page 1.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
        self.page = 1;
    }

    /// Position-only change; no clamping here, the pagination component
    /// only offers pages within the known total.
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// One atomic reset of every field to its documented default.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Serialize for the address bar. Values equal to their defaults are
    /// omitted so shared links stay minimal.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if !self.search.is_empty() {
            out.push(("search", self.search.clone()));
        }
        if self.sort_field != SortField::Name {
            out.push(("sortField", self.sort_field.encode().to_string()));
        }
        if self.sort_direction != SortDirection::Asc {
            out.push(("sortDirection", self.sort_direction.encode().to_string()));
        }
        if self.page != 1 {
            out.push(("page", self.page.to_string()));
        }
        self.filters.write_query(&mut out);
        out
    }

    /// Rebuild state from query parameters, tolerating anything the URL
    /// bar throws at us.
    pub fn from_query(get: &dyn Fn(&str) -> Option<String>) -> Self {
        Self {
            search: get("search").unwrap_or_default(),
            sort_field: SortField::decode(get("sortField").as_deref()),
            sort_direction: SortDirection::decode(get("sortDirection").as_deref()),
            page: decode_page(get("page").as_deref()),
            filters: F::read_query(get),
        }
    }
}

/// Whether a fetch result may still be applied: the state that issued it
/// must be unchanged and the list not invalidated in the meantime. The
/// live values arrive as `Option` because the owning page may have been
/// unmounted while the request was in flight; a gone page reads as stale.
pub fn response_is_current<F: FilterSet>(
    live: Option<ListQuery<F>>,
    issued: &ListQuery<F>,
    live_version: Option<u32>,
    issued_version: u32,
) -> bool {
    live.as_ref() == Some(issued) && live_version == Some(issued_version)
}

/// Filters on the projects list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilters {
    pub status: Option<ProjectStatus>,
}

impl FilterSet for ProjectFilters {
    fn write_query(&self, out: &mut Vec<(&'static str, String)>) {
        if let Some(status) = self.status {
            out.push(("status", status.encode().to_string()));
        }
    }

    fn read_query(get: &dyn Fn(&str) -> Option<String>) -> Self {
        Self {
            status: ProjectStatus::decode_opt(get("status").as_deref()),
        }
    }
}

/// Filters on the range (users) list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilters {
    pub status: Option<UserStatus>,
    pub user_type: Option<UserRole>,
    pub project: Option<String>,
}

impl FilterSet for UserFilters {
    fn write_query(&self, out: &mut Vec<(&'static str, String)>) {
        if let Some(status) = self.status {
            out.push(("status", status.encode().to_string()));
        }
        if let Some(role) = self.user_type {
            out.push(("userType", role.encode().to_string()));
        }
        if let Some(project) = &self.project {
            if !project.is_empty() {
                out.push(("project", project.clone()));
            }
        }
    }

    fn read_query(get: &dyn Fn(&str) -> Option<String>) -> Self {
        Self {
            status: UserStatus::decode_opt(get("status").as_deref()),
            user_type: UserRole::decode_opt(get("userType").as_deref()),
            project: get("project").filter(|p| !p.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page_3() -> ListQuery<ProjectFilters> {
        let mut q = ListQuery::<ProjectFilters>::default();
        q.set_page(3);
        q
    }

    #[test]
    fn test_search_resets_page() {
        let mut q = on_page_3();
        q.set_search("alice".to_string());
        assert_eq!(q.search, "alice");
        assert_eq!(q.page, 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut q = on_page_3();
        q.update_filters(|f| f.status = Some(ProjectStatus::Onhold));
        assert_eq!(q.filters.status, Some(ProjectStatus::Onhold));
        assert_eq!(q.page, 1);
    }

    #[test]
    fn test_toggle_same_field_twice_restores_direction() {
        let mut q = ListQuery::<ProjectFilters>::default();
        q.toggle_sort(SortField::Name);
        assert_eq!(q.sort_direction, SortDirection::Desc);
        q.toggle_sort(SortField::Name);
        assert_eq!(q.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_toggle_new_field_lands_on_ascending() {
        let mut q = ListQuery::<ProjectFilters>::default();
        q.toggle_sort(SortField::Name); // now name/desc
        q.toggle_sort(SortField::Status);
        assert_eq!(q.sort_field, SortField::Status);
        assert_eq!(q.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_toggle_sort_resets_page() {
        let mut q = on_page_3();
        q.toggle_sort(SortField::Status);
        assert_eq!(q.page, 1);
    }

    #[test]
    fn test_set_page_leaves_other_fields_alone() {
        let mut q = ListQuery::<UserFilters>::default();
        q.set_search("bob".to_string());
        q.update_filters(|f| f.user_type = Some(UserRole::Admin));
        q.set_page(4);
        assert_eq!(q.search, "bob");
        assert_eq!(q.filters.user_type, Some(UserRole::Admin));
        assert_eq!(q.page, 4);
    }

    #[test]
    fn test_clear_all_restores_defaults() {
        let mut q = ListQuery::<UserFilters>::default();
        q.set_search("bob".to_string());
        q.toggle_sort(SortField::Status);
        q.update_filters(|f| {
            f.status = Some(UserStatus::Red);
            f.project = Some("Atlas".to_string());
        });
        q.set_page(7);
        q.clear_all();
        assert_eq!(q, ListQuery::<UserFilters>::default());
    }

    #[test]
    fn test_query_pairs_omit_defaults() {
        let q = ListQuery::<ProjectFilters>::default();
        assert!(q.to_query_pairs().is_empty());
    }

    #[test]
    fn test_query_pairs_round_trip() {
        let mut q = ListQuery::<UserFilters>::default();
        q.set_search("alice".to_string());
        q.toggle_sort(SortField::Status);
        q.update_filters(|f| {
            f.status = Some(UserStatus::Yellow);
            f.user_type = Some(UserRole::Admin);
        });
        q.set_page(2);

        let pairs = q.to_query_pairs();
        let lookup = |name: &str| -> Option<String> {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.clone())
        };
        let restored = ListQuery::<UserFilters>::from_query(&lookup);
        assert_eq!(restored, q);
    }

    #[test]
    fn test_response_applies_only_to_unchanged_state() {
        let issued = ListQuery::<ProjectFilters>::default();
        assert!(response_is_current(Some(issued.clone()), &issued, Some(3), 3));

        let mut moved_on = issued.clone();
        moved_on.set_page(2);
        assert!(!response_is_current(Some(moved_on), &issued, Some(3), 3));
    }

    #[test]
    fn test_invalidation_supersedes_in_flight_response() {
        let issued = ListQuery::<ProjectFilters>::default();
        assert!(!response_is_current(Some(issued.clone()), &issued, Some(4), 3));
    }

    #[test]
    fn test_unmounted_page_state_reads_as_stale() {
        use leptos::prelude::*;

        let owner = Owner::new();
        let (query, _set_query) =
            owner.with(|| signal(ListQuery::<ProjectFilters>::default()));
        let issued = query.get_untracked();
        drop(owner);

        assert_eq!(query.try_get_untracked(), None);
        assert!(!response_is_current(query.try_get_untracked(), &issued, Some(0), 0));
    }

    #[test]
    fn test_from_query_tolerates_garbage() {
        let lookup = |name: &str| -> Option<String> {
            match name {
                "sortField" => Some("bogus".to_string()),
                "sortDirection" => Some("up".to_string()),
                "page" => Some("-1".to_string()),
                "status" => Some("PURPLE".to_string()),
                _ => None,
            }
        };
        let q = ListQuery::<UserFilters>::from_query(&lookup);
        assert_eq!(q, ListQuery::<UserFilters>::default());
    }
}
