//! Frontend Models
//!
//! Data structures matching backend entities, plus the user view-model
//! derivation.

use serde::{Deserialize, Serialize};

// ========================
// Enums
// ========================

/// Project lifecycle status (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectStatus {
    Planned,
    Inprogress,
    Onhold,
    Completed,
    Cancelled,
    Support,
}

/// Display order for project status filters and pickers
pub const PROJECT_STATUS_ORDER: [ProjectStatus; 6] = [
    ProjectStatus::Planned,
    ProjectStatus::Inprogress,
    ProjectStatus::Onhold,
    ProjectStatus::Completed,
    ProjectStatus::Cancelled,
    ProjectStatus::Support,
];

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planned => "PLANNED",
            ProjectStatus::Inprogress => "INPROGRESS",
            ProjectStatus::Onhold => "ONHOLD",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::Cancelled => "CANCELLED",
            ProjectStatus::Support => "SUPPORT",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        PROJECT_STATUS_ORDER.iter().copied().find(|s| s.as_str() == raw)
    }

    /// Human-readable label for pills and dropdowns
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planned => "Planned",
            ProjectStatus::Inprogress => "In progress",
            ProjectStatus::Onhold => "On hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Cancelled => "Cancelled",
            ProjectStatus::Support => "Support",
        }
    }
}

/// User range status (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    Red,
    Yellow,
    Green,
    Clean,
    Archived,
}

pub const USER_STATUS_ORDER: [UserStatus; 5] = [
    UserStatus::Red,
    UserStatus::Yellow,
    UserStatus::Green,
    UserStatus::Clean,
    UserStatus::Archived,
];

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Red => "RED",
            UserStatus::Yellow => "YELLOW",
            UserStatus::Green => "GREEN",
            UserStatus::Clean => "CLEAN",
            UserStatus::Archived => "ARCHIVED",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        USER_STATUS_ORDER.iter().copied().find(|s| s.as_str() == raw)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Red => "Red",
            UserStatus::Yellow => "Yellow",
            UserStatus::Green => "Green",
            UserStatus::Clean => "Clean",
            UserStatus::Archived => "Archived",
        }
    }
}

/// User role (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Employee,
}

pub const USER_ROLES: [UserRole; 2] = [UserRole::Admin, UserRole::Employee];

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Employee => "EMPLOYEE",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        USER_ROLES.iter().copied().find(|r| r.as_str() == raw)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Employee => "Employee",
        }
    }
}

/// Sortable list columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Status,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Status => "status",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "name" => Some(SortField::Name),
            "status" => Some(SortField::Status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

// ========================
// Entities
// ========================

/// Authenticated user as returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

/// Project entity (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub users: Vec<AuthUser>,
}

/// User entity on the wire, with its ordered project associations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub status: Option<UserStatus>,
}

/// User view-model rendered by the range page
#[derive(Debug, Clone, PartialEq)]
pub struct UserRange {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub main_project: Option<String>,
    pub other_projects: Vec<String>,
    pub status: UserStatus,
    pub user_type: UserRole,
}

impl UserRange {
    /// Flatten a wire user into the view-model.
    ///
    /// The backend's project list is ordered and the first association is
    /// the primary one; the remainder become `other_projects`.
    pub fn from_api(user: ApiUser) -> Self {
        let mut names = user.projects.into_iter().map(|p| p.name);
        let main_project = names.next();
        let other_projects: Vec<String> = names.collect();

        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            main_project,
            other_projects,
            status: user.status.unwrap_or(UserStatus::Green),
            user_type: user.role,
        }
    }
}

/// Shared list-response envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_project(name: &str) -> Project {
        Project {
            id: format!("p-{name}"),
            name: name.to_string(),
            description: None,
            status: ProjectStatus::Planned,
            created_at: String::new(),
            updated_at: None,
            users: Vec::new(),
        }
    }

    fn make_api_user(projects: Vec<Project>) -> ApiUser {
        ApiUser {
            id: "u-1".to_string(),
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            role: UserRole::Employee,
            created_at: "2026-01-01".to_string(),
            projects,
            status: Some(UserStatus::Red),
        }
    }

    #[test]
    fn test_user_range_splits_main_and_other_projects() {
        let user = make_api_user(vec![
            make_project("Atlas"),
            make_project("Borealis"),
            make_project("Cascade"),
        ]);
        let range = UserRange::from_api(user);

        assert_eq!(range.main_project.as_deref(), Some("Atlas"));
        assert_eq!(range.other_projects, vec!["Borealis", "Cascade"]);
    }

    #[test]
    fn test_user_range_with_no_projects() {
        let range = UserRange::from_api(make_api_user(vec![]));
        assert_eq!(range.main_project, None);
        assert!(range.other_projects.is_empty());
    }

    #[test]
    fn test_user_range_with_single_project() {
        let range = UserRange::from_api(make_api_user(vec![make_project("Atlas")]));
        assert_eq!(range.main_project.as_deref(), Some("Atlas"));
        assert!(range.other_projects.is_empty());
    }

    #[test]
    fn test_user_range_defaults_missing_status_to_green() {
        let mut user = make_api_user(vec![]);
        user.status = None;
        assert_eq!(UserRange::from_api(user).status, UserStatus::Green);
    }

    #[test]
    fn test_status_serializes_as_uppercase() {
        let json = serde_json::to_string(&ProjectStatus::Inprogress).unwrap();
        assert_eq!(json, "\"INPROGRESS\"");
        let back: ProjectStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProjectStatus::Inprogress);
    }
}
