//! User Statistics Component
//!
//! Header counters for the range page: backend total plus per-status
//! counts over the currently fetched page.

use leptos::prelude::*;

use crate::models::{UserRange, UserStatus, USER_STATUS_ORDER};

fn count_with_status(users: &[UserRange], status: UserStatus) -> usize {
    users.iter().filter(|u| u.status == status).count()
}

#[component]
pub fn UserStatistics(users: Signal<Vec<UserRange>>, total_users: Signal<u64>) -> impl IntoView {
    view! {
        <ul class="statistics">
            <li class="statistics-item main">
                <span class="statistics-number">{move || total_users.get()}</span>
                <span class="statistics-label">"All users"</span>
            </li>
            {USER_STATUS_ORDER
                .into_iter()
                .map(|status| {
                    view! {
                        <li class="statistics-item">
                            <span class="statistics-number">
                                {move || count_with_status(&users.get(), status)}
                            </span>
                            <span class="statistics-label">{status.label()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn user(status: UserStatus) -> UserRange {
        UserRange {
            id: "u".to_string(),
            name: "n".to_string(),
            email: "e@example.com".to_string(),
            created_at: String::new(),
            main_project: None,
            other_projects: Vec::new(),
            status,
            user_type: UserRole::Employee,
        }
    }

    #[test]
    fn test_count_with_status() {
        let users = vec![
            user(UserStatus::Red),
            user(UserStatus::Red),
            user(UserStatus::Green),
        ];
        assert_eq!(count_with_status(&users, UserStatus::Red), 2);
        assert_eq!(count_with_status(&users, UserStatus::Green), 1);
        assert_eq!(count_with_status(&users, UserStatus::Archived), 0);
    }
}
