//! Application Context
//!
//! Shared signals provided via the Leptos Context API. List invalidation is
//! a broadcast: mutations bump an entity's version counter and every list
//! effect subscribed to it refetches.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Projects list version - read
    pub projects_version: ReadSignal<u32>,
    set_projects_version: WriteSignal<u32>,
    /// Users list version - read
    pub users_version: ReadSignal<u32>,
    set_users_version: WriteSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (projects_version, set_projects_version) = signal(0u32);
        let (users_version, set_users_version) = signal(0u32);
        Self {
            projects_version,
            set_projects_version,
            users_version,
            set_users_version,
        }
    }

    /// Mark the projects list stale
    pub fn invalidate_projects(&self) {
        self.set_projects_version.update(|v| *v += 1);
    }

    /// Mark the users list stale
    pub fn invalidate_users(&self) {
        self.set_users_version.update(|v| *v += 1);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn test_invalidation_bumps_only_its_own_list() {
        let owner = Owner::new();
        let ctx = owner.with(AppContext::new);

        ctx.invalidate_users();
        assert_eq!(ctx.users_version.get_untracked(), 1);
        assert_eq!(ctx.projects_version.get_untracked(), 0);

        ctx.invalidate_projects();
        assert_eq!(ctx.projects_version.get_untracked(), 1);
        assert_eq!(ctx.users_version.get_untracked(), 1);
        drop(owner);
    }
}
