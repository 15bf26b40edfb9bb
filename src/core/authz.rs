//! Authorization policy.
//!
//! One explicit role/action table evaluated at the boundary, instead of
//! per-endpoint permission branches. The web layer asks once per request;
//! the core never checks permissions internally.

use crate::entities::user::Role;

/// Privileged action a caller may attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Create an internship application
    SubmitApplication,
    /// Withdraw one's own application
    WithdrawApplication,
    /// Change an application's review status
    ReviewApplication,
    /// Edit a trainee profile (scores excluded, those come from review)
    UpdateProfile,
    /// See the ranked list of qualified candidates
    ViewRating,
    /// Close the selection round
    FinalizeSelection,
    /// Read the aggregate dashboard
    ViewStatistics,
}

/// Decides whether a role may perform an action. Admins may do everything.
#[must_use]
pub const fn is_allowed(role: Role, action: Action) -> bool {
    if matches!(role, Role::Admin) {
        return true;
    }
    match action {
        Action::SubmitApplication | Action::WithdrawApplication => {
            matches!(role, Role::Candidate)
        }
        Action::ReviewApplication | Action::ViewRating | Action::FinalizeSelection => {
            matches!(role, Role::Curator)
        }
        Action::UpdateProfile => matches!(role, Role::Candidate | Role::Trainee),
        Action::ViewStatistics => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_own_their_applications() {
        assert!(is_allowed(Role::Candidate, Action::SubmitApplication));
        assert!(is_allowed(Role::Candidate, Action::WithdrawApplication));
        assert!(!is_allowed(Role::Trainee, Action::SubmitApplication));
        assert!(!is_allowed(Role::Mentor, Action::SubmitApplication));
    }

    #[test]
    fn test_selection_is_curator_only() {
        assert!(is_allowed(Role::Curator, Action::ViewRating));
        assert!(is_allowed(Role::Curator, Action::FinalizeSelection));
        assert!(is_allowed(Role::Curator, Action::ReviewApplication));
        for role in [Role::Candidate, Role::Trainee, Role::Mentor, Role::Personnel] {
            assert!(!is_allowed(role, Action::FinalizeSelection));
            assert!(!is_allowed(role, Action::ViewRating));
        }
    }

    #[test]
    fn test_profile_updates() {
        assert!(is_allowed(Role::Candidate, Action::UpdateProfile));
        assert!(is_allowed(Role::Trainee, Action::UpdateProfile));
        assert!(!is_allowed(Role::Personnel, Action::UpdateProfile));
    }

    #[test]
    fn test_statistics_open_to_all_roles() {
        for role in [
            Role::Candidate,
            Role::Trainee,
            Role::Mentor,
            Role::Personnel,
            Role::Curator,
            Role::Admin,
        ] {
            assert!(is_allowed(role, Action::ViewStatistics));
        }
    }

    #[test]
    fn test_admin_can_do_everything() {
        for action in [
            Action::SubmitApplication,
            Action::WithdrawApplication,
            Action::ReviewApplication,
            Action::UpdateProfile,
            Action::ViewRating,
            Action::FinalizeSelection,
            Action::ViewStatistics,
        ] {
            assert!(is_allowed(Role::Admin, action));
        }
    }
}
