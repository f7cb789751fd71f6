//! Request-scoped identity passed into every projection.

use common::UserId;

/// Who is looking at a view.
///
/// Resolved once per request and handed to projections explicitly, so no
/// projection ever inspects credentials itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewer {
    /// Unauthenticated, or the credential could not be resolved.
    #[default]
    Guest,
    /// An authenticated user.
    User(UserId),
}

impl Viewer {
    /// Returns the user ID, if authenticated.
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Viewer::Guest => None,
            Viewer::User(id) => Some(*id),
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Viewer::Guest)
    }
}

impl From<Option<UserId>> for Viewer {
    fn from(user: Option<UserId>) -> Self {
        user.map_or(Viewer::Guest, Viewer::User)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_option() {
        let user = UserId::new();
        assert_eq!(Viewer::from(Some(user)), Viewer::User(user));
        assert_eq!(Viewer::from(None), Viewer::Guest);
        assert!(Viewer::default().is_guest());
        assert_eq!(Viewer::User(user).user_id(), Some(user));
    }
}
