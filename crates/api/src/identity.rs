//! Request-scoped viewer resolution from bearer tokens.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use catalog::{ContentStore, UserId};
use projections::Viewer;

use crate::error::ApiError;
use crate::state::AppState;

/// The viewer of the current request.
///
/// A missing, malformed or unknown bearer token resolves to
/// [`Viewer::Guest`] rather than rejecting the request; endpoints that need
/// a user call [`CurrentViewer::require_user`].
#[derive(Debug, Clone, Copy)]
pub struct CurrentViewer(pub Viewer);

impl CurrentViewer {
    /// Returns the authenticated user, or `401` for guests.
    pub fn require_user(&self) -> Result<UserId, ApiError> {
        self.0.user_id().ok_or(ApiError::Unauthorized)
    }
}

impl<S: ContentStore + 'static> FromRequestParts<Arc<AppState<S>>> for CurrentViewer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState<S>>,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            return Ok(CurrentViewer(Viewer::Guest));
        };

        let user = state.store.user_for_token(token).await?;
        if user.is_none() {
            tracing::debug!("unknown bearer token, continuing as guest");
        }
        Ok(CurrentViewer(Viewer::from(user)))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn parses_bearer_token() {
        assert_eq!(bearer_token(&parts_with(Some("Bearer abc"))), Some("abc"));
        assert_eq!(bearer_token(&parts_with(Some("bearer  abc "))), Some("abc"));
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(bearer_token(&parts_with(Some("Basic dXNlcg=="))), None);
        assert_eq!(bearer_token(&parts_with(Some("Bearer"))), None);
        assert_eq!(bearer_token(&parts_with(Some("Bearer   "))), None);
        assert_eq!(bearer_token(&parts_with(None)), None);
    }

    #[test]
    fn guests_cannot_act_as_users() {
        assert!(matches!(
            CurrentViewer(Viewer::Guest).require_user(),
            Err(ApiError::Unauthorized)
        ));
        let user = UserId::new();
        assert_eq!(CurrentViewer(Viewer::User(user)).require_user().unwrap(), user);
    }
}
