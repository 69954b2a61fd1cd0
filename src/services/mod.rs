//! Service layer: authorization, validation and orchestration between
//! routes and repositories.

use thiserror::Error;

use crate::forms::FormError;
use crate::models::auth::{check_role, AuthenticatedUser};
use crate::repository::errors::RepositoryError;

pub mod api;
pub mod catalog;
pub mod enrollment;
pub mod exam;
pub mod lecturer;
pub mod location;
pub mod roadmap;
pub mod student;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Cap on the number of options loaded into a filter dropdown.
pub(crate) const FILTER_OPTIONS_LIMIT: usize = 500;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        Self::Form(err.to_string())
    }
}

/// Fails with [`ServiceError::Unauthorized`] unless the user carries the
/// given role.
pub fn ensure_role(user: &AuthenticatedUser, role: &str) -> ServiceResult<()> {
    if check_role(role, &user.roles) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::auth::AuthenticatedUser;
    use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

    pub fn admin_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".into(),
            email: "admin@example.edu".into(),
            name: "Admin".into(),
            roles: vec![SERVICE_ACCESS_ROLE.into(), SERVICE_ADMIN_ROLE.into()],
            exp: usize::MAX,
        }
    }

    pub fn viewer_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "2".into(),
            email: "viewer@example.edu".into(),
            name: "Viewer".into(),
            roles: vec![SERVICE_ACCESS_ROLE.into()],
            exp: usize::MAX,
        }
    }
}
