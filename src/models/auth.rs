//! Authenticated user extracted from the identity cookie.
//!
//! Sign-in happens on the central auth service which issues a JWT; this
//! application only verifies and decodes it.

use std::future::{ready, Ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::{web, FromRequest, HttpRequest};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Subject, the user id on the auth service.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

impl AuthenticatedUser {
    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }

    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }
}

/// Returns true when the user carries the given role.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = Identity::from_request(req, payload).into_inner();
        let config = req.app_data::<web::Data<ServerConfig>>().cloned();

        ready((|| {
            let identity = identity.map_err(|_| ErrorUnauthorized("not signed in"))?;
            let token = identity.id().map_err(|_| ErrorUnauthorized("not signed in"))?;
            let config =
                config.ok_or_else(|| ErrorInternalServerError("server config missing"))?;
            Self::from_jwt(&token, &config.secret).map_err(|_| ErrorUnauthorized("invalid token"))
        })())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jwt_round_trip() {
        let user = AuthenticatedUser {
            sub: "42".into(),
            email: "dean@example.edu".into(),
            name: "Dean".into(),
            roles: vec!["university".into(), "university_admin".into()],
            exp: usize::MAX,
        };
        let token = user.to_jwt("secret").unwrap();
        let decoded = AuthenticatedUser::from_jwt(&token, "secret").unwrap();
        assert_eq!(decoded.email, user.email);
        assert_eq!(decoded.roles, user.roles);
    }

    #[test]
    fn jwt_rejects_wrong_secret() {
        let user = AuthenticatedUser {
            sub: "42".into(),
            email: "dean@example.edu".into(),
            name: "Dean".into(),
            roles: vec![],
            exp: usize::MAX,
        };
        let token = user.to_jwt("secret").unwrap();
        assert!(AuthenticatedUser::from_jwt(&token, "other").is_err());
    }
}
