use sha2::{Digest, Sha256};

use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::user::UserRole,
};

pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn require_admin(claims: &Claims) -> AppResult<()> {
    if claims.role != UserRole::Admin {
        return Err(AppError::Unauthorized(
            "Only admins can perform this action".to_string(),
        ));
    }
    Ok(())
}

pub fn require_teacher_or_admin(claims: &Claims) -> AppResult<()> {
    if claims.role != UserRole::Teacher && claims.role != UserRole::Admin {
        return Err(AppError::Unauthorized(
            "Only teachers or admins can perform this action".to_string(),
        ));
    }
    Ok(())
}

pub fn require_owner_or_elevated(claims: &Claims, resource_owner: &str) -> AppResult<()> {
    if claims.role == UserRole::Student && claims.sub != resource_owner {
        return Err(AppError::Unauthorized(
            "You can only access your own resources".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_claims(username: &str, role: UserRole) -> Claims {
        Claims {
            sub: username.to_string(),
            username: username.to_string(),
            role,
            iat: 0,
            exp: 9999999999,
        }
    }

    #[test]
    fn test_hash_password_is_stable_and_opaque() {
        let hash = hash_password("secret");
        assert_eq!(hash, hash_password("secret"));
        assert_ne!(hash, hash_password("other"));
        assert_ne!(hash, "secret");
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_require_admin_success() {
        let claims = create_test_claims("admin", UserRole::Admin);
        assert!(require_admin(&claims).is_ok());
    }

    #[test]
    fn test_require_admin_failure() {
        let claims = create_test_claims("ana", UserRole::Student);
        assert!(require_admin(&claims).is_err());

        let claims = create_test_claims("prof", UserRole::Teacher);
        assert!(require_admin(&claims).is_err());
    }

    #[test]
    fn test_require_teacher_or_admin() {
        let teacher = create_test_claims("prof", UserRole::Teacher);
        assert!(require_teacher_or_admin(&teacher).is_ok());

        let admin = create_test_claims("admin", UserRole::Admin);
        assert!(require_teacher_or_admin(&admin).is_ok());

        let student = create_test_claims("ana", UserRole::Student);
        assert!(require_teacher_or_admin(&student).is_err());
    }

    #[test]
    fn test_require_owner_or_elevated_as_owner() {
        let claims = create_test_claims("ana", UserRole::Student);
        assert!(require_owner_or_elevated(&claims, "ana").is_ok());
    }

    #[test]
    fn test_require_owner_or_elevated_as_teacher() {
        let claims = create_test_claims("prof", UserRole::Teacher);
        assert!(require_owner_or_elevated(&claims, "ana").is_ok());
    }

    #[test]
    fn test_require_owner_or_elevated_failure() {
        let claims = create_test_claims("ana", UserRole::Student);
        assert!(require_owner_or_elevated(&claims, "leo").is_err());
    }
}
