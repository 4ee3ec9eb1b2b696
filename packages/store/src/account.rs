//! Sign-up, sign-in and profile form payloads.

use serde::Serialize;

use crate::listing_form::FormError;
use crate::models::User;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
        {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }
}

/// Profile edits posted to `/api/user/update/:id`.
///
/// An empty password is left out of the payload so the account keeps its
/// current one.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub avatar: String,
}

impl UserUpdate {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            password: None,
            avatar: user.avatar.clone(),
        }
    }

    pub fn set_password(&mut self, raw: String) {
        self.password = if raw.is_empty() { None } else { Some(raw) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_requires_every_field() {
        let mut form = SignUpForm {
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: String::new(),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");

        form.password = "hunter22".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_sign_in_requires_credentials() {
        assert!(SignInForm::default().validate().is_err());
    }

    #[test]
    fn test_user_update_omits_blank_password() {
        let user = User {
            id: "u1".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            avatar: "https://cdn/a.png".into(),
        };
        let mut update = UserUpdate::from_user(&user);
        let body = serde_json::to_value(&update).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["avatar"], "https://cdn/a.png");

        update.set_password("s3cret!".into());
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["password"], "s3cret!");
    }
}
