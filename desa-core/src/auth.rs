use crate::error::ClientError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Success payload of both auth endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}

pub fn validate_credentials(credentials: &Credentials) -> Result<(), ClientError> {
    if credentials.email.trim().is_empty() {
        return Err(ClientError::Validation("Email wajib diisi".into()));
    }
    if credentials.password.trim().is_empty() {
        return Err(ClientError::Validation("Password wajib diisi".into()));
    }
    Ok(())
}

pub fn validate_registration(registration: &Registration) -> Result<(), ClientError> {
    if registration.name.trim().is_empty() {
        return Err(ClientError::Validation("Nama wajib diisi".into()));
    }
    validate_credentials(&Credentials {
        email: registration.email.clone(),
        password: registration.password.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_required_fields() {
        let credentials = Credentials {
            email: "  ".into(),
            password: "rahasia".into(),
        };
        assert!(matches!(
            validate_credentials(&credentials),
            Err(ClientError::Validation(_))
        ));

        let registration = Registration {
            name: String::new(),
            email: "warga@desa.id".into(),
            password: "rahasia".into(),
        };
        assert!(matches!(
            validate_registration(&registration),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn accepts_complete_input() {
        let registration = Registration {
            name: "Budi".into(),
            email: "budi@desa.id".into(),
            password: "rahasia".into(),
        };
        assert!(validate_registration(&registration).is_ok());
    }
}
