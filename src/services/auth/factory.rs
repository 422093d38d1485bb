/// Factory: build `AuthSettings` from application `Config`.
use std::sync::Arc;

use thiserror::Error;

use crate::config::Config;
use crate::services::auth::{AuthMode, AuthSettings, StaticPasswordVerifier};
use crate::services::kerberos::{GssMechanism, MechanismError, ServiceIdentity};

#[derive(Debug, Error)]
pub enum AuthSetupError {
    #[error("AUTH_TYPE={0} needs Kerberos support; rebuild with the `gssapi` feature")]
    KerberosUnavailable(String),
    #[error("service kerberos login failed: {0}")]
    Login(#[from] MechanismError),
}

pub fn build_auth_settings(config: &Config) -> Result<Arc<AuthSettings>, AuthSetupError> {
    build_auth_settings_with(config, default_mechanism())
}

/// Same as `build_auth_settings`, with the GSS backend supplied by the caller.
pub fn build_auth_settings_with(
    config: &Config,
    mechanism: Option<Arc<dyn GssMechanism>>,
) -> Result<Arc<AuthSettings>, AuthSetupError> {
    let settings = match config.auth_mode {
        AuthMode::Kerberos => {
            let mechanism = mechanism
                .ok_or_else(|| AuthSetupError::KerberosUnavailable(config.auth_type.clone()))?;
            let service = ServiceIdentity::login(config.kerberos_principal.clone(), mechanism)?;
            AuthSettings::kerberos(config.auth_type.clone(), service)
        }
        AuthMode::Basic => {
            let settings = AuthSettings::basic(config.auth_type.clone());
            match config.basic_auth_users.as_deref().map(StaticPasswordVerifier::parse) {
                Some(verifier) if !verifier.is_empty() => {
                    tracing::info!(users = verifier.len(), "basic password verification enabled");
                    settings.with_password_verifier(Arc::new(verifier))
                }
                Some(_) => {
                    tracing::warn!("BASIC_AUTH_USERS has no usable entries; passwords are not checked");
                    settings
                }
                None => settings,
            }
        }
    };

    Ok(Arc::new(settings))
}

#[cfg(feature = "gssapi")]
fn default_mechanism() -> Option<Arc<dyn GssMechanism>> {
    Some(Arc::new(crate::services::kerberos::Krb5Mechanism::new()))
}

#[cfg(not(feature = "gssapi"))]
fn default_mechanism() -> Option<Arc<dyn GssMechanism>> {
    None
}
