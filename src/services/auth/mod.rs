pub mod factory;
pub mod header;
pub mod mode;
pub mod password;
pub mod settings;

pub use factory::{AuthSetupError, build_auth_settings};
pub use header::{
    HeaderFields, auth_header_fields, resolve_pass_token, resolve_username, verify_auth_header,
};
pub use mode::AuthMode;
pub use password::{PasswordVerifier, StaticPasswordVerifier};
pub use settings::AuthSettings;
