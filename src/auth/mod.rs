// Authentication module
// Manages the token lifecycle and gates every authenticated request

mod exchange;
mod manager;
mod types;

pub use manager::{AuthManager, FetchOptions};
pub use types::{
    AuthResponse, AuthState, DeviceAuthCreated, DeviceAuthResponse, Grant, VerifyPerm,
    VerifyResponse, VerifyResponseWithPerms,
};
