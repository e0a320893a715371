// Account registration and login. Credentials are validated here, hashed
// with a per-user salt and persisted through `UserStore`.

pub mod credentials;
pub mod handlers;
pub mod password;
