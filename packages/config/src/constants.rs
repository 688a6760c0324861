// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of the environment variables and defaults used by the server

// Listener Configuration
pub const TODO_HOST: &str = "TODO_HOST";
pub const TODO_PORT: &str = "TODO_PORT";
pub const PORT: &str = "PORT"; // Legacy

// CORS Configuration
pub const TODO_CORS_ORIGIN: &str = "TODO_CORS_ORIGIN";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

// Defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "info";
