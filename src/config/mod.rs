// ==========================================
// Teaching Claim - Configuration layer
// ==========================================
// Operator-supplied run parameters.
// Storage: JSON file, every field optional with a default.
// ==========================================

pub mod claim_config;

pub use claim_config::{ClaimConfig, ConfigError};
