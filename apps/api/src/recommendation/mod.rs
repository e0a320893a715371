// Career recommendation: profile/answer models, the rule-based scorer,
// the built-in fallback catalog and the request-level service around them.
// The scorer is pure; all storage access goes through the store traits.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod scoring;
pub mod service;
