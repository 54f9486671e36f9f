//! Public-audience redaction: the rule table and the verifying sanitizer.

pub mod sanitizer;
pub mod table;

pub use sanitizer::{Leak, Sanitizer};
pub use table::{RedactionRule, RedactionTable, mask_ipv4, obscure};
