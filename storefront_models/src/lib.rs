use macros::{entity_id, nutype_string};

pub mod contact;
pub mod email_address;
pub mod gallery;
mod macros;

entity_id!(PageEntityId);
entity_id!(ProductEntityId);

nutype_string!(RecaptchaToken(validate(not_empty)));

impl RecaptchaToken {
    /// Returns `None` for a missing or empty token.
    pub fn from_optional(token: Option<String>) -> Option<Self> {
        token.and_then(|token| Self::try_new(token).ok())
    }
}
