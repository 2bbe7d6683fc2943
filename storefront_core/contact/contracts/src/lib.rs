use std::future::Future;

use serde::{Deserialize, Serialize};
use storefront_models::{
    contact::{ContactFormFields, ContactFormValidationError},
    PageEntityId,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Validate the contact form and submit it to the storefront.
    ///
    /// A missing or empty `recaptcha_token` is not sent at all. Errors
    /// reported by the storefront are returned as part of the payload.
    fn submit_contact_form(
        &self,
        form_fields: ContactFormFields,
        page_entity_id: PageEntityId,
        recaptcha_token: Option<String>,
    ) -> impl Future<Output = Result<SubmitContactUsPayload, ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error(transparent)]
    Validation(#[from] ContactFormValidationError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result of the `submitContactUs` mutation as returned by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitContactUsPayload {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub errors: Vec<SubmitContactUsError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitContactUsError {
    #[serde(rename = "__typename")]
    pub typename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmitContactUsPayload {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit_contact_form(
        mut self,
        form_fields: ContactFormFields,
        page_entity_id: PageEntityId,
        recaptcha_token: Option<String>,
        result: Result<SubmitContactUsPayload, ContactSubmitError>,
    ) -> Self {
        self.expect_submit_contact_form()
            .once()
            .with(
                mockall::predicate::eq(form_fields),
                mockall::predicate::eq(page_entity_id),
                mockall::predicate::eq(recaptcha_token),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(result)));
        self
    }
}
