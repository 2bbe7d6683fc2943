use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{email_address::EmailAddress, macros::nutype_string};

/// Raw contact form fields as entered by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormFields {
    pub company_name: Option<String>,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub order_number: Option<String>,
    pub rma_number: Option<String>,
    pub email: String,
    pub comments: String,
}

/// Validated contact form, ready to be sent to the storefront.
///
/// Optional fields that are `None` are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rma_number: Option<String>,
    pub email: EmailAddress,
    pub comments: ContactComments,
}

nutype_string!(ContactComments(sanitize(trim), validate(not_empty)));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The contact form is invalid: {0:?}")]
pub struct ContactFormValidationError(pub Vec<ContactFormFieldError>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFormFieldError {
    #[error("The email address is invalid.")]
    InvalidEmail,
    #[error("The comments must not be empty.")]
    EmptyComments,
}

impl ContactFormFieldError {
    /// The name of the offending form field.
    pub fn field(self) -> &'static str {
        match self {
            Self::InvalidEmail => "email",
            Self::EmptyComments => "comments",
        }
    }
}

impl ContactFormFields {
    /// Checks every constraint of the contact form and reports all violations
    /// at once.
    pub fn validate(self) -> Result<ContactFormInput, ContactFormValidationError> {
        let email = self.email.parse::<EmailAddress>();
        let comments = ContactComments::try_new(self.comments);

        match (email, comments) {
            (Ok(email), Ok(comments)) => Ok(ContactFormInput {
                company_name: self.company_name,
                full_name: self.full_name,
                phone_number: self.phone_number,
                order_number: self.order_number,
                rma_number: self.rma_number,
                email,
                comments,
            }),
            (email, comments) => Err(ContactFormValidationError(
                [
                    email.is_err().then_some(ContactFormFieldError::InvalidEmail),
                    comments.is_err().then_some(ContactFormFieldError::EmptyComments),
                ]
                .into_iter()
                .flatten()
                .collect(),
            )),
        }
    }
}

impl TryFrom<ContactFormFields> for ContactFormInput {
    type Error = ContactFormValidationError;

    fn try_from(value: ContactFormFields) -> Result<Self, Self::Error> {
        value.validate()
    }
}
