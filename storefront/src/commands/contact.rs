use std::io::Write;

use anyhow::bail;
use clap::Subcommand;
use storefront_config::Config;
use storefront_core_contact_contracts::{ContactService, ContactSubmitError};
use storefront_models::{contact::ContactFormFields, PageEntityId};
use tracing::info;

use super::write_json;
use crate::environment::Services;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Submit the contact form of a page
    #[command(aliases(["s"]))]
    Submit {
        /// Entity id of the page the contact form belongs to
        #[arg(long)]
        page_entity_id: i32,
        #[arg(long)]
        email: String,
        #[arg(long)]
        comments: String,
        #[arg(long)]
        company_name: Option<String>,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
        #[arg(long)]
        order_number: Option<String>,
        #[arg(long)]
        rma_number: Option<String>,
        /// reCAPTCHA v2 response token
        #[arg(long, env = "STOREFRONT_RECAPTCHA_TOKEN")]
        recaptcha_token: Option<String>,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let services = Services::new(&config)?;
        match self {
            Self::Submit {
                page_entity_id,
                email,
                comments,
                company_name,
                full_name,
                phone_number,
                order_number,
                rma_number,
                recaptcha_token,
            } => {
                let form_fields = ContactFormFields {
                    company_name,
                    full_name,
                    phone_number,
                    order_number,
                    rma_number,
                    email,
                    comments,
                };
                submit(
                    &services.contact,
                    form_fields,
                    page_entity_id.into(),
                    recaptcha_token,
                    &mut std::io::stdout().lock(),
                )
                .await
            }
        }
    }
}

async fn submit(
    service: &impl ContactService,
    form_fields: ContactFormFields,
    page_entity_id: PageEntityId,
    recaptcha_token: Option<String>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    info!("Submitting contact form of page {page_entity_id}");

    let payload = match service
        .submit_contact_form(form_fields, page_entity_id, recaptcha_token)
        .await
    {
        Ok(payload) => payload,
        Err(ContactSubmitError::Validation(err)) => {
            for field_error in &err.0 {
                writeln!(out, "{}: {field_error}", field_error.field())?;
            }
            bail!("The contact form is invalid");
        }
        Err(ContactSubmitError::Other(err)) => return Err(err),
    };

    write_json(out, &payload)?;

    if !payload.is_success() {
        bail!("The storefront rejected the contact form");
    }

    Ok(())
}
