use serde::Deserialize;
use storefront_core_contact_contracts::{
    ContactService, ContactSubmitError, SubmitContactUsPayload,
};
use storefront_graphql_contracts::{Document, GraphQlClient, GraphQlClientExt};
use storefront_models::{
    contact::{ContactFormFields, ContactFormInput},
    PageEntityId, RecaptchaToken,
};
use storefront_utils::Apply;
use tracing::debug;

pub static SUBMIT_CONTACT_US_MUTATION: Document = Document {
    operation_name: "submitContactUs",
    source: r#"
        mutation submitContactUs($input: SubmitContactUsInput!, $reCaptchaV2: ReCaptchaV2Input) {
          submitContactUs(input: $input, reCaptchaV2: $reCaptchaV2) {
            __typename
            errors {
              __typename
              ... on Error {
                message
              }
            }
          }
        }
    "#,
    fragments: &[],
};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<GraphQl> {
    graphql: GraphQl,
}

impl<GraphQl> ContactServiceImpl<GraphQl> {
    pub fn new(graphql: GraphQl) -> Self {
        Self { graphql }
    }
}

impl<GraphQl> ContactService for ContactServiceImpl<GraphQl>
where
    GraphQl: GraphQlClient,
{
    async fn submit_contact_form(
        &self,
        form_fields: ContactFormFields,
        page_entity_id: PageEntityId,
        recaptcha_token: Option<String>,
    ) -> Result<SubmitContactUsPayload, ContactSubmitError> {
        let input = form_fields.validate().inspect_err(|err| {
            debug!(%page_entity_id, "rejected contact form: {err}");
        })?;

        let recaptcha_token = RecaptchaToken::from_optional(recaptcha_token);
        let variables =
            submit_contact_us_variables(page_entity_id, &input, recaptcha_token.as_ref());

        self.graphql
            .fetch::<SubmitContactUsData>(&SUBMIT_CONTACT_US_MUTATION, variables)
            .await
            .map(|data| data.submit_contact_us)
            .map_err(Into::into)
    }
}

/// Build the variables of the `submitContactUs` mutation.
///
/// `reCaptchaV2` is only present if a token is given.
pub fn submit_contact_us_variables(
    page_entity_id: PageEntityId,
    input: &ContactFormInput,
    recaptcha_token: Option<&RecaptchaToken>,
) -> serde_json::Value {
    serde_json::json!({
        "input": {
            "pageEntityId": page_entity_id,
            "data": input,
        },
    })
    .apply_map(recaptcha_token, |mut variables, token| {
        variables["reCaptchaV2"] = serde_json::json!({ "token": token });
        variables
    })
}

#[derive(Deserialize)]
struct SubmitContactUsData {
    #[serde(rename = "submitContactUs")]
    submit_contact_us: SubmitContactUsPayload,
}
