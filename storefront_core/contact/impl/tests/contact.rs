use storefront_core_contact_contracts::{
    ContactService, ContactSubmitError, SubmitContactUsError, SubmitContactUsPayload,
};
use storefront_core_contact_impl::ContactServiceImpl;
use storefront_graphql_impl::{GraphQlClientConfig, GraphQlClientImpl};
use storefront_models::contact::ContactFormFields;

#[tokio::test]
async fn submit_ok() {
    let sut = make_sut().await;

    let result = sut
        .submit_contact_form(form_fields("Hello World!"), 42.into(), None)
        .await
        .unwrap();

    assert_eq!(
        result,
        SubmitContactUsPayload {
            typename: "SubmitContactUsResult".into(),
            errors: vec![],
        }
    );
}

#[tokio::test]
async fn submit_ok_with_token() {
    let sut = make_sut().await;

    let result = sut
        .submit_contact_form(form_fields("Hello World!"), 42.into(), Some("T123".into()))
        .await
        .unwrap();

    assert!(result.is_success());
}

#[tokio::test]
async fn submit_empty_token_is_not_sent() {
    let sut = make_sut().await;

    // the testing server rejects a present but empty or null recaptcha object
    let result = sut
        .submit_contact_form(form_fields("Hello World!"), 42.into(), Some(String::new()))
        .await
        .unwrap();

    assert!(result.is_success());
}

#[tokio::test]
async fn submit_keeps_payload_next_to_graphql_errors() {
    let sut = make_sut().await;

    // the testing server answers with the payload and a top-level deprecation error
    let result = sut
        .submit_contact_form(
            ContactFormFields {
                rma_number: Some("RMA-1".into()),
                ..form_fields("Hello World!")
            },
            42.into(),
            None,
        )
        .await
        .unwrap();

    assert_eq!(
        result,
        SubmitContactUsPayload {
            typename: "SubmitContactUsResult".into(),
            errors: vec![],
        }
    );
}

#[tokio::test]
async fn submit_application_errors() {
    let sut = make_sut().await;

    let result = sut
        .submit_contact_form(
            form_fields("this should fail"),
            42.into(),
            Some("invalid".into()),
        )
        .await
        .unwrap();

    assert_eq!(
        result.errors,
        [
            SubmitContactUsError {
                typename: "ValidationError".into(),
                message: Some("ReCaptcha validation failed.".into()),
            },
            SubmitContactUsError {
                typename: "Error".into(),
                message: Some("Unable to submit the contact form.".into()),
            },
        ]
    );
}

#[tokio::test]
async fn submit_invalid_form() {
    let sut = make_sut().await;

    let result = sut
        .submit_contact_form(form_fields("   "), 42.into(), None)
        .await;

    assert!(matches!(result, Err(ContactSubmitError::Validation(_))));
}

#[tokio::test]
async fn submit_concurrently() {
    let sut = make_sut().await;

    let (a, b) = tokio::join!(
        sut.submit_contact_form(form_fields("first"), 1.into(), None),
        sut.submit_contact_form(form_fields("second, fail"), 2.into(), None),
    );

    assert!(a.unwrap().is_success());
    assert_eq!(b.unwrap().errors.len(), 1);
}

fn form_fields(comments: &str) -> ContactFormFields {
    ContactFormFields {
        full_name: Some("Max Mustermann".into()),
        email: "max.mustermann@example.de".into(),
        comments: comments.into(),
        ..Default::default()
    }
}

async fn make_sut() -> ContactServiceImpl<GraphQlClientImpl> {
    let endpoint = storefront_testing::start_background_server().await.unwrap();
    let graphql = GraphQlClientImpl::new(GraphQlClientConfig {
        endpoint: endpoint.into(),
    })
    .unwrap();

    ContactServiceImpl::new(graphql)
}
