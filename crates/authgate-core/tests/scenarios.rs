//! End-to-end validation scenarios against the public API.

use std::sync::Arc;

use authgate_core::clock::FixedClock;
use authgate_core::oauth::{SecretHasher, Sha512Hasher};
use authgate_core::prelude::*;

const CALLBACK: &str = "https://code_client/callback";
const CALLBACK_WITH_QUERY: &str = "https://code_client/callback?foo=bar&baz=quux";

fn code_client() -> Client {
    let mut client = Client::new("code_client", Flow::AuthorizationCode);
    client.client_name = "Code Client".to_string();
    client.client_secrets = vec![ClientSecret::new(
        Sha512Hasher.digest("secret").expect("sha512 digest"),
    )];
    client.redirect_uris = vec![CALLBACK.to_string(), CALLBACK_WITH_QUERY.to_string()];
    client.allow_access_to_all_scopes = true;
    client.require_consent = false;
    client
}

fn single_uri_client() -> Client {
    let mut client = Client::new("single_client", Flow::AuthorizationCode);
    client.redirect_uris = vec![CALLBACK_WITH_QUERY.to_string()];
    client.allow_access_to_all_scopes = true;
    client
}

fn store() -> Arc<InMemoryClientStore> {
    Arc::new(InMemoryClientStore::new(
        vec![code_client(), single_uri_client()],
        vec![Scope::identity("openid"), Scope::resource("api")],
    ))
}

fn validator() -> AuthorizeRequestValidator {
    AuthorizeRequestValidator::new(store(), ValidatorConfig::default())
}

fn authorize(redirect_uri: Option<&str>) -> AuthorizeRequest {
    let request = AuthorizeRequest::new("code_client", "code")
        .with_scope("openid")
        .with_state("123_state")
        .with_nonce("123_nonce");
    match redirect_uri {
        Some(uri) => request.with_redirect_uri(uri),
        None => request,
    }
}

#[tokio::test]
async fn unregistered_redirect_uri_is_unauthorized_client() {
    let outcome = validator().validate(&authorize(Some("https://bad"))).await;
    assert!(outcome.is_error());
    assert_eq!(outcome.error_code(), Some(ErrorCode::UnauthorizedClient));
}

#[tokio::test]
async fn missing_redirect_uri_with_several_registered_is_invalid_request() {
    let outcome = validator().validate(&authorize(None)).await;
    assert_eq!(outcome.error_code(), Some(ErrorCode::InvalidRequest));
}

#[tokio::test]
async fn exact_redirect_uri_with_query_is_accepted_unchanged() {
    let outcome = validator()
        .validate(&authorize(Some(CALLBACK_WITH_QUERY)))
        .await;
    let validated = outcome.success().expect("request should be accepted");
    assert_eq!(validated.redirect_uri, CALLBACK_WITH_QUERY);
    assert_eq!(validated.state.as_deref(), Some("123_state"));
    assert_eq!(validated.nonce.as_deref(), Some("123_nonce"));
    assert!(!validated.require_consent);
}

#[tokio::test]
async fn reordered_query_parameters_are_unauthorized_client() {
    let outcome = validator()
        .validate(&authorize(Some(
            "https://code_client/callback?baz=quux&foo=bar",
        )))
        .await;
    assert_eq!(outcome.error_code(), Some(ErrorCode::UnauthorizedClient));
}

#[tokio::test]
async fn single_registered_uri_is_selected_when_omitted() {
    let request = AuthorizeRequest::new("single_client", "code").with_scope("openid");
    let outcome = validator().validate(&request).await;
    assert_eq!(
        outcome.success().expect("accepted").redirect_uri,
        CALLBACK_WITH_QUERY
    );
}

#[tokio::test]
async fn outcome_serializes_for_the_http_layer() {
    let rejected = validator().validate(&authorize(Some("https://bad"))).await;
    let json = serde_json::to_value(&rejected).unwrap();
    assert_eq!(json["error"], "unauthorized_client");
    assert!(json.get("success").is_none());

    let accepted = validator().validate(&authorize(Some(CALLBACK))).await;
    let json = serde_json::to_value(&accepted).unwrap();
    assert_eq!(json["success"]["redirect_uri"], CALLBACK);
    assert_eq!(json["success"]["response_type"], "code");
    assert_eq!(json["success"]["flow"], "authorization_code");
}

#[test]
fn forged_subject_claim_is_dropped() {
    let clock = FixedClock::from_epoch_secs(1_700_000_000);
    let assertion = IdentityAssertionBuilder::new("bob", "custom")
        .with_claims(vec![Claim::new("sub", "mallory")])
        .build(&clock)
        .unwrap();

    let subjects: Vec<&str> = assertion
        .claims_of_type("sub")
        .map(|c| c.value.as_str())
        .collect();
    assert_eq!(subjects, vec!["bob"]);
    assert_eq!(assertion.subject(), "bob");
    assert_eq!(assertion.identity_provider(), "local");
    assert_eq!(assertion.claims().len(), 4);
}

#[test]
fn custom_grant_result_states() {
    let clock = FixedClock::from_epoch_secs(1_700_000_000);

    assert!(GrantValidationResult::default().is_pending());
    assert!(GrantValidationResult::error("invalid_grant").is_error());

    let result = GrantValidationResult::success(
        "bob",
        "custom",
        Some(vec![
            Claim::new("sub", "mallory"),
            Claim::new("role", "attorney"),
            Claim::new("role", "attorney"),
        ]),
        None,
        &clock,
    );
    let assertion = result.assertion().expect("success");
    assert_eq!(assertion.find_claim("sub").unwrap().value, "bob");
    assert_eq!(assertion.claims_of_type("role").count(), 1);
}

#[tokio::test]
async fn token_endpoint_client_authentication() {
    let store = store();
    let validator = ClientSecretValidator::new(Arc::new(Sha512Hasher));

    let (client_id, secret) = parse_basic_auth("Basic Y29kZV9jbGllbnQ6c2VjcmV0").unwrap();
    let client = authenticate_client(&*store, &client_id, &secret, &validator)
        .await
        .unwrap();
    assert_eq!(client.client_id, "code_client");

    let err = authenticate_client(&*store, "code_client", "Secret", &validator)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::InvalidClient);
}
