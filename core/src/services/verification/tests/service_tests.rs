//! Unit tests for verification service

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{VerificationRecord, TOKEN_LENGTH};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{MockTokenStore, TokenStore};
use crate::services::verification::VerificationService;

use super::mocks::{CorporateOnlyValidator, MockNotifier};

fn create_service(
    notifier_fails: bool,
) -> (
    VerificationService<MockTokenStore, MockNotifier>,
    Arc<MockTokenStore>,
    Arc<MockNotifier>,
) {
    let store = Arc::new(MockTokenStore::new());
    let notifier = Arc::new(MockNotifier::new(notifier_fails));
    let service = VerificationService::new(store.clone(), notifier.clone());
    (service, store, notifier)
}

#[tokio::test]
async fn test_begin_then_consume() {
    let (service, store, _) = create_service(false);

    let token = service.begin("alice@example.com").await.unwrap();
    assert_eq!(token.len(), TOKEN_LENGTH);
    assert!(VerificationRecord::is_well_formed_token(&token));

    let stored = store.get(&token).await.unwrap().unwrap();
    assert_eq!(stored, VerificationRecord::new(token.clone(), "alice@example.com"));

    let result = service.consume(&token).await.unwrap();
    assert!(result.valid);
    assert_eq!(result.email.as_deref(), Some("alice@example.com"));
}

#[tokio::test]
async fn test_consume_is_single_use() {
    let (service, store, _) = create_service(false);

    let token = service.begin("alice@example.com").await.unwrap();

    assert!(service.consume(&token).await.unwrap().valid);
    let second = service.consume(&token).await.unwrap();
    assert!(!second.valid);
    assert!(second.email.is_none());
    assert!(store.get(&token).await.unwrap().is_none());
}

#[tokio::test]
async fn test_consume_unknown_token() {
    let (service, store, _) = create_service(false);

    let result = service
        .consume("00000000000000000000000000000000")
        .await
        .unwrap();
    assert!(!result.valid);
    // Nothing was removed, so nothing was written
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_consume_malformed_token_skips_store() {
    let (service, store, _) = create_service(false);
    store.set_fail_writes(true);

    for token in ["", "short", "../../etc/passwd", "ZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZ"] {
        let result = service.consume(token).await.unwrap();
        assert!(!result.valid);
    }
}

#[tokio::test]
async fn test_begin_rejects_malformed_email() {
    let (service, store, _) = create_service(false);

    let result = service.begin("not-an-email").await;
    match result.unwrap_err() {
        DomainError::Validation(ValidationError::InvalidEmail { email }) => {
            assert_eq!(email, "not-an-email");
        }
        other => panic!("Expected validation error, got {:?}", other),
    }

    assert!(store.is_empty().await);
    let guess = VerificationService::<MockTokenStore, MockNotifier>::generate_token();
    assert!(!service.consume(&guess).await.unwrap().valid);
}

#[tokio::test]
async fn test_begin_propagates_persistence_error() {
    let (service, store, _) = create_service(false);
    store.set_fail_writes(true);

    let err = service.begin("alice@example.com").await.unwrap_err();
    assert!(matches!(err, DomainError::Persistence(_)));
    assert!(err.is_retryable());
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn test_consume_persistence_failure_keeps_token() {
    let (service, store, _) = create_service(false);

    let token = service.begin("alice@example.com").await.unwrap();

    store.set_fail_writes(true);
    let err = service.consume(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Persistence(_)));
    assert!(store.get(&token).await.unwrap().is_some());

    // Retry after the disk recovers
    store.set_fail_writes(false);
    assert!(service.consume(&token).await.unwrap().valid);
    assert!(!service.consume(&token).await.unwrap().valid);
}

#[tokio::test]
async fn test_send_verification_delivers_once() {
    let (service, _, notifier) = create_service(false);

    let sent = service.send_verification("alice@example.com").await.unwrap();
    assert_eq!(sent.email, "alice@example.com");
    assert_eq!(
        notifier.delivered(),
        vec![("alice@example.com".to_string(), sent.token.clone())]
    );

    assert!(service.consume(&sent.token).await.unwrap().valid);
    assert!(!service.consume(&sent.token).await.unwrap().valid);
    assert_eq!(notifier.delivered().len(), 1);
}

#[tokio::test]
async fn test_send_verification_withdraws_token_on_delivery_failure() {
    let (service, store, notifier) = create_service(true);

    let err = service.send_verification("alice@example.com").await.unwrap_err();
    match err {
        DomainError::Delivery { message } => assert_eq!(message, "Mail relay unavailable"),
        other => panic!("Expected delivery error, got {:?}", other),
    }
    assert!(store.is_empty().await);
    assert!(notifier.delivered().is_empty());
}

#[tokio::test]
async fn test_send_verification_invalid_email_never_delivers() {
    let (service, _, notifier) = create_service(false);

    let err = service.send_verification("bob@").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert!(notifier.delivered().is_empty());
}

#[tokio::test]
async fn test_custom_validator() {
    let (service, _, _) = create_service(false);
    let service = service.with_validator(Arc::new(CorporateOnlyValidator));

    assert!(service.begin("alice@example.com").await.is_err());
    assert!(service.begin("alice@corp.example").await.is_ok());
    assert_eq!(service.outstanding().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_begin_yields_distinct_tokens() {
    let (service, _, _) = create_service(false);
    let service = Arc::new(service);

    let mut handles = Vec::new();
    for i in 0..64 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.begin(&format!("user{}@example.com", i)).await
        }));
    }

    let mut tokens = HashSet::new();
    for handle in handles {
        tokens.insert(handle.await.unwrap().unwrap());
    }
    assert_eq!(tokens.len(), 64);
    assert_eq!(service.outstanding().await, 64);

    for token in &tokens {
        assert!(service.consume(token).await.unwrap().valid);
        assert!(!service.consume(token).await.unwrap().valid);
    }
    assert_eq!(service.outstanding().await, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_consume_single_winner() {
    let (service, _, _) = create_service(false);
    let service = Arc::new(service);
    let token = service.begin("alice@example.com").await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..32 {
        let service = service.clone();
        let token = token.clone();
        handles.push(tokio::spawn(async move { service.consume(&token).await }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap().valid {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
}
