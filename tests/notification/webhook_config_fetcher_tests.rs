use airbyte_notification_audit::{
    notification::domain::{
        model::{
            enums::{
                notification_domain_error::NotificationDomainError,
                notification_type::NotificationType,
            },
            value_objects::{
                customer_io_email_config::CustomerIoEmailConfig, webhook_config::WebhookConfig,
            },
        },
        services::config_fetcher::ConfigFetcher,
    },
    workspace_integration::interfaces::acl::workspace_facade::WorkspaceIntegrationError,
};

use crate::support::{
    CONNECTION_ID, SLACK_WEBHOOK, connection_id, create_fetcher_harness, customerio_notification,
    slack_notification, slack_notification_without_configuration, workspace_with,
    workspace_without_notifications,
};

#[tokio::test]
async fn fetch_config_returns_none_when_workspace_has_no_notifications() {
    let harness = create_fetcher_harness(workspace_without_notifications());

    let config = harness
        .fetcher
        .fetch_config(&connection_id())
        .await
        .expect("lookup should succeed");

    assert_eq!(config, None);
    assert_eq!(
        harness
            .workspace_facade
            .requested_connection_ids()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        vec![CONNECTION_ID.to_string()]
    );
}

#[tokio::test]
async fn fetch_config_returns_none_when_notification_list_is_empty() {
    let harness = create_fetcher_harness(workspace_with(vec![]));

    let config = harness
        .fetcher
        .fetch_config(&connection_id())
        .await
        .expect("lookup should succeed");

    assert_eq!(config, None);
}

#[tokio::test]
async fn fetch_config_returns_none_without_slack_notification() {
    let harness = create_fetcher_harness(workspace_with(vec![
        customerio_notification(),
        customerio_notification(),
    ]));

    let config = harness
        .fetcher
        .fetch_config(&connection_id())
        .await
        .expect("lookup should succeed");

    assert_eq!(config, None);
}

#[tokio::test]
async fn fetch_config_returns_webhook_of_single_slack_notification() {
    let harness = create_fetcher_harness(workspace_with(vec![slack_notification(Some(
        SLACK_WEBHOOK,
    ))]));

    let config = harness
        .fetcher
        .fetch_config(&connection_id())
        .await
        .expect("lookup should succeed");

    assert_eq!(config, Some(WebhookConfig::new(SLACK_WEBHOOK)));
}

#[tokio::test]
async fn fetch_config_finds_slack_notification_after_other_channels() {
    let harness = create_fetcher_harness(workspace_with(vec![
        customerio_notification(),
        slack_notification(Some(SLACK_WEBHOOK)),
    ]));

    let config = harness
        .fetcher
        .fetch_config(&connection_id())
        .await
        .expect("lookup should succeed");

    assert_eq!(
        config.as_ref().map(WebhookConfig::webhook_url),
        Some(SLACK_WEBHOOK)
    );
}

#[tokio::test]
async fn fetch_config_uses_first_slack_notification() {
    let harness = create_fetcher_harness(workspace_with(vec![
        slack_notification(Some(SLACK_WEBHOOK)),
        slack_notification(Some("https://hooks.example.com/second")),
    ]));

    let config = harness
        .fetcher
        .fetch_config(&connection_id())
        .await
        .expect("lookup should succeed");

    assert_eq!(config, Some(WebhookConfig::new(SLACK_WEBHOOK)));
}

#[tokio::test]
async fn fetch_config_returns_none_when_first_slack_entry_lacks_webhook() {
    let harness = create_fetcher_harness(workspace_with(vec![
        slack_notification(None),
        slack_notification(Some(SLACK_WEBHOOK)),
    ]));

    let missing_webhook = harness
        .fetcher
        .fetch_config(&connection_id())
        .await
        .expect("lookup should succeed");
    assert_eq!(missing_webhook, None);

    harness
        .workspace_facade
        .set_workspace(workspace_with(vec![slack_notification_without_configuration()]));

    let missing_configuration = harness
        .fetcher
        .fetch_config(&connection_id())
        .await
        .expect("lookup should succeed");
    assert_eq!(missing_configuration, None);
}

#[tokio::test]
async fn fetch_config_passes_empty_webhook_through() {
    let harness = create_fetcher_harness(workspace_with(vec![slack_notification(Some(""))]));

    let config = harness
        .fetcher
        .fetch_config(&connection_id())
        .await
        .expect("lookup should succeed");

    assert_eq!(config, Some(WebhookConfig::new("")));
}

#[tokio::test]
async fn fetch_config_propagates_upstream_error_unchanged() {
    let harness = create_fetcher_harness(workspace_without_notifications());
    harness
        .workspace_facade
        .set_error(WorkspaceIntegrationError::Unavailable(
            "connection refused".to_string(),
        ));

    let result = harness.fetcher.fetch_config(&connection_id()).await;

    let error = result.expect_err("upstream failure expected");
    assert_eq!(
        error.to_string(),
        WorkspaceIntegrationError::Unavailable("connection refused".to_string()).to_string()
    );
    assert!(matches!(
        error,
        NotificationDomainError::Upstream(WorkspaceIntegrationError::Unavailable(ref message))
            if message == "connection refused"
    ));
    assert_eq!(harness.workspace_facade.requested_connection_ids().len(), 1);
}

#[tokio::test]
async fn notification_type_is_webhook_regardless_of_fetch_outcomes() {
    let harness = create_fetcher_harness(workspace_with(vec![slack_notification(Some(
        SLACK_WEBHOOK,
    ))]));
    assert_eq!(harness.fetcher.notification_type(), NotificationType::Webhook);

    let _ = harness.fetcher.fetch_config(&connection_id()).await;
    assert_eq!(harness.fetcher.notification_type(), NotificationType::Webhook);

    harness
        .workspace_facade
        .set_error(WorkspaceIntegrationError::NotFound("gone".to_string()));
    let _ = harness.fetcher.fetch_config(&connection_id()).await;
    assert_eq!(harness.fetcher.notification_type(), NotificationType::Webhook);
    assert_eq!(harness.fetcher.notification_type().as_str(), "webhook");
}

#[test]
fn customer_io_email_config_keeps_recipient() {
    let config = CustomerIoEmailConfig::new("alerts@example.com");

    assert_eq!(config.to(), "alerts@example.com");
    assert_eq!(NotificationType::CustomerIo.as_str(), "customerio");
}
