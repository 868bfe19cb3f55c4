use crate::workspace_integration::domain::model::enums::workspace_notification_type::WorkspaceNotificationType;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkspaceRecord {
    pub workspace_id: String,
    pub name: String,
    pub notifications: Option<Vec<WorkspaceNotification>>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkspaceNotification {
    pub notification_type: WorkspaceNotificationType,
    pub send_on_success: bool,
    pub send_on_failure: bool,
    pub slack_configuration: Option<SlackConfiguration>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlackConfiguration {
    pub webhook: Option<String>,
}
