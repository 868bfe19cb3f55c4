#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WorkspaceNotificationType {
    Slack,
    CustomerIo,
    Unknown,
}
