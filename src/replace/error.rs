use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("backreference \\{group} is out of range; pattern has {group_count} groups")]
    GroupOutOfRange { group: usize, group_count: usize },
    #[error("backreference \\k<{name}> does not name a capture group")]
    UnknownGroupName { name: String },
    #[error("named backreference starting at byte {position} is missing its closing '>'")]
    UnterminatedName { position: usize },
}
