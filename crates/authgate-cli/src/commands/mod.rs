pub mod assert;
pub mod authenticate;
pub mod authorize;
pub mod hash_secret;

/// Whether the core accepted or rejected what the command asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Accepted,
    Rejected,
}

impl CommandStatus {
    /// Process exit code: 0 when accepted, 2 when rejected.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Accepted => 0,
            Self::Rejected => 2,
        }
    }
}
