use thiserror::Error;

/// Failures the tracker reports back to the user.
///
/// All of these are recoverable: the console renders the message and keeps
/// reading input. Display text is user-facing; the console appends the
/// `help` hint line itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("Wrong format: {0}!")]
    MissingArgument(String),

    #[error("You don't have any tasks yet! Enter a task")]
    EmptyList,

    #[error("No task numbered {index} - use \"list\" to view your current tasks")]
    IndexOutOfRange { index: i64, size: usize },

    #[error("The list already holds {capacity} tasks")]
    Overflow { capacity: usize },

    #[error("No idea what \"{0}\" means!")]
    UnrecognizedCommand(String),

    #[error("List is full! Use \"list\" to view your tasks or \"bye\" to exit")]
    ListFull,
}

pub type Result<T> = std::result::Result<T, TrackerError>;
