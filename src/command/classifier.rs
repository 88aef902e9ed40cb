//! Input line classification

/// The classified intent of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Exit,
    ListAll,
    Help,
    MarkDone,
    AddTodo,
    AddDeadline,
    AddEvent,
    Delete,
    Unknown,
}

/// Classify a raw input line.
///
/// Exact matches ("bye", "list", "help") are checked before keyword
/// prefixes; anything unmatched is `Unknown`. Matching is case-insensitive
/// and the line is taken as typed, whitespace included.
pub fn classify(line: &str) -> CommandKind {
    if line.eq_ignore_ascii_case("bye") {
        CommandKind::Exit
    } else if line.eq_ignore_ascii_case("list") {
        CommandKind::ListAll
    } else if line.eq_ignore_ascii_case("help") {
        CommandKind::Help
    } else if has_keyword(line, "done") {
        CommandKind::MarkDone
    } else if has_keyword(line, "todo") {
        CommandKind::AddTodo
    } else if has_keyword(line, "deadline") {
        CommandKind::AddDeadline
    } else if has_keyword(line, "event") {
        CommandKind::AddEvent
    } else if has_keyword(line, "delete") {
        CommandKind::Delete
    } else {
        CommandKind::Unknown
    }
}

fn has_keyword(line: &str, keyword: &str) -> bool {
    line.get(..keyword.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(keyword))
}
