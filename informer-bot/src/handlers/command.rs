//! Slash-command parsing.

/// Splits `/cmd@botname rest` into `("/cmd", "rest")`. `None` when `text` is not a command.
pub fn parse_command(text: &str) -> Option<(&str, &str)> {
    let text = text.trim();
    if !text.starts_with('/') {
        return None;
    }
    let (head, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));
    let command = head.split('@').next().unwrap_or(head);
    Some((command, rest.trim()))
}
