/// Split a numbered-list reply into ideas.
///
/// Each non-blank line becomes one idea with its leading `N.` marker
/// removed. The count is not checked: whatever the model returned is kept.
pub fn parse_ideas(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_list_marker)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    let line = line.trim_start();
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    match rest.strip_prefix('.') {
        Some(after) => after.trim_start(),
        None => line,
    }
}
