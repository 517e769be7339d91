/// Lines before the anchor line included in a window
const WINDOW_BEFORE: usize = 2;
/// Lines after the anchor line included in a window
const WINDOW_AFTER: usize = 3;

/// Text a rule is allowed to inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The raw anchor line only
    Line,
    /// The anchor line plus its neighbors
    Window,
}

/// Context passed to rules for one anchor line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContext<'a> {
    /// 1-based line number
    pub line_number: usize,
    pub line: &'a str,
    pub window: String,
}

impl<'a> LineContext<'a> {
    /// Build the context for 1-based `line_number` over `lines`.
    ///
    /// The window spans lines `line_number - 2 ..= line_number + 3`,
    /// clipped at both ends of the file.
    pub fn new(lines: &[&'a str], line_number: usize) -> Self {
        let index = line_number - 1;
        let start = index.saturating_sub(WINDOW_BEFORE);
        let end = (index + WINDOW_AFTER + 1).min(lines.len());

        Self {
            line_number,
            line: lines[index],
            window: lines[start..end].join("\n"),
        }
    }

    /// Text visible under the given scope
    pub fn text(&self, scope: Scope) -> &str {
        match scope {
            Scope::Line => self.line,
            Scope::Window => &self.window,
        }
    }
}

/// Split source text on `\n`.
///
/// Empty text has no lines. A final `\n` leaves an empty last line, which is
/// still an anchor whose window covers the end of the file.
pub fn split_lines(source: &str) -> Vec<&str> {
    if source.is_empty() {
        Vec::new()
    } else {
        source.split('\n').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbered(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("l{}", i)).collect()
    }

    #[test]
    fn test_split_lines_empty() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_lines_without_trailing_newline() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_lines_keeps_empty_last_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines("\n"), vec!["", ""]);
    }

    #[test]
    fn test_split_lines_only_breaks_on_newline() {
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn test_trailing_anchor_window_sees_file_end() {
        let lines = split_lines("x\ny\n");
        let ctx = LineContext::new(&lines, 3);
        assert_eq!(ctx.line, "");
        assert_eq!(ctx.window, "x\ny\n");
    }

    #[test]
    fn test_window_in_middle() {
        let owned = numbered(10);
        let lines: Vec<&str> = owned.iter().map(String::as_str).collect();

        let ctx = LineContext::new(&lines, 5);
        assert_eq!(ctx.line, "l5");
        assert_eq!(ctx.window, "l3\nl4\nl5\nl6\nl7\nl8");
    }

    #[test]
    fn test_window_clipped_at_start() {
        let owned = numbered(10);
        let lines: Vec<&str> = owned.iter().map(String::as_str).collect();

        let ctx = LineContext::new(&lines, 1);
        assert_eq!(ctx.window, "l1\nl2\nl3\nl4");

        let ctx = LineContext::new(&lines, 2);
        assert_eq!(ctx.window, "l1\nl2\nl3\nl4\nl5");
    }

    #[test]
    fn test_window_clipped_at_end() {
        let owned = numbered(10);
        let lines: Vec<&str> = owned.iter().map(String::as_str).collect();

        let ctx = LineContext::new(&lines, 10);
        assert_eq!(ctx.window, "l8\nl9\nl10");
    }

    #[test]
    fn test_single_line_window() {
        let lines = vec!["only"];
        let ctx = LineContext::new(&lines, 1);
        assert_eq!(ctx.window, "only");
        assert_eq!(ctx.text(Scope::Line), "only");
    }

    #[test]
    fn test_text_by_scope() {
        let lines = vec!["a", "b", "c"];
        let ctx = LineContext::new(&lines, 2);
        assert_eq!(ctx.text(Scope::Line), "b");
        assert_eq!(ctx.text(Scope::Window), "a\nb\nc");
    }
}
