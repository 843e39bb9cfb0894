use std::fmt;

/// Output lines written by a pattern demo.
///
/// Demos write here instead of stdout so the documented sample output can be
/// checked line by line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Runs `demo` against a fresh transcript.
    pub fn capture(demo: fn(&mut Transcript)) -> Self {
        let mut out = Self::new();
        demo(&mut out);
        out
    }

    pub fn line(&mut self, text: impl fmt::Display) {
        self.lines.push(text.to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_lines(out: &mut Transcript) {
        out.line("first");
        out.line(2);
    }

    #[test]
    fn test_capture_collects_lines_in_order() {
        let out = Transcript::capture(two_lines);
        assert_eq!(out.lines(), ["first", "2"]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_render_adds_trailing_newline() {
        let out = Transcript::capture(two_lines);
        assert_eq!(out.render(), "first\n2\n");
        assert_eq!(out.to_string(), "first\n2\n");
    }

    #[test]
    fn test_empty_render() {
        let out = Transcript::new();
        assert!(out.is_empty());
        assert_eq!(out.render(), "");
    }
}
