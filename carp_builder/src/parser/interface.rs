use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Gap between the flags column and the help column.
#[derive(Debug)]
pub(crate) struct PaddingWidth(usize);

impl PaddingWidth {
    pub(crate) fn new(width: usize) -> Option<Self> {
        (width >= 1).then_some(Self(width))
    }
}

/// Width of the flags column.
#[derive(Debug)]
pub(crate) struct LeftWidth(usize);

impl LeftWidth {
    pub(crate) fn new(width: usize) -> Option<Self> {
        (width >= 1).then_some(Self(width))
    }
}

/// Width of the help column, including its indent.
#[derive(Debug)]
pub(crate) struct MiddleWidth(usize);

impl MiddleWidth {
    // A long word is split into a character and a hyphen, at the least.
    pub(crate) fn new(width: usize) -> Option<Self> {
        (width >= 2).then_some(Self(width))
    }
}

/// Width of the terminal.
#[derive(Debug)]
pub(crate) struct TotalWidth(pub usize);

/// Lays out help lines as two columns: the argument flags, then its description wrapped to the column width.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    padding: PaddingWidth,
    left: LeftWidth,
    middle: MiddleWidth,
}

// Fraction of the terminal the help text may fill.
const TERMINAL_FILL: f64 = 0.95;

// Room for about three words of average length.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

impl ColumnRenderer {
    /// Size the help column to the terminal.
    ///
    /// The requested `middle` width is kept (or raised to [`MINIMUM_MIDDLE_WIDTH`]) when it fits within the fill target.
    /// Otherwise the help column takes whatever the terminal has left, but never less than the minimum.
    pub(crate) fn guided(
        padding: PaddingWidth,
        left: LeftWidth,
        middle: MiddleWidth,
        total_width: TotalWidth,
    ) -> Self {
        let TotalWidth(total) = total_width;
        let flags = left.0 + padding.0;
        let preferred = middle.0.max(MINIMUM_MIDDLE_WIDTH);
        let fill = (total as f64 * TERMINAL_FILL) as usize;

        let chosen = if flags + preferred <= fill {
            preferred
        } else {
            total.saturating_sub(flags).max(MINIMUM_MIDDLE_WIDTH)
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Help column width {chosen} (flags {flags}, terminal {total}, requested {}).", middle.0);
        }

        Self::new(padding, left, MiddleWidth(chosen))
    }

    pub(crate) fn new(padding: PaddingWidth, left: LeftWidth, middle: MiddleWidth) -> Self {
        Self {
            padding,
            left,
            middle,
        }
    }

    /// Render one argument, producing a line per wrapped piece of its description.
    pub(crate) fn render(&self, indent: usize, flags: &str, description: &str) -> Vec<String> {
        let flags_width = self.left.0;
        assert!(
            flags.chars().count() <= flags_width,
            "internal error - flags '{flags}' exceed the column width {flags_width}"
        );
        let gap = " ".repeat(self.padding.0);
        let pieces = wrap(description, self.middle.0.saturating_sub(indent));

        if pieces.is_empty() {
            return vec![format!("{:indent$}{flags}", "")];
        }

        pieces
            .iter()
            .enumerate()
            .map(|(i, piece)| {
                let flags = if i == 0 { flags } else { "" };
                format!("{:indent$}{flags:flags_width$}{gap}{piece}", "")
            })
            .collect()
    }
}

/// Break `text` on spaces into lines of at most `width` characters.
/// Words longer than `width` are split with a trailing hyphen.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::default();
    let mut line = String::default();

    for word in text.split(' ').filter(|word| !word.is_empty()) {
        let fits = line.chars().count() + 1 + word.chars().count() <= width;

        if !line.is_empty() && fits {
            line.push(' ');
            line.push_str(word);
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }

        let (pieces, rest) = split_word(word, width);
        lines.extend(pieces);
        line = rest;
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

/// Cut hyphenated pieces off `word` until the rest fits in `width`.
fn split_word(word: &str, width: usize) -> (Vec<String>, String) {
    let characters: Vec<char> = word.chars().collect();
    let step = width.saturating_sub(1).max(1);
    let mut rest = characters.as_slice();
    let mut pieces = Vec::default();

    while rest.len() > width {
        let (head, tail) = rest.split_at(step);
        pieces.push(format!("{}-", head.iter().collect::<String>()));
        rest = tail;
    }

    (pieces, rest.iter().collect())
}

/// Where the parser writes help text and errors.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
}

/// Help text on stdout, errors on stderr.
#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }
}


#[cfg(test)]
mod tests {
    use super::util::*;
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 5, vec![])]
    #[case("abc", 5, vec!["abc"])]
    #[case("abc def", 7, vec!["abc def"])]
    #[case("abc def", 6, vec!["abc", "def"])]
    #[case("abc  def", 7, vec!["abc def"])]
    #[case("abcdef", 4, vec!["abc-", "def"])]
    #[case("abcdefg", 4, vec!["abc-", "defg"])]
    #[case("abcdefgh", 4, vec!["abc-", "def-", "gh"])]
    #[case("ab abcdefg", 4, vec!["ab", "abc-", "defg"])]
    #[case("∞∞∞∞∞∞", 4, vec!["∞∞∞-", "∞∞∞"])]
    #[case("abc", 1, vec!["a-", "b-", "c"])]
    fn wrap_text(#[case] text: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(wrap(text, width), expected);
    }

    #[test]
    fn render_single() {
        // Setup
        let renderer = ColumnRenderer::new(
            PaddingWidth::new(2).unwrap(),
            LeftWidth::new(5).unwrap(),
            MiddleWidth::new(10).unwrap(),
        );

        // Execute
        let lines = renderer.render(1, "-a", "abc def");

        // Verify
        assert_eq!(lines, vec![" -a     abc def"]);
    }

    #[test]
    fn render_wrapped() {
        // Setup
        let renderer = ColumnRenderer::new(
            PaddingWidth::new(2).unwrap(),
            LeftWidth::new(5).unwrap(),
            MiddleWidth::new(8).unwrap(),
        );

        // Execute
        let lines = renderer.render(1, "-a", "abc def ghi");

        // Verify
        assert_eq!(lines, vec![" -a     abc def", "        ghi"]);
    }

    #[test]
    fn render_no_description() {
        // Setup
        let renderer = ColumnRenderer::new(
            PaddingWidth::new(2).unwrap(),
            LeftWidth::new(5).unwrap(),
            MiddleWidth::new(8).unwrap(),
        );

        // Execute
        let lines = renderer.render(1, "-a", "");

        // Verify
        assert_eq!(lines, vec![" -a"]);
    }

    #[rstest]
    #[case(100, 20)]
    #[case(30, 20)]
    #[case(10, MINIMUM_MIDDLE_WIDTH)]
    fn guided(#[case] total: usize, #[case] expected_middle: usize) {
        // Execute
        let renderer = ColumnRenderer::guided(
            PaddingWidth::new(2).unwrap(),
            LeftWidth::new(8).unwrap(),
            MiddleWidth::new(20).unwrap(),
            TotalWidth(total),
        );

        // Verify
        assert_eq!(renderer.middle.0, expected_middle);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn width_minimums(#[case] width: usize) {
        assert_eq!(MiddleWidth::new(width).is_some(), width >= 2);
        assert_eq!(LeftWidth::new(width).is_some(), width >= 1);
        assert_eq!(PaddingWidth::new(width).is_some(), width >= 1);
    }

    #[test]
    fn in_memory() {
        // Setup
        let interface = InMemoryInterface::default();

        // Execute
        interface.print("abc".to_string());
        interface.print("def".to_string());
        interface.print_error(ParseError::UnknownArgument("--x".to_string()));

        // Verify
        let (message, error) = interface.consume();
        assert_eq!(message, Some("abc\ndef".to_string()));
        assert_eq!(error, Some("Parse error: Unknown argument [--x].".to_string()));
    }

    #[test]
    fn channel() {
        // Setup
        let (sender, receiver) = channel_interface();

        // Execute
        sender.print("abc".to_string());
        sender.print_error(ParseError::UnknownArgument("--x".to_string()));
        sender.print("def".to_string());
        drop(sender);

        // Verify
        let (message, error) = receiver.consume();
        assert_eq!(message, Some("abc\ndef".to_string()));
        assert_eq!(error, Some("Parse error: Unknown argument [--x].".to_string()));
    }
}
