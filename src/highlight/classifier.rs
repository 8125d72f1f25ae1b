//! Line-level classification of markdown-like cheat sheets.
//!
//! Every line is assigned a [`LineState`] in a single forward pass. The scan
//! remembers only the previous line's state and whether it was blank, and
//! peeks exactly one line ahead to recognise setext titles (a line followed
//! by `===` or `---`).
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! 1. blank line (inherits an open list)
//! 2. `#` heading
//! 3. `>` blockquote, only after a blank line or inside a blockquote
//! 4. tab or four-space code block, only after a blank line or inside a code block
//! 5. setext title, when the next line is an underline
//! 6. the underline itself, closing a title
//! 7. numbered list item
//! 8. bulleted list item
//! 9. `---` separator
//! 10. continuation of an open list or blockquote
//! 11. paragraph

use regex::Regex;
use std::iter::{FusedIterator, Peekable};
use std::sync::OnceLock;
use strum::{Display, EnumIter};

/// Semantic role of a line for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LineState {
    Paragraph,
    Title,
    Bulleted,
    Numbered,
    Blockquote,
    Codeblock,
    Separator,
}

impl LineState {
    /// Whether this state is a list item.
    pub fn is_list(self) -> bool {
        matches!(self, LineState::Bulleted | LineState::Numbered)
    }
}

/// A source line together with the state it renders under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub text: &'a str,
    pub state: LineState,
}

/// What a single rule produced for a line, before it is folded into the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// The line carries this state and passes it on.
    Marked(LineState),
    /// Empty line, optionally holding an open list's state.
    Blank(Option<LineState>),
    /// A title underline: renders as a title, but nothing propagates past it.
    Underline,
}

impl Outcome {
    fn rendered(self) -> LineState {
        match self {
            Outcome::Marked(state) => state,
            Outcome::Blank(inherited) => inherited.unwrap_or(LineState::Paragraph),
            Outcome::Underline => LineState::Title,
        }
    }
}

struct Patterns {
    blockquote: Regex,
    numbered: Regex,
    bulleted: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        blockquote: Regex::new(r"^ {0,3}>").unwrap(),
        numbered: Regex::new(r"^\s*\d+\. ").unwrap(),
        bulleted: Regex::new(r"^\s*[*-] ").unwrap(),
    })
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_underline(line: &str) -> bool {
    line.starts_with("===") || line.starts_with("---")
}

fn is_code_indent(line: &str) -> bool {
    line.starts_with('\t') || line.starts_with("    ")
}

/// State carried from one line to the next.
///
/// The start of a document behaves like the line after a blank line, so a
/// document may open directly with a blockquote or a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScanState {
    previous: Option<LineState>,
    previous_blank: bool,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            previous: None,
            previous_blank: true,
        }
    }
}

impl ScanState {
    fn continues(&self, state: LineState) -> bool {
        self.previous == Some(state)
    }

    fn classify(&self, line: &str, next: &str) -> Outcome {
        let patterns = patterns();

        match line {
            // A list holds its color through one blank separator, not a run of them
            l if is_blank(l) => {
                Outcome::Blank(self.previous.filter(|s| s.is_list() && !self.previous_blank))
            }
            l if l.starts_with('#') => Outcome::Marked(LineState::Title),
            l if patterns.blockquote.is_match(l)
                && (self.continues(LineState::Blockquote) || self.previous_blank) =>
            {
                Outcome::Marked(LineState::Blockquote)
            }
            l if is_code_indent(l)
                && (self.continues(LineState::Codeblock) || self.previous_blank) =>
            {
                Outcome::Marked(LineState::Codeblock)
            }
            _ if is_underline(next) => Outcome::Marked(LineState::Title),
            l if self.continues(LineState::Title) && is_underline(l) && !self.previous_blank => {
                Outcome::Underline
            }
            l if patterns.numbered.is_match(l) => Outcome::Marked(LineState::Numbered),
            l if patterns.bulleted.is_match(l) => Outcome::Marked(LineState::Bulleted),
            l if l.starts_with("---") => Outcome::Marked(LineState::Separator),
            _ => match self.previous {
                Some(state)
                    if (state.is_list() || state == LineState::Blockquote)
                        && !self.previous_blank =>
                {
                    Outcome::Marked(state)
                }
                _ => Outcome::Marked(LineState::Paragraph),
            },
        }
    }

    fn advance(&mut self, outcome: Outcome) {
        *self = match outcome {
            Outcome::Marked(state) => Self {
                previous: Some(state),
                previous_blank: false,
            },
            Outcome::Blank(inherited) => Self {
                previous: inherited,
                previous_blank: true,
            },
            Outcome::Underline => Self::default(),
        };
    }
}

/// Streaming classifier over a sequence of lines.
///
/// Holds the current line and one line of lookahead; a line is yielded as
/// soon as its successor (or the end of input) is known.
pub struct Classifier<I: Iterator> {
    lines: Peekable<I>,
    scan: ScanState,
}

impl<'a, I> Classifier<I>
where
    I: Iterator<Item = &'a str>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines: lines.peekable(),
            scan: ScanState::default(),
        }
    }
}

impl<'a, I> Iterator for Classifier<I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = ClassifiedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        let next = self.lines.peek().copied().unwrap_or("");

        let outcome = self.scan.classify(line, next);
        self.scan.advance(outcome);

        Some(ClassifiedLine {
            text: line,
            state: outcome.rendered(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

impl<'a, I> FusedIterator for Classifier<I> where I: FusedIterator<Item = &'a str> {}

/// Classify an ordered sequence of lines.
pub fn classify<'a, L>(lines: L) -> Classifier<L::IntoIter>
where
    L: IntoIterator<Item = &'a str>,
{
    Classifier::new(lines.into_iter())
}

/// Split `text` on `\n` and classify every resulting line.
///
/// A trailing newline yields one final empty line.
pub fn classify_document(text: &str) -> Vec<ClassifiedLine<'_>> {
    classify(text.split('\n')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(text: &str) -> Vec<LineState> {
        classify_document(text).into_iter().map(|l| l.state).collect()
    }

    #[test]
    fn test_one_state_per_line_in_order() {
        let text = "# Title\n\n* a\n* b\n\n> quote\n\tcode\nplain";
        let classified = classify_document(text);
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(classified.len(), lines.len());
        for (classified, line) in classified.iter().zip(lines) {
            assert_eq!(classified.text, line);
        }
    }

    #[test]
    fn test_empty_document() {
        let classified = classify_document("");
        assert_eq!(classified.len(), 1);
        assert_eq!(classified[0].state, LineState::Paragraph);
    }

    #[test]
    fn test_trailing_newline_adds_blank_line() {
        assert_eq!(
            states("plain\n"),
            vec![LineState::Paragraph, LineState::Paragraph]
        );
    }

    #[test]
    fn test_hash_heading_is_title_anywhere() {
        for text in ["# Title", "plain\n# Title", "* item\n# Title", "> q\n# Title\n---"] {
            let classified = classify_document(text);
            let heading = classified.iter().find(|l| l.text == "# Title").unwrap();
            assert_eq!(heading.state, LineState::Title, "in {:?}", text);
        }
    }

    #[test]
    fn test_setext_title_with_dashes() {
        assert_eq!(
            states("Heading\n---\nafter"),
            vec![LineState::Title, LineState::Title, LineState::Paragraph]
        );
    }

    #[test]
    fn test_setext_title_with_equals() {
        assert_eq!(
            states("Heading\n=====\nafter"),
            vec![LineState::Title, LineState::Title, LineState::Paragraph]
        );
    }

    #[test]
    fn test_stacked_underlines_are_titles() {
        // Lookahead wins over the underline rule, so each rule above another is a title
        assert_eq!(
            states("Heading\n---\n---"),
            vec![LineState::Title, LineState::Title, LineState::Title]
        );
    }

    #[test]
    fn test_line_after_underline_starts_fresh() {
        // The underline behaves like a blank line for what follows
        assert_eq!(
            states("Heading\n===\n> quote"),
            vec![LineState::Title, LineState::Title, LineState::Blockquote]
        );
    }

    #[test]
    fn test_bare_rule_is_separator() {
        assert_eq!(states("---"), vec![LineState::Separator]);
        assert_eq!(
            states("text\n\n---\n\nmore"),
            vec![
                LineState::Paragraph,
                LineState::Paragraph,
                LineState::Separator,
                LineState::Paragraph,
                LineState::Paragraph,
            ]
        );
    }

    #[test]
    fn test_lookahead_overrides_list_marker() {
        assert_eq!(
            states("* item\n---"),
            vec![LineState::Title, LineState::Title]
        );
    }

    #[test]
    fn test_final_line_has_no_underline_lookahead() {
        assert_eq!(states("last line"), vec![LineState::Paragraph]);
    }

    #[test]
    fn test_bulleted_list_holds_across_blank_line() {
        assert_eq!(
            states("* item one\n\n* item two"),
            vec![LineState::Bulleted, LineState::Bulleted, LineState::Bulleted]
        );
    }

    #[test]
    fn test_list_color_ends_after_second_blank_line() {
        assert_eq!(
            states("* a\n\n\nplain"),
            vec![
                LineState::Bulleted,
                LineState::Bulleted,
                LineState::Paragraph,
                LineState::Paragraph
            ]
        );
        assert_eq!(
            states("1. a\n\n\n2. b"),
            vec![
                LineState::Numbered,
                LineState::Numbered,
                LineState::Paragraph,
                LineState::Numbered
            ]
        );
    }

    #[test]
    fn test_numbered_list_holds_across_blank_line() {
        assert_eq!(
            states("1. first\n\n2. second"),
            vec![LineState::Numbered, LineState::Numbered, LineState::Numbered]
        );
    }

    #[test]
    fn test_dash_bullets_and_indented_items() {
        assert_eq!(
            states("- one\n  - nested\n  10. numbered"),
            vec![LineState::Bulleted, LineState::Bulleted, LineState::Numbered]
        );
    }

    #[test]
    fn test_list_continuation_requires_no_blank() {
        assert_eq!(
            states("* item\nwrapped text\n\nnew paragraph"),
            vec![
                LineState::Bulleted,
                LineState::Bulleted,
                LineState::Bulleted,
                LineState::Paragraph,
            ]
        );
    }

    #[test]
    fn test_blockquote_continuation() {
        assert_eq!(
            states("> quoted\nstill quoted"),
            vec![LineState::Blockquote, LineState::Blockquote]
        );
    }

    #[test]
    fn test_blank_line_ends_blockquote() {
        assert_eq!(
            states("> quoted\n\nafter"),
            vec![
                LineState::Blockquote,
                LineState::Paragraph,
                LineState::Paragraph,
            ]
        );
    }

    #[test]
    fn test_blockquote_needs_blank_line_to_start() {
        assert_eq!(
            states("plain\n> not a quote"),
            vec![LineState::Paragraph, LineState::Paragraph]
        );
    }

    #[test]
    fn test_blockquote_allows_three_leading_spaces() {
        assert_eq!(
            states("   > quote\n\n    > code"),
            vec![
                LineState::Blockquote,
                LineState::Paragraph,
                LineState::Codeblock,
            ]
        );
    }

    #[test]
    fn test_codeblock_after_blank_and_continuing() {
        assert_eq!(
            states("Run this:\n\n    git status\n\tgit diff\n\n    git log"),
            vec![
                LineState::Paragraph,
                LineState::Paragraph,
                LineState::Codeblock,
                LineState::Codeblock,
                LineState::Paragraph,
                LineState::Codeblock,
            ]
        );
    }

    #[test]
    fn test_indented_line_without_blank_is_not_code() {
        assert_eq!(
            states("plain\n    indented"),
            vec![LineState::Paragraph, LineState::Paragraph]
        );
    }

    #[test]
    fn test_document_may_open_with_quote_or_code() {
        assert_eq!(states("> quote"), vec![LineState::Blockquote]);
        assert_eq!(states("    code"), vec![LineState::Codeblock]);
    }

    #[test]
    fn test_whitespace_only_line_is_blank() {
        assert_eq!(
            states("* item\n   \t\n* item"),
            vec![LineState::Bulleted, LineState::Bulleted, LineState::Bulleted]
        );
    }

    #[test]
    fn test_unusual_content_falls_through_to_paragraph() {
        for text in ["\u{1b}[31m", "*no space", "1.no space", "\u{feff}", "🚀 rocket"] {
            assert_eq!(states(text), vec![LineState::Paragraph], "for {:?}", text);
        }
    }

    #[test]
    fn test_streaming_matches_document_classification() {
        let text = "Title\n===\n\n* a\ncontinued\n\n> q\n\n    code";
        let streamed: Vec<ClassifiedLine<'_>> = classify(text.lines()).collect();
        assert_eq!(streamed, classify_document(text));
    }

    #[test]
    fn test_line_state_display() {
        assert_eq!(LineState::Codeblock.to_string(), "codeblock");
        assert_eq!(LineState::Title.to_string(), "title");
    }
}
