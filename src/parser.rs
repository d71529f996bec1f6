//! Reads layout files into pages of styled lines.
//!
//! A layout file is processed one line at a time:
//!
//! ```text
//! // comments run to the end of the line
//! [cover] 24, blue, center      <- opens a page and sets the style
//! Annual Report
//!                               <- blank lines are spacers
//! [footer] 10, grey, right, bottom
//! Page 1
//! [/cover]                      <- closes the page
//! ```
//!
//! Parsing is permissive: a directive without a closing `]` is skipped, text outside
//! of a page is ignored, and unknown colour or alignment names fall back to defaults.

use crate::error::PDFError;
use crate::style::Style;
use crate::text::{find, trim};
use std::path::Path;

const COMMENT_MARKER: &[u8] = b"//";

/// One line of text together with the style it was declared with. Lines with
/// empty text are spacers: they draw nothing but still take up vertical space.
///
/// Text is kept as the raw bytes of the layout file; it is never decoded.
#[derive(Clone, PartialEq, Debug)]
pub struct LineSpec {
    pub text: Vec<u8>,
    pub style: Style,
}

impl LineSpec {
    pub fn new<T: Into<Vec<u8>>>(text: T, style: Style) -> LineSpec {
        LineSpec {
            text: text.into(),
            style,
        }
    }

    pub fn spacer(style: Style) -> LineSpec {
        LineSpec::new(Vec::new(), style)
    }

    pub fn is_spacer(&self) -> bool {
        self.text.is_empty()
    }
}

/// The lines of one page, in the order they appeared in the layout file
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PageSpec {
    pub lines: Vec<LineSpec>,
}

impl PageSpec {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Parser state threaded through the lines of a layout file
#[derive(Debug, Default)]
struct LayoutParser {
    pages: Vec<PageSpec>,
    current: Option<PageSpec>,
    style: Style,
}

impl LayoutParser {
    fn feed(&mut self, raw: &[u8]) {
        let comment = find(raw, COMMENT_MARKER);
        let before_comment = match comment {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let line = trim(before_comment);

        if line.is_empty() {
            if comment.is_some() {
                log::trace!("skipping comment line");
            } else {
                self.push_line(LineSpec::spacer(self.style));
            }
            return;
        }

        if line[0] == b'[' {
            if line.get(1) == Some(&b'/') {
                self.close_page();
            } else {
                self.open_or_restyle(line);
            }
            return;
        }

        self.push_line(LineSpec::new(line, self.style));
    }

    fn push_line(&mut self, line: LineSpec) {
        match self.current.as_mut() {
            Some(page) => page.lines.push(line),
            None => log::trace!(
                "ignoring {:?} outside of a page",
                String::from_utf8_lossy(&line.text)
            ),
        }
    }

    fn close_page(&mut self) {
        if let Some(page) = self.current.take() {
            log::debug!(
                "closed page {} with {} line(s)",
                self.pages.len() + 1,
                page.lines.len()
            );
            self.pages.push(page);
        }
    }

    fn open_or_restyle(&mut self, line: &[u8]) {
        let Some(close) = line.iter().position(|&b| b == b']') else {
            log::debug!(
                "skipping malformed directive {:?}",
                String::from_utf8_lossy(line)
            );
            return;
        };
        let params = trim(&line[close + 1..]);

        if self.current.is_none() {
            log::debug!("opened page {}", self.pages.len() + 1);
            self.current = Some(PageSpec::default());
        }

        self.style = if params.is_empty() {
            Style::default()
        } else {
            Style::from_params(params)
        };
    }

    fn finish(mut self) -> Vec<PageSpec> {
        match self.current.take() {
            Some(page) if !page.is_empty() => {
                log::debug!("accepting unterminated page {}", self.pages.len() + 1);
                self.pages.push(page);
            }
            Some(_) => log::debug!("dropping empty unterminated page"),
            None => {}
        }
        self.pages
    }
}

/// Parse the raw contents of a layout file into its pages.
///
/// Lines end at `\n`; a final newline does not start another line. A trailing
/// `\r` is whitespace and trimmed with the rest.
pub fn parse_bytes(source: &[u8]) -> Vec<PageSpec> {
    let mut parser = LayoutParser::default();
    let mut lines = source.split(|&b| b == b'\n').peekable();
    while let Some(line) = lines.next() {
        if line.is_empty() && lines.peek().is_none() {
            break;
        }
        parser.feed(line);
    }
    parser.finish()
}

/// Parse layout text held in a string
pub fn parse_str(source: &str) -> Vec<PageSpec> {
    parse_bytes(source.as_bytes())
}

/// Read and parse a layout file. The text is not required to be UTF-8: every
/// byte that isn't markup ends up in the PDF unchanged.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<PageSpec>, PDFError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| PDFError::OpenLayout {
        path: path.to_path_buf(),
        source,
    })?;
    let pages = parse_bytes(&bytes);
    log::info!("parsed {} page(s) from {}", pages.len(), path.display());
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::style::{Align, Anchor};
    use pretty_assertions::assert_eq;

    fn style(font_size: u32) -> Style {
        Style {
            font_size,
            ..Style::default()
        }
    }

    #[test]
    fn single_default_line() {
        let pages = parse_str("[page]\nHello\n[/page]\n");
        assert_eq!(
            pages,
            vec![PageSpec {
                lines: vec![LineSpec::new("Hello", Style::default())]
            }]
        );
    }

    #[test]
    fn styled_directive() {
        let pages = parse_str("[page1] 14, red, center\nHello\n[/page1]\n");
        assert_eq!(pages.len(), 1);
        assert_eq!(
            pages[0].lines,
            vec![LineSpec::new(
                "Hello",
                Style {
                    font_size: 14,
                    colour: colours::RED,
                    align: Align::Center,
                    anchor: Anchor::Top,
                }
            )]
        );
    }

    #[test]
    fn lines_keep_the_style_they_were_declared_with() {
        let pages = parse_str("[p] 20\nBig\n[p] 8, grey\nSmall\n[p]\nPlain\n[/p]");
        let lines = &pages[0].lines;
        assert_eq!(lines[0].style, style(20));
        assert_eq!(
            lines[1].style,
            Style {
                font_size: 8,
                colour: colours::GREY,
                ..Style::default()
            }
        );
        assert_eq!(lines[2].style, Style::default());
    }

    #[test]
    fn restyling_inside_a_page_does_not_start_a_new_one() {
        let pages = parse_str("[a]\none\n[b] 10\ntwo\n[/b]\n");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines.len(), 2);
    }

    #[test]
    fn blank_lines_are_spacers_inside_pages_only() {
        let pages = parse_str("\n[p] 16\nA\n\n   \nB\n[/p]\n\n");
        let lines = &pages[0].lines;
        assert_eq!(lines.len(), 4);
        assert!(lines[1].is_spacer());
        assert!(lines[2].is_spacer());
        assert_eq!(lines[1].style, style(16));
    }

    #[test]
    fn comments_are_stripped() {
        let pages = parse_str(
            "// heading comment\n[p] // open\n   // indented comment\nText // trailing\nhttp://x\n[/p]",
        );
        assert_eq!(
            pages[0].lines,
            vec![
                LineSpec::new("Text", Style::default()),
                LineSpec::new("http:", Style::default()),
            ]
        );
    }

    #[test]
    fn comment_inside_directive_parameters() {
        let pages = parse_str("[p] 18, blue // big blue\nX\n[/p]");
        assert_eq!(pages[0].lines[0].style.font_size, 18);
        assert_eq!(pages[0].lines[0].style.colour, colours::BLUE);
    }

    #[test]
    fn malformed_directive_is_ignored() {
        assert_eq!(parse_str("[badpage\nHello\n"), Vec::<PageSpec>::new());

        let pages = parse_str("[p] 20\n[oops 30, red\nStill twenty\n[/p]");
        assert_eq!(pages[0].lines, vec![LineSpec::new("Still twenty", style(20))]);
    }

    #[test]
    fn text_outside_pages_is_ignored() {
        let pages = parse_str("before\n[p]\ninside\n[/p]\nafter\n");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines, vec![LineSpec::new("inside", Style::default())]);
    }

    #[test]
    fn explicitly_closed_empty_pages_are_kept() {
        let pages = parse_str("[p]\n[/p]\n[q]\nText\n[/q]\n");
        assert_eq!(pages.len(), 2);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn stray_close_is_harmless() {
        assert!(parse_str("[/p]\n[/q]\n").is_empty());
    }

    #[test]
    fn unterminated_pages() {
        assert_eq!(parse_str("[p]\nTrailing").len(), 1);
        assert!(parse_str("[p] 14, red").is_empty());
    }

    #[test]
    fn style_carries_over_between_pages() {
        let pages = parse_str("[a] 30, green\nA\n[/a]\nignored\n[b]\nB\n[/b]\n[c] 9\nC\n[/c]");
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].lines[0].style, Style::default());
        assert_eq!(pages[2].lines[0].style, style(9));
    }

    #[test]
    fn bottom_anchor_flag() {
        let pages = parse_str("[p]\nTop\n[p] 10, black, left, BOTTOM\nFoot\n[/p]");
        assert_eq!(pages[0].lines[0].style.anchor, Anchor::Top);
        assert_eq!(pages[0].lines[1].style.anchor, Anchor::Bottom);
    }

    #[test]
    fn crlf_line_endings() {
        let pages = parse_str("[p] 14\r\nHello\r\n\r\n[/p]\r\n");
        assert_eq!(
            pages[0].lines,
            vec![LineSpec::new("Hello", style(14)), LineSpec::spacer(style(14))]
        );
    }

    #[test]
    fn non_utf8_bytes_are_kept_verbatim() {
        let pages = parse_bytes(b"[p] 12, red\ncaf\xe9 \xff\n[/p]\n");
        assert_eq!(
            pages[0].lines,
            vec![LineSpec::new(
                &b"caf\xe9 \xff"[..],
                Style {
                    colour: colours::RED,
                    ..Style::default()
                }
            )]
        );
    }

    #[test]
    fn final_newline_does_not_add_a_spacer() {
        assert_eq!(parse_str("[p]\nA\n").len(), 1);
        assert_eq!(parse_str("[p]\nA\n")[0].lines.len(), 1);
        assert_eq!(parse_str("[p]\nA\n\n")[0].lines.len(), 2);
    }

    #[test]
    fn empty_input_has_no_pages() {
        assert!(parse_str("").is_empty());
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = parse_file("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, PDFError::OpenLayout { .. }));
    }
}
