use std::sync::LazyLock;

use regex::Regex;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// A `[text](url)` or `![alt](url)` occurrence, with byte offsets into the
/// searched string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
    pub url: &'a str,
}

/// Image syntax `![alt](url)`.
pub struct Image;

impl Image {
    /// The marker that turns link syntax into image syntax.
    pub const BANG: char = '!';

    /// Finds the leftmost image in `s`.
    pub fn find(s: &str) -> Option<LinkMatch<'_>> {
        capture_at(&IMAGE_RE, s, 0)
    }
}

/// Link syntax `[text](url)`.
pub struct Link;

impl Link {
    /// Finds the leftmost link in `s` whose `[` is not preceded by `!`.
    pub fn find(s: &str) -> Option<LinkMatch<'_>> {
        let mut from = 0;
        while let Some(m) = capture_at(&LINK_RE, s, from) {
            if s[..m.start].ends_with(Image::BANG) {
                // `[` is ASCII, so one byte past it is a char boundary.
                from = m.start + 1;
                continue;
            }
            return Some(m);
        }
        None
    }
}

fn capture_at<'a>(re: &Regex, s: &'a str, from: usize) -> Option<LinkMatch<'a>> {
    let caps = re.captures_at(s, from)?;
    let full = caps.get(0)?;
    Some(LinkMatch {
        start: full.start(),
        end: full.end(),
        text: caps.get(1)?.as_str(),
        url: caps.get(2)?.as_str(),
    })
}
