use log::trace;

use super::{
    InlineError,
    kinds::{CodeSpan, Emphasis, Image, Link, LinkMatch},
    types::{InlineToken, TextType},
};

/// Tokenizes a span of inline text into a sequence of [`InlineToken`]s.
///
/// # Stage Order
/// 1. `**` → Bold
/// 2. `_` → Italic
/// 3. `` ` `` → Code
/// 4. `![alt](url)` → Image
/// 5. `[text](url)` → Link
///
/// Each stage only re-splits `Plain` tokens, so styles never nest. Images
/// are extracted before links because link syntax is a suffix of image
/// syntax.
///
/// # Errors
/// [`InlineError::UnterminatedDelimiter`] if any delimiter is left unpaired.
pub fn text_to_tokens(text: &str) -> Result<Vec<InlineToken>, InlineError> {
    let tokens = vec![InlineToken::plain(text)];
    let tokens = split_on_delimiter(tokens, Emphasis::BOLD, TextType::Bold)?;
    let tokens = split_on_delimiter(tokens, Emphasis::ITALIC, TextType::Italic)?;
    let tokens = split_on_delimiter(tokens, CodeSpan::TICK, TextType::Code)?;
    let tokens = split_images(tokens);
    let tokens = split_links(tokens);

    trace!("tokenized {} bytes into {} tokens", text.len(), tokens.len());
    Ok(tokens)
}

/// Splits every `Plain` token on `delimiter`, typing the odd pieces as
/// `text_type`.
///
/// Pieces alternate plain/styled starting with plain. Empty pieces are kept
/// as empty `Plain` tokens, so `n` pairs always yield `2n + 1` tokens per
/// input token. Non-plain tokens pass through untouched.
///
/// # Errors
/// [`InlineError::UnterminatedDelimiter`] if a plain token holds an odd
/// number of delimiters. No partial output is returned.
pub fn split_on_delimiter(
    tokens: Vec<InlineToken>,
    delimiter: &str,
    text_type: TextType,
) -> Result<Vec<InlineToken>, InlineError> {
    debug_assert!(!delimiter.is_empty(), "delimiter must not be empty");

    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }

        let pieces: Vec<&str> = token.text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(InlineError::UnterminatedDelimiter {
                delimiter: delimiter.to_string(),
                text: token.text.clone(),
            });
        }

        out.extend(pieces.into_iter().enumerate().map(|(i, piece)| {
            if i % 2 == 0 {
                InlineToken::plain(piece)
            } else {
                InlineToken::new(piece, text_type)
            }
        }));
    }

    trace!("split on {delimiter:?}: {} tokens", out.len());
    Ok(out)
}

/// Extracts `![alt](url)` from every `Plain` token.
pub fn split_images(tokens: Vec<InlineToken>) -> Vec<InlineToken> {
    split_matches(tokens, Image::find, TextType::Image)
}

/// Extracts `[text](url)` from every `Plain` token. Image syntax is left
/// alone.
pub fn split_links(tokens: Vec<InlineToken>) -> Vec<InlineToken> {
    split_matches(tokens, Link::find, TextType::Link)
}

/// Returns `(alt, url)` for every image in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    extract_all(text, Image::find)
}

/// Returns `(text, url)` for every link in `text`, left to right.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    extract_all(text, Link::find)
}

fn extract_all(text: &str, find: fn(&str) -> Option<LinkMatch<'_>>) -> Vec<(&str, &str)> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(m) = find(rest) {
        found.push((m.text, m.url));
        rest = &rest[m.end..];
    }
    found
}

/// Shared scan for images and links.
///
/// A plain token with no match passes through as-is (even when empty).
/// Otherwise the text around each match becomes `Plain` tokens, skipping
/// empty surroundings so adjacent matches stay adjacent.
fn split_matches(
    tokens: Vec<InlineToken>,
    find: fn(&str) -> Option<LinkMatch<'_>>,
    text_type: TextType,
) -> Vec<InlineToken> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }

        let mut rest = token.text.as_str();
        let mut matched = false;
        while let Some(m) = find(rest) {
            matched = true;
            if m.start > 0 {
                out.push(InlineToken::plain(&rest[..m.start]));
            }
            out.push(InlineToken::with_url(m.text, text_type, m.url));
            rest = &rest[m.end..];
        }
        if !matched || !rest.is_empty() {
            out.push(InlineToken::plain(rest));
        }
    }
    out
}
