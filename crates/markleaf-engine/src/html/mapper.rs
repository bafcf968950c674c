use crate::parsing::inline::{InlineToken, TextType};

use super::{HtmlError, node::HtmlNode, props::Props};

/// Maps one inline token to one leaf node.
///
/// | type   | tag    | value  | props          |
/// |--------|--------|--------|----------------|
/// | Plain  | none   | text   |                |
/// | Bold   | `b`    | text   |                |
/// | Italic | `i`    | text   |                |
/// | Code   | `code` | text   |                |
/// | Link   | `a`    | text   | `href`         |
/// | Image  | `img`  | `""`   | `src`, `alt`   |
///
/// # Errors
/// [`HtmlError::UnrecognizedToken`] if the token's URL presence does not fit
/// its type. The tokenizer never produces such tokens.
pub fn text_token_to_leaf(token: &InlineToken) -> Result<HtmlNode, HtmlError> {
    let unrecognized = || HtmlError::UnrecognizedToken {
        token: token.clone(),
    };

    let node = match (token.text_type, token.url.as_deref()) {
        (TextType::Plain, None) => HtmlNode::text(&token.text),
        (TextType::Bold, None) => HtmlNode::leaf("b", &token.text),
        (TextType::Italic, None) => HtmlNode::leaf("i", &token.text),
        (TextType::Code, None) => HtmlNode::leaf("code", &token.text),
        (TextType::Link, Some(url)) => {
            let mut props = Props::new();
            props.insert("href".to_string(), url.to_string());
            HtmlNode::leaf("a", &token.text).with_props(props)
        }
        (TextType::Image, Some(url)) => {
            let mut props = Props::new();
            props.insert("src".to_string(), url.to_string());
            props.insert("alt".to_string(), token.text.clone());
            HtmlNode::leaf("img", "").with_props(props)
        }
        (TextType::Plain | TextType::Bold | TextType::Italic | TextType::Code, Some(_))
        | (TextType::Link | TextType::Image, None) => return Err(unrecognized()),
    };
    Ok(node)
}
