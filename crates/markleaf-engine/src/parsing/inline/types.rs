use std::fmt;

/// The semantic type of an inline token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextType {
    /// Text with no styling.
    Plain,
    /// Text between `**` delimiters.
    Bold,
    /// Text between `_` delimiters.
    Italic,
    /// Text between backticks.
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl TextType {
    /// Whether tokens of this type must carry a URL.
    pub fn takes_url(self) -> bool {
        matches!(self, TextType::Link | TextType::Image)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextType::Plain => "plain",
            TextType::Bold => "bold",
            TextType::Italic => "italic",
            TextType::Code => "code",
            TextType::Link => "link",
            TextType::Image => "image",
        }
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed span of inline text produced by the tokenizer.
///
/// `url` is `Some` exactly for [`TextType::Link`] and [`TextType::Image`].
/// For images, `text` holds the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineToken {
    pub text: String,
    pub text_type: TextType,
    pub url: Option<String>,
}

impl InlineToken {
    pub fn new(text: impl Into<String>, text_type: TextType) -> Self {
        Self {
            text: text.into(),
            text_type,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextType::Plain)
    }

    pub fn with_url(text: impl Into<String>, text_type: TextType, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_type,
            url: Some(url.into()),
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(text, TextType::Link, url)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(alt, TextType::Image, url)
    }

    pub fn is_plain(&self) -> bool {
        self.text_type == TextType::Plain
    }
}

impl fmt::Display for InlineToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "{}({:?}, {url})", self.text_type, self.text),
            None => write!(f, "{}({:?})", self.text_type, self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_compare_by_value() {
        assert_eq!(
            InlineToken::new("same", TextType::Bold),
            InlineToken::new("same", TextType::Bold)
        );
        assert_ne!(
            InlineToken::new("same", TextType::Bold),
            InlineToken::new("same", TextType::Italic)
        );
        assert_ne!(
            InlineToken::link("same", "https://a.example"),
            InlineToken::link("same", "https://b.example")
        );
    }

    #[test]
    fn constructors_set_url_only_for_link_types() {
        assert_eq!(InlineToken::plain("x").url, None);
        assert_eq!(
            InlineToken::image("alt", "a.png").url.as_deref(),
            Some("a.png")
        );
        assert!(TextType::Link.takes_url());
        assert!(TextType::Image.takes_url());
        assert!(!TextType::Code.takes_url());
    }

    #[test]
    fn display_includes_url() {
        assert_eq!(InlineToken::plain("hi").to_string(), r#"plain("hi")"#);
        assert_eq!(
            InlineToken::link("boot", "https://boot.dev").to_string(),
            r#"link("boot", https://boot.dev)"#
        );
    }
}
