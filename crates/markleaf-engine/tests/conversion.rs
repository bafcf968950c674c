use insta::assert_snapshot;
use markleaf_engine::{
    BlockType, ConvertOptions, HtmlNode, InlineToken, TextType, block_to_block_type,
    markdown_to_blocks, markdown_to_html_node, text_to_tokens, text_token_to_leaf,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn inline_styles_in_one_sentence() {
    let tokens = text_to_tokens("This is **bold** and _italic_ and `code`.").unwrap();
    assert_eq!(
        tokens,
        vec![
            InlineToken::plain("This is "),
            InlineToken::new("bold", TextType::Bold),
            InlineToken::plain(" and "),
            InlineToken::new("italic", TextType::Italic),
            InlineToken::plain(" and "),
            InlineToken::new("code", TextType::Code),
            InlineToken::plain("."),
        ]
    );
}

#[test]
fn heading_block_renders_under_h1() {
    assert_eq!(block_to_block_type("# Title"), BlockType::Heading);
    let node = HtmlNode::parent("h1", vec![HtmlNode::text("Title")]);
    assert_eq!(node.render().unwrap(), "<h1>Title</h1>");
}

#[test]
fn image_token_renders_as_img() {
    let tokens = text_to_tokens("![alt](http://x/y.png)").unwrap();
    assert_eq!(tokens, vec![InlineToken::image("alt", "http://x/y.png")]);
    let leaf = text_token_to_leaf(&tokens[0]).unwrap();
    assert_eq!(leaf.render().unwrap(), r#"<img src="http://x/y.png" alt="alt">"#);
}

#[test]
fn paragraphs_split_and_classify() {
    let blocks = markdown_to_blocks("Para one.\n\nPara two.");
    assert_eq!(blocks, vec!["Para one.", "Para two."]);
    for block in &blocks {
        assert_eq!(block_to_block_type(block), BlockType::Paragraph);
    }
}

#[test]
fn nested_parent_renders_children() {
    let node = HtmlNode::parent("div", vec![HtmlNode::leaf("span", "x")]);
    assert_eq!(node.render().unwrap(), "<div><span>x</span></div>");
}

#[test]
fn untagged_leaf_renders_bare() {
    assert_eq!(HtmlNode::text("x").render().unwrap(), "x");
}

#[test]
fn ordered_list_numbering() {
    assert_eq!(block_to_block_type("1. a\n2. b\n3. c"), BlockType::OrderedList);
    assert_eq!(block_to_block_type("1. a\n3. b"), BlockType::Paragraph);
    assert_eq!(block_to_block_type("2. a\n3. b"), BlockType::Paragraph);
}

#[test]
fn full_document() {
    let md = "# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
> -- J.R.R. Tolkien

## Reasons I like Tolkien

- You can spend years studying the legendarium
- It's a great [story](https://en.wikipedia.org/wiki/Legendarium)

1. Gandalf
2. Bilbo
3. Sam";
    init_logging();
    let html = markdown_to_html_node(md, &ConvertOptions::default())
        .unwrap()
        .render()
        .unwrap();
    assert_snapshot!(
        html,
        @r#"<div><h1>Tolkien Fan Club</h1><p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></p><p>Here's the deal, <b>I like Tolkien</b>.</p><blockquote>"I am in fact a Hobbit in all but size." -- J.R.R. Tolkien</blockquote><h2>Reasons I like Tolkien</h2><ul><li>You can spend years studying the legendarium</li><li>It's a great <a href="https://en.wikipedia.org/wiki/Legendarium">story</a></li></ul><ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol></div>"#
    );
}

#[test]
fn code_block_keeps_indentation() {
    let md = "Intro.\n\n```\nfunc main() {\n    fmt.Println(\"Aragorn\")\n}\n```";
    init_logging();
    let html = markdown_to_html_node(md, &ConvertOptions::default())
        .unwrap()
        .render()
        .unwrap();
    assert_eq!(
        html,
        "<div><p>Intro.</p><pre><code>func main() {\n    fmt.Println(\"Aragorn\")\n}\n</code></pre></div>"
    );
}
