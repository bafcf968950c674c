//! Integration tests for the parsing module.


use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::BlockType,
    inline::{InlineToken, TextType},
    parse_document, parse_inline_for_block,
};

const SAMPLE: &str = "# Heading with **bold**

Paragraph with _italic_
and a [link](https://example.com).

```
let x = `raw`;
```

> quoted ![img](https://x/y.png)

- one
- `two`

1. first
2. second";

#[test]
fn sample_document_blocks() {
    let doc = parse_document(SAMPLE);
    let types: Vec<BlockType> = doc.blocks.iter().map(|b| b.block_type).collect();
    assert_eq!(
        types,
        vec![
            BlockType::Heading,
            BlockType::Paragraph,
            BlockType::Code,
            BlockType::Quote,
            BlockType::UnorderedList,
            BlockType::OrderedList,
        ]
    );

    let tokens: Vec<InlineToken> = doc
        .blocks
        .iter()
        .flat_map(|b| parse_inline_for_block(b).unwrap())
        .flatten()
        .collect();
    invariants::check(&doc.blocks, &tokens);
}

#[test]
fn paragraph_inline_tokens() {
    let doc = parse_document(SAMPLE);
    let inlines = parse_inline_for_block(&doc.blocks[1]).unwrap();
    assert_eq!(
        inlines,
        vec![vec![
            InlineToken::plain("Paragraph with "),
            InlineToken::new("italic", TextType::Italic),
            InlineToken::plain(" and a "),
            InlineToken::link("link", "https://example.com"),
            InlineToken::plain("."),
        ]]
    );
}

/// Code blocks are raw zones: an unpaired backtick inside does not fail.
#[test]
fn code_block_is_not_tokenized() {
    let doc = parse_document("```\nlet s = \"`\";\n```");
    assert_eq!(doc.blocks[0].block_type, BlockType::Code);
    assert!(parse_inline_for_block(&doc.blocks[0]).unwrap().is_empty());
}

#[test]
fn list_items_tokenized_separately() {
    let doc = parse_document("- one\n- `two`");
    let inlines = parse_inline_for_block(&doc.blocks[0]).unwrap();
    assert_eq!(
        inlines,
        vec![
            vec![InlineToken::plain("one")],
            vec![
                InlineToken::plain(""),
                InlineToken::new("two", TextType::Code),
                InlineToken::plain(""),
            ],
        ]
    );
}

#[test]
fn empty_document() {
    let doc = parse_document("");
    assert!(doc.blocks.is_empty());
}

#[test]
fn blank_lines_only() {
    let doc = parse_document("\n\n\n");
    assert!(doc.blocks.is_empty());
}
