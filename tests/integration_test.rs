use pretty_assertions::assert_eq;
use serde_json::json;
use treemd::{Error, JsonToMarkdown};

#[test]
fn headings_render_with_level_markers() {
    let engine = JsonToMarkdown::new();
    assert_eq!(engine.convert(&json!({"h1": "Heading 1"})).unwrap(), "# Heading 1\n");
    assert_eq!(engine.convert(&json!({"h2": "Heading 2"})).unwrap(), "## Heading 2\n");
    assert_eq!(engine.convert(&json!({"h3": "Heading 3"})).unwrap(), "### Heading 3\n");
    assert_eq!(engine.convert(&json!({"h4": "Heading 4"})).unwrap(), "#### Heading 4\n");
    assert_eq!(engine.convert(&json!({"h5": "Heading 5"})).unwrap(), "##### Heading 5\n");
    assert_eq!(engine.convert(&json!({"h6": "Heading 6"})).unwrap(), "###### Heading 6\n");
}

#[test]
fn blockquote_prefixes_every_line() {
    let engine = JsonToMarkdown::new();
    assert_eq!(
        engine.convert(&json!({"blockquote": "Some content"})).unwrap(),
        "> Some content\n"
    );
    assert_eq!(
        engine
            .convert(&json!({"blockquote": "first line\nsecond line"}))
            .unwrap(),
        "> first line\n> second line\n"
    );
}

#[test]
fn sibling_arrays_join_with_one_blank_line() {
    let engine = JsonToMarkdown::new();
    let a = json!({"h1": "a"});
    let b = json!("plain leaf");
    assert_eq!(
        engine.convert(&json!([a, b])).unwrap(),
        format!(
            "{}\n\n{}",
            engine.convert(&a).unwrap(),
            engine.convert(&b).unwrap()
        )
    );
    assert_eq!(engine.convert(&json!(["x", "y"])).unwrap(), "x\n\ny");
}

#[test]
fn unordered_list_markers_and_emphasis() {
    let engine = JsonToMarkdown::new();
    assert_eq!(
        engine.convert(&json!({"ul": ["item 1", "item 2"]})).unwrap(),
        "\n - item 1\n - item 2\n"
    );
    assert_eq!(
        engine
            .convert(&json!({"ul": ["<em>item 1</em>", "<bold>item 2</bold>"]}))
            .unwrap(),
        "\n - *item 1*\n - **item 2**\n"
    );
}

#[test]
fn ordered_list_numbers_true_items_contiguously() {
    let engine = JsonToMarkdown::new();
    assert_eq!(
        engine.convert(&json!({"ol": ["item 1", "item 2"]})).unwrap(),
        "\n 1. item 1\n 2. item 2\n"
    );

    // A nested sub-list supplies its own markers and consumes no number.
    let out = engine
        .convert(&json!({"ol": [{"ul": ["a"]}, "b", "c"]}))
        .unwrap();
    assert!(out.contains("\n 1. b"), "got {out:?}");
    assert!(out.contains("\n 2. c"), "got {out:?}");
    assert!(!out.contains("3."), "got {out:?}");
}

#[test]
fn code_blocks_inside_lists_are_indented_under_the_marker() {
    let engine = JsonToMarkdown::new();
    let doc = json!({"ol": [[
        "Copy the code below:",
        {"code": {
            "language": "js",
            "content": ["function sum (a, b) {", "   return a + b;", "}", "sum(1, 2);"]
        }}
    ]]});
    let out = engine.convert(&doc).unwrap();
    assert_eq!(
        out,
        "\n 1. Copy the code below:\n    \n    ```js\n    function sum (a, b) {\n       return a + b;\n    }\n    sum(1, 2);\n    ```\n    \n"
    );
}

#[test]
fn code_blocks_inside_unordered_lists_are_indented_under_the_marker() {
    let engine = JsonToMarkdown::new();
    let doc = json!({"ul": [[
        "Copy the code below:",
        {"code": {"language": "js", "content": ["let x = 1;"]}}
    ]]});
    let out = engine.convert(&doc).unwrap();
    assert_eq!(
        out,
        "\n - Copy the code below:\n    \n    ```js\n    let x = 1;\n    ```\n    \n"
    );
}

#[test]
fn paragraphs_with_inline_format_tags() {
    let engine = JsonToMarkdown::new();
    assert_eq!(
        engine.convert(&json!({"p": ["Two", "Paragraphs"]})).unwrap(),
        "\nTwo\n\nParagraphs\n"
    );
    assert_eq!(
        engine
            .convert(&json!({"p": [
                "Two <bold>more words</bold>",
                "in this paragraph, <strong>right?</strong>"
            ]}))
            .unwrap(),
        "\nTwo **more words**\n\nin this paragraph, **right?**\n"
    );
}

#[test]
fn images_and_links_follow_their_templates() {
    let engine = JsonToMarkdown::new();
    assert_eq!(
        engine
            .convert(&json!({"img": {"source": "source", "title": "title"}}))
            .unwrap(),
        "![](source \"title\")\n"
    );
    assert_eq!(
        engine
            .convert(&json!({"link": {"source": "https://example.com", "title": "hello"}}))
            .unwrap(),
        "[hello](https://example.com)\n"
    );
}

#[test]
fn table_aligns_headers_and_escapes_pipes() {
    let engine = JsonToMarkdown::new();
    assert_eq!(
        engine
            .convert(&json!({"table": {"headers": ["a", "b"], "rows": [["c1", "c2"]]}}))
            .unwrap(),
        "|  a  |  b  |\n| --- | --- |\n| c1 | c2 |\n"
    );

    let piped = engine
        .convert(&json!({"table": {"headers": ["a"], "rows": [["left|right"]]}}))
        .unwrap();
    assert!(piped.contains("left\\|right"), "got {piped:?}");

    // Escaping is idempotent on already-escaped pipes.
    let escaped = engine
        .convert(&json!({"table": {"headers": ["a"], "rows": [["left\\|right"]]}}))
        .unwrap();
    assert!(escaped.contains("left\\|right"));
    assert!(!escaped.contains("left\\\\|right"));
}

#[test]
fn custom_converter_output_is_kept_verbatim() {
    let engine = JsonToMarkdown::new();
    engine.register("sayHello", |input, _engine| {
        Ok(format!("Hello {}!", input.as_str().unwrap_or_default()))
    });
    assert_eq!(
        engine.convert(&json!({"sayHello": "World"})).unwrap(),
        "Hello World!\n"
    );
}

#[test]
fn custom_converter_errors_propagate_unwrapped() {
    let engine = JsonToMarkdown::new();
    engine.register("explode", |_, _| {
        Err(Error::Conversion("boom".to_string()))
    });
    match engine.convert(&json!([{"h1": "ok"}, {"explode": 1}])) {
        Err(Error::Conversion(message)) => assert_eq!(message, "boom"),
        other => panic!("expected Conversion error, got {:?}", other),
    }
}

#[test]
fn unknown_kind_fails_naming_the_kind() {
    let engine = JsonToMarkdown::new();
    match engine.convert(&json!({"bogus": "x"})) {
        Err(Error::UnknownConverter(kind)) => assert_eq!(kind, "bogus"),
        other => panic!("expected UnknownConverter, got {:?}", other),
    }
}

#[test]
fn one_shot_convert_matches_engine_convert() {
    let doc = json!([{"h1": "T"}, {"hr": ""}]);
    assert_eq!(
        treemd::convert(&doc).unwrap(),
        JsonToMarkdown::new().convert(&doc).unwrap()
    );
}
