//! Node query behavior against a realistic HTML page.

use markup_query::{ContentType, DocumentQuery, Error};

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Page</title>
</head>
<body>
    <nav class="site-nav">
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <div id="content" class="wrapper">
        <article data-section="news">
            <h1>Headline</h1>
            <p class="byline">By Jane Roe</p>
            <p>First paragraph.</p>
            <p>Second paragraph.</p>
        </article>
    </div>
    <form>
        <input name="q" type="text">
        <button data-action="submit">Go</button>
    </form>
</body>
</html>"#;

fn page() -> DocumentQuery {
    DocumentQuery::new(PAGE, ContentType::Html, None).unwrap()
}

#[test]
fn tag_query_finds_elements_anywhere() {
    let doc = page();
    assert_eq!(doc.nodes_by_tag("p").unwrap().len(), 3);
    assert_eq!(doc.nodes_by_tag("a").unwrap().len(), 2);
    assert_eq!(doc.nodes_by_tag("h1").unwrap().len(), 1);
}

#[test]
fn no_matches_is_an_empty_result_not_an_error() {
    let doc = page();
    let nodes = doc.nodes_by_tag("video").unwrap();
    assert!(nodes.is_empty());
}

#[test]
fn attribute_query_is_exact() {
    let doc = page();
    assert_eq!(doc.nodes_by_attr("input", "type", "text").unwrap().len(), 1);
    assert!(doc.nodes_by_attr("input", "type", "tex").unwrap().is_empty());
}

#[test]
fn text_queries_distinguish_exact_and_containing() {
    let doc = page();
    assert_eq!(doc.nodes_by_text("p", "First paragraph.").unwrap().len(), 1);
    assert!(doc.nodes_by_text("p", "First").unwrap().is_empty());
    assert_eq!(doc.nodes_containing_text("p", "paragraph").unwrap().len(), 2);
    assert_eq!(doc.nodes_containing_text("p", "By").unwrap().len(), 1);
}

#[test]
fn nth_child_is_one_indexed() {
    let doc = page();
    let second = doc.nth_child("article", "p", 2).unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(&*second[0].text(), "First paragraph.");

    // Position 0 matches nothing, per query-language convention.
    assert!(doc.nth_child("article", "p", 0).unwrap().is_empty());
    // Position past the end matches nothing.
    assert!(doc.nth_child("article", "p", 9).unwrap().is_empty());
}

#[test]
fn attribute_containing_query_matches_substring() {
    let doc = page();
    assert_eq!(
        doc.nodes_by_attr_containing_text("a", "href", "about")
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        doc.nodes_by_attr_containing_text("nav", "class", "site")
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn class_query_is_exact_attribute_equality() {
    let doc = page();
    assert_eq!(doc.nodes_by_class("byline").unwrap().len(), 1);
    // "wrapper" is the whole class attribute of #content, so it matches...
    assert_eq!(doc.nodes_by_class("wrapper").unwrap().len(), 1);
    // ...but a token of a multi-token attribute would not; see unit tests.
    assert!(doc.nodes_by_class("site").unwrap().is_empty());
}

#[test]
fn id_data_attribute_and_name_queries() {
    let doc = page();
    assert_eq!(doc.nodes_by_id("content").unwrap().len(), 1);
    assert_eq!(
        doc.nodes_by_data_attribute("section", "news").unwrap().len(),
        1
    );
    assert_eq!(
        doc.nodes_by_data_attribute("action", "submit").unwrap().len(),
        1
    );
    assert_eq!(doc.nodes_by_name("q").unwrap().len(), 1);
}

#[test]
fn tag_count_matches_link_count_when_all_anchors_have_href() {
    let doc = page();
    assert_eq!(doc.nodes_by_tag("a").unwrap().len(), doc.links().len());
}

#[test]
fn repeated_calls_return_identical_ordered_results() {
    let doc = page();
    let texts = |doc: &DocumentQuery| -> Vec<String> {
        doc.nodes_by_tag("p")
            .unwrap()
            .iter()
            .map(|sel| sel.text().to_string())
            .collect()
    };
    assert_eq!(texts(&doc), texts(&doc));
    assert_eq!(doc.links(), doc.links());
    assert_eq!(doc.article_text(), doc.article_text());
}

#[test]
fn quote_in_structural_argument_raises_query_error() {
    let doc = page();
    assert!(matches!(doc.nodes_by_tag("a'"), Err(Error::QueryError(_))));
    assert!(matches!(
        doc.nodes_by_attr("a", "hr'ef", "/"),
        Err(Error::QueryError(_))
    ));
    assert!(matches!(
        doc.nodes_by_data_attribute("sec'tion", "news"),
        Err(Error::QueryError(_))
    ));
}

#[test]
fn quote_in_value_argument_matches_literally() {
    let html = r#"<div class="it's complicated">x</div>"#;
    let doc = DocumentQuery::new(html, ContentType::Html, None).unwrap();
    assert_eq!(doc.nodes_by_class("it's complicated").unwrap().len(), 1);
    assert!(doc.nodes_by_class("it's").unwrap().is_empty());
}
