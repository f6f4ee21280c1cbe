use super::*;

#[test]
fn escapes_markup_significant_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
}

#[test]
fn text_and_attributes_are_escaped_on_write() {
    let node = Node::from(
        Element::new("span")
            .attr("data-level", r#"x" onclick="alert(1)"#)
            .text("<script>alert(1)</script>"),
    );
    assert_eq!(
        node.to_markup().as_str(),
        r#"<span data-level="x&quot; onclick=&quot;alert(1)">&lt;script&gt;alert(1)&lt;/script&gt;</span>"#
    );
}

#[test]
fn void_elements_have_no_closing_tag() {
    let node = Node::from(Element::new("meta").attr("charset", "utf-8"));
    assert_eq!(node.to_markup().as_str(), r#"<meta charset="utf-8">"#);
}

#[test]
fn fragments_concatenate_without_separators() {
    let node = Node::Fragment(vec![
        Element::new("b").text("1").into(),
        Element::new("b").text("2").into(),
    ]);
    assert_eq!(node.to_markup().as_str(), "<b>1</b><b>2</b>");
}

#[test]
fn raw_markup_is_embedded_verbatim() {
    let inner = Node::from(Element::new("i").text("a&b")).to_markup();
    let outer = Node::from(Element::new("div").child(inner));
    assert_eq!(outer.to_markup().as_str(), "<div><i>a&amp;b</i></div>");
}

#[test]
fn find_by_class_matches_whole_class_tokens() {
    let node = Node::from(
        Element::new("div")
            .class("topics")
            .child(Element::new("span").class("topic-tag").text("a"))
            .child(Element::new("span").class("topic-tag extra").text("b"))
            .child(Element::new("span").class("topic-tags").text("c")),
    );
    let tags: Vec<String> = node
        .find_by_class("topic-tag")
        .into_iter()
        .map(|el| Node::from(el.clone()).text_content())
        .collect();
    assert_eq!(tags, vec!["a", "b"]);
}
