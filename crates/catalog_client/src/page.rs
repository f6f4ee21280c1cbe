//! Static host page around the rendered container.

use crate::{
    controls::FilterControl,
    markup::{Element, Markup, Node},
};

pub struct PageShell<'a> {
    pub title: &'a str,
    pub container_id: &'a str,
}

impl PageShell<'_> {
    pub fn render(&self, controls: &[FilterControl], container: &Markup) -> Markup {
        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").text(self.title));

        let filters = Element::new("nav")
            .class("filters")
            .children(controls.iter().map(filter_button));

        let body = Element::new("body")
            .child(
                Element::new("header")
                    .class("catalog-header")
                    .child(Element::new("h1").text(self.title)),
            )
            .child(filters)
            .child(
                Element::new("main").child(
                    Element::new("div")
                        .attr("id", self.container_id)
                        .class("course-grid")
                        .child(container.clone()),
                ),
            );

        let document = Element::new("html")
            .attr("lang", "en")
            .child(head)
            .child(body);

        Node::from(document).to_document()
    }
}

fn filter_button(control: &FilterControl) -> Node {
    let class = if control.active {
        "filter-btn active"
    } else {
        "filter-btn"
    };
    Element::new("button")
        .attr("type", "button")
        .class(class)
        .attr("data-filter", control.key.as_str())
        .text(&control.label)
        .into()
}

#[cfg(test)]
mod tests {
    use shared::filter::FilterKey;

    use super::*;

    fn shell() -> PageShell<'static> {
        PageShell {
            title: "Course Catalog",
            container_id: "courses",
        }
    }

    #[test]
    fn marks_only_the_active_control() {
        let mut advanced = FilterControl::new(FilterKey::parse("advanced"), "Advanced");
        advanced.active = true;
        let mut all = FilterControl::all();
        all.active = false;

        let page = shell().render(&[all, advanced], &Markup::default());
        let text = page.as_str();
        assert!(text.contains(r#"<button type="button" class="filter-btn" data-filter="all">All</button>"#));
        assert!(text.contains(
            r#"<button type="button" class="filter-btn active" data-filter="advanced">Advanced</button>"#
        ));
    }

    #[test]
    fn embeds_container_markup_unescaped_inside_the_container() {
        let container = Node::from(Element::new("p").text("<hi>")).to_markup();
        let page = shell().render(&[FilterControl::all()], &container);
        assert!(page.as_str().starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(page
            .as_str()
            .contains(r#"<div id="courses" class="course-grid"><p>&lt;hi&gt;</p></div>"#));
    }
}
