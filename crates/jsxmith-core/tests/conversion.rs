use jsxmith_core::{
    convert, nodes_from_json, rename, serialize_style, AttrValue, ConvertError, Converter, Element,
    Node,
};
use pretty_assertions::assert_eq;

fn page() -> Node {
    Element::new("div")
        .attr("class", vec!["container"])
        .attr("style", "padding: 20px")
        .child(
            Element::new("header")
                .attr("class", vec!["header"])
                .child(Element::new("h1").text("Title"))
                .child(
                    Element::new("nav")
                        .child(
                            Element::new("a")
                                .attr("href", "/")
                                .attr("class", vec!["active"])
                                .text("Home"),
                        )
                        .child(Element::new("a").attr("href", "/about").text("About")),
                ),
        )
        .child(
            Element::new("main").child(
                Element::new("article")
                    .child(Element::new("p").text("Content {here}"))
                    .child(Element::new("img").attr("src", "image.jpg").attr("alt", "Image")),
            ),
        )
        .into()
}

#[test]
fn converts_a_page_fragment() {
    let expected = concat!(
        r#"<div className="container" style={{padding: '20px'}}>"#,
        r#"<header className="header"><h1>Title</h1>"#,
        r#"<nav><a href="/" className="active">Home</a><a href="/about">About</a></nav>"#,
        r#"</header>"#,
        r#"<main><article><p>Content &#123;here&#125;</p>"#,
        r#"<img src="image.jpg" alt="Image" /></article></main>"#,
        r#"</div>"#,
    );

    assert_eq!(convert(&page()), expected);
}

#[test]
fn form_controls_use_jsx_names_and_flags() {
    let form: Node = Element::new("form")
        .child(Element::new("label").attr("for", "name").text("Name:"))
        .child(
            Element::new("input")
                .attr("type", "text")
                .attr("id", "name")
                .attr("maxlength", "20")
                .attr("tabindex", "0")
                .attr("readonly", true)
                .attr("disabled", "disabled")
                .attr("data-id", "123")
                .attr("aria-label", "Name"),
        )
        .into();

    assert_eq!(
        convert(&form),
        concat!(
            r#"<form><label htmlFor="name">Name:</label>"#,
            r#"<input type="text" id="name" maxLength="20" tabIndex="0" readOnly disabled "#,
            r#"data-id="123" aria-label="Name" /></form>"#,
        )
    );
}

#[test]
fn table_attributes_are_renamed() {
    let table: Node = Element::new("table")
        .attr("cellpadding", "2")
        .attr("cellspacing", "0")
        .child(
            Element::new("tr").child(
                Element::new("td")
                    .attr("colspan", "2")
                    .attr("rowspan", "3")
                    .text("x"),
            ),
        )
        .into();

    assert_eq!(
        convert(&table),
        r#"<table cellPadding="2" cellSpacing="0"><tr><td colSpan="2" rowSpan="3">x</td></tr></table>"#
    );
}

#[test]
fn svg_presentation_attributes_are_camel_cased() {
    let svg: Node = Element::new("svg")
        .attr("viewBox", "0 0 24 24")
        .child(
            Element::new("path")
                .attr("d", "M0 0h24")
                .attr("stroke-width", "2")
                .attr("stroke-linecap", "round")
                .attr("fill-opacity", "0.5"),
        )
        .into();

    assert_eq!(
        convert(&svg),
        r#"<svg viewBox="0 0 24 24"><path d="M0 0h24" strokeWidth="2" strokeLinecap="round" fillOpacity="0.5"></path></svg>"#
    );
}

#[test]
fn unknown_keys_pass_through() {
    for key in ["data-track", "aria-hidden", "role", "itemprop", "Tabindex"] {
        assert_eq!(rename(key), key);
    }
}

#[test]
fn style_serializer_matches_object_literal() {
    assert_eq!(
        serialize_style("color: red; font-size: 14px").as_deref(),
        Some("{color: 'red', fontSize: '14px'}")
    );
}

#[test]
fn json_tree_converts_like_built_tree() {
    let json = page_json();

    let nodes = nodes_from_json(&json).unwrap();

    assert_eq!(Converter::new().convert_all(&nodes), convert(&page()));
}

#[test]
fn json_tree_with_null_value_is_a_contract_violation() {
    let json = r#"{ "type": "element", "tag": "input", "attributes": { "disabled": null } }"#;

    let err = nodes_from_json(json).unwrap_err();

    assert!(matches!(err, ConvertError::Contract(_)));
    assert!(err.to_string().starts_with("Input violates the node tree contract"));
}

#[test]
fn parallel_conversion_matches_sequential() {
    let tree = page();
    let expected = convert(&tree);
    let converter = Converter::new();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| converter.convert(&tree)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn list_value_keeps_duplicates_and_order() {
    let el: Node = Element::new("span")
        .attr("class", AttrValue::List(vec!["c".into(), "a".into(), "c".into()]))
        .into();

    assert_eq!(convert(&el), r#"<span className="c a c"></span>"#);
}

fn page_json() -> String {
    r#"{
      "type": "element", "tag": "div",
      "attributes": { "class": ["container"], "style": "padding: 20px" },
      "children": [
        { "type": "element", "tag": "header", "attributes": { "class": ["header"] }, "children": [
          { "type": "element", "tag": "h1", "children": [{ "type": "text", "text": "Title" }] },
          { "type": "element", "tag": "nav", "children": [
            { "type": "element", "tag": "a", "attributes": { "href": "/", "class": ["active"] },
              "children": [{ "type": "text", "text": "Home" }] },
            { "type": "element", "tag": "a", "attributes": { "href": "/about" },
              "children": [{ "type": "text", "text": "About" }] }
          ] }
        ] },
        { "type": "element", "tag": "main", "children": [
          { "type": "element", "tag": "article", "children": [
            { "type": "element", "tag": "p", "children": [{ "type": "text", "text": "Content {here}" }] },
            { "type": "element", "tag": "img", "attributes": { "src": "image.jpg", "alt": "Image" } }
          ] }
        ] }
      ]
    }"#
    .to_string()
}
