use reps::{get_rep, render, Grip, Limits, Mode, RenderOptions};
use reps_testing::stub;

fn stylesheet_stub(name: &str) -> Grip {
    stub("stylesheet", name).expect("stub should load")
}

#[test]
fn test_selects_stylesheet_rep() {
    let grip = stylesheet_stub("testStyleSheet");
    assert_eq!(get_rep(&grip).map(|rep| rep.name()), Some("StyleSheet"));
}

#[test]
fn test_renders_url() {
    let grip = stylesheet_stub("testStyleSheet");
    for mode in [None, Some(Mode::Tiny), Some(Mode::Short), Some(Mode::Long)] {
        let mut options = RenderOptions::new();
        options.mode = mode;
        assert_eq!(
            render(&grip, &options).text(),
            "StyleSheet https://example.com/styles.css"
        );
    }
}

#[test]
fn test_markup() {
    let grip = stylesheet_stub("testStyleSheet");
    insta::assert_snapshot!(
        render(&grip, &RenderOptions::new()).markup(),
        @r#"<span class="objectBox objectBox-object" data-link-actor-id="server1.conn2.child1/obj1067"><span class="objectBoxTitle">StyleSheet </span><span class="objectPropValue">https://example.com/styles.css</span></span>"#
    );
}

#[test]
fn test_embedded_stylesheet_has_empty_location() {
    let grip = stylesheet_stub("testEmbeddedStyleSheet");
    let node = render(&grip, &RenderOptions::new());
    assert_eq!(node.text(), "StyleSheet ");
    assert_eq!(node.find_by_class("objectPropValue").len(), 1);
}

#[test]
fn test_url_cropped_by_limits() {
    let grip = stylesheet_stub("testLongUrlStyleSheet");
    let limits = Limits {
        url_chars: 30,
        ..Limits::default()
    };
    let text = render(&grip, &RenderOptions::new().with_limits(limits)).text();

    let url = text.strip_prefix("StyleSheet ").expect("title prefix");
    assert_eq!(url.chars().count(), 30);
    assert!(url.starts_with("https://static."));
    assert!(url.ends_with("overrides.css"));
    assert!(url.contains('…'));
}

#[test]
fn test_no_grip_refuses_stylesheet() {
    let grip = stylesheet_stub("testStyleSheet");
    let registry = reps::RepRegistry::standard();
    assert!(registry.select_with(&grip, None, true).is_none());
    assert_eq!(
        registry
            .select_with(&grip, Some("CSSStyleSheet"), false)
            .map(|rep| rep.name()),
        Some("StyleSheet")
    );
}

#[test]
fn test_other_class_is_not_a_stylesheet() {
    let grip = Grip::from_json(
        r#"{"type": "object", "class": "CSSStyleRule", "preview": {"kind": "ObjectWithText", "text": "div"}}"#,
    )
    .unwrap();
    assert_ne!(get_rep(&grip).map(|rep| rep.name()), Some("StyleSheet"));
}
