mod common;

use common::{attr, render, select, selected_texts};

#[test]
fn test_tag_page_overrides_search_settings() {
    let doc = render("/user_images/tag/", "query=M31&thumbnail_size=small");
    assert_eq!(
        attr(&doc, "#search-settings input[name=query]", "value").as_deref(),
        Some("M31")
    );
    assert!(select(&doc, "#search-settings input[name=ra]").is_empty());
}

#[test]
fn test_tag_page_keeps_filters_and_inherited_regions() {
    let doc = render("/user_images/tag/", "query=M31&thumbnail_size=small&sort=date");
    assert_eq!(select(&doc, "#search-settings input[type=checkbox]").len(), 3);
    assert_eq!(
        attr(&doc, "input[type=hidden][name=sort]", "value").as_deref(),
        Some("date")
    );
    assert_eq!(selected_texts(&doc, "#search-menu a"), vec!["By Tag"]);
    assert_eq!(selected_texts(&doc, "#thumbnail-sizes a"), vec!["small"]);
    assert_eq!(select(&doc, "#search-results ul.image-set li").len(), 2);
}

#[test]
fn test_location_page_echoes_coordinates() {
    let doc = render("/user_images/location/", "ra=10.68&dec=41.27&radius=2");
    assert_eq!(attr(&doc, "#id_ra", "value").as_deref(), Some("10.68"));
    assert_eq!(attr(&doc, "#id_dec", "value").as_deref(), Some("41.27"));
    assert_eq!(attr(&doc, "#id_radius", "value").as_deref(), Some("2"));
    assert!(select(&doc, "#search-settings input[name=query]").is_empty());
}

#[test]
fn test_location_page_keeps_inherited_regions() {
    let doc = render("/user_images/location/", "");
    assert_eq!(selected_texts(&doc, "#search-menu a"), vec!["By Location"]);
    assert_eq!(selected_texts(&doc, "#thumbnail-sizes a"), vec!["large"]);
    assert_eq!(select(&doc, "#search-settings input[type=checkbox]").len(), 3);
    assert_eq!(
        attr(&doc, "form#image-search", "action").as_deref(),
        Some("/user_images/location/")
    );
}

#[test]
fn test_location_fields_empty_when_absent() {
    let doc = render("/user_images/location/", "sort=date");
    assert_eq!(attr(&doc, "#id_ra", "value").as_deref(), Some(""));
    assert_eq!(attr(&doc, "#id_radius", "value").as_deref(), Some(""));
}
