use crate::filter::NoiseFilter;

#[test]
fn default_filter_drops_assets_css_and_favicon() {
    // Arrange
    let filter = NoiseFilter::default();

    // Act / Assert
    assert!(!filter.keep("/assets/app.js"));
    assert!(!filter.keep("/css/site.css"));
    assert!(!filter.keep("/favicon.png"));
    assert!(!filter.keep("/favicon.ico"));
}

#[test]
fn default_filter_keeps_pages() {
    let filter = NoiseFilter::default();

    assert!(filter.keep("/"));
    assert!(filter.keep("/minecraft/get-log?offset=188"));
    assert!(filter.keep("/blog/css-tricks"));
}

#[test]
fn custom_prefixes_replace_defaults() {
    // Arrange
    let filter = NoiseFilter::new(["/static", "/robots.txt"]);

    // Act / Assert
    assert!(!filter.keep("/static/logo.svg"));
    assert!(!filter.keep("/robots.txt"));
    assert!(filter.keep("/assets/app.js"));
}

#[test]
fn empty_prefix_set_keeps_everything() {
    let filter = NoiseFilter::new(Vec::<String>::new());

    assert!(filter.keep("/favicon.png"));
}
