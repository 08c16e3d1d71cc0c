use async_trait::async_trait;
use car_price_form::domain::model::NumberBounds;
use car_price_form::domain::ports::ModelCatalog;
use car_price_form::{ControllerSettings, FieldId, FormController, FormError, MemoryPage};
use std::time::{Duration, Instant};

const NAVBAR_HEIGHT: f64 = 72.0;

/// Navigation never talks to the model endpoint.
struct UnreachableCatalog;

#[async_trait]
impl ModelCatalog for UnreachableCatalog {
    async fn fetch_models(&self, _company: &str) -> car_price_form::Result<Vec<String>> {
        Err(FormError::config("catalog should not be called"))
    }
}

fn page() -> MemoryPage {
    MemoryPage::prediction_form(NumberBounds::default(), NumberBounds::default())
        .with_nav(&["#", "#predict", "#about"], Some(NAVBAR_HEIGHT))
        .with_section("#predict", 640.0)
        .with_section("#about", 1480.0)
        .with_section("#footer", 2400.0)
}

fn controller(page: MemoryPage) -> FormController<MemoryPage, UnreachableCatalog> {
    FormController::new(page, UnreachableCatalog)
}

#[test]
fn test_nav_click_scrolls_below_navbar_and_marks_link() {
    let controller = controller(page());

    let outcome = controller.on_anchor_click("#about");

    assert!(outcome.default_prevented);
    let page = controller.view();
    assert_eq!(page.scroll_history(), vec![1480.0 - (NAVBAR_HEIGHT + 20.0)]);
    assert_eq!(page.active_links(), vec!["#about"]);
}

#[test]
fn test_home_click_scrolls_to_top() {
    let controller = controller(page().with_hash("#about"));
    controller.update_active_nav();
    assert_eq!(controller.view().active_links(), vec!["#about"]);

    let outcome = controller.on_anchor_click("#");

    assert!(outcome.default_prevented);
    assert_eq!(controller.view().scroll_history(), vec![0.0]);
    assert_eq!(controller.view().active_links(), vec!["#"]);
}

#[test]
fn test_click_outside_nav_marks_matching_nav_link() {
    let controller = controller(page());
    controller.on_anchor_click("#predict");
    assert_eq!(controller.view().active_links(), vec!["#predict"]);

    // a section with no nav link of its own still scrolls, and no link stays active
    let outcome = controller.on_anchor_click("#footer");
    assert!(outcome.default_prevented);
    assert_eq!(
        controller.view().scroll_history().last().copied(),
        Some(2400.0 - NAVBAR_HEIGHT - 20.0)
    );
    assert!(controller.view().active_links().is_empty());
}

#[test]
fn test_missing_target_keeps_default_navigation() {
    let controller = controller(page());
    controller.update_active_nav();

    let outcome = controller.on_anchor_click("#does-not-exist");

    assert!(!outcome.default_prevented);
    assert!(controller.view().scroll_history().is_empty());
    assert_eq!(controller.view().active_links(), vec!["#"]);
}

#[test]
fn test_external_link_is_ignored() {
    let controller = controller(page());
    let outcome = controller.on_anchor_click("/predict");
    assert!(!outcome.default_prevented);
    assert!(controller.view().scroll_history().is_empty());
}

#[test]
fn test_missing_navbar_uses_buffer_only() {
    let page = MemoryPage::prediction_form(NumberBounds::default(), NumberBounds::default())
        .with_nav(&["#", "#about"], None)
        .with_section("#about", 500.0);
    let controller = controller(page);

    controller.on_anchor_click("#about");

    assert_eq!(controller.view().scroll_history(), vec![480.0]);
}

#[test]
fn test_update_active_nav_follows_hash_changes() {
    let controller = controller(page());

    controller.update_active_nav();
    assert_eq!(controller.view().active_links(), vec!["#"]);

    controller.view().set_hash("#predict");
    controller.on_hash_change();
    assert_eq!(controller.view().active_links(), vec!["#predict"]);

    controller.view().set_hash("#unknown");
    controller.on_hash_change();
    assert_eq!(controller.view().active_links(), vec!["#"]);
}

#[tokio::test]
async fn test_page_load_scrolls_to_prediction_after_delay() {
    let settings = ControllerSettings {
        navbar_buffer: 20.0,
        prediction_scroll_delay: Duration::from_millis(30),
    };
    let page = page().with_prediction(900.0).with_hash("#predict");
    let controller = FormController::with_settings(page, UnreachableCatalog, settings);

    let started = Instant::now();
    controller.on_page_load().await;

    assert!(started.elapsed() >= Duration::from_millis(30));
    let page = controller.view();
    assert_eq!(page.scroll_history(), vec![900.0 - NAVBAR_HEIGHT - 20.0]);
    assert_eq!(page.active_links(), vec!["#predict"]);
    assert!(page.is_invalid(FieldId::Company));
}

#[tokio::test]
async fn test_page_load_without_prediction_does_not_scroll() {
    let controller = controller(page());
    assert!(!controller.scroll_to_prediction().await);
    assert!(controller.view().scroll_history().is_empty());
}
