use async_trait::async_trait;
use car_price_form::domain::model::NumberBounds;
use car_price_form::domain::ports::{ModelCatalog, PageView};
use car_price_form::{FieldId, FormController, MemoryPage, SubmitOutcome};
use std::collections::HashMap;

/// In-process stand-in for the model list endpoint.
struct StaticCatalog {
    models: HashMap<String, Vec<String>>,
}

impl StaticCatalog {
    fn new() -> Self {
        let mut models = HashMap::new();
        models.insert(
            "Toyota".to_string(),
            vec!["Camry".to_string(), "Fortuner".to_string()],
        );
        models.insert(
            "Honda".to_string(),
            vec!["Amaze".to_string(), "City".to_string()],
        );
        Self { models }
    }
}

#[async_trait]
impl ModelCatalog for StaticCatalog {
    async fn fetch_models(&self, company: &str) -> car_price_form::Result<Vec<String>> {
        Ok(self.models.get(company).cloned().unwrap_or_default())
    }
}

fn controller() -> FormController<MemoryPage, StaticCatalog> {
    let page = MemoryPage::prediction_form(
        NumberBounds {
            min: Some(1990),
            max: Some(2024),
        },
        NumberBounds {
            min: Some(0),
            max: None,
        },
    );
    FormController::new(page, StaticCatalog::new())
}

async fn fill_form(
    controller: &FormController<MemoryPage, StaticCatalog>,
    company: &str,
    model: Option<&str>,
    year: &str,
    kilo: &str,
) {
    let page = controller.view();
    page.set_value(FieldId::Company, company);
    controller.on_company_change(company).await;
    if let Some(model) = model {
        assert!(page.choose_option(FieldId::CarModel, model));
        controller.on_select_change(FieldId::CarModel);
    }
    assert!(page.choose_option(FieldId::FuelType, "Petrol"));
    controller.on_select_change(FieldId::FuelType);
    page.set_value(FieldId::Year, year);
    controller.on_number_input(FieldId::Year);
    page.set_value(FieldId::KiloDriven, kilo);
    controller.on_number_input(FieldId::KiloDriven);
}

#[tokio::test]
async fn test_initialize_marks_required_empty_fields() {
    let controller = controller();
    controller.initialize();

    let page = controller.view();
    assert!(page.is_invalid(FieldId::Company));
    assert!(page.is_invalid(FieldId::FuelType));
    assert!(page.is_invalid(FieldId::Year));
    assert!(page.is_invalid(FieldId::KiloDriven));
    // disabled model select is exempt
    assert!(!page.is_invalid(FieldId::CarModel));
}

#[tokio::test]
async fn test_complete_form_is_allowed_and_shows_overlay() {
    let controller = controller();
    controller.initialize();
    fill_form(&controller, "Toyota", Some("Camry"), "2020", "50000").await;

    let outcome = controller.handle_submit();

    assert_eq!(outcome, SubmitOutcome::Allowed);
    let page = controller.view();
    assert!(page.overlay_visible());
    assert!(page.focused().is_none());
    for id in [
        FieldId::Company,
        FieldId::CarModel,
        FieldId::Year,
        FieldId::FuelType,
        FieldId::KiloDriven,
    ] {
        assert!(!page.is_invalid(id), "{} should be valid", id);
    }
}

#[tokio::test]
async fn test_unset_model_blocks_submit() {
    let controller = controller();
    // no models for this brand, so the model select stays disabled
    fill_form(&controller, "Tesla", None, "2020", "50000").await;
    assert!(controller.view().is_disabled(FieldId::CarModel));

    let outcome = controller.handle_submit();

    assert_eq!(outcome, SubmitOutcome::Blocked { first_invalid: None });
    assert!(!controller.view().overlay_visible());
    assert!(!controller.view().is_invalid(FieldId::CarModel));
}

#[tokio::test]
async fn test_placeholder_model_is_required() {
    let controller = controller();
    fill_form(&controller, "Honda", None, "2020", "50000").await;

    let outcome = controller.handle_submit();

    assert_eq!(
        outcome,
        SubmitOutcome::Blocked {
            first_invalid: Some(FieldId::CarModel)
        }
    );
    let page = controller.view();
    assert!(page.is_invalid(FieldId::CarModel));
    assert_eq!(page.focused(), Some(FieldId::CarModel));
    assert_eq!(page.scrolled_into_view(), vec![FieldId::CarModel]);
}

#[tokio::test]
async fn test_missing_brand_focuses_company() {
    let controller = controller();
    fill_form(&controller, "", None, "2020", "50000").await;

    let outcome = controller.handle_submit();

    assert_eq!(
        outcome,
        SubmitOutcome::Blocked {
            first_invalid: Some(FieldId::Company)
        }
    );
    assert_eq!(controller.view().focused(), Some(FieldId::Company));
}

#[tokio::test]
async fn test_year_out_of_range_blocks_and_focuses_year() {
    let controller = controller();
    fill_form(&controller, "Toyota", Some("Fortuner"), "1985", "50000").await;

    let outcome = controller.handle_submit();

    assert_eq!(
        outcome,
        SubmitOutcome::Blocked {
            first_invalid: Some(FieldId::Year)
        }
    );
    assert!(controller.view().is_invalid(FieldId::Year));
    assert!(!controller.view().is_invalid(FieldId::KiloDriven));
}

#[tokio::test]
async fn test_fractional_year_is_truncated_and_accepted() {
    let controller = controller();
    fill_form(&controller, "Toyota", Some("Camry"), "2020.9", "12000").await;

    assert_eq!(controller.handle_submit(), SubmitOutcome::Allowed);
}

#[tokio::test]
async fn test_live_number_validation() {
    let controller = controller();
    let page = controller.view();

    page.set_value(FieldId::KiloDriven, "-5");
    assert!(!controller.on_number_input(FieldId::KiloDriven));
    assert!(page.is_invalid(FieldId::KiloDriven));

    page.set_value(FieldId::KiloDriven, "0");
    assert!(controller.on_number_input(FieldId::KiloDriven));
    assert!(!page.is_invalid(FieldId::KiloDriven));
}

#[tokio::test]
async fn test_company_change_clears_model_marker() {
    let controller = controller();
    fill_form(&controller, "Honda", None, "2020", "50000").await;
    controller.handle_submit();
    assert!(controller.view().is_invalid(FieldId::CarModel));

    controller.view().set_value(FieldId::Company, "Toyota");
    controller.on_company_change("Toyota").await;

    assert!(!controller.view().is_invalid(FieldId::CarModel));
    assert_eq!(
        controller.view().option_labels(FieldId::CarModel),
        vec!["Select Model", "Camry", "Fortuner"]
    );
}

#[tokio::test]
async fn test_company_change_alone_is_enough_to_submit() {
    let controller = controller();
    controller.initialize();
    let page = controller.view();

    // the event handler is the only thing that learns about the brand
    controller.on_company_change("Toyota").await;
    assert_eq!(page.value(FieldId::Company), "Toyota");
    assert!(!page.is_invalid(FieldId::Company));

    assert!(page.choose_option(FieldId::CarModel, "Camry"));
    controller.on_select_change(FieldId::CarModel);
    assert!(page.choose_option(FieldId::FuelType, "Petrol"));
    controller.on_select_change(FieldId::FuelType);
    page.set_value(FieldId::Year, "2020");
    controller.on_number_input(FieldId::Year);
    page.set_value(FieldId::KiloDriven, "5");
    controller.on_number_input(FieldId::KiloDriven);

    assert_eq!(controller.handle_submit(), SubmitOutcome::Allowed);
    assert!(!page.is_invalid(FieldId::Company));
}
