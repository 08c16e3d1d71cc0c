use car_price_form::core::controller::ControllerSettings;
use car_price_form::domain::ports::PageView;
use car_price_form::utils::{logger, validation::Validate};
use car_price_form::{
    CliConfig, FieldId, FormController, HttpModelCatalog, MemoryPage, ModelListState,
    SubmitOutcome,
};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting car-price-form driver");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let config = match cli.load_form_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let catalog = match HttpModelCatalog::from_config(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let page = MemoryPage::prediction_form(config.fields.year, config.fields.kilo_driven);
    let controller =
        FormController::with_settings(page, catalog, ControllerSettings::from_config(&config));
    controller.on_page_load().await;
    let page = controller.view();

    page.set_value(FieldId::Company, &cli.company);
    match controller.on_company_change(&cli.company).await {
        Some(ModelListState::Loaded(models)) => {
            println!("📋 {} models for {}: {}", models.len(), cli.company, models.join(", "));
        }
        Some(ModelListState::Empty) => println!("📋 No models found for {}", cli.company),
        Some(ModelListState::Failed) => eprintln!("⚠️  Error loading models for {}", cli.company),
        _ => {}
    }

    if let Some(model) = &cli.model {
        if !page.choose_option(FieldId::CarModel, model) {
            tracing::warn!("Model '{}' is not available for '{}'", model, cli.company);
        }
        controller.on_select_change(FieldId::CarModel);
    }

    if !page.choose_option(FieldId::FuelType, &cli.fuel_type) {
        tracing::warn!("Unknown fuel type '{}'", cli.fuel_type);
    }
    controller.on_select_change(FieldId::FuelType);

    page.set_value(FieldId::Year, &cli.year);
    controller.on_number_input(FieldId::Year);
    page.set_value(FieldId::KiloDriven, &cli.kilo_driven);
    controller.on_number_input(FieldId::KiloDriven);

    match controller.handle_submit() {
        SubmitOutcome::Allowed => {
            println!("✅ Form is valid and would be submitted");
        }
        SubmitOutcome::Blocked { first_invalid } => {
            println!("❌ Submission blocked by validation");
            if let Some(field) = first_invalid {
                println!("🔎 First invalid field: {}", field);
            }
            std::process::exit(2);
        }
    }

    Ok(())
}
