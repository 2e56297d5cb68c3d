use clap::Parser;
use std::sync::Arc;
use ups_shipping::adapters::products::load_products;
use ups_shipping::utils::error::{ErrorSeverity, ShippingError};
use ups_shipping::utils::{logger, validation::Validate};
use ups_shipping::{CarrierConfig, CliConfig, HttpTransport, RateResult, UpsShipping};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting ups-shipping");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        exit_with(&e);
    }

    tracing::info!("📁 Loading configuration from: {}", cli.config);
    let config = match CarrierConfig::from_file(&cli.config).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let products = match load_products(&cli.products) {
        Ok(products) => products,
        Err(e) => exit_with(&e),
    };

    let transport = match HttpTransport::from_config(&config) {
        Ok(transport) => transport,
        Err(e) => exit_with(&e),
    };

    let shipping_method = cli.shipping_method();
    let variant = cli.variant.into_variant();
    let service = UpsShipping::new(Arc::new(config), transport);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - request is not sent to UPS");
        let request = match service.build_request(&products, &shipping_method, variant.as_ref()) {
            Ok(request) => request,
            Err(e) => exit_with(&e),
        };
        println!("{}", request.to_xml()?);
        return Ok(());
    }

    match service
        .request_shipping_rate(&products, &shipping_method, variant.as_ref())
        .await
    {
        Ok(RateResult::Priced(amount)) => {
            tracing::info!("✅ UPS rate: {:.2}", amount);
            println!("{:.2}", amount);
        }
        Ok(RateResult::Unavailable) => {
            tracing::warn!("No rate offered for service {}", shipping_method.ups_code());
            println!("unavailable");
            std::process::exit(4);
        }
        Ok(RateResult::TransportError(detail)) => {
            eprintln!("❌ UPS request failed: {}", detail);
            std::process::exit(2);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &ShippingError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
