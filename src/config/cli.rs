use crate::core::variant::{Estimate, Quote};
use crate::domain::model::{EstimateAddress, QuoteAddress, ShippingMethod};
use crate::domain::ports::ShipmentVariant;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "ups-shipping")]
#[command(about = "Request a UPS shipping rate for a set of products")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "ups-config.toml")]
    pub config: String,

    /// CSV file with `sku,weight_in_pounds` rows
    #[arg(short, long)]
    pub products: String,

    /// UPS service code, e.g. 03 for Ground
    #[arg(short, long = "service")]
    pub service_code: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Print the request document without calling UPS
    #[arg(long)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub variant: VariantArgs,
}

#[derive(Debug, Clone, Subcommand)]
pub enum VariantArgs {
    /// Price preview with a placeholder recipient
    Estimate {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        zip_code: Option<String>,
    },
    /// Quote for a fully identified recipient
    Quote {
        #[arg(long)]
        company: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        address_2: Option<String>,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state_code: String,
        #[arg(long)]
        postal_code: String,
    },
}

impl CliConfig {
    pub fn shipping_method(&self) -> ShippingMethod {
        ShippingMethod::new(self.service_code.clone())
    }
}

impl VariantArgs {
    pub fn into_variant(self) -> Box<dyn ShipmentVariant> {
        match self {
            VariantArgs::Estimate {
                city,
                state,
                zip_code,
            } => Box::new(Estimate::new(EstimateAddress {
                city,
                state,
                zip_code,
                country: None,
            })),
            VariantArgs::Quote {
                company,
                name,
                phone,
                address,
                address_2,
                city,
                state_code,
                postal_code,
            } => Box::new(Quote::new(QuoteAddress {
                company,
                name,
                phone,
                address,
                address_2,
                city,
                state_code,
                postal_code,
            })),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("config", &self.config)?;
        validation::validate_path("products", &self.products)?;
        validation::validate_file_extension("products", &self.products, &["csv"])?;
        validation::validate_non_empty_string("service", &self.service_code)?;
        Ok(())
    }
}
