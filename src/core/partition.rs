use crate::domain::model::{PackageWeight, Product, PACKAGE_WEIGHT_LIMIT};
use crate::utils::error::{Result, ShippingError};
use rust_decimal::Decimal;

/// 所有產品的總重量 (磅)
pub fn total_weight(products: &[Product]) -> Result<Decimal> {
    products.iter().try_fold(Decimal::ZERO, |total, product| {
        if product.weight_in_pounds < Decimal::ZERO {
            return Err(ShippingError::InvalidWeight {
                weight: product.weight_in_pounds,
            });
        }
        total
            .checked_add(product.weight_in_pounds)
            .ok_or(ShippingError::InvalidWeight {
                weight: product.weight_in_pounds,
            })
    })
}

/// 依 30 磅上限切分成多個包裹，最後一個包裹放剩餘重量
pub fn partition(total_weight: Decimal) -> Result<Vec<PackageWeight>> {
    if total_weight < Decimal::ZERO {
        return Err(ShippingError::InvalidWeight {
            weight: total_weight,
        });
    }

    let mut weights = Vec::new();
    let mut remaining = total_weight;
    while remaining > Decimal::ZERO {
        let chunk = remaining.min(PACKAGE_WEIGHT_LIMIT);
        weights.push(PackageWeight::new(chunk));
        remaining -= chunk;
    }

    tracing::debug!(
        "Partitioned {} lb into {} package(s)",
        total_weight,
        weights.len()
    );
    Ok(weights)
}
