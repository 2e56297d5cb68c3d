use crate::domain::model::Product;
use crate::utils::error::Result;
use std::io::Read;
use std::path::Path;

/// 讀取 `sku,weight_in_pounds` 格式的 CSV
pub fn read_products<R: Read>(reader: R) -> Result<Vec<Product>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut products = Vec::new();
    for record in csv_reader.deserialize() {
        let product: Product = record?;
        products.push(product);
    }
    Ok(products)
}

pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let file = std::fs::File::open(&path)?;
    let products = read_products(file)?;
    tracing::debug!(
        "Loaded {} product(s) from {}",
        products.len(),
        path.as_ref().display()
    );
    Ok(products)
}
