//! Load cost line items from CSV

use super::CostItem;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the cost schedule export format
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Amount")]
    amount: f64,
}

impl CsvRow {
    fn to_cost_item(self) -> Result<CostItem, Box<dyn Error>> {
        // Ingestion is the one layer that enforces non-negative amounts
        if self.amount < 0.0 {
            return Err(format!(
                "Negative amount for cost item {}: {}",
                self.id, self.amount
            )
            .into());
        }

        Ok(CostItem {
            id: self.id,
            description: self.description,
            amount: self.amount,
        })
    }
}

/// Load all cost items from a CSV file
pub fn load_cost_items<P: AsRef<Path>>(path: P) -> Result<Vec<CostItem>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut items = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        items.push(row.to_cost_item()?);
    }

    Ok(items)
}

/// Load cost items from any reader (e.g., string buffer, network stream)
pub fn load_cost_items_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<CostItem>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut items = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        items.push(row.to_cost_item()?);
    }

    Ok(items)
}
