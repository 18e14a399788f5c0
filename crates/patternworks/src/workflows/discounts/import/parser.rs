use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DiscountState {
    None,
    Previous,
    New,
}

#[derive(Debug)]
pub(crate) struct CatalogRecord {
    pub(crate) product: String,
    pub(crate) discount: Result<DiscountState, String>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<CatalogRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<CatalogRow>() {
        let row = record?;
        records.push(CatalogRecord {
            product: normalize_product(&row.product),
            discount: row.discount_state(),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Product")]
    product: String,
    #[serde(rename = "Discount", default, deserialize_with = "empty_string_as_none")]
    discount: Option<String>,
}

impl CatalogRow {
    fn discount_state(&self) -> Result<DiscountState, String> {
        let Some(raw) = self.discount.as_deref() else {
            return Ok(DiscountState::None);
        };

        match raw.trim().to_ascii_lowercase().as_str() {
            "previous" | "old" => Ok(DiscountState::Previous),
            "new" => Ok(DiscountState::New),
            "none" => Ok(DiscountState::None),
            _ => Err(raw.to_string()),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn normalize_product(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}
