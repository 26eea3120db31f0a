//! File-based property sources.

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use keystone_core::{PropertyId, PropertyRecord, PropertyStatus};
use keystone_traits::error::TraitError;
use keystone_traits::source::{PropertyFilter, PropertySource};

use crate::store::InMemoryPropertyStore;

// =============================================================================
// ROW FORMAT
// =============================================================================

/// One property as written in a data file.
///
/// Same camelCase names as [`PropertyRecord`], but `id` and the text
/// fields may be omitted. Rows without an id get a random UUID.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PropertyRow {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    address: Option<String>,
    city: String,
    state: String,
    #[serde(default)]
    zip_code: Option<String>,
    units: u32,
    acquisition_date: NaiveDate,
    acquisition_price: Decimal,
    #[serde(default)]
    rehab_costs: Option<Decimal>,
    #[serde(default)]
    current_value: Option<Decimal>,
    #[serde(default)]
    sale_price: Option<Decimal>,
    #[serde(default)]
    sale_date: Option<NaiveDate>,
    #[serde(default)]
    total_cashflow: Option<Decimal>,
    #[serde(default)]
    status: Option<PropertyStatus>,
    #[serde(default)]
    ownership_structure: Option<String>,
    #[serde(default)]
    ownership_name: Option<String>,
    #[serde(default)]
    years_held: Option<Decimal>,
    #[serde(default)]
    irr: Option<Decimal>,
    #[serde(default)]
    equity_multiple: Option<Decimal>,
    #[serde(default)]
    noi: Option<Decimal>,
    #[serde(default)]
    debt_service: Option<Decimal>,
    #[serde(default)]
    cashflow: Option<Decimal>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl PropertyRow {
    fn into_record(self) -> Result<PropertyRecord, TraitError> {
        let id = non_blank(self.id).unwrap_or_else(|| Uuid::new_v4().to_string());
        let address = non_blank(self.address).unwrap_or_else(|| self.name.clone());

        let record = PropertyRecord {
            id: PropertyId::new(id),
            name: self.name,
            address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code.unwrap_or_default(),
            units: self.units,
            acquisition_date: self.acquisition_date,
            acquisition_price: self.acquisition_price,
            rehab_costs: self.rehab_costs,
            current_value: self.current_value,
            sale_price: self.sale_price,
            sale_date: self.sale_date,
            total_cashflow: self.total_cashflow.unwrap_or(Decimal::ZERO),
            status: self.status.unwrap_or_default(),
            ownership_structure: self.ownership_structure.unwrap_or_default(),
            ownership_name: self.ownership_name.unwrap_or_default(),
            years_held: self.years_held,
            irr: self.irr,
            equity_multiple: self.equity_multiple,
            noi: self.noi,
            debt_service: self.debt_service,
            cashflow: self.cashflow,
        };

        record.validate()?;
        Ok(record)
    }
}

fn into_records(rows: Vec<PropertyRow>) -> Result<Vec<PropertyRecord>, TraitError> {
    let records = rows
        .into_iter()
        .map(PropertyRow::into_record)
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.id.clone()) {
            return Err(TraitError::InvalidInput(format!(
                "duplicate property id: {}",
                record.id
            )));
        }
    }
    Ok(records)
}

/// Parses a JSON array of property rows.
///
/// # Errors
///
/// Fails on malformed JSON, an invalid record, or a duplicate id.
pub fn parse_json_records(json: &str) -> Result<Vec<PropertyRecord>, TraitError> {
    let rows: Vec<PropertyRow> =
        serde_json::from_str(json).map_err(|e| TraitError::parse(e.to_string()))?;
    into_records(rows)
}

/// Parses CSV property rows with a camelCase header line.
///
/// Empty cells are treated as absent.
///
/// # Errors
///
/// Fails on malformed CSV, an invalid record, or a duplicate id.
pub fn parse_csv_records(reader: impl Read) -> Result<Vec<PropertyRecord>, TraitError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line, result) in reader.deserialize().enumerate() {
        let row: PropertyRow =
            result.map_err(|e| TraitError::parse(format!("row {}: {e}", line + 1)))?;
        rows.push(row);
    }
    into_records(rows)
}

// =============================================================================
// JSON PROPERTY SOURCE
// =============================================================================

/// JSON file property source.
pub struct JsonPropertySource {
    file_path: PathBuf,
    store: InMemoryPropertyStore,
}

impl JsonPropertySource {
    /// Create a new JSON property source and load the file.
    pub fn new(file_path: impl AsRef<Path>) -> Result<Self, TraitError> {
        let source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            store: InMemoryPropertyStore::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reload records from file.
    ///
    /// The previous contents are kept if the file fails to load.
    pub fn reload(&self) -> Result<usize, TraitError> {
        let json = std::fs::read_to_string(&self.file_path)?;
        let records = parse_json_records(&json)?;
        let count = records.len();
        self.store.replace_all(records);

        tracing::info!(path = %self.file_path.display(), count, "loaded property records");
        Ok(count)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

// =============================================================================
// CSV PROPERTY SOURCE
// =============================================================================

/// CSV file property source.
pub struct CsvPropertySource {
    file_path: PathBuf,
    store: InMemoryPropertyStore,
}

impl CsvPropertySource {
    /// Create a new CSV property source and load the file.
    pub fn new(file_path: impl AsRef<Path>) -> Result<Self, TraitError> {
        let source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            store: InMemoryPropertyStore::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reload records from file.
    ///
    /// The previous contents are kept if the file fails to load.
    pub fn reload(&self) -> Result<usize, TraitError> {
        let file = std::fs::File::open(&self.file_path)?;
        let records = parse_csv_records(file)?;
        let count = records.len();
        self.store.replace_all(records);

        tracing::info!(path = %self.file_path.display(), count, "loaded property records");
        Ok(count)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

macro_rules! delegate_to_store {
    ($source:ty) => {
        #[async_trait]
        impl PropertySource for $source {
            async fn get_all(&self) -> Result<Vec<PropertyRecord>, TraitError> {
                self.store.get_all().await
            }

            async fn get_by_id(
                &self,
                id: &PropertyId,
            ) -> Result<Option<PropertyRecord>, TraitError> {
                self.store.get_by_id(id).await
            }

            async fn search(
                &self,
                filter: &PropertyFilter,
            ) -> Result<Vec<PropertyRecord>, TraitError> {
                self.store.search(filter).await
            }
        }
    };
}

delegate_to_store!(JsonPropertySource);
delegate_to_store!(CsvPropertySource);
