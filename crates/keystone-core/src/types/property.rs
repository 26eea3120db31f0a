//! Property records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{KeystoneError, KeystoneResult};

/// Largest magnitude [`PropertyRecord::validate`] accepts for any amount,
/// rate or ratio on a record.
///
/// Sums over validated records stay far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Property identifier.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct PropertyId(pub String);

impl PropertyId {
    /// Create a new property ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PropertyId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PropertyId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Lifecycle status of a property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    /// Still held by the firm.
    #[default]
    Current,
    /// Exited.
    Sold,
}

impl PropertyStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = KeystoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current" => Ok(Self::Current),
            "sold" => Ok(Self::Sold),
            other => Err(KeystoneError::UnknownStatus(other.to_string())),
        }
    }
}

/// One real-estate asset at a point in its lifecycle.
///
/// Records are read-only snapshots. Optional numeric fields stay optional;
/// the formulas in `keystone-analytics` decide how absence is treated.
///
/// The JSON form uses camelCase names (`acquisitionPrice`, `yearsHeld`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// Unique identifier.
    pub id: PropertyId,
    /// Display name, usually the street address.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State code.
    pub state: String,
    /// ZIP code.
    #[serde(default)]
    pub zip_code: String,
    /// Number of rentable units.
    pub units: u32,
    /// Date of acquisition.
    pub acquisition_date: NaiveDate,
    /// Purchase price.
    pub acquisition_price: Decimal,
    /// Capital invested in rehabilitation. Absent means zero.
    #[serde(default)]
    pub rehab_costs: Option<Decimal>,
    /// Last known value while held (may be retained after a sale).
    #[serde(default)]
    pub current_value: Option<Decimal>,
    /// Realized sale price.
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    /// Date of sale.
    #[serde(default)]
    pub sale_date: Option<NaiveDate>,
    /// Cumulative distributed cash since acquisition. May be negative.
    #[serde(default)]
    pub total_cashflow: Decimal,
    /// Lifecycle status.
    #[serde(default)]
    pub status: PropertyStatus,
    /// Ownership structure description.
    #[serde(default)]
    pub ownership_structure: String,
    /// Owning entity.
    #[serde(default)]
    pub ownership_name: String,
    /// Holding period in (fractional) years.
    #[serde(default)]
    pub years_held: Option<Decimal>,
    /// Reported IRR in percent.
    #[serde(default)]
    pub irr: Option<Decimal>,
    /// Reported equity multiple.
    #[serde(default)]
    pub equity_multiple: Option<Decimal>,
    /// Annualized net operating income.
    #[serde(default)]
    pub noi: Option<Decimal>,
    /// Annual debt service.
    #[serde(default)]
    pub debt_service: Option<Decimal>,
    /// Annual cashflow after debt service.
    #[serde(default)]
    pub cashflow: Option<Decimal>,
}

impl PropertyRecord {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> PropertyRecordBuilder {
        PropertyRecordBuilder::new()
    }

    /// True when the property has been exited.
    pub fn is_sold(&self) -> bool {
        self.status == PropertyStatus::Sold
    }

    /// True when the property is still held.
    pub fn is_current(&self) -> bool {
        self.status == PropertyStatus::Current
    }

    /// Rehab costs, treating absence as zero.
    pub fn rehab_costs_or_zero(&self) -> Decimal {
        self.rehab_costs.unwrap_or(Decimal::ZERO)
    }

    /// Checks the record's field-level invariants.
    ///
    /// Units must be positive, text identity fields non-empty, and every
    /// price, value and holding period non-negative when present. No numeric
    /// field may exceed [`MAX_AMOUNT`] in magnitude.
    pub fn validate(&self) -> KeystoneResult<()> {
        let id = self.id.as_str();
        if id.trim().is_empty() {
            return Err(KeystoneError::invalid_record(id, "id must not be empty"));
        }
        if self.units == 0 {
            return Err(KeystoneError::invalid_record(id, "units must be positive"));
        }
        if self.city.trim().is_empty() {
            return Err(KeystoneError::invalid_record(id, "city must not be empty"));
        }
        if self.state.trim().is_empty() {
            return Err(KeystoneError::invalid_record(id, "state must not be empty"));
        }

        let non_negative = [
            ("acquisition_price", Some(self.acquisition_price)),
            ("rehab_costs", self.rehab_costs),
            ("current_value", self.current_value),
            ("sale_price", self.sale_price),
            ("years_held", self.years_held),
        ];
        for (field, value) in non_negative {
            if let Some(v) = value {
                if v < Decimal::ZERO {
                    return Err(KeystoneError::invalid_record(
                        id,
                        format!("{field} must be non-negative, got {v}"),
                    ));
                }
            }
        }

        let signed = [
            ("total_cashflow", Some(self.total_cashflow)),
            ("irr", self.irr),
            ("equity_multiple", self.equity_multiple),
            ("noi", self.noi),
            ("debt_service", self.debt_service),
            ("cashflow", self.cashflow),
        ];
        for (field, value) in non_negative.into_iter().chain(signed) {
            if let Some(v) = value {
                if v.abs() > MAX_AMOUNT {
                    return Err(KeystoneError::invalid_record(
                        id,
                        format!("{field} exceeds {MAX_AMOUNT} in magnitude, got {v}"),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Builder for [`PropertyRecord`].
///
/// `id`, `city`, `state`, `units`, `acquisition_date` and
/// `acquisition_price` are required. `name` defaults to the id and
/// `address` to the name.
#[derive(Debug, Clone, Default)]
pub struct PropertyRecordBuilder {
    id: Option<PropertyId>,
    name: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: String,
    units: Option<u32>,
    acquisition_date: Option<NaiveDate>,
    acquisition_price: Option<Decimal>,
    rehab_costs: Option<Decimal>,
    current_value: Option<Decimal>,
    sale_price: Option<Decimal>,
    sale_date: Option<NaiveDate>,
    total_cashflow: Decimal,
    status: PropertyStatus,
    ownership_structure: String,
    ownership_name: String,
    years_held: Option<Decimal>,
    irr: Option<Decimal>,
    equity_multiple: Option<Decimal>,
    noi: Option<Decimal>,
    debt_service: Option<Decimal>,
    cashflow: Option<Decimal>,
}

impl PropertyRecordBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<PropertyId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the street address.
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the city.
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the state code.
    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the ZIP code.
    #[must_use]
    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = zip_code.into();
        self
    }

    /// Sets the unit count.
    #[must_use]
    pub fn units(mut self, units: u32) -> Self {
        self.units = Some(units);
        self
    }

    /// Sets the acquisition date.
    #[must_use]
    pub fn acquisition_date(mut self, date: NaiveDate) -> Self {
        self.acquisition_date = Some(date);
        self
    }

    /// Sets the purchase price.
    #[must_use]
    pub fn acquisition_price(mut self, price: Decimal) -> Self {
        self.acquisition_price = Some(price);
        self
    }

    /// Sets the rehab costs.
    #[must_use]
    pub fn rehab_costs(mut self, costs: Decimal) -> Self {
        self.rehab_costs = Some(costs);
        self
    }

    /// Sets the current value.
    #[must_use]
    pub fn current_value(mut self, value: Decimal) -> Self {
        self.current_value = Some(value);
        self
    }

    /// Sets the sale price.
    #[must_use]
    pub fn sale_price(mut self, price: Decimal) -> Self {
        self.sale_price = Some(price);
        self
    }

    /// Sets the sale date.
    #[must_use]
    pub fn sale_date(mut self, date: NaiveDate) -> Self {
        self.sale_date = Some(date);
        self
    }

    /// Sets the cumulative distributed cashflow.
    #[must_use]
    pub fn total_cashflow(mut self, cashflow: Decimal) -> Self {
        self.total_cashflow = cashflow;
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub fn status(mut self, status: PropertyStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the ownership structure and owning entity.
    #[must_use]
    pub fn ownership(mut self, structure: impl Into<String>, name: impl Into<String>) -> Self {
        self.ownership_structure = structure.into();
        self.ownership_name = name.into();
        self
    }

    /// Sets the holding period in years.
    #[must_use]
    pub fn years_held(mut self, years: Decimal) -> Self {
        self.years_held = Some(years);
        self
    }

    /// Sets the reported IRR (percent).
    #[must_use]
    pub fn irr(mut self, irr: Decimal) -> Self {
        self.irr = Some(irr);
        self
    }

    /// Sets the reported equity multiple.
    #[must_use]
    pub fn equity_multiple(mut self, multiple: Decimal) -> Self {
        self.equity_multiple = Some(multiple);
        self
    }

    /// Sets the annualized NOI.
    #[must_use]
    pub fn noi(mut self, noi: Decimal) -> Self {
        self.noi = Some(noi);
        self
    }

    /// Sets the annual debt service.
    #[must_use]
    pub fn debt_service(mut self, debt_service: Decimal) -> Self {
        self.debt_service = Some(debt_service);
        self
    }

    /// Sets the annual cashflow after debt service.
    #[must_use]
    pub fn cashflow(mut self, cashflow: Decimal) -> Self {
        self.cashflow = Some(cashflow);
        self
    }

    /// Builds and validates the record.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or the record fails
    /// [`PropertyRecord::validate`].
    pub fn build(self) -> KeystoneResult<PropertyRecord> {
        let id = self.id.ok_or_else(|| KeystoneError::missing_field("id"))?;
        let city = self.city.ok_or_else(|| KeystoneError::missing_field("city"))?;
        let state = self.state.ok_or_else(|| KeystoneError::missing_field("state"))?;
        let units = self.units.ok_or_else(|| KeystoneError::missing_field("units"))?;
        let acquisition_date = self
            .acquisition_date
            .ok_or_else(|| KeystoneError::missing_field("acquisition_date"))?;
        let acquisition_price = self
            .acquisition_price
            .ok_or_else(|| KeystoneError::missing_field("acquisition_price"))?;

        let name = self.name.unwrap_or_else(|| id.as_str().to_string());
        let address = self.address.unwrap_or_else(|| name.clone());

        let record = PropertyRecord {
            id,
            name,
            address,
            city,
            state,
            zip_code: self.zip_code,
            units,
            acquisition_date,
            acquisition_price,
            rehab_costs: self.rehab_costs,
            current_value: self.current_value,
            sale_price: self.sale_price,
            sale_date: self.sale_date,
            total_cashflow: self.total_cashflow,
            status: self.status,
            ownership_structure: self.ownership_structure,
            ownership_name: self.ownership_name,
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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sold_record() -> PropertyRecord {
        PropertyRecord::builder()
            .id("41-stuart-ave")
            .name("41 Stuart Ave")
            .city("New London")
            .state("CT")
            .zip_code("06320")
            .units(3)
            .acquisition_date(date(2020, 5, 1))
            .acquisition_price(dec!(195000))
            .rehab_costs(dec!(20000))
            .current_value(dec!(375000))
            .sale_price(dec!(375000))
            .sale_date(date(2024, 5, 1))
            .total_cashflow(dec!(144000))
            .status(PropertyStatus::Sold)
            .years_held(dec!(4.0))
            .irr(dec!(85.3))
            .equity_multiple(dec!(3.04))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let record = PropertyRecord::builder()
            .id("1-harmony-st")
            .city("Stonington")
            .state("CT")
            .units(4)
            .acquisition_date(date(2024, 10, 1))
            .acquisition_price(dec!(1075000))
            .build()
            .unwrap();

        assert_eq!(record.name, "1-harmony-st");
        assert_eq!(record.address, record.name);
        assert_eq!(record.status, PropertyStatus::Current);
        assert_eq!(record.total_cashflow, Decimal::ZERO);
        assert_eq!(record.rehab_costs, None);
        assert_eq!(record.rehab_costs_or_zero(), Decimal::ZERO);
    }

    #[test]
    fn test_builder_missing_field() {
        let err = PropertyRecord::builder()
            .id("x")
            .city("Tampa")
            .state("FL")
            .units(10)
            .acquisition_date(date(2024, 11, 1))
            .build()
            .unwrap_err();
        assert_eq!(err, KeystoneError::missing_field("acquisition_price"));
    }

    #[test]
    fn test_validate_rejects_zero_units() {
        let mut record = sold_record();
        record.units = 0;
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("units must be positive"));
    }

    #[test]
    fn test_validate_rejects_negative_prices() {
        let mut record = sold_record();
        record.sale_price = Some(dec!(-5));
        assert!(record.validate().is_err());

        let mut record = sold_record();
        record.years_held = Some(dec!(-0.5));
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_amounts_beyond_bound() {
        let mut record = sold_record();
        record.acquisition_price = Decimal::MAX;
        record.rehab_costs = Some(Decimal::MAX);
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("acquisition_price exceeds"));

        let mut record = sold_record();
        record.total_cashflow = -Decimal::MAX;
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("total_cashflow exceeds"));

        let mut record = sold_record();
        record.current_value = Some(MAX_AMOUNT);
        record.irr = Some(-MAX_AMOUNT);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validate_allows_negative_cashflow() {
        let mut record = sold_record();
        record.total_cashflow = dec!(-13200);
        record.cashflow = Some(dec!(-13200));
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("current".parse::<PropertyStatus>().unwrap(), PropertyStatus::Current);
        assert_eq!(" SOLD ".parse::<PropertyStatus>().unwrap(), PropertyStatus::Sold);
        assert!("pending".parse::<PropertyStatus>().is_err());
        assert_eq!(PropertyStatus::Sold.to_string(), "sold");
    }

    #[test]
    fn test_json_wire_names() {
        let record = sold_record();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "41-stuart-ave");
        assert_eq!(json["status"], "sold");
        assert_eq!(json["zipCode"], "06320");
        assert_eq!(json["acquisitionDate"], "2020-05-01");
        assert!(json["acquisitionPrice"].is_number());
        assert!(json["yearsHeld"].is_number());
        assert!(json["debtService"].is_null());
    }

    #[test]
    fn test_json_missing_optionals() {
        let json = r#"{
            "id": "p1",
            "name": "3408 E Dr MLK BLVD",
            "address": "3408 E Dr MLK BLVD",
            "city": "Tampa",
            "state": "FL",
            "units": 10,
            "acquisitionDate": "2024-11-01",
            "acquisitionPrice": 750000
        }"#;
        let record: PropertyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, PropertyStatus::Current);
        assert_eq!(record.rehab_costs, None);
        assert_eq!(record.sale_price, None);
        assert_eq!(record.total_cashflow, Decimal::ZERO);
    }
}
