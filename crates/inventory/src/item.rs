use serde::Serialize;
use serde_json::Value;

use stockbook_core::{Entity, InventoryError, InventoryResult, SerialNumber};

/// Wire-format field names of the persistence file. These are load-bearing:
/// renaming any of them breaks every previously written index file.
pub const FIELD_SERIAL: &str = "serialnumber";
pub const FIELD_NAME: &str = "name";
pub const FIELD_COST: &str = "cost";
pub const FIELD_SELL_PRICE: &str = "sellprice";
pub const FIELD_STOCK: &str = "stock";

/// One stock-keeping-unit record.
///
/// The serial number is the sole identity key and never changes; the only
/// mutation the index performs after creation is a stock update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockItem {
    #[serde(rename = "serialnumber")]
    serial_number: SerialNumber,
    name: String,
    cost: f64,
    #[serde(rename = "sellprice")]
    sell_price: f64,
    stock: u32,
}

impl StockItem {
    pub fn new(
        serial_number: impl Into<SerialNumber>,
        name: impl Into<String>,
        cost: f64,
        sell_price: f64,
        stock: u32,
    ) -> Self {
        Self {
            serial_number: serial_number.into(),
            name: name.into(),
            cost,
            sell_price,
            stock,
        }
    }

    pub fn serial_number(&self) -> &SerialNumber {
        &self.serial_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn sell_price(&self) -> f64 {
        self.sell_price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub(crate) fn set_stock(&mut self, new_stock: u32) {
        self.stock = new_stock;
    }

    /// Reconstruct a record from one persisted JSON object.
    ///
    /// Fields beyond the five known ones are ignored. A missing field, or a
    /// value that cannot be read as the expected type, is a
    /// [`InventoryError::MissingField`].
    pub fn from_value(value: &Value) -> InventoryResult<Self> {
        Ok(Self {
            serial_number: SerialNumber::new(require_str(value, FIELD_SERIAL)?),
            name: require_str(value, FIELD_NAME)?.to_string(),
            cost: require_f64(value, FIELD_COST)?,
            sell_price: require_f64(value, FIELD_SELL_PRICE)?,
            stock: require_u32(value, FIELD_STOCK)?,
        })
    }

    /// Serialize to the wire format (a plain JSON object).
    pub fn to_value(&self) -> InventoryResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Entity for StockItem {
    type Id = SerialNumber;

    fn id(&self) -> &Self::Id {
        &self.serial_number
    }
}

impl core::fmt::Display for StockItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Serial: {} | Name: {} | Cost: {:.2} | Sell price: {:.2} | Stock: {}",
            self.serial_number, self.name, self.cost, self.sell_price, self.stock
        )
    }
}

fn require<'a>(value: &'a Value, field: &'static str) -> InventoryResult<&'a Value> {
    value
        .get(field)
        .ok_or_else(|| InventoryError::missing_field(field))
}

fn require_str<'a>(value: &'a Value, field: &'static str) -> InventoryResult<&'a str> {
    require(value, field)?
        .as_str()
        .ok_or_else(|| InventoryError::missing_field(field))
}

fn require_f64(value: &Value, field: &'static str) -> InventoryResult<f64> {
    require(value, field)?
        .as_f64()
        .ok_or_else(|| InventoryError::missing_field(field))
}

fn require_u32(value: &Value, field: &'static str) -> InventoryResult<u32> {
    require(value, field)?
        .as_u64()
        .and_then(|stock| u32::try_from(stock).ok())
        .ok_or_else(|| InventoryError::missing_field(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> StockItem {
        StockItem::new("SKU-001", "Oat milk", 1.5, 2.25, 40)
    }

    #[test]
    fn display_renders_prices_to_two_decimals() {
        assert_eq!(
            sample().to_string(),
            "Serial: SKU-001 | Name: Oat milk | Cost: 1.50 | Sell price: 2.25 | Stock: 40"
        );
    }

    #[test]
    fn entity_identity_is_the_serial_number() {
        let item = sample();
        assert_eq!(Entity::id(&item), &SerialNumber::new("SKU-001"));
    }

    #[test]
    fn wire_format_uses_the_exact_persisted_field_names() {
        let value = sample().to_value().unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["cost", "name", "sellprice", "serialnumber", "stock"]);
    }

    #[test]
    fn round_trips_through_the_wire_format() {
        let item = sample();
        let reconstructed = StockItem::from_value(&item.to_value().unwrap()).unwrap();
        assert_eq!(reconstructed, item);
    }

    #[test]
    fn from_value_reports_the_missing_field() {
        let value = json!({
            "serialnumber": "SKU-001",
            "name": "Oat milk",
            "cost": 1.5,
            "stock": 40
        });
        let err = StockItem::from_value(&value).unwrap_err();
        assert_eq!(err, InventoryError::missing_field("sellprice"));
    }

    #[test]
    fn from_value_rejects_wrongly_typed_fields() {
        let value = json!({
            "serialnumber": "SKU-001",
            "name": "Oat milk",
            "cost": "not a number",
            "sellprice": 2.25,
            "stock": 40
        });
        let err = StockItem::from_value(&value).unwrap_err();
        assert_eq!(err, InventoryError::missing_field("cost"));
    }

    #[test]
    fn from_value_ignores_unknown_fields() {
        let value = json!({
            "serialnumber": "SKU-001",
            "name": "Oat milk",
            "cost": 1.5,
            "sellprice": 2.25,
            "stock": 40,
            "aisle": 7
        });
        let item = StockItem::from_value(&value).unwrap();
        assert_eq!(item, sample());
    }
}
