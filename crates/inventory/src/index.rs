//! The persisted item index.
//!
//! An in-memory ordered mapping `serial number -> record`, rewritten to a
//! single JSON file after every successful mutation. The file is a JSON array
//! of record objects in the wire format (see [`crate::item`]).
//!
//! Load policy: a missing file is an empty index; an unreadable or malformed
//! file is *also* an empty index. Discarding undecodable data is a recorded
//! policy choice carried over from the tool this replaces, surfaced here as a
//! warning log rather than silently.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::Value;

use stockbook_core::{InventoryError, InventoryResult, SerialNumber};

use crate::advisory::{self, LossAdvisory};
use crate::events::{ItemAdded, ItemRemoved, StockUpdated};
use crate::item::StockItem;

/// In-memory index of stock items, synchronized to one JSON file.
///
/// Single-threaded by design: one process, one instance, no locking. Every
/// mutating operation follows the sequence mutate -> persist whole mapping ->
/// evaluate advisory. If persistence fails the in-memory mapping and the file
/// diverge; the error is reported and the process keeps running.
pub struct ItemIndex {
    path: PathBuf,
    items: BTreeMap<SerialNumber, StockItem>,
}

impl ItemIndex {
    /// Open the index backed by `path`, loading any persisted records.
    ///
    /// Only an I/O failure while reading an existing file is an error;
    /// missing and malformed files both yield an empty index.
    pub fn open(path: impl Into<PathBuf>) -> InventoryResult<Self> {
        let mut index = Self {
            path: path.into(),
            items: BTreeMap::new(),
        };
        index.load()?;
        Ok(index)
    }

    /// Path of the persistence file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read the persistence file and rebuild the mapping.
    fn load(&mut self) -> InventoryResult<()> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.items = BTreeMap::new();
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        self.items = match parse_records(&contents) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "persisted index is unreadable; starting with an empty index"
                );
                BTreeMap::new()
            }
        };
        Ok(())
    }

    /// Persist all current records, whole-file overwrite.
    ///
    /// Record order in the file is the mapping's iteration order (sorted by
    /// serial number). Pretty-printing is cosmetic; load does not depend on it.
    pub fn save(&self) -> InventoryResult<()> {
        let records: Vec<&StockItem> = self.items.values().collect();
        let payload = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, payload)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "index persisted");
        Ok(())
    }

    /// Insert a new record, persist, and evaluate the advisory against it.
    ///
    /// A serial number that is already present is a
    /// [`InventoryError::DuplicateKey`]; neither the mapping nor the file is
    /// touched in that case.
    pub fn add_item(
        &mut self,
        serial_number: impl Into<SerialNumber>,
        name: impl Into<String>,
        cost: f64,
        sell_price: f64,
        stock: u32,
    ) -> InventoryResult<ItemAdded> {
        let serial_number = serial_number.into();
        if self.items.contains_key(&serial_number) {
            return Err(InventoryError::DuplicateKey(serial_number));
        }

        let item = StockItem::new(serial_number.clone(), name, cost, sell_price, stock);
        self.items.insert(serial_number, item.clone());
        self.save()?;

        Ok(ItemAdded {
            advisory: advisory::evaluate(&item),
            item,
            occurred_at: Utc::now(),
        })
    }

    /// Iterate all records in mapping order, each paired with a freshly
    /// evaluated advisory. Restartable; re-iterating yields the same records
    /// unless the index was mutated in between.
    pub fn list_items(&self) -> impl Iterator<Item = (&StockItem, Option<LossAdvisory>)> {
        self.items
            .values()
            .map(|item| (item, advisory::evaluate(item)))
    }

    /// Bare enumeration in mapping order, no advisory evaluation.
    pub fn iter(&self) -> impl Iterator<Item = &StockItem> {
        self.items.values()
    }

    /// Look up a record by serial number. Absence is not an error.
    pub fn find_item(&self, serial_number: &SerialNumber) -> Option<&StockItem> {
        self.items.get(serial_number)
    }

    /// Replace a record's stock count, persist, and evaluate the advisory.
    pub fn update_stock(
        &mut self,
        serial_number: &SerialNumber,
        new_stock: u32,
    ) -> InventoryResult<StockUpdated> {
        let Some(entry) = self.items.get_mut(serial_number) else {
            return Err(InventoryError::NotFound(serial_number.clone()));
        };
        let previous_stock = entry.stock();
        entry.set_stock(new_stock);
        let item = entry.clone();

        self.save()?;

        Ok(StockUpdated {
            advisory: advisory::evaluate(&item),
            item,
            previous_stock,
            occurred_at: Utc::now(),
        })
    }

    /// Delete a record and persist the deletion.
    pub fn remove_item(&mut self, serial_number: &SerialNumber) -> InventoryResult<ItemRemoved> {
        let Some(item) = self.items.remove(serial_number) else {
            return Err(InventoryError::NotFound(serial_number.clone()));
        };
        self.save()?;

        Ok(ItemRemoved {
            item,
            occurred_at: Utc::now(),
        })
    }
}

/// Parse the persistence file's contents into a fresh mapping.
///
/// Duplicate serials inside the file resolve last-wins.
fn parse_records(contents: &str) -> InventoryResult<BTreeMap<SerialNumber, StockItem>> {
    let values: Vec<Value> = serde_json::from_str(contents)?;
    let mut items = BTreeMap::new();
    for value in &values {
        let item = StockItem::from_value(value)?;
        items.insert(item.serial_number().clone(), item);
    }
    Ok(items)
}
