//! Low-stock/loss-margin advisory check.

use serde::Serialize;

use stockbook_core::SerialNumber;

use crate::item::StockItem;

/// Stock level below which a loss-making item triggers an advisory.
pub const LOW_STOCK_THRESHOLD: u32 = 100;

/// Advisory raised when an item is low on stock *and* sells below cost.
///
/// This is a plain value the presentation layer renders; it is recomputed on
/// every add/list/update and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LossAdvisory {
    pub serial_number: SerialNumber,
    pub name: String,
    pub stock: u32,
    pub cost: f64,
    pub sell_price: f64,
}

/// Evaluate the advisory predicate for one record.
///
/// Fires iff `stock < LOW_STOCK_THRESHOLD` and `sell_price < cost`.
pub fn evaluate(item: &StockItem) -> Option<LossAdvisory> {
    if item.stock() < LOW_STOCK_THRESHOLD && item.sell_price() < item.cost() {
        Some(LossAdvisory {
            serial_number: item.serial_number().clone(),
            name: item.name().to_string(),
            stock: item.stock(),
            cost: item.cost(),
            sell_price: item.sell_price(),
        })
    } else {
        None
    }
}

impl core::fmt::Display for LossAdvisory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ALERT! Item {} (Serial: {}) has low stock ({}) and is being sold at a loss! \
             Cost price: {:.2}, Sell price: {:.2}",
            self.name, self.serial_number, self.stock, self.cost, self.sell_price
        )
    }
}
