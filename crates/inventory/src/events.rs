//! Outcomes of successful index mutations.
//!
//! The index never prints; each mutating operation returns one of these
//! event-shaped values and the presentation layer decides how to render it.

use chrono::{DateTime, Utc};

use crate::advisory::LossAdvisory;
use crate::item::StockItem;

/// A record of one successful index mutation.
///
/// Events are immutable facts: the advisory carried here was evaluated at
/// mutation time against the record as it then was.
pub trait IndexEvent: core::fmt::Debug {
    /// Stable event name (e.g. "inventory.item.added").
    fn event_type(&self) -> &'static str;

    /// When the mutation happened.
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// A new record was inserted and persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemAdded {
    pub item: StockItem,
    pub advisory: Option<LossAdvisory>,
    pub occurred_at: DateTime<Utc>,
}

/// An existing record's stock count changed and was persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct StockUpdated {
    pub item: StockItem,
    pub previous_stock: u32,
    pub advisory: Option<LossAdvisory>,
    pub occurred_at: DateTime<Utc>,
}

/// A record was deleted and the deletion persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRemoved {
    pub item: StockItem,
    pub occurred_at: DateTime<Utc>,
}

impl IndexEvent for ItemAdded {
    fn event_type(&self) -> &'static str {
        "inventory.item.added"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl IndexEvent for StockUpdated {
    fn event_type(&self) -> &'static str {
        "inventory.item.stock_updated"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl IndexEvent for ItemRemoved {
    fn event_type(&self) -> &'static str {
        "inventory.item.removed"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
