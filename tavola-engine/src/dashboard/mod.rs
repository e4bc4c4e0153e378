//! Admin dashboard aggregation
//!
//! Read-only metrics over the persisted logs: headline totals, a
//! quantity-ranked item tally, the most recent records, and a zero-filled
//! per-day activity window. Everything is derived on demand; nothing here
//! writes to the store.

use crate::store::{ORDERS_KEY, RESERVATIONS_KEY, StoreAdapter};
use chrono::{Datelike, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{OrderRecord, ReservationRecord};
use std::collections::HashMap;

/// Headline metrics
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    pub total_orders: usize,
    pub total_reservations: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_order_value: Decimal,
}

/// One entry in the quantity-ranked item tally
#[derive(Debug, Clone, Serialize)]
pub struct TopItem {
    pub id: String,
    pub name: String,
    pub count: u32,
}

/// Order/reservation counts for one calendar day
#[derive(Debug, Clone, Serialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    /// Short weekday label, e.g. "Mon"
    pub label: String,
    pub orders: u32,
    pub reservations: u32,
}

/// Read-only aggregation over the persisted logs
pub struct Dashboard<S: StoreAdapter> {
    store: S,
}

impl<S: StoreAdapter> Dashboard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn orders(&self) -> Vec<OrderRecord> {
        self.store.read_or(ORDERS_KEY, Vec::new())
    }

    fn reservations(&self) -> Vec<ReservationRecord> {
        self.store.read_or(RESERVATIONS_KEY, Vec::new())
    }

    /// Totals, revenue, and average order value
    pub fn metrics(&self) -> Metrics {
        let orders = self.orders();
        let reservations = self.reservations();

        let revenue: Decimal = orders.iter().map(|order| order.total_price).sum();
        let average_order_value = if orders.is_empty() {
            Decimal::ZERO
        } else {
            (revenue / Decimal::from(orders.len() as u64)).round_dp(2)
        };

        Metrics {
            total_orders: orders.len(),
            total_reservations: reservations.len(),
            revenue,
            average_order_value,
        }
    }

    /// The `limit` most-ordered items by total quantity, descending
    ///
    /// The name captured when an item was first seen is kept for display.
    pub fn top_items(&self, limit: usize) -> Vec<TopItem> {
        let mut tally: Vec<TopItem> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for order in self.orders() {
            for line in order.items {
                match index.get(&line.id) {
                    Some(&at) => tally[at].count += line.quantity,
                    None => {
                        index.insert(line.id.clone(), tally.len());
                        tally.push(TopItem {
                            id: line.id,
                            name: line.name,
                            count: line.quantity,
                        });
                    }
                }
            }
        }

        tally.sort_by(|a, b| b.count.cmp(&a.count));
        tally.truncate(limit);
        tally
    }

    /// The `limit` newest orders, newest first
    pub fn recent_orders(&self, limit: usize) -> Vec<OrderRecord> {
        let mut orders = self.orders();
        orders.sort_by(|a, b| b.date.cmp(&a.date));
        orders.truncate(limit);
        orders
    }

    /// The `limit` newest reservations by reserved date, newest first
    pub fn recent_reservations(&self, limit: usize) -> Vec<ReservationRecord> {
        let mut reservations = self.reservations();
        reservations.sort_by(|a, b| b.date.cmp(&a.date));
        reservations.truncate(limit);
        reservations
    }

    /// Per-day activity over the trailing `days` window ending today
    pub fn activity_by_day(&self, days: u64) -> Vec<DayActivity> {
        self.activity_by_day_at(days, Utc::now().date_naive())
    }

    /// `activity_by_day` with an explicit window end
    pub fn activity_by_day_at(&self, days: u64, today: NaiveDate) -> Vec<DayActivity> {
        let mut window: Vec<DayActivity> = (0..days)
            .rev()
            .filter_map(|back| today.checked_sub_days(Days::new(back)))
            .map(|date| DayActivity {
                date,
                label: date.weekday().to_string(),
                orders: 0,
                reservations: 0,
            })
            .collect();

        let index: HashMap<NaiveDate, usize> = window
            .iter()
            .enumerate()
            .map(|(at, day)| (day.date, at))
            .collect();

        for order in self.orders() {
            if let Some(&at) = index.get(&order.date.date_naive()) {
                window[at].orders += 1;
            }
        }
        for reservation in self.reservations() {
            if let Some(&at) = index.get(&reservation.date) {
                window[at].reservations += 1;
            }
        }

        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::{DateTime, Utc};
    use shared::{CartLine, Fulfillment};

    fn order(date: &str, lines: &[(&str, &str, u32, u32)]) -> OrderRecord {
        let items: Vec<CartLine> = lines
            .iter()
            .map(|&(id, name, price, quantity)| CartLine {
                id: id.to_string(),
                name: name.to_string(),
                price: Decimal::from(price),
                image: None,
                quantity,
            })
            .collect();
        let total_price = items.iter().map(CartLine::line_total).sum();

        OrderRecord {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "0123456789".to_string(),
            address: "12 Analytical Way".to_string(),
            message: None,
            fulfillment: Fulfillment::Delivery,
            items,
            total_price,
            date: date.parse::<DateTime<Utc>>().unwrap(),
        }
    }

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        let orders = vec![
            order("2025-06-01T12:00:00Z", &[("f1", "Truffle Arancini", 12, 2)]),
            order(
                "2025-06-02T19:00:00Z",
                &[
                    ("f1", "Truffle Arancini", 12, 1),
                    ("f6", "Aged Ribeye Steak", 42, 1),
                ],
            ),
            order("2025-06-03T18:30:00Z", &[("d2", "Crème Brûlée", 10, 3)]),
        ];
        store.write(ORDERS_KEY, &orders).unwrap();

        let reservations = vec![ReservationRecord {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: "0123456789".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            time: "7:00 PM".to_string(),
            guests: 4,
            special_requests: None,
            preorder_items: None,
            table_id: None,
        }];
        store.write(RESERVATIONS_KEY, &reservations).unwrap();
        store
    }

    #[test]
    fn metrics_sum_revenue_and_average() {
        let dashboard = Dashboard::new(seeded_store());
        let metrics = dashboard.metrics();

        // 24 + 54 + 30
        assert_eq!(metrics.total_orders, 3);
        assert_eq!(metrics.total_reservations, 1);
        assert_eq!(metrics.revenue, Decimal::from(108));
        assert_eq!(metrics.average_order_value, Decimal::from(36));
    }

    #[test]
    fn metrics_on_empty_store_are_zero() {
        let dashboard = Dashboard::new(MemoryStore::new());
        let metrics = dashboard.metrics();

        assert_eq!(metrics.total_orders, 0);
        assert_eq!(metrics.revenue, Decimal::ZERO);
        assert_eq!(metrics.average_order_value, Decimal::ZERO);
    }

    #[test]
    fn top_items_rank_by_total_quantity() {
        let dashboard = Dashboard::new(seeded_store());
        let top = dashboard.top_items(2);

        // f1 and d2 both total 3; the stable sort keeps first-seen f1 ahead
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, "f1");
        assert_eq!(top[0].count, 3);
        assert_eq!(top[0].name, "Truffle Arancini");
        assert_eq!(top[1].id, "d2");
        assert_eq!(top[1].count, 3);
    }

    #[test]
    fn recent_orders_are_newest_first() {
        let dashboard = Dashboard::new(seeded_store());
        let recent = dashboard.recent_orders(2);

        assert_eq!(recent.len(), 2);
        assert!(recent[0].date > recent[1].date);
    }

    #[test]
    fn activity_window_is_zero_filled_and_bucketed() {
        let dashboard = Dashboard::new(seeded_store());
        let today = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
        let window = dashboard.activity_by_day_at(7, today);

        assert_eq!(window.len(), 7);
        assert_eq!(window[6].date, today);
        assert_eq!(window[6].orders, 0);

        // 2025-06-02 had one order and one reservation
        let day = window
            .iter()
            .find(|d| d.date == NaiveDate::from_ymd_opt(2025, 6, 2).unwrap())
            .unwrap();
        assert_eq!(day.orders, 1);
        assert_eq!(day.reservations, 1);

        // Orders outside the window are not counted
        let counted: u32 = window.iter().map(|d| d.orders).sum();
        assert_eq!(counted, 3);
    }
}
