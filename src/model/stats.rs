//! Aggregations over a matching ticket set.

use std::collections::HashMap;

use chrono::Duration;
use itertools::Itertools;

use super::Ticket;

/// Minimum flight time per carrier. Empty input gives an empty map.
pub fn min_duration_by_carrier(tickets: &[&Ticket]) -> HashMap<String, Duration> {
    tickets
        .iter()
        .map(|ticket| (ticket.carrier.clone(), ticket.flight_time()))
        .into_grouping_map()
        .min()
}

/// Minimum flight time across all carriers, `None` on empty input.
pub fn min_duration_overall(tickets: &[&Ticket]) -> Option<Duration> {
    tickets.iter().map(|ticket| ticket.flight_time()).min()
}

/// Ticket prices in ascending order, duplicates retained.
pub fn sorted_prices(tickets: &[&Ticket]) -> Vec<i64> {
    tickets
        .iter()
        .map(|ticket| ticket.price)
        .sorted()
        .collect_vec()
}

/// Arithmetic mean with integer (truncating) division: `average(&[100, 200,
/// 201])` is `167.0`, never a fraction. Callers must reject an empty price
/// list first.
pub fn average(prices: &[i64]) -> f64 {
    let sum: i64 = prices.iter().sum();

    (sum / prices.len() as i64) as f64
}

/// Median of an ascending price list: the middle element for odd lengths; for
/// even lengths, the mean of the elements at `n / 2` and `n / 2 - 1`. Callers
/// must reject an empty price list first.
pub fn median(prices: &[i64]) -> f64 {
    let middle = prices.len() / 2;

    if prices.len() % 2 == 0 {
        (prices[middle] as f64 + prices[middle - 1] as f64) / 2.0
    } else {
        prices[middle] as f64
    }
}
