//! stdout report for the duration and price statistics.

use chrono::Duration;
use itertools::Itertools;
use thiserror::Error;

use crate::model::{stats, Ticket};

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Unable to find flight from {origin_name} to {destination_name}")]
    NoFlightFound {
        origin_name: String,
        destination_name: String,
    },

    #[error("Unable to find price for the right flight")]
    NoPriceFound,
}

/// Default mode: one minimum flight time per carrier, then the price
/// statistics and the average/median difference.
pub fn grouped(
    matching: &[&Ticket],
    origin_name: &str,
    destination_name: &str,
) -> Result<(), RouteError> {
    let min_time = stats::min_duration_by_carrier(matching);
    if min_time.is_empty() {
        return Err(no_flight(origin_name, destination_name));
    }

    println!("Minimal time: ");
    for (carrier, duration) in min_time.iter().sorted() {
        println!("{carrier}: {}", format_duration(*duration));
    }

    let prices = stats::sorted_prices(matching);
    if prices.is_empty() {
        return Err(RouteError::NoPriceFound);
    }

    let average = stats::average(&prices);
    println!("Average price: {}", format_price(average));

    let median = stats::median(&prices);
    println!("Median price: {}", format_price(median));

    println!(
        "The difference between the average price and the median: {}",
        format_price((average - median).abs())
    );

    Ok(())
}

/// `--overall` mode: the single best flight time regardless of carrier, then
/// the price statistics.
pub fn overall(
    matching: &[&Ticket],
    origin_name: &str,
    destination_name: &str,
) -> Result<(), RouteError> {
    match stats::min_duration_overall(matching) {
        Some(duration) => println!("Minimal time: {}", format_duration(duration)),
        None => return Err(no_flight(origin_name, destination_name)),
    }

    let prices = stats::sorted_prices(matching);
    if prices.is_empty() {
        return Err(RouteError::NoPriceFound);
    }

    println!("Average price: {}", format_price(stats::average(&prices)));
    println!("Median price: {}", format_price(stats::median(&prices)));

    Ok(())
}

fn no_flight(origin_name: &str, destination_name: &str) -> RouteError {
    RouteError::NoFlightFound {
        origin_name: origin_name.to_string(),
        destination_name: destination_name.to_string(),
    }
}

// whole values keep a decimal point, so "200.0" rather than "200"
fn format_price(price: f64) -> String {
    format!("{price:?}")
}

/// `H hours, M minutes, S seconds`, no zero-padding. Minutes and seconds are
/// remainders after the larger unit; a negative duration keeps its sign on
/// every component.
pub fn format_duration(duration: Duration) -> String {
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() - hours * 60;
    let seconds = duration.num_seconds() - duration.num_minutes() * 60;

    format!("{hours} hours, {minutes} minutes, {seconds} seconds")
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::model::case;

    #[test]
    fn formats_duration_components_without_padding() {
        let duration = Duration::hours(9) + Duration::minutes(5) + Duration::seconds(3);

        assert_eq!(format_duration(duration), "9 hours, 5 minutes, 3 seconds");
    }

    #[test]
    fn formats_a_zero_duration() {
        assert_eq!(
            format_duration(Duration::zero()),
            "0 hours, 0 minutes, 0 seconds"
        );
    }

    #[test]
    fn formats_a_negative_duration() {
        assert_eq!(
            format_duration(Duration::minutes(-90)),
            "-1 hours, -30 minutes, 0 seconds"
        );
    }

    #[test]
    fn formats_a_multi_day_duration_as_hours() {
        assert_eq!(
            format_duration(Duration::hours(26) + Duration::seconds(59)),
            "26 hours, 0 minutes, 59 seconds"
        );
    }

    #[test]
    fn prices_print_with_a_decimal_point() {
        assert_eq!(format_price(200.0), "200.0");
        assert_eq!(format_price(12.5), "12.5");
    }

    #[test]
    fn grouped_report_fails_without_a_matching_flight() {
        let error = grouped(&[], "A", "B").unwrap_err();

        assert_eq!(error.to_string(), "Unable to find flight from A to B");
    }

    #[test]
    fn overall_report_fails_without_a_matching_flight() {
        let error = overall(&[], "A", "B").unwrap_err();

        assert!(matches!(error, RouteError::NoFlightFound { .. }));
    }

    #[test]
    fn reports_succeed_on_a_matching_set() {
        let tickets = case::one_way_pair();
        let matching = tickets.matching("A", "B");

        assert!(grouped(&matching, "A", "B").is_ok());
        assert!(overall(&matching, "A", "B").is_ok());
    }
}
