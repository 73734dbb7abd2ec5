use std::fs::File;
use std::io::BufReader;

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};
use itertools::Itertools;
use serde::Deserialize;
use thiserror::Error;

pub mod format;
pub mod stats;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unable to find file: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid file format. File name: {path}")]
    MalformedInput {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The full ticket dataset, in file order.
#[derive(Debug, Clone, Deserialize)]
pub struct Tickets {
    pub tickets: Vec<Ticket>,
}

impl Tickets {
    pub fn load(path: &str) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::FileNotFound {
            path: path.to_string(),
            source,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            LoadError::MalformedInput {
                path: path.to_string(),
                source,
            }
        })
    }

    /// Tickets whose origin and destination city names both equal the
    /// requested ones. Exact string equality, original order preserved.
    pub fn matching(&self, origin_name: &str, destination_name: &str) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|ticket| {
                ticket.origin_name == origin_name && ticket.destination_name == destination_name
            })
            .collect_vec()
    }
}

/// One flight offer: route, schedule, carrier, price.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    pub origin: String,
    pub origin_name: String,
    pub destination: String,
    pub destination_name: String,
    #[serde(with = "format::date")]
    pub departure_date: NaiveDate,
    #[serde(with = "format::time")]
    pub departure_time: NaiveTime,
    #[serde(with = "format::date")]
    pub arrival_date: NaiveDate,
    #[serde(with = "format::time")]
    pub arrival_time: NaiveTime,
    pub carrier: String,
    pub stops: Option<u32>,
    pub price: i64,
}

impl Ticket {
    /// Elapsed time between departure and arrival. The dataset carries no
    /// timezone, so both endpoints are resolved in the machine-local zone;
    /// across a DST transition the result is environment-dependent. Signed:
    /// an arrival before its departure yields a negative duration.
    pub fn flight_time(&self) -> Duration {
        let departure = local_instant(self.departure_date, self.departure_time);
        let arrival = local_instant(self.arrival_date, self.arrival_time);

        arrival - departure
    }
}

fn local_instant(date: NaiveDate, time: NaiveTime) -> DateTime<Local> {
    let naive = date.and_time(time);

    match naive.and_local_timezone(Local) {
        LocalResult::Single(instant) => instant,
        // repeated wall-clock hour: take the earlier offset
        LocalResult::Ambiguous(earlier, _) => earlier,
        // wall-clock time inside a DST gap: shift forward past the gap and
        // keep the later local time, as java.time resolves it
        LocalResult::None => match (naive + Duration::hours(1)).and_local_timezone(Local) {
            LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => instant,
            LocalResult::None => Local.from_utc_datetime(&naive),
        },
    }
}
