//! serde adapters for the dataset's `dd.MM.yy` date and `H:mm` time fields.

pub mod date {
    use chrono::NaiveDate;
    use serde::de::{self, Deserialize, Deserializer};

    pub const PATTERN: &str = "%d.%m.%y";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        NaiveDate::parse_from_str(&raw, PATTERN).map_err(|error| {
            de::Error::custom(format!("parse date `{raw}` fail with error `{error}`"))
        })
    }
}

pub mod time {
    use chrono::NaiveTime;
    use serde::de::{self, Deserialize, Deserializer};

    // %H accepts one or two digits, so "9:40" parses like "09:40"
    pub const PATTERN: &str = "%H:%M";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        NaiveTime::parse_from_str(&raw, PATTERN).map_err(|error| {
            de::Error::custom(format!("parse time `{raw}` fail with error `{error}`"))
        })
    }
}
