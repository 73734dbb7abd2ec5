use clap::Parser;

/// Flight duration and price statistics for one origin/destination city pair.
#[derive(Parser, Debug)]
#[clap()]
pub struct Query {
    /// Path to the ticket dataset
    #[clap(name = "source")]
    pub source: Option<String>,

    /// Origin city name (only takes effect together with destination)
    #[clap(name = "origin")]
    pub origin: Option<String>,

    /// Destination city name
    #[clap(name = "destination")]
    pub destination: Option<String>,

    /// Report the single best flight time instead of one per carrier
    #[clap(long)]
    pub overall: bool,
}

impl Query {
    pub fn source_file<'a>(&'a self, config: &'a Config) -> &'a str {
        self.source.as_deref().unwrap_or(&config.source_file)
    }

    /// The requested city pair. The pair is only overridden when both names
    /// were given; a lone origin argument falls back to the configured pair.
    pub fn route<'a>(&'a self, config: &'a Config) -> (&'a str, &'a str) {
        match (self.origin.as_deref(), self.destination.as_deref()) {
            (Some(origin), Some(destination)) => (origin, destination),
            _ => (&config.origin_name, &config.destination_name),
        }
    }
}

/// Fallback values for everything the command line leaves out.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_file: String,
    pub origin_name: String,
    pub destination_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_file: "tickets.json".into(),
            origin_name: "Владивосток".into(),
            destination_name: "Тель-Авив".into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn query(args: &[&str]) -> Query {
        Query::try_parse_from([&["air-carriers"][..], args].concat()).unwrap()
    }

    #[test]
    fn no_args_use_configured_defaults() {
        let query = query(&[]);
        let config = Config::default();

        assert_eq!(query.source_file(&config), "tickets.json");
        assert_eq!(query.route(&config), ("Владивосток", "Тель-Авив"));
        assert!(!query.overall);
    }

    #[test]
    fn single_arg_overrides_source_only() {
        let query = query(&["data.json"]);
        let config = Config::default();

        assert_eq!(query.source_file(&config), "data.json");
        assert_eq!(query.route(&config), ("Владивосток", "Тель-Авив"));
    }

    #[test]
    fn lone_origin_is_ignored() {
        let query = query(&["data.json", "Москва"]);
        let config = Config::default();

        assert_eq!(query.source_file(&config), "data.json");
        assert_eq!(query.route(&config), ("Владивосток", "Тель-Авив"));
    }

    #[test]
    fn three_args_override_everything() {
        let query = query(&["data.json", "Москва", "Сочи"]);
        let config = Config::default();

        assert_eq!(query.source_file(&config), "data.json");
        assert_eq!(query.route(&config), ("Москва", "Сочи"));
    }

    #[test]
    fn overall_flag() {
        assert!(query(&["--overall"]).overall);
    }
}
