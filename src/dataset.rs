use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TyphoonRecord {
    pub name: String,
    pub year: u16,
    pub latitude: f64,
    pub longitude: f64,
    /// Sustained wind speed in km/h.
    pub wind_speed: u32,
    /// Central pressure in hPa.
    pub pressure: u32,
    pub category: String,
    pub region: String,
    pub damage_estimate_usd: u64,
    pub fatalities: u32,
    pub description: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("typhoon '{0}' is defined more than once")]
    DuplicateName(String),
    #[error("typhoon '{name}' has latitude {latitude} outside [-90, 90]")]
    LatitudeOutOfRange { name: String, latitude: f64 },
    #[error("typhoon '{name}' has longitude {longitude} outside [-180, 180]")]
    LongitudeOutOfRange { name: String, longitude: f64 },
    #[error("typhoon '{0}' must have a positive wind speed")]
    ZeroWindSpeed(String),
}

/// Ordered, read-only table of typhoon records.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<TyphoonRecord>,
}

impl Dataset {
    pub fn new(records: Vec<TyphoonRecord>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                return Err(DatasetError::DuplicateName(record.name.clone()));
            }
            if !(-90.0..=90.0).contains(&record.latitude) {
                return Err(DatasetError::LatitudeOutOfRange {
                    name: record.name.clone(),
                    latitude: record.latitude,
                });
            }
            if !(-180.0..=180.0).contains(&record.longitude) {
                return Err(DatasetError::LongitudeOutOfRange {
                    name: record.name.clone(),
                    longitude: record.longitude,
                });
            }
            if record.wind_speed == 0 {
                return Err(DatasetError::ZeroWindSpeed(record.name.clone()));
            }
        }
        Ok(Self { records })
    }

    /// The embedded reference table of twelve typhoons from the last two decades.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::new(builtin_records())
    }

    pub fn records(&self) -> &[TyphoonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&TyphoonRecord> {
        self.records.first()
    }

    pub fn get(&self, name: &str) -> Option<&TyphoonRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn filter_by_name(&self, name: &str) -> Vec<&TyphoonRecord> {
        self.records
            .iter()
            .filter(|record| record.name == name)
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name.as_str())
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    name: &str,
    year: u16,
    latitude: f64,
    longitude: f64,
    wind_speed: u32,
    pressure: u32,
    category: &str,
    region: &str,
    damage_estimate_usd: u64,
    fatalities: u32,
    description: &str,
) -> TyphoonRecord {
    TyphoonRecord {
        name: name.to_string(),
        year,
        latitude,
        longitude,
        wind_speed,
        pressure,
        category: category.to_string(),
        region: region.to_string(),
        damage_estimate_usd,
        fatalities,
        description: description.to_string(),
    }
}

fn builtin_records() -> Vec<TyphoonRecord> {
    vec![
        record(
            "Typhoon Haiyan",
            2013,
            11.2426,
            125.0324,
            195,
            895,
            "Super Typhoon",
            "Philippines",
            14_000_000_000,
            6300,
            "One of the most powerful tropical cyclones ever recorded, causing catastrophic damage in the Philippines.",
        ),
        record(
            "Typhoon Mangkhut",
            2018,
            20.1939,
            121.5450,
            165,
            905,
            "Super Typhoon",
            "Philippines/China",
            4_000_000_000,
            200,
            "A powerful typhoon that caused significant damage across the Philippines and Southern China.",
        ),
        record(
            "Typhoon Melor",
            2015,
            13.6929,
            125.0324,
            140,
            925,
            "Typhoon",
            "Philippines",
            250_000_000,
            45,
            "A typhoon that impacted the Philippines, causing moderate damage and loss of life.",
        ),
        record(
            "Typhoon Hagibis",
            2019,
            35.6762,
            139.6503,
            160,
            915,
            "Super Typhoon",
            "Japan",
            15_000_000_000,
            86,
            "A devastating typhoon that caused extensive damage and flooding in Japan.",
        ),
        record(
            "Typhoon Meranti",
            2016,
            21.9314,
            120.6354,
            190,
            890,
            "Super Typhoon",
            "Taiwan",
            1_500_000_000,
            64,
            "An extremely powerful typhoon that impacted Taiwan with intense winds.",
        ),
        record(
            "Typhoon Jebi",
            2018,
            34.4333,
            135.3333,
            155,
            910,
            "Super Typhoon",
            "Japan",
            12_000_000_000,
            17,
            "A destructive typhoon that caused significant damage in the Kansai region of Japan.",
        ),
        record(
            "Typhoon Yutu",
            2018,
            15.2267,
            146.1029,
            180,
            900,
            "Super Typhoon",
            "Northern Mariana Islands",
            600_000_000,
            4,
            "A powerful typhoon that devastated the Northern Mariana Islands.",
        ),
        record(
            "Typhoon Lan",
            2017,
            33.0121,
            138.9719,
            155,
            910,
            "Super Typhoon",
            "Japan",
            3_000_000_000,
            23,
            "A significant typhoon that impacted Japan with strong winds and heavy rainfall.",
        ),
        record(
            "Typhoon Goni",
            2020,
            13.6594,
            123.8650,
            165,
            905,
            "Super Typhoon",
            "Philippines",
            1_200_000_000,
            25,
            "A powerful typhoon that caused significant destruction in the Philippines.",
        ),
        record(
            "Typhoon Amphan",
            2020,
            20.2938,
            88.5431,
            165,
            905,
            "Super Typhoon",
            "India/Bangladesh",
            13_000_000_000,
            128,
            "A catastrophic cyclone that caused extensive damage in India and Bangladesh.",
        ),
        record(
            "Typhoon Soudelor",
            2015,
            20.7535,
            126.8785,
            180,
            890,
            "Super Typhoon",
            "Taiwan/China",
            3_500_000_000,
            56,
            "A powerful typhoon that impacted Taiwan and Eastern China.",
        ),
        record(
            "Typhoon Talim",
            2016,
            24.2577,
            122.9927,
            150,
            920,
            "Typhoon",
            "Japan",
            500_000_000,
            7,
            "A typhoon that caused moderate damage in southern Japan.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> TyphoonRecord {
        record(
            name, 2000, 10.0, 120.0, 100, 950, "Typhoon", "Nowhere", 0, 0, "test",
        )
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Dataset::new(vec![sample("A"), sample("A")]).unwrap_err();
        assert_eq!(err, DatasetError::DuplicateName("A".into()));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let mut bad_lat = sample("A");
        bad_lat.latitude = 91.0;
        assert!(matches!(
            Dataset::new(vec![bad_lat]),
            Err(DatasetError::LatitudeOutOfRange { .. })
        ));

        let mut bad_lon = sample("B");
        bad_lon.longitude = -180.5;
        assert!(matches!(
            Dataset::new(vec![bad_lon]),
            Err(DatasetError::LongitudeOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_calm_records() {
        let mut calm = sample("Calm");
        calm.wind_speed = 0;
        assert_eq!(
            Dataset::new(vec![calm]).unwrap_err(),
            DatasetError::ZeroWindSpeed("Calm".into())
        );
    }

    #[test]
    fn builtin_keeps_reference_order() {
        let dataset = Dataset::builtin().unwrap();
        assert_eq!(dataset.len(), 12);
        assert_eq!(dataset.first().unwrap().name, "Typhoon Haiyan");
        assert_eq!(dataset.names().last(), Some("Typhoon Talim"));
    }
}
