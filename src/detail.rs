use serde::Serialize;

use crate::dataset::TyphoonRecord;

/// Inserts `,` between every group of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_usd(value: u64) -> String {
    format!("${}", group_thousands(value))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Text view of a single selected typhoon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPanel {
    pub heading: String,
    pub year: String,
    pub category: String,
    pub wind_speed: String,
    pub pressure: String,
    pub region: String,
    pub damage_estimate: String,
    pub fatalities: String,
    pub description: String,
}

impl DetailPanel {
    pub fn from_record(record: &TyphoonRecord) -> Self {
        Self {
            heading: format!("{} Details", record.name),
            year: record.year.to_string(),
            category: record.category.clone(),
            wind_speed: format!("{} km/h", record.wind_speed),
            pressure: format!("{} hPa", record.pressure),
            region: record.region.clone(),
            damage_estimate: format_usd(record.damage_estimate_usd),
            fatalities: record.fatalities.to_string(),
            description: record.description.clone(),
        }
    }

    /// Labelled attributes in display order, without the description.
    pub fn fields(&self) -> Vec<DetailField> {
        [
            ("Year", &self.year),
            ("Category", &self.category),
            ("Wind Speed", &self.wind_speed),
            ("Pressure", &self.pressure),
            ("Region", &self.region),
            ("Damage Estimate", &self.damage_estimate),
            ("Fatalities", &self.fatalities),
        ]
        .into_iter()
        .map(|(label, value)| DetailField {
            label,
            value: value.clone(),
        })
        .collect()
    }
}
