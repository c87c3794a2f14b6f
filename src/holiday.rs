use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::Result;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayType {
    NationalHoliday,
    Observance,
    /// The remote API reports more types than the picker distinguishes;
    /// they neither block selection nor carry a label.
    #[serde(other)]
    Other,
}

/// One entry of the holiday list as delivered by the fetch collaborator.
/// `date` is in the canonical "YYYY-MM-DD" form.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct HolidayRecord {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: HolidayType,
    pub name: String,
}

pub fn parse_holidays(json: &str) -> Result<Vec<HolidayRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Exact-date lookup over one year's holiday list. Rebuilt whenever the
/// viewed year's list changes; the first record for a date wins.
#[derive(Debug, Default)]
pub struct HolidayIndex {
    national: HashSet<String>,
    observances: HashMap<String, String>,
}

impl HolidayIndex {
    pub fn from_records(records: &[HolidayRecord]) -> Self {
        let mut index = HolidayIndex::default();

        for record in records {
            match record.kind {
                HolidayType::NationalHoliday => {
                    index.national.insert(record.date.clone());
                }
                HolidayType::Observance => {
                    index
                        .observances
                        .entry(record.date.clone())
                        .or_insert_with(|| record.name.clone());
                }
                HolidayType::Other => {}
            }
        }

        log::debug!("holiday index rebuilt from {} records", records.len());
        index
    }

    pub fn is_national_holiday(&self, date: &str) -> bool {
        self.national.contains(date)
    }

    pub fn observance_name(&self, date: &str) -> Option<&str> {
        self.observances.get(date).map(String::as_str)
    }
}

/// Deterministic stand-in list used whenever the remote fetch fails, so
/// validity and observance behavior stay exercisable offline.
pub fn fallback_holidays() -> &'static [HolidayRecord] {
    static FALLBACK: Lazy<Vec<HolidayRecord>> = Lazy::new(|| {
        const ENTRIES: &[(&str, HolidayType, &str)] = &[
            ("2024-01-01", HolidayType::NationalHoliday, "New Year's Day"),
            ("2024-01-06", HolidayType::NationalHoliday, "Epiphany"),
            ("2024-02-14", HolidayType::Observance, "Valentine's Day"),
            ("2024-03-31", HolidayType::NationalHoliday, "Easter Sunday"),
            ("2024-04-01", HolidayType::NationalHoliday, "Easter Monday"),
            ("2024-05-01", HolidayType::NationalHoliday, "Labour Day"),
            ("2024-05-03", HolidayType::NationalHoliday, "Constitution Day"),
            ("2024-05-19", HolidayType::NationalHoliday, "Pentecost"),
            ("2024-05-26", HolidayType::Observance, "Mother's Day"),
            ("2024-05-30", HolidayType::NationalHoliday, "Corpus Christi"),
            (
                "2024-08-15",
                HolidayType::NationalHoliday,
                "Assumption of Mary",
            ),
            ("2024-11-01", HolidayType::NationalHoliday, "All Saints' Day"),
            (
                "2024-11-11",
                HolidayType::NationalHoliday,
                "Independence Day",
            ),
            ("2024-12-24", HolidayType::Observance, "Christmas Eve"),
            ("2024-12-25", HolidayType::NationalHoliday, "Christmas Day"),
            (
                "2024-12-26",
                HolidayType::NationalHoliday,
                "Second Day of Christmas",
            ),
        ];

        ENTRIES
            .iter()
            .map(|(date, kind, name)| HolidayRecord {
                date: (*date).to_owned(),
                kind: *kind,
                name: (*name).to_owned(),
            })
            .collect()
    });

    &FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_payload() {
        let json = r#"[
            {"country": "Poland", "iso": "PL", "year": 2024,
             "date": "2024-05-01", "day": "Wednesday",
             "name": "Labour Day", "type": "NATIONAL_HOLIDAY"},
            {"country": "Poland", "iso": "PL", "year": 2024,
             "date": "2024-05-26", "day": "Sunday",
             "name": "Mother's Day", "type": "OBSERVANCE"},
            {"country": "Poland", "iso": "PL", "year": 2024,
             "date": "2024-03-29", "day": "Friday",
             "name": "Good Friday", "type": "CLOCK_CHANGE_SEASON"}
        ]"#;

        let records = parse_holidays(json).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].kind, HolidayType::NationalHoliday);
        assert_eq!(records[1].kind, HolidayType::Observance);
        assert_eq!(records[2].kind, HolidayType::Other);
    }

    #[test]
    fn index_lookups_filter_by_type() {
        let index = HolidayIndex::from_records(fallback_holidays());

        assert!(index.is_national_holiday("2024-05-01"));
        assert!(!index.is_national_holiday("2024-05-26"));
        assert_eq!(index.observance_name("2024-05-26"), Some("Mother's Day"));
        assert_eq!(index.observance_name("2024-05-01"), None);
        assert_eq!(index.observance_name("2024-07-04"), None);
    }

    #[test]
    fn first_record_for_a_date_wins() {
        let records = vec![
            HolidayRecord {
                date: "2024-04-10".to_owned(),
                kind: HolidayType::Observance,
                name: "Example Day".to_owned(),
            },
            HolidayRecord {
                date: "2024-04-10".to_owned(),
                kind: HolidayType::Observance,
                name: "Shadowed Day".to_owned(),
            },
        ];

        let index = HolidayIndex::from_records(&records);

        assert_eq!(index.observance_name("2024-04-10"), Some("Example Day"));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(parse_holidays("{\"not\": \"a list\"}").is_err());
    }
}
