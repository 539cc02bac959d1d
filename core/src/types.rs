//! Domain DTOs for the campaigns API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! Draft-only states (an unset day or time) are `Option::None` in Rust and
//! travel as empty strings on the wire, which is what the server receives
//! from a form that was submitted before every field was picked.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Wire format for schedule times.
pub const TIME_FORMAT: &str = "%H:%M";

/// Wire format for campaign dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Day of a weekly schedule.
///
/// The day picker only offers the seven named variants, but a value the
/// server already holds under any other spelling is kept verbatim in `Other`
/// so that one odd record never rejects a whole list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    Other(String),
}

impl DayOfWeek {
    /// Every day in the order the day picker offers them.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Other(other) => other,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DayOfWeek {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(day) => day,
            Err(_) => DayOfWeek::Other(value),
        }
    }
}

/// Returned when a string is not one of the seven offered day names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day of week: {0:?}")]
pub struct UnknownDayOfWeek(pub String);

impl FromStr for DayOfWeek {
    type Err = UnknownDayOfWeek;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| UnknownDayOfWeek(s.to_string()))
    }
}

/// A recurring weekly time window. All fields may be unset while drafting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default, with = "day_text")]
    pub day_of_week: Option<DayOfWeek>,
    #[serde(default, with = "time_text")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "time_text")]
    pub end_time: Option<NaiveTime>,
}

impl Schedule {
    pub fn new(day_of_week: DayOfWeek, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            day_of_week: Some(day_of_week),
            start_time: Some(start_time),
            end_time: Some(end_time),
        }
    }

    /// True when the day and both times are set.
    pub fn is_complete(&self) -> bool {
        self.day_of_week.is_some() && self.start_time.is_some() && self.end_time.is_some()
    }
}

/// Promotion type of a campaign.
///
/// The editing surface only offers the three named variants, but values the
/// server already holds are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CampaignType {
    CostPerOrder,
    CostPerClick,
    BuyOneGetOne,
    Other(String),
}

impl CampaignType {
    /// The values offered by the type picker, in display order.
    pub const OPTIONS: [CampaignType; 3] = [
        CampaignType::CostPerOrder,
        CampaignType::CostPerClick,
        CampaignType::BuyOneGetOne,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            CampaignType::CostPerOrder => "Cost per Order",
            CampaignType::CostPerClick => "Cost per Click",
            CampaignType::BuyOneGetOne => "Buy One Get One",
            CampaignType::Other(other) => other,
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CampaignType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Cost per Order" => CampaignType::CostPerOrder,
            "Cost per Click" => CampaignType::CostPerClick,
            "Buy One Get One" => CampaignType::BuyOneGetOne,
            _ => CampaignType::Other(value),
        }
    }
}

impl From<&str> for CampaignType {
    fn from(value: &str) -> Self {
        CampaignType::from(value.to_string())
    }
}

impl From<CampaignType> for String {
    fn from(value: CampaignType) -> Self {
        match value {
            CampaignType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

/// A campaign as stored by the API. `id` is absent until the server assigns
/// one and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    #[serde(with = "iso_date")]
    pub start_date: NaiveDate,
    #[serde(with = "iso_date")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

/// Body of `GET /campaigns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignListResponse {
    pub campaigns: Vec<Campaign>,
}

/// Body the server attaches to a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

mod day_text {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DayOfWeek;

    pub fn serialize<S: Serializer>(day: &Option<DayOfWeek>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(day.as_ref().map(DayOfWeek::as_str).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DayOfWeek>, D::Error> {
        let raw = Option::<String>::deserialize(d)?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(None);
        }
        Ok(Some(DayOfWeek::from(raw)))
    }
}

mod time_text {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => s.collect_str(&t.format(TIME_FORMAT)),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(d)?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(None);
        }
        // Seconds are accepted but not kept: times go back out as `HH:MM`,
        // the precision the editor works in.
        NaiveTime::parse_from_str(&raw, TIME_FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid time {raw:?}: {e}")))
    }
}

/// Plain `yyyy-MM-dd` dates. Older records were written as full ISO
/// timestamps, so only the leading date part is read back.
mod iso_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        let date_part = raw.get(..10).unwrap_or(&raw);
        NaiveDate::parse_from_str(date_part, DATE_FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid date {raw:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn campaign_serializes_to_wire_shape() {
        let campaign = Campaign {
            id: None,
            campaign_type: CampaignType::CostPerClick,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            schedules: vec![Schedule::new(DayOfWeek::Monday, hm(9, 0), hm(17, 0))],
        };
        let json = serde_json::to_value(&campaign).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "Cost per Click",
                "startDate": "2024-03-01",
                "endDate": "2024-03-31",
                "schedules": [{"dayOfWeek": "Monday", "startTime": "09:00", "endTime": "17:00"}]
            })
        );
    }

    #[test]
    fn id_is_serialized_when_present() {
        let campaign = Campaign {
            id: Some(7),
            campaign_type: CampaignType::BuyOneGetOne,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            schedules: Vec::new(),
        };
        let json = serde_json::to_value(&campaign).unwrap();
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn empty_schedule_fields_travel_as_empty_strings() {
        let json = serde_json::to_value(Schedule::default()).unwrap();
        assert_eq!(json, serde_json::json!({"dayOfWeek": "", "startTime": "", "endTime": ""}));

        let back: Schedule = serde_json::from_value(json).unwrap();
        assert_eq!(back, Schedule::default());
    }

    #[test]
    fn schedule_accepts_seconds_and_null() {
        let schedule: Schedule = serde_json::from_str(
            r#"{"dayOfWeek":"Friday","startTime":"08:30:00","endTime":null}"#,
        )
        .unwrap();
        assert_eq!(schedule.day_of_week, Some(DayOfWeek::Friday));
        assert_eq!(schedule.start_time, Some(hm(8, 30)));
        assert_eq!(schedule.end_time, None);
        assert!(!schedule.is_complete());
    }

    #[test]
    fn unknown_day_is_preserved() {
        let schedule: Schedule = serde_json::from_str(
            r#"{"dayOfWeek":"monday","startTime":"09:00","endTime":"10:00"}"#,
        )
        .unwrap();
        assert_eq!(schedule.day_of_week, Some(DayOfWeek::Other("monday".to_string())));
        assert!(schedule.is_complete());
        assert_eq!(serde_json::to_value(&schedule).unwrap()["dayOfWeek"], "monday");
    }

    #[test]
    fn seconds_are_dropped_on_the_way_back_out() {
        let schedule: Schedule = serde_json::from_str(
            r#"{"dayOfWeek":"Monday","startTime":"08:30:45","endTime":"09:00"}"#,
        )
        .unwrap();
        assert_eq!(serde_json::to_value(&schedule).unwrap()["startTime"], "08:30");
    }

    #[test]
    fn unknown_campaign_type_is_preserved() {
        let campaign: Campaign = serde_json::from_str(
            r#"{"id":1,"type":"Flash Sale","startDate":"2024-01-01","endDate":"2024-01-02","schedules":[]}"#,
        )
        .unwrap();
        assert_eq!(campaign.campaign_type, CampaignType::Other("Flash Sale".to_string()));
        assert_eq!(serde_json::to_value(&campaign).unwrap()["type"], "Flash Sale");
    }

    #[test]
    fn timestamp_dates_are_read_as_dates() {
        let campaign: Campaign = serde_json::from_str(
            r#"{"type":"Cost per Order","startDate":"2024-01-15T00:00:00.000Z","endDate":"2024-02-01"}"#,
        )
        .unwrap();
        assert_eq!(campaign.start_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(campaign.schedules.is_empty());
    }

    #[test]
    fn day_of_week_parses_capitalized_names_only() {
        assert_eq!("Sunday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
        assert!("sunday".parse::<DayOfWeek>().is_err());
        assert_eq!(
            DayOfWeek::from("sunday".to_string()),
            DayOfWeek::Other("sunday".to_string())
        );
        assert_eq!(DayOfWeek::from("Sunday".to_string()), DayOfWeek::Sunday);
    }

    #[test]
    fn options_match_display_strings() {
        let labels: Vec<&str> = CampaignType::OPTIONS.iter().map(CampaignType::as_str).collect();
        assert_eq!(labels, ["Cost per Order", "Cost per Click", "Buy One Get One"]);
    }
}
