use chrono::{NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Serde helper for wall-clock times in `HH:MM` form.
///
/// Chrono's default `NaiveTime` representation carries seconds; schedule
/// templates are written without them ("09:30"), so (de)serialization goes
/// through the same strict formats the booking path accepts.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

/// Opening hours for a single weekday.
///
/// Slots are generated over the half-open interval `[open, close)`; a window
/// with `open >= close` simply yields no slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    #[serde(with = "hhmm")]
    pub open: NaiveTime,
    #[serde(with = "hhmm")]
    pub close: NaiveTime,
}

impl DayWindow {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }
}

/// Weekly opening hours, indexed 0=Sunday through 6=Saturday.
///
/// `None` marks a closed day. Serialized as a JSON object keyed by the
/// day index, e.g. `{"1": {"open": "09:30", "close": "19:00"}, "0": null}`;
/// days absent from the object are closed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklyTemplate {
    days: [Option<DayWindow>; 7],
}

impl WeeklyTemplate {
    /// Builds a template from (day index, window) pairs; indexes above 6
    /// are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, Option<DayWindow>)>,
    {
        let mut days: [Option<DayWindow>; 7] = Default::default();
        for (index, window) in pairs {
            if let Some(slot) = days.get_mut(usize::from(index)) {
                *slot = window;
            }
        }
        Self { days }
    }

    /// Opening hours for the given weekday, `None` when closed.
    pub fn window_for(&self, weekday: Weekday) -> Option<DayWindow> {
        self.days[weekday.num_days_from_sunday() as usize]
    }
}

impl Serialize for WeeklyTemplate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(7))?;
        for (index, window) in self.days.iter().enumerate() {
            map.serialize_entry(&index.to_string(), window)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeeklyTemplate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = std::collections::BTreeMap::<String, Option<DayWindow>>::deserialize(deserializer)?;
        let mut pairs = Vec::with_capacity(raw.len());
        for (key, window) in raw {
            let index: u8 = key
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid day index '{key}'")))?;
            if index > 6 {
                return Err(serde::de::Error::custom(format!(
                    "day index {index} out of range 0..=6"
                )));
            }
            pairs.push((index, window));
        }
        Ok(Self::from_pairs(pairs))
    }
}

/// Provider schedule configuration, loaded once at process start.
///
/// All civil-time arithmetic is anchored to `timezone`; the machine's local
/// timezone is never consulted.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// The provider's fixed civil timezone
    pub timezone: Tz,
    /// Slot granularity in minutes, must be positive
    pub slot_minutes: u32,
    /// Identifier of the single provider this deployment serves
    pub provider_id: String,
    /// Weekly opening hours template
    pub week: WeeklyTemplate,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        fn hm(hour: u32, minute: u32) -> NaiveTime {
            NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
        }
        let weekday = Some(DayWindow::new(hm(9, 30), hm(19, 0)));
        let saturday = Some(DayWindow::new(hm(9, 0), hm(14, 0)));
        Self {
            timezone: chrono_tz::America::Montevideo,
            slot_minutes: 30,
            provider_id: "juanma".to_string(),
            week: WeeklyTemplate::from_pairs([
                (0, None),
                (1, weekday),
                (2, weekday),
                (3, weekday),
                (4, weekday),
                (5, weekday),
                (6, saturday),
            ]),
        }
    }
}

/// A candidate reservation unit: one bookable interval start on one civil day.
///
/// Slots are ephemeral, regenerated on demand, and never persisted; booking
/// identity is derived from (date, provider, canonical time), not from the
/// slot value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
}

impl Slot {
    /// Canonical `HH:MM` representation of the slot start.
    pub fn hhmm(&self) -> String {
        self.start.format("%H:%M").to_string()
    }
}
