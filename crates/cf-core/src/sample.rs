use crate::error::LoadError;
use crate::loader::EventLoader;
use crate::types::{AccountId, Event};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

pub const SAMPLE_SIZE: usize = 300;

const LAG_CYCLE: [i64; 10] = [1, 2, 3, 4, 5, 6, 7, 3, 2, 1];
const ENGAGED_ROWS: usize = 200;
const CONVERTED_ROWS: usize = 90;
const SEND_WINDOW_DAYS: usize = 28;

/// Deterministic demo dataset: 300 clients across three channels and four
/// campaigns, 200 engaged and 90 converted.
#[derive(Debug, Clone)]
pub struct SampleLoader {
    base: DateTime<Utc>,
}

impl SampleLoader {
    pub fn new(base: DateTime<Utc>) -> Self {
        Self { base }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(Utc.from_utc_datetime(&date.and_time(NaiveTime::default())))
    }
}

impl Default for SampleLoader {
    fn default() -> Self {
        Self::from_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default())
    }
}

impl EventLoader for SampleLoader {
    fn load(&self) -> Result<Vec<Event>, LoadError> {
        let events = sample_events(self.base);
        tracing::info!(events = events.len(), "generated sample dataset");
        Ok(events)
    }
}

pub fn sample_events(base: DateTime<Utc>) -> Vec<Event> {
    (0..SAMPLE_SIZE).map(|row| sample_row(base, row)).collect()
}

fn sample_row(base: DateTime<Utc>, row: usize) -> Event {
    let channel = match row {
        0..100 => "Email",
        100..200 => "Push",
        _ => "WhatsApp",
    };
    let campaign = match row {
        0..50 => "Campanha A",
        50..100 => "Campanha B",
        100..200 => "Campanha C",
        _ => "Campanha D",
    };
    let indicator = if row < 150 {
        "Abertura de Conta"
    } else {
        "Money In"
    };

    let sent_at = base + Duration::days((row % SEND_WINDOW_DAYS) as i64);
    let engaged = row < ENGAGED_ROWS;
    let engaged_at = engaged.then(|| sent_at + Duration::days(1));
    let converted = row < CONVERTED_ROWS;
    let converted_at = match engaged_at {
        Some(at) if converted => Some(at + Duration::days(LAG_CYCLE[row % LAG_CYCLE.len()])),
        _ => None,
    };

    Event {
        id: AccountId::new_unchecked(format!("Cliente_{}", row + 1)),
        channel: channel.to_string(),
        campaign: campaign.to_string(),
        business_indicator: indicator.to_string(),
        sent_at,
        engaged,
        engaged_at,
        converted,
        converted_at,
    }
}
