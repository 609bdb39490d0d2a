use crate::types::{AccountId, Event};
use chrono::{DateTime, Duration, TimeZone, Utc};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Builds events for tests. Offsets passed to `engaged`/`converted` are days
/// after `sent_at`.
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            event: Event {
                id: AccountId::new(id).unwrap(),
                channel: "Email".to_string(),
                campaign: "Campaign A".to_string(),
                business_indicator: "Money In".to_string(),
                sent_at: base_time(),
                engaged: false,
                engaged_at: None,
                converted: false,
                converted_at: None,
            },
        }
    }

    pub fn channel(mut self, channel: &str) -> Self {
        self.event.channel = channel.to_string();
        self
    }

    pub fn campaign(mut self, campaign: &str) -> Self {
        self.event.campaign = campaign.to_string();
        self
    }

    pub fn indicator(mut self, indicator: &str) -> Self {
        self.event.business_indicator = indicator.to_string();
        self
    }

    pub fn sent_day(mut self, day: i64) -> Self {
        let shift = base_time() + Duration::days(day) - self.event.sent_at;
        self.event.sent_at += shift;
        self.event.engaged_at = self.event.engaged_at.map(|at| at + shift);
        self.event.converted_at = self.event.converted_at.map(|at| at + shift);
        self
    }

    pub fn engaged(mut self, days_after_send: i64) -> Self {
        self.event.engaged = true;
        self.event.engaged_at = Some(self.event.sent_at + Duration::days(days_after_send));
        self
    }

    pub fn converted(mut self, days_after_send: i64) -> Self {
        self.event.converted = true;
        self.event.converted_at = Some(self.event.sent_at + Duration::days(days_after_send));
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

/// The three-event scenario: two Email sends (one converting after a two day
/// lag) and one Push send converting after five days.
pub fn three_event_scenario() -> Vec<Event> {
    vec![
        EventBuilder::new("c1").engaged(0).converted(2).build(),
        EventBuilder::new("c2").engaged(0).build(),
        EventBuilder::new("c3")
            .channel("Push")
            .engaged(0)
            .converted(5)
            .build(),
    ]
}
