use crate::filter::FilteredView;
use crate::metrics::group::{percentage, Grouped, Tally};
use crate::types::ChannelRate;

pub fn channel_rates(view: &FilteredView<'_>) -> Vec<ChannelRate> {
    let mut grouped: Grouped<&str, Tally> = Grouped::new();
    for event in view.iter() {
        grouped.entry(event.channel.as_str()).add(event);
    }
    grouped
        .into_vec()
        .into_iter()
        .map(|(channel, tally)| ChannelRate {
            channel: channel.to_string(),
            total: tally.total,
            converted: tally.converted,
            rate: percentage(tally.converted, tally.total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{three_event_scenario, EventBuilder};

    #[test]
    fn test_channel_rates_scenario() {
        let events = three_event_scenario();
        let rates = channel_rates(&FilteredView::all(&events));
        let pairs: Vec<(&str, f64)> = rates
            .iter()
            .map(|row| (row.channel.as_str(), row.rate))
            .collect();
        assert_eq!(pairs, vec![("Email", 50.0), ("Push", 100.0)]);
    }

    #[test]
    fn test_channel_rates_bounds_and_totals() {
        let events = vec![
            EventBuilder::new("a").channel("SMS").build(),
            EventBuilder::new("b").channel("InApp").engaged(0).converted(1).build(),
            EventBuilder::new("c").channel("SMS").engaged(0).converted(3).build(),
            EventBuilder::new("d").channel("SMS").build(),
            EventBuilder::new("e").channel("WhatsApp").build(),
        ];
        let rates = channel_rates(&FilteredView::all(&events));
        assert_eq!(
            rates.iter().map(|row| row.channel.as_str()).collect::<Vec<_>>(),
            vec!["SMS", "InApp", "WhatsApp"]
        );
        assert!(rates.iter().all(|row| (0.0..=100.0).contains(&row.rate)));
        assert_eq!(rates.iter().map(|row| row.total).sum::<usize>(), events.len());
        assert!((rates[0].rate - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(rates[2].rate, 0.0);
    }

    #[test]
    fn test_no_rows_for_empty_view() {
        assert!(channel_rates(&FilteredView::default()).is_empty());
    }
}
