use crate::filter::FilteredView;
use crate::metrics::group::{percentage, Grouped, Tally};
use crate::types::{Heatmap, HeatmapCell};

/// Conversion rate per observed (channel, indicator) pair. Pairs that never
/// occur are left out rather than zero-filled.
pub fn channel_indicator_heatmap(view: &FilteredView<'_>) -> Heatmap {
    let mut grouped: Grouped<(&str, &str), Tally> = Grouped::new();
    let mut channels: Grouped<&str, ()> = Grouped::new();
    let mut indicators: Grouped<&str, ()> = Grouped::new();
    for event in view.iter() {
        let channel = event.channel.as_str();
        let indicator = event.business_indicator.as_str();
        grouped.entry((channel, indicator)).add(event);
        channels.entry(channel);
        indicators.entry(indicator);
    }

    Heatmap {
        channels: axis(channels),
        indicators: axis(indicators),
        cells: grouped
            .into_vec()
            .into_iter()
            .map(|((channel, indicator), tally)| HeatmapCell {
                channel: channel.to_string(),
                business_indicator: indicator.to_string(),
                total: tally.total,
                converted: tally.converted,
                rate: percentage(tally.converted, tally.total),
            })
            .collect(),
    }
}

fn axis(values: Grouped<&str, ()>) -> Vec<String> {
    values
        .into_vec()
        .into_iter()
        .map(|(value, ())| value.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::EventBuilder;

    #[test]
    fn test_heatmap_cells_and_axes() {
        let events = vec![
            EventBuilder::new("a").indicator("Account Opening").converted(1).build(),
            EventBuilder::new("b").indicator("Account Opening").build(),
            EventBuilder::new("c").channel("Push").converted(2).build(),
            EventBuilder::new("d").indicator("Money In").build(),
        ];
        let heatmap = channel_indicator_heatmap(&FilteredView::all(&events));
        assert_eq!(heatmap.channels, vec!["Email", "Push"]);
        assert_eq!(heatmap.indicators, vec!["Account Opening", "Money In"]);

        let cells: Vec<(&str, &str, f64)> = heatmap
            .cells
            .iter()
            .map(|c| (c.channel.as_str(), c.business_indicator.as_str(), c.rate))
            .collect();
        // Push x Account Opening never occurs and is not emitted
        assert_eq!(
            cells,
            vec![
                ("Email", "Account Opening", 50.0),
                ("Push", "Money In", 100.0),
                ("Email", "Money In", 0.0),
            ]
        );
    }

    #[test]
    fn test_empty_heatmap() {
        let heatmap = channel_indicator_heatmap(&FilteredView::default());
        assert_eq!(heatmap, Heatmap::default());
    }
}
