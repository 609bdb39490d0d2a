use crate::filter::FilteredView;
use crate::metrics::group::{percentage, Grouped, Tally};
use crate::types::CampaignRank;

/// Campaign/channel pairs ranked by converted-per-engaged rate, best first.
/// Equal rates keep the order the pairs first appeared in.
pub fn campaign_ranking(view: &FilteredView<'_>) -> Vec<CampaignRank> {
    let mut grouped: Grouped<(&str, &str), Tally> = Grouped::new();
    for event in view.iter() {
        grouped
            .entry((event.campaign.as_str(), event.channel.as_str()))
            .add(event);
    }
    let mut ranking: Vec<CampaignRank> = grouped
        .into_vec()
        .into_iter()
        .map(|((campaign, channel), tally)| CampaignRank {
            campaign: campaign.to_string(),
            channel: channel.to_string(),
            total: tally.total,
            engaged_count: tally.engaged,
            converted_count: tally.converted,
            rate: percentage(tally.converted, tally.engaged),
        })
        .collect();
    ranking.sort_by(|a, b| b.rate.total_cmp(&a.rate));
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::EventBuilder;
    use crate::types::Event;

    fn events() -> Vec<Event> {
        vec![
            // Campaign A / Email: 2 engaged, 1 converted -> 50
            EventBuilder::new("a1").engaged(0).converted(1).build(),
            EventBuilder::new("a2").engaged(0).build(),
            // Campaign B / Push: nothing engaged -> 0
            EventBuilder::new("b1").campaign("Campaign B").channel("Push").build(),
            // Campaign A / Push: 1 engaged, 1 converted -> 100
            EventBuilder::new("a3").channel("Push").engaged(1).converted(2).build(),
            // Campaign C / Email: 2 engaged, 1 converted -> 50, ties with A/Email
            EventBuilder::new("c1").campaign("Campaign C").engaged(0).build(),
            EventBuilder::new("c2")
                .campaign("Campaign C")
                .engaged(0)
                .converted(4)
                .build(),
        ]
    }

    #[test]
    fn test_ranking_sorted_descending_with_stable_ties() {
        let events = events();
        let ranking = campaign_ranking(&FilteredView::all(&events));
        let order: Vec<(&str, &str, f64)> = ranking
            .iter()
            .map(|row| (row.campaign.as_str(), row.channel.as_str(), row.rate))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Campaign A", "Push", 100.0),
                ("Campaign A", "Email", 50.0),
                ("Campaign C", "Email", 50.0),
                ("Campaign B", "Push", 0.0),
            ]
        );
        assert!(ranking.windows(2).all(|pair| pair[0].rate >= pair[1].rate));
    }

    #[test]
    fn test_zero_engaged_group_rates_zero() {
        let events = vec![EventBuilder::new("x").build()];
        let ranking = campaign_ranking(&FilteredView::all(&events));
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].engaged_count, 0);
        assert_eq!(ranking[0].converted_count, 0);
        assert_eq!(ranking[0].rate, 0.0);
    }

    #[test]
    fn test_conversion_without_engagement_uses_floor_denominator() {
        let events = vec![EventBuilder::new("x").converted(2).build()];
        let ranking = campaign_ranking(&FilteredView::all(&events));
        assert_eq!(ranking[0].rate, 100.0);
    }

    #[test]
    fn test_empty_ranking() {
        assert!(campaign_ranking(&FilteredView::default()).is_empty());
    }
}
