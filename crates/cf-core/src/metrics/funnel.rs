use crate::filter::FilteredView;
use crate::metrics::group::Tally;
use crate::types::FunnelCounts;

/// Raw impacted/engaged/converted counts. Ordering between the stages is
/// whatever the data says; nothing here forces converted <= engaged.
pub fn funnel_counts(view: &FilteredView<'_>) -> FunnelCounts {
    let mut tally = Tally::default();
    for event in view.iter() {
        tally.add(event);
    }
    FunnelCounts {
        impacted: tally.total,
        engaged: tally.engaged,
        converted: tally.converted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{three_event_scenario, EventBuilder};

    #[test]
    fn test_funnel_counts_scenario() {
        let events = three_event_scenario();
        let funnel = funnel_counts(&FilteredView::all(&events));
        assert_eq!(
            funnel,
            FunnelCounts {
                impacted: 3,
                engaged: 3,
                converted: 2,
            }
        );
    }

    #[test]
    fn test_funnel_reports_raw_sums() {
        let events = vec![EventBuilder::new("a").converted(1).build()];
        let funnel = funnel_counts(&FilteredView::all(&events));
        assert_eq!(funnel.engaged, 0);
        assert_eq!(funnel.converted, 1);
    }

    #[test]
    fn test_empty_funnel() {
        assert_eq!(
            funnel_counts(&FilteredView::default()),
            FunnelCounts::default()
        );
    }
}
