use crate::error::MetricsError;
use crate::filter::FilteredView;
use crate::types::{LagBin, LagHistogram};

/// Equal-width histogram of engagement-to-conversion lag over converted events.
///
/// Bins span the observed `[min, max]`; each is `[low, high)` except the last,
/// which is `[low, high]`. A zero span collapses to one closed bin.
pub fn lag_histogram(view: &FilteredView<'_>, bins: usize) -> Result<LagHistogram, MetricsError> {
    if bins == 0 {
        return Err(MetricsError::InvalidBinCount { bins });
    }
    let samples: Vec<i64> = view
        .iter()
        .filter(|event| event.converted)
        .filter_map(|event| event.lag_days())
        .collect();
    let (Some(&min), Some(&max)) = (samples.iter().min(), samples.iter().max()) else {
        return Ok(LagHistogram::default());
    };

    let negative_count = samples.iter().filter(|lag| **lag < 0).count();
    let span = max - min;
    let bins = if span == 0 {
        vec![LagBin {
            low: min as f64,
            high: max as f64,
            upper_inclusive: true,
            count: samples.len(),
        }]
    } else {
        bucket(&samples, min, max, bins)
    };

    Ok(LagHistogram {
        bins,
        sample_count: samples.len(),
        negative_count,
        min: Some(min),
        max: Some(max),
    })
}

fn bucket(samples: &[i64], min: i64, max: i64, bins: usize) -> Vec<LagBin> {
    let span = i128::from(max - min);
    let last = bins - 1;
    let mut counts = vec![0usize; bins];
    for sample in samples {
        // floor((v - min) / width) without going through floating point
        let slot = (i128::from(sample - min) * bins as i128 / span) as usize;
        counts[slot.min(last)] += 1;
    }

    let width = (max - min) as f64 / bins as f64;
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| LagBin {
            low: min as f64 + i as f64 * width,
            high: if i == last {
                max as f64
            } else {
                min as f64 + (i + 1) as f64 * width
            },
            upper_inclusive: i == last,
            count,
        })
        .collect()
}
