use cf_core::types::{FilterSpec, MetricsBundle};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use owo_colors::{OwoColorize, Stream};
use std::fmt::Write;

/// Narrowing requested on the command line. Empty lists keep every observed
/// value.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub channels: Vec<String>,
    pub campaigns: Vec<String>,
    pub indicators: Vec<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub status: cf_core::types::ConversionStatus,
}

pub fn build_spec(defaults: FilterSpec, selection: &Selection) -> FilterSpec {
    let mut spec = defaults;
    if !selection.channels.is_empty() {
        spec.channels = selection.channels.iter().cloned().collect();
    }
    if !selection.campaigns.is_empty() {
        spec.campaigns = selection.campaigns.iter().cloned().collect();
    }
    if !selection.indicators.is_empty() {
        spec.indicators = selection.indicators.iter().cloned().collect();
    }
    if let Some(from) = selection.from {
        spec.date_range.start = start_of_day(from);
    }
    if let Some(to) = selection.to {
        spec.date_range.end = start_of_day(to) + Duration::days(1) - Duration::nanoseconds(1);
    }
    spec.conversion_status = selection.status;
    spec
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

pub fn render(bundle: &MetricsBundle) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, bundle);
    out
}

fn heading(title: &str) -> String {
    title
        .if_supports_color(Stream::Stdout, |text| text.bold())
        .to_string()
}

fn write_report(out: &mut String, bundle: &MetricsBundle) -> std::fmt::Result {
    let funnel = bundle.funnel;
    writeln!(out, "{}", heading("Funnel"))?;
    writeln!(out, "  {:<12}{:>8}", "Impacted", funnel.impacted)?;
    writeln!(out, "  {:<12}{:>8}", "Engaged", funnel.engaged)?;
    writeln!(out, "  {:<12}{:>8}", "Converted", funnel.converted)?;

    writeln!(out, "\n{}", heading("Conversion rate by channel"))?;
    for row in &bundle.channel_rates {
        writeln!(
            out,
            "  {:<12}{:>7.1}%  ({}/{})",
            row.channel, row.rate, row.converted, row.total
        )?;
    }

    writeln!(out, "\n{}", heading("Campaign ranking"))?;
    for (rank, row) in bundle.campaign_ranking.iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {:<16}{:<12}{:>7.1}%  ({} converted / {} engaged)",
            rank + 1,
            row.campaign,
            row.channel,
            row.rate,
            row.converted_count,
            row.engaged_count
        )?;
    }

    writeln!(out, "\n{}", heading("Days from engagement to conversion"))?;
    let lag = &bundle.lag_histogram;
    if lag.is_empty() {
        writeln!(out, "  no converted events with a lag")?;
    }
    for bin in &lag.bins {
        let close = if bin.upper_inclusive { ']' } else { ')' };
        writeln!(
            out,
            "  [{:>6.1}, {:>6.1}{}  {:>5}",
            bin.low, bin.high, close, bin.count
        )?;
    }
    if lag.negative_count > 0 {
        let note = format!("  {} conversions recorded before engagement", lag.negative_count);
        writeln!(
            out,
            "{}",
            note.if_supports_color(Stream::Stdout, |text| text.yellow())
        )?;
    }

    writeln!(out, "\n{}", heading("Cumulative converters by days after send"))?;
    for point in &bundle.cohort_curve {
        writeln!(
            out,
            "  day {:>4}  +{:<5} total {}",
            point.days_after_send, point.count, point.cumulative_count
        )?;
    }

    writeln!(out, "\n{}", heading("Conversion rate by channel and indicator"))?;
    for cell in &bundle.heatmap.cells {
        writeln!(
            out,
            "  {:<12}{:<20}{:>7.1}%",
            cell.channel, cell.business_indicator, cell.rate
        )?;
    }
    Ok(())
}
