use crate::gain::GainSeries;
use crate::logger::sanitize_filename;
use crate::min_cost::AggregateScalarSeries;
use crate::records::ExperimentPair;
use plotters::prelude::*;
use std::ops::Range;
use std::path::{Path, PathBuf};

const CHART_SIZE: (u32, u32) = (1200, 700);

/// File name of the chart for tournament `index` of a log
pub fn tournament_chart_path(dir: &Path, index: usize, pair: &ExperimentPair) -> PathBuf {
    dir.join(format!(
        "tournament_{}_{}_vs_{}.png",
        index,
        sanitize_filename(&pair.first.name),
        sanitize_filename(&pair.second.name),
    ))
}

/// Y-axis range covering every value and zero, padded by 10%
fn value_range<'a>(series: impl IntoIterator<Item = &'a [f64]>) -> Range<f64> {
    let (min, max) = series.into_iter()
        .flat_map(|values| values.iter().copied())
        .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span = max - min;
    let pad = if span > 0.0 { span * 0.1 } else { 1.0 };
    (min - pad)..(max + pad)
}

/// Per-round margins as bars, cumulative gains as lines
pub fn render_tournament(path: &Path, pair: &ExperimentPair, gains: &GainSeries) -> Result<(), Box<dyn std::error::Error>> {
    let n = pair.rounds();
    let y_range = value_range([
        gains.raw_gain_1.as_slice(),
        gains.raw_gain_2.as_slice(),
        gains.cumulative_gain_1.as_slice(),
        gains.cumulative_gain_2.as_slice(),
    ]);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Tournament with {} tasks", n), ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5).max(0.5), y_range)?;

    chart.configure_mesh()
        .x_desc("Task")
        .y_desc("Gain = Bid - Cost")
        .draw()?;

    let second_fill = RED.mix(0.5);

    chart.draw_series(
        gains.raw_gain_1.iter().enumerate().map(|(i, &gain)| {
            let x = i as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, gain)], BLUE.filled())
        })
    )?
    .label(pair.first.name.clone())
    .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BLUE.filled()));

    chart.draw_series(
        gains.raw_gain_2.iter().enumerate().map(|(i, &gain)| {
            let x = i as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, gain)], second_fill.filled())
        })
    )?
    .label(pair.second.name.clone())
    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], second_fill.filled()));

    chart.draw_series(LineSeries::new(
        gains.cumulative_gain_1.iter().enumerate().map(|(i, &g)| (i as f64, g)),
        &BLUE,
    ))?;
    chart.draw_series(LineSeries::new(
        gains.cumulative_gain_2.iter().enumerate().map(|(i, &g)| (i as f64, g)),
        &RED,
    ))?;

    chart.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Both minimum cost series against their own index
pub fn render_min_costs(path: &Path, series: &AggregateScalarSeries) -> Result<(), Box<dyn std::error::Error>> {
    let self_cost: Vec<f64> = series.self_cost.iter().map(|&v| v as f64).collect();
    let opponent_cost: Vec<f64> = series.opponent_cost.iter().map(|&v| v as f64).collect();
    let longest = self_cost.len().max(opponent_cost.len()).max(1);
    let y_range = value_range([self_cost.as_slice(), opponent_cost.as_slice()]);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Minimum cost per task", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..longest as f64, y_range)?;

    chart.configure_mesh()
        .x_desc("Task")
        .y_desc("Cost")
        .draw()?;

    chart.draw_series(LineSeries::new(
        self_cost.iter().enumerate().map(|(i, &c)| (i as f64, c)),
        &BLUE,
    ))?
    .label("Own minimum cost")
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart.draw_series(LineSeries::new(
        opponent_cost.iter().enumerate().map(|(i, &c)| (i as f64, c)),
        &RED,
    ))?
    .label("Opponent minimum cost")
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
