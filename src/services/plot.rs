use crate::models::{ResolvedProcess, SampleMatrix};
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

/// Render the finished sample matrix as a PNG line plot, one line per
/// process, y axis pinned to the 0-100 CPU % range.
pub fn render(
    samples: &SampleMatrix,
    processes: &[ResolvedProcess],
    process_name: &str,
    interval: f64,
    output: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(output, (1024, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{} CPU %", process_name), ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(48)
        .build_cartesian_2d(0..samples.iterations(), 0f32..100f32)?;

    chart
        .configure_mesh()
        .x_desc(format!(
            "time: {} iterations of {}s each",
            samples.iterations(),
            interval
        ))
        .y_desc("CPU %")
        .draw()?;

    for (index, target) in processes.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        let points = samples
            .row(index)
            .iter()
            .enumerate()
            .map(|(iteration, &value)| (iteration, value));

        chart
            .draw_series(LineSeries::new(points, color))?
            .label(format!("PID {}", target.pid))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
    }

    if processes.len() > 1 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_writes_png() {
        let mut samples = SampleMatrix::new(2, 5);
        for iteration in 0..5 {
            samples.record(0, iteration, iteration as f32 * 10.0);
            samples.record(1, iteration, 50.0);
        }
        let processes = vec![
            ResolvedProcess::new(101, "demo".to_string()),
            ResolvedProcess::new(202, "demo".to_string()),
        ];
        let output = std::env::temp_dir().join("procplot-render-test.png");

        render(&samples, &processes, "demo", 0.1, &output).unwrap();

        let metadata = std::fs::metadata(&output).unwrap();
        assert!(metadata.len() > 0);
        let _ = std::fs::remove_file(&output);
    }

    #[test]
    fn test_render_single_iteration() {
        let mut samples = SampleMatrix::new(1, 1);
        samples.record(0, 0, 25.0);
        let processes = vec![ResolvedProcess::new(7, "demo".to_string())];
        let output = std::env::temp_dir().join("procplot-render-single-test.png");

        render(&samples, &processes, "demo", 1.0, &output).unwrap();

        assert!(output.exists());
        let _ = std::fs::remove_file(&output);
    }
}
