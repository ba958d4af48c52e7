use crate::plan::{PlanStats, WeeklyPlan, compute_stats};
use maud::{Markup, html};
use once_cell::sync::Lazy;
use plotters::prelude::*;
use regex::Regex;
use std::path::Path;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new("[^A-Za-z0-9]+").unwrap());

/// File name for a client's exported plan, e.g. `Workout_Plan_Jane_Doe.html`.
///
/// Runs of non-alphanumeric characters collapse to a single underscore; an
/// empty client name falls back to `Client`.
pub fn suggested_filename(client: &str) -> String {
    let cleaned = NON_ALNUM.replace_all(client.trim(), "_");
    let cleaned = cleaned.trim_matches('_');
    let name = if cleaned.is_empty() { "Client" } else { cleaned };
    format!("Workout_Plan_{}.html", name)
}

/// Write the formatted weekly plan document to `path`.
///
/// A planned-sets chart is rendered as a PNG next to the HTML file; if the
/// chart cannot be generated the document falls back to a placeholder.
pub fn export_html_report<P: AsRef<Path>>(
    path: P,
    client: &str,
    plan: &WeeklyPlan,
) -> std::io::Result<()> {
    let path = path.as_ref();
    let chart_path = path.with_extension("png");
    let chart_file = match generate_sets_chart(plan, &chart_path) {
        Ok(_) => chart_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("")),
        Err(e) => {
            log::error!("Failed to generate chart: {}", e);
            std::ffi::OsStr::new("")
        }
    };
    let generated_on = chrono::Local::now().format("%Y-%m-%d").to_string();
    let stats = compute_stats(plan);
    let markup = build_html(client, plan, &stats, &generated_on, chart_file);
    std::fs::write(path, markup.into_string())
}

fn generate_sets_chart(
    plan: &WeeklyPlan,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let points = crate::plotting::planned_sets_points(plan);
    let root = BitMapBackend::new(path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;
    let max = points.iter().map(|p| p[1]).fold(0.0_f64, f64::max);
    if max == 0.0 {
        root.present()?;
        return Ok(());
    }
    let mut chart = ChartBuilder::on(&root)
        .caption("Planned Sets per Day", ("sans-serif", 25))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0..points.len(), 0f64..max)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Day")
        .y_desc("Sets")
        .draw()?;
    chart.draw_series(LineSeries::new(
        points.iter().map(|p| (p[0] as usize, p[1])),
        &BLUE,
    ))?;
    root.present()?;
    Ok(())
}

fn build_html(
    client: &str,
    plan: &WeeklyPlan,
    stats: &PlanStats,
    generated_on: &str,
    chart_file: &std::ffi::OsStr,
) -> Markup {
    html! {
        html {
            head { meta charset="utf-8"; title { "Weekly Workout Plan" } }
            body {
                h1 { "Weekly Workout Plan - " (client) }
                p { "Generated on " (generated_on) }
                table border="1" {
                    tr { th { "Total Exercises" } td { (stats.total_exercises) } }
                    tr { th { "Total Sets" } td { (stats.total_sets) } }
                    tr { th { "Avg Sets/Exercise" } td { (format!("{:.1}", stats.avg_sets_per_exercise)) } }
                    tr { th { "Busiest Day" } td { (stats.busiest_day.map(|d| d.label()).unwrap_or("-")) } }
                }
                @for (day, records) in plan.iter() {
                    h2 { (day.label()) }
                    @for record in records {
                        p { (record.summary_line()) }
                        @if !record.notes.is_empty() {
                            p { "Notes: " (record.notes) }
                        }
                    }
                }
                h2 { "Planned Sets" }
                @if chart_file.is_empty() {
                    p { "Chart unavailable" }
                } @else {
                    img src=(chart_file.to_string_lossy());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{ALL_DAYS, ExerciseRecord, Weekday, compute_stats};
    use std::ffi::OsStr;

    fn named(name: &str, sets: u8, notes: &str) -> ExerciseRecord {
        ExerciseRecord {
            name: name.into(),
            sets,
            reps: "10".into(),
            weights: "40".into(),
            notes: notes.into(),
            ..ExerciseRecord::default()
        }
    }

    fn complete_plan() -> WeeklyPlan {
        let mut plan = WeeklyPlan::new();
        for day in ALL_DAYS {
            plan.save_day(day, &[named("Squats", 3, "")]);
        }
        plan
    }

    #[test]
    fn build_html_renders_six_day_headings() {
        let plan = complete_plan();
        let stats = compute_stats(&plan);
        let output =
            build_html("Jane Doe", &plan, &stats, "2025-01-06", OsStr::new("chart.png"))
                .into_string();

        assert!(output.contains("<h1>Weekly Workout Plan - Jane Doe</h1>"));
        for day in ALL_DAYS {
            assert!(output.contains(&format!("<h2>{}</h2>", day.label())));
        }
        assert!(output.contains("Squats - 3 sets x 10 reps at 40 kg"));
        assert!(output.contains("2025-01-06"));
        assert!(output.contains("chart.png"));
    }

    #[test]
    fn build_html_notes_line_only_when_present() {
        let mut plan = WeeklyPlan::new();
        plan.save_day(
            Weekday::Monday,
            &[
                named("Bench Press", 4, "slow eccentric"),
                named("Dumbbell Flys", 3, ""),
            ],
        );
        let stats = compute_stats(&plan);
        let output =
            build_html("A", &plan, &stats, "2025-01-06", OsStr::new("c.png")).into_string();

        assert!(output.contains("Notes: slow eccentric"));
        assert_eq!(output.matches("Notes:").count(), 1);
    }

    #[test]
    fn build_html_handles_missing_chart() {
        let plan = complete_plan();
        let stats = compute_stats(&plan);
        let output = build_html("A", &plan, &stats, "2025-01-06", OsStr::new("")).into_string();

        assert!(output.contains("Chart unavailable"));
        assert!(!output.contains("<img"));
    }

    #[test]
    fn suggested_filename_sanitizes_client_name() {
        assert_eq!(suggested_filename("Jane Doe"), "Workout_Plan_Jane_Doe.html");
        assert_eq!(
            suggested_filename("  O'Brien, Pat  "),
            "Workout_Plan_O_Brien_Pat.html"
        );
        assert_eq!(suggested_filename(""), "Workout_Plan_Client.html");
        assert_eq!(suggested_filename("!!!"), "Workout_Plan_Client.html");
    }

    #[test]
    fn export_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.html");
        let plan = complete_plan();

        export_html_report(&path, "Jane", &plan).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Weekly Workout Plan - Jane"));
        // Chart rendering depends on the environment; the document either
        // references the PNG or carries the placeholder.
        assert!(html.contains("plan.png") || html.contains("Chart unavailable"));
    }
}
