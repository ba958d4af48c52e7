use crate::plan::{PlanStats, WeeklyPlan};
use serde::Serialize;
use std::path::Path;

pub fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(
    value: &T,
    path: P,
) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, value)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// One flattened plan row: an exercise tagged with its day.
#[derive(Serialize)]
struct PlanRow<'a> {
    day: &'static str,
    exercise: &'a str,
    set_type: &'a str,
    sets: u8,
    reps: &'a str,
    weights: &'a str,
    notes: &'a str,
}

fn plan_rows(plan: &WeeklyPlan) -> Vec<PlanRow<'_>> {
    let mut rows = Vec::with_capacity(plan.total_exercises());
    for (day, records) in plan.iter() {
        for r in records {
            rows.push(PlanRow {
                day: day.label(),
                exercise: &r.name,
                set_type: &r.set_type,
                sets: r.sets,
                reps: &r.reps,
                weights: &r.weights,
                notes: &r.notes,
            });
        }
    }
    rows
}

pub fn save_plan_json<P: AsRef<Path>>(path: P, plan: &WeeklyPlan) -> std::io::Result<()> {
    write_json(&plan_rows(plan), path)
}

pub fn save_plan_csv<P: AsRef<Path>>(path: P, plan: &WeeklyPlan) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in plan_rows(plan) {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(Into::into)
}

pub fn save_stats_json<P: AsRef<Path>>(path: P, stats: &PlanStats) -> std::io::Result<()> {
    write_json(stats, path)
}
