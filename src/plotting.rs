use egui_plot::{Bar, BarChart};

use crate::plan::{ALL_DAYS, WeeklyPlan};

/// Planned sets per weekday as `[week position, total sets]` pairs.
///
/// Every day appears, including days without saved exercises, so the chart
/// always spans the full week.
pub fn planned_sets_points(plan: &WeeklyPlan) -> Vec<[f64; 2]> {
    ALL_DAYS
        .iter()
        .map(|day| {
            let sets: u32 = plan.day(*day).iter().map(|r| r.sets as u32).sum();
            [day.index() as f64, sets as f64]
        })
        .collect()
}

/// Planned exercise counts per weekday as `[week position, count]` pairs.
pub fn planned_exercises_points(plan: &WeeklyPlan) -> Vec<[f64; 2]> {
    ALL_DAYS
        .iter()
        .map(|day| [day.index() as f64, plan.day(*day).len() as f64])
        .collect()
}

/// Bar chart of how many sets are planned on each day of the week.
pub fn planned_sets_bar(plan: &WeeklyPlan) -> BarChart {
    let bars: Vec<Bar> = planned_sets_points(plan)
        .into_iter()
        .map(|[x, y]| Bar::new(x, y))
        .collect();
    BarChart::new(bars).name("Planned sets")
}

/// Bar chart of how many exercises are planned on each day of the week.
pub fn planned_exercises_bar(plan: &WeeklyPlan) -> BarChart {
    let bars: Vec<Bar> = planned_exercises_points(plan)
        .into_iter()
        .map(|[x, y]| Bar::new(x, y))
        .collect();
    BarChart::new(bars).name("Exercises")
}
