// Core weekly plan model and plan-level statistics
use serde::{Deserialize, Serialize};

/// The six active training days of a week, in week order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

pub const ALL_DAYS: [Weekday; 6] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Position within the week, `0` for Monday through `5` for Saturday.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map today's calendar weekday onto a plan day.
    ///
    /// The plan has no Sunday slot, so Sunday falls back to Monday.
    pub fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon | chrono::Weekday::Sun => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

/// One configured exercise entry within a day.
///
/// `reps` and `weights` are free text by design and are never parsed as
/// numbers. `set_type` is stored and exported but not edited in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub name: String,
    pub set_type: String,
    pub sets: u8,
    pub reps: String,
    pub weights: String,
    pub notes: String,
}

pub const DEFAULT_SET_TYPE: &str = "Normal";
pub const MIN_SETS: u8 = 1;
pub const MAX_SETS: u8 = 5;

impl Default for ExerciseRecord {
    fn default() -> Self {
        Self::with_sets(MIN_SETS)
    }
}

impl ExerciseRecord {
    pub fn with_sets(sets: u8) -> Self {
        Self {
            name: String::new(),
            set_type: DEFAULT_SET_TYPE.to_string(),
            sets: sets.clamp(MIN_SETS, MAX_SETS),
            reps: String::new(),
            weights: String::new(),
            notes: String::new(),
        }
    }

    /// The single-line rendering used in the saved list and the exported
    /// document: `<name> - <sets> sets x <reps> reps at <weight> kg`.
    pub fn summary_line(&self) -> String {
        format!(
            "{} - {} sets x {} reps at {} kg",
            self.name, self.sets, self.reps, self.weights
        )
    }
}

/// The full week of configured exercises, one ordered list per day.
///
/// All six day slots always exist; saving replaces a day's list wholesale
/// and a saved list only ever contains records with a non-empty name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    days: [Vec<ExerciseRecord>; 6],
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Weekday) -> &[ExerciseRecord] {
        &self.days[day.index()]
    }

    /// Replace `day`'s list with the records that have a non-empty name,
    /// preserving entry order. Returns how many records were kept.
    pub fn save_day(&mut self, day: Weekday, records: &[ExerciseRecord]) -> usize {
        let kept: Vec<ExerciseRecord> = records
            .iter()
            .filter(|r| !r.name.trim().is_empty())
            .cloned()
            .collect();
        let count = kept.len();
        self.days[day.index()] = kept;
        log::info!("{}", format_save_message(day, count));
        count
    }

    /// A plan is complete iff every one of the six days has at least one
    /// saved exercise.
    pub fn is_complete(&self) -> bool {
        self.days.iter().all(|d| !d.is_empty())
    }

    /// Days without any saved exercise, in week order.
    pub fn missing_days(&self) -> Vec<Weekday> {
        ALL_DAYS
            .into_iter()
            .filter(|d| self.days[d.index()].is_empty())
            .collect()
    }

    pub fn clear(&mut self) {
        for d in &mut self.days {
            d.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[ExerciseRecord])> {
        ALL_DAYS
            .into_iter()
            .map(move |d| (d, self.days[d.index()].as_slice()))
    }

    pub fn total_exercises(&self) -> usize {
        self.days.iter().map(|d| d.len()).sum()
    }
}

/// Adjust the slot editor to hold exactly `count` records.
///
/// Raising the count appends fresh records with the configured default set
/// count; lowering truncates from the tail. Surviving slots are untouched.
pub fn resize_slots(slots: &mut Vec<ExerciseRecord>, count: usize, default_sets: u8) {
    if slots.len() < count {
        for _ in 0..count - slots.len() {
            slots.push(ExerciseRecord::with_sets(default_sets));
        }
    } else {
        slots.truncate(count);
    }
}

/// Summary statistics over a weekly plan.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanStats {
    pub total_exercises: usize,
    pub total_sets: u32,
    pub avg_sets_per_exercise: f32,
    pub busiest_day: Option<Weekday>,
}

/// Compute overall statistics for the plan.
///
/// The busiest day is the one with the most planned sets; ties resolve to
/// the earliest day in week order. An empty plan yields the default value.
pub fn compute_stats(plan: &WeeklyPlan) -> PlanStats {
    let total_exercises = plan.total_exercises();
    if total_exercises == 0 {
        log::warn!("No exercises saved yet");
        return PlanStats::default();
    }

    let mut total_sets = 0u32;
    let mut busiest_day = None;
    let mut busiest_sets = 0u32;
    for (day, records) in plan.iter() {
        let day_sets: u32 = records.iter().map(|r| r.sets as u32).sum();
        total_sets += day_sets;
        if day_sets > busiest_sets {
            busiest_sets = day_sets;
            busiest_day = Some(day);
        }
    }

    PlanStats {
        total_exercises,
        total_sets,
        avg_sets_per_exercise: total_sets as f32 / total_exercises as f32,
        busiest_day,
    }
}

/// Format the status toast shown after saving a day.
pub fn format_save_message(day: Weekday, count: usize) -> String {
    format!("{} workout saved with {} exercises", day.label(), count)
}
