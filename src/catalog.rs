use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::custom_exercises;

/// Muscle group targeted by a workout day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MuscleGroup {
    Back,
    Chest,
    LegsQuads,
    LegsHamsGlutes,
    Shoulder,
    Tricep,
    Bicep,
}

pub const ALL_GROUPS: [MuscleGroup; 7] = [
    MuscleGroup::Back,
    MuscleGroup::Chest,
    MuscleGroup::LegsQuads,
    MuscleGroup::LegsHamsGlutes,
    MuscleGroup::Shoulder,
    MuscleGroup::Tricep,
    MuscleGroup::Bicep,
];

impl MuscleGroup {
    pub fn label(self) -> &'static str {
        match self {
            MuscleGroup::Back => "Back",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::LegsQuads => "Legs (Quads)",
            MuscleGroup::LegsHamsGlutes => "Legs (Hams and Glutes)",
            MuscleGroup::Shoulder => "Shoulder",
            MuscleGroup::Tricep => "Tricep",
            MuscleGroup::Bicep => "Bicep",
        }
    }
}

static BUILTIN_EXERCISES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "Back" => &[
        "Lat Pulldown",
        "Deadrows",
        "Pull-Ups",
        "Seated Cable Rows",
        "Bent Over Rows",
        "T-Bar Rows",
        "Single Arm Dumbbell Rows",
    ],
    "Chest" => &[
        "Bench Press",
        "Incline Bench Press",
        "Dumbbell Flys",
        "Cable Crossovers",
        "Push-Ups",
        "Decline Bench Press",
        "Chest Dips",
    ],
    "Legs (Quads)" => &[
        "Squats",
        "Leg Press",
        "Lunges",
        "Step-Ups",
        "Leg Extensions",
    ],
    "Legs (Hams and Glutes)" => &[
        "Deadlifts",
        "Hip Thrusts",
        "Romanian Deadlifts",
        "Hamstring Curls",
        "Glute Bridges",
    ],
    "Shoulder" => &[
        "Overhead Press",
        "Lateral Raises",
        "Front Raises",
        "Arnold Press",
        "Face Pulls",
        "Upright Rows",
    ],
    "Tricep" => &[
        "Tricep Pushdowns",
        "Overhead Tricep Extensions",
        "Close-Grip Bench Press",
        "Dips",
        "Skull Crushers",
    ],
    "Bicep" => &[
        "Bicep Curls",
        "Hammer Curls",
        "Preacher Curls",
        "Incline Dumbbell Curls",
        "Concentration Curls",
    ],
};

/// Built-in exercise names for a muscle group.
pub fn builtin_exercises(group: MuscleGroup) -> &'static [&'static str] {
    BUILTIN_EXERCISES.get(group.label()).copied().unwrap_or(&[])
}

/// All selectable exercise names for a group: the built-in list followed by
/// any custom entries the user added, skipping duplicates.
pub fn exercises_for(group: MuscleGroup) -> Vec<String> {
    let mut names: Vec<String> = builtin_exercises(group)
        .iter()
        .map(|s| s.to_string())
        .collect();
    for custom in custom_exercises::for_group(group.label()) {
        if !names.iter().any(|n| n == &custom) {
            names.push(custom);
        }
    }
    names
}

/// Suggest the catalog exercise closest to `query` within a group.
///
/// Returns `None` when the query is empty or already matches a name
/// case-insensitively. Similarity below 0.6 is treated as no match.
pub fn closest_match(group: MuscleGroup, query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let names = exercises_for(group);
    if names.iter().any(|n| n.eq_ignore_ascii_case(query)) {
        return None;
    }
    let query_lower = query.to_lowercase();
    names
        .into_iter()
        .map(|n| {
            let score = strsim::jaro_winkler(&n.to_lowercase(), &query_lower);
            (n, score)
        })
        .filter(|(_, score)| *score >= 0.6)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(n, _)| n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_group_has_builtin_exercises() {
        for group in ALL_GROUPS {
            assert!(
                !builtin_exercises(group).is_empty(),
                "no exercises for {:?}",
                group
            );
        }
    }

    #[test]
    fn exercises_for_includes_custom_entries() {
        let _guard = custom_exercises::TEST_LOCK.lock().unwrap();

        custom_exercises::add("Back", "Meadows Rows");
        let names = exercises_for(MuscleGroup::Back);
        assert!(names.contains(&"Lat Pulldown".to_string()));
        assert!(names.contains(&"Meadows Rows".to_string()));
        custom_exercises::remove("Back", "Meadows Rows");
    }

    #[test]
    fn custom_duplicate_of_builtin_not_doubled() {
        let _guard = custom_exercises::TEST_LOCK.lock().unwrap();

        custom_exercises::add("Chest", "Bench Press");
        let names = exercises_for(MuscleGroup::Chest);
        assert_eq!(
            names.iter().filter(|n| n.as_str() == "Bench Press").count(),
            1
        );
        custom_exercises::remove("Chest", "Bench Press");
    }

    #[test]
    fn closest_match_suggests_misspelled_exercise() {
        let suggestion = closest_match(MuscleGroup::Chest, "bensh press");
        assert_eq!(suggestion.as_deref(), Some("Bench Press"));
    }

    #[test]
    fn closest_match_skips_exact_and_empty() {
        assert_eq!(closest_match(MuscleGroup::Chest, "bench press"), None);
        assert_eq!(closest_match(MuscleGroup::Chest, "  "), None);
    }
}
