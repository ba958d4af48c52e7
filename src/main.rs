//! Main application logic and persistent user settings.

use dirs_next as dirs;
use eframe::{App, Frame, NativeOptions, egui};
use egui_plot::Plot;
use rfd::FileDialog;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use log::info;

mod custom_exercises;
mod catalog;
use catalog::{ALL_GROUPS, MuscleGroup};
mod plan;
use plan::{
    ALL_DAYS, ExerciseRecord, MAX_SETS, MIN_SETS, PlanStats, Weekday, WeeklyPlan, compute_stats,
    format_save_message, resize_slots,
};
mod plotting;
use plotting::{planned_exercises_bar, planned_sets_bar};
mod export;
use export::{save_plan_csv, save_plan_json, save_stats_json};
mod report;
use report::{export_html_report, suggested_filename};

const MAX_SLOTS: usize = 10;

fn default_sets() -> u8 {
    MIN_SETS
}

fn default_true() -> bool {
    true
}

/// Persistent configuration for user preferences.
///
/// The values are serialized to a JSON file in the platform config
/// directory so choices like `auto_open_report` survive across
/// application restarts. The weekly plan itself is deliberately not part
/// of this file; a plan lives only for the session that built it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Settings {
    /// Sets preselected for a freshly added exercise slot.
    #[serde(default = "default_sets")]
    default_sets: u8,
    /// Open the exported report in the browser after writing it.
    #[serde(default)]
    auto_open_report: bool,
    #[serde(default)]
    show_overview: bool,
    #[serde(default = "default_true")]
    show_saved_table: bool,
    last_export_dir: Option<String>,
}

impl Settings {
    const FILE: &'static str = "workout_plan_settings.json";

    fn path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|p| p.join(Self::FILE))
    }

    /// Load settings from the JSON configuration file.
    ///
    /// Missing fields default via `#[serde(default)]`, so files written by
    /// older versions keep loading.
    fn load() -> Self {
        if let Some(path) = Self::path() {
            if let Ok(data) = std::fs::read_to_string(&path) {
                if let Ok(cfg) = serde_json::from_str(&data) {
                    return cfg;
                }
            }
        }
        Self::default()
    }

    fn save(&self) {
        if let Some(path) = Self::path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(data) = serde_json::to_string_pretty(self) {
                let _ = std::fs::write(path, data);
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_sets: MIN_SETS,
            auto_open_report: false,
            show_overview: false,
            show_saved_table: true,
            last_export_dir: None,
        }
    }
}

struct PlannerApp {
    client_name: String,
    selected_day: Weekday,
    selected_group: MuscleGroup,
    exercise_count: usize,
    slots: Vec<ExerciseRecord>,
    plan: WeeklyPlan,
    stats: PlanStats,
    picker_filter: String,
    toast_start: Option<Instant>,
    toast_message: Option<String>,
    settings: Settings,
    settings_dirty: bool,
    show_settings: bool,
    show_overview: bool,
    show_custom: bool,
    show_about: bool,
    custom_group: MuscleGroup,
    custom_name: String,
    custom_dirty: bool,
}

impl Default for PlannerApp {
    fn default() -> Self {
        let settings = Settings::load();
        custom_exercises::load();
        let show_overview = settings.show_overview;
        let default_sets = settings.default_sets;
        Self {
            client_name: String::new(),
            selected_day: Weekday::from_chrono(Local::now().weekday()),
            selected_group: MuscleGroup::Back,
            exercise_count: 1,
            slots: vec![ExerciseRecord::with_sets(default_sets)],
            plan: WeeklyPlan::new(),
            stats: PlanStats::default(),
            picker_filter: String::new(),
            toast_start: None,
            toast_message: None,
            settings,
            settings_dirty: false,
            show_settings: false,
            show_overview,
            show_custom: false,
            show_about: false,
            custom_group: MuscleGroup::Back,
            custom_name: String::new(),
            custom_dirty: false,
        }
    }
}

impl PlannerApp {
    /// Save the current slot editor into the selected day and refresh the
    /// cached statistics. Returns the toast message describing the result.
    fn save_current_day(&mut self) -> String {
        let count = self.plan.save_day(self.selected_day, &self.slots);
        self.stats = compute_stats(&self.plan);
        if self.plan.is_complete() {
            info!("All six days saved, plan is complete");
        }
        format_save_message(self.selected_day, count)
    }

    fn show_toast(&mut self, message: String) {
        self.toast_message = Some(message);
        self.toast_start = Some(Instant::now());
    }

    fn export_plan_dialog(&mut self) {
        let mut dialog = FileDialog::new()
            .add_filter("JSON", &["json"])
            .add_filter("CSV", &["csv"]);
        if let Some(ref dir) = self.settings.last_export_dir {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.save_file() {
            let result = match path
                .extension()
                .and_then(|e| e.to_str())
                .map(|s| s.to_lowercase())
            {
                Some(ext) if ext == "csv" => {
                    save_plan_csv(&path, &self.plan).map_err(|e| e.to_string())
                }
                _ => save_plan_json(&path, &self.plan).map_err(|e| e.to_string()),
            };
            match result {
                Ok(()) => self.remember_export_dir(&path),
                Err(e) => log::error!("Failed to export plan: {e}"),
            }
        }
    }

    fn export_report_dialog(&mut self) {
        let mut dialog = FileDialog::new()
            .add_filter("HTML", &["html"])
            .set_file_name(suggested_filename(&self.client_name));
        if let Some(ref dir) = self.settings.last_export_dir {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.save_file() {
            match export_html_report(&path, &self.client_name, &self.plan) {
                Ok(()) => {
                    info!("Exported weekly plan to {}", path.display());
                    self.remember_export_dir(&path);
                    self.show_toast(format!("Plan exported to {}", path.display()));
                    if self.settings.auto_open_report {
                        if let Err(e) = open::that(&path) {
                            log::error!("Failed to open report: {e}");
                        }
                    }
                }
                Err(e) => log::error!("Failed to export report: {e}"),
            }
        }
    }

    fn remember_export_dir(&mut self, path: &std::path::Path) {
        if let Some(parent) = path.parent() {
            self.settings.last_export_dir = Some(parent.display().to_string());
            self.settings_dirty = true;
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Settings").clicked() {
                        self.show_settings = true;
                        ui.close_menu();
                    }
                    if ui.button("Weekly Overview").clicked() {
                        self.show_overview = !self.show_overview;
                        self.settings.show_overview = self.show_overview;
                        self.settings_dirty = true;
                        ui.close_menu();
                    }
                    if ui.button("Custom Exercises").clicked() {
                        self.show_custom = true;
                        ui.close_menu();
                    }
                    if ui.button("Usage Tips").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Export Plan").clicked() {
                        self.export_plan_dialog();
                        ui.close_menu();
                    }
                    if ui.button("Export Stats").clicked() {
                        if let Some(path) =
                            FileDialog::new().add_filter("JSON", &["json"]).save_file()
                        {
                            if let Err(e) = save_stats_json(&path, &self.stats) {
                                log::error!("Failed to export stats: {e}");
                            }
                        }
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(self.plan.is_complete(), egui::Button::new("Export Report"))
                        .clicked()
                    {
                        self.export_report_dialog();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Clear Week").clicked() {
                        self.plan.clear();
                        self.stats = PlanStats::default();
                        self.show_toast("Weekly plan cleared".to_string());
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn control_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("control_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Client:");
                ui.text_edit_singleline(&mut self.client_name);

                ui.separator();
                ui.label("Day:");
                egui::ComboBox::from_id_source("day_combo")
                    .selected_text(self.selected_day.label())
                    .show_ui(ui, |ui| {
                        for day in ALL_DAYS {
                            ui.selectable_value(&mut self.selected_day, day, day.label());
                        }
                    });

                ui.label("Muscle group:");
                egui::ComboBox::from_id_source("group_combo")
                    .selected_text(self.selected_group.label())
                    .show_ui(ui, |ui| {
                        for group in ALL_GROUPS {
                            ui.selectable_value(&mut self.selected_group, group, group.label());
                        }
                    });

                ui.label("Exercises:");
                ui.add(
                    egui::DragValue::new(&mut self.exercise_count).clamp_range(1..=MAX_SLOTS),
                );
            });
        });
    }

    fn info_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("info_panel").show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.client_name.trim().is_empty() {
                    ui.label("No client name set");
                } else {
                    ui.label(format!("Client: {}", self.client_name));
                }

                ui.separator();
                ui.heading("Week");
                for day in ALL_DAYS {
                    let count = self.plan.day(day).len();
                    let mark = if count > 0 { "\u{2714}" } else { "\u{2022}" };
                    ui.label(format!("{mark} {}: {count} exercises", day.label()));
                }

                ui.separator();
                if self.plan.is_complete() {
                    ui.label("All workouts saved! You can export the plan now.");
                } else {
                    let missing: Vec<&str> = self
                        .plan
                        .missing_days()
                        .into_iter()
                        .map(|d| d.label())
                        .collect();
                    ui.label(format!("Missing days: {}", missing.join(", ")));
                }

                if self.stats.total_exercises > 0 {
                    ui.separator();
                    ui.heading("Plan Stats");
                    ui.label(format!("Total exercises: {}", self.stats.total_exercises));
                    ui.label(format!("Total sets: {}", self.stats.total_sets));
                    ui.label(format!(
                        "Avg sets/exercise: {:.1}",
                        self.stats.avg_sets_per_exercise
                    ));
                    if let Some(day) = self.stats.busiest_day {
                        ui.label(format!("Busiest day: {}", day.label()));
                    }
                }
            });
        });
    }

    fn slot_editor(&mut self, ui: &mut egui::Ui) {
        let exercises = catalog::exercises_for(self.selected_group);
        let filter = self.picker_filter.to_lowercase();
        let filtered: Vec<&String> = exercises
            .iter()
            .filter(|e| filter.is_empty() || e.to_lowercase().contains(&filter))
            .collect();

        ui.horizontal(|ui| {
            ui.label("Filter exercises:");
            ui.text_edit_singleline(&mut self.picker_filter);
        });
        if filtered.is_empty() {
            if let Some(suggestion) = catalog::closest_match(self.selected_group, &self.picker_filter)
            {
                ui.label(format!("No match, did you mean {suggestion}?"));
            } else {
                ui.label("No matching exercises");
            }
        }

        for (i, slot) in self.slots.iter_mut().enumerate() {
            ui.separator();
            ui.label(egui::RichText::new(format!("Exercise {}", i + 1)).strong());

            egui::ComboBox::from_id_source(("exercise_combo", i))
                .selected_text(if slot.name.is_empty() {
                    "Select exercise"
                } else {
                    slot.name.as_str()
                })
                .show_ui(ui, |ui| {
                    for name in &filtered {
                        ui.selectable_value(&mut slot.name, (*name).clone(), name.as_str());
                    }
                });

            ui.horizontal(|ui| {
                ui.label("Sets:");
                for n in MIN_SETS..=MAX_SETS {
                    ui.radio_value(&mut slot.sets, n, n.to_string());
                }
            });
            ui.horizontal(|ui| {
                ui.label("Reps:");
                ui.text_edit_singleline(&mut slot.reps);
                ui.label("Weight (kg):");
                ui.text_edit_singleline(&mut slot.weights);
            });
            ui.label("Notes (optional):");
            ui.text_edit_multiline(&mut slot.notes);
        }
    }

    fn saved_table(&self, ui: &mut egui::Ui) {
        let saved = self.plan.day(self.selected_day);
        ui.heading(format!(
            "Saved Exercises for {}",
            self.selected_day.label()
        ));
        if saved.is_empty() {
            ui.label("Nothing saved for this day yet");
            return;
        }
        let row_height = ui.text_style_height(&egui::TextStyle::Body);
        egui_extras::TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .column(egui_extras::Column::auto())
            .column(egui_extras::Column::auto())
            .column(egui_extras::Column::remainder())
            .header(row_height, |mut header| {
                header.col(|ui| {
                    ui.label("#");
                });
                header.col(|ui| {
                    ui.label("Exercise");
                });
                header.col(|ui| {
                    ui.label("Notes");
                });
            })
            .body(|mut body| {
                for (idx, record) in saved.iter().enumerate() {
                    body.row(row_height, |mut row| {
                        row.col(|ui| {
                            ui.label((idx + 1).to_string());
                        });
                        row.col(|ui| {
                            ui.label(record.summary_line());
                        });
                        row.col(|ui| {
                            if !record.notes.is_empty() {
                                ui.label(egui::RichText::new(&record.notes).italics());
                            }
                        });
                    });
                }
            });
    }

    fn settings_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings;
        egui::Window::new("Settings")
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Default sets for new slots:");
                    let prev = self.settings.default_sets;
                    for n in MIN_SETS..=MAX_SETS {
                        ui.radio_value(&mut self.settings.default_sets, n, n.to_string());
                    }
                    if prev != self.settings.default_sets {
                        self.settings_dirty = true;
                    }
                });
                if ui
                    .checkbox(
                        &mut self.settings.auto_open_report,
                        "Open report after export",
                    )
                    .changed()
                {
                    self.settings_dirty = true;
                }
                if ui
                    .checkbox(&mut self.settings.show_saved_table, "Show saved exercises")
                    .changed()
                {
                    self.settings_dirty = true;
                }
                if let Some(ref dir) = self.settings.last_export_dir {
                    ui.label(format!("Export directory: {dir}"));
                    if ui.button("Forget export directory").clicked() {
                        self.settings.last_export_dir = None;
                        self.settings_dirty = true;
                    }
                }
            });
        self.show_settings = open;
    }

    fn custom_exercises_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_custom;
        egui::Window::new("Custom Exercises")
            .open(&mut open)
            .vscroll(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Group:");
                    egui::ComboBox::from_id_source("custom_group_combo")
                        .selected_text(self.custom_group.label())
                        .show_ui(ui, |ui| {
                            for group in ALL_GROUPS {
                                ui.selectable_value(&mut self.custom_group, group, group.label());
                            }
                        });
                });
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.custom_name);
                    if ui.button("Add").clicked() && !self.custom_name.trim().is_empty() {
                        custom_exercises::add(self.custom_group.label(), &self.custom_name);
                        self.custom_name.clear();
                        self.custom_dirty = true;
                    }
                });

                ui.separator();
                let names = custom_exercises::for_group(self.custom_group.label());
                if names.is_empty() {
                    ui.label("No custom exercises for this group");
                }
                for name in names {
                    ui.horizontal(|ui| {
                        ui.label(&name);
                        if ui.button("Remove").clicked() {
                            custom_exercises::remove(self.custom_group.label(), &name);
                            self.custom_dirty = true;
                        }
                    });
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Export").clicked() {
                        if let Some(path) =
                            FileDialog::new().add_filter("JSON", &["json"]).save_file()
                        {
                            if let Err(e) = custom_exercises::export_all(&path) {
                                log::error!("Failed to export custom exercises: {e}");
                            }
                        }
                    }
                    if ui.button("Import").clicked() {
                        if let Some(path) =
                            FileDialog::new().add_filter("JSON", &["json"]).pick_file()
                        {
                            if let Err(e) = custom_exercises::import_all(&path) {
                                log::error!("Failed to import custom exercises: {e}");
                            } else {
                                self.custom_dirty = true;
                            }
                        }
                    }
                });
            });
        self.show_custom = open;
    }

    fn overview_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_overview;
        egui::Window::new("Weekly Overview")
            .open(&mut open)
            .show(ctx, |ui| {
                if self.plan.total_exercises() == 0 {
                    ui.label("Save a day to see the weekly overview");
                } else {
                    Plot::new("weekly_overview")
                        .height(220.0)
                        .show(ui, |plot_ui| {
                            plot_ui.bar_chart(planned_sets_bar(&self.plan));
                            plot_ui.bar_chart(planned_exercises_bar(&self.plan));
                        });
                    ui.label("0 = Monday through 5 = Saturday");
                }
            });
        if open != self.show_overview {
            self.show_overview = open;
            self.settings.show_overview = open;
            self.settings_dirty = true;
        }
    }

    fn about_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_about;
        egui::Window::new("Usage Tips")
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Pick a day and muscle group, fill in the exercise slots and save the day.");
                ui.label("A day saves only the slots with a selected exercise.");
                ui.label("Once all six days have at least one exercise, export the plan from the File menu or the button below the editor.");
                ui.label("Add your own exercises under File > Custom Exercises.");
            });
        self.show_about = open;
    }
}

impl App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        resize_slots(
            &mut self.slots,
            self.exercise_count,
            self.settings.default_sets,
        );

        self.menu_bar(ctx);
        self.control_bar(ctx);
        self.info_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("Workout Plan for {}", self.selected_day.label()));
            ui.label(format!("Muscle Group: {}", self.selected_group.label()));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.slot_editor(ui);

                ui.separator();
                if ui
                    .button(format!("Save {} Workout", self.selected_day.label()))
                    .clicked()
                {
                    let message = self.save_current_day();
                    self.show_toast(message);
                }

                if self.settings.show_saved_table {
                    ui.separator();
                    self.saved_table(ui);
                }

                if self.plan.is_complete() {
                    ui.separator();
                    ui.label("All workouts saved! You can export the plan now.");
                    if ui.button("Export Weekly Plan").clicked() {
                        self.export_report_dialog();
                    }
                }
            });
        });

        if self.show_settings {
            self.settings_window(ctx);
        }
        if self.show_custom {
            self.custom_exercises_window(ctx);
        }
        if self.show_overview {
            self.overview_window(ctx);
        }
        if self.show_about {
            self.about_window(ctx);
        }

        if let Some(start) = self.toast_start {
            if start.elapsed() < Duration::from_secs(3) {
                if let Some(ref msg) = self.toast_message {
                    egui::Area::new(egui::Id::new("save_toast"))
                        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
                        .show(ctx, |ui| {
                            ui.label(msg);
                        });
                }
            } else {
                self.toast_start = None;
                self.toast_message = None;
            }
        }

        if self.settings_dirty {
            self.settings.save();
            self.settings_dirty = false;
        }
        if self.custom_dirty {
            custom_exercises::save();
            self.custom_dirty = false;
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.save();
        custom_exercises::save();
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let options = NativeOptions::default();
    eframe::run_native(
        "Workout Plan Builder",
        options,
        Box::new(|_cc| Box::new(PlannerApp::default())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn named(name: &str, sets: u8) -> ExerciseRecord {
        ExerciseRecord {
            name: name.into(),
            sets,
            reps: "10".into(),
            weights: "50".into(),
            ..ExerciseRecord::default()
        }
    }

    #[test]
    fn settings_roundtrip() {
        let mut s = Settings::default();
        s.default_sets = 3;
        s.auto_open_report = true;
        s.show_overview = true;
        s.show_saved_table = false;
        s.last_export_dir = Some("/tmp/plans".into());

        let json = serde_json::to_string(&s).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, loaded);
    }

    #[test]
    fn settings_missing_fields_default() {
        let loaded: Settings = serde_json::from_str("{\"last_export_dir\":null}").unwrap();
        assert_eq!(loaded.default_sets, MIN_SETS);
        assert!(!loaded.auto_open_report);
        assert!(loaded.show_saved_table);
    }

    #[test]
    fn settings_persistence() {
        use std::env;
        use std::fs;

        let _guard = ENV_MUTEX.lock().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let prev_config = env::var_os("XDG_CONFIG_HOME");
        unsafe {
            env::set_var("XDG_CONFIG_HOME", dir.path());
        }

        let mut s = Settings::default();
        s.auto_open_report = true;
        s.save();
        let loaded = Settings::load();
        assert!(loaded.auto_open_report);

        let path = Settings::path().unwrap();
        fs::write(&path, "{}").unwrap();
        let missing = Settings::load();
        assert!(!missing.auto_open_report);
        assert!(missing.show_saved_table);

        if let Some(val) = prev_config {
            unsafe {
                env::set_var("XDG_CONFIG_HOME", val);
            }
        } else {
            unsafe {
                env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[test]
    fn save_current_day_stores_named_slots() {
        let _guard = ENV_MUTEX.lock().unwrap();

        let mut app = PlannerApp::default();
        app.selected_day = Weekday::Wednesday;
        app.slots = vec![
            named("Squats", 3),
            ExerciseRecord::default(),
            named("Leg Press", 4),
        ];

        let message = app.save_current_day();
        assert_eq!(message, "Wednesday workout saved with 2 exercises");

        let saved = app.plan.day(Weekday::Wednesday);
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].name, "Squats");
        assert_eq!(saved[1].name, "Leg Press");
        assert_eq!(app.stats.total_exercises, 2);
        assert_eq!(app.stats.total_sets, 7);
    }

    #[test]
    fn saving_all_days_completes_plan() {
        let _guard = ENV_MUTEX.lock().unwrap();

        let mut app = PlannerApp::default();
        for day in ALL_DAYS {
            app.selected_day = day;
            app.slots = vec![named("Bench Press", 3)];
            app.save_current_day();
            if day != Weekday::Saturday {
                assert!(!app.plan.is_complete());
            }
        }
        assert!(app.plan.is_complete());
        assert_eq!(app.stats.total_exercises, 6);
    }

    #[test]
    fn slot_count_adjusts_editor() {
        let _guard = ENV_MUTEX.lock().unwrap();

        let mut app = PlannerApp::default();
        assert_eq!(app.slots.len(), 1);

        app.exercise_count = 4;
        resize_slots(
            &mut app.slots,
            app.exercise_count,
            app.settings.default_sets,
        );
        assert_eq!(app.slots.len(), 4);

        app.slots[0].name = "Deadlifts".into();
        app.exercise_count = 2;
        resize_slots(
            &mut app.slots,
            app.exercise_count,
            app.settings.default_sets,
        );
        assert_eq!(app.slots.len(), 2);
        assert_eq!(app.slots[0].name, "Deadlifts");
    }

    #[test]
    fn default_day_comes_from_today() {
        let _guard = ENV_MUTEX.lock().unwrap();

        let app = PlannerApp::default();
        let expected = Weekday::from_chrono(Local::now().weekday());
        assert_eq!(app.selected_day, expected);
    }
}
