use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use dirs_next as dirs;

static CUSTOM: Lazy<Mutex<HashMap<String, Vec<String>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Serializes tests that touch the shared store.
#[cfg(test)]
pub(crate) static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

const FILE: &str = "custom_exercises.json";

fn path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|p| p.join(FILE))
}

/// Load the user's custom exercise names from the config directory.
///
/// A missing or unreadable file leaves the store empty.
pub fn load() {
    if let Some(p) = path() {
        if let Ok(data) = std::fs::read_to_string(&p) {
            if let Ok(map) = serde_json::from_str::<HashMap<String, Vec<String>>>(&data) {
                *CUSTOM.lock().unwrap() = map;
            }
        }
    }
}

pub fn save() {
    if let Some(p) = path() {
        if let Some(parent) = p.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(data) = serde_json::to_string_pretty(&*CUSTOM.lock().unwrap()) {
            let _ = std::fs::write(p, data);
        }
    }
}

/// Custom names for one muscle group, in insertion order.
pub fn for_group(group: &str) -> Vec<String> {
    CUSTOM
        .lock()
        .unwrap()
        .get(group)
        .cloned()
        .unwrap_or_default()
}

/// Add a name to a group, ignoring blank and duplicate entries.
pub fn add(group: &str, name: &str) {
    let name = name.trim();
    if name.is_empty() {
        return;
    }
    let mut map = CUSTOM.lock().unwrap();
    let names = map.entry(group.to_string()).or_default();
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

pub fn remove(group: &str, name: &str) {
    let mut map = CUSTOM.lock().unwrap();
    if let Some(names) = map.get_mut(group) {
        names.retain(|n| n != name);
        if names.is_empty() {
            map.remove(group);
        }
    }
}

pub fn all() -> HashMap<String, Vec<String>> {
    CUSTOM.lock().unwrap().clone()
}

pub fn export_all<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let map = all();
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    let data =
        serde_json::to_string_pretty(&map).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    std::fs::write(path, data)
}

pub fn import_all<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let data = std::fs::read_to_string(path)?;
    let map: HashMap<String, Vec<String>> =
        serde_json::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    *CUSTOM.lock().unwrap() = map;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn add_ignores_blank_and_duplicate_names() {
        let _guard = TEST_LOCK.lock().unwrap();

        add("Shoulder", "  ");
        assert!(for_group("Shoulder").is_empty());

        add("Shoulder", "Cuban Press");
        add("Shoulder", "Cuban Press");
        assert_eq!(for_group("Shoulder"), vec!["Cuban Press".to_string()]);

        remove("Shoulder", "Cuban Press");
        assert!(for_group("Shoulder").is_empty());
    }

    #[test]
    fn import_replaces_store() {
        let _guard = TEST_LOCK.lock().unwrap();

        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "{}",
            serde_json::json!({"Bicep": ["Zottman Curls", "Drag Curls"]})
        )
        .unwrap();

        import_all(file.path()).expect("import should succeed");

        let names = for_group("Bicep");
        assert_eq!(names, vec!["Zottman Curls".to_string(), "Drag Curls".to_string()]);

        remove("Bicep", "Zottman Curls");
        remove("Bicep", "Drag Curls");
    }

    #[test]
    fn export_roundtrip() {
        let _guard = TEST_LOCK.lock().unwrap();

        add("Tricep", "JM Press");
        let file = NamedTempFile::new().unwrap();
        export_all(file.path()).expect("export should succeed");

        let data = std::fs::read_to_string(file.path()).unwrap();
        let map: HashMap<String, Vec<String>> = serde_json::from_str(&data).unwrap();
        assert!(map.get("Tricep").unwrap().contains(&"JM Press".to_string()));

        remove("Tricep", "JM Press");
    }
}
