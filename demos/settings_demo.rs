use easyargs::SettingsStore;

fn main() {
    let settings = match SettingsStore::parse_env() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Parse error: {error}");
            std::process::exit(1);
        }
    };

    if let Err(error) = settings.assert_or(["b", "f"], "something's missing") {
        eprintln!("Assertion failed: {error}");
        std::process::exit(1);
    }

    let mut entries: Vec<_> = settings.iter().collect();
    entries.sort_by_key(|(key, _)| *key);

    for (key, setting) in entries {
        println!("{key}: {}", setting.value().unwrap_or("<flag>"));
    }

    if let Ok(Some(fallback)) = settings.value_of(["x", "y", "z"], Some("missing")) {
        println!("fallback: {fallback}");
    }
}
