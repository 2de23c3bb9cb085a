use emoji_core::keymap::{KeyIntent, Keymap};
use emoji_core::settings::Settings;

use super::load_settings;

pub fn settings_export() {
    print!("{}", emoji_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let s = die!(load_settings(Some(file)));
    println!("OK: {}", settings_summary(&s));
}

pub fn settings_summary(s: &Settings) -> String {
    format!(
        "trigger.sentinel={:?}, suggestions.max_results={}, suggestions.use_keyword_as_value={}, \
         popup.top_offset={}, offsets.encoding={}, keymap: {}",
        s.sentinel(),
        s.suggestions.max_results,
        s.suggestions.use_keyword_as_value,
        s.popup.top_offset,
        s.offsets.encoding.name(),
        keymap_summary(s.keymap()),
    )
}

/// `next=ArrowDown previous=ArrowUp ...`, skipping unbound intents.
pub fn keymap_summary(map: &Keymap) -> String {
    KeyIntent::ALL
        .iter()
        .filter_map(|&intent| {
            let keys: Vec<String> = map.keys_for(intent).map(|k| k.to_string()).collect();
            (!keys.is_empty()).then(|| format!("{}={}", intent.name(), keys.join("+")))
        })
        .collect::<Vec<_>>()
        .join(" ")
}
