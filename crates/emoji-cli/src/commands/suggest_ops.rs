use std::sync::Arc;

use serde::Serialize;

use emoji_core::candidates::Suggestion;
use emoji_core::dict::Dictionary;
use emoji_input::{EmojiInput, SessionConfig};

use super::{load_dict, load_settings};
use crate::render;

#[derive(Debug, Serialize)]
pub struct SuggestReport {
    pub term: String,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Serialize)]
pub struct ExpandReport {
    pub input: String,
    pub output: String,
    pub caret: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed: Option<Suggestion>,
}

/// Run the matcher for `term`. A leading sentinel is ignored so both `smi`
/// and `:smi` work on the command line.
pub fn suggest_report(dict: &dyn Dictionary, sentinel: char, term: &str, max: usize) -> SuggestReport {
    let term = term.strip_prefix(sentinel).unwrap_or(term);
    SuggestReport {
        term: term.to_string(),
        suggestions: dict.search(term, max),
    }
}

pub fn format_suggestions(report: &SuggestReport) -> String {
    if report.suggestions.is_empty() {
        return format!("no matches for '{}'\n", report.term);
    }
    let rows: Vec<Vec<String>> = report
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| {
            vec![
                format!("{}.", i + 1),
                s.value.clone(),
                s.keyword.clone(),
                format!("@{}", s.match_rank),
            ]
        })
        .collect();
    render::table(&rows)
}

/// Put `text` in a field with the caret at `caret` (end of text when
/// omitted) and commit suggestion `pick` if a session opens.
pub fn expand_text(input: &mut EmojiInput, text: &str, caret: Option<usize>, pick: usize) -> ExpandReport {
    let caret = caret.unwrap_or(usize::MAX);
    input.set_text(text, caret);
    let committed = input.session().suggestions().get(pick).cloned();
    if committed.is_some() {
        input.choose_suggestion(pick);
    }
    ExpandReport {
        input: text.to_string(),
        output: input.text().to_string(),
        caret: input.caret(),
        committed,
    }
}

pub fn suggest(
    term: &str,
    dict_path: Option<&str>,
    settings_path: Option<&str>,
    max: Option<usize>,
    json: bool,
) {
    let settings = die!(load_settings(settings_path));
    let dict = die!(load_dict(dict_path));
    let max = max.unwrap_or(settings.suggestions.max_results);
    let report = suggest_report(&dict, settings.sentinel(), term, max);
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&report)));
    } else {
        print!("{}", format_suggestions(&report));
    }
}

pub fn expand(
    text: &str,
    caret: Option<usize>,
    pick: usize,
    dict_path: Option<&str>,
    settings_path: Option<&str>,
    json: bool,
) {
    let settings = die!(load_settings(settings_path));
    let dict = die!(load_dict(dict_path));
    let mut input = EmojiInput::new(Arc::new(dict), SessionConfig::from(&settings));
    let report = expand_text(&mut input, text, caret, pick);
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&report)));
        return;
    }
    match &report.committed {
        Some(s) => eprintln!("{} -> {}", s.keyword, s.value),
        None => eprintln!("no suggestion at caret"),
    }
    println!("{}", report.output);
}
