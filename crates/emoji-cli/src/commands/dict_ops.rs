use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use emoji_core::dict::{Dictionary, SymbolDictionary};
use unicode_width::UnicodeWidthStr;

use super::load_dict;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DictStats {
    pub entries: usize,
    pub unique_keywords: usize,
    pub unique_values: usize,
    /// Keywords that appear more than once, with their count.
    pub duplicate_keywords: BTreeMap<String, usize>,
    pub longest_keyword: Option<String>,
    /// Values wider than two terminal cells (multi-symbol sequences, text).
    pub wide_values: usize,
}

pub fn dict_stats(dict: &SymbolDictionary) -> DictStats {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut values = HashSet::new();
    let mut longest: Option<&str> = None;
    let mut wide_values = 0;

    for e in dict.entries() {
        *counts.entry(e.keyword.as_str()).or_default() += 1;
        values.insert(e.value.as_str());
        if longest.map_or(true, |l| e.keyword.chars().count() > l.chars().count()) {
            longest = Some(&e.keyword);
        }
        if UnicodeWidthStr::width(e.value.as_str()) > 2 {
            wide_values += 1;
        }
    }

    DictStats {
        entries: dict.len(),
        unique_keywords: counts.len(),
        unique_values: values.len(),
        duplicate_keywords: counts
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(k, n)| (k.to_string(), n))
            .collect(),
        longest_keyword: longest.map(str::to_string),
        wide_values,
    }
}

pub fn info(file: Option<&str>, json: bool) {
    let dict = die!(load_dict(file));
    let stats = dict_stats(&dict);
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&stats)));
        return;
    }
    println!("source:          {}", file.unwrap_or("<built-in emoji>"));
    println!("entries:         {}", stats.entries);
    println!("unique keywords: {}", stats.unique_keywords);
    println!("unique values:   {}", stats.unique_values);
    println!("wide values:     {}", stats.wide_values);
    if let Some(k) = &stats.longest_keyword {
        println!("longest keyword: {k}");
    }
    for (k, n) in &stats.duplicate_keywords {
        println!("duplicate:       {k} (x{n})");
    }
}

pub fn validate(file: &str) {
    let dict = die!(load_dict(Some(file)));
    let stats = dict_stats(&dict);
    for (k, n) in &stats.duplicate_keywords {
        eprintln!("Warning: keyword '{k}' appears {n} times");
    }
    println!("OK: {} entries", stats.entries);
}
