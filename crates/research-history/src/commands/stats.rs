use research_history_store::{HistoryStore, Loaded, StoreConfig};
use std::path::Path;

fn compute_stats(path: &Path, loaded: &Loaded) -> String {
    let mut lines = vec![format!("History file: {}", path.display())];

    if let Some(corruption) = &loaded.corruption {
        lines.push(format!("File ignored ({}); next add will overwrite it", corruption));
    }
    if loaded.non_finite > 0 {
        lines.push(format!(
            "Non-finite numbers read as null: {} (rewritten as null on next add)",
            loaded.non_finite
        ));
    }

    if loaded.entries.is_empty() {
        lines.push("No research topics recorded.".to_string());
        return lines.join("\n");
    }

    let records: Vec<_> = loaded
        .entries
        .iter()
        .filter_map(|e| e.as_record())
        .collect();
    let with_details = records.iter().filter(|r| !r.content.is_empty()).count();

    lines.push(format!("Total entries: {}", loaded.entries.len()));
    lines.push(format!("Records: {}", records.len()));
    lines.push(format!(
        "Unrecognised entries: {}",
        loaded.entries.len() - records.len()
    ));
    lines.push(format!("With details: {}", with_details));
    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        lines.push(format!("First recorded: {}", first.timestamp));
        lines.push(format!("Last recorded: {}", last.timestamp));
    }
    lines.join("\n")
}

pub fn run(store: &HistoryStore, config: &StoreConfig) -> anyhow::Result<()> {
    let loaded = store.load_checked()?;
    let path = config.resolved_path()?;
    println!("{}", compute_stats(&path, &loaded));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use research_history_store::{Corruption, HistoryEntry};
    use serde_json::json;

    #[test]
    fn test_stats_empty() {
        let stats = compute_stats(Path::new("/tmp/history.json"), &Loaded::default());
        assert!(stats.contains("History file: /tmp/history.json"));
        assert!(stats.contains("No research topics recorded."));
    }

    #[test]
    fn test_stats_reports_corruption() {
        let loaded = Loaded {
            entries: Vec::new(),
            corruption: Some(Corruption::NotAnArray { found: "object" }),
            ..Default::default()
        };
        let stats = compute_stats(Path::new("history.json"), &loaded);
        assert!(stats.contains("expected a JSON array, found object"));
    }

    #[test]
    fn test_stats_reports_non_finite() {
        let loaded = Loaded {
            non_finite: 2,
            ..Default::default()
        };
        let stats = compute_stats(Path::new("history.json"), &loaded);
        assert!(stats.contains("Non-finite numbers read as null: 2"));
    }

    #[test]
    fn test_stats_counts() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = HistoryStore::new(temp.path().join("history.json"));
        let mut content = research_history_store::Content::new();
        content.insert("score".to_string(), json!(5));
        store.add("first", "", Some(content)).unwrap();
        store.add("second", "", None).unwrap();

        let mut entries = store.get_all().unwrap();
        entries.push(HistoryEntry::from(json!(["not", "a", "record"])));
        store.save(&entries).unwrap();

        let loaded = store.load_checked().unwrap();
        let stats = compute_stats(store.path(), &loaded);
        assert!(stats.contains("Total entries: 3"));
        assert!(stats.contains("Records: 2"));
        assert!(stats.contains("Unrecognised entries: 1"));
        assert!(stats.contains("With details: 1"));
        assert!(stats.contains("First recorded: "));
    }
}
