use research_history_store::{HistoryEntry, HistoryRecord, HistoryStore};

fn render_record(record: &HistoryRecord) -> anyhow::Result<String> {
    let when = record
        .recorded_at()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| record.timestamp.clone());

    let mut lines = vec![
        record.topic.clone(),
        "=".repeat(record.topic.chars().count().max(1)),
        when,
    ];
    if !record.summary.is_empty() {
        lines.push(String::new());
        lines.push(record.summary.clone());
    }
    if !record.content.is_empty() {
        lines.push(String::new());
        lines.push("Research Details".to_string());
        lines.push("----------------".to_string());
        lines.push(serde_json::to_string_pretty(&record.content)?);
    }
    Ok(lines.join("\n"))
}

fn render_entry(entry: &HistoryEntry) -> anyhow::Result<String> {
    match entry {
        HistoryEntry::Record(record) => render_record(record),
        HistoryEntry::Other(value) => Ok(serde_json::to_string_pretty(value)?),
    }
}

pub fn run(store: &HistoryStore, id: &str, json: bool) -> anyhow::Result<()> {
    let Some(entry) = store.get(id)? else {
        anyhow::bail!("Research topic not found: {}", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        println!("{}", render_entry(&entry)?);
    }
    Ok(())
}
