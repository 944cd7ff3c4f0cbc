use research_history_store::{HistoryEntry, HistoryRecord, HistoryStore};
use serde::Serialize;

const EMPTY_MESSAGE: &str = "No research topics found. Start researching a new topic!";

#[derive(Serialize)]
struct HistoryResponse<'a> {
    history: &'a [HistoryEntry],
}

/// Keep the last `limit` entries, preserving order
fn most_recent(entries: &[HistoryEntry], limit: Option<usize>) -> &[HistoryEntry] {
    match limit {
        Some(n) if n < entries.len() => &entries[entries.len() - n..],
        _ => entries,
    }
}

fn display_date(record: &HistoryRecord) -> String {
    record
        .recorded_at()
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| record.timestamp.clone())
}

fn render_list(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut lines = vec![
        "Research History".to_string(),
        "================".to_string(),
    ];
    for entry in entries {
        match entry {
            HistoryEntry::Record(record) => {
                lines.push(format!(
                    "{}: {} [{}]",
                    display_date(record),
                    record.topic,
                    record.id
                ));
                if !record.summary.is_empty() {
                    lines.push(format!("    {}", record.summary));
                }
            }
            HistoryEntry::Other(_) => match entry.id() {
                Some(id) => lines.push(format!("<unrecognised entry> [{}]", id)),
                None => lines.push("<unrecognised entry>".to_string()),
            },
        }
    }
    lines.join("\n")
}

pub fn run(store: &HistoryStore, limit: Option<usize>, json: bool) -> anyhow::Result<()> {
    let entries = store.get_all()?;
    let shown = most_recent(&entries, limit);

    if json {
        let response = HistoryResponse { history: shown };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", render_list(shown));
    }
    Ok(())
}
