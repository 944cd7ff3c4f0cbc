use anyhow::Context;
use research_history_store::{Content, HistoryStore};
use serde_json::Value;

pub fn run(
    store: &HistoryStore,
    topic: &str,
    summary: &str,
    content: Option<&str>,
) -> anyhow::Result<()> {
    let content = content.map(parse_content).transpose()?;
    let id = store.add(topic, summary, content)?;
    tracing::info!(%id, topic, "recorded research topic");
    println!("{}", id);
    Ok(())
}

fn parse_content(raw: &str) -> anyhow::Result<Content> {
    let value: Value = serde_json::from_str(raw).context("--content is not valid JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("--content must be a JSON object, got: {}", raw.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_object() {
        let content = parse_content(r#"{"score": 5, "tags": ["a"]}"#).unwrap();
        assert_eq!(content["score"], serde_json::json!(5));
        assert_eq!(content.len(), 2);
    }

    #[test]
    fn test_parse_content_rejects_non_object() {
        assert!(parse_content("[1, 2]").is_err());
        assert!(parse_content("\"text\"").is_err());
        assert!(parse_content("{oops").is_err());
    }

    #[test]
    fn test_run_appends_record() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = HistoryStore::new(temp.path().join("history.json"));

        run(&store, "LLM safety", "a survey", Some(r#"{"score": 5}"#)).unwrap();
        run(&store, "Compilers", "", None).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 2);
        let first = all[0].as_record().unwrap();
        assert_eq!(first.topic, "LLM safety");
        assert_eq!(first.content["score"], serde_json::json!(5));
        assert!(all[1].as_record().unwrap().content.is_empty());
    }

    #[test]
    fn test_run_bad_content_writes_nothing() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = HistoryStore::new(temp.path().join("history.json"));

        assert!(run(&store, "t", "", Some("42")).is_err());
        assert!(!store.path().exists());
    }
}
