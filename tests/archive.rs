use serde_json::json;
use std::time::Duration;
use tempfile::TempDir;

use wikirag_client::modules::archive::{export_markdown, ConversationArchive};
use wikirag_client::modules::chat::{KnowledgeCard, Message, Role};
use wikirag_client::util::api::BackendClient;
use wikirag_client::util::database::Database;

fn transcript() -> Vec<Message> {
    vec![
        Message::greeting(),
        Message::user("What is osmosis?"),
        Message::assistant(
            "Osmosis is the movement of water across a membrane.",
            vec![KnowledgeCard::new("Osmosis", "https://en.wikipedia.org/wiki/Osmosis")],
        ),
    ]
}

fn empty_archive() -> ConversationArchive {
    ConversationArchive::load(Database::open_in_memory().unwrap()).unwrap()
}

#[test]
fn test_save_strips_greeting_and_ids_increase() {
    let mut archive = empty_archive();

    let first_id = archive.save_at("First", &transcript(), None, 1_000).unwrap().id.clone();
    let second = archive.save_at("Second", &transcript(), None, 1_000).unwrap();

    assert_eq!(second.messages.len(), 2);
    assert_eq!(second.messages[0].role, Role::User);
    assert_eq!(first_id, "1000");
    assert_eq!(second.id, "1001");
    assert_eq!(second.timestamp, 1_001);

    let titles: Vec<&str> = archive.newest_first().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Second", "First"]);
}

#[test]
fn test_delete_keeps_remaining_order() {
    let mut archive = empty_archive();
    for (title, at) in [("a", 1), ("b", 2), ("c", 3)] {
        archive.save_at(title, &transcript(), None, at).unwrap();
    }

    assert!(archive.delete("2").unwrap());
    assert!(!archive.delete("2").unwrap());

    let titles: Vec<&str> = archive.conversations().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "c"]);
}

#[test]
fn test_archive_survives_reload() {
    let dir = TempDir::new().unwrap();
    {
        let mut archive = ConversationArchive::load(Database::open(dir.path()).unwrap()).unwrap();
        archive.save_at("Osmosis", &transcript(), None, 7).unwrap();
    }

    let archive = ConversationArchive::load(Database::open(dir.path()).unwrap()).unwrap();
    let saved = archive.get("7").unwrap();
    assert_eq!(saved.title, "Osmosis");
    assert_eq!(saved.messages[1].cards().len(), 1);
}

#[tokio::test]
async fn test_save_analyzed_attaches_analysis() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze")
        .match_body(mockito::Matcher::PartialJson(json!({
            "messages": [
                {"role": "user", "content": "What is osmosis?"},
                {"role": "assistant", "content": "Osmosis is the movement of water across a membrane."}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "overall_summary": "A short exchange about osmosis.",
                "metacognitive_insights": [
                    {"topic": "Membrane types", "card_id": "CARD_CONTEXT", "search_keywords": ["semipermeable"]}
                ],
                "external_verifications": [
                    {
                        "topic": "Reverse osmosis",
                        "summary": "Pressure can reverse the flow.",
                        "source": "https://en.wikipedia.org/wiki/Reverse_osmosis",
                        "follow_up_questions": ["How does reverse osmosis work?"]
                    }
                ],
                "analyzed_at": "2024-05-01T10:00:00",
                "message_count": 2
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = BackendClient::new(server.url(), Duration::from_secs(5)).unwrap();
    let mut archive = empty_archive();
    let saved = archive
        .save_analyzed(&client, "Osmosis", &transcript())
        .await
        .unwrap();

    mock.assert_async().await;
    let analysis = saved.analysis.as_ref().unwrap();
    assert_eq!(analysis.follow_up_questions(), vec!["How does reverse osmosis work?"]);
}

#[tokio::test]
async fn test_failed_analysis_still_saves() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/analyze")
        .with_status(500)
        .create_async()
        .await;

    let client = BackendClient::new(server.url(), Duration::from_secs(5)).unwrap();
    let mut archive = empty_archive();
    let saved = archive
        .save_analyzed(&client, "Osmosis", &transcript())
        .await
        .unwrap();

    assert!(saved.analysis.is_none());
    assert_eq!(archive.len(), 1);
}

#[test]
fn test_export_writes_markdown_file() {
    let dir = TempDir::new().unwrap();
    let mut archive = empty_archive();
    let saved = archive.save_at("Osmosis: basics?", &transcript(), None, 5).unwrap();

    let path = export_markdown(saved, dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), "Osmosis_ basics_.md");
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.starts_with("# Osmosis: basics?"));
    assert!(content.contains("### 👤 Question"));
    assert!(content.contains("What is osmosis?"));
}

#[test]
fn test_export_keeps_earlier_file_with_same_title() {
    let dir = TempDir::new().unwrap();
    let mut archive = empty_archive();
    archive.save_at("Osmosis", &transcript(), None, 1).unwrap();
    archive.save_at("Osmosis", &transcript()[..2], None, 2).unwrap();

    let first = export_markdown(archive.get("1").unwrap(), dir.path()).unwrap();
    let second = export_markdown(archive.get("2").unwrap(), dir.path()).unwrap();

    assert_eq!(first.file_name().unwrap(), "Osmosis.md");
    assert_eq!(second.file_name().unwrap(), "Osmosis (1).md");
    assert!(std::fs::read_to_string(&first).unwrap().contains("### 🤖 Answer"));
    assert!(!std::fs::read_to_string(&second).unwrap().contains("### 🤖 Answer"));
}
