use tempfile::TempDir;

use wikirag_client::modules::bookmarks::{BookmarkStore, OTHER_QUESTION};
use wikirag_client::modules::chat::{KnowledgeCard, Message};
use wikirag_client::util::database::Database;

fn osmosis() -> KnowledgeCard {
    KnowledgeCard::new("Osmosis", "https://en.wikipedia.org/wiki/Osmosis")
}

fn diffusion() -> KnowledgeCard {
    KnowledgeCard::new("Diffusion", "https://en.wikipedia.org/wiki/Diffusion")
}

fn conversation() -> Vec<Message> {
    vec![
        Message::greeting(),
        Message::user("What is osmosis?"),
        Message::assistant("Water crossing a membrane.", vec![osmosis()]),
        Message::user("And diffusion?"),
        Message::assistant("Particles spreading out.", vec![diffusion()]),
    ]
}

#[test]
fn test_toggle_twice_restores_store() {
    let mut store = BookmarkStore::load(Database::open_in_memory().unwrap()).unwrap();
    let messages = conversation();

    assert!(store.toggle(&osmosis(), &messages).unwrap());
    assert!(store.is_bookmarked(&osmosis()));
    assert_eq!(store.bookmarks()[0].question, "What is osmosis?");

    assert!(!store.toggle(&osmosis(), &messages).unwrap());
    assert!(store.is_empty());
}

#[test]
fn test_cards_with_same_summary_and_source_are_one_bookmark() {
    let mut store = BookmarkStore::load(Database::open_in_memory().unwrap()).unwrap();
    let messages = conversation();

    let mut with_id = osmosis();
    with_id.id = Some("card-1".to_string());

    store.toggle(&osmosis(), &messages).unwrap();
    assert!(store.is_bookmarked(&with_id));
    assert!(!store.toggle(&with_id, &messages).unwrap());
    assert_eq!(store.len(), 0);
}

#[test]
fn test_groups_ordered_by_latest_bookmark() {
    let mut store = BookmarkStore::load(Database::open_in_memory().unwrap()).unwrap();
    let messages = conversation();
    let stray = KnowledgeCard::new("Stray", "https://en.wikipedia.org/wiki/Stray");

    store.toggle_at(&osmosis(), &messages, 100).unwrap();
    store.toggle_at(&diffusion(), &messages, 200).unwrap();
    store.toggle_at(&stray, &messages, 150).unwrap();

    let groups = store.grouped();
    let labels: Vec<&str> = groups.iter().map(|g| g.question.as_str()).collect();
    assert_eq!(labels, vec!["And diffusion?", OTHER_QUESTION, "What is osmosis?"]);

    let latest: Vec<i64> = groups.iter().map(|g| g.latest_timestamp()).collect();
    assert!(latest.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_bookmarks_survive_reload() {
    let dir = TempDir::new().unwrap();
    let messages = conversation();

    {
        let mut store = BookmarkStore::load(Database::open(dir.path()).unwrap()).unwrap();
        store.toggle_at(&osmosis(), &messages, 42).unwrap();
    }

    let store = BookmarkStore::load(Database::open(dir.path()).unwrap()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.bookmarks()[0].timestamp, 42);
    assert_eq!(store.bookmarks()[0].question, "What is osmosis?");
}

#[test]
fn test_malformed_storage_loads_empty() {
    let database = Database::open_in_memory().unwrap();
    database.set_item("bookmarks", "not json").unwrap();

    let store = BookmarkStore::load(database).unwrap();
    assert!(store.is_empty());
}
