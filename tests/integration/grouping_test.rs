//! End-to-end grouping tests against a real artifact store.

use std::fs;

use artex::transcript::ChatLine;
use artex::{ArtifactStore, GroupingEngine};

fn chat(nick: &str, message: &str) -> String {
    format!("[21:0{}] <{nick}> {message}", nick.len() % 10)
}

fn decode(raw: &[String]) -> Vec<ChatLine> {
    raw.iter().map(|line| ChatLine::parse(line)).collect()
}

#[test]
fn collaborative_piece_lands_in_one_numbered_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("asciis");

    let raw = vec![
        chat("ana", "\x031,1▀▀▀▀▀▀"),
        chat("ana", "\x032,2▄▄▄▄▄▄"),
        chat("bea", "\x033,3██████"),
        chat("ana", "\x034,4▀▀▀▀▀▀"),
        chat("bea", "\x035,5▄▄▄▄▄▄"),
        chat("bea", "nice one"),
    ];

    let mut store = ArtifactStore::new(&out).unwrap();
    GroupingEngine::new()
        .run(&decode(&raw), &mut store)
        .unwrap();

    let content = fs::read_to_string(out.join("1")).unwrap();
    assert_eq!(content.lines().count(), 5);
    assert!(content.contains("\x033,3██████"));
    assert!(!out.join("2").exists());
}

#[test]
fn separate_bursts_become_separate_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("asciis");

    let mut raw = vec![chat("ana", "\x031first piece")];
    for i in 0..20 {
        raw.push(chat("lurker", &format!("chatter {i}")));
    }
    raw.push(chat("bea", "\x032second piece"));

    let mut store = ArtifactStore::new(&out).unwrap();
    GroupingEngine::new()
        .run(&decode(&raw), &mut store)
        .unwrap();

    assert_eq!(
        fs::read_to_string(out.join("1")).unwrap(),
        "\x031first piece\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("2")).unwrap(),
        "\x032second piece\n"
    );
}

#[test]
fn numbering_continues_from_existing_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("asciis");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("4"), "older art\n").unwrap();

    let raw = vec![chat("ana", "\x031new art")];
    let mut store = ArtifactStore::new(&out).unwrap();
    GroupingEngine::new()
        .run(&decode(&raw), &mut store)
        .unwrap();

    assert!(out.join("5").exists());
    assert_eq!(fs::read_to_string(out.join("4")).unwrap(), "older art\n");
}

#[test]
fn plain_conversation_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("asciis");

    let raw: Vec<String> = (0..40)
        .map(|i| chat("lurker", &format!("hello {i}")))
        .collect();

    let mut store = ArtifactStore::new(&out).unwrap();
    GroupingEngine::new()
        .run(&decode(&raw), &mut store)
        .unwrap();

    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}
