//! Extraction pipeline tests: file loading through artifact storage.

use std::fs;
use std::io::Write;

use artex::files::load_lines;
use artex::transcript::ChatLine;
use artex::{ArtifactStore, GroupingEngine};

#[test]
fn undecodable_lines_are_dropped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("log.txt");
    let mut file = fs::File::create(&log).unwrap();
    file.write_all(b"[00:01] <ana> \x031,1\xc3\x28 bad utf8\n").unwrap();
    file.write_all(b"[00:01] <ana> \x031,1good art\n").unwrap();
    drop(file);

    let lines = load_lines(&log).unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("good art"));
}

#[test]
fn end_to_end_extraction_from_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("channel.log");
    let out = dir.path().join("asciis");

    let mut content = String::new();
    content.push_str("[20:14] *** ana has joined #art\n");
    content.push_str("[20:15] <ana> check this out\n");
    content.push_str("[20:15] <ana> \x031,1▄▄▄▄▄▄▄▄\n");
    content.push_str("[20:15] <ana> \x039,13▀▀▀▀▀▀\n");
    content.push_str("[20:16] <bob> lol\n");
    fs::write(&log, content).unwrap();

    let lines: Vec<ChatLine> = load_lines(&log)
        .unwrap()
        .iter()
        .map(|raw| ChatLine::parse(raw))
        .collect();
    let mut store = ArtifactStore::new(&out).unwrap();
    GroupingEngine::new().run(&lines, &mut store).unwrap();

    let artifact = fs::read_to_string(out.join("1")).unwrap();
    assert_eq!(artifact, "\x031,1▄▄▄▄▄▄▄▄\n\x039,13▀▀▀▀▀▀\n");
}

#[test]
fn server_lines_never_contribute_art() {
    // Color bytes in a server notice are not a message body and must not
    // open an artifact.
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("channel.log");
    let out = dir.path().join("asciis");

    fs::write(&log, "[20:14] *** topic set to \x034fire\n").unwrap();

    let lines: Vec<ChatLine> = load_lines(&log)
        .unwrap()
        .iter()
        .map(|raw| ChatLine::parse(raw))
        .collect();
    let mut store = ArtifactStore::new(&out).unwrap();
    GroupingEngine::new().run(&lines, &mut store).unwrap();

    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}
