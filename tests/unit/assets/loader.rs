use std::path::PathBuf;

use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_loader").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn reads_image_and_manifest() {
    let root = scratch("ok");
    let map_dir = root.join("plains");
    std::fs::create_dir_all(&map_dir).unwrap();
    std::fs::write(map_dir.join(IMAGE_FILE), b"\x89PNG-ish").unwrap();
    std::fs::write(map_dir.join(INFO_FILE), br#"{"author":"x","size":3}"#).unwrap();

    let assets = load_map_assets(&root, "plains").unwrap();
    assert_eq!(assets.image_bytes, b"\x89PNG-ish");
    assert_eq!(assets.manifest["author"], "x");
    assert_eq!(assets.manifest["size"], 3);
}

#[test]
fn missing_image_reports_exact_path() {
    let root = scratch("no_image");
    std::fs::create_dir_all(root.join("annecy")).unwrap();

    let err = load_map_assets(&root, "annecy").unwrap_err();
    assert_eq!(err.path(), Some(root.join("annecy").join(IMAGE_FILE).as_path()));
}

#[test]
fn missing_info_reports_exact_path() {
    let root = scratch("no_info");
    let map_dir = root.join("annecy");
    std::fs::create_dir_all(&map_dir).unwrap();
    std::fs::write(map_dir.join(IMAGE_FILE), b"img").unwrap();

    let err = load_map_assets(&root, "annecy").unwrap_err();
    assert!(matches!(err, MapGenError::Io { .. }));
    assert_eq!(err.path(), Some(map_dir.join(INFO_FILE).as_path()));
}

#[test]
fn malformed_info_is_a_parse_error_with_name() {
    let root = scratch("bad_json");
    let map_dir = root.join("paris");
    std::fs::create_dir_all(&map_dir).unwrap();
    std::fs::write(map_dir.join(IMAGE_FILE), b"img").unwrap();
    std::fs::write(map_dir.join(INFO_FILE), b"{not json").unwrap();

    match load_map_assets(&root, "paris").unwrap_err() {
        MapGenError::Parse { name, .. } => assert_eq!(name, "paris"),
        other => panic!("unexpected error: {other}"),
    }
}
