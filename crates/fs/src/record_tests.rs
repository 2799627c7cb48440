use super::*;

#[test]
fn split_extension_cases() {
    let cases: &[(&str, &str, Option<&str>)] = &[
        ("file.txt", "file", Some("txt")),
        ("archive.tar.gz", "archive.tar", Some("gz")),
        ("noext", "noext", None),
        (".bashrc", ".bashrc", None),
        (".config.toml", ".config", Some("toml")),
        ("trailing.", "trailing", Some("")),
        ("Chapter 10.PNG", "Chapter 10", Some("PNG")),
        ("", "", None),
    ];

    for (name, stem, ext) in cases {
        assert_eq!(
            split_extension(name),
            (*stem, *ext),
            "split_extension({name:?})"
        );
    }
}

#[test]
fn split_extension_agrees_with_path_file_stem() {
    for name in ["a.b", "a.b.c", ".hidden", "plain", ".x.y", "trailing."] {
        let path = Path::new(name);
        let (stem, ext) = split_extension(name);
        assert_eq!(Some(stem), path.file_stem().and_then(|s| s.to_str()), "{name}");
        assert_eq!(ext, path.extension().and_then(|s| s.to_str()), "{name}");
    }
}

#[test]
fn record_paths_with_and_without_extension() {
    let root = Path::new("/data/scans");
    let rec = EntryRecord::new(root, "page10.jpg".to_owned(), false);

    assert_eq!(rec.full_path, root.join("page10.jpg"));
    assert_eq!(rec.stem, "page10");
    assert_eq!(rec.path_without_ext(), root.join("page10"));
}

#[test]
fn entry_kinds_admit_by_type() {
    assert!(EntryKinds::FILES.admits(false));
    assert!(!EntryKinds::FILES.admits(true));
    assert!(EntryKinds::DIRS.admits(true));
    assert!(!EntryKinds::DIRS.admits(false));

    let both = EntryKinds::FILES | EntryKinds::DIRS;
    assert!(both.admits(true) && both.admits(false));
    assert!(!EntryKinds::empty().admits(false));
}
