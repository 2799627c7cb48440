use super::*;

#[test]
fn empty_set_excludes_nothing() {
    let set = ExclusionSet::new();
    for name in ["a.txt", "", ".hidden", "natlist"] {
        assert!(!set.is_excluded(name, false), "{name:?} should be kept");
        assert!(!set.is_excluded(name, true), "{name:?} should be kept");
    }
}

#[test]
fn exact_names_are_excluded() {
    let set = ExclusionSet::new()
        .with_name("natlist.exe")
        .with_name("notes.txt");

    assert!(set.is_excluded("natlist.exe", false));
    assert!(set.is_excluded("notes.txt", true));
    assert!(!set.is_excluded("notes.txt.bak", false));
    assert!(!set.is_excluded("Notes.txt", false), "names match exactly");
}

#[test]
fn glob_patterns_follow_gitignore_rules() {
    let mut set = ExclusionSet::new();
    set.add_pattern("*.tmp").expect("valid pattern");
    set.add_pattern("cache/").expect("valid pattern");
    set.add_pattern("!keep.tmp").expect("valid pattern");

    let cases = [
        ("scratch.tmp", false, true),
        ("keep.tmp", false, false),
        ("scratch.txt", false, false),
        ("cache", true, true),
        // Directory-only pattern does not hit a file of the same name.
        ("cache", false, false),
    ];

    for (name, is_dir, expected) in cases {
        assert_eq!(
            set.is_excluded(name, is_dir),
            expected,
            "is_excluded({name:?}, is_dir={is_dir})"
        );
    }
    assert_eq!(set.patterns().len(), 3);
}

#[test]
fn invalid_pattern_is_rejected_and_set_unchanged() {
    let mut set = ExclusionSet::new();
    set.add_pattern("*.log").expect("valid pattern");

    for bad in ["{a", "a\\", "[z-a]"] {
        assert!(set.add_pattern(bad).is_err(), "{bad:?} should be rejected");
    }
    assert_eq!(set.patterns(), ["*.log".to_owned()]);
    assert!(set.is_excluded("x.log", false));
}

#[test]
fn program_defaults_cover_output_file_and_executable() {
    let set = ExclusionSet::with_program_defaults();
    assert!(set.is_excluded(OUTPUT_FILE_NAME, false));

    let exe = own_executable_name().expect("test binary has a name");
    assert!(set.is_excluded(&exe, false));
    assert_eq!(set.names().count(), 2);
}
