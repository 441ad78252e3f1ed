use dirpick_core::{
    DIR_MIMETYPE, Entry, EntryComparator, ListFilter, Listing, Selection, SortDirection,
    SortMode, SortOrder, sort_entries, tie_break,
};
use std::cmp::Ordering;
use std::path::Path;
use std::time::{Duration, UNIX_EPOCH};

fn at(secs: u64) -> std::time::SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

/// Mixed set with duplicate sizes, dates and case-only name differences.
fn mixed_entries() -> Vec<Entry> {
    vec![
        Entry::new_file("/root/readme.md", 300, at(50)),
        Entry::new_directory("/root/src", at(40)),
        Entry::new_file("/root/B.txt", 100, at(10)),
        Entry::new_file("/root/a.txt", 100, at(10)),
        Entry::new_directory("/root/Docs", at(70)),
        Entry::new_file("/root/b.txt", 20, at(90)),
        Entry::new_directory("/root/assets", at(40)),
        Entry::new_file("/root/photo.png", 4096, at(30)),
        Entry::new_file("/root/.hidden", 0, at(5)),
    ]
}

fn all_orders() -> Vec<SortOrder> {
    let mut orders = Vec::new();
    for mode in [SortMode::Name, SortMode::Size, SortMode::Date] {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            orders.push(SortOrder::new(mode, direction));
        }
    }
    orders
}

fn names(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_directories_always_first() {
    for order in all_orders() {
        let mut entries = mixed_entries();
        sort_entries(&mut entries, &order);

        let first_file = entries.iter().position(|e| !e.is_dir).unwrap();
        assert!(
            entries[first_file..].iter().all(|e| !e.is_dir),
            "directory after file with {order:?}"
        );
        assert_eq!(first_file, 3);
    }
}

#[test]
fn test_groups_are_totally_ordered() {
    for order in all_orders() {
        let mut entries = mixed_entries();
        sort_entries(&mut entries, &order);

        for pair in entries.windows(2) {
            if pair[0].is_dir != pair[1].is_dir {
                continue;
            }
            let cmp = order
                .compare(&pair[0], &pair[1])
                .then_with(|| tie_break(&pair[0], &pair[1]));
            assert_eq!(cmp, Ordering::Less, "{order:?}: {:?}", names(&entries));
        }
    }
}

#[test]
fn test_sort_is_independent_of_input_order() {
    for order in all_orders() {
        let mut forward = mixed_entries();
        let mut backward = mixed_entries();
        backward.reverse();

        sort_entries(&mut forward, &order);
        sort_entries(&mut backward, &order);
        assert_eq!(forward, backward);
    }
}

#[test]
fn test_equal_sizes_tie_break_ascending_by_name() {
    let mut entries = mixed_entries();
    sort_entries(
        &mut entries,
        &SortOrder::new(SortMode::Size, SortDirection::Descending),
    );
    let files: Vec<_> = names(&entries).into_iter().skip(3).collect();
    // a.txt and B.txt share 100 bytes; tie-break stays ascending
    assert_eq!(
        files,
        vec!["photo.png", "readme.md", "a.txt", "B.txt", "b.txt", ".hidden"]
    );
}

#[test]
fn test_name_descending_reverses_within_groups_only() {
    let mut entries = mixed_entries();
    sort_entries(&mut entries, &SortOrder::from_parts(SortMode::Name, false));
    assert_eq!(
        names(&entries),
        vec![
            "src", "Docs", "assets", "readme.md", "photo.png", "B.txt", "b.txt", "a.txt",
            ".hidden"
        ]
    );
}

#[test]
fn test_mixed_name_and_size_orders() {
    let entries = vec![
        Entry::new_file("/x/b.txt", 100, at(1)),
        Entry::new_file("/x/a.txt", 50, at(1)),
        Entry::new_directory("/x/Z", at(1)),
    ];

    let mut by_name = entries.clone();
    sort_entries(&mut by_name, &SortOrder::from_parts(SortMode::Name, true));
    assert_eq!(names(&by_name), vec!["Z", "a.txt", "b.txt"]);

    let mut by_size = entries;
    sort_entries(&mut by_size, &SortOrder::from_parts(SortMode::Size, false));
    assert_eq!(names(&by_size), vec!["Z", "b.txt", "a.txt"]);
}

#[test]
fn test_empty_input() {
    let mut entries = Vec::new();
    sort_entries(&mut entries, &SortOrder::default());
    assert!(entries.is_empty());
}

#[test]
fn test_listing_resort_matches_fresh_sort() {
    let mut listing = Listing::new(
        "/root",
        mixed_entries(),
        SortOrder::default(),
        ListFilter::default(),
    );
    let target = SortOrder::from_parts(SortMode::Date, false);
    listing.resort(target);

    let fresh = Listing::new("/root", mixed_entries(), target, ListFilter::default());
    assert_eq!(listing, fresh);
}

#[test]
fn test_entry_mimetypes() {
    let dir = Entry::new_directory("/root/photos.png", at(1));
    assert_eq!(dir.mimetype.as_str(), DIR_MIMETYPE);
    assert!(!dir.is_image());

    let file = Entry::new_file("/root/photo.png", 1, at(1));
    assert_eq!(file.mimetype.as_str(), "image/png");
}

#[test]
fn test_sort_order_serde() {
    let order = SortOrder::from_parts(SortMode::Size, false);
    let json = serde_json::to_string(&order).unwrap();
    assert_eq!(json, r#"{"mode":"size","direction":"descending"}"#);
    let back: SortOrder = serde_json::from_str(&json).unwrap();
    assert_eq!(back, order);
    assert_eq!(order.reversed(), SortOrder::from_parts(SortMode::Size, true));
}

#[test]
fn test_selection_keyed_by_path() {
    let mut listing = Listing::new(
        "/root",
        mixed_entries(),
        SortOrder::default(),
        ListFilter::default(),
    );
    let mut selection = Selection::new();
    selection.check("/root/photo.png");
    selection.check("/root/a.txt");

    let before = selection.checked_names(&listing);
    listing.resort(SortOrder::from_parts(SortMode::Size, false));
    let after = selection.checked_names(&listing);

    assert_eq!(before, vec!["a.txt", "photo.png"]);
    assert_eq!(after, vec!["photo.png", "a.txt"]);
    assert!(selection.is_checked(Path::new("/root/a.txt")));
}
