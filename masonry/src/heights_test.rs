use super::*;

#[test]
fn new_map_is_empty() {
    let map = HeightMap::<String>::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
}

#[test]
fn unknown_key_weighs_zero() {
    let map = HeightMap::<&str>::new();
    assert_eq!(map.get(&"memos/1"), None);
    assert_eq!(map.height_or_zero(&"memos/1"), 0);
}

#[test]
fn first_report_is_a_change() {
    let mut map = HeightMap::new();
    assert!(map.record("memos/1", 120));
    assert_eq!(map.get(&"memos/1"), Some(120));
}

#[test]
fn first_report_of_zero_is_still_a_change() {
    let mut map = HeightMap::new();
    assert!(map.record("memos/1", 0));
    assert_eq!(map.get(&"memos/1"), Some(0));
}

#[test]
fn repeated_identical_report_is_not_a_change() {
    let mut map = HeightMap::new();
    map.record("memos/1", 120);
    assert!(!map.record("memos/1", 120));
    assert_eq!(map.len(), 1);
}

#[test]
fn new_value_overwrites() {
    let mut map = HeightMap::new();
    map.record("memos/1", 120);
    assert!(map.record("memos/1", 180));
    assert_eq!(map.height_or_zero(&"memos/1"), 180);
}

#[test]
fn collects_from_pairs() {
    let map: HeightMap<&str> = [("a", 10), ("b", 20)].into_iter().collect();
    assert_eq!(map.get(&"a"), Some(10));
    assert_eq!(map.get(&"b"), Some(20));
}
