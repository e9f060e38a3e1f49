use blog_api::config::parse_list;

#[test]
fn seed_list_trims_and_drops_empty_entries() {
    assert_eq!(
        parse_list(" rust, travel ,,food "),
        vec!["rust".to_string(), "travel".to_string(), "food".to_string()]
    );
}

#[test]
fn empty_seed_list_is_empty() {
    assert!(parse_list("").is_empty());
    assert!(parse_list(" , ").is_empty());
}
