use domain::{PageRequest, page_count};

#[test]
fn missing_or_invalid_params_fall_back_to_defaults() {
    let page = PageRequest::from_query(None, None);
    assert_eq!(page, PageRequest::new(1, 10));

    let page = PageRequest::from_query(Some("abc"), Some("0"));
    assert_eq!(page.current, 1);
    assert_eq!(page.size, 10);

    let page = PageRequest::from_query(Some("-3"), Some(" 5 "));
    assert_eq!(page.current, 1);
    assert_eq!(page.size, 5);
}

#[test]
fn offset_and_pages() {
    let page = PageRequest::from_query(Some("3"), Some("20"));
    assert_eq!(page.offset(), 40);
    assert_eq!(page.limit(), 20);
    assert_eq!(page.pages(41), 3);
    assert_eq!(page.pages(40), 2);
    assert_eq!(page.pages(0), 0);
    assert_eq!(page_count(50, 10), 5);
}

#[test]
fn slice_static_list() {
    let items = vec!["a", "b", "c"];
    assert_eq!(PageRequest::new(1, 2).slice(&items), vec!["a", "b"]);
    assert_eq!(PageRequest::new(2, 2).slice(&items), vec!["c"]);
    assert!(PageRequest::new(3, 2).slice(&items).is_empty());
}

#[test]
fn page_count_near_i64_max() {
    assert_eq!(page_count(2, i64::MAX), 1);
    assert_eq!(page_count(i64::MAX, i64::MAX), 1);
    assert_eq!(page_count(i64::MAX, 1), i64::MAX);
    assert_eq!(page_count(i64::MAX, 2), i64::MAX / 2 + 1);

    let page = PageRequest::from_query(Some("1"), Some("9223372036854775807"));
    assert_eq!(page.size, i64::MAX);
    assert_eq!(page.pages(3), 1);
}

#[test]
fn huge_current_saturates_offset() {
    let page = PageRequest::from_query(Some("9223372036854775807"), Some("2"));
    assert_eq!(page.offset(), i64::MAX);
    assert_eq!(page.pages(5), 3);
    assert!(page.slice(&["a", "b", "c"]).is_empty());
}
