use super::*;

#[test]
fn idpath_is_stable_for_same_path() {
    let a = IdPath::root("ingame_message").push_str("button").finish();
    let b = IdPath::root("ingame_message").push_str("button").finish();
    assert_eq!(a, b);
}

#[test]
fn idpath_differs_for_sibling_widgets() {
    let root = IdPath::root("ingame_message");
    let ids = [
        root.child("container"),
        root.child("window"),
        root.child("label"),
        root.child("button"),
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn idpath_segment_boundaries_matter() {
    let a = IdPath::root("ns").push_str("a").push_str("bc").finish();
    let b = IdPath::root("ns").push_str("ab").push_str("c").finish();
    assert_ne!(a, b);
}

#[test]
fn child_matches_push_and_finish() {
    let root = IdPath::root("ingame_message");
    assert_eq!(root.child("dismiss"), root.push_str("dismiss").finish());
}
