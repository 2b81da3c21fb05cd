use super::*;

fn node(id: u64, rect: Rect, layer: u8, sense: Sense, kind: NodeKind) -> Node {
    Node {
        id: Id(id),
        rect,
        layer,
        sense,
        kind,
    }
}

#[test]
fn click_target_prefers_higher_layer() {
    let mut tree = UiTree::new();
    tree.push(node(2, Rect::new(10, 7, 60, 9), 1, Sense::Click, NodeKind::Window));
    tree.push(node(1, Rect::new(0, 0, 80, 24), 0, Sense::Click, NodeKind::Container));

    assert_eq!(tree.click_target(Pos::new(12, 8)), Some(Id(2)));
    assert_eq!(tree.click_target(Pos::new(0, 0)), Some(Id(1)));
}

#[test]
fn later_nodes_win_within_a_layer() {
    let mut tree = UiTree::new();
    tree.push(node(1, Rect::new(10, 7, 60, 9), 1, Sense::Click, NodeKind::Window));
    tree.push(node(2, Rect::new(52, 12, 8, 3), 1, Sense::Click, NodeKind::Button));

    assert_eq!(tree.click_target(Pos::new(55, 13)), Some(Id(2)));
}

#[test]
fn click_target_skips_inert_nodes() {
    let mut tree = UiTree::new();
    tree.push(node(1, Rect::new(52, 12, 8, 3), 1, Sense::Click, NodeKind::Button));
    tree.push(node(2, Rect::new(52, 12, 8, 1), 1, Sense::Inert, NodeKind::Label));

    assert_eq!(tree.click_target(Pos::new(53, 12)), Some(Id(1)));
    assert_eq!(tree.click_target(Pos::new(0, 0)), None);
}

#[test]
fn node_lookup_and_clear() {
    let mut tree = UiTree::new();
    tree.push(node(1, Rect::new(0, 0, 1, 1), 0, Sense::Inert, NodeKind::Container));
    tree.push(node(2, Rect::new(10, 7, 60, 9), 1, Sense::Inert, NodeKind::Window));
    assert_eq!(tree.node(Id(2)).unwrap().kind, NodeKind::Window);
    assert!(tree.node(Id(3)).is_none());
    assert!(tree.node_contains(Id(2), Pos::new(10, 7)));
    assert!(!tree.node_contains(Id(2), Pos::new(70, 7)));
    assert!(!tree.node_contains(Id(3), Pos::new(0, 0)));

    tree.clear();
    assert!(tree.is_empty());
}
