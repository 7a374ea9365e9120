use super::*;

#[test]
fn test_role_opponent() {
    assert_eq!(Role::Tiger.opponent(), Role::Goat);
    assert_eq!(Role::Goat.opponent(), Role::Tiger);
}

#[test]
fn test_node_new() {
    let node = Node::new(13);
    assert_eq!(node.id(), 13);
    assert_eq!(node.index(), 13);
}

#[test]
fn test_node_try_new() {
    assert_eq!(Node::try_new(0), Some(Node::new(0)));
    assert_eq!(Node::try_new(23), Some(Node::new(23)));
    assert_eq!(Node::try_new(24), None);
    assert_eq!(Node::try_new(255), None);
}

#[test]
fn test_node_try_new_covers_board() {
    for id in 0..=u8::MAX {
        match Node::try_new(id) {
            Some(node) => {
                assert!((id as usize) < NODE_COUNT);
                assert_eq!(node.id(), id);
                assert_eq!(node.index(), id as usize);
            }
            None => assert!((id as usize) >= NODE_COUNT),
        }
    }
}

#[test]
fn test_node_all() {
    let nodes: Vec<Node> = Node::all().collect();
    assert_eq!(nodes.len(), NODE_COUNT);
    assert_eq!(nodes[0], Node::new(0));
    assert_eq!(nodes[23], Node::new(23));
}

#[test]
fn test_board_constants() {
    assert_eq!(NODE_COUNT, 24);
    assert_eq!(TIGER_COUNT, 4);
    assert_eq!(GOAT_COUNT, 18);
    assert_eq!(CAPTURES_TO_WIN, 8);
}

#[test]
fn test_phase_of() {
    assert_eq!(Phase::of(0), Phase::Placement);
    assert_eq!(Phase::of(17), Phase::Placement);
    assert_eq!(Phase::of(18), Phase::Movement);
}

#[test]
fn test_position_after_placement_counts() {
    let pos = Position::initial();
    let next = pos.after(Move::Place(Node::new(11)), Role::Goat);

    assert_eq!(next.goats_placed, 1);
    assert_eq!(next.goats_captured, 0);
    assert_eq!(next.board.get(Node::new(11)), Some(Role::Goat));
    // Input untouched
    assert!(pos.board.is_empty(Node::new(11)));
}

#[test]
fn test_position_after_slide_keeps_placed() {
    let pos = Position::new(Board::new(), 5, 0);
    let next = pos.after(Move::between(Node::new(0), Node::new(1)), Role::Tiger);
    assert_eq!(next.goats_placed, 5);
    assert_eq!(next.board.get(Node::new(1)), Some(Role::Tiger));
}

#[test]
fn test_role_display() {
    assert_eq!(Role::Tiger.to_string(), "tiger");
    assert_eq!(Role::Goat.to_string(), "goat");
}
