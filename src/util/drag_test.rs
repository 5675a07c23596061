use super::*;

#[test]
fn first_advance_is_relative_to_begin_position() {
    let mut session = DragSession::begin(100.0, 50.0);
    assert_eq!(session.advance(110.0, 45.0), (10.0, -5.0));
}

#[test]
fn advances_accumulate_to_total_pointer_travel() {
    let mut session = DragSession::begin(0.0, 0.0);
    let steps = [(3.0, 4.0), (10.0, -2.0), (10.0, -2.0)];
    let mut total = (0.0, 0.0);
    for (x, y) in steps {
        let (dx, dy) = session.advance(x, y);
        total = (total.0 + dx, total.1 + dy);
    }
    // Net travel equals final position minus origin regardless of sampling.
    assert_eq!(total, (10.0, -2.0));
}

#[test]
fn stationary_sample_yields_zero_delta() {
    let mut session = DragSession::begin(7.0, 7.0);
    session.advance(9.0, 9.0);
    assert_eq!(session.advance(9.0, 9.0), (0.0, 0.0));
}
