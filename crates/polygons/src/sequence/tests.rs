use super::*;

#[test]
fn length_and_positions() {
    let seq = PolygonSequence::new(5, 10.0).unwrap();
    assert_eq!(seq.len(), 3);
    assert!(!seq.is_empty());
    assert_eq!(seq.at(0).unwrap().count_vertices(), 3);
    assert_eq!(seq.at(2).unwrap().count_vertices(), 5);
    assert_eq!(seq[1].count_vertices(), 4);
    assert_eq!(seq.get(1).map(|p| p.count_vertices()), Some(4));
    assert!(seq.get(3).is_none());
    assert!(seq.as_slice().iter().all(|p| p.circumradius() == 10.0));
}

#[test]
fn out_of_range_is_rejected_not_wrapped() {
    let seq = PolygonSequence::new(6, 1.0).unwrap();
    assert_eq!(
        seq.at(4),
        Err(PolygonError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(
        seq.at(-1),
        Err(PolygonError::IndexOutOfRange { index: -1, len: 4 })
    );
}

#[test]
fn construction_rejects_bad_input() {
    assert!(matches!(
        PolygonSequence::new(2, 10.0),
        Err(PolygonError::InvalidArgument { .. })
    ));
    assert!(matches!(
        PolygonSequence::new(5, 0.0),
        Err(PolygonError::InvalidArgument { .. })
    ));
    // smallest valid sequence holds only the triangle
    let tri = PolygonSequence::new(3, 1.0).unwrap();
    assert_eq!(tri.len(), 1);
    assert_eq!(tri.max_efficiency_polygon().count_vertices(), 3);
}

#[test]
fn max_efficiency_is_largest_polygon() {
    let seq = PolygonSequence::new(10, 10.0).unwrap();
    assert_eq!(seq.max_efficiency_polygon().count_vertices(), 10);
    let big = PolygonSequence::new(200, 0.5).unwrap();
    assert_eq!(big.max_efficiency_polygon().count_vertices(), 200);
}

#[test]
fn cursor_drains_in_order_then_stops() {
    let seq = PolygonSequence::new(7, 2.0).unwrap();
    let mut cur = seq.iter();
    assert_eq!(cur.state(), CursorState::Active);
    assert_eq!(cur.len(), 5);
    for i in 0..seq.len() {
        let p = cur.try_next().unwrap();
        assert!(p.equals(seq.at(i as isize).unwrap()));
        assert_eq!(cur.position(), i + 1);
    }
    assert!(cur.is_exhausted());
    for _ in 0..3 {
        assert_eq!(cur.try_next(), Err(PolygonError::StopIteration));
        assert!(cur.next().is_none());
    }
    assert_eq!(cur.position(), seq.len());
}

#[test]
fn cursors_are_independent() {
    let seq = PolygonSequence::new(8, 1.0).unwrap();
    let mut a = seq.iter();
    let mut b = seq.iter();
    a.next();
    a.next();
    assert_eq!(a.position(), 2);
    assert_eq!(b.position(), 0);
    assert_eq!(b.next().map(|p| p.count_vertices()), Some(3));
    assert_eq!(a.next().map(|p| p.count_vertices()), Some(5));
}

#[test]
fn for_loop_and_adapters() {
    let seq = PolygonSequence::new(6, 3.0).unwrap();
    let mut counts = Vec::new();
    for p in &seq {
        counts.push(p.count_vertices());
    }
    assert_eq!(counts, vec![3, 4, 5, 6]);
    let total: f64 = seq.iter().map(Polygon::perimeter).sum();
    assert!(total > 0.0);
}

#[test]
fn shared_across_threads() {
    let seq = PolygonSequence::new(12, 1.5).unwrap();
    let counts: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| seq.iter().count()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(counts.iter().all(|&c| c == seq.len()));
}

#[test]
fn display_mentions_both_values() {
    let s = PolygonSequence::new(9, 4.25).unwrap().to_string();
    assert!(s.contains('9'));
    assert!(s.contains("4.25"));
}
