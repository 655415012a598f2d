use space_shooter::collision::overlaps;
use space_shooter::entities::Rect;

use proptest::prelude::*;

fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::new(x, y, w, h)
}

#[test]
fn partial_overlap() {
    assert!(overlaps(&r(0.0, 0.0, 10.0, 10.0), &r(5.0, 5.0, 10.0, 10.0)));
}

#[test]
fn disjoint() {
    assert!(!overlaps(&r(0.0, 0.0, 10.0, 10.0), &r(20.0, 20.0, 10.0, 10.0)));
}

#[test]
fn touching_edges_do_not_overlap() {
    assert!(!overlaps(&r(0.0, 0.0, 10.0, 10.0), &r(10.0, 0.0, 10.0, 10.0)));
    assert!(!overlaps(&r(0.0, 0.0, 10.0, 10.0), &r(0.0, 10.0, 10.0, 10.0)));
}

#[test]
fn containment_overlaps() {
    assert!(overlaps(&r(0.0, 0.0, 100.0, 100.0), &r(40.0, 40.0, 10.0, 10.0)));
}

#[test]
fn separated_on_one_axis_only() {
    // same rows, different columns
    assert!(!overlaps(&r(0.0, 0.0, 10.0, 10.0), &r(30.0, 5.0, 10.0, 10.0)));
}

proptest! {
    #[test]
    fn overlap_is_symmetric(
        ax in -500.0f32..500.0, ay in -500.0f32..500.0, aw in 1.0f32..100.0, ah in 1.0f32..100.0,
        bx in -500.0f32..500.0, by in -500.0f32..500.0, bw in 1.0f32..100.0, bh in 1.0f32..100.0,
    ) {
        let a = r(ax, ay, aw, ah);
        let b = r(bx, by, bw, bh);
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn rect_overlaps_itself(x in -500.0f32..500.0, y in -500.0f32..500.0, w in 1.0f32..100.0, h in 1.0f32..100.0) {
        let a = r(x, y, w, h);
        prop_assert!(overlaps(&a, &a));
    }
}
