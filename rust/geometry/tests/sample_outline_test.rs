// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use floor_lite_geometry::{
    chain_order, sample_outline, sample_outline_as_listed, LoopDefect, LoopValidator,
    RecordingSink, Severity, Tolerance,
};

fn validator() -> LoopValidator {
    LoopValidator::new(Tolerance::new(0.0001).unwrap())
}

#[test]
fn twelve_line_outline_is_closed() {
    let outline = sample_outline();
    assert_eq!(outline.len(), 12);

    let mut sink = RecordingSink::new();
    assert!(validator().is_closed_loop(&outline, &mut sink));
    assert!(sink.is_empty());
}

#[test]
fn every_rotation_of_the_outline_is_closed() {
    let mut outline = sample_outline();
    for _ in 0..outline.len() {
        outline.rotate_right(1);
        assert!(validator().validate(&outline).is_ok());
    }
}

#[test]
fn removing_any_line_disconnects_its_predecessor() {
    let outline = sample_outline();

    for removed in 0..outline.len() {
        let mut lines = outline.clone();
        lines.remove(removed);

        let expected = if removed == 0 { lines.len() - 1 } else { removed - 1 };
        assert_eq!(
            validator().validate(&lines),
            Err(LoopDefect::DisconnectedSegment { index: expected }),
            "removed line {removed}"
        );
    }
}

#[test]
fn drawing_order_connects_but_does_not_close() {
    let listed = sample_outline_as_listed();

    let mut sink = RecordingSink::new();
    assert!(!validator().is_closed_loop(&listed, &mut sink));
    assert_eq!(validator().validate(&listed), Err(LoopDefect::LoopNotClosed));

    let diagnostic = sink.last().unwrap();
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(
        diagnostic.message,
        "Shape is not closed: End point does not connect to start point"
    );
}

#[test]
fn chain_order_repairs_drawing_order() {
    let listed = sample_outline_as_listed();
    let ordered = chain_order(&listed, validator().tolerance()).unwrap();
    assert_eq!(ordered, sample_outline());
    assert!(validator().validate(&ordered).is_ok());
}

#[test]
fn small_drift_within_tolerance_still_closes() {
    let mut outline = sample_outline();
    for (i, line) in outline.iter_mut().enumerate() {
        let d = if i % 2 == 0 { 0.00005 } else { -0.00005 };
        line.end.x += d;
        line.end.y -= d;
    }
    assert!(validator().validate(&outline).is_ok());
}

#[test]
fn drift_beyond_tolerance_is_reported() {
    let mut outline = sample_outline();
    outline[4].end.y += 0.001;
    assert_eq!(
        validator().validate(&outline),
        Err(LoopDefect::DisconnectedSegment { index: 4 })
    );
}

#[test]
fn reversing_one_line_in_place_fails() {
    let mut outline = sample_outline();
    outline[6] = outline[6].reversed();
    assert!(matches!(
        validator().validate(&outline),
        Err(LoopDefect::DisconnectedSegment { .. })
    ));
}
