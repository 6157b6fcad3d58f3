use super::*;

#[test]
fn parse_layout_with_slots() {
    let layout = FrameLayout::from_json_str(
        r#"{"w":1200,"h":1800,"slots":[{"x":100,"y":100,"w":500,"h":700}]}"#,
    )
    .unwrap();
    assert_eq!(layout.width, 1200);
    assert_eq!(layout.height, 1800);
    assert_eq!(
        layout.slots,
        vec![Slot {
            x: 100,
            y: 100,
            w: 500,
            h: 700
        }]
    );
    layout.validate().unwrap();
}

#[test]
fn slots_default_to_empty() {
    let layout = FrameLayout::from_json_str(r#"{"w":10,"h":10}"#).unwrap();
    assert_eq!(layout.slot_count(), 0);
    layout.validate().unwrap();
}

#[test]
fn missing_canvas_dims_are_a_parse_error() {
    let err = FrameLayout::from_json_str(r#"{"h":1800,"slots":[]}"#).unwrap_err();
    assert!(matches!(err, FramepressError::Layout(_)));

    let err = FrameLayout::from_json_str(r#"{"slots":[]}"#).unwrap_err();
    assert!(matches!(err, FramepressError::Layout(_)));
}

#[test]
fn validate_rejects_zero_canvas() {
    let layout = FrameLayout {
        width: 0,
        height: 1800,
        slots: vec![],
    };
    assert!(matches!(
        layout.validate(),
        Err(FramepressError::Layout(_))
    ));
}

#[test]
fn validate_names_degenerate_slot_index() {
    let layout = FrameLayout {
        width: 1200,
        height: 1800,
        slots: vec![
            Slot {
                x: 0,
                y: 0,
                w: 100,
                h: 100,
            },
            Slot {
                x: 0,
                y: 0,
                w: 0,
                h: 100,
            },
        ],
    };
    let err = layout.validate().unwrap_err();
    assert!(err.to_string().contains("slot 1"));
}

#[test]
fn out_of_bounds_slots_are_not_validated() {
    // Placement is the frame author's responsibility.
    let layout = FrameLayout {
        width: 100,
        height: 100,
        slots: vec![Slot {
            x: 90,
            y: 90,
            w: 50,
            h: 50,
        }],
    };
    layout.validate().unwrap();
}

#[test]
fn serde_roundtrip_uses_short_field_names() {
    let layout = FrameLayout {
        width: 10,
        height: 20,
        slots: vec![Slot {
            x: 1,
            y: 2,
            w: 3,
            h: 4,
        }],
    };
    let json = serde_json::to_string(&layout).unwrap();
    assert!(json.contains(r#""w":10"#));
    assert!(json.contains(r#""h":20"#));
    let back: FrameLayout = serde_json::from_str(&json).unwrap();
    assert_eq!(back, layout);
}
