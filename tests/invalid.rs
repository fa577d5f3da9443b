use render_context as rc;
use rc::ContextError;

// Construction rejects anything outside the closed style/size domains instead
// of letting a bad tier reach size arithmetic further down the tree.
#[test]
fn test_size_out_of_range() {
    let err = rc::from_json(r#"{"style":"text","size":11}"#).unwrap_err();
    assert_eq!(err, ContextError::InvalidSize(11));
}

#[test]
fn test_parent_size_out_of_range() {
    let err = rc::from_json(r#"{"style":"text","size":5,"parent_size":0}"#).unwrap_err();
    assert_eq!(err, ContextError::InvalidSize(0));
}

#[test]
fn test_unknown_style_name() {
    let err = rc::from_json(r#"{"style":"huge","size":5}"#).unwrap_err();
    assert!(matches!(err, ContextError::Config(ref msg) if msg.contains("huge")), "got: {err}");
}

#[test]
fn test_missing_required_field() {
    let err = rc::from_json(r#"{"style":"text"}"#).unwrap_err();
    assert!(matches!(err, ContextError::Config(_)), "got: {err}");
}

#[test]
fn test_valid_config_with_defaults() {
    let ctx = rc::from_json(r#"{"style":"Display","size":5,"color":"katex-gray"}"#).unwrap();
    assert_eq!(ctx.style(), rc::Style::Display);
    assert_eq!(ctx.parent_style(), rc::Style::Display);
    assert_eq!(ctx.parent_size(), rc::Size::NORMAL);
    assert_eq!(ctx.get_color(), Some("gray"));
    assert!(!ctx.is_phantom());
}
