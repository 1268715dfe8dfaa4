use super::*;

#[test]
fn visibility_toggle_label_describes_next_action() {
    assert_eq!(visibility_toggle_label(false), "Show password");
    assert_eq!(visibility_toggle_label(true), "Hide password");
}
