#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn alert_is_noop_but_callable() {
    alert("Signup Successful!");
}

#[test]
fn alert_notifier_accepts_messages() {
    AlertNotifier.notify("Signup Successful!");
}
