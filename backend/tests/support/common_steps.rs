//! Steps shared by every HTTP behaviour suite.

use rstest_bdd_macros::{given, then};
use serde_json::Value;

use crate::harness::WorldFixture;
use crate::http::{last_body, last_status};

#[given("a running server")]
fn a_running_server(world: &WorldFixture) {
    let _ = world;
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &WorldFixture, status: u16) {
    assert_eq!(last_status(&world.world()), status);
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &WorldFixture, code: String) {
    let body = last_body(&world.world());
    assert_eq!(body.get("code").and_then(Value::as_str), Some(code.as_str()));
}
