//! Echo endpoint.
//!
//! - POST /echo - Round-trip a message to verify credentials and sealing

use crate::models::Echo;

endpoint! {
    pub struct SendEcho => Echo {
        name: "send_echo",
        builder: SendEchoBuilder,
        method: Post,
        path: "/echo",
        path_params: {},
        required: { message: String },
        optional: {},
    }
}
