#![no_main]

//! Fuzz testing for response envelope decoding.
//!
//! Arbitrary bodies and status codes must decode or fail cleanly, and a
//! successful decode is only possible on a 2xx status.

use cfaccess::api::decode_envelope;
use cfaccess::AccessCaCertificate;
use libfuzzer_sys::fuzz_target;
use reqwest::StatusCode;

fuzz_target!(|data: (u16, &str)| {
    let (code, body) = data;
    let Ok(status) = StatusCode::from_u16(100 + code % 500) else {
        return;
    };

    if let Ok(envelope) = decode_envelope::<AccessCaCertificate>(status, body) {
        assert!(status.is_success());
        assert!(envelope.success);
    }
    let _ = decode_envelope::<Vec<AccessCaCertificate>>(status, body);
});
