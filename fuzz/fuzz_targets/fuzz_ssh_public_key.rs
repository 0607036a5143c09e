#![no_main]

use cfaccess::types::SshPublicKey;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(key) = SshPublicKey::parse(data) {
        // Re-parsing the normalized form yields the same fields.
        let rendered = key.to_string();
        let reparsed = SshPublicKey::parse(&rendered).expect("normalized key must parse");
        assert_eq!(reparsed, key);
    }
});
