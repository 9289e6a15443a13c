#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Policy file parsing and validation - this should never panic
        let parsed = anisotropic::config::parse_with_warnings(Path::new("fuzz.toml"), content);
        if let Ok((settings, _)) = parsed {
            let _ = anisotropic::resolve_config(anisotropic::PolicySettings::defaults(), settings);
        }
    }
});
