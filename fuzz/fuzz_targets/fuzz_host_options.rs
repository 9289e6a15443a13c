#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        // Host call and option decoding - this should never panic
        let _ = serde_json::from_value::<anisotropic::HostCall>(value.clone());
        if let Ok(settings) = anisotropic::config::settings_from_options(&value) {
            let _ = anisotropic::resolve_config(anisotropic::PolicySettings::defaults(), settings);
        }
    }
});
