#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        // Package classification - this should never panic
        let root = Path::new("/proj/node_modules");
        let _ = anisotropic::domain::value_objects::package_of(root, Path::new(path));
        let _ = anisotropic::ProjectLayout::discover(path);
    }
});
