//! Test fixtures - reusable graph and policy constants.

/// `lib` imports application code, `ui` imports `keychain`, `auth` imports
/// `keychain`, `@org/other` imports `@org/secrets`, `leaf` imports nothing.
pub const PROJECT_GRAPH: &str = r#"{
    "src/app.js": ["node_modules/lib/index.js", "node_modules/ui/index.js"],
    "src/theme.js": [],
    "node_modules/lib/index.js": ["src/app.js"],
    "node_modules/ui/index.js": ["node_modules/ui/button.js"],
    "node_modules/ui/button.js": ["node_modules/keychain/index.js"],
    "node_modules/auth/index.js": ["node_modules/keychain/index.js"],
    "node_modules/keychain/index.js": ["node_modules/keychain/store.js"],
    "node_modules/keychain/store.js": [],
    "node_modules/@org/other/index.js": ["node_modules/@org/secrets/index.js"],
    "node_modules/@org/secrets/index.js": [],
    "node_modules/leaf/index.js": []
}"#;

/// Every package file named in `PROJECT_GRAPH`.
pub const PACKAGE_FILES: &[&str] = &[
    "node_modules/lib/index.js",
    "node_modules/ui/index.js",
    "node_modules/ui/button.js",
    "node_modules/auth/index.js",
    "node_modules/keychain/index.js",
    "node_modules/keychain/store.js",
    "node_modules/@org/other/index.js",
    "node_modules/@org/secrets/index.js",
    "node_modules/leaf/index.js",
];

/// Policy file making `keychain` privileged with `auth` as the only exception.
pub const KEYCHAIN_POLICY: &str = r#"
[globalScopeFilter.keychain]
exceptions = ["auth"]
"#;
