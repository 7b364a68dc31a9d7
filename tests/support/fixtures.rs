//! Test fixtures and constants.

/// Master password used by every test database.
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Database file name used by the test config.
pub const TEST_DATABASE: &str = "test.age";

/// Config keeping scrypt cheap so tests stay fast.
pub const TEST_CONFIG: &str = "database = \"test.age\"\nwork_factor = 10\n";

/// Secrets used across multiple tests: (path, username, password).
pub const STANDARD_SECRETS: &[(&str, &str, &str)] = &[
    ("/prod/db/admin", "postgres", "pg-secret"),
    ("/prod/db/reader", "readonly", "ro-secret"),
    ("/prod/api", "service", "sk-test-12345"),
    ("/solo", "root", "toor"),
];
