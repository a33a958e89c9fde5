//! Constants used throughout pyproject-scaffold

/// Name of the generated manifest file
pub const MANIFEST_FILENAME: &str = "pyproject.toml";

/// Version written when none is given
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Placeholder callable used in generated console-script entry points
pub const ENTRY_POINT_FUNCTION: &str = "FUNCNAME";

/// Module inside the generated package that entry points refer to
pub const ENTRY_POINT_MODULE: &str = "main";

/// Directory holding generated packages
pub const SOURCE_DIR: &str = "src";

/// Files created empty inside a new package
pub const PACKAGE_FILES: &[&str] = &["main.py", "__init__.py"];

/// Keys of the manifest document
pub mod keys {
    pub const PROJECT: &str = "project";
    pub const NAME: &str = "name";
    pub const VERSION: &str = "version";
    pub const DEPENDENCIES: &str = "dependencies";
    pub const OPTIONAL_DEPENDENCIES: &str = "optional-dependencies";
    pub const SCRIPTS: &str = "scripts";
}

/// Dependencies applied by `--defaults`
pub mod defaults {
    pub const DEPENDENCIES: &[&str] = &["requests", "pydantic"];
    pub const OPTIONAL_DEPENDENCIES: &[(&str, &[&str])] =
        &[("dev", &["pytest", "pyfakefs", "pytest-mock"])];
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
