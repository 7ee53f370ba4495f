//! Firmware version banner

/// Crate version from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the startup banner for an application
pub fn banner(app: &str) {
    info!("BADGE.TEAM {=str} launcher firmware v{=str}", app, VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_from_cargo() {
        assert_eq!(VERSION, "0.1.0");
        banner("test");
    }
}
