use serde::Serialize;

use crate::utils::time::FIXED_TIME_ZONE;

/// Build metadata captured by `build.rs`.
#[derive(Debug, Serialize)]
pub struct VersionInfoDTO {
    pub package_version: &'static str,
    pub build_timestamp: &'static str,
    pub cargo_debug: &'static str,
    pub cargo_opt_level: &'static str,
    pub cargo_target_triple: &'static str,
    pub rustc_channel: &'static str,
    pub rustc_semver: &'static str,
    pub time_zone: &'static str,
}

pub const fn version_info() -> VersionInfoDTO {
    VersionInfoDTO {
        package_version: env!("CARGO_PKG_VERSION"),
        build_timestamp: env!("VERGEN_BUILD_TIMESTAMP"),
        cargo_debug: env!("VERGEN_CARGO_DEBUG"),
        cargo_opt_level: env!("VERGEN_CARGO_OPT_LEVEL"),
        cargo_target_triple: env!("VERGEN_CARGO_TARGET_TRIPLE"),
        rustc_channel: env!("VERGEN_RUSTC_CHANNEL"),
        rustc_semver: env!("VERGEN_RUSTC_SEMVER"),
        time_zone: FIXED_TIME_ZONE,
    }
}
