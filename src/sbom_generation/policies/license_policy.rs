use crate::sbom_generation::domain::LicenseInfo;

/// SPDX placeholder for "no information was determined"
pub const NOASSERTION: &str = "NOASSERTION";

/// Marker phrases that identify a license text, checked in order.
///
/// More specific licenses come before the ones whose markers they contain
/// (LGPL/AGPL before GPL, BSD-3-Clause before BSD-2-Clause).
const LICENSE_MARKERS: &[(&str, &[&str])] = &[
    ("AGPL-3.0-only", &["gnu affero general public license", "version 3"]),
    ("LGPL-3.0-only", &["gnu lesser general public license", "version 3"]),
    ("LGPL-2.1-only", &["gnu lesser general public license", "version 2.1"]),
    ("GPL-3.0-only", &["gnu general public license", "version 3"]),
    ("GPL-2.0-only", &["gnu general public license", "version 2"]),
    ("Apache-2.0", &["apache license", "version 2.0"]),
    ("MPL-2.0", &["mozilla public license", "2.0"]),
    ("EPL-2.0", &["eclipse public license", "v 2.0"]),
    ("EPL-1.0", &["eclipse public license", "v 1.0"]),
    (
        "BSD-3-Clause",
        &["redistribution and use in source and binary forms", "neither the name"],
    ),
    ("BSD-2-Clause", &["redistribution and use in source and binary forms"]),
    (
        "ISC",
        &["permission to use, copy, modify, and/or distribute this software for any purpose"],
    ),
    ("MIT", &["permission is hereby granted, free of charge"]),
    (
        "Unlicense",
        &["this is free and unencumbered software released into the public domain"],
    ),
];

/// LicensePolicy encodes how detected license data maps onto module fields
///
/// - `license_declared` / `license_concluded`: the detected SPDX id, or `NOASSERTION`
/// - `copyright`: first line of the license text that starts with "Copyright"
pub struct LicensePolicy;

impl LicensePolicy {
    /// Identifies an SPDX license id from full license text
    pub fn identify(text: &str) -> Option<&'static str> {
        let haystack = text.to_lowercase();
        LICENSE_MARKERS
            .iter()
            .find(|(_, markers)| markers.iter().all(|m| haystack.contains(m)))
            .map(|(id, _)| *id)
    }

    pub fn declared(info: &LicenseInfo) -> String {
        Self::id_or_noassertion(info)
    }

    /// No independent analysis happens, so the concluded license mirrors the declared one
    pub fn concluded(info: &LicenseInfo) -> String {
        Self::id_or_noassertion(info)
    }

    pub fn copyright(info: &LicenseInfo) -> String {
        info.extracted_text()
            .and_then(|text| {
                text.lines()
                    .map(str::trim)
                    .find(|line| line.to_lowercase().starts_with("copyright"))
            })
            .map(str::to_string)
            .unwrap_or_else(|| NOASSERTION.to_string())
    }

    fn id_or_noassertion(info: &LicenseInfo) -> String {
        info.license_id()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or(NOASSERTION)
            .to_string()
    }
}
