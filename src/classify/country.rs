//! EEA membership and country/region code resolution.

use std::{collections::HashMap, sync::LazyLock};

/// ESMA code for supranational / aggregate regions.
const SUPRANATIONAL: &str = "XS";

/// EEA country name → ISO 3166-1 alpha-2 member state code.
///
/// EU member states plus the EEA-associated states (Liechtenstein, Norway,
/// Iceland). Names are matched case-sensitively; codes case-insensitively.
const EEA_MEMBER_STATES: &[(&str, &str)] = &[
    ("Luxembourg", "LU"),
    ("Ireland", "IE"),
    ("Germany", "DE"),
    ("France", "FR"),
    ("Netherlands", "NL"),
    ("Italy", "IT"),
    ("Spain", "ES"),
    ("Belgium", "BE"),
    ("Austria", "AT"),
    ("Malta", "MT"),
    ("Cyprus", "CY"),
    ("Estonia", "EE"),
    ("Portugal", "PT"),
    ("Finland", "FI"),
    ("Sweden", "SE"),
    ("Denmark", "DK"),
    ("Lithuania", "LT"),
    ("Latvia", "LV"),
    ("Slovenia", "SI"),
    ("Slovakia", "SK"),
    ("Greece", "GR"),
    ("Croatia", "HR"),
    ("Romania", "RO"),
    ("Bulgaria", "BG"),
    ("Czech Republic", "CZ"),
    ("Hungary", "HU"),
    ("Poland", "PL"),
    ("Liechtenstein", "LI"),
    ("Norway", "NO"),
    ("Iceland", "IS"),
];

/// Aggregate / regional labels → reporting code.
///
/// Almost everything maps to the supranational code; North America is the
/// one special case the regulator tags as US.
const REGION_AGGREGATES: &[(&str, &str)] = &[
    ("Eurozone (ex DE)", SUPRANATIONAL),
    ("Westeuropa (ex DE)", SUPRANATIONAL),
    ("Nordamerika", "US"),
    ("Asien-Pazifik", SUPRANATIONAL),
    ("Benelux", SUPRANATIONAL),
    ("Western Europe", SUPRANATIONAL),
    ("Southern Europe", SUPRANATIONAL),
    ("Central Europe", SUPRANATIONAL),
    ("Northern Europe", SUPRANATIONAL),
    ("Eastern Europe", SUPRANATIONAL),
    ("Emerging Markets", SUPRANATIONAL),
    ("Global", SUPRANATIONAL),
    ("Eurozone", SUPRANATIONAL),
    ("North America", "US"),
    ("Asia-Pacific", SUPRANATIONAL),
    ("Asia Pacific", SUPRANATIONAL),
    ("Latin America", SUPRANATIONAL),
    ("Middle East", SUPRANATIONAL),
    ("Sub-Saharan Africa", SUPRANATIONAL),
];

/// Common non-EEA country names and aliases → ISO 3166-1 alpha-2 code.
const NON_EEA_COUNTRIES: &[(&str, &str)] = &[
    ("United States", "US"),
    ("USA", "US"),
    ("United Kingdom", "GB"),
    ("UK", "GB"),
    ("Switzerland", "CH"),
    ("Japan", "JP"),
    ("China", "CN"),
    ("Singapore", "SG"),
    ("Hong Kong", "HK"),
    ("Australia", "AU"),
    ("Canada", "CA"),
    ("Brazil", "BR"),
    ("Cayman Islands", "KY"),
    ("British Virgin Islands", "VG"),
    ("Jersey", "JE"),
    ("Guernsey", "GG"),
    ("Bermuda", "BM"),
    ("Mauritius", "MU"),
    ("Deutschland", "DE"),
];

/// Precomputed lookup tables built from the const slices above.
static MEMBER_STATE_BY_NAME: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EEA_MEMBER_STATES.iter().copied().collect());

static REGION_BY_LABEL: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| REGION_AGGREGATES.iter().copied().collect());

static NON_EEA_BY_NAME: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NON_EEA_COUNTRIES.iter().copied().collect());

/// Whether a domicile lies in the European Economic Area.
///
/// Accepts either a full country name (case-sensitive) or a two-letter ISO
/// code (case-insensitive); the two checks are independent.
#[must_use]
pub fn is_eea_domicile(domicile: &str) -> bool {
    if MEMBER_STATE_BY_NAME.contains_key(domicile) {
        return true;
    }
    let upper = domicile.to_uppercase();
    EEA_MEMBER_STATES.iter().any(|(_, code)| *code == upper)
}

/// Map a domicile name to an ESMA `ReportingMemberState` code.
///
/// Unrecognized domiciles fall back to their first two characters
/// upper-cased. That is a crude stand-in for unmapped inputs, not a
/// validity check.
#[must_use]
pub fn member_state_code(domicile: &str) -> String {
    match MEMBER_STATE_BY_NAME.get(domicile) {
        Some(code) => (*code).to_string(),
        None => domicile.chars().take(2).collect::<String>().to_uppercase(),
    }
}

/// Map a geographic region label to an ISO 3166-1 alpha-2 reporting code.
///
/// Tiered precedence, preserved exactly because some names appear in more
/// than one table:
/// 1. a two-uppercase-letter input passes through unchanged;
/// 2. aggregate/regional labels;
/// 3. the EEA member-state table, exact match only (no substring fallback
///    here, so a real country name is never mis-tagged as supranational);
/// 4. common non-EEA countries and aliases;
/// 5. the supranational default.
#[must_use]
pub fn region_code(region: &str) -> String {
    if region.len() == 2 && region.bytes().all(|b| b.is_ascii_uppercase()) {
        return region.to_string();
    }
    if let Some(code) = REGION_BY_LABEL.get(region) {
        return (*code).to_string();
    }
    if let Some(code) = MEMBER_STATE_BY_NAME.get(region) {
        return (*code).to_string();
    }
    if let Some(code) = NON_EEA_BY_NAME.get(region) {
        return (*code).to_string();
    }
    SUPRANATIONAL.to_string()
}
