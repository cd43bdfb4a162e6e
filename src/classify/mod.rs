//! Classification of free-form domain strings into regulator-defined codes.
//!
//! All lookups are total: an unmapped input degrades to a default code, it
//! never fails. Where match order is semantically significant (region
//! tiering, strategy keyword priority) the rules are ordered lists scanned
//! top to bottom; reordering them is a behavioral change.

pub mod codes;
pub mod country;

pub use codes::{
    DepositaryCode, FrequencyCode, PredominantAifType, SubAssetTypeCode, asset_type_code,
    category_pct, depositary_code, frequency_code, predominant_aif_type,
};
pub use country::{is_eea_domicile, member_state_code, region_code};
