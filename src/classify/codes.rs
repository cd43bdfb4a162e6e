//! ESMA regulatory code derivation from raw domain strings.

use crate::report::InvestorCategoryBreakdown;

/// Reporting frequency under the AIFMD Article 24 obligations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyCode {
    Quarterly,
    HalfYearly,
    Yearly,
}

impl FrequencyCode {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Quarterly => "Q",
            Self::HalfYearly => "H",
            Self::Yearly => "Y",
        }
    }
}

impl std::fmt::Display for FrequencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Map a reporting-obligation article reference to its frequency code.
///
/// Art. 24(4) reports quarterly, Art. 24(2) half-yearly; anything else,
/// including Art. 24(1) and unrecognized text, defaults to yearly.
#[must_use]
pub fn frequency_code(obligation: &str) -> FrequencyCode {
    if obligation.contains("24(4)") {
        FrequencyCode::Quarterly
    } else if obligation.contains("24(2)") {
        FrequencyCode::HalfYearly
    } else {
        FrequencyCode::Yearly
    }
}

/// ESMA `PredominantAIFType` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredominantAifType {
    RealEstate,
    HedgeFund,
    PrivateEquity,
    FundOfFunds,
    VentureCapital,
    Infrastructure,
    Commodity,
    Other,
}

impl PredominantAifType {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::RealEstate => "REST",
            Self::HedgeFund => "HFND",
            Self::PrivateEquity => "PEQF",
            Self::FundOfFunds => "FOFS",
            Self::VentureCapital => "VCAP",
            Self::Infrastructure => "INFR",
            Self::Commodity => "COMF",
            Self::Other => "OTHR",
        }
    }
}

impl std::fmt::Display for PredominantAifType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Keyword families scanned top to bottom against the case-folded fund name
/// and legal form. Real estate comes first: "REIT" and "property" can
/// co-occur with the other keywords.
const STRATEGY_RULES: &[(&[&str], PredominantAifType)] = &[
    (
        &["immobilien", "real estate", "reit", "property"],
        PredominantAifType::RealEstate,
    ),
    (&["hedge"], PredominantAifType::HedgeFund),
    (&["private equity"], PredominantAifType::PrivateEquity),
    (
        &["fund of fund", "fof", "dachfonds"],
        PredominantAifType::FundOfFunds,
    ),
    (&["venture"], PredominantAifType::VentureCapital),
    (
        &["infrastructure", "infrastruktur"],
        PredominantAifType::Infrastructure,
    ),
    (&["commodity", "rohstoff"], PredominantAifType::Commodity),
];

/// Classify a fund's predominant strategy from its name and legal form.
///
/// Strategy keywords in the name or form take precedence over the legal
/// form alone; a legal form carrying a PE marker without a "Spezial" marker
/// is the one secondary check before the OTHR default.
#[must_use]
pub fn predominant_aif_type(legal_form: &str, fund_name: Option<&str>) -> PredominantAifType {
    let name_and_form = format!("{} {}", fund_name.unwrap_or(""), legal_form).to_lowercase();
    for (keywords, kind) in STRATEGY_RULES {
        if keywords.iter().any(|kw| name_and_form.contains(kw)) {
            return *kind;
        }
    }
    let form = legal_form.to_lowercase();
    if form.contains("pe") && !form.contains("spezial") {
        return PredominantAifType::PrivateEquity;
    }
    PredominantAifType::Other
}

/// ESMA depositary category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositaryCode {
    CreditInstitution,
    InvestmentFirm,
    Other,
}

impl DepositaryCode {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::CreditInstitution => "CDPS",
            Self::InvestmentFirm => "INVF",
            Self::Other => "OTHR",
        }
    }
}

impl std::fmt::Display for DepositaryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Map a depositary type label to its ESMA code. Absent input is OTHR.
#[must_use]
pub fn depositary_code(kind: Option<&str>) -> DepositaryCode {
    match kind {
        Some("credit_institution") => DepositaryCode::CreditInstitution,
        Some("investment_firm") => DepositaryCode::InvestmentFirm,
        _ => DepositaryCode::Other,
    }
}

/// ESMA `SubAssetType` enumeration, reduced to the families this report
/// distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubAssetTypeCode {
    ListedEquity,
    Bond,
    DerivativeSwap,
    ResidentialRealEstate,
    MoneyMarket,
    NoType,
}

impl SubAssetTypeCode {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ListedEquity => "SEC_LEQ_IFIN",
            Self::Bond => "SEC_CSH_BOND",
            Self::DerivativeSwap => "DER_EQD_SWPS",
            Self::ResidentialRealEstate => "PHY_RES_RESD",
            Self::MoneyMarket => "SEC_CSH_MMKT",
            Self::NoType => "NTA_NTA_NOTA",
        }
    }
}

impl std::fmt::Display for SubAssetTypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Classify a free-text asset-type label into an ESMA sub-asset-type code.
///
/// Ordered substring rules on the case-folded label. The equity branch
/// absorbing the literal label "fund" is intentional: share classes of
/// funds are reported as equity-like instruments.
#[must_use]
pub fn asset_type_code(label: &str) -> SubAssetTypeCode {
    let lower = label.to_lowercase();
    if lower == "fund" || lower.contains("share class") || lower.contains("unit class") {
        return SubAssetTypeCode::ListedEquity;
    }
    if lower.contains("equity") || lower.contains("share") {
        return SubAssetTypeCode::ListedEquity;
    }
    if lower.contains("bond") || lower.contains("debt") || lower.contains("fixed") {
        return SubAssetTypeCode::Bond;
    }
    if lower.contains("derivative") || lower.contains("swap") {
        return SubAssetTypeCode::DerivativeSwap;
    }
    if lower.contains("real estate") || lower.contains("property") {
        return SubAssetTypeCode::ResidentialRealEstate;
    }
    if lower.contains("cash") || lower.contains("money market") {
        return SubAssetTypeCode::MoneyMarket;
    }
    SubAssetTypeCode::NoType
}

/// Percentage of NAV for the first breakdown entry matching a category
/// exactly; 0 when no entry matches.
#[must_use]
pub fn category_pct(by_category: &[InvestorCategoryBreakdown], category: &str) -> f64 {
    by_category
        .iter()
        .find(|entry| entry.category == category)
        .map_or(0.0, |entry| entry.pct_of_nav)
}
