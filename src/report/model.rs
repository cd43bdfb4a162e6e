use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::error::AnnexError;

/// The fixed report-version literal emitted in every filing.
pub const REPORT_VERSION: &str = "1.0";

/// The reporting period a filing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    /// Build a period, rejecting one whose start is not before its end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AnnexError> {
        if start >= end {
            return Err(AnnexError::InvalidDates);
        }
        Ok(Self { start, end })
    }
}

/// Identification block: who the fund and its manager are, and under which
/// legal obligation the filing is made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundIdentification {
    pub reporting_period: ReportingPeriod,
    pub fund_name: String,
    /// National competent authority code for the fund.
    pub national_code: String,
    /// Legal form / fund-type description as held in source systems.
    pub legal_form: String,
    /// Country of domicile, as a name ("Germany") or ISO code ("DE").
    pub domicile: String,
    pub inception_date: Option<NaiveDate>,
    pub manager_name: Option<String>,
    pub manager_lei: Option<String>,
    /// Legal-article reference, one of the three recognized
    /// `Article 24(..)` literals. Kept as text: the frequency classifier is
    /// defined as a substring match with a total default branch.
    pub reporting_obligation: String,
    pub base_currency: String,
}

/// Investor count and share of NAV for one investor category
/// (e.g. "professional", "retail").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorCategoryBreakdown {
    pub category: String,
    pub count: u32,
    pub pct_of_nav: f64,
}

/// Investor count and share of NAV for one investor domicile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorDomicileBreakdown {
    pub domicile: String,
    pub count: u32,
    pub pct_of_nav: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorConcentration {
    pub total_investors: u32,
    pub by_category: Vec<InvestorCategoryBreakdown>,
    pub by_domicile: Vec<InvestorDomicileBreakdown>,
    /// Share of NAV held by the five largest beneficial owners.
    pub top_five_investors_pct: f64,
}

/// One position in the asset breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPosition {
    pub name: String,
    /// Free-text asset-type label ("real estate", "cash", ...), classified
    /// into an ESMA sub-asset-type code at serialization time.
    pub asset_type: String,
    pub units: f64,
    pub value_eur: Decimal,
    pub pct_of_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipalExposures {
    pub total_aum_units: f64,
    pub total_allocated_units: f64,
    pub total_aum_eur: Decimal,
    pub total_nav_eur: Decimal,
    pub utilization_pct: f64,
    pub asset_breakdown: Vec<AssetPosition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depositary {
    pub name: String,
    pub lei: Option<String>,
    pub jurisdiction: Option<String>,
    /// Depositary category label ("credit_institution", "investment_firm").
    pub kind: Option<String>,
}

/// Leverage ratios under the two AIFMD calculation methods, with the
/// optional regulatory limits agreed with the competent authority.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leverage {
    pub gross_method: Option<f64>,
    pub commitment_method: Option<f64>,
    pub gross_limit: Option<f64>,
    pub commitment_limit: Option<f64>,
    pub compliant: bool,
}

/// The fixed set of liquidity management tools recognized by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidityToolKind {
    RedemptionGate,
    NoticePeriod,
    RedemptionFee,
    SwingPricing,
    AntiDilutionLevy,
    SidePocket,
    RedemptionInKind,
    Suspension,
}

impl LiquidityToolKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RedemptionGate => "redemption_gate",
            Self::NoticePeriod => "notice_period",
            Self::RedemptionFee => "redemption_fee",
            Self::SwingPricing => "swing_pricing",
            Self::AntiDilutionLevy => "anti_dilution_levy",
            Self::SidePocket => "side_pocket",
            Self::RedemptionInKind => "redemption_in_kind",
            Self::Suspension => "suspension",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityManagementTool {
    pub kind: LiquidityToolKind,
    pub description: String,
    pub threshold_pct: Option<f64>,
    pub active: bool,
}

/// A time-horizon band with the share of the portfolio redeemable within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityBucket {
    /// Bucket label, e.g. "1d", "31-90d", ">365d".
    pub bucket: String,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityProfile {
    pub redemption_frequency: String,
    pub portfolio_buckets: Vec<LiquidityBucket>,
    pub management_tools: Vec<LiquidityManagementTool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationalRisk {
    pub open_risk_flags: u32,
    pub high_severity_flags: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub liquidity: LiquidityProfile,
    pub operational: OperationalRisk,
}

/// A (region label, percentage) pair of the fund's geographic focus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicExposure {
    pub region: String,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterpartyExposure {
    pub name: String,
    pub lei: Option<String>,
    pub exposure_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterpartyRisk {
    /// Largest counterparty exposures, at most five, in input order.
    pub top_counterparties: Vec<CounterpartyExposure>,
    pub total_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceStatus {
    pub kyc_coverage_pct: f64,
    pub eligible_investor_pct: f64,
    pub recent_violations: u32,
    pub last_check: DateTime<Utc>,
}

/// A complete Annex IV report for one fund, immutable for the duration of
/// serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnexIvReport {
    pub identification: FundIdentification,
    pub investor_concentration: InvestorConcentration,
    pub principal_exposures: PrincipalExposures,
    pub depositary: Option<Depositary>,
    /// Pre-resolved ESMA sub-asset-type code for the fund as a whole;
    /// `OTHR_OTHR` is emitted when absent.
    pub sub_asset_type: Option<String>,
    pub leverage: Leverage,
    pub risk_profile: RiskProfile,
    pub geographic_focus: Vec<GeographicExposure>,
    pub counterparty_risk: CounterpartyRisk,
    pub compliance_status: ComplianceStatus,
    pub generated_at: DateTime<Utc>,
    pub report_version: String,
    pub disclaimer: String,
}

impl AnnexIvReport {
    /// Decode a report from a JSON document.
    pub fn from_json(data: &str) -> Result<Self, AnnexError> {
        Ok(serde_json::from_str(data)?)
    }
}
