//! The Annex IV report data model.
//!
//! An [`AnnexIvReport`] arrives fully populated and schema-valid from
//! whatever system collects the underlying fund data; this crate only reads
//! it. Validation of the figures (percentages summing to 100, NAV
//! consistency and so on) is the producer's contract, not a runtime check
//! here.

mod model;

pub use model::{
    AnnexIvReport, AssetPosition, ComplianceStatus, CounterpartyExposure, CounterpartyRisk,
    Depositary, FundIdentification, GeographicExposure, InvestorCategoryBreakdown,
    InvestorConcentration, InvestorDomicileBreakdown, Leverage, LiquidityBucket,
    LiquidityManagementTool, LiquidityProfile, LiquidityToolKind, OperationalRisk,
    PrincipalExposures, REPORT_VERSION, ReportingPeriod, RiskProfile,
};
