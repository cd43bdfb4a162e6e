//! annexiv-rs: ESMA AIFMD Annex IV XML serializer.
//!
//! Takes a fully populated [`AnnexIvReport`] and produces the XML filing a
//! national regulator expects under the AIFMD Annex IV reporting regime
//! (ESMA/2013/1358 technical standards): `AIFReportingInfo` →
//! `AIFMRecordInfo` → `AIFRecordInfo` → section blocks.
//!
//! Everything in this crate is a pure function over an immutable report:
//! no I/O, no shared state, no async. Build the report elsewhere, call
//! [`serialize_report`] (or [`serialize_aggregate`] for a multi-fund,
//! manager-level filing), write the string wherever it needs to go.

pub mod classify;
pub mod core;
pub mod report;
pub mod serialize;

pub use crate::core::error::AnnexError;
pub use crate::core::xml::{XmlWriter, escape};
pub use report::{
    AnnexIvReport, AssetPosition, ComplianceStatus, CounterpartyExposure, CounterpartyRisk,
    Depositary, FundIdentification, GeographicExposure, InvestorCategoryBreakdown,
    InvestorConcentration, InvestorDomicileBreakdown, Leverage, LiquidityBucket,
    LiquidityManagementTool, LiquidityProfile, LiquidityToolKind, OperationalRisk,
    PrincipalExposures, REPORT_VERSION, ReportingPeriod, RiskProfile,
};
pub use serialize::{serialize_aggregate, serialize_report};
