//! Document assembly: report records in, Annex IV XML out.
//!
//! The element names, nesting order and conditional-emission rules here are
//! the compatibility surface consumed by the regulator's parser. List caps
//! (5 instruments, 5 markets, 10 investor domiciles, 5 counterparties) keep
//! the first N entries in input order; nothing is sorted or ranked.

use chrono::{Datelike, SecondsFormat};

use crate::classify::{
    asset_type_code, category_pct, depositary_code, frequency_code, is_eea_domicile,
    member_state_code, predominant_aif_type, region_code,
};
use crate::core::xml::XmlWriter;
use crate::report::{AnnexIvReport, FundIdentification};

const NAMESPACE: &str = "urn:esma:xsd:aifmd-reporting";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str = "urn:esma:xsd:aifmd-reporting AIFMD_Reporting_DataTypes.xsd";

/// Calendar quarter label ("Q1".."Q4") and four-digit year of the
/// reporting-period end date.
fn period_type_and_year(id: &FundIdentification) -> (String, String) {
    let end = id.reporting_period.end;
    let quarter = end.month().div_ceil(3);
    (format!("Q{quarter}"), end.year().to_string())
}

/// Composite reporting code: member state + marker + first 8 characters of
/// the fund's national code, upper-cased.
fn report_code(member_state: &str, marker: &str, national_code: &str) -> String {
    let prefix: String = national_code.chars().take(8).collect();
    format!("{member_state}{marker}{}", prefix.to_uppercase())
}

fn rfc3339(ts: chrono::DateTime<chrono::Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Manager-level header shared by the single-fund and aggregate documents.
/// Opens `AIFMRecordInfo` and `AIFMCompleteDescription`; the caller closes
/// both.
fn write_manager_header(
    w: &mut XmlWriter,
    id: &FundIdentification,
    member_state: &str,
    period_type: &str,
    period_year: &str,
) {
    w.open("AIFMRecordInfo");
    w.leaf(
        "AIFMNationalCode",
        id.manager_lei.as_deref().unwrap_or("PENDING"),
    );
    w.leaf(
        "AIFMName",
        id.manager_name.as_deref().unwrap_or("Not specified"),
    );
    w.leaf("AIFMEEAFlag", is_eea_domicile(&id.domicile));
    w.leaf("AIFMNoReportingFlag", false);
    w.leaf("ReportingPeriodType", period_type);
    w.leaf("ReportingPeriodYear", period_year);
    w.leaf(
        "AIFMReportingObligationChangeFrequencyCode",
        frequency_code(&id.reporting_obligation).code(),
    );
    w.open("AIFMCompleteDescription");
    w.leaf(
        "AIFMIdentifier",
        id.manager_lei.as_deref().unwrap_or(&id.national_code),
    );
    if let Some(lei) = &id.manager_lei {
        w.leaf("AIFMIdentifierLEI", lei.as_str());
    }
    w.leaf(
        "AIFMReportingCode",
        report_code(member_state, "AIFM", &id.national_code),
    );
}

/// Serialize one fund report to a complete Annex IV filing.
#[must_use]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, fields(fund = %report.identification.fund_name))
)]
pub fn serialize_report(report: &AnnexIvReport) -> String {
    let id = &report.identification;
    let ic = &report.investor_concentration;
    let pe = &report.principal_exposures;
    let lev = &report.leverage;
    let risk = &report.risk_profile;
    let cs = &report.compliance_status;

    let (period_type, period_year) = period_type_and_year(id);
    let member_state = member_state_code(&id.domicile);
    let predominant_type = predominant_aif_type(&id.legal_form, Some(&id.fund_name));

    let mut w = XmlWriter::new();
    w.open_multiline(
        "AIFReportingInfo",
        &[
            ("xmlns", NAMESPACE),
            ("xmlns:xsi", XSI_NAMESPACE),
            ("xsi:schemaLocation", SCHEMA_LOCATION),
            ("ReportingMemberState", &member_state),
        ],
    );

    write_manager_header(&mut w, id, &member_state, &period_type, &period_year);

    w.open("AIFRecordInfo");
    w.leaf("AIFNationalCode", id.national_code.as_str());
    w.leaf("AIFName", id.fund_name.as_str());
    w.leaf("AIFEEAFlag", is_eea_domicile(&id.domicile));
    w.leaf(
        "AIFReportingCode",
        report_code(&member_state, "AIF", &id.national_code),
    );
    w.leaf("AIFDomicile", id.domicile.as_str());
    w.leaf_opt("AIFInceptionDate", id.inception_date);
    w.leaf("ReportingPeriodType", period_type.as_str());
    w.leaf("ReportingPeriodYear", period_year.as_str());
    w.leaf("ReportingPeriodStartDate", id.reporting_period.start);
    w.leaf("ReportingPeriodEndDate", id.reporting_period.end);
    w.leaf("AIFMasterFeederStatus", "NONE");
    w.leaf("AIFBaseCurrencyDescription", id.base_currency.as_str());

    w.open("AIFCompleteDescription");

    w.open("AIFPrincipalInfo");
    w.leaf("AIFIdentification", id.national_code.as_str());
    w.open("MainInstrumentsTraded");
    for position in pe.asset_breakdown.iter().take(5) {
        w.open("MainInstrumentTraded");
        w.leaf("SubAssetType", asset_type_code(&position.asset_type).code());
        w.leaf("InstrumentName", position.name.as_str());
        w.leaf("PositionValue", position.value_eur);
        w.leaf("PositionRate", position.pct_of_total);
        w.close("MainInstrumentTraded");
    }
    w.close("MainInstrumentsTraded");
    w.leaf("PredominantAIFType", predominant_type.code());
    w.leaf(
        "SubAssetType",
        report
            .sub_asset_type
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("OTHR_OTHR"),
    );
    w.comment("NAV and GAV in EUR as required by ESMA Annex IV");
    w.leaf("NetAssetValue", pe.total_nav_eur);
    w.leaf("GrossAssetValue", pe.total_aum_eur);
    w.leaf("BaseCurrencyDescription", id.base_currency.as_str());

    w.open("InvestorConcentration");
    w.leaf(
        "ProfessionalInvestorConcentrationRate",
        category_pct(&ic.by_category, "professional"),
    );
    w.leaf(
        "RetailInvestorConcentrationRate",
        category_pct(&ic.by_category, "retail"),
    );
    w.leaf("TopFiveBeneficialOwnersRate", ic.top_five_investors_pct);
    w.close("InvestorConcentration");

    if !report.geographic_focus.is_empty() {
        w.open("AifmPrincipalMarkets");
        for exposure in report.geographic_focus.iter().take(5) {
            w.open("AIFMPrincipalMarket");
            w.leaf("MarketIdentification", region_code(&exposure.region));
            w.leaf("AggregateValueAmount", exposure.pct);
            w.close("AIFMPrincipalMarket");
        }
        w.close("AifmPrincipalMarkets");
    }
    w.close("AIFPrincipalInfo");

    w.open("AIFIndividualInfo");

    w.open("IndividualExposure");
    for breakdown in ic.by_domicile.iter().take(10) {
        w.open("InvestorBreakdown");
        w.leaf("InvestorCountry", breakdown.domicile.as_str());
        w.leaf("InvestorCount", breakdown.count);
        w.leaf("InvestorPercentage", breakdown.pct_of_nav);
        w.close("InvestorBreakdown");
    }
    w.close("IndividualExposure");

    if !report.counterparty_risk.top_counterparties.is_empty() {
        w.open("CounterpartyRiskProfile");
        w.leaf(
            "TotalCounterpartyExposure",
            report.counterparty_risk.total_count,
        );
        for cp in report.counterparty_risk.top_counterparties.iter().take(5) {
            w.open("TopCounterparty");
            w.leaf("CounterpartyName", cp.name.as_str());
            if let Some(lei) = &cp.lei {
                w.leaf("CounterpartyLEI", lei.as_str());
            }
            w.leaf("ExposureRate", cp.exposure_pct);
            w.close("TopCounterparty");
        }
        w.close("CounterpartyRiskProfile");
    }

    w.open("AIFLeverageInfo");
    w.open("AIFLeverageArticle242");
    w.leaf_opt("GrossMethodRate", lev.gross_method);
    w.leaf_opt("CommitmentMethodRate", lev.commitment_method);
    w.close("AIFLeverageArticle242");
    if lev.gross_limit.is_some() || lev.commitment_limit.is_some() {
        w.open("RegulatoryLeverageLimits");
        if let Some(limit) = lev.commitment_limit {
            w.leaf("CommitmentMethodLimit", limit);
        }
        if let Some(limit) = lev.gross_limit {
            w.leaf("GrossMethodLimit", limit);
        }
        w.leaf("LeverageCompliant", lev.compliant);
        w.close("RegulatoryLeverageLimits");
    }
    w.close("AIFLeverageInfo");

    w.open("LiquidityProfile");
    w.open("PortfolioLiquidityProfile");
    for bucket in &risk.liquidity.portfolio_buckets {
        w.open("PortfolioLiquidityBucket");
        w.leaf("BucketPeriod", bucket.bucket.as_str());
        w.leaf("BucketRate", bucket.pct);
        w.close("PortfolioLiquidityBucket");
    }
    w.close("PortfolioLiquidityProfile");
    w.open("InvestorLiquidityProfile");
    w.leaf(
        "InvestorRedemptionFrequency",
        risk.liquidity.redemption_frequency.as_str(),
    );
    w.close("InvestorLiquidityProfile");
    if !risk.liquidity.management_tools.is_empty() {
        w.open("LiquidityManagementTools");
        for tool in &risk.liquidity.management_tools {
            w.open("LiquidityManagementTool");
            w.leaf("LMTType", tool.kind.as_str());
            w.leaf("LMTActive", tool.active);
            w.leaf("LMTDescription", tool.description.as_str());
            w.close("LiquidityManagementTool");
        }
        w.close("LiquidityManagementTools");
    }
    w.close("LiquidityProfile");

    w.open("OperationalRisk");
    w.leaf("TotalOpenRiskFlags", risk.operational.open_risk_flags);
    w.leaf("HighSeverityFlags", risk.operational.high_severity_flags);
    w.close("OperationalRisk");

    w.close("AIFIndividualInfo");
    w.close("AIFCompleteDescription");

    if let Some(dep) = report.depositary.as_ref().filter(|d| !d.name.is_empty()) {
        w.open("AIFDepositaryInfo");
        w.leaf("DepositaryName", dep.name.as_str());
        if let Some(lei) = &dep.lei {
            w.leaf("DepositaryLEI", lei.as_str());
        }
        w.leaf(
            "DepositaryCountry",
            dep.jurisdiction
                .as_deref()
                .filter(|j| !j.is_empty())
                .unwrap_or("DE"),
        );
        w.leaf("DepositaryType", depositary_code(dep.kind.as_deref()).code());
        w.close("AIFDepositaryInfo");
    }

    w.open("CaelithComplianceExtension");
    w.leaf("KYCCoveragePct", cs.kyc_coverage_pct);
    w.leaf("EligibleInvestorPct", cs.eligible_investor_pct);
    w.leaf("RecentViolations", cs.recent_violations);
    w.leaf("LastComplianceCheck", rfc3339(cs.last_check));
    w.close("CaelithComplianceExtension");

    w.leaf("GeneratedAt", rfc3339(report.generated_at));
    w.leaf("ReportVersion", report.report_version.as_str());
    w.close("AIFRecordInfo");
    w.close("AIFMCompleteDescription");
    w.close("AIFMRecordInfo");
    w.leaf("Disclaimer", report.disclaimer.as_str());
    w.close("AIFReportingInfo");

    w.finish()
}

/// Serialize a manager-level aggregate filing for funds sharing one AIFM.
///
/// The manager block is derived from the first report only; each fund then
/// contributes a lightweight marker record in input order. An empty slice
/// yields an empty string, not a root-only document.
#[must_use]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, fields(funds = reports.len()))
)]
pub fn serialize_aggregate(reports: &[AnnexIvReport]) -> String {
    let Some(first) = reports.first() else {
        return String::new();
    };

    let id = &first.identification;
    let (period_type, period_year) = period_type_and_year(id);
    let member_state = member_state_code(&id.domicile);

    let mut w = XmlWriter::new();
    w.open_multiline(
        "AIFReportingInfo",
        &[
            ("xmlns", NAMESPACE),
            ("xmlns:xsi", XSI_NAMESPACE),
            ("ReportingMemberState", &member_state),
        ],
    );

    write_manager_header(&mut w, id, &member_state, &period_type, &period_year);

    for report in reports {
        let fund = &report.identification;
        w.comment(&format!("Fund: {}", fund.fund_name));
        w.leaf("AIFRecordInfo_FundName", fund.fund_name.as_str());
        w.leaf("AIFRecordInfo_FundCode", fund.national_code.as_str());
    }

    w.close("AIFMCompleteDescription");
    w.close("AIFMRecordInfo");
    w.leaf("Disclaimer", first.disclaimer.as_str());
    w.close("AIFReportingInfo");

    w.finish()
}
