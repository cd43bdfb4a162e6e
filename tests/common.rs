#![allow(dead_code)]

use annexiv_rs::{
    AnnexIvReport, AssetPosition, ComplianceStatus, CounterpartyExposure, CounterpartyRisk,
    Depositary, FundIdentification, GeographicExposure, InvestorCategoryBreakdown,
    InvestorConcentration, InvestorDomicileBreakdown, Leverage, LiquidityBucket,
    LiquidityManagementTool, LiquidityProfile, LiquidityToolKind, OperationalRisk,
    PrincipalExposures, ReportingPeriod, RiskProfile,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

/// A populated German real-estate fund report, the happy-path fixture.
pub fn sample_report() -> AnnexIvReport {
    AnnexIvReport {
        identification: FundIdentification {
            reporting_period: ReportingPeriod {
                start: date(2024, 1, 1),
                end: date(2024, 3, 31),
            },
            fund_name: "Test Immobilien Fonds I".into(),
            national_code: "DE-TEST-001".into(),
            legal_form: "Spezial_AIF".into(),
            domicile: "Germany".into(),
            inception_date: Some(date(2020, 6, 15)),
            manager_name: Some("Test KVG GmbH".into()),
            manager_lei: Some("529900TESTLEI000001".into()),
            reporting_obligation: "Article 24(2)".into(),
            base_currency: "EUR".into(),
        },
        investor_concentration: InvestorConcentration {
            total_investors: 25,
            by_category: vec![
                InvestorCategoryBreakdown {
                    category: "professional".into(),
                    count: 20,
                    pct_of_nav: 85.5,
                },
                InvestorCategoryBreakdown {
                    category: "retail".into(),
                    count: 5,
                    pct_of_nav: 14.5,
                },
            ],
            by_domicile: vec![
                InvestorDomicileBreakdown {
                    domicile: "DE".into(),
                    count: 18,
                    pct_of_nav: 72.0,
                },
                InvestorDomicileBreakdown {
                    domicile: "LU".into(),
                    count: 7,
                    pct_of_nav: 28.0,
                },
            ],
            top_five_investors_pct: 62.3,
        },
        principal_exposures: PrincipalExposures {
            total_aum_units: 100_000.0,
            total_allocated_units: 85_000.0,
            total_aum_eur: Decimal::from(250_000_000_u64),
            total_nav_eur: Decimal::from(212_500_000_u64),
            utilization_pct: 85.0,
            asset_breakdown: vec![
                AssetPosition {
                    name: "Office Berlin".into(),
                    asset_type: "real estate".into(),
                    units: 1.0,
                    value_eur: Decimal::from(120_000_000_u64),
                    pct_of_total: 56.5,
                },
                AssetPosition {
                    name: "Residential Munich".into(),
                    asset_type: "real estate".into(),
                    units: 1.0,
                    value_eur: Decimal::from(80_000_000_u64),
                    pct_of_total: 37.6,
                },
                AssetPosition {
                    name: "Cash Reserve".into(),
                    asset_type: "cash".into(),
                    units: 12_500_000.0,
                    value_eur: Decimal::from(12_500_000_u64),
                    pct_of_total: 5.9,
                },
            ],
        },
        depositary: Some(Depositary {
            name: "Deutsche Depositary AG".into(),
            lei: Some("529900DEPOEXAMPLE01".into()),
            jurisdiction: Some("DE".into()),
            kind: Some("credit_institution".into()),
        }),
        sub_asset_type: Some("PHY_RES_RESD".into()),
        leverage: Leverage {
            gross_method: Some(1.5),
            commitment_method: Some(1.2),
            gross_limit: Some(3.0),
            commitment_limit: Some(2.0),
            compliant: true,
        },
        risk_profile: RiskProfile {
            liquidity: LiquidityProfile {
                redemption_frequency: "Quarterly".into(),
                portfolio_buckets: vec![
                    LiquidityBucket {
                        bucket: "31-90d".into(),
                        pct: 5.9,
                    },
                    LiquidityBucket {
                        bucket: ">365d".into(),
                        pct: 94.1,
                    },
                ],
                management_tools: vec![LiquidityManagementTool {
                    kind: LiquidityToolKind::NoticePeriod,
                    description: "90 days notice".into(),
                    threshold_pct: None,
                    active: true,
                }],
            },
            operational: OperationalRisk {
                open_risk_flags: 2,
                high_severity_flags: 0,
            },
        },
        geographic_focus: vec![
            GeographicExposure {
                region: "Germany".into(),
                pct: 85.0,
            },
            GeographicExposure {
                region: "Eurozone (ex DE)".into(),
                pct: 15.0,
            },
        ],
        counterparty_risk: CounterpartyRisk {
            top_counterparties: vec![CounterpartyExposure {
                name: "Deutsche Bank AG".into(),
                lei: Some("7LTWFZYICNSX8D621K86".into()),
                exposure_pct: 12.5,
            }],
            total_count: 3,
        },
        compliance_status: ComplianceStatus {
            kyc_coverage_pct: 96.0,
            eligible_investor_pct: 100.0,
            recent_violations: 0,
            last_check: ts("2024-03-31T12:00:00Z"),
        },
        generated_at: ts("2024-03-31T14:00:00Z"),
        report_version: "1.0".into(),
        disclaimer: "Test disclaimer text.".into(),
    }
}

/// A report with every optional field absent and every list empty.
pub fn minimal_report() -> AnnexIvReport {
    AnnexIvReport {
        identification: FundIdentification {
            reporting_period: ReportingPeriod {
                start: date(2025, 1, 1),
                end: date(2025, 12, 31),
            },
            fund_name: "Minimal Fund".into(),
            national_code: "DE-MIN-001".into(),
            legal_form: "AIF".into(),
            domicile: "Germany".into(),
            inception_date: None,
            manager_name: None,
            manager_lei: None,
            reporting_obligation: "Article 24(1)".into(),
            base_currency: "EUR".into(),
        },
        investor_concentration: InvestorConcentration {
            total_investors: 0,
            by_category: vec![],
            by_domicile: vec![],
            top_five_investors_pct: 0.0,
        },
        principal_exposures: PrincipalExposures {
            total_aum_units: 0.0,
            total_allocated_units: 0.0,
            total_aum_eur: Decimal::ZERO,
            total_nav_eur: Decimal::ZERO,
            utilization_pct: 0.0,
            asset_breakdown: vec![],
        },
        depositary: None,
        sub_asset_type: None,
        leverage: Leverage {
            gross_method: None,
            commitment_method: None,
            gross_limit: None,
            commitment_limit: None,
            compliant: true,
        },
        risk_profile: RiskProfile {
            liquidity: LiquidityProfile {
                redemption_frequency: "None".into(),
                portfolio_buckets: vec![],
                management_tools: vec![],
            },
            operational: OperationalRisk {
                open_risk_flags: 0,
                high_severity_flags: 0,
            },
        },
        geographic_focus: vec![],
        counterparty_risk: CounterpartyRisk {
            top_counterparties: vec![],
            total_count: 0,
        },
        compliance_status: ComplianceStatus {
            kyc_coverage_pct: 0.0,
            eligible_investor_pct: 0.0,
            recent_violations: 0,
            last_check: ts("2025-12-31T00:00:00Z"),
        },
        generated_at: ts("2025-12-31T12:00:00Z"),
        report_version: "1.0".into(),
        disclaimer: String::new(),
    }
}
