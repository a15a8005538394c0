//! Read-only data provider for the dashboard pages.
//!
//! The onboarding core never touches this; it exists for the bank-analysis
//! and performance pages, which only read.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{CommissionCredit, Intermediary, PerformanceMetric};

/// Read-only queries the dashboard pages consume.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// The onboarded intermediary's profile.
    async fn intermediary_profile(&self) -> Intermediary;

    /// Commission credits, oldest first.
    async fn credit_history(&self) -> Vec<CommissionCredit>;

    /// Monthly performance metrics, oldest first.
    async fn performance_metrics(&self) -> Vec<PerformanceMetric>;
}

/// Static in-memory dataset standing in for a real backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataProvider;

#[async_trait]
impl DataProvider for MockDataProvider {
    async fn intermediary_profile(&self) -> Intermediary {
        Intermediary {
            id: "INT-2023-001".to_string(),
            name: "Exemplar Financial Services".to_string(),
            company_name: "Exemplar Financial Services Pvt Ltd".to_string(),
            intermediary_type: "DSA".to_string(),
            contact_person: "Rahul Sharma".to_string(),
            email: "rahul@exemplarfinancial.com".to_string(),
            phone: "9876543210".to_string(),
            address: "504, Business Tower, Financial District".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "400001".to_string(),
            pan_number: "ABCDE1234F".to_string(),
            gst_number: "27ABCDE1234F1Z5".to_string(),
            account_number: "12345678901".to_string(),
            ifsc_code: "SBIN0001234".to_string(),
            bank_name: "State Bank of India".to_string(),
            branch_name: "Financial District Branch".to_string(),
            established_year: 2015,
            onboarded_date: date(2023, 3, 15),
        }
    }

    async fn credit_history(&self) -> Vec<CommissionCredit> {
        [
            ("CR-2023-001", (2023, 4, 10), 42_750, "ABC Housing Finance", "TXN123456", "Commission for March 2023"),
            ("CR-2023-002", (2023, 5, 12), 51_200, "ABC Housing Finance", "TXN234567", "Commission for April 2023"),
            ("CR-2023-003", (2023, 6, 10), 48_600, "ABC Housing Finance", "TXN345678", "Commission for May 2023"),
            ("CR-2023-004", (2023, 7, 11), 53_500, "ABC Housing Finance", "TXN456789", "Commission for June 2023"),
            ("CR-2023-005", (2023, 8, 10), 62_300, "ABC Housing Finance", "TXN567890", "Commission for July 2023"),
            ("CR-2023-006", (2023, 9, 11), 58_700, "ABC Housing Finance", "TXN678901", "Commission for August 2023"),
            ("CR-2023-007", (2023, 10, 10), 63_100, "XYZ Bank", "TXN789012", "Commission for September 2023"),
            ("CR-2023-008", (2023, 11, 10), 68_200, "XYZ Bank", "TXN890123", "Commission for October 2023"),
            ("CR-2023-009", (2023, 12, 11), 71_500, "XYZ Bank", "TXN901234", "Commission for November 2023"),
            ("CR-2024-001", (2024, 1, 10), 74_800, "XYZ Bank", "TXN012345", "Commission for December 2023"),
            ("CR-2024-002", (2024, 2, 12), 79_500, "PQR Finance Ltd", "TXN123456", "Commission for January 2024"),
            ("CR-2024-003", (2024, 3, 11), 82_300, "PQR Finance Ltd", "TXN234567", "Commission for February 2024"),
        ]
        .into_iter()
        .map(|(id, (y, m, d), amount, lender, txn, description)| CommissionCredit {
            id: id.to_string(),
            date: date(y, m, d),
            amount,
            lender_name: lender.to_string(),
            transaction_id: txn.to_string(),
            description: description.to_string(),
        })
        .collect()
    }

    async fn performance_metrics(&self) -> Vec<PerformanceMetric> {
        [
            ("Apr 2023", 85, 80, 34, 51_000_000, 50_000_000, 33, 34, 1, 0, 0, 0),
            ("May 2023", 92, 85, 38, 57_000_000, 52_500_000, 37, 38, 1, 0, 0, 0),
            ("Jun 2023", 88, 90, 36, 54_000_000, 55_000_000, 35, 36, 1, 0, 0, 0),
            ("Jul 2023", 96, 90, 43, 64_500_000, 55_000_000, 41, 43, 2, 0, 0, 0),
            ("Aug 2023", 102, 95, 45, 67_500_000, 57_500_000, 42, 45, 2, 1, 0, 0),
            ("Sep 2023", 94, 100, 40, 60_000_000, 60_000_000, 37, 40, 2, 1, 0, 0),
            ("Oct 2023", 105, 100, 48, 72_000_000, 60_000_000, 45, 48, 2, 1, 0, 0),
            ("Nov 2023", 112, 105, 52, 78_000_000, 62_500_000, 48, 52, 3, 1, 0, 0),
            ("Dec 2023", 118, 110, 56, 84_000_000, 65_000_000, 51, 56, 3, 2, 0, 0),
            ("Jan 2024", 124, 115, 59, 88_500_000, 67_500_000, 53, 59, 4, 1, 1, 0),
            ("Feb 2024", 130, 120, 63, 94_500_000, 70_000_000, 56, 63, 4, 2, 1, 0),
            ("Mar 2024", 135, 125, 68, 102_000_000, 72_500_000, 60, 68, 5, 2, 1, 0),
        ]
        .into_iter()
        .map(
            |(month, referred, target, converted, disbursed, target_disb, on_time, total, d30, d60, d90, npa)| {
                PerformanceMetric {
                    month: month.to_string(),
                    leads_referred: referred,
                    target_leads: target,
                    leads_converted: converted,
                    amount_disbursed: disbursed,
                    target_disbursement: target_disb,
                    on_time_accounts: on_time,
                    total_accounts: total,
                    dpd30_accounts: d30,
                    dpd60_accounts: d60,
                    dpd90_accounts: d90,
                    npa_accounts: npa,
                }
            },
        )
        .collect()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}
