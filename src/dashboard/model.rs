//! Dashboard record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An onboarded intermediary as the dashboard pages see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intermediary {
    pub id: String,
    pub name: String,
    pub company_name: String,
    #[serde(rename = "type")]
    pub intermediary_type: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub pan_number: String,
    pub gst_number: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub bank_name: String,
    pub branch_name: String,
    pub established_year: i32,
    pub onboarded_date: NaiveDate,
}

/// One commission credit paid into the intermediary's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionCredit {
    pub id: String,
    pub date: NaiveDate,
    /// Whole-rupee amount.
    pub amount: i64,
    pub lender_name: String,
    pub transaction_id: String,
    pub description: String,
}

/// One month of referral and portfolio performance.
///
/// The dpd counters bucket delinquent accounts by days past due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetric {
    pub month: String,
    pub leads_referred: u32,
    pub target_leads: u32,
    pub leads_converted: u32,
    pub amount_disbursed: i64,
    pub target_disbursement: i64,
    pub on_time_accounts: u32,
    pub total_accounts: u32,
    pub dpd30_accounts: u32,
    pub dpd60_accounts: u32,
    pub dpd90_accounts: u32,
    pub npa_accounts: u32,
}
