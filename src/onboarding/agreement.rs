//! Partnership agreement document rendering.

use chrono::NaiveDate;

use super::model::AgreementPreviewData;

/// Render the partnership agreement as plain text, with the partner's
/// details interpolated. The renderer only reads the preview snapshot; it
/// never touches session state.
pub fn render_agreement(data: &AgreementPreviewData, effective_date: NaiveDate) -> String {
    let date = effective_date.format("%-d %B %Y");
    format!(
        "\
PARTNERSHIP AGREEMENT

This Partnership Agreement (the \"Agreement\") is made and entered into on \
{date} by and between:

Finance Partners, Inc. (\"Company\") and {company} (\"Partner\"), \
collectively referred to as the \"Parties\".

1. PURPOSE OF PARTNERSHIP
The purpose of this partnership is to establish a formal relationship between \
the Company and the Partner for the marketing, referral, and servicing of \
financial products and services.

2. TERM
This Agreement shall commence on the date of execution and shall continue for \
a period of one (1) year, automatically renewing for successive one-year \
terms unless terminated by either Party.

3. PARTNER RESPONSIBILITIES
The Partner shall:
  - Market and promote the Company's financial products and services.
  - Refer qualified leads to the Company.
  - Provide accurate information to potential customers.
  - Comply with all applicable laws and regulations.
  - Maintain confidentiality of all proprietary information.

4. COMPANY RESPONSIBILITIES
The Company shall:
  - Provide training and support to the Partner.
  - Process referred applications in a timely manner.
  - Pay commission to the Partner as per the agreed schedule.
  - Maintain required licenses and regulatory compliance.

5. COMMISSION STRUCTURE
The Partner shall be entitled to commissions based on the successful \
conversion of leads and disbursement of loans as detailed in Annexure A.

6. TERMINATION
Either Party may terminate this Agreement with thirty (30) days written \
notice. The Company reserves the right to terminate the Agreement immediately \
for violation of laws, regulations, or the terms of this Agreement.

7. GOVERNING LAW
This Agreement shall be governed by and construed in accordance with the laws \
of the state/country where the Company is headquartered.

SIGNED BY THE PARTIES:

For Finance Partners, Inc.:
  Authorized Signatory
  Name: _________________
  Title: _________________
  Date: _________________

For {company}:
  Authorized Signatory
  Name: {name}
  Email: {email}
  Date: _________________
",
        date = date,
        company = data.company_name,
        name = data.name,
        email = data.email,
    )
}
