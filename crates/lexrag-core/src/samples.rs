//! Built-in sample corpora.
//!
//! Used when no document directory is given or the given one is missing
//! or empty. The enterprise corpus doubles as the content written by the
//! `lexrag generate` command.

use crate::classify::classify;
use crate::error::Result;
use crate::models::{title_from_stem, Classification, Document};
use crate::store::DocumentSource;

/// Which built-in corpus to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinCorpus {
    /// Five HR handbook entries, ids `1`..`5`.
    Hr,
    /// Five regulatory policies with explicit classifications.
    Compliance,
    /// Nine synthetic finance, HR, and pharma documents.
    Enterprise,
}

impl BuiltinCorpus {
    pub fn documents(&self) -> Vec<Document> {
        match self {
            BuiltinCorpus::Hr => hr_documents(),
            BuiltinCorpus::Compliance => compliance_documents(),
            BuiltinCorpus::Enterprise => enterprise_documents(),
        }
    }
}

impl DocumentSource for BuiltinCorpus {
    fn name(&self) -> &str {
        match self {
            BuiltinCorpus::Hr => "builtin:hr",
            BuiltinCorpus::Compliance => "builtin:compliance",
            BuiltinCorpus::Enterprise => "builtin:enterprise",
        }
    }

    fn load(&self) -> Result<Vec<Document>> {
        Ok(self.documents())
    }
}

fn hr_documents() -> Vec<Document> {
    vec![
        Document::new(
            "1",
            "Company Vacation Policy",
            "Employees are entitled to 15 days of paid vacation per year. \
             Vacation must be requested at least 2 weeks in advance and approved by a manager. \
             Unused vacation days can be carried over to the next year, up to a maximum of 5 days.",
        ),
        Document::new(
            "2",
            "Remote Work Guidelines",
            "Employees may work remotely up to 3 days per week with manager approval. \
             Remote workers must be available during core hours (10 AM - 3 PM) and maintain \
             regular communication with their team. A home office stipend of $500 is provided annually.",
        ),
        Document::new(
            "3",
            "Health Benefits",
            "The company provides comprehensive health insurance covering medical, dental, and vision. \
             Employee premiums are 20% of the total cost, with the company covering 80%. \
             Dependents can be added to the plan. Annual enrollment period is in November.",
        ),
        Document::new(
            "4",
            "Performance Reviews",
            "Performance reviews are conducted annually in January. Employees receive feedback on \
             their accomplishments, areas for improvement, and career development goals. \
             Reviews are used to determine annual salary adjustments and bonus eligibility.",
        ),
        Document::new(
            "5",
            "Professional Development",
            "The company supports professional development with a $2,000 annual budget per employee. \
             This can be used for courses, conferences, certifications, or books. \
             Employees should submit a request form to their manager for approval.",
        ),
    ]
}

fn compliance_documents() -> Vec<Document> {
    vec![
        Document::new(
            "HIPAA-001",
            "Patient Data Retention Policy",
            "All patient records must be retained for a minimum of 7 years per HIPAA regulations. \
             Medical records for minors must be kept until the patient reaches age 21. \
             Electronic health records must be encrypted at rest and in transit using AES-256. \
             Access to patient data requires multi-factor authentication and is logged.",
        )
        .with_classification(Classification::Confidential)
        .with_category("healthcare_compliance"),
        Document::new(
            "GDPR-002",
            "Data Subject Rights",
            "Under GDPR, individuals have the right to access their personal data, request corrections, \
             and request deletion (right to be forgotten). Organizations must respond to data subject \
             requests within 30 days. Personal data must not be transferred outside the EU without \
             adequate safeguards. All data processing activities must have a legal basis.",
        )
        .with_classification(Classification::Confidential)
        .with_category("privacy_compliance"),
        Document::new(
            "SOX-003",
            "Financial Controls",
            "Sarbanes-Oxley Act requires public companies to maintain accurate financial records. \
             All financial transactions must have dual approval and complete audit trails. \
             Internal controls must be documented and tested annually. Executive certification \
             of financial statements is required. Retention period for audit materials is 7 years.",
        )
        .with_classification(Classification::Confidential)
        .with_category("financial_compliance"),
        Document::new(
            "FDA-004",
            "Adverse Event Reporting",
            "FDA requires reporting of serious adverse events within specific timeframes: \
             fatal or life-threatening events within 7 days, other serious events within 15 days. \
             All adverse event records must be maintained for the lifetime of the drug plus 10 years. \
             Safety data must comply with 21 CFR Part 312 and be submitted electronically via FDA ESG.",
        )
        .with_classification(Classification::Confidential)
        .with_category("pharma_compliance"),
        Document::new(
            "PCI-005",
            "Payment Card Data Security",
            "PCI DSS requires encryption of cardholder data during transmission over public networks. \
             Card data must not be stored after authorization unless encrypted. Access to cardholder \
             data must be restricted on a need-to-know basis. Regular penetration testing and \
             vulnerability scans are mandatory. Incident response plans must be tested annually.",
        )
        .with_classification(Classification::Restricted)
        .with_category("payment_compliance"),
    ]
}

/// One file of the synthetic enterprise corpus.
#[derive(Debug, Clone, Copy)]
pub struct EnterpriseFile {
    pub category: &'static str,
    pub file_name: &'static str,
    pub content: &'static str,
}

impl EnterpriseFile {
    /// Identifier used both for the built-in corpus and for files loaded
    /// from a generated tree: `<category>/<file name>`.
    pub fn document_id(&self) -> String {
        format!("{}/{}", self.category, self.file_name)
    }

    /// Text as written to disk: trimmed, with a single trailing newline.
    pub fn file_text(&self) -> String {
        format!("{}\n", self.content.trim())
    }

    pub fn to_document(&self) -> Document {
        let stem = self
            .file_name
            .strip_suffix(".txt")
            .unwrap_or(self.file_name);
        let text = self.file_text();
        let classification = classify(&text);
        Document::new(self.document_id(), title_from_stem(stem), text)
            .with_classification(classification)
            .with_category(self.category)
    }
}

fn enterprise_documents() -> Vec<Document> {
    ENTERPRISE_FILES.iter().map(EnterpriseFile::to_document).collect()
}

pub const FINANCE_CATEGORY: &str = "finance_reports";
pub const HR_CATEGORY: &str = "hr_policies";
pub const PHARMA_CATEGORY: &str = "pharma_regulations";

/// The synthetic enterprise corpus, grouped by category.
pub const ENTERPRISE_FILES: &[EnterpriseFile] = &[
    EnterpriseFile {
        category: FINANCE_CATEGORY,
        file_name: "audit_guidelines.txt",
        content: r#"Title: Internal Audit Guidelines Q2 2024

Document ID: FIN-AUD-2024-Q2
Classification: Confidential

Policy Summary:
All transactions over $50,000 require dual approval.
Audit evidence retention: 5 years.
Quarterly risk assessment mandatory for all financial departments.

Relevant Standards:
- SOX 404 Compliance
- IFRS Reporting Standards
- GAAP Accounting Principles

Key Controls:
- Segregation of duties enforced
- All financial transactions require supporting documentation
- Monthly reconciliation of all accounts
- Annual external audit mandatory
"#,
    },
    EnterpriseFile {
        category: FINANCE_CATEGORY,
        file_name: "investment_policy.txt",
        content: r#"Title: Investment Policy Statement 2024

Document ID: FIN-INV-2024-001
Classification: Confidential

Objectives:
- Capital preservation
- Liquidity maintenance
- Risk-adjusted returns

Authorized Investments:
- U.S. Treasury securities
- Investment-grade corporate bonds (rated A or higher)
- Money market funds
- FDIC-insured certificates of deposit

Prohibited Investments:
- Individual equities
- Derivatives and options
- Cryptocurrencies
- Any security rated below investment grade

Portfolio Guidelines:
- Maximum single issuer concentration: 5%
- Minimum credit rating: A
- Maximum portfolio duration: 5 years
- Quarterly rebalancing required
"#,
    },
    EnterpriseFile {
        category: FINANCE_CATEGORY,
        file_name: "financial_controls.txt",
        content: r#"Title: Financial Controls Framework 2024

Document ID: FIN-CTL-2024-001

Internal Controls:
- Dual authorization for payments over $10,000
- Monthly bank reconciliation
- Quarterly financial reporting to Board
- Annual compliance audit

Access Controls:
- Role-based access to financial systems
- Multi-factor authentication required
- Quarterly access reviews
- Immediate access revocation upon termination

Documentation Requirements:
- All expenses require receipts
- Purchase orders mandatory for purchases over $1,000
- Contract retention: 7 years
- Audit trail for all transactions
"#,
    },
    EnterpriseFile {
        category: HR_CATEGORY,
        file_name: "employee_policy.txt",
        content: r#"Title: Employee Data Protection Policy 2024

Document ID: HR-POL-2024-001

Summary:
This document outlines HR data handling policies to comply with GDPR and HIPAA regulations.

Key Points:
- Employee data retention period: 7 years
- Access restricted to authorized HR personnel
- Audit logs retained for all employee data access
- Mandatory data anonymization for analytics

Compliance References:
- EU GDPR Article 5
- HIPAA Privacy Rule §164.530

Data Security:
- Encryption at rest and in transit
- Multi-factor authentication required
- Annual security training mandatory
- Incident response plan in place
"#,
    },
    EnterpriseFile {
        category: HR_CATEGORY,
        file_name: "benefits_overview.txt",
        content: r#"Title: Employee Benefits Overview 2024

Document ID: HR-BEN-2024-001

Health Insurance:
- Medical, dental, and vision coverage
- Employer covers 80% of premium
- Dependent coverage available

Retirement Benefits:
- 401(k) with 50% employer match up to 6%
- Immediate vesting for employee contributions
- 3-year vesting for employer contributions

Paid Time Off:
- Vacation: 15-20 days based on tenure
- Sick leave: 10 days per year
- Personal days: 3 days per year
- 10 paid holidays

Parental Leave:
- Maternity leave: 12 weeks paid
- Paternity leave: 6 weeks paid
- Adoption leave: 8 weeks paid
"#,
    },
    EnterpriseFile {
        category: HR_CATEGORY,
        file_name: "compliance_summary.txt",
        content: r#"Title: HR Compliance Summary 2024

Document ID: HR-COMP-2024-001

Employment Law Compliance:
- EEO-1 reporting: March 31 deadline
- FMLA eligibility: 12 months service, 1,250 hours
- FLSA overtime requirements enforced
- I-9 verification within 3 days of hire

Data Privacy:
- GDPR compliance for EU employees
- CCPA compliance for California residents
- Annual privacy training required
- Data breach notification within 72 hours

Benefits Compliance:
- ACA coverage for full-time employees
- COBRA continuation coverage offered
- ERISA compliance for retirement plans
- Form 5500 filing deadline: July 31

Recordkeeping:
- Personnel files: 7 years post-termination
- Payroll records: 3 years
- I-9 forms: 3 years from hire or 1 year from termination
- Benefits enrollment: 6 years
"#,
    },
    EnterpriseFile {
        category: PHARMA_CATEGORY,
        file_name: "fda_reporting_requirements.txt",
        content: r#"Title: FDA Drug Safety Reporting Protocol

Document ID: PHARMA-FDA-2024-001

Regulatory Framework:
- 21 CFR Part 312 (IND Safety Reporting)
- 21 CFR Part 314 (NDA Safety Reporting)
- 21 CFR Part 11 (Electronic Records)

Safety Reporting Timelines:
- Fatal/Life-threatening: 7 days initial, 8 days follow-up
- Serious unexpected: 15 days
- Annual safety reports: 60 days from IND anniversary

Data Retention:
- Adverse event data logs in secure repositories
- Retention period: Product lifetime + 10 years minimum
- Electronic and paper records maintained

Compliance Requirements:
- Data residency must comply with 21 CFR Part 11
- Electronic signatures and audit trails required
- System validation documented
- Regular compliance audits

Applies to: Clinical, Regulatory, QA teams
"#,
    },
    EnterpriseFile {
        category: PHARMA_CATEGORY,
        file_name: "drug_safety_protocols.txt",
        content: r#"Title: Drug Safety and Pharmacovigilance Protocol

Document ID: PHARMA-PV-2024-001

Adverse Event Monitoring:
- Continuous monitoring of all approved products
- Literature surveillance weekly
- Social media monitoring daily
- Patient support program tracking

Signal Detection:
- Statistical signal detection quarterly
- Medical review of all serious events
- Aggregate analysis monthly
- Risk-benefit assessment ongoing

Quality Management:
- GVP (Good Vigilance Practice) compliance
- Standard operating procedures maintained
- Training program for all staff
- Quality metrics tracked monthly

Regulatory Reporting:
- MedWatch submissions per FDA requirements
- Periodic safety update reports
- Risk evaluation and mitigation strategies
- Regulatory intelligence monitoring
"#,
    },
    EnterpriseFile {
        category: PHARMA_CATEGORY,
        file_name: "clinical_trial_protocol.txt",
        content: r#"Title: Clinical Trial Protocol Guidelines

Document ID: PHARMA-CTP-2024-001

ICH-GCP Compliance:
- Good Clinical Practice standards adherence
- Institutional Review Board approval required
- Informed consent process documented
- Protocol amendments properly submitted

Study Design Requirements:
- Clear objectives and endpoints defined
- Statistical analysis plan pre-specified
- Data safety monitoring board established
- Sample size justification documented

Regulatory Requirements:
- IND application for investigational drugs
- Annual reports to FDA
- Safety reports per 21 CFR 312.32
- Protocol registration on ClinicalTrials.gov

Quality Assurance:
- Source data verification
- Site monitoring visits
- Audit trail for all data
- Document retention per regulations

Participant Protection:
- Informed consent mandatory
- Privacy and confidentiality protected
- Right to withdraw anytime
- Safety monitoring throughout study
"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DocumentStore;

    #[test]
    fn test_corpora_have_unique_ids() {
        for corpus in [
            BuiltinCorpus::Hr,
            BuiltinCorpus::Compliance,
            BuiltinCorpus::Enterprise,
        ] {
            assert!(DocumentStore::from_documents(corpus.documents()).is_ok());
        }
    }

    #[test]
    fn test_corpus_sizes() {
        assert_eq!(BuiltinCorpus::Hr.documents().len(), 5);
        assert_eq!(BuiltinCorpus::Compliance.documents().len(), 5);
        assert_eq!(BuiltinCorpus::Enterprise.documents().len(), 9);
    }

    #[test]
    fn test_compliance_classifications() {
        let docs = BuiltinCorpus::Compliance.documents();
        let pci = docs.iter().find(|d| d.id == "PCI-005").unwrap();
        assert_eq!(pci.classification, Some(Classification::Restricted));
        assert!(docs.iter().all(|d| d.requires_authorization()));
    }

    #[test]
    fn test_enterprise_documents() {
        let docs = BuiltinCorpus::Enterprise.documents();
        let audit = docs
            .iter()
            .find(|d| d.id == "finance_reports/audit_guidelines.txt")
            .unwrap();
        assert_eq!(audit.title, "Audit Guidelines");
        assert_eq!(audit.category.as_deref(), Some("finance_reports"));
        assert_eq!(audit.classification, Some(Classification::Confidential));
        assert!(audit.content.ends_with("Annual external audit mandatory\n"));
    }
}
