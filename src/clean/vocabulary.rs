use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Uppercase terms common to annual-report section titles and tables of
/// contents. A heading made only of these words is treated as boilerplate.
pub const REPORT_VOCABULARY: &[&str] = &[
    // Section and line-item terms
    "ABSTRACT", "ACCOUNT", "ACCOUNTING", "ACCOUNTS", "ACCRUAL", "ACQUISITION",
    "ADMINISTRATION", "ANALYSIS", "ANNUAL", "APPENDIX", "APPLICATION", "ASSETS",
    "ASSUMPTIONS", "AUDIT", "AUDITOR", "BALANCE", "BANK", "BENEFIT", "BENEFITS", "BOARD",
    "BUDGET", "BUSINESS", "CAPITALISE", "CASH", "CHANGES", "CHARTER", "CLOSING",
    "COMMISSION", "COMMITTEE", "COMMUNICATION", "COMPANY", "COMPLIANCE", "COMPONENTS",
    "CONCLUSION", "CONNECT", "CONSOLIDATED", "CONSULTING", "CONTENTS", "CONTRACT",
    "CONTRACTS", "CONTRIBUTION", "CONTRIBUTIONS", "CONTROL", "CORPORATE", "COST", "COSTS",
    "CREATE", "CREDIT", "CURRENCY", "CURRENT", "DATE", "DEBT", "DECLARATION",
    "DEPRECIATION", "DERIVATIVE", "DESCRIPTION", "DETAILS", "DEVELOPMENT", "DIRECTORS",
    "DIVIDEND", "DIVIDENDS", "EARNINGS", "ECONOMIC", "EQUITY", "EXPENDITURE", "EXPENSE",
    "EXPENSES", "EXPORT", "EXPOSURE", "EXTENSIONS", "FACILITIES", "FEE", "FEES", "FINANCE",
    "FINANCIAL", "FISCAL", "FLOW", "FORECAST", "FOREIGN", "FUND", "FUNDS", "GAINS",
    "GENERAL", "GOVERNANCE", "GOVERNMENT", "GROWTH", "IMPAIRMENT", "INCOME", "INDEPENDENT",
    "INDEX", "INDICATORS", "INDUSTRY", "INFLATION", "INFORMATION", "INITIATIVE",
    "INITIATIVES", "INNOVATION", "INSIGHT", "INSIGHTS", "INSTITUTION", "INSURANCE",
    "INTEREST", "INTERNAL", "INTERNATIONAL", "INVESTMENT", "INVESTMENTS", "INVESTOR",
    "INVESTORS", "ITEM", "ITEMS", "JOURNAL", "LIABILITIES", "LIABILITY", "LIQUIDITY",
    "LOSS", "LOSSES", "MANAGEMENT", "MANAGER", "MARKET", "MEASURES", "MERGER", "MISSION",
    "MONTH", "NARRATIVE", "NET", "NOTE", "NOTES", "OBJECTIVE", "OBJECTIVES", "OPERATIONAL",
    "OPERATIONS", "OPINION", "OUTCOME", "OUTCOMES", "OUTLOOK", "OVERVIEW", "OWNERSHIP",
    "PAGE", "PAGES", "PARTNERSHIP", "PAYABLE", "PAYOUT", "PERFORMANCE", "PERIOD", "PLAN",
    "PLANNING", "POLICY", "PORTFOLIO", "POSITION", "POTENTIAL", "PRACTICES", "PRELIMINARY",
    "PREMIUM", "PRESENTATION", "PRICE", "PRINCIPAL", "PRINCIPLES", "PROCEDURE",
    "PROCEDURES", "PROFILE", "PROFIT", "PROFITS", "PROJECTION", "PROJECTIONS", "PROPERTY",
    "PROPOSAL", "PROSPECTS", "PROVISION", "PURCHASE", "PURCHASING", "QUARTER", "QUARTERLY",
    "RATIO", "RECEIVABLES", "RECOMMENDATION", "RECOMMENDATIONS", "RECONCILIATION",
    "RECOVERY", "REDUCTION", "REGULATION", "REGULATIONS", "RELATIONSHIP", "REPORT",
    "REPORTING", "REQUIREMENT", "REQUIREMENTS", "RESERVE", "RESERVES", "RESOLUTION",
    "RESOURCE", "RESOURCES", "RESTRUCTURING", "RESULT", "RESULTS", "RETAINED", "REVENUE",
    "REVIEW", "RISK", "RISKS", "SALES", "SCHEDULE", "SECTOR", "SEGMENT", "SHARE",
    "SHAREHOLDER", "SHAREHOLDERS", "SHARES", "SHEET", "SIGNIFICANT", "SOLUTIONS",
    "SPECIFIC", "STATEMENT", "STATEMENTS", "STATISTICS", "STRATEGIC", "STRATEGY",
    "STRUCTURE", "SUBSIDIARIES", "SUMMARY", "SUPPLEMENTARY", "SUPPORT", "SURPLUS",
    "SUSTAINABILITY", "TAX", "TAXES", "TERM", "TERMS", "TOTAL", "TRANSACTION",
    "TRANSACTIONS", "TREASURY", "TREND", "TRENDS", "VALUE", "VARIANCE", "VISION", "VOLUME",
    "WARRANTY", "YEAR", "YIELD",
    // Governance and front-matter headings
    "ADDITIONAL", "AUDITOR'S", "AUDITORS", "CHAIRMAN", "CHAIRMAN'S", "CHIEF", "CLIMATE",
    "DIRECTOR", "DIRECTORS'", "DIVERSITY", "ENGAGEMENT", "ENVIRONMENTAL", "EXECUTIVE",
    "EXECUTIVE'S", "FINANCIALS", "GLOSSARY", "HIGHLIGHTS", "KEY", "LETTER", "MESSAGE",
    "NOMINATION", "OFFICER", "OTHER", "PEOPLE", "REMUNERATION", "REPORTS", "RESPONSIBILITY",
    "SECRETARY", "SOCIAL", "STAKEHOLDER", "STAKEHOLDERS",
    // Connectives that appear inside headings
    "AND", "OF", "THE", "FOR", "TO", "IN", "ON", "BY", "WITH", "AT", "FROM", "OUR", "&",
];

static VOCABULARY_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| REPORT_VOCABULARY.iter().copied().collect());

/// Case-insensitive membership test against [`REPORT_VOCABULARY`].
pub fn is_report_term(word: &str) -> bool {
    VOCABULARY_SET.contains(word.to_uppercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_uppercase_and_unique() {
        assert_eq!(VOCABULARY_SET.len(), REPORT_VOCABULARY.len());
        for term in REPORT_VOCABULARY {
            assert_eq!(*term, term.to_uppercase(), "{term} is not uppercase");
        }
    }

    #[test]
    fn membership_ignores_case() {
        assert!(is_report_term("Revenue"));
        assert!(is_report_term("GOVERNANCE"));
        assert!(is_report_term("and"));
        assert!(!is_report_term("widgets"));
        assert!(!is_report_term("Revenue,"));
    }
}
