//! Label-anchored regex rules for invoice fields, in priority order.

use lazy_static::lazy_static;
use regex::Regex;

use super::dates::DateRule;
use super::Rule;

/// Monetary amount: `1,234.56`, `1.234,56` / `1 234,56` style, or plain
/// digits with an optional decimal point or comma.
const AMOUNT: &str = r"(\d{1,3}(?:,\d{3})+\.\d+|\d{1,3}(?:[ .]\d{3})+,\d+|\d+(?:[.,]\d+)?)";

/// Characters allowed in a company name candidate.
const NAME_CHARS: &str = r"[\p{L}\p{N} \t.\-&]";

/// Labels introducing the issue date.
pub const ISSUE_DATE_LABEL: &str = r"Data\s+emiter(?:e|ii?)";

/// Labels introducing the due date.
pub const DUE_DATE_LABEL: &str = r"Data\s+scaden(?:t|ț|ţ)(?:a|ă)";

fn date_rules(label: &str) -> Vec<DateRule> {
    let rule = |name: &'static str, layout: &str, format: &'static str| DateRule {
        // The date may run straight into the next label in flattened text.
        rule: Rule::new(name, &format!(r"(?i){}\s*:?\s*({})(?:\D|$)", label, layout)),
        format,
    };

    vec![
        rule("iso", r"\d{4}-\d{2}-\d{2}", "%Y-%m-%d"),
        rule("dmy_dash", r"\d{2}-\d{2}-\d{4}", "%d-%m-%Y"),
        rule("dmy_slash", r"\d{1,2}/\d{1,2}/\d{4}", "%d/%m/%Y"),
        rule("ymd_slash", r"\d{4}/\d{1,2}/\d{1,2}", "%Y/%m/%d"),
    ]
}

lazy_static! {
    // Company name, seller side
    pub static ref COMPANY_RULES: Vec<Rule> = vec![
        Rule::new(
            "vanzator",
            &format!(r"(?im)\bV[AÂ]NZ[AĂ]TOR\b\s*:?\s*({}+?)(?:\s+Nume\b|[ \t\r]*$)", NAME_CHARS),
        ),
        Rule::new(
            "denumire",
            &format!(r"(?im)\bDenumire\b[ \t]*:?[ \t]*({}+?)[ \t\r]*$", NAME_CHARS),
        ),
        Rule::new(
            "nume",
            &format!(r"(?im)\bNume\b[ \t]*:?[ \t]*({}+?)[ \t\r]*$", NAME_CHARS),
        ),
        Rule::new(
            "nume_first_word",
            &format!(r"(?im)\bNume\b[ \t]*:?[ \t]*({}+?)(?:\s+\p{{L}}|[ \t\r]*$)", NAME_CHARS),
        ),
        Rule::new(
            "nume_next_line",
            &format!(r"(?im)\bNume\b[ \t]*:?[ \t]*\r?\n\s*({}+?)[ \t\r]*$", NAME_CHARS),
        ),
    ];

    // Dates
    pub static ref ISSUE_DATE_RULES: Vec<DateRule> = date_rules(ISSUE_DATE_LABEL);
    pub static ref DUE_DATE_RULES: Vec<DateRule> = date_rules(DUE_DATE_LABEL);

    // Total to pay
    pub static ref PAYMENT_RULES: Vec<Rule> = vec![
        Rule::new(
            "plata_same_line",
            &format!(r"(?i)TOTAL\s+PLAT[AĂ][ \t]*:?[ \t]*{}", AMOUNT),
        ),
        Rule::new(
            "payment_same_line",
            &format!(r"(?i)TOTAL\s+PAYMENT[ \t]*:?[ \t]*{}", AMOUNT),
        ),
        Rule::new(
            "plata_next_line",
            &format!(r"(?i)TOTAL\s+PLAT[AĂ][ \t]*:?[ \t]*\r?\n\s*{}", AMOUNT),
        ),
        Rule::new(
            "plata_preceding",
            &format!(r"(?i){}[ \t]*(?:RON|LEI)?[ \t]*TOTAL\s+PLAT[AĂ]", AMOUNT),
        ),
        Rule::new(
            "plata_on_line",
            &format!(r"(?i)TOTAL\s+PLAT[AĂ][^\n]*?{}", AMOUNT),
        ),
    ];

    // Total VAT, always followed by the currency
    pub static ref VAT_RULES: Vec<Rule> = vec![
        Rule::new(
            "tva_same_line",
            &format!(r"(?i)TOTAL\s+TVA[ \t]*:?[ \t]*{}[ \t]*(?:RON|LEI)", AMOUNT),
        ),
        Rule::new(
            "vat_same_line",
            &format!(r"(?i)TOTAL\s+VAT[ \t]*:?[ \t]*{}[ \t]*(?:RON|LEI)", AMOUNT),
        ),
        Rule::new(
            "tva_next_line",
            &format!(r"(?i)TOTAL\s+TVA[ \t]*:?[ \t]*\r?\n\s*{}[ \t]*(?:RON|LEI)", AMOUNT),
        ),
        Rule::new(
            "tva_preceding",
            &format!(r"(?i){}[ \t]*(?:RON|LEI)[ \t]*TOTAL\s+TVA", AMOUNT),
        ),
        Rule::new(
            "tva_on_line",
            &format!(r"(?i)TOTAL\s+TVA[^\n]*?{}[ \t]*(?:RON|LEI)", AMOUNT),
        ),
    ];

    // Classification codes
    pub static ref CPV_RULES: Vec<Rule> = vec![
        Rule::new("cpv_labeled", r"(?i)\bCPV\b[^\d\n]{0,20}(\d{8}-\d)\b"),
        Rule::new("cpv_bare", r"\b(\d{8}-\d)\b"),
    ];

    pub static ref NC8_RULES: Vec<Rule> = vec![
        Rule::new(
            "nc8_labeled",
            r"(?i)\b(?:NC8|Cod\s+NC|NC)\b[^\d\n]{0,20}(\d{4}[ .]?\d{2}[ .]?\d{2})\b",
        ),
    ];

    // Product / service description
    pub static ref PRODUCT_RULES: Vec<Rule> = vec![
        Rule::new(
            "product_same_line",
            r"(?im)\b(?:Denumire\s+(?:produs|serviciu)|Produs|Descriere|Articol)\b[ \t]*:?[ \t]*([^\r\n]+?)[ \t\r]*$",
        ),
        Rule::new(
            "product_next_line",
            r"(?im)\bDenumire\s+(?:produs|serviciu)(?:\s*/\s*serviciu)?[ \t]*:?[ \t]*\r?\n[ \t]*([^\r\n]+?)[ \t\r]*$",
        ),
    ];

    // Already-processed file names
    pub static ref EMBEDDED_ISO_DATE: Regex = Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap();

    // Unprocessed original file stems: digits with an optional trailing marker
    pub static ref ORIGINAL_STEM: Regex = Regex::new(r"^\d+#?$").unwrap();
}
