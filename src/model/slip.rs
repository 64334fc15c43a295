use serde::Serialize;

/// The pair a slip lookup is keyed on. Both parts are compared as strings,
/// exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupKey {
    pub emp_code: String,
    pub month: String,
}

impl LookupKey {
    pub fn new(emp_code: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            emp_code: emp_code.into(),
            month: month.into(),
        }
    }
}

/// A display field: label as shown on the slip plus the raw cell value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledText {
    pub label: String,
    pub value: String,
}

/// A monetary or leave-count field, already coerced to a whole number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledAmount {
    pub label: String,
    pub amount: i64,
}

/// Everything the slip template needs, derived from one matching row.
/// Field order inside the vectors is the on-slip display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedSlip {
    pub emp_code: String,
    pub month: String,
    pub employee_details: Vec<LabeledText>,
    pub earnings: Vec<LabeledAmount>,
    pub gross_pay: i64,
    pub deductions: Vec<LabeledAmount>,
    pub total_deductions: i64,
    pub net_pay: i64,
    pub net_pay_text_1: String,
    pub net_pay_text_2: String,
    pub net_pay_text_3: String,
    pub leave_balance: Vec<LabeledAmount>,
    pub leave_balance_total: i64,
}
