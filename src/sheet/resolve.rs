use crate::error::SlipError;
use crate::model::slip::{DerivedSlip, LabeledAmount, LabeledText, LookupKey};
use crate::model::table::{Row, Table};
use crate::sheet::validate::{EMP_CODE_COLUMN, MONTH_COLUMN};

/// Columns shown in the employee-details block, in display order.
const EMPLOYEE_DETAIL_COLUMNS: &[&str] = &[
    "month",
    "emp code",
    "employee name",
    "department",
    "location",
    "uan no",
    "doj",
    "grade",
    "section",
    "standard days",
    "paid days",
    "lwp",
    "pan no",
    "adhaar no",
    "account no.",
    "ifsc code",
    "paymode",
];

const EARNING_COLUMNS: &[&str] = &[
    "basic",
    "hra",
    "other allowance",
    "attendance incentive",
    "medical allowance",
    "washing allowance",
    "conveyance allowance",
    "stipend",
    "incentive",
    "re-location allowance/joining exp/medical checkup",
    "other earnings",
];

const DEDUCTION_COLUMNS: &[&str] = &["cmpf", "family pension fund", "epf", "recovery"];

const LEAVE_BALANCE_COLUMNS: &[&str] = &["sick leave", "casual leave", "privilege leave"];

/// On-slip labels for columns whose header does not read well as-is.
fn display_name(column: &str) -> Option<&'static str> {
    let label = match column {
        "emp code" => "Employee Code",
        "employee name" => "Employee Name",
        "uan no" => "UAN",
        "doj" => "DOJ",
        "standard days" => "Standard Days",
        "paid days" => "Paid Days",
        "lwp" => "LWP",
        "pan no" => "PAN",
        "adhaar no" => "Aadhaar Number",
        "ifsc code" => "IFSC Code",
        "hra" => "HRA",
        "cmpf" => "CMPF",
        "family pension fund" => "Family Pension Fund",
        "epf" => "EPF",
        "account no." => "Account Number",
        "sick leave" => "Sick Leave",
        "casual leave" => "Casual Leave",
        "privilege leave" => "Privilege Leave",
        _ => return None,
    };
    Some(label)
}

// First letter upper, rest lower.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn detail_label(column: &str) -> String {
    display_name(column)
        .map(str::to_string)
        .unwrap_or_else(|| capitalize(&column.replace(' ', "_")))
}

fn amount_label(column: &str) -> String {
    display_name(column)
        .map(str::to_string)
        .unwrap_or_else(|| capitalize(column))
}

/// Filter the table down to rows matching both key fields, take the first
/// match in file order, and derive the slip fields and totals from it.
pub fn resolve(table: &Table, key: &LookupKey) -> Result<DerivedSlip, SlipError> {
    // The validator guarantees each value exists somewhere in its column,
    // but not that they ever coincide on one row.
    let record = table
        .rows()
        .iter()
        .find(|row| {
            row.display(EMP_CODE_COLUMN).is_some_and(|v| v == key.emp_code)
                && row.display(MONTH_COLUMN).is_some_and(|v| v == key.month)
        })
        .ok_or_else(|| SlipError::NoMatch {
            emp_code: key.emp_code.clone(),
            month: key.month.clone(),
        })?;

    let employee_details = EMPLOYEE_DETAIL_COLUMNS
        .iter()
        .map(|&column| LabeledText {
            label: detail_label(column),
            value: detail_value(record, column),
        })
        .collect();

    let earnings = amounts(record, EARNING_COLUMNS)?;
    let deductions = amounts(record, DEDUCTION_COLUMNS)?;
    let leave_balance = amounts(record, LEAVE_BALANCE_COLUMNS)?;

    let gross_pay: i64 = earnings.iter().map(|e| e.amount).sum();
    let total_deductions: i64 = deductions.iter().map(|d| d.amount).sum();
    let net_pay = gross_pay - total_deductions;
    let leave_balance_total: i64 = leave_balance.iter().map(|l| l.amount).sum();

    Ok(DerivedSlip {
        emp_code: key.emp_code.clone(),
        month: key.month.clone(),
        employee_details,
        earnings,
        gross_pay,
        deductions,
        total_deductions,
        net_pay,
        net_pay_text_1: "Net Pay = Gross Pay - Total Deductions".to_string(),
        net_pay_text_2: format!("{gross_pay} - {total_deductions} = {net_pay}"),
        net_pay_text_3: net_pay.to_string(),
        leave_balance,
        leave_balance_total,
    })
}

fn detail_value(record: &Row, column: &str) -> String {
    let value = match record.display(column) {
        Some(v) => v,
        None => return "-".to_string(),
    };
    if column == "doj" {
        // Date cells carry a time-of-day part; the slip only shows the date.
        value
            .split_whitespace()
            .next()
            .unwrap_or("-")
            .to_string()
    } else {
        value
    }
}

fn amounts(record: &Row, columns: &[&str]) -> Result<Vec<LabeledAmount>, SlipError> {
    columns
        .iter()
        .map(|&column| {
            let amount = match record.get(column) {
                Some(cell) => cell.as_truncated_int(column)?,
                None => 0,
            };
            Ok(LabeledAmount {
                label: amount_label(column),
                amount,
            })
        })
        .collect()
}
