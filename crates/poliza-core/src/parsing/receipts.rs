use crate::model::{PaymentStatus, ScheduledPayment};
use crate::parsing::{dates, money};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Receipt row: `<installment#> <start-date> al <end-date> <amount> <due-date>`.
static ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(\d{1,2})\s+(\S+)\s+al\s+(\S+)\s+((?:\$\s*)?[\d,]+\.\d{2})\s+(\S+)\s*$",
    )
    .unwrap()
});

/// Parse payment-schedule rows from billing-notice lines.
///
/// Each matched row yields one entry. `status` is derived, not stored:
/// Overdue when the due date is before `today`, Pending otherwise. `today`
/// is injected by the caller so the derivation is deterministic under test.
pub fn parse_schedule(lines: &[&str], today: NaiveDate) -> Vec<ScheduledPayment> {
    let mut entries = Vec::new();

    for line in lines {
        let Some(c) = ROW_RE.captures(line) else {
            continue;
        };

        let installment_number = c[1].parse().unwrap_or(0);
        let amount = money::normalize_amount(&c[4]).unwrap_or_default();
        let due_raw = &c[5];
        let due_date = dates::normalize_date(due_raw).unwrap_or_else(|| due_raw.to_string());

        let status = match dates::as_naive(&due_date) {
            Some(due) if due < today => PaymentStatus::Overdue,
            _ => PaymentStatus::Pending,
        };

        entries.push(ScheduledPayment {
            installment_number,
            due_date,
            amount,
            status,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
    }

    #[test]
    fn test_rows_parsed_and_normalized() {
        let lines = [
            "1 01/05/2024 al 01/08/2024 2,045.00 15/05/2024",
            "2 01/08/2024 al 01/11/2024 2,045.00 15/08/2024",
            "Subtotal de recibos",
        ];
        let schedule = parse_schedule(&lines, today());
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[0].installment_number, 1);
        assert_eq!(schedule[0].amount, "2045.00");
        assert_eq!(schedule[0].due_date, "2024-05-15");
    }

    #[test]
    fn test_status_derived_against_today() {
        let lines = [
            "1 01/05/2024 al 01/08/2024 2,045.00 15/05/2024",
            "2 01/08/2024 al 01/11/2024 2,045.00 15/08/2024",
        ];
        let schedule = parse_schedule(&lines, today());
        assert_eq!(schedule[0].status, PaymentStatus::Overdue);
        assert_eq!(schedule[1].status, PaymentStatus::Pending);
    }

    #[test]
    fn test_due_today_is_pending() {
        let lines = ["1 01/05/2024 al 01/08/2024 2,045.00 01/08/2024"];
        let schedule = parse_schedule(&lines, today());
        assert_eq!(schedule[0].status, PaymentStatus::Pending);
    }

    #[test]
    fn test_unparseable_due_date_kept_raw() {
        let lines = ["1 01/05/2024 al 01/08/2024 2,045.00 99/99/9999"];
        let schedule = parse_schedule(&lines, today());
        assert_eq!(schedule[0].due_date, "99/99/9999");
        // Raw date cannot be compared; never reported as overdue
        assert_eq!(schedule[0].status, PaymentStatus::Pending);
    }

    #[test]
    fn test_dollar_amount_row() {
        let lines = ["1 01/05/2024 al 01/05/2025 $8,180.00 15/05/2024"];
        let schedule = parse_schedule(&lines, today());
        assert_eq!(schedule[0].amount, "8180.00");
    }
}
