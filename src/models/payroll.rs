//! Payroll entries, one per employee per month.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub employee_id: ObjectId,
    /// Pay period, `YYYY-MM`.
    pub month: String,
    pub base_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub net_pay: f64,
    pub created_at: DateTime,
}

impl PayrollEntry {
    pub fn new(employee_id: ObjectId, req: CreatePayrollRequest) -> Self {
        let allowances = req.allowances.unwrap_or(0.0);
        let deductions = req.deductions.unwrap_or(0.0);
        Self {
            id: None,
            employee_id,
            month: req.month,
            base_salary: req.base_salary,
            allowances,
            deductions,
            net_pay: req.base_salary + allowances - deductions,
            created_at: DateTime::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePayrollRequest {
    pub employee_id: String,
    pub month: String,
    pub base_salary: f64,
    pub allowances: Option<f64>,
    pub deductions: Option<f64>,
}

/// Query parameters for listing payroll entries.
#[derive(Debug, Deserialize)]
pub struct ListPayrollQuery {
    pub employee: Option<String>,
    pub month: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_pay_is_base_plus_allowances_minus_deductions() {
        let entry = PayrollEntry::new(
            ObjectId::new(),
            CreatePayrollRequest {
                employee_id: String::new(),
                month: "2026-08".to_string(),
                base_salary: 4000.0,
                allowances: Some(500.0),
                deductions: Some(250.0),
            },
        );
        assert_eq!(entry.net_pay, 4250.0);
    }

    #[test]
    fn missing_allowances_and_deductions_default_to_zero() {
        let entry = PayrollEntry::new(
            ObjectId::new(),
            CreatePayrollRequest {
                employee_id: String::new(),
                month: "2026-08".to_string(),
                base_salary: 4000.0,
                allowances: None,
                deductions: None,
            },
        );
        assert_eq!(entry.net_pay, 4000.0);
    }
}
