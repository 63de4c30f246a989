// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow, bail};
use time::Date;

use crate::{FormField, ISO_DATE, NewTenant, PaymentStatus};

/// Names must stay strictly below this many characters.
pub const MAX_NAME_CHARS: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TenantFormInput {
    pub name: String,
    pub payment_status: Option<PaymentStatus>,
    pub lease_end_date: String,
}

impl TenantFormInput {
    /// Checks the input against `today` and builds the create payload.
    ///
    /// An unset payment status becomes [`PaymentStatus::Current`].
    pub fn validate(&self, today: Date) -> Result<NewTenant> {
        if self.name.chars().count() >= MAX_NAME_CHARS {
            bail!(
                "tenant name must be under {MAX_NAME_CHARS} characters -- shorten it and retry"
            );
        }

        let raw_date = self.lease_end_date.trim();
        if raw_date.is_empty() {
            bail!("lease end date is required -- enter it as YYYY-MM-DD");
        }
        let lease_end_date = Date::parse(raw_date, ISO_DATE)
            .map_err(|_| anyhow!("lease end date {raw_date:?} is not a YYYY-MM-DD date"))?;
        if lease_end_date > today {
            bail!("lease end date cannot be after today ({today})");
        }

        Ok(NewTenant {
            name: self.name.clone(),
            payment_status: self.payment_status.unwrap_or(PaymentStatus::Current),
            lease_end_date,
        })
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::LeaseEndDate => Some(&mut self.lease_end_date),
            FormField::PaymentStatus => None,
        }
    }

    pub fn display(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::PaymentStatus => self
                .payment_status
                .map(PaymentStatus::as_str)
                .unwrap_or_default()
                .to_owned(),
            FormField::LeaseEndDate => self.lease_end_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_NAME_CHARS, TenantFormInput};
    use crate::{FormField, PaymentStatus};
    use anyhow::Result;
    use time::{Date, Month};

    fn today() -> Date {
        Date::from_calendar_date(2026, Month::June, 15).expect("valid date")
    }

    fn input(name: &str, status: Option<PaymentStatus>, date: &str) -> TenantFormInput {
        TenantFormInput {
            name: name.to_owned(),
            payment_status: status,
            lease_end_date: date.to_owned(),
        }
    }

    #[test]
    fn name_at_limit_is_rejected() {
        let name = "x".repeat(MAX_NAME_CHARS);
        let error = input(&name, None, "2026-06-01")
            .validate(today())
            .expect_err("25 characters should fail");
        assert!(error.to_string().contains("under 25 characters"));
    }

    #[test]
    fn name_limit_counts_characters_not_bytes() -> Result<()> {
        let name = "é".repeat(MAX_NAME_CHARS - 1);
        let tenant = input(&name, None, "2026-06-01").validate(today())?;
        assert_eq!(tenant.name, name);
        Ok(())
    }

    #[test]
    fn lease_end_after_today_is_rejected() {
        let error = input("Ada", None, "2026-06-16")
            .validate(today())
            .expect_err("tomorrow should fail");
        assert!(error.to_string().contains("cannot be after today"));
    }

    #[test]
    fn lease_end_today_is_accepted() -> Result<()> {
        let tenant = input("Ada", Some(PaymentStatus::Late), "2026-06-15").validate(today())?;
        assert_eq!(tenant.lease_end_date, today());
        assert_eq!(tenant.payment_status, PaymentStatus::Late);
        Ok(())
    }

    #[test]
    fn unset_payment_status_defaults_to_current() -> Result<()> {
        let tenant = input("Ada", None, "2026-01-31").validate(today())?;
        assert_eq!(tenant.payment_status, PaymentStatus::Current);
        Ok(())
    }

    #[test]
    fn missing_or_malformed_date_is_rejected() {
        assert!(input("Ada", None, "").validate(today()).is_err());
        assert!(input("Ada", None, "31/01/2026").validate(today()).is_err());
    }

    #[test]
    fn payment_status_field_is_not_text() {
        let mut form = TenantFormInput::default();
        assert!(form.text_mut(FormField::PaymentStatus).is_none());
        form.payment_status = Some(PaymentStatus::Late);
        assert_eq!(form.display(FormField::PaymentStatus), "LATE");
    }
}
