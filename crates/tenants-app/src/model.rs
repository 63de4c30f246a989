// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

use crate::ids::TenantId;

pub const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
pub const DISPLAY_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[day]/[month]/[year]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Current,
    Late,
}

impl PaymentStatus {
    pub const ALL: [Self; 2] = [Self::Current, Self::Late];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "CURRENT",
            Self::Late => "LATE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub payment_status: PaymentStatus,
    #[serde(with = "lease_date")]
    pub lease_end_date: Date,
}

/// Create payload: a tenant before the service has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTenant {
    pub name: String,
    pub payment_status: PaymentStatus,
    #[serde(with = "lease_date")]
    pub lease_end_date: Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    All,
    Late,
    Date,
}

impl FilterMode {
    pub const ALL: [Self; 3] = [Self::All, Self::Late, Self::Date];

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Late => "Payment is late",
            Self::Date => "Lease ends in less than a month",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Late => "late",
            Self::Date => "date",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "late" => Some(Self::Late),
            "date" => Some(Self::Date),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    Id,
    Name,
    PaymentStatus,
    Date,
}

impl SortMode {
    pub const ALL: [Self; 4] = [Self::Id, Self::Name, Self::PaymentStatus, Self::Date];

    pub const fn header(self) -> &'static str {
        match self {
            Self::Id => "#",
            Self::Name => "Name",
            Self::PaymentStatus => "Payment Status",
            Self::Date => "Lease End Date",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::PaymentStatus => "payment_status",
            Self::Date => "date",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "payment_status" => Some(Self::PaymentStatus),
            "date" => Some(Self::Date),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    Name,
    PaymentStatus,
    LeaseEndDate,
}

impl FormField {
    pub const ALL: [Self; 3] = [Self::Name, Self::PaymentStatus, Self::LeaseEndDate];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::PaymentStatus => "Payment Status",
            Self::LeaseEndDate => "Lease End Date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppMode {
    Nav,
    Form,
}

/// Accepts a bare calendar date or an RFC 3339 timestamp (whose UTC date is kept).
pub fn parse_lease_date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    if let Ok(date) = Date::parse(trimmed, ISO_DATE) {
        return Some(date);
    }
    OffsetDateTime::parse(trimmed, &Rfc3339)
        .ok()
        .map(|moment| moment.to_offset(UtcOffset::UTC).date())
}

pub fn format_display_date(date: Date) -> String {
    date.format(DISPLAY_DATE).unwrap_or_else(|_| date.to_string())
}

mod lease_date {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = date
            .format(super::ISO_DATE)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&raw)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_lease_date(&raw).ok_or_else(|| {
            D::Error::custom(format!(
                "invalid leaseEndDate {raw:?}; expected YYYY-MM-DD or an RFC 3339 timestamp"
            ))
        })
    }
}
