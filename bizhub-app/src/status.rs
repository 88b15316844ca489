//! Status-to-style lookup tables
//!
//! Fixed mappings from lifecycle statuses to a visual tone and its badge
//! class string. Tables, not logic: every status maps to exactly one
//! tone.

use shared::models::{OrderStatus, PaymentStatus, SubscriptionStatus};

/// Visual tone of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Muted,
}

impl Tone {
    /// Badge class string for the themed UI.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Success => "text-success bg-success/10",
            Self::Warning => "text-warning bg-warning/10",
            Self::Danger => "text-destructive bg-destructive/10",
            Self::Muted => "text-muted-foreground bg-muted/50",
        }
    }
}

pub fn order_status_tone(status: OrderStatus) -> Tone {
    match status {
        OrderStatus::Completed => Tone::Success,
        OrderStatus::Processing => Tone::Warning,
        OrderStatus::Cancelled => Tone::Danger,
        OrderStatus::Pending => Tone::Muted,
    }
}

pub fn payment_status_tone(status: PaymentStatus) -> Tone {
    match status {
        PaymentStatus::Paid => Tone::Success,
        PaymentStatus::Failed => Tone::Danger,
        PaymentStatus::Pending => Tone::Warning,
    }
}

pub fn subscription_status_tone(status: SubscriptionStatus) -> Tone {
    match status {
        SubscriptionStatus::Active => Tone::Success,
        SubscriptionStatus::Inactive => Tone::Danger,
        SubscriptionStatus::Cancelled => Tone::Warning,
    }
}
