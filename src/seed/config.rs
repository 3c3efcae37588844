use crate::app::env::Envy;

pub const REGISTRATION_WINDOW_MONTHS: u32 = 24;
pub const TRANSACTION_WINDOW_MONTHS: u32 = 18;

/// Chance that a transaction is redrawn from the head of the customer list.
pub const HEAD_PROBABILITY: f64 = 0.7;
/// The head is the first `len / HEAD_DIVISOR` customers.
pub const HEAD_DIVISOR: usize = 2;

pub const FEE_MIN: f64 = 10.0;
pub const FEE_SPAN: f64 = 9999.0;

pub const DEFAULT_CUSTOMERS: u32 = 1000;
pub const DEFAULT_TRANSACTIONS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkewPolicy {
    pub head_probability: f64,
    pub head_divisor: usize,
}

impl Default for SkewPolicy {
    fn default() -> Self {
        Self {
            head_probability: HEAD_PROBABILITY,
            head_divisor: HEAD_DIVISOR,
        }
    }
}

impl SkewPolicy {
    pub fn head_len(&self, len: usize) -> usize {
        len.checked_div(self.head_divisor).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedOptions {
    pub customers: u32,
    pub transactions: u32,
    pub skew: SkewPolicy,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            customers: DEFAULT_CUSTOMERS,
            transactions: DEFAULT_TRANSACTIONS,
            skew: SkewPolicy::default(),
        }
    }
}

impl SeedOptions {
    pub fn from_envy(envy: &Envy) -> Self {
        Self {
            customers: envy.seed_customers.unwrap_or(DEFAULT_CUSTOMERS),
            transactions: envy.seed_transactions.unwrap_or(DEFAULT_TRANSACTIONS),
            skew: SkewPolicy::default(),
        }
    }
}
