// 👤 User Entity - id/name identity with VIP classification
//
// A user is one registry entry:
// - id and name are identity: fixed at construction, never change
// - balance is a value: non-negative, mutated only by cashback
// - kind carries the VIP classification and the cashback capability

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ERRORS
// ============================================================================

/// Construction failure: the supplied balance was negative.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidBalanceError {
    pub balance: f32,
}

impl fmt::Display for InvalidBalanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Недопустимый баланс: {}", self.balance)
    }
}

impl std::error::Error for InvalidBalanceError {}

// ============================================================================
// USER KIND
// ============================================================================

/// Classification of a user, and the capability set that comes with it.
///
/// Only VIP users carry a cashback rate. The rate is a fraction in [0, 1]
/// and is not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UserKind {
    /// Standard user (no cashback)
    Standard,

    /// VIP user with an associated cashback rate
    Vip { cashback_rate: f32 },
}

impl UserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserKind::Standard => "Standard",
            UserKind::Vip { .. } => "VIP",
        }
    }
}

// ============================================================================
// USER ENTITY
// ============================================================================

/// A single registry entry.
///
/// Identity: `id`, `name` (never change after construction)
/// Value: `balance` (changes only through [`User::apply_cashback`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: i32,
    name: String,
    balance: f32,
    kind: UserKind,
}

impl User {
    /// Create a standard user. Fails when `balance` is negative.
    pub fn new(id: i32, name: impl Into<String>, balance: f32) -> Result<Self, InvalidBalanceError> {
        if balance < 0.0 {
            return Err(InvalidBalanceError { balance });
        }

        Ok(User {
            id,
            name: name.into(),
            balance,
            kind: UserKind::Standard,
        })
    }

    /// Create a VIP user. Same balance rule; the cashback rate is not
    /// validated.
    pub fn new_vip(
        id: i32,
        name: impl Into<String>,
        balance: f32,
        cashback_rate: f32,
    ) -> Result<Self, InvalidBalanceError> {
        if balance < 0.0 {
            return Err(InvalidBalanceError { balance });
        }

        Ok(User {
            id,
            name: name.into(),
            balance,
            kind: UserKind::Vip { cashback_rate },
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> f32 {
        self.balance
    }

    pub fn kind(&self) -> &UserKind {
        &self.kind
    }

    /// The classification signal used by registry sorting.
    pub fn is_vip(&self) -> bool {
        matches!(self.kind, UserKind::Vip { .. })
    }

    /// Cashback rate for VIP users, `None` for standard users.
    pub fn cashback_rate(&self) -> Option<f32> {
        match self.kind {
            UserKind::Vip { cashback_rate } => Some(cashback_rate),
            UserKind::Standard => None,
        }
    }

    /// Apply cashback in place: `balance += balance * rate`.
    ///
    /// Compounds on repeated calls. Standard users have no cashback
    /// capability; for them this is a refused no-op and returns `false`.
    pub fn apply_cashback(&mut self) -> bool {
        match self.kind {
            UserKind::Vip { cashback_rate } => {
                self.balance += self.balance * cashback_rate;
                true
            }
            UserKind::Standard => false,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Имя: {}, Баланс: {}", self.id, self.name, self.balance)?;
        if let UserKind::Vip { cashback_rate } = self.kind {
            write!(f, ", Кэшбэк: {}%", cashback_rate * 100.0)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
