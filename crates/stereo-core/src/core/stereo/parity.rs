use super::resolver::{Substituent, SubstituentResolver};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum parity magnitude for a center to count as chiral.
pub const MIN_CHIRAL: f64 = 0.15;

/// Magnitudes below this are numerically zero rather than noise-corrupted values.
pub const EPSILON: f64 = 0.0001;

/// Largest magnitude still treated as planar/degenerate (experimental classification).
pub const PLANARITY_LIMIT: f64 = 0.4;

/// Number of substituents around a tetrahedral center.
pub const SUBSTITUENT_COUNT: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParityError {
    #[error("Expected exactly 4 substituent references, found {found}")]
    InvalidArity { found: usize },

    #[error("Substituent reference '{id}' appears more than once")]
    DuplicateReference { id: String },

    #[error("New ordering is not a rearrangement of the stored references: no unplaced match for '{id}'")]
    NotAPermutation { id: String },

    #[error("Substituent reference '{id}' could not be resolved")]
    UnresolvedReference { id: String },
}

/// Three-way classification of a parity value against [`MIN_CHIRAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignClass {
    Negative,
    Zero,
    Positive,
}

impl SignClass {
    /// `Zero` if `|value| < MIN_CHIRAL` or `value` is not finite, otherwise the sign
    /// of `value`.
    pub fn from_value(value: f64) -> Self {
        if !value.is_finite() || value.abs() < MIN_CHIRAL {
            SignClass::Zero
        } else if value < 0.0 {
            SignClass::Negative
        } else {
            SignClass::Positive
        }
    }

    pub fn as_int(self) -> i8 {
        match self {
            SignClass::Negative => -1,
            SignClass::Zero => 0,
            SignClass::Positive => 1,
        }
    }
}

impl fmt::Display for SignClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Negative => "negative",
                Self::Zero => "zero",
                Self::Positive => "positive",
            }
        )
    }
}

/// Validates a substituent ordering and copies it into a fixed-size array.
///
/// # Errors
///
/// [`ParityError::InvalidArity`] if there are not exactly four entries,
/// [`ParityError::DuplicateReference`] if any identifier repeats.
pub fn checked_refs<S: AsRef<str>>(refs: &[S]) -> Result<[String; 4], ParityError> {
    let [a, b, c, d] = refs else {
        return Err(ParityError::InvalidArity { found: refs.len() });
    };
    let refs = [a, b, c, d].map(|id| {
        let id: &str = id.as_ref();
        id.to_string()
    });
    for (i, id) in refs.iter().enumerate() {
        if refs[i + 1..].contains(id) {
            return Err(ParityError::DuplicateReference { id: id.clone() });
        }
    }
    Ok(refs)
}

/// The chirality of a four-substituent center.
///
/// Holds the ordered substituent identifiers and a signed parity value defined against
/// that ordering. The sign encodes which of the two mirror-image arrangements the
/// center has; its classification ([`ParityRecord::sign_class`]) is always computed
/// from the value and never cached.
///
/// Records deserialize through [`ParityRecord::new`], so a stored record can never
/// carry a malformed ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParityRecord", into = "RawParityRecord")]
pub struct ParityRecord {
    refs: [String; 4],
    value: f64,
}

impl ParityRecord {
    /// Creates a record from an explicit ordering and parity value.
    ///
    /// # Errors
    ///
    /// See [`checked_refs`].
    pub fn new<S: AsRef<str>>(refs: &[S], value: f64) -> Result<Self, ParityError> {
        Ok(Self {
            refs: checked_refs(refs)?,
            value,
        })
    }

    /// Creates a record from four resolved substituents, taking their identifiers in
    /// the order given.
    ///
    /// # Errors
    ///
    /// Same arity and duplicate checks as [`ParityRecord::new`].
    pub fn from_substituents<T: Substituent>(
        substituents: &[T],
        value: f64,
    ) -> Result<Self, ParityError> {
        let ids: Vec<&str> = substituents.iter().map(Substituent::substituent_id).collect();
        Self::new(&ids, value)
    }

    pub fn refs(&self) -> &[String; 4] {
        &self.refs
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn sign_class(&self) -> SignClass {
        SignClass::from_value(self.value)
    }

    /// `-1`, `0` or `+1` under the same threshold rule as [`ParityRecord::sign_class`].
    pub fn magnitude_sign_as_int(&self) -> i8 {
        self.sign_class().as_int()
    }

    /// Whether the magnitude is below [`MIN_CHIRAL`].
    pub fn is_zero(&self) -> bool {
        self.sign_class() == SignClass::Zero
    }

    /// Whether the magnitude is below [`PLANARITY_LIMIT`]. Experimental.
    pub fn is_near_planar(&self) -> bool {
        self.value.abs() < PLANARITY_LIMIT
    }

    /// Returns a copy of this record expressed against `new_order`.
    ///
    /// `new_order` must be a rearrangement of the stored identifiers. The stored
    /// ordering is brought into `new_order` by swapping each target into place; an
    /// odd number of swaps negates the value, an even number keeps it.
    ///
    /// # Errors
    ///
    /// [`ParityError::InvalidArity`] if `new_order` does not have four entries,
    /// [`ParityError::NotAPermutation`] if some target has no match among the
    /// identifiers not yet placed.
    pub fn reordered<S: AsRef<str>>(&self, new_order: &[S]) -> Result<Self, ParityError> {
        if new_order.len() != SUBSTITUENT_COUNT {
            return Err(ParityError::InvalidArity {
                found: new_order.len(),
            });
        }

        let mut refs = self.refs.clone();
        let mut odd = false;
        for (i, target) in new_order.iter().enumerate() {
            let target: &str = target.as_ref();
            let j = (i..SUBSTITUENT_COUNT)
                .find(|&j| refs[j] == target)
                .ok_or_else(|| ParityError::NotAPermutation {
                    id: target.to_string(),
                })?;
            if i != j {
                refs.swap(i, j);
                odd = !odd;
            }
        }

        Ok(Self {
            refs,
            value: if odd { -self.value } else { self.value },
        })
    }

    /// Rearranges the record in place to `new_order`.
    ///
    /// Either the whole rearrangement is applied or the record is left untouched.
    ///
    /// # Errors
    ///
    /// See [`ParityRecord::reordered`].
    pub fn reorder<S: AsRef<str>>(&mut self, new_order: &[S]) -> Result<(), ParityError> {
        *self = self.reordered(new_order)?;
        Ok(())
    }

    /// Resolves the stored identifiers through `resolver`, in stored order.
    ///
    /// # Errors
    ///
    /// [`ParityError::UnresolvedReference`] naming the first identifier the resolver
    /// does not know.
    pub fn resolve_substituents<'a, R: SubstituentResolver>(
        &self,
        resolver: &'a R,
    ) -> Result<[&'a R::Substituent; 4], ParityError> {
        let lookup = |id: &String| {
            resolver
                .lookup(id)
                .ok_or_else(|| ParityError::UnresolvedReference { id: id.clone() })
        };
        let [a, b, c, d] = &self.refs;
        Ok([lookup(a)?, lookup(b)?, lookup(c)?, lookup(d)?])
    }
}

impl fmt::Display for ParityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.refs.join(" "), self.value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParityRecord {
    refs: Vec<String>,
    value: f64,
}

impl TryFrom<RawParityRecord> for ParityRecord {
    type Error = ParityError;

    fn try_from(raw: RawParityRecord) -> Result<Self, Self::Error> {
        ParityRecord::new(&raw.refs, raw.value)
    }
}

impl From<ParityRecord> for RawParityRecord {
    fn from(record: ParityRecord) -> Self {
        Self {
            refs: record.refs.to_vec(),
            value: record.value,
        }
    }
}
