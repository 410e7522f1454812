//! Typed lengths
//!
//! Settings are expressed in millimeters and every placement is computed in
//! PDF points. The only way from one to the other is [`Mm::to_pt`].

use crate::constants::POINTS_PER_MM;
use std::ops::{Add, Neg};

/// A length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Mm(pub f32);

/// A length in PDF points (1/72 inch)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Pt(pub f32);

impl Mm {
    /// Convert to points
    #[inline]
    pub fn to_pt(self) -> Pt {
        Pt(self.0 * POINTS_PER_MM)
    }
}

impl Pt {
    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn half(self) -> Pt {
        Pt(self.0 / 2.0)
    }
}

impl Add for Mm {
    type Output = Mm;

    fn add(self, rhs: Mm) -> Mm {
        Mm(self.0 + rhs.0)
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}
