// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::indexes::SymbolIndex;
use crate::ecmascript::types::{PropertyKey, Symbol};

/// Well-known symbols occupy the first slots of the symbol heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum WellKnownSymbolIndexes {
    ToPrimitive,
    ToStringTag,
}

impl WellKnownSymbolIndexes {
    pub(crate) const COUNT: usize = 2;

    pub(crate) const ALL: [Self; Self::COUNT] = [Self::ToPrimitive, Self::ToStringTag];

    pub(crate) const fn description(self) -> &'static str {
        match self {
            Self::ToPrimitive => "Symbol.toPrimitive",
            Self::ToStringTag => "Symbol.toStringTag",
        }
    }
}

impl From<WellKnownSymbolIndexes> for SymbolIndex {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        SymbolIndex::from_u32_index(value as u32)
    }
}

impl From<WellKnownSymbolIndexes> for Symbol {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        Symbol(value.into())
    }
}

impl From<WellKnownSymbolIndexes> for PropertyKey {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        PropertyKey::Symbol(value.into())
    }
}
