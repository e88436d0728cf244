// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub(crate) mod heap_constants;
pub mod indexes;

use ahash::RandomState;
use hashbrown::HashMap;
use wtf8::Wtf8Buf;

pub(crate) use self::heap_constants::WellKnownSymbolIndexes;
use self::indexes::{
    BuiltinFunctionIndex, NumberIndex, ObjectIndex, StringIndex, SymbolIndex,
};
use crate::ecmascript::{
    builtins::{BuiltinFunction, BuiltinFunctionHeapData},
    types::{
        HeapNumber, ObjectHeapData, OrdinaryObject, String, StringHeapData, Symbol,
        SymbolHeapData,
    },
};

/// Backing storage of every heap-allocated value owned by an
/// [`Agent`](crate::ecmascript::execution::Agent).
///
/// There is no collector and nothing is ever freed before the agent is
/// dropped. In particular `numbers` grows by one entry for every finite
/// result that is neither a safe integer nor negative zero, so a long-lived
/// agent making many Math calls grows without bound.
#[derive(Debug)]
pub struct Heap {
    pub(crate) builtin_functions: Vec<BuiltinFunctionHeapData>,
    pub(crate) numbers: Vec<f64>,
    pub(crate) objects: Vec<ObjectHeapData>,
    pub(crate) strings: Vec<StringHeapData>,
    /// Interning table: equal string contents always share one index, so
    /// property keys compare by index.
    pub(crate) string_lookup: HashMap<Box<str>, String, RandomState>,
    pub(crate) symbols: Vec<SymbolHeapData>,
}

pub trait CreateHeapData<T, F> {
    /// Creates a [`Value`](crate::ecmascript::types::Value) from the given
    /// data. Allocating the data is **not** guaranteed.
    fn create(&mut self, data: T) -> F;
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl Heap {
    pub fn new() -> Self {
        let mut heap = Self {
            builtin_functions: Vec::with_capacity(32),
            numbers: Vec::with_capacity(256),
            objects: Vec::with_capacity(64),
            strings: Vec::with_capacity(128),
            string_lookup: HashMap::with_capacity_and_hasher(128, RandomState::new()),
            symbols: Vec::with_capacity(WellKnownSymbolIndexes::COUNT),
        };
        heap.numbers.extend_from_slice(&HeapNumber::PREALLOCATED);
        for symbol in WellKnownSymbolIndexes::ALL {
            let descriptor = heap.alloc_str(symbol.description());
            heap.symbols.push(SymbolHeapData {
                descriptor: Some(descriptor),
            });
        }
        heap
    }

    /// Allocates (or finds the interned copy of) a string.
    pub(crate) fn alloc_str(&mut self, message: &str) -> String {
        if let Some(&existing) = self.string_lookup.get(message) {
            return existing;
        }
        self.strings.push(StringHeapData {
            data: Wtf8Buf::from_str(message),
        });
        let index = String(StringIndex::last(&self.strings));
        self.string_lookup.insert(message.into(), index);
        index
    }
}

impl CreateHeapData<f64, HeapNumber> for Heap {
    fn create(&mut self, data: f64) -> HeapNumber {
        self.numbers.push(data);
        HeapNumber(NumberIndex::last(&self.numbers))
    }
}

impl CreateHeapData<ObjectHeapData, OrdinaryObject> for Heap {
    fn create(&mut self, data: ObjectHeapData) -> OrdinaryObject {
        self.objects.push(data);
        OrdinaryObject(ObjectIndex::last(&self.objects))
    }
}

impl CreateHeapData<BuiltinFunctionHeapData, BuiltinFunction> for Heap {
    fn create(&mut self, data: BuiltinFunctionHeapData) -> BuiltinFunction {
        self.builtin_functions.push(data);
        BuiltinFunction(BuiltinFunctionIndex::last(&self.builtin_functions))
    }
}

impl CreateHeapData<SymbolHeapData, Symbol> for Heap {
    fn create(&mut self, data: SymbolHeapData) -> Symbol {
        self.symbols.push(data);
        Symbol(SymbolIndex::last(&self.symbols))
    }
}
