// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::Index;

use super::{IntoValue, String, Value};
use crate::{
    ecmascript::execution::Agent,
    heap::{CreateHeapData, indexes::SymbolIndex},
};

#[derive(Debug, Clone, Copy)]
pub struct SymbolHeapData {
    pub(crate) descriptor: Option<String>,
}

/// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(pub(crate) SymbolIndex);

impl Symbol {
    pub fn new(agent: &mut Agent, descriptor: Option<&str>) -> Symbol {
        let descriptor = descriptor.map(|descriptor| String::from_str(agent, descriptor));
        agent.heap.create(SymbolHeapData { descriptor })
    }

    /// ### [20.4.3.3.1 SymbolDescriptiveString ( sym )](https://tc39.es/ecma262/#sec-symboldescriptivestring)
    pub fn descriptive_string(self, agent: &Agent) -> std::string::String {
        match agent[self].descriptor {
            Some(descriptor) => format!("Symbol({})", descriptor.to_string_lossy(agent)),
            None => "Symbol()".to_string(),
        }
    }
}

impl Index<Symbol> for Agent {
    type Output = SymbolHeapData;

    fn index(&self, index: Symbol) -> &Self::Output {
        self.heap
            .symbols
            .get(index.0.into_index())
            .expect("Symbol out of bounds")
    }
}

impl IntoValue for Symbol {
    fn into_value(self) -> Value {
        Value::Symbol(self)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}
