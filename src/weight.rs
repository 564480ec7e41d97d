/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A single cell of a cost or distance matrix: either a finite cost or the
/// "no known path" sentinel.
///
/// The variant order matters: the derived ordering puts every finite weight
/// below `Unreachable`, which is exactly the min-plus ordering the solver's
/// strict `<` relaxation test relies on. Adding through `Unreachable` yields
/// `Unreachable`, so sentinel arithmetic can never produce a wrong finite
/// number.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, PartialOrd)]
pub enum Weight {
    Finite(f64),
    Unreachable,
}

impl Weight {
    pub const ZERO: Weight = Weight::Finite(0.0);

    pub fn is_reachable(self) -> bool {
        match self {
            Weight::Finite(_) => true,
            Weight::Unreachable => false,
        }
    }

    /// Returns the finite cost, or `None` for `Unreachable`.
    pub fn finite(self) -> Option<f64> {
        match self {
            Weight::Finite(value) => Some(value),
            Weight::Unreachable => None,
        }
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, other: Weight) -> Weight {
        match (self, other) {
            (Weight::Finite(a), Weight::Finite(b)) => Weight::Finite(a + b),
            _ => Weight::Unreachable,
        }
    }
}

/// Positive infinity and NaN both map to `Unreachable`, so semantic "no edge"
/// has exactly one internal representation. Negative infinity stays finite.
impl From<f64> for Weight {
    fn from(value: f64) -> Weight {
        if value.is_nan() || value == f64::INFINITY {
            Weight::Unreachable
        } else {
            Weight::Finite(value)
        }
    }
}
