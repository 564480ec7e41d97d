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

use crate::weight::Weight;

pub const UNREACHABLE_GLYPH: &str = "∞";

/// Renders a cell value for display. `Unreachable` becomes the infinity
/// glyph, finite values use the default float formatting (so negative
/// infinity renders with a leading minus).
pub fn format(value: Weight) -> String {
    match value {
        Weight::Unreachable => UNREACHABLE_GLYPH.to_string(),
        Weight::Finite(number) => number.to_string(),
    }
}

/// Parses a textual cell value. A blank string, the infinity glyph and any
/// ASCII-case-insensitive spelling of "inf" or "infinity" all mean
/// `Unreachable`; everything else goes through a float parse. Text that does
/// not parse is treated as "no edge" rather than an error, so interactive
/// matrix editing stays forgiving.
pub fn parse(text: &str) -> Weight {
    let text = text.trim();
    if text.is_empty()
        || text == UNREACHABLE_GLYPH
        || text.eq_ignore_ascii_case("inf")
        || text.eq_ignore_ascii_case("infinity")
    {
        return Weight::Unreachable;
    }
    match text.parse::<f64>() {
        Ok(number) => Weight::from(number),
        Err(_) => Weight::Unreachable,
    }
}
