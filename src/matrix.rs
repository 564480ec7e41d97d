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

#[cfg(test)]
use rand::rngs::StdRng;
#[cfg(test)]
use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::cell_codec;
use crate::constants::NodeId;
use crate::error::Error;
use crate::weight::Weight;

/// A dense square grid indexed `[from][to]`, backed by a flat row-major
/// vector.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

/// Edge costs as supplied by the caller.
pub type CostMatrix = SquareMatrix<Weight>;
/// Best known path costs, as produced by the solver.
pub type DistanceMatrix = SquareMatrix<Weight>;
/// Second-to-last hop per (source, destination), `None` where no path is
/// known or on the diagonal.
pub type PredecessorMatrix = SquareMatrix<Option<NodeId>>;

impl<T: Copy> SquareMatrix<T> {
    pub fn filled(size: usize, value: T) -> Self {
        SquareMatrix {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Builds a matrix from nested rows. Every row must have exactly as many
    /// columns as there are rows, otherwise the grid is not square and the
    /// input is rejected.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(Error::NonSquareMatrix {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        Ok(SquareMatrix { size, cells })
    }

    pub fn get(&self, from: NodeId, to: NodeId) -> T {
        assert!(from < self.size && to < self.size, "cell index out of bounds");
        self.cells[from * self.size + to]
    }

    pub fn set(&mut self, from: NodeId, to: NodeId, value: T) {
        assert!(from < self.size && to < self.size, "cell index out of bounds");
        self.cells[from * self.size + to] = value;
    }

    pub fn get_size(&self) -> usize {
        self.size
    }
}

impl SquareMatrix<Weight> {
    /// Builds a cost matrix from plain floats, mapping `f64::INFINITY` (and
    /// NaN) to `Unreachable`.
    pub fn from_numbers(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        SquareMatrix::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Weight::from).collect())
                .collect(),
        )
    }

    /// Parses a matrix from newline-separated rows of whitespace-separated
    /// cells, each cell going through `cell_codec::parse`. Blank lines are
    /// skipped. Individual cells are parsed leniently, but ragged rows are
    /// rejected.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        let rows = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split_whitespace().map(cell_codec::parse).collect())
            .collect();
        SquareMatrix::from_rows(rows)
    }

    /// Renders the matrix in the same textual format `from_text` reads.
    pub fn to_text(&self) -> String {
        (0..self.size)
            .map(|from| {
                (0..self.size)
                    .map(|to| cell_codec::format(self.get(from, to)))
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Builds a random cost matrix with zero diagonal, mostly used for
    /// testing purposes. Off-diagonal cells get an integer-valued weight in
    /// [1, 100) with the given percent probability and stay unreachable
    /// otherwise. Integer values keep float sums exact, so independent
    /// algorithms can be compared for equality.
    #[cfg(test)]
    pub fn random(rng: &mut StdRng, size: usize, edge_percent: u32) -> Self {
        let mut matrix = SquareMatrix::filled(size, Weight::Unreachable);
        for from in 0..size {
            for to in 0..size {
                if from == to {
                    matrix.set(from, to, Weight::ZERO);
                } else if rng.gen_range(0, 100) < edge_percent {
                    matrix.set(from, to, Weight::Finite(rng.gen_range(1, 100) as f64));
                }
            }
        }
        matrix
    }
}
