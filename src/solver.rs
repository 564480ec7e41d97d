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

use serde::{Deserialize, Serialize};

use crate::cell_codec;
use crate::constants::NodeId;
use crate::matrix::{CostMatrix, DistanceMatrix, PredecessorMatrix, SquareMatrix};
use crate::step::Step;
use crate::weight::Weight;

/// The complete result of one solver run. All three parts are created fresh
/// per run and never mutated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    distances: DistanceMatrix,
    predecessors: PredecessorMatrix,
    steps: Vec<Step>,
}

impl Solution {
    pub fn get_distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn get_predecessors(&self) -> &PredecessorMatrix {
        &self.predecessors
    }

    /// The append-only, chronological step log. Empty for trace-free runs.
    pub fn get_steps(&self) -> &[Step] {
        &self.steps
    }
}

pub struct Solver {
    size: usize,
    distances: DistanceMatrix,
    predecessors: PredecessorMatrix,
    steps: Vec<Step>,
}

impl Solver {
    /// Runs the all-pairs relaxation over a private copy of `cost` and
    /// records every state transition: one step per cell update, plus
    /// boundary markers for the initial state and the end of each outer
    /// iteration. Every step snapshots the full distance matrix, which costs
    /// O(n²) memory per update; use `solve_trace_free` when only the final
    /// result matters.
    pub fn solve(cost: &CostMatrix) -> Solution {
        let mut solver = Solver::new(cost);
        solver.run_traced();
        solver.into_solution()
    }

    /// Like `solve`, but skips the step log entirely. Separate entry point so
    /// the traced loop carries no conditionals.
    pub fn solve_trace_free(cost: &CostMatrix) -> Solution {
        let mut solver = Solver::new(cost);
        solver.run_trace_free();
        solver.into_solution()
    }

    fn new(cost: &CostMatrix) -> Self {
        let size = cost.get_size();
        let distances = cost.clone();
        let mut predecessors = SquareMatrix::filled(size, None);
        for i in 0..size {
            for j in 0..size {
                if i != j && distances.get(i, j).is_reachable() {
                    predecessors.set(i, j, Some(i));
                }
            }
        }
        Solver {
            size,
            distances,
            predecessors,
            steps: Vec::new(),
        }
    }

    fn run_traced(&mut self) {
        self.steps.push(Step::boundary(None, self.distances.clone()));
        for k in 0..self.size {
            for i in 0..self.size {
                for j in 0..self.size {
                    let via_k = self.distances.get(i, k);
                    let onward = self.distances.get(k, j);
                    // both legs must be reachable before adding
                    if !via_k.is_reachable() || !onward.is_reachable() {
                        continue;
                    }
                    let candidate = via_k + onward;
                    let current = self.distances.get(i, j);
                    // strictly less than: an equal candidate never displaces
                    // the earlier-discovered path
                    if candidate < current {
                        trace!(
                            "improved {} -> {} via {}: {} -> {}",
                            i,
                            j,
                            k,
                            cell_codec::format(current),
                            cell_codec::format(candidate)
                        );
                        self.relax(k, i, j, candidate);
                        self.steps
                            .push(Step::update(k, i, j, current, candidate, self.distances.clone()));
                    }
                }
            }
            self.steps.push(Step::boundary(Some(k), self.distances.clone()));
        }
        debug!(
            "traced run finished: {} steps, {} updates",
            self.steps.len(),
            self.steps.iter().filter(|s| s.is_update()).count()
        );
    }

    fn run_trace_free(&mut self) {
        let mut updates = 0;
        for k in 0..self.size {
            for i in 0..self.size {
                for j in 0..self.size {
                    let via_k = self.distances.get(i, k);
                    let onward = self.distances.get(k, j);
                    if !via_k.is_reachable() || !onward.is_reachable() {
                        continue;
                    }
                    let candidate = via_k + onward;
                    if candidate < self.distances.get(i, j) {
                        self.relax(k, i, j, candidate);
                        updates += 1;
                    }
                }
            }
        }
        debug!("trace-free run finished after {} updates", updates);
    }

    fn relax(&mut self, k: NodeId, i: NodeId, j: NodeId, candidate: Weight) {
        self.distances.set(i, j, candidate);
        // the improved path ends with the k -> j leg, so its second-to-last
        // hop is inherited from there, not from i -> k
        self.predecessors.set(i, j, self.predecessors.get(k, j));
    }

    fn into_solution(self) -> Solution {
        Solution {
            distances: self.distances,
            predecessors: self.predecessors,
            steps: self.steps,
        }
    }
}
