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

use crate::constants::NodeId;
use crate::matrix::DistanceMatrix;
use crate::weight::Weight;

/// A cycle found in a final distance matrix: a single vertex `[v]` for a
/// negative self-loop, or a round trip `[i, j, i]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Cycle {
    nodes: Vec<NodeId>,
    weight: f64,
}

impl Cycle {
    pub fn get_nodes(&self) -> &Vec<NodeId> {
        &self.nodes
    }

    pub fn get_weight(&self) -> f64 {
        self.weight
    }
}

/// Finds the simplest cycle in a converged distance matrix.
///
/// A negative diagonal entry means the graph is unbounded below, so the most
/// negative self-loop takes priority over any round-trip search. Otherwise
/// the minimum over all pairs with both directions reachable wins. Only these
/// two shapes are reported; this is not a general minimum-mean-cycle
/// detector.
pub fn find_min_cycle(distances: &DistanceMatrix) -> Option<Cycle> {
    let size = distances.get_size();

    let mut worst_loop: Option<(NodeId, f64)> = None;
    for v in 0..size {
        if let Weight::Finite(weight) = distances.get(v, v) {
            if weight < 0.0 && worst_loop.map_or(true, |(_, w)| weight < w) {
                worst_loop = Some((v, weight));
            }
        }
    }
    if let Some((v, weight)) = worst_loop {
        return Some(Cycle {
            nodes: vec![v],
            weight,
        });
    }

    let mut best: Option<(NodeId, NodeId, f64)> = None;
    for i in 0..size {
        for j in i + 1..size {
            if let (Weight::Finite(out), Weight::Finite(back)) =
                (distances.get(i, j), distances.get(j, i))
            {
                let total = out + back;
                if best.map_or(true, |(_, _, w)| total < w) {
                    best = Some((i, j, total));
                }
            }
        }
    }
    best.map(|(i, j, weight)| Cycle {
        nodes: vec![i, j, i],
        weight,
    })
}
