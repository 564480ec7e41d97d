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

use crate::constants::NodeId;
use crate::matrix::PredecessorMatrix;

/// Rebuilds the concrete vertex sequence of the shortest path from `source`
/// to `destination` by walking the predecessor table backwards. Returns an
/// empty vector when no path is recorded, including the degenerate
/// `source == destination` case without a recorded self-loop.
///
/// A non-empty result starts with `source`, ends with `destination` and has
/// one entry per hop plus one. The table must come from a solver run;
/// a predecessor chain that does not lead back to `source` makes the walk
/// diverge.
pub fn reconstruct_path(
    predecessors: &PredecessorMatrix,
    source: NodeId,
    destination: NodeId,
) -> Vec<NodeId> {
    let size = predecessors.get_size();
    assert!(source < size, "invalid source vertex");
    assert!(destination < size, "invalid destination vertex");
    if predecessors.get(source, destination).is_none() {
        return vec![];
    }
    let mut nodes = vec![destination];
    let mut current = destination;
    while current != source {
        current = predecessors
            .get(source, current)
            .expect("predecessor chain broke before reaching the source");
        nodes.push(current);
    }
    nodes.reverse();
    nodes
}
