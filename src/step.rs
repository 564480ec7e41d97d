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

/// One recorded event of a solver run: either a relaxation that changed a
/// cell, or a boundary marker (the initial state, or the end of one outer
/// iteration). Steps are immutable once created and only ever appended to the
/// log in chronological order; the field names and that ordering are the
/// contract any replay layer is built against.
///
/// Every step carries a full snapshot of the distance matrix at that instant,
/// so a consumer can render any point of the run without replaying the log
/// from the start.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Step {
    k: Option<NodeId>,
    i: Option<NodeId>,
    j: Option<NodeId>,
    old_value: Option<Weight>,
    new_value: Option<Weight>,
    updated: bool,
    distances: DistanceMatrix,
}

impl Step {
    pub(crate) fn update(
        k: NodeId,
        i: NodeId,
        j: NodeId,
        old_value: Weight,
        new_value: Weight,
        distances: DistanceMatrix,
    ) -> Self {
        Step {
            k: Some(k),
            i: Some(i),
            j: Some(j),
            old_value: Some(old_value),
            new_value: Some(new_value),
            updated: true,
            distances,
        }
    }

    /// A marker with no cell of its own: `k` is `None` for the initial state
    /// and `Some(k)` at the end of outer iteration k.
    pub(crate) fn boundary(k: Option<NodeId>, distances: DistanceMatrix) -> Self {
        Step {
            k,
            i: None,
            j: None,
            old_value: None,
            new_value: None,
            updated: false,
            distances,
        }
    }

    pub fn get_k(&self) -> Option<NodeId> {
        self.k
    }

    pub fn get_i(&self) -> Option<NodeId> {
        self.i
    }

    pub fn get_j(&self) -> Option<NodeId> {
        self.j
    }

    pub fn get_old_value(&self) -> Option<Weight> {
        self.old_value
    }

    pub fn get_new_value(&self) -> Option<Weight> {
        self.new_value
    }

    pub fn is_update(&self) -> bool {
        self.updated
    }

    pub fn is_boundary(&self) -> bool {
        !self.updated && self.i.is_none()
    }

    pub fn get_distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}
